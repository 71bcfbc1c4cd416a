// Cards screen frame logic: poll cover results, advance the animator, draw
// the card, then apply the intents it emitted.

use std::time::Instant;

use eframe::egui::{self, Color32};

use crate::views::card::{news_card, CardIntent};
use crate::views::ui_helpers::vertical_gradient;

use super::animator::AnimatorEvent;
use super::{GistApp, Screen};

pub(super) fn update_cards(app: &mut GistApp, ctx: &egui::Context) {
    app.images.poll_incoming(ctx);
    app.images
        .schedule_around(ctx, &app.store, app.carousel.current_index());

    let now = Instant::now();
    let width = ctx.screen_rect().width();
    if let Some(AnimatorEvent::Committed(direction)) = app.animator.tick(now) {
        app.carousel.navigate(direction);
        app.images
            .schedule_around(ctx, &app.store, app.carousel.current_index());
    }
    if app.animator.is_animating() {
        ctx.request_repaint();
    }

    let item = app.current_item().clone();
    let transform = app.animator.transform();
    let liked = app.carousel.is_current_liked();
    let index = app.carousel.current_index();
    let count = app.carousel.len();

    let mut intent = CardIntent::default();
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            vertical_gradient(
                ui.painter(),
                ui.max_rect(),
                Color32::from_rgb(45, 45, 45),
                Color32::from_rgb(5, 5, 5),
            );
            intent = news_card(
                ui,
                &item,
                liked,
                transform,
                app.images.texture(index),
                index,
                count,
            );
        });

    if let Some(delta) = intent.drag_delta {
        app.animator.on_drag_delta(delta, width);
    } else if app.animator.is_dragging() && !intent.drag_released {
        // The host took the gesture away mid-drag; return to neutral.
        app.animator.interrupt(now);
    }
    if intent.drag_released {
        app.animator.on_drag_release(app.carousel.gate(), width, now);
    }

    if intent.like_pressed {
        app.carousel.toggle_like();
    }
    if intent.share_pressed {
        let outcome = app.bridge.share(ctx, &item);
        app.toasts.push(outcome.to_string());
    }
    if intent.follow_pressed {
        if let Some(surface) = app.bridge.follow(&item) {
            app.embedded = Some(surface);
            app.screen = Screen::Browser;
        }
    }
}
