// Pure presentation of one news card: selection bars, header, image with
// title plaque, summary with attribution, and the action footer. The card
// layer (image + text + footer) is drawn translated by the animator's
// offset and faded by its opacity; chrome above it stays put.
//
// The renderer owns no state: it reads what it is given and reports user
// intents upward. Navigation and like mutations happen in the frame loop.

use eframe::egui::{self, Align2, Color32, FontId, Rounding, Sense};

use crate::app::animator::TransformState;
use crate::news::NewsItem;
use crate::ui_constants::{card, spacing};
use crate::views::ui_helpers::{faded, vertical_gradient};

/// User intents emitted by the card for the frame loop to act on.
#[derive(Default)]
pub struct CardIntent {
    pub like_pressed: bool,
    pub follow_pressed: bool,
    pub share_pressed: bool,
    /// Pointer movement this frame while a drag is in progress.
    pub drag_delta: Option<egui::Vec2>,
    pub drag_released: bool,
}

pub fn news_card(
    ui: &mut egui::Ui,
    item: &NewsItem,
    liked: bool,
    transform: TransformState,
    cover: Option<&egui::TextureHandle>,
    bar_index: usize,
    bar_count: usize,
) -> CardIntent {
    let mut intent = CardIntent::default();
    let painter = ui.painter().clone();
    let op = transform.opacity;
    let id = ui.id().with("news_card");

    let full = ui.max_rect().shrink2(egui::vec2(spacing::LARGE, 0.0));

    // Selection bars, one per item in the deck.
    let bars_top = full.top() + spacing::MEDIUM;
    let bar_gap = spacing::MEDIUM;
    let bar_w = (full.width() - bar_gap * (bar_count.saturating_sub(1)) as f32) / bar_count as f32;
    for i in 0..bar_count {
        let x = full.left() + i as f32 * (bar_w + bar_gap);
        let rect = egui::Rect::from_min_size(
            egui::pos2(x, bars_top),
            egui::vec2(bar_w, card::BAR_HEIGHT),
        );
        let color = if i == bar_index {
            Color32::WHITE
        } else {
            Color32::from_rgb(68, 68, 68)
        };
        painter.rect_filled(rect, Rounding::same(2.0), color);
    }

    // Header: source name on the left, passive icons on the right.
    let header_top = bars_top + card::BAR_HEIGHT + spacing::LARGE;
    painter.text(
        egui::pos2(full.left(), header_top),
        Align2::LEFT_TOP,
        &item.news_source,
        FontId::proportional(18.0),
        Color32::WHITE,
    );
    let close_rect = painter.text(
        egui::pos2(full.right(), header_top),
        Align2::RIGHT_TOP,
        "✖",
        FontId::proportional(18.0),
        Color32::WHITE,
    );
    painter.text(
        egui::pos2(close_rect.left() - spacing::LARGE, header_top),
        Align2::RIGHT_TOP,
        "⋯",
        FontId::proportional(18.0),
        Color32::WHITE,
    );

    // Everything below the header slides and fades as one layer.
    let wrapper_base = egui::Rect::from_min_max(
        egui::pos2(full.left(), header_top + 24.0 + spacing::MEDIUM),
        egui::pos2(full.right(), ui.max_rect().bottom() - spacing::MEDIUM),
    );

    // Swipe surface first, action buttons afterwards so they win the hit
    // test. The drag is sensed on the untranslated rect; egui keeps feeding
    // the same response once a drag is in flight.
    let drag = ui.interact(wrapper_base, id.with("drag"), Sense::drag());
    if drag.dragged() {
        intent.drag_delta = Some(drag.drag_delta());
    }
    intent.drag_released = drag.drag_released();

    let wrapper = wrapper_base.translate(egui::vec2(transform.offset_x, 0.0));
    let card_rect = egui::Rect::from_min_max(
        wrapper.min,
        egui::pos2(
            wrapper.right(),
            wrapper.bottom() - card::FOOTER_HEIGHT - spacing::MEDIUM,
        ),
    );

    painter.rect_filled(
        card_rect,
        Rounding::same(card::ROUNDING),
        faded(Color32::from_rgb(42, 42, 42), op),
    );

    // Image section: top half of the card, title plaque over its lower edge.
    let image_rect = egui::Rect::from_min_max(
        card_rect.min,
        egui::pos2(card_rect.right(), card_rect.center().y),
    );
    let image_rounding = Rounding {
        nw: card::ROUNDING,
        ne: card::ROUNDING,
        sw: 0.0,
        se: 0.0,
    };
    match cover {
        Some(tex) => {
            egui::Image::new(tex)
                .rounding(image_rounding)
                .tint(faded(Color32::WHITE, op))
                .paint_at(ui, image_rect);
        }
        None => {
            // Cover not loaded (yet, or at all): flat placeholder fill.
            painter.rect_filled(image_rect, image_rounding, faded(Color32::from_rgb(60, 60, 60), op));
        }
    }
    let gradient_rect = egui::Rect::from_min_max(
        egui::pos2(image_rect.left(), image_rect.center().y),
        image_rect.max,
    );
    vertical_gradient(
        &painter,
        gradient_rect,
        Color32::TRANSPARENT,
        faded(Color32::from_black_alpha(204), op),
    );

    let title_wrap = image_rect.width() * card::TITLE_MAX_WIDTH - 2.0 * card::TITLE_PADDING;
    let title_galley = painter.layout(
        item.title.clone(),
        FontId::proportional(18.0),
        faded(Color32::WHITE, op),
        title_wrap,
    );
    let plaque = egui::Rect::from_min_size(
        egui::pos2(
            image_rect.left() + spacing::LARGE,
            image_rect.bottom() - spacing::LARGE - title_galley.size().y - 2.0 * card::TITLE_PADDING,
        ),
        title_galley.size() + egui::vec2(2.0 * card::TITLE_PADDING, 2.0 * card::TITLE_PADDING),
    );
    painter.rect_filled(
        plaque,
        Rounding::same(card::TITLE_ROUNDING),
        faded(Color32::from_black_alpha(178), op),
    );
    painter.galley(
        plaque.min + egui::vec2(card::TITLE_PADDING, card::TITLE_PADDING),
        title_galley,
        faded(Color32::WHITE, op),
    );

    // Summary section: lower half, clipped to the card.
    let content_rect = egui::Rect::from_min_max(
        egui::pos2(card_rect.left(), card_rect.center().y),
        card_rect.max,
    )
    .shrink(card::CONTENT_PADDING);
    let content_painter = painter.with_clip_rect(content_rect);
    let summary_galley = content_painter.layout(
        item.summary.clone(),
        FontId::proportional(15.0),
        faded(Color32::from_rgb(224, 224, 224), op),
        content_rect.width(),
    );
    let summary_h = summary_galley.size().y;
    content_painter.galley(
        content_rect.min,
        summary_galley,
        faded(Color32::from_rgb(224, 224, 224), op),
    );
    let attr_top = content_rect.top() + summary_h + spacing::LARGE;
    content_painter.text(
        egui::pos2(content_rect.left(), attr_top),
        Align2::LEFT_TOP,
        "Summarized News Story by",
        FontId::proportional(12.0),
        faded(Color32::from_gray(136), op),
    );
    content_painter.text(
        egui::pos2(content_rect.left(), attr_top + 16.0),
        Align2::LEFT_TOP,
        "The Gist - AI News App",
        FontId::proportional(12.0),
        faded(Color32::from_rgb(74, 222, 128), op),
    );

    // Footer: heart, follow button, share. Side action zones are 60px wide.
    let footer = egui::Rect::from_min_max(
        egui::pos2(wrapper.left(), card_rect.bottom() + spacing::MEDIUM),
        wrapper.max,
    );
    let side_w = 60.0;

    let heart_center = egui::pos2(footer.left() + side_w / 2.0, footer.center().y);
    let heart_color = if liked {
        Color32::from_rgb(255, 71, 87)
    } else {
        Color32::WHITE
    };
    let heart_rect = painter.text(
        heart_center,
        Align2::CENTER_CENTER,
        "❤",
        FontId::proportional(30.0),
        faded(heart_color, op),
    );
    intent.like_pressed = ui
        .interact(heart_rect.expand(spacing::MEDIUM), id.with("like"), Sense::click())
        .clicked();

    let share_center = egui::pos2(footer.right() - side_w / 2.0, footer.center().y);
    let share_rect = painter.text(
        share_center,
        Align2::CENTER_CENTER,
        "➤",
        FontId::proportional(26.0),
        faded(Color32::WHITE, op),
    );
    intent.share_pressed = ui
        .interact(share_rect.expand(spacing::MEDIUM), id.with("share"), Sense::click())
        .clicked();

    let follow_rect = egui::Rect::from_min_max(
        egui::pos2(footer.left() + side_w + spacing::LARGE, footer.top() + spacing::MEDIUM),
        egui::pos2(
            footer.right() - side_w - spacing::LARGE,
            footer.bottom() - spacing::MEDIUM,
        ),
    );
    painter.rect_filled(
        follow_rect,
        Rounding::same(card::FOLLOW_ROUNDING),
        faded(Color32::WHITE, op),
    );
    painter.text(
        follow_rect.center(),
        Align2::CENTER_CENTER,
        "Follow News Source",
        FontId::proportional(14.0),
        faded(Color32::BLACK, op),
    );
    intent.follow_pressed = ui
        .interact(follow_rect, id.with("follow"), Sense::click())
        .clicked();

    intent
}
