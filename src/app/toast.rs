// Transient bottom-center notifications (share confirmations and the like).

use std::time::{Duration, Instant};

use eframe::egui::{self, Align2, Color32, RichText, Rounding, Stroke};

use crate::ui_constants::toast;

struct Toast {
    text: String,
    expires_at: Instant,
}

#[derive(Default)]
pub struct Toasts {
    items: Vec<Toast>,
}

impl Toasts {
    pub fn push(&mut self, text: impl Into<String>) {
        self.items.push(Toast {
            text: text.into(),
            expires_at: Instant::now() + Duration::from_millis(toast::LIFETIME_MS),
        });
    }

    pub fn draw(&mut self, ctx: &egui::Context) {
        self.retain_active(Instant::now());
        if self.items.is_empty() {
            return;
        }
        // Keep frames coming until the last toast expires.
        ctx.request_repaint();

        egui::Area::new(egui::Id::new("toasts"))
            .order(egui::Order::Foreground)
            .anchor(Align2::CENTER_BOTTOM, egui::vec2(0.0, -toast::BOTTOM_MARGIN))
            .show(ctx, |ui| {
                for item in &self.items {
                    egui::Frame::default()
                        .fill(Color32::from_rgb(28, 28, 28))
                        .stroke(Stroke::new(1.0, Color32::from_gray(60)))
                        .rounding(Rounding::same(8.0))
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            ui.label(RichText::new(&item.text).color(Color32::WHITE));
                        });
                }
            });
    }

    fn retain_active(&mut self, now: Instant) {
        self.items.retain(|t| t.expires_at > now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_expire_after_their_lifetime() {
        let mut toasts = Toasts::default();
        toasts.push("Copied to clipboard");
        assert_eq!(toasts.items.len(), 1);

        let later = Instant::now() + Duration::from_millis(toast::LIFETIME_MS + 100);
        toasts.retain_active(later);
        assert!(toasts.items.is_empty());
    }
}
