//! Toast overlay, stacked in the top-right corner.

use chrono::{DateTime, Utc};
use dormmeal_business::{ActiveToast, ToastId, ToastLevel, ToastQueue};
use egui::{
    Align, Align2, Area, Button, Color32, CornerRadius, Frame, Id, Layout, Margin, Order, RichText,
    Stroke, Ui, vec2,
};

use crate::utils::colors::{COLOR_AMBER, COLOR_BLUE, COLOR_GREEN, COLOR_RED};

const TOAST_WIDTH: f32 = 300.0;

fn level_color(level: ToastLevel) -> Color32 {
    match level {
        ToastLevel::Info => COLOR_BLUE,
        ToastLevel::Success => COLOR_GREEN,
        ToastLevel::Warning => COLOR_AMBER,
        ToastLevel::Error => COLOR_RED,
    }
}

/// Renders the toasts alive at `now`.
///
/// Returns the toasts the user dismissed this frame.
pub fn toast_overlay(ctx: &egui::Context, queue: &ToastQueue, now: DateTime<Utc>) -> Vec<ToastId> {
    let mut dismissed = Vec::new();

    Area::new(Id::new("toast_overlay"))
        .order(Order::Foreground)
        .anchor(Align2::RIGHT_TOP, vec2(-16.0, 16.0))
        .interactable(true)
        .show(ctx, |ui| {
            ui.set_width(TOAST_WIDTH);
            for entry in queue.active(now) {
                if toast_card(ui, entry) {
                    dismissed.push(entry.id);
                }
                ui.add_space(6.0);
            }
        });

    if let Some(expiry) = queue.next_expiry() {
        let wait = (expiry - now).to_std().unwrap_or_default();
        ctx.request_repaint_after(wait);
    }

    dismissed
}

/// One toast. Returns `true` when its dismiss button was clicked.
fn toast_card(ui: &mut Ui, entry: &ActiveToast) -> bool {
    let color = level_color(entry.toast.level);

    Frame::popup(ui.style())
        .stroke(Stroke::new(1.0, color))
        .corner_radius(CornerRadius::same(6))
        .inner_margin(Margin::symmetric(10, 8))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(entry.toast.level.icon()).color(color));
                ui.label(&entry.toast.message);
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.add(Button::new("✕").frame(false))
                        .on_hover_text("Dismiss")
                        .clicked()
                })
                .inner
            })
            .inner
        })
        .inner
}
