use dormmeal_business::UserStatus;
use egui::{CornerRadius, Frame, Margin, Response, RichText, Ui};

use crate::utils::colors::{COLOR_GREEN, COLOR_RED};

/// Pill showing the raw status value, green for active and red otherwise.
pub fn status_badge(ui: &mut Ui, status: UserStatus) -> Response {
    let color = if status.is_active() {
        COLOR_GREEN
    } else {
        COLOR_RED
    };

    Frame::NONE
        .fill(color.gamma_multiply(0.15))
        .corner_radius(CornerRadius::same(10))
        .inner_margin(Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(status.as_str()).small().color(color));
        })
        .response
}
