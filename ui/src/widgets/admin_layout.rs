//! Chrome shared by admin pages: a title row with one action button, and
//! bordered cards for the page content.

use egui::{Align, Button, CornerRadius, Frame, Layout, Margin, RichText, Stroke, Ui};

use crate::utils::colors::COLOR_MUTED;

/// Renders the page title, subtitle and the action button.
///
/// Returns `true` if the action button was clicked.
pub fn admin_header(ui: &mut Ui, title: &str, subtitle: &str, action: &str) -> bool {
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.heading(title);
            ui.label(RichText::new(subtitle).color(COLOR_MUTED));
        });

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            ui.add(Button::new(action)).clicked()
        })
        .inner
    })
    .inner
}

/// A bordered card with a title row.
///
/// `header_extra` fills the right side of the title row; `body` renders below it.
pub fn card<R>(
    ui: &mut Ui,
    title: &str,
    header_extra: impl FnOnce(&mut Ui),
    body: impl FnOnce(&mut Ui) -> R,
) -> R {
    let stroke = ui.visuals().widgets.noninteractive.bg_stroke;

    Frame::NONE
        .stroke(Stroke::new(1.0, stroke.color))
        .corner_radius(CornerRadius::same(6))
        .inner_margin(Margin::same(12))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.strong(title);
                ui.with_layout(Layout::right_to_left(Align::Center), header_extra);
            });
            ui.add_space(8.0);
            body(ui)
        })
        .inner
}
