//! Cell renderers for the student directory table.

use dormmeal_business::UserStatus;
use egui::{Align, Button, Layout, RichText, Stroke, Ui};

use crate::widgets::status_badge;

/// What a row's action icons asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowActionKind {
    View,
    Edit,
    Delete,
}

pub const VIEW_ICON: &str = "👁";
pub const EDIT_ICON: &str = "✏";
pub const DELETE_ICON: &str = "🗑";

#[inline]
pub fn render_name_cell(ui: &mut Ui, name: &str) {
    ui.label(RichText::new(name).strong());
}

#[inline]
pub fn render_text_cell(ui: &mut Ui, text: &str) {
    ui.label(text);
}

#[inline]
pub fn render_status_cell(ui: &mut Ui, status: UserStatus) {
    status_badge(ui, status);
}

/// View, edit and delete icons, right aligned.
#[inline]
pub fn render_action_buttons(ui: &mut Ui) -> Option<RowActionKind> {
    let mut action = None;

    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
        // Right-to-left, so the last one added is leftmost.
        if ui
            .add(Button::new(DELETE_ICON).frame(false))
            .on_hover_text("Delete student")
            .clicked()
        {
            action = Some(RowActionKind::Delete);
        }
        if ui
            .add(Button::new(EDIT_ICON).frame(false))
            .on_hover_text("Edit student")
            .clicked()
        {
            action = Some(RowActionKind::Edit);
        }
        if ui
            .add(Button::new(VIEW_ICON).frame(false))
            .on_hover_text("View details")
            .clicked()
        {
            action = Some(RowActionKind::View);
        }
    });

    action
}

/// Draws the thin separator under a row.
#[inline]
pub fn draw_cell_bottom_border(ui: &mut Ui) {
    let rect = ui.max_rect();
    let border_color = ui.visuals().widgets.noninteractive.bg_stroke.color;
    ui.painter().hline(
        rect.left()..=rect.right(),
        rect.bottom(),
        Stroke::new(1.0, border_color),
    );
}
