//! Row rendering for the student directory table.

use dormmeal_business::User;
use egui_extras::TableRow;

use super::cells::{
    RowActionKind, draw_cell_bottom_border, render_action_buttons, render_name_cell,
    render_status_cell, render_text_cell,
};

/// Renders one student and returns the action icon clicked, if any.
#[inline]
pub fn render_user_row(row: &mut TableRow<'_, '_>, user: &User) -> Option<RowActionKind> {
    let mut action = None;

    row.col(|ui| {
        render_name_cell(ui, &user.name);
        draw_cell_bottom_border(ui);
    });
    row.col(|ui| {
        render_text_cell(ui, &user.email);
        draw_cell_bottom_border(ui);
    });
    row.col(|ui| {
        render_text_cell(ui, &user.room_number);
        draw_cell_bottom_border(ui);
    });
    row.col(|ui| {
        render_status_cell(ui, user.status);
        draw_cell_bottom_border(ui);
    });
    row.col(|ui| {
        action = render_action_buttons(ui);
        draw_cell_bottom_border(ui);
    });

    action
}
