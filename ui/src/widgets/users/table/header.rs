//! Table header for the student directory.

use egui::{RichText, Ui};
use egui_extras::TableRow;

use crate::utils::colors::COLOR_MUTED;

pub const HEADERS: [&str; 5] = ["Name", "Email", "Room", "Status", "Actions"];

#[inline]
pub fn render_table_header(header: &mut TableRow<'_, '_>) {
    for label in HEADERS {
        header.col(|ui| {
            render_header_cell(ui, label);
        });
    }
}

#[inline]
fn render_header_cell(ui: &mut Ui, label: &str) {
    ui.label(RichText::new(label).small().strong().color(COLOR_MUTED));
}
