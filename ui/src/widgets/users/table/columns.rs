//! Column definitions for the student directory table.

use egui_extras::Column;

pub const ROOM_WIDTH: f32 = 90.0;
pub const STATUS_WIDTH: f32 = 100.0;
pub const ACTIONS_WIDTH: f32 = 130.0;
pub const ROW_HEIGHT: f32 = 32.0;
pub const HEADER_HEIGHT: f32 = 24.0;

/// Columns in order: Name, Email, Room, Status, Actions.
///
/// Name and email share the free width; the rest are fixed.
#[inline]
pub fn table_columns() -> Vec<Column> {
    vec![
        Column::remainder().at_least(140.0), // Name
        Column::remainder().at_least(180.0), // Email
        Column::exact(ROOM_WIDTH),
        Column::exact(STATUS_WIDTH),
        Column::exact(ACTIONS_WIDTH),
    ]
}
