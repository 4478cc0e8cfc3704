//! Shared color constants for the UI.

use egui::Color32;

/// Forest green for active students and success toasts.
pub const COLOR_GREEN: Color32 = Color32::from_rgb(34, 139, 34);

/// Red for inactive students, errors and destructive actions.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Amber for warnings.
pub const COLOR_AMBER: Color32 = Color32::from_rgb(255, 193, 7);

/// Blue for informational toasts.
pub const COLOR_BLUE: Color32 = Color32::from_rgb(13, 110, 253);

/// Muted gray for secondary text.
pub const COLOR_MUTED: Color32 = Color32::from_rgb(108, 117, 125);
