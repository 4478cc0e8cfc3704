mod admin_layout;
mod status_badge;
pub mod toasts;
pub mod users;

pub use admin_layout::{admin_header, card};
pub use status_badge::status_badge;
pub use toasts::toast_overlay;
pub use users::{student_directory, user_modals};
