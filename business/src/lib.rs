mod config;
pub mod filter;
pub mod toast;
mod user;
pub mod user_management;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{BusinessConfig, ConfigError, DEFAULT_REQUEST_TIMEOUT, RawConfig};
pub use filter::{filter_users, matches_search};
pub use toast::{ActiveToast, DEFAULT_TOAST_LIFETIME, Toast, ToastId, ToastLevel, ToastQueue};
pub use user::{User, UserId, UserStatus};
