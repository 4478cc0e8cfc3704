use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("store for `{action}` was dropped, action discarded")]
    Disconnected { action: &'static str },
}

impl StoreError {
    pub fn disconnected(action: &'static str) -> Self {
        Self::Disconnected { action }
    }
}
