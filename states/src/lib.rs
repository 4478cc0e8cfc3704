//! Reducer store shared by the dormmeal UI and business crates.
//!
//! State lives on the UI thread inside a [`Store`]. It changes only through
//! [`Reducer::reduce`], either directly via [`Store::dispatch`] or from async
//! work through an [`Updater`], whose actions are applied on the next
//! [`Store::sync`].

mod error;
mod store;
mod task;
mod updater;

pub use error::StoreError;
pub use store::{Reducer, Store};
pub use task::{TaskId, TaskIdGen};
pub use updater::{RepaintHook, Updater};
