//! The student directory page: state, API client and async commands.

mod api;
mod commands;
mod state;

pub use api::{ApiResult, HttpUserApi, UserApi, UserApiError};
pub use commands::{
    ADD_STUDENT_PLACEHOLDER, DELETE_FAILED, DELETE_SUCCEEDED, Dispatcher, FETCH_FAILED, Spawned,
    UPDATE_FAILED, UPDATE_SUCCEEDED, UserCommand,
};
pub use state::{
    DraftField, ModalKind, Mutation, UserDraft, UserManagementAction, UserManagementState,
};
