//! Async commands for the user management page.
//!
//! UI code never awaits anything. It hands a [`UserCommand`] to the
//! [`Dispatcher`], which spawns the work on tokio and reports results back as
//! [`UserManagementAction`]s through an `Updater`. The page applies them on
//! its next `Store::sync`.
//!
//! Update and delete run their follow-up fetch in the same task, so one
//! confirm produces one mutation call and, on success, one list call.

use std::sync::Arc;

use dormmeal_states::{TaskId, TaskIdGen, Updater};
use log::{debug, info, warn};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use super::api::UserApi;
use super::state::{ModalKind, Mutation, UserManagementAction};
use crate::User;
use crate::toast::Toast;

pub const FETCH_FAILED: &str = "Failed to fetch users";
pub const UPDATE_SUCCEEDED: &str = "Student updated successfully";
pub const UPDATE_FAILED: &str = "Failed to update student";
pub const DELETE_SUCCEEDED: &str = "Student deleted successfully";
pub const DELETE_FAILED: &str = "Failed to delete student";
pub const ADD_STUDENT_PLACEHOLDER: &str = "This would open a form to add a new student";

#[derive(Debug, Clone, PartialEq)]
pub enum UserCommand {
    /// Reload the whole list. Only the initial load shows the loading state.
    Fetch { show_loading: bool },
    /// Send the record (draft already applied), then reload on success.
    Update(User),
    /// Delete the record, drop it locally, then reload on success.
    Delete(User),
}

impl UserCommand {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Fetch { .. } => "fetch_users",
            Self::Update(_) => "update_user",
            Self::Delete(_) => "delete_user",
        }
    }
}

/// A spawned command.
#[derive(Debug)]
pub struct Spawned {
    pub id: TaskId,
    pub handle: JoinHandle<()>,
}

pub struct Dispatcher {
    runtime: Handle,
    api: Arc<dyn UserApi>,
    updater: Updater<UserManagementAction>,
    ids: TaskIdGen,
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("updater", &self.updater)
            .field("ids", &self.ids)
            .finish_non_exhaustive()
    }
}

impl Dispatcher {
    pub fn new(
        runtime: Handle,
        api: Arc<dyn UserApi>,
        updater: Updater<UserManagementAction>,
    ) -> Self {
        Self {
            runtime,
            api,
            updater,
            ids: TaskIdGen::new(),
        }
    }

    /// Spawns `command`. Tasks are never cancelled or de-duplicated.
    ///
    /// The in-flight markers (`SetLoading`, `MutationStarted`) are queued
    /// before the task starts so the next frame already reflects them.
    pub fn dispatch(&mut self, command: UserCommand) -> Spawned {
        let id = self.ids.next_id(command.label());
        let api = Arc::clone(&self.api);
        let updater = self.updater.clone();
        info!("{id}: dispatching {}", command.label());

        let handle = match command {
            UserCommand::Fetch { show_loading } => {
                if show_loading {
                    updater.set(UserManagementAction::SetLoading(true));
                }
                self.runtime.spawn(async move {
                    fetch_users(id, api.as_ref(), &updater).await;
                    if show_loading {
                        updater.set(UserManagementAction::SetLoading(false));
                    }
                })
            }
            UserCommand::Update(user) => {
                updater.set(UserManagementAction::MutationStarted(Mutation::Update));
                self.runtime
                    .spawn(async move { update_user(id, api.as_ref(), &updater, user).await })
            }
            UserCommand::Delete(user) => {
                updater.set(UserManagementAction::MutationStarted(Mutation::Delete));
                self.runtime
                    .spawn(async move { delete_user(id, api.as_ref(), &updater, user).await })
            }
        };

        Spawned { id, handle }
    }

    /// Number of commands dispatched so far.
    pub fn dispatched(&self) -> u64 {
        self.ids.issued()
    }
}

async fn fetch_users(id: TaskId, api: &dyn UserApi, updater: &Updater<UserManagementAction>) {
    match api.get_users().await {
        Ok(users) => {
            debug!("{id}: fetched {} user(s)", users.len());
            updater.set(UserManagementAction::SetUsers(users));
        }
        Err(err) => {
            warn!("{id}: {FETCH_FAILED}: {err}");
            updater.set(UserManagementAction::Notify(Toast::error(FETCH_FAILED)));
        }
    }
}

async fn update_user(
    id: TaskId,
    api: &dyn UserApi,
    updater: &Updater<UserManagementAction>,
    user: User,
) {
    let result = api.update_user(user.id, &user).await;
    updater.set(UserManagementAction::MutationFinished(Mutation::Update));

    match result {
        Ok(()) => {
            debug!("{id}: updated user {}", user.id);
            updater.set(UserManagementAction::Notify(Toast::success(UPDATE_SUCCEEDED)));
            updater.set(UserManagementAction::CloseModal(ModalKind::Edit));
            fetch_users(id, api, updater).await;
        }
        Err(err) => {
            warn!("{id}: {UPDATE_FAILED} {}: {err}", user.id);
            updater.set(UserManagementAction::Notify(Toast::error(UPDATE_FAILED)));
        }
    }
}

async fn delete_user(
    id: TaskId,
    api: &dyn UserApi,
    updater: &Updater<UserManagementAction>,
    user: User,
) {
    let result = api.delete_user(user.id).await;
    updater.set(UserManagementAction::MutationFinished(Mutation::Delete));

    match result {
        Ok(()) => {
            debug!("{id}: deleted user {}", user.id);
            updater.set(UserManagementAction::Notify(Toast::success(DELETE_SUCCEEDED)));
            updater.set(UserManagementAction::CloseModal(ModalKind::Delete));
            updater.set(UserManagementAction::RemoveUser(user.id));
            fetch_users(id, api, updater).await;
        }
        Err(err) => {
            warn!("{id}: {DELETE_FAILED} {}: {err}", user.id);
            updater.set(UserManagementAction::Notify(Toast::error(DELETE_FAILED)));
        }
    }
}
