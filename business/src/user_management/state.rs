//! State for the user management page.
//!
//! The page owns one [`UserManagementState`] and mutates it only through
//! [`Reducer::reduce`]. UI code reads the state and dispatches actions; async
//! commands report back with the same actions through an `Updater`.
//!
//! Notes:
//! - Closing a modal clears only that modal's flag. The selected student is
//!   kept until another row action replaces it, so reopening a modal without
//!   a new selection shows the previous student again.
//! - `RemoveUser` is a local-only transition. It never talks to the network.
//! - The edit draft belongs to the student it was seeded from. Selecting a
//!   different student closes the edit modal, and a draft never applies to
//!   anyone else.

use std::time::Duration;

use chrono::{DateTime, Utc};
use dormmeal_states::Reducer;

use crate::filter::filter_users;
use crate::toast::{Toast, ToastId, ToastQueue};
use crate::{User, UserId, UserStatus};

/// The three dialogs the page can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalKind {
    View,
    Edit,
    Delete,
}

impl ModalKind {
    pub const ALL: [Self; 3] = [Self::View, Self::Edit, Self::Delete];
}

/// Remote mutations that can be in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mutation {
    Update,
    Delete,
}

/// One edit to the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftField {
    Name(String),
    Email(String),
    RoomNumber(String),
    Status(UserStatus),
}

/// Editable copy of the selected student's fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub room_number: String,
    pub status: UserStatus,
}

impl UserDraft {
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            room_number: user.room_number.clone(),
            status: user.status,
        }
    }

    /// `user` with the draft fields applied. Id and read-only fields are kept.
    pub fn apply_to(&self, user: &User) -> User {
        User {
            name: self.name.clone(),
            email: self.email.clone(),
            room_number: self.room_number.clone(),
            status: self.status,
            ..user.clone()
        }
    }

    /// Name and email must be non-blank before the draft can be saved.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.email.trim().is_empty()
    }

    fn set(&mut self, field: DraftField) {
        match field {
            DraftField::Name(name) => self.name = name,
            DraftField::Email(email) => self.email = email,
            DraftField::RoomNumber(room) => self.room_number = room,
            DraftField::Status(status) => self.status = status,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UserManagementAction {
    /// Replace the loaded list wholesale.
    SetUsers(Vec<User>),
    SetSearch(String),
    SelectUser(User),
    /// Opening [`ModalKind::Edit`] seeds the draft from the selection.
    OpenModal(ModalKind),
    CloseModal(ModalKind),
    SetLoading(bool),
    EditDraft(DraftField),
    /// Drop matching rows locally.
    RemoveUser(UserId),
    MutationStarted(Mutation),
    MutationFinished(Mutation),
    Notify(Toast),
    DismissToast(ToastId),
    /// Drop toasts whose lifetime elapsed at the given instant.
    ExpireToasts(DateTime<Utc>),
}

#[derive(Debug, Clone, Default)]
pub struct UserManagementState {
    users: Vec<User>,
    search: String,
    selected: Option<User>,
    view_open: bool,
    edit_open: bool,
    delete_open: bool,
    loading: bool,
    draft: UserDraft,
    draft_owner: Option<UserId>,
    updating: bool,
    deleting: bool,
    toasts: ToastQueue,
}

impl UserManagementState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_toast_lifetime(lifetime: Duration) -> Self {
        Self {
            toasts: ToastQueue::with_lifetime(lifetime),
            ..Self::default()
        }
    }

    /// Every loaded student, in service order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Students matching the current search term.
    pub fn visible_users(&self) -> Vec<&User> {
        filter_users(&self.users, &self.search)
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn selected(&self) -> Option<&User> {
        self.selected.as_ref()
    }

    pub fn is_modal_open(&self, kind: ModalKind) -> bool {
        match kind {
            ModalKind::View => self.view_open,
            ModalKind::Edit => self.edit_open,
            ModalKind::Delete => self.delete_open,
        }
    }

    /// The student a modal should render, if that modal is showing.
    ///
    /// A raised flag without a selection renders nothing.
    pub fn modal_user(&self, kind: ModalKind) -> Option<&User> {
        if self.is_modal_open(kind) {
            self.selected.as_ref()
        } else {
            None
        }
    }

    /// Whether any dialog is on screen. Dialogs block the directory.
    pub fn is_dialog_showing(&self) -> bool {
        ModalKind::ALL
            .into_iter()
            .any(|kind| self.modal_user(kind).is_some())
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn draft(&self) -> &UserDraft {
        &self.draft
    }

    pub fn is_pending(&self, mutation: Mutation) -> bool {
        match mutation {
            Mutation::Update => self.updating,
            Mutation::Delete => self.deleting,
        }
    }

    /// Whether the draft was seeded from the current selection.
    pub fn draft_matches_selection(&self) -> bool {
        match (&self.selected, &self.draft_owner) {
            (Some(user), Some(owner)) => user.id == *owner,
            _ => false,
        }
    }

    /// Whether the edit modal's save button is enabled.
    pub fn can_save(&self) -> bool {
        self.draft_matches_selection() && self.draft.is_complete() && !self.updating
    }

    pub fn can_delete(&self) -> bool {
        !self.deleting
    }

    /// The selection with the draft applied, ready to send.
    ///
    /// `None` when the draft was seeded from someone else.
    pub fn edited_user(&self) -> Option<User> {
        if !self.draft_matches_selection() {
            return None;
        }
        self.selected
            .as_ref()
            .map(|user| self.draft.apply_to(user))
    }

    pub fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    fn set_modal(&mut self, kind: ModalKind, open: bool) {
        match kind {
            ModalKind::View => self.view_open = open,
            ModalKind::Edit => self.edit_open = open,
            ModalKind::Delete => self.delete_open = open,
        }
    }

    fn set_pending(&mut self, mutation: Mutation, pending: bool) {
        match mutation {
            Mutation::Update => self.updating = pending,
            Mutation::Delete => self.deleting = pending,
        }
    }
}

impl Reducer for UserManagementState {
    type Action = UserManagementAction;

    fn reduce(&mut self, action: Self::Action) {
        match action {
            UserManagementAction::SetUsers(users) => self.users = users,
            UserManagementAction::SetSearch(term) => self.search = term,
            UserManagementAction::SelectUser(user) => {
                if self.edit_open && self.draft_owner.as_ref() != Some(&user.id) {
                    self.edit_open = false;
                }
                self.selected = Some(user);
            }
            UserManagementAction::OpenModal(kind) => {
                if kind == ModalKind::Edit
                    && let Some(user) = &self.selected
                {
                    self.draft = UserDraft::from_user(user);
                    self.draft_owner = Some(user.id.clone());
                }
                self.set_modal(kind, true);
            }
            UserManagementAction::CloseModal(kind) => self.set_modal(kind, false),
            UserManagementAction::SetLoading(loading) => self.loading = loading,
            UserManagementAction::EditDraft(field) => self.draft.set(field),
            UserManagementAction::RemoveUser(id) => self.users.retain(|user| user.id != id),
            UserManagementAction::MutationStarted(mutation) => self.set_pending(mutation, true),
            UserManagementAction::MutationFinished(mutation) => {
                self.set_pending(mutation, false);
            }
            UserManagementAction::Notify(toast) => {
                self.toasts.push(toast);
            }
            UserManagementAction::DismissToast(id) => {
                self.toasts.dismiss(id);
            }
            UserManagementAction::ExpireToasts(now) => {
                self.toasts.expire(now);
            }
        }
    }
}
