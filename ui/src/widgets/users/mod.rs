//! Student directory widgets: search, table and dialogs.

pub mod modals;
mod search;
pub mod table;

use dormmeal_business::User;
use dormmeal_business::user_management::{ModalKind, UserManagementAction, UserManagementState};
use egui::Ui;

pub use modals::user_modals;
pub use search::{SEARCH_HINT, search_box};
pub use table::{RowActionKind, users_table};

use crate::state::Intent;
use crate::widgets::card;

pub const DIRECTORY_TITLE: &str = "Student Directory";

/// Row icons only select the student and open a dialog. Nothing here talks
/// to the API.
pub fn row_action_intents(kind: RowActionKind, user: User) -> [Intent; 2] {
    let modal = match kind {
        RowActionKind::View => ModalKind::View,
        RowActionKind::Edit => ModalKind::Edit,
        RowActionKind::Delete => ModalKind::Delete,
    };
    [
        Intent::Local(UserManagementAction::SelectUser(user)),
        Intent::Local(UserManagementAction::OpenModal(modal)),
    ]
}

/// The directory card: title, search box and the filtered table.
pub fn student_directory(ui: &mut Ui, page: &UserManagementState) -> Vec<Intent> {
    let mut new_term = None;

    let clicked = card(
        ui,
        DIRECTORY_TITLE,
        |ui| new_term = search_box(ui, page.search()),
        |ui| {
            let visible = page.visible_users();
            users_table(ui, &visible, page.is_loading())
        },
    );

    let mut intents = Vec::new();
    if let Some(term) = new_term {
        intents.push(Intent::Local(UserManagementAction::SetSearch(term)));
    }
    if let Some((kind, user)) = clicked {
        intents.extend(row_action_intents(kind, user));
    }
    intents
}
