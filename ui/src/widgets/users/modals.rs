//! Dialogs opened from the row icons.
//!
//! Each dialog renders only while its flag is raised and a student is
//! selected. Dialogs never mutate state; they return [`Intent`]s.

use dormmeal_business::user_management::{
    DraftField, ModalKind, UserCommand, UserDraft, UserManagementAction, UserManagementState,
};
use dormmeal_business::{User, UserStatus};
use egui::{Button, ComboBox, Grid, RichText, TextEdit, Ui, Window};

use crate::state::Intent;
use crate::utils::colors::{COLOR_MUTED, COLOR_RED};
use crate::widgets::status_badge;

pub const VIEW_TITLE: &str = "Student Details";
pub const EDIT_TITLE: &str = "Edit Student";
pub const DELETE_TITLE: &str = "Confirm Deletion";
pub const NOT_AVAILABLE: &str = "Not available";

const MODAL_WIDTH: f32 = 420.0;

fn close(kind: ModalKind) -> Intent {
    Intent::Local(UserManagementAction::CloseModal(kind))
}

/// Renders whichever dialogs are showing.
pub fn user_modals(ui: &mut Ui, page: &UserManagementState) -> Vec<Intent> {
    let mut intents = Vec::new();

    if let Some(user) = page.modal_user(ModalKind::View) {
        intents.extend(show_view_modal(ui, user));
    }
    if page.modal_user(ModalKind::Edit).is_some() {
        intents.extend(show_edit_modal(
            ui,
            page.draft(),
            page.edited_user(),
            page.can_save(),
        ));
    }
    if let Some(user) = page.modal_user(ModalKind::Delete) {
        intents.extend(show_delete_modal(ui, user, page.can_delete()));
    }

    intents
}

fn detail_row(ui: &mut Ui, label: &str, add_value: impl FnOnce(&mut Ui)) {
    ui.label(RichText::new(label).color(COLOR_MUTED));
    add_value(ui);
    ui.end_row();
}

/// Read-only details. Missing optional fields read "Not available".
pub fn show_view_modal(ui: &mut Ui, user: &User) -> Option<Intent> {
    let mut open = true;
    let mut close_clicked = false;

    Window::new(VIEW_TITLE)
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(MODAL_WIDTH)
        .show(ui.ctx(), |ui| {
            Grid::new("student_details_grid")
                .num_columns(2)
                .spacing([24.0, 8.0])
                .show(ui, |ui| {
                    detail_row(ui, "Name", |ui| {
                        ui.label(&user.name);
                    });
                    detail_row(ui, "Email", |ui| {
                        ui.label(&user.email);
                    });
                    detail_row(ui, "Room Number", |ui| {
                        ui.label(&user.room_number);
                    });
                    detail_row(ui, "Status", |ui| {
                        status_badge(ui, user.status);
                    });
                    detail_row(ui, "Account Created", |ui| {
                        let created = user.created_on_display();
                        ui.label(created.as_deref().unwrap_or(NOT_AVAILABLE));
                    });
                    detail_row(ui, "Total Meals Booked", |ui| {
                        match user.meals_booked {
                            Some(count) => ui.label(count.to_string()),
                            None => ui.label(NOT_AVAILABLE),
                        };
                    });
                });

            ui.add_space(12.0);
            close_clicked = ui.button("Close").clicked();
        });

    (!open || close_clicked).then(|| close(ModalKind::View))
}

/// Draft editor. Edits flow back as `EditDraft` intents; "Save Changes"
/// sends `edited`, the selection with the draft applied.
pub fn show_edit_modal(
    ui: &mut Ui,
    draft: &UserDraft,
    mut edited: Option<User>,
    can_save: bool,
) -> Vec<Intent> {
    let mut open = true;
    let mut intents = Vec::new();

    let mut name = draft.name.clone();
    let mut email = draft.email.clone();
    let mut room_number = draft.room_number.clone();
    let mut status = draft.status;

    Window::new(EDIT_TITLE)
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(MODAL_WIDTH)
        .show(ui.ctx(), |ui| {
            Grid::new("edit_student_grid")
                .num_columns(2)
                .spacing([16.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Name");
                    if ui.add(TextEdit::singleline(&mut name)).changed() {
                        intents.push(draft_edit(DraftField::Name(name.clone())));
                    }
                    ui.end_row();

                    ui.label("Email");
                    if ui.add(TextEdit::singleline(&mut email)).changed() {
                        intents.push(draft_edit(DraftField::Email(email.clone())));
                    }
                    ui.end_row();

                    ui.label("Room Number");
                    if ui.add(TextEdit::singleline(&mut room_number)).changed() {
                        intents.push(draft_edit(DraftField::RoomNumber(room_number.clone())));
                    }
                    ui.end_row();

                    ui.label("Status");
                    ComboBox::from_id_salt("edit_student_status")
                        .selected_text(status.label())
                        .show_ui(ui, |ui| {
                            for option in UserStatus::ALL {
                                ui.selectable_value(&mut status, option, option.label());
                            }
                        });
                    ui.end_row();
                });

            if status != draft.status {
                intents.push(draft_edit(DraftField::Status(status)));
            }

            if !draft.is_complete() {
                ui.label(
                    RichText::new("Name and email are required")
                        .small()
                        .color(COLOR_RED),
                );
            }

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    intents.push(close(ModalKind::Edit));
                }
                if ui
                    .add_enabled(can_save, Button::new("Save Changes"))
                    .clicked()
                    && let Some(user) = edited.take()
                {
                    intents.push(Intent::Remote(UserCommand::Update(user)));
                }
            });
        });

    if !open {
        intents.push(close(ModalKind::Edit));
    }
    intents
}

fn draft_edit(field: DraftField) -> Intent {
    Intent::Local(UserManagementAction::EditDraft(field))
}

pub fn delete_prompt(name: &str) -> String {
    format!("Are you sure you want to remove {name} from the system? This action cannot be undone.")
}

pub fn show_delete_modal(ui: &mut Ui, user: &User, can_delete: bool) -> Option<Intent> {
    let mut open = true;
    let mut intent = None;

    Window::new(DELETE_TITLE)
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(MODAL_WIDTH)
        .show(ui.ctx(), |ui| {
            ui.label(delete_prompt(&user.name));
            ui.add_space(12.0);

            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    intent = Some(close(ModalKind::Delete));
                }
                let delete = Button::new(RichText::new("Delete Student").color(COLOR_RED));
                if ui.add_enabled(can_delete, delete).clicked() {
                    intent = Some(Intent::Remote(UserCommand::Delete(user.clone())));
                }
            });
        });

    if !open {
        intent = Some(close(ModalKind::Delete));
    }
    intent
}
