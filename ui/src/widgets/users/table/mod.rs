//! Student directory table.
//!
//! Split into small pieces:
//! - `columns`: column widths
//! - `header`: header labels
//! - `row`: one student per row
//! - `cells`: per-column cell renderers

mod cells;
pub mod columns;
pub mod header;
pub mod row;

use dormmeal_business::User;
use egui::{Align, Layout, RichText, Ui};
use egui_extras::TableBuilder;

pub use cells::{DELETE_ICON, EDIT_ICON, RowActionKind, VIEW_ICON};

use crate::utils::colors::COLOR_MUTED;
use columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use header::render_table_header;
use row::render_user_row;

pub const EMPTY_TEXT: &str = "No students found matching your search criteria";
pub const LOADING_TEXT: &str = "Loading students...";

/// Renders `users` and returns the row action clicked this frame, with a copy
/// of the student it targets.
pub fn users_table(ui: &mut Ui, users: &[&User], loading: bool) -> Option<(RowActionKind, User)> {
    let mut clicked = None;

    let mut builder = TableBuilder::new(ui)
        .id_salt("student_directory")
        .striped(false)
        .resizable(false)
        .cell_layout(Layout::left_to_right(Align::Center));
    for column in table_columns() {
        builder = builder.column(column);
    }

    builder
        .header(HEADER_HEIGHT, |mut header| render_table_header(&mut header))
        .body(|mut body| {
            if loading {
                body.row(ROW_HEIGHT * 2.0, |mut row| {
                    row.col(|ui| {
                        ui.spinner();
                        ui.label(RichText::new(LOADING_TEXT).color(COLOR_MUTED));
                    });
                });
                return;
            }

            if users.is_empty() {
                body.row(ROW_HEIGHT * 2.0, |mut row| {
                    row.col(|ui| {
                        ui.label(RichText::new(EMPTY_TEXT).color(COLOR_MUTED));
                    });
                });
                return;
            }

            for user in users {
                body.row(ROW_HEIGHT, |mut row| {
                    if let Some(kind) = render_user_row(&mut row, user) {
                        clicked = Some((kind, (*user).clone()));
                    }
                });
            }
        });

    clicked
}

#[cfg(test)]
mod tests {
    use super::*;
    use dormmeal_business::UserStatus;
    use egui_kittest::Harness;
    use kittest::Queryable;

    struct TableState {
        users: Vec<User>,
        loading: bool,
        clicked: Vec<(RowActionKind, String)>,
    }

    fn table_state(users: Vec<User>) -> TableState {
        TableState {
            users,
            loading: false,
            clicked: Vec::new(),
        }
    }

    fn render(ui: &mut Ui, state: &mut TableState) {
        let users: Vec<&User> = state.users.iter().collect();
        if let Some((kind, user)) = users_table(ui, &users, state.loading) {
            state.clicked.push((kind, user.id.to_string()));
        }
    }

    fn two_students() -> Vec<User> {
        vec![
            User::new("1", "Asha Rao", "asha@hostel.edu", "B-204", UserStatus::Active),
            User::new("2", "Ben Okafor", "ben@hostel.edu", "A-110", UserStatus::Inactive),
        ]
    }

    #[test]
    fn renders_headers_and_one_row_per_user() {
        let harness = Harness::new_ui_state(render, table_state(two_students()));

        for label in header::HEADERS {
            assert!(harness.query_by_label(label).is_some(), "missing header {label}");
        }
        assert!(harness.query_by_label("Asha Rao").is_some());
        assert!(harness.query_by_label("ben@hostel.edu").is_some());
        assert!(harness.query_by_label("A-110").is_some());
        assert_eq!(harness.query_all_by_label(EDIT_ICON).count(), 2);
        assert!(harness.query_by_label(EMPTY_TEXT).is_none());
    }

    #[test]
    fn empty_list_shows_the_empty_message() {
        let harness = Harness::new_ui_state(render, table_state(Vec::new()));

        assert!(harness.query_by_label(EMPTY_TEXT).is_some());
    }

    #[test]
    fn loading_hides_rows() {
        let mut state = table_state(two_students());
        state.loading = true;

        let harness = Harness::new_ui_state(render, state);

        assert!(harness.query_by_label(LOADING_TEXT).is_some());
        assert!(harness.query_by_label("Asha Rao").is_none());
    }

    #[test]
    fn icons_report_kind_and_student() {
        let mut harness = Harness::new_ui_state(render, table_state(two_students()));

        harness
            .query_all_by_label(DELETE_ICON)
            .nth(1)
            .expect("second delete icon")
            .click();
        harness.step();
        harness
            .query_all_by_label(VIEW_ICON)
            .next()
            .expect("first view icon")
            .click();
        harness.step();

        assert_eq!(
            harness.state().clicked,
            vec![
                (RowActionKind::Delete, "2".to_owned()),
                (RowActionKind::View, "1".to_owned())
            ]
        );
    }
}
