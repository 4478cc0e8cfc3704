//! Admin page for managing student accounts.
//!
//! Fetches the directory on first render, then shows the searchable table,
//! the view/edit/delete dialogs and the toast overlay.

use chrono::{DateTime, Utc};
use dormmeal_business::Toast;
use dormmeal_business::user_management::{ADD_STUDENT_PLACEHOLDER, UserManagementAction};
use egui::{Response, Ui};

use crate::state::{Intent, State};
use crate::widgets;

pub const PAGE_TITLE: &str = "User Management";
pub const PAGE_SUBTITLE: &str = "Manage student accounts and information";
pub const ADD_STUDENT_LABEL: &str = "➕ Add Student";

pub fn user_management_page(state: &mut State, ui: &mut Ui) -> Response {
    user_management_page_at(state, ui, Utc::now())
}

/// Same as [`user_management_page`] with an explicit clock for toast expiry.
pub fn user_management_page_at(state: &mut State, ui: &mut Ui, now: DateTime<Utc>) -> Response {
    state.begin_frame(now);

    let mut intents = Vec::new();
    let page = state.page();

    let response = ui
        .vertical(|ui| {
            if widgets::admin_header(ui, PAGE_TITLE, PAGE_SUBTITLE, ADD_STUDENT_LABEL) {
                // No creation form yet; the button only announces itself.
                intents.push(Intent::Local(UserManagementAction::Notify(Toast::info(
                    ADD_STUDENT_PLACEHOLDER,
                ))));
            }

            ui.add_space(16.0);
            let directory = ui.add_enabled_ui(!page.is_dialog_showing(), |ui| {
                widgets::student_directory(ui, page)
            });
            intents.extend(directory.inner);
        })
        .response;

    intents.extend(widgets::user_modals(ui, page));

    for id in widgets::toast_overlay(ui.ctx(), page.toasts(), now) {
        intents.push(Intent::Local(UserManagementAction::DismissToast(id)));
    }

    state.apply_all(intents);
    response
}

#[cfg(test)]
mod user_management_page_test {
    use super::*;
    use crate::test_utils::TestCtx;
    use crate::widgets::users::modals::{DELETE_TITLE, EDIT_TITLE, VIEW_TITLE, delete_prompt};
    use crate::widgets::users::table::{DELETE_ICON, EDIT_ICON, EMPTY_TEXT, VIEW_ICON};
    use dormmeal_business::test_utils::{ApiCall, sample_users};
    use dormmeal_business::user_management::{DELETE_SUCCEEDED, ModalKind, UPDATE_FAILED};
    use kittest::Queryable;

    fn page_ctx<'a>() -> TestCtx<'a> {
        TestCtx::new(
            |ui, state| {
                user_management_page(state, ui);
            },
            sample_users(),
        )
    }

    #[tokio::test]
    async fn mount_fetches_once_and_lists_everyone() {
        let mut ctx = page_ctx();
        ctx.settle().await;

        let harness = ctx.harness();
        assert!(harness.query_by_label(PAGE_TITLE).is_some());
        assert!(harness.query_by_label(PAGE_SUBTITLE).is_some());
        for user in sample_users() {
            assert!(
                harness.query_by_label(&user.name).is_some(),
                "missing row for {}",
                user.name
            );
        }
        assert_eq!(harness.query_all_by_label(VIEW_ICON).count(), 3);
        assert_eq!(ctx.api.calls(), vec![ApiCall::GetUsers]);
        assert!(!harness.state().page().is_loading());
    }

    #[tokio::test]
    async fn search_filters_rows_without_refetching() {
        let mut ctx = page_ctx();
        ctx.settle().await;

        ctx.harness_mut()
            .state_mut()
            .apply(Intent::Local(UserManagementAction::SetSearch("hostel".into())));
        ctx.settle().await;

        let harness = ctx.harness();
        assert!(harness.query_by_label("Asha Rao").is_some());
        assert!(harness.query_by_label("Chen Wei").is_some());
        assert!(harness.query_by_label("Ben Okafor").is_none());
        assert_eq!(ctx.api.count(ApiCall::is_fetch), 1);
    }

    #[tokio::test]
    async fn unmatched_search_shows_empty_message() {
        let mut ctx = page_ctx();
        ctx.settle().await;

        ctx.harness_mut()
            .state_mut()
            .apply(Intent::Local(UserManagementAction::SetSearch("zzz".into())));
        ctx.settle().await;

        assert!(ctx.harness().query_by_label(EMPTY_TEXT).is_some());
    }

    #[tokio::test]
    async fn view_icon_opens_details_without_network() {
        let mut ctx = page_ctx();
        ctx.settle().await;

        ctx.harness_mut()
            .query_all_by_label(VIEW_ICON)
            .nth(1)
            .expect("second row view icon")
            .click();
        ctx.settle().await;

        let harness = ctx.harness();
        assert!(harness.query_by_label(VIEW_TITLE).is_some());
        assert!(harness.query_by_label("ben.o@mail.com").is_some());
        assert_eq!(ctx.api.calls(), vec![ApiCall::GetUsers]);
    }

    #[tokio::test]
    async fn edit_and_delete_icons_never_call_the_api() {
        let mut ctx = page_ctx();
        ctx.settle().await;

        ctx.harness_mut()
            .query_all_by_label(EDIT_ICON)
            .next()
            .expect("edit icon")
            .click();
        ctx.settle().await;
        assert!(ctx.harness().query_by_label(EDIT_TITLE).is_some());

        ctx.harness_mut()
            .state_mut()
            .apply(Intent::Local(UserManagementAction::CloseModal(ModalKind::Edit)));
        ctx.settle().await;
        ctx.harness_mut()
            .query_all_by_label(DELETE_ICON)
            .next()
            .expect("delete icon")
            .click();
        ctx.settle().await;
        assert!(ctx.harness().query_by_label(DELETE_TITLE).is_some());

        assert_eq!(ctx.api.calls(), vec![ApiCall::GetUsers]);
    }

    #[tokio::test]
    async fn confirming_delete_removes_the_row_and_refetches_once() {
        let mut ctx = page_ctx();
        ctx.settle().await;

        ctx.harness_mut()
            .query_all_by_label(DELETE_ICON)
            .nth(2)
            .expect("third row delete icon")
            .click();
        ctx.settle().await;
        assert!(
            ctx.harness()
                .query_by_label(&delete_prompt("Chen Wei"))
                .is_some()
        );

        ctx.harness_mut().get_by_label("Delete Student").click();
        ctx.settle().await;

        let harness = ctx.harness();
        assert!(harness.query_by_label("Chen Wei").is_none());
        assert!(harness.query_by_label(DELETE_TITLE).is_none());
        assert!(harness.query_by_label(DELETE_SUCCEEDED).is_some());
        assert_eq!(
            ctx.api.calls(),
            vec![
                ApiCall::GetUsers,
                ApiCall::DeleteUser("3".into()),
                ApiCall::GetUsers
            ]
        );
    }

    #[tokio::test]
    async fn failed_update_keeps_modal_and_rows() {
        let mut ctx = page_ctx();
        ctx.settle().await;
        ctx.api.fail_next_update();

        ctx.harness_mut()
            .query_all_by_label(EDIT_ICON)
            .next()
            .expect("edit icon")
            .click();
        ctx.settle().await;
        ctx.harness_mut().get_by_label("Save Changes").click();
        ctx.settle().await;

        let harness = ctx.harness();
        assert!(harness.query_by_label(EDIT_TITLE).is_some());
        assert!(harness.query_by_label(UPDATE_FAILED).is_some());
        assert_eq!(harness.state().page().users(), sample_users().as_slice());
        assert_eq!(ctx.api.count(ApiCall::is_fetch), 1);
    }

    #[tokio::test]
    async fn edit_draft_never_lands_on_another_student() {
        let mut ctx = page_ctx();
        ctx.settle().await;

        ctx.harness_mut()
            .query_all_by_label(EDIT_ICON)
            .next()
            .expect("first row edit icon")
            .click();
        ctx.settle().await;
        ctx.harness_mut()
            .query_all_by_label(VIEW_ICON)
            .nth(1)
            .expect("second row view icon")
            .click();
        ctx.settle().await;

        let harness = ctx.harness();
        assert!(harness.query_by_label(VIEW_TITLE).is_none(), "directory is blocked");
        assert_eq!(harness.state().page().selected(), Some(&sample_users()[0]));

        ctx.harness_mut().get_by_label("Save Changes").click();
        ctx.settle().await;

        let asha = sample_users().remove(0);
        assert_eq!(
            ctx.api.calls(),
            vec![
                ApiCall::GetUsers,
                ApiCall::UpdateUser(asha.id, asha),
                ApiCall::GetUsers
            ]
        );
    }

    #[tokio::test]
    async fn row_selection_behind_an_open_edit_closes_it() {
        let mut ctx = page_ctx();
        ctx.settle().await;

        ctx.harness_mut()
            .query_all_by_label(EDIT_ICON)
            .next()
            .expect("first row edit icon")
            .click();
        ctx.settle().await;
        let ben = sample_users().remove(1);
        ctx.harness_mut()
            .state_mut()
            .apply_all(crate::widgets::users::row_action_intents(
                crate::widgets::users::RowActionKind::View,
                ben.clone(),
            ));
        ctx.settle().await;

        let harness = ctx.harness();
        assert!(harness.query_by_label(EDIT_TITLE).is_none());
        assert!(harness.query_by_label("Save Changes").is_none());
        assert!(harness.query_by_label(VIEW_TITLE).is_some());
        assert_eq!(harness.state().page().selected(), Some(&ben));
        assert_eq!(ctx.api.calls(), vec![ApiCall::GetUsers]);
    }

    #[tokio::test]
    async fn add_student_only_toasts() {
        let mut ctx = page_ctx();
        ctx.settle().await;

        ctx.harness_mut().get_by_label(ADD_STUDENT_LABEL).click();
        ctx.settle().await;

        assert!(
            ctx.harness()
                .query_by_label(ADD_STUDENT_PLACEHOLDER)
                .is_some()
        );
        assert_eq!(ctx.api.calls(), vec![ApiCall::GetUsers]);
    }
}
