//! Pages of the admin client.
//!
//! - `user_management_page`: student directory with view/edit/delete dialogs

mod user_management_page;

pub use user_management_page::{
    ADD_STUDENT_LABEL, PAGE_SUBTITLE, PAGE_TITLE, user_management_page, user_management_page_at,
};
