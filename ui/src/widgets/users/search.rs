use egui::{TextEdit, Ui};

pub const SEARCH_HINT: &str = "Search students...";
const SEARCH_WIDTH: f32 = 300.0;

/// Search box for the student directory.
///
/// Returns the new term when the user edited it this frame.
pub fn search_box(ui: &mut Ui, term: &str) -> Option<String> {
    let mut edited = term.to_owned();
    let response = ui.add(
        TextEdit::singleline(&mut edited)
            .hint_text(format!("🔍 {SEARCH_HINT}"))
            .desired_width(SEARCH_WIDTH),
    );

    (response.changed() && edited != term).then_some(edited)
}
