use crossterm::event::{KeyCode, KeyEvent};

use super::{EventSenders, requery};
use crate::state::{AppState, Focus};

/// What: Handle a key while the category picker has focus.
///
/// Details:
/// - Enter applies the highlighted row (row 0 clears the filter), clears the
///   search box and moves focus to the results.
pub(super) fn handle_categories_key(ke: KeyEvent, app: &mut AppState, tx: &EventSenders) {
    match ke.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_category(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_category(1),
        KeyCode::PageUp => app.move_category(-10),
        KeyCode::PageDown => app.move_category(10),
        KeyCode::Home => app.move_category(isize::MIN),
        KeyCode::Enter => {
            let category = app.category_at(app.category_selected).map(str::to_string);
            if app.query.set_category(category) {
                tracing::info!(category = ?app.query.category, "[Catalog] Category selected");
                app.input.clear();
                requery(app, tx);
            }
            app.focus = Focus::Results;
        }
        _ => {}
    }
}
