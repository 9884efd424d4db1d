use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{EventSenders, requery};
use crate::state::AppState;

/// What: Handle a key while the search box has focus.
///
/// Details:
/// - Text is only submitted on Enter; typing does not fetch.
/// - Ctrl+T flips between name and barcode search. When a term is already
///   active the query is re-run in the new mode.
pub(super) fn handle_search_key(ke: KeyEvent, app: &mut AppState, tx: &EventSenders) {
    let ctrl = ke.modifiers.contains(KeyModifiers::CONTROL);
    match ke.code {
        KeyCode::Char('t') if ctrl => {
            app.input_mode = app.input_mode.toggled();
            if !app.query.term.is_empty() && app.query.set_mode(app.input_mode) {
                requery(app, tx);
            }
        }
        KeyCode::Char('u') if ctrl => app.input.clear(),
        KeyCode::Char(c) if !ctrl => app.input.push(c),
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Esc => app.input.clear(),
        KeyCode::Enter => {
            let term = app.input.clone();
            if app.query.set_search(&term, app.input_mode) {
                tracing::info!(term = %term.trim(), mode = app.input_mode.as_config_key(), "[Catalog] Search submitted");
                requery(app, tx);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyModifiers};

    use crate::events::handle_event;
    use crate::events::test_support::{key, senders};
    use crate::logic::FetchPlan;
    use crate::state::SearchMode;
    use crate::test_utils::new_app;

    #[test]
    /// What: Typing then Enter issues a single search request
    ///
    /// Inputs:
    /// - Characters "tea" then Enter, then Enter again
    ///
    /// Output:
    /// - One search plan for "tea"; resubmitting the same term sends nothing
    fn search_enter_submits_once() {
        let mut app = new_app();
        let (tx, mut fetch_rx, _d) = senders();
        for c in "tea".chars() {
            handle_event(key(KeyCode::Char(c)), &mut app, &tx);
        }
        assert!(fetch_rx.try_recv().is_err());
        handle_event(key(KeyCode::Enter), &mut app, &tx);
        let req = fetch_rx.try_recv().expect("search request");
        assert_eq!(
            req.plan,
            FetchPlan::Search {
                term: "tea".into(),
                page: 1
            }
        );
        handle_event(key(KeyCode::Enter), &mut app, &tx);
        assert!(fetch_rx.try_recv().is_err());
    }

    #[test]
    /// What: Ctrl+T switches to barcode mode and re-runs an active term
    ///
    /// Inputs:
    /// - Submitted term "3017620422003", then Ctrl+T
    ///
    /// Output:
    /// - Second request is a lookup for that code
    fn search_toggle_mode_requeries() {
        let mut app = new_app();
        let (tx, mut fetch_rx, _d) = senders();
        app.input = "3017620422003".into();
        handle_event(key(KeyCode::Enter), &mut app, &tx);
        let _ = fetch_rx.try_recv().expect("first request");
        let ctrl_t = CEvent::Key(KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL));
        handle_event(ctrl_t, &mut app, &tx);
        assert_eq!(app.input_mode, SearchMode::Barcode);
        let req = fetch_rx.try_recv().expect("lookup request");
        assert_eq!(
            req.plan,
            FetchPlan::Lookup {
                code: "3017620422003".into()
            }
        );
    }
}
