use crossterm::event::{KeyCode, KeyEvent};

use super::{EventSenders, open_details};
use crate::logic::send_load_more;
use crate::state::{AppState, Modal, SortMode};
use crate::util::display_name;

/// What: Handle a key while the results list has focus.
///
/// Details:
/// - Moving down past the last row asks for the next page.
pub(super) fn handle_results_key(ke: KeyEvent, app: &mut AppState, tx: &EventSenders) {
    match ke.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => {
            let at_end = app.selected + 1 >= app.query.products.len();
            if at_end {
                load_more(app, tx);
            } else {
                app.move_selection(1);
            }
        }
        KeyCode::PageUp => app.move_selection(-10),
        KeyCode::PageDown => app.move_selection(10),
        KeyCode::Home => app.move_selection(isize::MIN),
        KeyCode::End => app.move_selection(isize::MAX),
        KeyCode::Char('m') => load_more(app, tx),
        KeyCode::Char('s') => {
            let selected = SortMode::ALL
                .iter()
                .position(|m| *m == app.query.sort)
                .unwrap_or(0);
            app.modal = Modal::SortMenu { selected };
        }
        KeyCode::Enter => {
            if let Some(code) = app.selected_product().map(|p| p.code.clone()) {
                open_details(app, code, tx);
            }
        }
        KeyCode::Char('a' | ' ') => {
            if let Some(p) = app.selected_product().cloned() {
                app.toast = Some(format!("Added {} to cart", display_name(&p)));
                app.cart.add(p);
                app.sync_list_states();
            }
        }
        _ => {}
    }
}

fn load_more(app: &mut AppState, tx: &EventSenders) {
    if send_load_more(&mut app.query, &tx.fetch_tx) {
        tracing::debug!(page = app.query.page, "[Catalog] Loading next page");
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyCode;

    use crate::events::handle_event;
    use crate::events::test_support::{key, senders};
    use crate::logic::FetchPlan;
    use crate::state::{Focus, MergeMode, Modal};
    use crate::test_utils::{new_app, product};

    #[test]
    /// What: Down on the last row loads the next page exactly once
    ///
    /// Inputs:
    /// - Two products with more pages, Down three times
    ///
    /// Output:
    /// - One append request for page 2; further presses wait for the response
    fn results_down_at_end_loads_more() {
        let mut app = new_app();
        let (tx, mut fetch_rx, _d) = senders();
        app.focus = Focus::Results;
        app.query.products = vec![product("1", None, None), product("2", None, None)];
        app.query.has_more = true;
        app.sync_list_states();
        for _ in 0..3 {
            handle_event(key(KeyCode::Down), &mut app, &tx);
        }
        assert_eq!(app.selected, 1);
        let req = fetch_rx.try_recv().expect("load more");
        assert_eq!(req.merge, MergeMode::Append);
        assert_eq!(req.plan, FetchPlan::Listing { page: 2 });
        assert!(fetch_rx.try_recv().is_err());
    }

    #[test]
    /// What: Adding to the cart increments quantity and opens the cart
    ///
    /// Inputs:
    /// - Highlighted product, `a` twice
    ///
    /// Output:
    /// - One line with quantity 2; cart visible; toast set
    fn results_add_to_cart() {
        let mut app = new_app();
        let (tx, _f, _d) = senders();
        app.focus = Focus::Results;
        app.query.products = vec![product("1", Some("Rice"), Some("b"))];
        app.sync_list_states();
        handle_event(key(KeyCode::Char('a')), &mut app, &tx);
        handle_event(key(KeyCode::Char('a')), &mut app, &tx);
        assert_eq!(app.cart.len(), 1);
        assert_eq!(app.cart.total_item_count(), 2);
        assert!(app.cart.is_open());
        assert_eq!(app.toast.as_deref(), Some("Added Rice to cart"));
    }

    #[test]
    /// What: Enter opens the detail overlay and requests the full record
    ///
    /// Inputs:
    /// - Highlighted product not yet cached
    ///
    /// Output:
    /// - Detail modal for its code; code sent to the details worker
    fn results_enter_opens_details() {
        let mut app = new_app();
        let (tx, _f, mut details_rx) = senders();
        app.focus = Focus::Results;
        app.query.products = vec![product("42", None, None)];
        app.sync_list_states();
        handle_event(key(KeyCode::Enter), &mut app, &tx);
        assert_eq!(
            app.modal,
            Modal::ProductDetail {
                code: "42".into(),
                scroll: 0
            }
        );
        assert_eq!(app.details_loading.as_deref(), Some("42"));
        assert_eq!(details_rx.try_recv().expect("details request"), "42");
    }
}
