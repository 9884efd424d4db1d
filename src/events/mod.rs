//! Event handling layer for the catalog browser TUI.
//!
//! [`handle_event`] routes a terminal event to the open overlay first, then
//! to global shortcuts, then to the focused pane.

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::logic::send_query;
use crate::state::{AppState, FetchRequest, Focus, Modal};

mod cart;
mod categories;
mod modals;
mod results;
mod search;

/// Senders the event layer uses to reach the workers.
#[derive(Debug, Clone)]
pub struct EventSenders {
    /// Catalog fetch requests.
    pub fetch_tx: mpsc::UnboundedSender<FetchRequest>,
    /// Product codes whose full record should be fetched.
    pub details_tx: mpsc::UnboundedSender<String>,
}

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(ev: CEvent, app: &mut AppState, tx: &EventSenders) -> bool {
    let CEvent::Key(ke) = ev else {
        return false;
    };
    if ke.kind != KeyEventKind::Press {
        return false;
    }
    if ke.code == KeyCode::Char('c') && ke.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }
    // Any key press dismisses the previous toast.
    app.toast = None;
    if app.modal != Modal::None {
        modals::handle_modal_key(ke, app, tx);
        return false;
    }

    if let Some(quit) = handle_global_key(ke, app) {
        return quit;
    }
    match app.focus {
        Focus::Search => search::handle_search_key(ke, app, tx),
        Focus::Categories => categories::handle_categories_key(ke, app, tx),
        Focus::Results => results::handle_results_key(ke, app, tx),
        Focus::Cart => cart::handle_cart_key(ke, app),
    }
    false
}

/// What: Shortcuts that apply regardless of the focused pane.
///
/// Output:
/// - `Some(quit)` when the key was consumed; `None` to fall through to the pane.
///
/// Details:
/// - Letter shortcuts are disabled while the search box has focus so they
///   can be typed.
fn handle_global_key(ke: KeyEvent, app: &mut AppState) -> Option<bool> {
    match ke.code {
        KeyCode::Tab => {
            app.focus = app.focus.next(app.cart.is_open());
            Some(false)
        }
        KeyCode::BackTab => {
            app.focus = match app.focus {
                Focus::Search if app.cart.is_open() => Focus::Cart,
                Focus::Search => Focus::Results,
                Focus::Categories => Focus::Search,
                Focus::Results => Focus::Categories,
                Focus::Cart => Focus::Results,
            };
            Some(false)
        }
        _ if app.focus == Focus::Search => None,
        KeyCode::Char('q') => Some(true),
        KeyCode::Char('?') => {
            app.modal = Modal::Help;
            Some(false)
        }
        KeyCode::Char('C') => {
            let open = !app.cart.is_open();
            app.cart.set_open(open);
            if !open && app.focus == Focus::Cart {
                app.focus = Focus::Results;
            }
            Some(false)
        }
        KeyCode::Char('/') => {
            app.focus = Focus::Search;
            Some(false)
        }
        _ => None,
    }
}

/// What: Issue a fresh query and move the highlight back to the top.
pub(super) fn requery(app: &mut AppState, tx: &EventSenders) {
    send_query(&mut app.query, &tx.fetch_tx);
    app.selected = 0;
    app.sync_list_states();
}

/// What: Open the detail overlay for `code`, fetching the full record once.
pub(super) fn open_details(app: &mut AppState, code: String, tx: &EventSenders) {
    if !app.details_cache.contains(&code) {
        app.details_loading = Some(code.clone());
        let _ = tx.details_tx.send(code.clone());
    }
    app.modal = Modal::ProductDetail { code, scroll: 0 };
}
