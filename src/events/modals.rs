use crossterm::event::{KeyCode, KeyEvent};

use super::{EventSenders, requery};
use crate::state::{AppState, Modal, SortMode};
use crate::util::display_name;

/// What: Route a key to the open overlay.
pub(super) fn handle_modal_key(ke: KeyEvent, app: &mut AppState, tx: &EventSenders) {
    match app.modal.clone() {
        Modal::None => {}
        Modal::Help => {
            if matches!(ke.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?' | 'q')) {
                app.modal = Modal::None;
            }
        }
        Modal::SortMenu { selected } => handle_sort_menu(ke, app, selected, tx),
        Modal::ProductDetail { code, scroll } => handle_detail(ke, app, code, scroll),
    }
}

fn handle_sort_menu(ke: KeyEvent, app: &mut AppState, selected: usize, tx: &EventSenders) {
    let last = SortMode::ALL.len() - 1;
    match ke.code {
        KeyCode::Up | KeyCode::Char('k') => {
            app.modal = Modal::SortMenu {
                selected: selected.saturating_sub(1),
            };
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.modal = Modal::SortMenu {
                selected: (selected + 1).min(last),
            };
        }
        KeyCode::Enter => {
            app.modal = Modal::None;
            let mode = SortMode::ALL[selected.min(last)];
            if app.query.set_sort(mode) {
                tracing::info!(sort = mode.as_config_key(), "[Catalog] Sort changed");
                requery(app, tx);
            }
        }
        KeyCode::Esc | KeyCode::Char('s' | 'q') => app.modal = Modal::None,
        _ => {}
    }
}

fn handle_detail(ke: KeyEvent, app: &mut AppState, code: String, scroll: u16) {
    let scroll = match ke.code {
        KeyCode::Up | KeyCode::Char('k') => scroll.saturating_sub(1),
        KeyCode::Down | KeyCode::Char('j') => scroll.saturating_add(1),
        KeyCode::PageUp => scroll.saturating_sub(10),
        KeyCode::PageDown => scroll.saturating_add(10),
        KeyCode::Home => 0,
        KeyCode::Char('a' | ' ') => {
            if let Some(p) = app.product_for(&code).cloned() {
                app.toast = Some(format!("Added {} to cart", display_name(&p)));
                app.cart.add(p);
                app.sync_list_states();
            }
            scroll
        }
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
            app.modal = Modal::None;
            return;
        }
        _ => scroll,
    };
    app.modal = Modal::ProductDetail { code, scroll };
}
