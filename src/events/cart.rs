use crossterm::event::{KeyCode, KeyEvent};

use crate::state::AppState;

/// What: Handle a key while the cart pane has focus.
///
/// Details:
/// - `-` on a line with quantity 1 removes it.
pub(super) fn handle_cart_key(ke: KeyEvent, app: &mut AppState) {
    let current = app
        .selected_cart_item()
        .map(|i| (i.code().to_string(), i64::from(i.quantity)));
    match ke.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_cart(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_cart(1),
        KeyCode::Char('+' | '=') => {
            if let Some((code, qty)) = current {
                app.cart.set_quantity(&code, qty + 1);
            }
        }
        KeyCode::Char('-') => {
            if let Some((code, qty)) = current {
                app.cart.set_quantity(&code, qty - 1);
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some((code, _)) = current {
                app.cart.remove(&code);
            }
        }
        KeyCode::Char('c') => {
            app.cart.clear();
            app.toast = Some("Cart cleared".to_string());
        }
        _ => {}
    }
    app.sync_list_states();
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyCode;

    use crate::events::handle_event;
    use crate::events::test_support::{key, senders};
    use crate::state::Focus;
    use crate::test_utils::{new_app, product};

    #[test]
    /// What: Quantity keys adjust and remove cart lines
    ///
    /// Inputs:
    /// - Two cart lines; `+` on the first, `-` twice, then `d` on the remaining line
    ///
    /// Output:
    /// - Quantity 2, then removal at zero, then an empty cart
    fn cart_keys_adjust_quantities() {
        let mut app = new_app();
        let (tx, _f, _d) = senders();
        app.cart.add(product("1", Some("Oats"), None));
        app.cart.add(product("2", Some("Tea"), None));
        app.focus = Focus::Cart;
        app.sync_list_states();

        handle_event(key(KeyCode::Char('+')), &mut app, &tx);
        assert_eq!(app.cart.get("1").map(|i| i.quantity), Some(2));
        handle_event(key(KeyCode::Char('-')), &mut app, &tx);
        handle_event(key(KeyCode::Char('-')), &mut app, &tx);
        assert!(app.cart.get("1").is_none());
        assert_eq!(app.cart_selected, 0);
        handle_event(key(KeyCode::Char('d')), &mut app, &tx);
        assert!(app.cart.is_empty());
    }

    #[test]
    /// What: `c` empties the cart
    ///
    /// Inputs:
    /// - Cart with three units
    ///
    /// Output:
    /// - Total count 0
    fn cart_clear_key() {
        let mut app = new_app();
        let (tx, _f, _d) = senders();
        app.cart.add(product("1", None, None));
        app.cart.set_quantity("1", 3);
        app.focus = Focus::Cart;
        handle_event(key(KeyCode::Char('c')), &mut app, &tx);
        assert_eq!(app.cart.total_item_count(), 0);
    }
}
