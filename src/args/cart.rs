//! Command-line cart commands.

use std::fmt::Write as _;

use crate::cart::{CartStore, Storage};
use crate::sources::DataSource;
use crate::util::display_name;

/// Cart operation requested on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartCommand {
    /// Print the cart.
    List,
    /// Look the code up and add one unit.
    Add(String),
    /// Remove a line.
    Remove(String),
    /// Set a line's quantity; below 1 removes it.
    SetQuantity(String, i64),
    /// Empty the cart.
    Clear,
}

/// What: Render cart lines and the total item count.
#[must_use]
pub fn format_cart<S: Storage>(cart: &CartStore<S>) -> String {
    let mut out = String::new();
    if cart.is_empty() {
        out.push_str("Your cart is empty\n");
        return out;
    }
    for item in cart.items() {
        let _ = writeln!(
            out,
            "{:>3} × {:<14} {}",
            item.quantity,
            item.code(),
            display_name(&item.product)
        );
    }
    let _ = writeln!(out, "-- {} items", cart.total_item_count());
    out
}

/// What: Apply `cmd` to the cart and return the text to print.
///
/// Output:
/// - `Err` with a message when `Add` names an unknown product.
pub async fn apply_cart_command<S: Storage>(
    cart: &mut CartStore<S>,
    source: &dyn DataSource,
    cmd: CartCommand,
) -> Result<String, String> {
    match cmd {
        CartCommand::List => {}
        CartCommand::Add(code) => {
            let Some(p) = source.get_by_identifier(code.trim()).await else {
                return Err(format!("Product not found: {code}"));
            };
            cart.add(p);
        }
        CartCommand::Remove(code) => cart.remove(&code),
        CartCommand::SetQuantity(code, n) => cart.set_quantity(&code, n),
        CartCommand::Clear => cart.clear(),
    }
    Ok(format_cart(cart))
}

/// What: Run a cart command and print the resulting cart.
///
/// Output:
/// - `true` on success.
pub async fn handle_cart<S: Storage>(
    cart: &mut CartStore<S>,
    source: &dyn DataSource,
    cmd: CartCommand,
) -> bool {
    tracing::info!(command = ?cmd, "[CLI] Cart command");
    match apply_cart_command(cart, source, cmd).await {
        Ok(text) => {
            print!("{text}");
            true
        }
        Err(msg) => {
            eprintln!("{msg}");
            false
        }
    }
}
