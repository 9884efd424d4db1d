//! Command-line product detail page.

use crate::sources::DataSource;
use crate::ui::detail_text;

/// What: Look a product up and print its detail page.
///
/// Output:
/// - `true` when found; `false` (with a message on stderr) otherwise.
pub async fn handle_product(source: &dyn DataSource, code: &str) -> bool {
    tracing::info!(code = %code, "[CLI] Product requested");
    match source.get_by_identifier(code.trim()).await {
        Some(p) => {
            println!("{}", detail_text(&p));
            true
        }
        None => {
            eprintln!("Product not found: {code}");
            false
        }
    }
}
