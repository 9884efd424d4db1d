//! Command-line product listing (search, category, default listing).

use std::fmt::Write as _;

use crate::logic::fetch_into;
use crate::sources::DataSource;
use crate::state::{MergeMode, QueryState};
use crate::util::{display_brand, display_name, grade_label};

/// What: Drive the pipeline for up to `pages` pages.
///
/// Inputs:
/// - `source`: Catalog data source
/// - `query`: Initial state (filters, sort and first page already set)
/// - `pages`: Pages to load; each after the first is appended
///
/// Output:
/// - Final query state.
///
/// Details:
/// - Stops early once the pipeline reports no further page.
pub async fn collect_listing(source: &dyn DataSource, mut query: QueryState, pages: u32) -> QueryState {
    fetch_into(source, &mut query, MergeMode::Replace).await;
    for _ in 1..pages.max(1) {
        if !fetch_into(source, &mut query, MergeMode::Append).await {
            break;
        }
    }
    query
}

/// What: Render the displayed list as plain text, one product per line.
#[must_use]
pub fn format_listing(query: &QueryState) -> String {
    let mut out = String::new();
    if query.products.is_empty() {
        out.push_str("No products found\n");
    }
    for p in &query.products {
        let _ = writeln!(
            out,
            "[{}] {:<14} {} · {}",
            grade_label(p),
            p.code,
            display_name(p),
            display_brand(p)
        );
    }
    let _ = writeln!(
        out,
        "-- {} products · page {} · sort {} · more: {}",
        query.products.len(),
        query.page,
        query.sort.as_config_key(),
        if query.has_more { "yes" } else { "no" }
    );
    out
}

/// What: Fetch and print a listing, then return.
pub async fn handle_listing(source: &dyn DataSource, query: QueryState, pages: u32) {
    tracing::info!(term = %query.term, category = ?query.category, pages, "[CLI] Listing requested");
    let query = collect_listing(source, query, pages).await;
    print!("{}", format_listing(&query));
}
