use crate::state::Category;

/// Categories with at most this many products are hidden from the picker.
pub const DEFAULT_CATEGORY_MIN_PRODUCTS: u64 = 1000;
/// Maximum number of categories offered in the picker.
pub const DEFAULT_CATEGORY_LIMIT: usize = 50;

/// What: Reduce the full taxonomy to the categories worth offering.
///
/// Inputs:
/// - `tags`: Every category returned by the data source
/// - `min_products`: Keep only categories with strictly more products
/// - `limit`: Maximum number of categories returned
///
/// Output:
/// - Categories ordered by product count, largest first, capped at `limit`.
///
/// Details:
/// - This is display policy for the picker; the query pipeline itself accepts
///   any category name.
#[must_use]
pub fn relevant_categories(tags: Vec<Category>, min_products: u64, limit: usize) -> Vec<Category> {
    let mut out: Vec<Category> = tags
        .into_iter()
        .filter(|c| c.products > min_products && !c.name.trim().is_empty())
        .collect();
    out.sort_by(|a, b| b.products.cmp(&a.products));
    out.truncate(limit);
    out
}
