use crate::state::{MergeMode, Product};

/// What: Merge a freshly fetched page into the displayed list.
///
/// Inputs:
/// - `existing`: Currently displayed products
/// - `page`: Newly fetched (already sorted) page
/// - `mode`: Replace or Append
///
/// Output:
/// - Replace: `page` verbatim. Append: `existing` followed by `page`.
///
/// Details:
/// - Duplicate codes are passed through untouched; the upstream listing may
///   legitimately repeat a product across pages.
#[must_use]
pub fn apply(existing: Vec<Product>, page: Vec<Product>, mode: MergeMode) -> Vec<Product> {
    match mode {
        MergeMode::Replace => page,
        MergeMode::Append => {
            let mut out = existing;
            out.extend(page);
            out
        }
    }
}
