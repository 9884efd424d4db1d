//! Command-line category listing.

use std::fmt::Write as _;

use crate::config::Settings;
use crate::logic::relevant_categories;
use crate::sources::DataSource;
use crate::state::Category;

/// What: Render categories as `name (products)` lines.
#[must_use]
pub fn format_categories(categories: &[Category]) -> String {
    let mut out = String::new();
    for c in categories {
        let _ = writeln!(out, "{} ({})", c.name, c.products);
    }
    let _ = writeln!(out, "-- {} categories", categories.len());
    out
}

/// What: Fetch the taxonomy and print the categories the picker would offer.
pub async fn handle_categories(source: &dyn DataSource, settings: &Settings) {
    let all = source.list_categories().await;
    let kept = relevant_categories(all, settings.category_min_products, settings.category_limit);
    print!("{}", format_categories(&kept));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Lines show name and product count plus a total
    ///
    /// Inputs:
    /// - One category with 1200 products
    ///
    /// Output:
    /// - "Snacks (1200)" and "-- 1 categories"
    fn format_categories_lines() {
        let text = format_categories(&[Category {
            name: "Snacks".into(),
            products: 1200,
            ..Category::default()
        }]);
        assert_eq!(text, "Snacks (1200)\n-- 1 categories\n");
    }
}
