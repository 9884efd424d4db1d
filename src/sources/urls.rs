//! URL construction for the Open Food Facts endpoints.

use crate::util::percent_encode;

/// Public Open Food Facts instance.
pub const DEFAULT_BASE_URL: &str = "https://world.openfoodfacts.org";

/// Product fields requested from the search endpoint.
pub const FIELDS: &str =
    "code,product_name,brands,image_url,nutrition_grades,categories,categories_tags,ingredients_text,nutriments";

/// What: Normalize a base URL by trimming whitespace and trailing slashes.
#[must_use]
pub fn normalize_base(base: &str) -> &str {
    base.trim().trim_end_matches('/')
}

/// What: URL of one page of the default listing.
#[must_use]
pub fn listing_url(base: &str, page: u32, page_size: u32) -> String {
    format!(
        "{}/cgi/search.pl?search_simple=1&action=process&json=1&page={page}&page_size={page_size}&fields={FIELDS}",
        normalize_base(base)
    )
}

/// What: URL of one page of a free-text search.
///
/// Details:
/// - The term is trimmed and percent-encoded.
#[must_use]
pub fn search_url(base: &str, term: &str, page: u32, page_size: u32) -> String {
    format!(
        "{}/cgi/search.pl?search_terms={}&search_simple=1&action=process&json=1&page={page}&page_size={page_size}&fields={FIELDS}",
        normalize_base(base),
        percent_encode(term.trim())
    )
}

/// What: URL of one page of a category listing.
#[must_use]
pub fn category_url(base: &str, category: &str, page: u32, page_size: u32) -> String {
    format!(
        "{}/cgi/search.pl?action=process&tagtype_0=categories&tag_contains_0=contains&tag_0={}&json=1&page={page}&page_size={page_size}&fields={FIELDS}",
        normalize_base(base),
        percent_encode(category.trim())
    )
}

/// What: URL of the single-product endpoint.
#[must_use]
pub fn product_url(base: &str, code: &str) -> String {
    format!(
        "{}/api/v0/product/{}.json",
        normalize_base(base),
        percent_encode(code.trim())
    )
}

/// What: URL of the category taxonomy.
#[must_use]
pub fn categories_url(base: &str) -> String {
    format!("{}/categories.json", normalize_base(base))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Search and category URLs encode user input and carry paging
    ///
    /// Inputs:
    /// - Term with spaces and a plus sign; category with an apostrophe
    ///
    /// Output:
    /// - Encoded query parameters, page, page size and field list present
    fn urls_encode_terms_and_paging() {
        let u = search_url(DEFAULT_BASE_URL, " dark chocolate+nuts ", 2, 24);
        assert!(u.starts_with("https://world.openfoodfacts.org/cgi/search.pl?"));
        assert!(u.contains("search_terms=dark%20chocolate%2Bnuts&"));
        assert!(u.contains("&page=2&page_size=24&"));
        assert!(u.ends_with(&format!("fields={FIELDS}")));

        let c = category_url("https://example.test/", "Children's foods", 1, 10);
        assert!(c.starts_with("https://example.test/cgi/search.pl?action=process&tagtype_0=categories"));
        assert!(c.contains("tag_0=Children%27s%20foods&json=1&page=1&page_size=10"));
    }

    #[test]
    /// What: Listing, product and category URLs follow the endpoint layout
    ///
    /// Inputs:
    /// - Base URL with trailing slash
    ///
    /// Output:
    /// - No doubled slash; expected paths
    fn urls_fixed_endpoints() {
        let base = "http://localhost:8080/";
        assert_eq!(
            product_url(base, "3017620422003"),
            "http://localhost:8080/api/v0/product/3017620422003.json"
        );
        assert_eq!(categories_url(base), "http://localhost:8080/categories.json");
        let l = listing_url(base, 3, 24);
        assert!(l.starts_with("http://localhost:8080/cgi/search.pl?search_simple=1&action=process&json=1&page=3"));
        assert!(!l.contains("search_terms"));
    }
}
