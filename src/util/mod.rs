//! Small utility helpers for URL encoding and product text formatting.
//!
//! The functions in this module are dependency-light and shared by the HTTP
//! client, the terminal UI and the one-shot CLI output.

use std::fmt::Write;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::state::Product;

/// Fallback shown for a product without a name.
pub const UNKNOWN_PRODUCT: &str = "Unknown Product";
/// Fallback shown for a product without a brand.
pub const UNKNOWN_BRAND: &str = "Unknown Brand";

/// What: Percent-encode a string for use in URLs according to RFC 3986.
///
/// Inputs:
/// - `input`: String to encode.
///
/// Output:
/// - Returns a percent-encoded string where reserved characters are escaped.
///
/// Details:
/// - Unreserved characters (`A-Z`, `a-z`, `0-9`, `-`, `.`, `_`, `~`) are left as-is.
/// - Space is encoded as `%20` (not `+`).
/// - Operates on raw bytes; any non-ASCII bytes are hex-escaped.
#[must_use]
pub fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for &b in input.as_bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(b as char);
            }
            b' ' => out.push_str("%20"),
            _ => {
                out.push('%');
                let _ = write!(out, "{b:02X}");
            }
        }
    }
    out
}

/// What: Display name of a product, with the "Unknown Product" fallback.
#[must_use]
pub fn display_name(p: &Product) -> &str {
    p.product_name
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(UNKNOWN_PRODUCT)
}

/// What: Brand of a product, with the "Unknown Brand" fallback.
#[must_use]
pub fn display_brand(p: &Product) -> &str {
    p.brands
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(UNKNOWN_BRAND)
}

/// What: Badge letter for a nutrition grade: upper-case `A`..`E`, else `?`.
#[must_use]
pub fn grade_label(p: &Product) -> char {
    p.grade().map_or('?', |c| c.to_ascii_uppercase())
}

/// What: Short chip text for a category tag.
///
/// Inputs:
/// - `tag`: Taxonomy tag such as `en:breakfast-cereals`
///
/// Output:
/// - Language prefix removed and only the last `-` segment kept (`cereals`).
#[must_use]
pub fn short_tag(tag: &str) -> String {
    let bare = strip_lang_prefix(tag);
    bare.rsplit('-').next().unwrap_or(bare).to_string()
}

/// What: First `n` category chips of a product.
#[must_use]
pub fn category_chips(p: &Product, n: usize) -> Vec<String> {
    p.categories_tags
        .as_deref()
        .unwrap_or_default()
        .iter()
        .take(n)
        .map(|t| short_tag(t))
        .filter(|t| !t.is_empty())
        .collect()
}

/// What: Readable text of a label tag (`en:no-added-sugar` -> `no added sugar`).
#[must_use]
pub fn label_chip(tag: &str) -> String {
    strip_lang_prefix(tag).replace('-', " ")
}

/// What: Remove a leading `en:` language prefix.
fn strip_lang_prefix(tag: &str) -> &str {
    tag.strip_prefix("en:").unwrap_or(tag)
}

/// What: Format a nutrient amount without trailing zeros (`5.0` -> `5`, `0.107` -> `0.107`).
#[must_use]
pub fn format_amount(v: f64) -> String {
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

/// What: Truncate `s` to at most `max` terminal columns, adding `…` when cut.
///
/// Details:
/// - Uses display width so wide glyphs never overflow a pane.
#[must_use]
pub fn truncate_to_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0usize;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Validate percent-encoding for reserved characters and unicode.
    ///
    /// Inputs:
    /// - Strings containing spaces, plus signs, and non-ASCII glyphs.
    ///
    /// Output:
    /// - Encoded results match RFC 3986 expectations.
    fn util_percent_encode() {
        assert_eq!(percent_encode(""), "");
        assert_eq!(percent_encode("abc-_.~"), "abc-_.~");
        assert_eq!(percent_encode("a b"), "a%20b");
        assert_eq!(percent_encode("C++"), "C%2B%2B");
        assert_eq!(percent_encode("é"), "%C3%A9");
    }

    #[test]
    /// What: Product text fallbacks and chips
    ///
    /// Inputs:
    /// - Product without name or brand, with four category tags and an unknown grade
    ///
    /// Output:
    /// - Fallback texts, `?` badge, first three short chips
    fn util_product_text_helpers() {
        let p = Product {
            product_name: Some("   ".into()),
            nutrition_grades: Some("unknown".into()),
            categories_tags: Some(vec![
                "en:plant-based-foods".into(),
                "en:breakfast-cereals".into(),
                "fr:cereales".into(),
                "en:snacks".into(),
            ]),
            ..Product::default()
        };
        assert_eq!(display_name(&p), UNKNOWN_PRODUCT);
        assert_eq!(display_brand(&p), UNKNOWN_BRAND);
        assert_eq!(grade_label(&p), '?');
        assert_eq!(category_chips(&p, 3), vec!["foods", "cereals", "fr:cereales"]);
        assert_eq!(label_chip("en:no-added-sugar"), "no added sugar");
    }

    #[test]
    /// What: Amount formatting and width truncation
    ///
    /// Inputs:
    /// - Whole, fractional and zero amounts; long and wide strings
    ///
    /// Output:
    /// - Trimmed decimals; truncated text fits within the column budget
    fn util_format_and_truncate() {
        assert_eq!(format_amount(5.0), "5");
        assert_eq!(format_amount(0.107), "0.107");
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(12.5), "12.5");
        assert_eq!(truncate_to_width("Hazelnut spread", 8), "Hazelnu…");
        assert_eq!(truncate_to_width("short", 8), "short");
        assert!(truncate_to_width("日本語のテキスト", 7).width() <= 7);
    }
}
