use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use super::paths::settings_path;
use crate::logic::{DEFAULT_CATEGORY_LIMIT, DEFAULT_CATEGORY_MIN_PRODUCTS};
use crate::sources::urls::DEFAULT_BASE_URL;
use crate::state::{DEFAULT_PAGE_SIZE, SortMode};

/// Largest page size accepted from configuration.
pub const MAX_PAGE_SIZE: u32 = 100;
/// Default per-request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Runtime settings loaded from `settings.conf`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Root URL of the catalog instance.
    pub base_url: String,
    /// Products requested per page (1..=100).
    pub page_size: u32,
    /// Initial sort mode.
    pub sort_mode: SortMode,
    /// Categories must have more products than this to be offered.
    pub category_min_products: u64,
    /// Maximum number of categories offered.
    pub category_limit: usize,
    /// Overall HTTP request timeout.
    pub request_timeout_secs: u64,
    /// Whether the cart pane is visible at startup.
    pub show_cart_pane: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            sort_mode: SortMode::NameAsc,
            category_min_products: DEFAULT_CATEGORY_MIN_PRODUCTS,
            category_limit: DEFAULT_CATEGORY_LIMIT,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            show_cart_pane: false,
        }
    }
}

/// Commented template written when no `settings.conf` exists yet.
pub const SETTINGS_SKELETON: &str = "\
# NutriExplorer settings
# Lines are `key = value`; `#` starts a comment.

# Catalog instance to query
base_url = https://world.openfoodfacts.org

# Products fetched per page (1-100)
page_size = 24

# Initial sort: name_asc, name_desc, grade_asc, grade_desc
sort_mode = name_asc

# Category picker: only categories with more products than this, at most `category_limit`
category_min_products = 1000
category_limit = 50

# HTTP timeout in seconds
request_timeout_secs = 30

# Show the cart pane on startup
show_cart_pane = false
";

/// What: Interpret a boolean setting value.
fn parse_bool(val: &str) -> bool {
    let lv = val.to_ascii_lowercase();
    lv == "true" || lv == "1" || lv == "yes" || lv == "on"
}

/// What: Remove a trailing `# comment` from a value.
///
/// Details:
/// - Only a `#` preceded by whitespace starts a comment, so URL fragments and
///   `//` in URLs survive.
fn strip_inline_comment(s: &str) -> &str {
    let bytes = s.as_bytes();
    let cut = (1..bytes.len()).find(|&i| bytes[i] == b'#' && bytes[i - 1].is_ascii_whitespace());
    cut.map_or(s, |i| &s[..i]).trim()
}

/// What: Parse settings from settings.conf content.
///
/// Inputs:
/// - `content`: File content.
/// - `settings`: Settings to update in place.
///
/// Output:
/// - None (modifies `settings`).
///
/// Details:
/// - Keys are case-insensitive; `.`, `-` and spaces normalize to `_`.
/// - Unknown keys are ignored; unparsable or out-of-range values keep the current value.
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let Some((raw_key, val_raw)) = trimmed.split_once('=') else {
            continue;
        };
        let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
        let val = strip_inline_comment(val_raw.trim());
        match key.as_str() {
            "base_url" | "api_base_url" => {
                if val.starts_with("http://") || val.starts_with("https://") {
                    settings.base_url = val.trim_end_matches('/').to_string();
                } else {
                    warn!(value = val, "[Config] Ignoring base_url without http(s) scheme");
                }
            }
            "page_size" => {
                if let Ok(v) = val.parse::<u32>()
                    && (1..=MAX_PAGE_SIZE).contains(&v)
                {
                    settings.page_size = v;
                }
            }
            "sort_mode" | "results_sort" => {
                if let Some(sm) = SortMode::from_config_key(val) {
                    settings.sort_mode = sm;
                }
            }
            "category_min_products" => {
                if let Ok(v) = val.parse::<u64>() {
                    settings.category_min_products = v;
                }
            }
            "category_limit" => {
                if let Ok(v) = val.parse::<usize>()
                    && v > 0
                {
                    settings.category_limit = v;
                }
            }
            "request_timeout_secs" | "timeout" => {
                if let Ok(v) = val.parse::<u64>()
                    && v > 0
                {
                    settings.request_timeout_secs = v;
                }
            }
            "show_cart_pane" | "cart_visible" => {
                settings.show_cart_pane = parse_bool(val);
            }
            _ => {}
        }
    }
}

/// What: Load settings from a specific file, falling back to defaults.
#[must_use]
pub fn load_settings_from(path: &Path) -> Settings {
    let mut out = Settings::default();
    match fs::read_to_string(path) {
        Ok(content) => {
            debug!(path = %path.display(), bytes = content.len(), "[Config] Loaded settings.conf");
            parse_settings(&content, &mut out);
        }
        Err(_) => {
            debug!(path = %path.display(), "[Config] settings.conf missing, using defaults");
        }
    }
    out
}

/// What: Load user settings from `settings.conf` under the config directory.
///
/// Output:
/// - A `Settings` value; defaults when the file is missing or values are invalid.
#[must_use]
pub fn settings() -> Settings {
    load_settings_from(&settings_path())
}

/// What: Write [`SETTINGS_SKELETON`] to `path` when no file exists there.
///
/// Details:
/// - Existing files are never touched; write failures are logged.
pub fn ensure_settings_file(path: &Path) {
    if path.exists() {
        return;
    }
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    match fs::write(path, SETTINGS_SKELETON) {
        Ok(()) => tracing::info!(path = %path.display(), "[Config] Wrote default settings.conf"),
        Err(e) => warn!(path = %path.display(), error = %e, "[Config] Could not write settings.conf"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Keys normalize, inline comments strip, URLs keep their slashes
    ///
    /// Inputs:
    /// - Settings text with mixed-case keys, dashes and trailing comments
    ///
    /// Output:
    /// - Every recognized key applied
    fn parse_settings_applies_known_keys() {
        let content = "\
# comment line
Base-URL = https://fr.openfoodfacts.org/   # French instance
page.size = 48
sort_mode = Grade-Desc
category_min_products = 500
category limit = 10
request_timeout_secs = 5
show_cart_pane = yes
unknown_key = whatever
";
        let mut s = Settings::default();
        parse_settings(content, &mut s);
        assert_eq!(s.base_url, "https://fr.openfoodfacts.org");
        assert_eq!(s.page_size, 48);
        assert_eq!(s.sort_mode, SortMode::GradeDesc);
        assert_eq!(s.category_min_products, 500);
        assert_eq!(s.category_limit, 10);
        assert_eq!(s.request_timeout_secs, 5);
        assert!(s.show_cart_pane);
    }

    #[test]
    /// What: Invalid values keep defaults
    ///
    /// Inputs:
    /// - Page size out of range, zero timeout, unknown sort, scheme-less URL
    ///
    /// Output:
    /// - Defaults unchanged
    fn parse_settings_rejects_invalid_values() {
        let content = "page_size = 0\npage_size = 101\nrequest_timeout_secs = 0\nsort_mode = random\nbase_url = localhost\n";
        let mut s = Settings::default();
        parse_settings(content, &mut s);
        assert_eq!(s, Settings::default());
    }

    #[test]
    /// What: Skeleton is written once and parses back to defaults
    ///
    /// Inputs:
    /// - Temporary path without a settings file
    ///
    /// Output:
    /// - File created; second call leaves edits intact; contents load as defaults
    fn skeleton_written_once_and_parses_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("settings.conf");
        ensure_settings_file(&path);
        assert_eq!(load_settings_from(&path), Settings::default());
        fs::write(&path, "page_size = 12\n").expect("write");
        ensure_settings_file(&path);
        assert_eq!(load_settings_from(&path).page_size, 12);
        assert_eq!(
            load_settings_from(&dir.path().join("missing.conf")),
            Settings::default()
        );
    }
}
