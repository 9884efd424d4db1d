//! Shared utilities for argument processing.

use crate::config::{MAX_PAGE_SIZE, Settings};

/// What: Determine the log level based on command-line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides `log_level`.
pub fn determine_log_level(args: &crate::args::Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}

/// What: Apply command-line overrides on top of loaded settings.
///
/// Details:
/// - Out-of-range values are ignored with a warning, like invalid
///   `settings.conf` entries.
pub fn apply_overrides(args: &crate::args::Args, settings: &mut Settings) {
    if let Some(url) = &args.base_url {
        let url = url.trim();
        if url.starts_with("http://") || url.starts_with("https://") {
            settings.base_url = url.trim_end_matches('/').to_string();
        } else {
            tracing::warn!(value = %url, "[Config] Ignoring --base-url without http(s) scheme");
        }
    }
    if let Some(n) = args.page_size {
        if (1..=MAX_PAGE_SIZE).contains(&n) {
            settings.page_size = n;
        } else {
            tracing::warn!(value = n, "[Config] Ignoring --page-size outside 1..=100");
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::args::Args;

    #[test]
    /// What: Verbose wins over the explicit level
    ///
    /// Inputs:
    /// - `--log-level warn -v`
    ///
    /// Output:
    /// - "debug"
    fn determine_log_level_verbose_wins() {
        let args = Args::parse_from(["nutriexplorer", "--log-level", "warn", "-v"]);
        assert_eq!(determine_log_level(&args), "debug");
        let args = Args::parse_from(["nutriexplorer", "--log-level", "warn"]);
        assert_eq!(determine_log_level(&args), "warn");
    }

    #[test]
    /// What: Valid overrides replace settings; invalid ones are ignored
    ///
    /// Inputs:
    /// - Base URL with trailing slash and page size 500
    ///
    /// Output:
    /// - URL applied without the slash; page size unchanged
    fn apply_overrides_validates() {
        let args = Args::parse_from([
            "nutriexplorer",
            "--base-url",
            "https://fr.openfoodfacts.org/",
            "--page-size",
            "500",
        ]);
        let mut s = Settings::default();
        apply_overrides(&args, &mut s);
        assert_eq!(s.base_url, "https://fr.openfoodfacts.org");
        assert_eq!(s.page_size, Settings::default().page_size);
    }
}
