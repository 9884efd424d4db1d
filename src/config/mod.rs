//! User configuration: XDG directories and the `settings.conf` file.

mod paths;
mod settings;

pub use paths::{config_dir, logs_dir, settings_path, state_dir};
pub use settings::{
    MAX_PAGE_SIZE, SETTINGS_SKELETON, Settings, ensure_settings_file, load_settings_from, parse_settings,
    settings,
};

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

/// Serializes tests that mutate process environment variables.
#[cfg(test)]
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
