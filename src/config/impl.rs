use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;

use super::AppConfig;

static CONFIG: OnceLock<ArcSwap<AppConfig>> = OnceLock::new();

/// Get the global configuration instance
///
/// Returns an Arc pointer to the configuration, which is cheap to clone
/// and doesn't hold any locks. Falls back to defaults when `init_config`
/// has not been called (library use, tests).
pub fn get_config() -> Arc<AppConfig> {
    CONFIG
        .get_or_init(|| ArcSwap::from_pointee(AppConfig::default()))
        .load_full()
}

/// Initialize the global configuration
///
/// Loads configuration from `path` (or "config.toml" in the current
/// directory when `None`). A missing default file means in-memory defaults.
///
/// # Examples
/// ```no_run
/// use linkflow::config::init_config;
/// init_config(None);
/// ```
pub fn init_config(path: Option<&str>) {
    set_config(AppConfig::load(path));
}

/// Replace the global configuration, e.g. after applying CLI overrides
pub fn set_config(config: AppConfig) {
    CONFIG
        .get_or_init(|| ArcSwap::from_pointee(AppConfig::default()))
        .store(Arc::new(config));
}
