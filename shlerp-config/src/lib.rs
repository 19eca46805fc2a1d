//! # shlerp Settings
//!
//! Loads the settings that drive rule detection from a configuration
//! directory. `settings.json` is optional; environment variables prefixed with
//! `SHLERP_` override it, using `__` to reach nested keys:
//!
//! ```text
//! SHLERP_RULES__HISTORY_LIMIT=3
//! ```
//!
//! ```no_run
//! use shlerp_config::Settings;
//!
//! let settings = Settings::load(".")?;
//! println!("history limit: {}", settings.rules.history_limit);
//! # Ok::<(), shlerp_config::ConfigError>(())
//! ```

pub mod error;
pub mod settings;

pub use error::ConfigError;
pub use settings::{
    RulesSettings, Settings, SettingsProvider, DEFAULT_HISTORY_FILE, DEFAULT_HISTORY_LIMIT,
    DEFAULT_RULE_SOURCE, ENV_PREFIX, SETTINGS_FILE_NAME,
};

/// Result type for settings operations
pub type ConfigResult<T> = Result<T, ConfigError>;
