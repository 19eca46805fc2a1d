//! Settings provider using Figment for shlerp

use crate::{error::ConfigError, ConfigResult};
use figment::{
    providers::{Env, Format, Json, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Name of the settings file inside the configuration directory
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Prefix of environment variables that override settings
pub const ENV_PREFIX: &str = "SHLERP_";

/// Default bound on the rule history
pub const DEFAULT_HISTORY_LIMIT: usize = 5;

/// Default rule source file name
pub const DEFAULT_RULE_SOURCE: &str = "rules.json";

/// Default history file name
pub const DEFAULT_HISTORY_FILE: &str = "tmp.json";

/// Top-level settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Rule detection settings
    #[serde(default)]
    pub rules: RulesSettings,
}

/// Settings consumed by the rule store and the history cache
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesSettings {
    /// Maximum number of rule names kept in the history
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Rule source file, relative to the configuration directory unless absolute
    #[serde(default = "default_rule_source")]
    pub source: PathBuf,

    /// History file, relative to the configuration directory unless absolute
    #[serde(default = "default_history_file")]
    pub history: PathBuf,
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

fn default_rule_source() -> PathBuf {
    PathBuf::from(DEFAULT_RULE_SOURCE)
}

fn default_history_file() -> PathBuf {
    PathBuf::from(DEFAULT_HISTORY_FILE)
}

impl Default for RulesSettings {
    fn default() -> Self {
        Self {
            history_limit: default_history_limit(),
            source: default_rule_source(),
            history: default_history_file(),
        }
    }
}

impl Settings {
    /// Load settings for a configuration directory
    ///
    /// Shorthand for [`SettingsProvider::new`] followed by [`SettingsProvider::load`].
    pub fn load(config_dir: impl Into<PathBuf>) -> ConfigResult<Self> {
        SettingsProvider::new(config_dir).load()
    }

    /// Check values that serde cannot express
    pub fn validate(&self) -> ConfigResult<()> {
        if self.rules.history_limit == 0 {
            return Err(ConfigError::invalid_value(
                "rules.history_limit",
                "must be a positive integer",
            ));
        }
        if self.rules.source.as_os_str().is_empty() {
            return Err(ConfigError::invalid_value("rules.source", "must not be empty"));
        }
        if self.rules.history.as_os_str().is_empty() {
            return Err(ConfigError::invalid_value("rules.history", "must not be empty"));
        }
        Ok(())
    }
}

impl RulesSettings {
    /// Rule source location resolved against `config_dir`
    pub fn source_path(&self, config_dir: &Path) -> PathBuf {
        resolve(config_dir, &self.source)
    }

    /// History file location resolved against `config_dir`
    pub fn history_path(&self, config_dir: &Path) -> PathBuf {
        resolve(config_dir, &self.history)
    }
}

fn resolve(config_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        config_dir.join(path)
    }
}

/// Settings provider using figment
///
/// Sources in precedence order (later sources override earlier ones):
/// 1. Default values
/// 2. `settings.json` in the configuration directory (optional)
/// 3. Environment variables (`SHLERP_` prefix, `__` separates nested keys)
///
/// Settings are read fresh on every call.
pub struct SettingsProvider {
    config_dir: PathBuf,
}

impl SettingsProvider {
    /// Create a provider for the given configuration directory
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    /// Path of the settings file this provider reads
    pub fn settings_path(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILE_NAME)
    }

    /// Load and validate settings from all sources
    pub fn load(&self) -> ConfigResult<Settings> {
        debug!(
            "Loading settings from {}",
            self.settings_path().display()
        );

        let settings: Settings = self.build_figment().extract()?;
        settings.validate()?;

        trace!("Loaded settings: {:?}", settings);
        Ok(settings)
    }

    fn build_figment(&self) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Json::file(self.settings_path()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.rules.history_limit, DEFAULT_HISTORY_LIMIT);
        assert_eq!(settings.rules.source, PathBuf::from("rules.json"));
        assert_eq!(settings.rules.history, PathBuf::from("tmp.json"));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_zero_history_limit_is_invalid() {
        let mut settings = Settings::default();
        settings.rules.history_limit = 0;
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("rules.history_limit"));
    }

    #[test]
    fn test_relative_paths_resolve_against_config_dir() {
        let rules = RulesSettings::default();
        let dir = Path::new("/etc/shlerp");
        assert_eq!(rules.source_path(dir), dir.join("rules.json"));
        assert_eq!(rules.history_path(dir), dir.join("tmp.json"));
    }

    #[test]
    fn test_absolute_paths_are_kept() {
        let rules = RulesSettings {
            source: PathBuf::from("/srv/rules.json"),
            ..RulesSettings::default()
        };
        assert_eq!(
            rules.source_path(Path::new("/etc/shlerp")),
            PathBuf::from("/srv/rules.json")
        );
    }
}
