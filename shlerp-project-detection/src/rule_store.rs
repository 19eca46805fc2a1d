//! Loading rules and reading/writing the history file

use crate::error::{DetectionError, Result};
use crate::history::History;
use crate::types::Rule;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Location of the rule source and of the history file
///
/// Nothing is cached. Every call goes back to disk so edits made while a
/// detection is running are seen by the next pass.
#[derive(Debug, Clone)]
pub struct RuleStore {
    source: PathBuf,
    history: PathBuf,
}

impl RuleStore {
    pub fn new(source: impl Into<PathBuf>, history: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            history: history.into(),
        }
    }

    pub fn source_path(&self) -> &Path {
        &self.source
    }

    pub fn history_path(&self) -> &Path {
        &self.history
    }

    /// Read and validate the full rule list
    ///
    /// # Errors
    ///
    /// * `ConfigMissing` if the source cannot be read
    /// * `RuleSourceInvalid` if it is not a JSON array of rules
    /// * `DuplicateRule` if two rules share a name
    pub fn load_rules(&self) -> Result<Vec<Rule>> {
        let content = fs::read_to_string(&self.source)
            .map_err(|e| DetectionError::config_missing(&self.source, e))?;

        let rules: Vec<Rule> =
            serde_json::from_str(&content).map_err(|e| DetectionError::RuleSourceInvalid {
                path: self.source.clone(),
                source: e,
            })?;

        let mut names = HashSet::new();
        for rule in &rules {
            if !names.insert(rule.name.as_str()) {
                return Err(DetectionError::DuplicateRule {
                    path: self.source.clone(),
                    name: rule.name.clone(),
                });
            }
        }

        debug!("Loaded {} rules from {}", rules.len(), self.source.display());
        Ok(rules)
    }

    /// Look up a single rule by name
    pub fn find_rule(&self, name: &str) -> Result<Option<Rule>> {
        Ok(self
            .load_rules()?
            .into_iter()
            .find(|rule| rule.name == name))
    }

    /// Read the history file
    ///
    /// # Errors
    ///
    /// Returns `HistoryUnavailable` when the file is absent or malformed.
    pub fn read_history(&self) -> Result<History> {
        let content = fs::read_to_string(&self.history)
            .map_err(|e| DetectionError::history_unavailable(&self.history, e))?;

        serde_json::from_str(&content)
            .map_err(|e| DetectionError::history_unavailable(&self.history, e))
    }

    /// Read the history file, treating any failure as "no history"
    pub fn load_history(&self) -> Option<History> {
        match self.read_history() {
            Ok(history) => Some(history),
            Err(e) => {
                info!("{}", e);
                None
            }
        }
    }

    /// Write the history file, creating its parent directory if needed
    ///
    /// # Errors
    ///
    /// Returns `PersistenceFailure` when the file cannot be written.
    pub fn persist_history(&self, history: &History) -> Result<()> {
        let failure = |e: io::Error| DetectionError::persistence_failure(&self.history, e);

        if let Some(parent) = self.history.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(failure)?;
            }
        }

        let content = serde_json::to_string_pretty(history)
            .map_err(io::Error::from)
            .map_err(failure)?;
        fs::write(&self.history, content).map_err(failure)?;

        debug!("History written to {}", self.history.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> RuleStore {
        RuleStore::new(dir.path().join("rules.json"), dir.path().join("tmp.json"))
    }

    #[test]
    fn test_load_rules() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("rules.json"),
            r#"[{"name":"go","detect":{"files":[{"name":["go.mod"],"weight":10}]}},{"name":"node"}]"#,
        )
        .unwrap();

        let rules = store_in(&temp_dir).load_rules().unwrap();

        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].name, "go");
        assert_eq!(rules[0].detect.files[0].weight, 10);
    }

    #[test]
    fn test_missing_rule_source() {
        let temp_dir = TempDir::new().unwrap();

        let result = store_in(&temp_dir).load_rules();

        assert!(matches!(result, Err(DetectionError::ConfigMissing { .. })));
    }

    #[test]
    fn test_rule_source_that_is_not_a_list() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("rules.json"), r#"{"name":"go"}"#).unwrap();

        let result = store_in(&temp_dir).load_rules();

        assert!(matches!(
            result,
            Err(DetectionError::RuleSourceInvalid { .. })
        ));
    }

    #[test]
    fn test_duplicate_rule_names() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("rules.json"),
            r#"[{"name":"go"},{"name":"node"},{"name":"go"}]"#,
        )
        .unwrap();

        match store_in(&temp_dir).load_rules() {
            Err(DetectionError::DuplicateRule { name, .. }) => assert_eq!(name, "go"),
            other => panic!("expected DuplicateRule, got {:?}", other),
        }
    }

    #[test]
    fn test_find_rule() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("rules.json"),
            r#"[{"name":"go"},{"name":"node"}]"#,
        )
        .unwrap();
        let store = store_in(&temp_dir);

        assert_eq!(store.find_rule("node").unwrap().unwrap().name, "node");
        assert!(store.find_rule("rust").unwrap().is_none());
    }

    #[test]
    fn test_history_round_trip_through_disk() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);

        store
            .persist_history(&History::new(["node", "go"]))
            .unwrap();

        let history = store.read_history().unwrap();
        assert_eq!(history.entries(), ["node", "go"]);
    }

    #[test]
    fn test_absent_history() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);

        assert!(matches!(
            store.read_history(),
            Err(DetectionError::HistoryUnavailable { .. })
        ));
        assert!(store.load_history().is_none());
    }

    #[test]
    fn test_malformed_history() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("tmp.json"), "[1, 2").unwrap();

        assert!(store_in(&temp_dir).load_history().is_none());
    }

    #[test]
    fn test_persist_creates_parent_directory() {
        let temp_dir = TempDir::new().unwrap();
        let history_path = temp_dir.path().join("state").join("tmp.json");
        let store = RuleStore::new(temp_dir.path().join("rules.json"), &history_path);

        store.persist_history(&History::new(["go"])).unwrap();

        assert!(history_path.is_file());
    }

    #[test]
    fn test_persist_failure() {
        let temp_dir = TempDir::new().unwrap();
        // A directory where the history file should be
        fs::create_dir(temp_dir.path().join("tmp.json")).unwrap();

        let result = store_in(&temp_dir).persist_history(&History::new(["go"]));

        assert!(matches!(
            result,
            Err(DetectionError::PersistenceFailure { .. })
        ));
    }
}
