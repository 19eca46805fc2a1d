//! Types shared between the rule definitions and the backup collaborators

use serde::{Deserialize, Serialize};

/// Entries a rule asks the backup to leave out
///
/// Matching is by substring on the entry name, so `"cache"` also drops
/// `".cache"` and `"cache-old"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exclusions {
    /// Folder name fragments to skip
    #[serde(default)]
    pub folders: Vec<String>,

    /// File name fragments to skip
    #[serde(default)]
    pub files: Vec<String>,

    /// Dependency folder (e.g. `node_modules`) that is never backed up
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dep_folder: Option<String>,
}

impl Exclusions {
    /// No exclusions at all
    pub fn none() -> Self {
        Self::default()
    }

    /// Only skip the given dependency folder
    pub fn dependency_folder(name: impl Into<String>) -> Self {
        Self {
            dep_folder: Some(name.into()),
            ..Self::default()
        }
    }

    /// True when `name` contains any folder exclusion
    pub fn excludes_folder(&self, name: &str) -> bool {
        self.folders.iter().any(|excl| name.contains(excl.as_str()))
    }

    /// True when `name` contains any file exclusion
    pub fn excludes_file(&self, name: &str) -> bool {
        self.files.iter().any(|excl| name.contains(excl.as_str()))
    }

    /// True when `name` contains the dependency folder name
    pub fn mentions_dep_folder(&self, name: &str) -> bool {
        self.dep_folder
            .as_deref()
            .is_some_and(|dep| !dep.is_empty() && name.contains(dep))
    }

    /// True when `name` is exactly the dependency folder
    pub fn is_dep_folder(&self, name: &str) -> bool {
        self.dep_folder.as_deref() == Some(name)
    }
}
