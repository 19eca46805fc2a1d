//! Rule definitions and per-run detection leads

use serde::{Deserialize, Serialize};
use shlerp_common::Exclusions;

/// A named project type with its detection criteria
///
/// Rules are read from a JSON array and never modified by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Unique rule name, also the key stored in the history
    pub name: String,

    /// Signals that identify this project type
    #[serde(default)]
    pub detect: Detect,

    /// Backup exclusions applied once this rule is elected
    #[serde(default)]
    pub exclusions: Exclusions,
}

/// Detection criteria of a rule
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detect {
    #[serde(default)]
    pub files: Vec<FileCriterion>,

    #[serde(default)]
    pub folders: Vec<FolderCriterion>,
}

/// A set of file names (or `*.ext` patterns) worth `weight` points
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileCriterion {
    /// Literal file names relative to the project root, or extension patterns
    #[serde(rename = "name")]
    pub names: Vec<String>,

    /// Substring the file must contain; only honored for a single literal name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    pub weight: u32,
}

/// A folder holding a set of files, worth `weight` points when all are present
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderCriterion {
    pub name: String,

    #[serde(default)]
    pub files: Vec<String>,

    pub weight: u32,
}

/// Returns true when a criterion name is an extension pattern (`*.ext`)
///
/// Extension patterns are not resolved by the shallow scan. They are deferred
/// to the crawler and only consulted when the scan cannot decide.
pub fn is_extension_pattern(name: &str) -> bool {
    name.starts_with("*.")
}

/// An extension pattern deferred from the scan to the crawl
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PendingExtension {
    pub pattern: String,
    pub weight: u32,
}

/// Evidence accumulated for one rule during a single detection pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lead {
    pub name: String,
    pub extensions: Vec<PendingExtension>,
    pub total: u64,
}

impl Lead {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extensions: Vec::new(),
            total: 0,
        }
    }

    /// Add points to the running total
    pub fn credit(&mut self, points: u64) {
        self.total = self.total.saturating_add(points);
    }

    /// Queue an extension pattern for the crawler
    pub fn defer(&mut self, pattern: impl Into<String>, weight: u32) {
        self.extensions.push(PendingExtension {
            pattern: pattern.into(),
            weight,
        });
    }

    pub fn has_weight(&self) -> bool {
        self.total > 0
    }
}
