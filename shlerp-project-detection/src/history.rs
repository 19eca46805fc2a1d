//! Recently elected rule names, most recent first
//!
//! The history biases detection toward what recently won: the first pass only
//! considers rules named here. It is a cache, so losing it never changes the
//! final result, only the cost of reaching it.

use crate::types::Rule;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Ordered list of rule names that won recent elections
///
/// Serialized as `{"rules_history": [...]}`. Other keys found in the history
/// file are carried through a load and persist cycle untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    #[serde(rename = "rules_history")]
    entries: Vec<String>,

    #[serde(flatten)]
    extra: serde_json::Map<String, serde_json::Value>,
}

impl History {
    /// Build a history from names, most recent first
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
            extra: serde_json::Map::new(),
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry == name)
    }

    pub fn most_recent(&self) -> Option<&str> {
        self.entries.first().map(String::as_str)
    }

    /// Move `name` to the front, inserting it if absent
    ///
    /// The existing entries are first cut down to `limit` (and stripped of
    /// repeated names), so a history written under a larger limit shrinks on
    /// its next update. A new name that overflows the limit evicts the
    /// oldest entry. Applying the same update twice yields the same history.
    pub fn promote_or_insert(&self, name: &str, limit: usize) -> History {
        let mut seen = HashSet::new();
        let mut entries: Vec<String> = self
            .entries
            .iter()
            .filter(|entry| seen.insert(entry.as_str()))
            .take(limit)
            .cloned()
            .collect();

        match entries.iter().position(|entry| entry == name) {
            Some(0) => {}
            Some(index) => {
                let promoted = entries.remove(index);
                entries.insert(0, promoted);
            }
            None => {
                entries.insert(0, name.to_string());
                entries.truncate(limit);
            }
        }

        History {
            entries,
            extra: self.extra.clone(),
        }
    }
}

/// Rules named in the history, in the order they appear in the rule list
///
/// History names with no matching rule are ignored.
pub fn narrow(rules: &[Rule], history: &History) -> Vec<Rule> {
    rules
        .iter()
        .filter(|rule| history.contains(&rule.name))
        .cloned()
        .collect()
}
