//! Short run identifiers used to tag every log line of one invocation

use rand::seq::index;
use std::fmt;
use uuid::Uuid;

/// Number of characters in a run identifier
pub const RUN_ID_LEN: usize = 6;

/// Number of UUID groups sampled to build a run identifier
const SAMPLED_GROUPS: usize = 3;

/// A six character identifier for one shlerp invocation
///
/// Built from the first two hex digits of three distinct, randomly chosen
/// groups of a v4 UUID. Short enough to read in a log prefix, random enough
/// to tell concurrent runs apart.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RunId(String);

impl RunId {
    /// Generate a fresh run identifier
    pub fn generate() -> Self {
        let uuid = Uuid::new_v4().hyphenated().to_string();
        let groups: Vec<&str> = uuid.split('-').collect();

        let mut rng = rand::rng();
        let picked = index::sample(&mut rng, groups.len(), SAMPLED_GROUPS);

        let id = picked
            .iter()
            .map(|i| &groups[i][..2])
            .collect::<String>();
        Self(id)
    }

    /// Borrow the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RunId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
