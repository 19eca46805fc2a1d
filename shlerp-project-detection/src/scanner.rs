//! Shallow evaluation of a rule against a project root

use crate::types::{is_extension_pattern, FileCriterion, FolderCriterion, Lead, Rule};
use std::fs;
use std::path::Path;
use tracing::{debug, trace};

/// Score a rule against the project root without walking the tree
///
/// File criteria are checked in rule order and then folder criteria. A single
/// literal name scores when the file exists and, if the criterion carries a
/// pattern, when its content contains that pattern. With several names each
/// literal name present scores on its own and patterns are ignored. Extension
/// patterns are never scored here; they are collected on the lead for the
/// crawler.
///
/// # Arguments
///
/// * `project_dir` - Project root the criteria are relative to
/// * `rule` - Rule to evaluate
///
/// # Returns
///
/// A lead carrying the shallow total and the deferred extension patterns
pub fn scan(project_dir: &Path, rule: &Rule) -> Lead {
    let mut lead = Lead::new(&rule.name);

    for criterion in &rule.detect.files {
        scan_files(project_dir, criterion, &mut lead);
    }

    for folder in &rule.detect.folders {
        if folder_matches(project_dir, folder) {
            lead.credit(u64::from(folder.weight));
        }
    }

    trace!("Scanned {}: total {}", lead.name, lead.total);
    lead
}

fn scan_files(project_dir: &Path, criterion: &FileCriterion, lead: &mut Lead) {
    let weight = criterion.weight;

    match criterion.names.as_slice() {
        [] => {}
        [name] if is_extension_pattern(name) => lead.defer(name, weight),
        [name] => {
            if file_matches(&project_dir.join(name), criterion.pattern.as_deref()) {
                lead.credit(u64::from(weight));
            }
        }
        names => {
            for name in names {
                if is_extension_pattern(name) {
                    lead.defer(name, weight);
                } else if project_dir.join(name).exists() {
                    lead.credit(u64::from(weight));
                }
            }
        }
    }
}

/// True when `path` exists and contains `pattern` (if any)
///
/// The content is decoded lossily, so binary files can still be searched.
/// An unreadable file does not match.
fn file_matches(path: &Path, pattern: Option<&str>) -> bool {
    if !path.exists() {
        return false;
    }

    let Some(pattern) = pattern else {
        return true;
    };

    match fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).contains(pattern),
        Err(e) => {
            debug!("Cannot read {}: {}", path.display(), e);
            false
        }
    }
}

fn folder_matches(project_dir: &Path, folder: &FolderCriterion) -> bool {
    let folder_path = project_dir.join(&folder.name);
    folder_path.is_dir()
        && folder
            .files
            .iter()
            .all(|file| folder_path.join(file).exists())
}
