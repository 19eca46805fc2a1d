//! Property tests for scoring and history maintenance

use proptest::prelude::*;
use shlerp_common::Exclusions;
use shlerp_project_detection::{
    elect, scan, Detect, FileCriterion, FolderCriterion, History, Lead, Rule,
};
use std::fs;
use tempfile::TempDir;

const PRESENT: [&str; 3] = ["a.txt", "b.txt", "c.txt"];
const ABSENT: [&str; 2] = ["missing.txt", "gone.txt"];

fn criterion_strategy() -> impl Strategy<Value = FileCriterion> {
    let name = prop::sample::select(vec![
        PRESENT[0], PRESENT[1], PRESENT[2], ABSENT[0], ABSENT[1], "*.txt",
    ]);
    (name, 0u32..50).prop_map(|(name, weight)| FileCriterion {
        names: vec![name.to_string()],
        pattern: None,
        weight,
    })
}

fn mixed_criterion_strategy() -> impl Strategy<Value = FileCriterion> {
    let name = prop::sample::select(vec![
        PRESENT[0], PRESENT[1], ABSENT[0], "pkg", "*.txt", "*.md",
    ]);
    let pattern = prop::option::of(prop::sample::select(vec!["marker", "elsewhere"]));
    (prop::collection::vec(name, 1..4), pattern, 0u32..50).prop_map(
        |(names, pattern, weight)| FileCriterion {
            names: names.into_iter().map(str::to_string).collect(),
            pattern: pattern.map(str::to_string),
            weight,
        },
    )
}

fn folder_strategy() -> impl Strategy<Value = FolderCriterion> {
    let name = prop::sample::select(vec!["pkg", "empty", "missing_dir", "a.txt"]);
    let files = prop::collection::vec(prop::sample::select(vec!["inner.cfg", "nope.cfg"]), 0..3);
    (name, files, 0u32..50).prop_map(|(name, files, weight)| FolderCriterion {
        name: name.to_string(),
        files: files.into_iter().map(str::to_string).collect(),
        weight,
    })
}

fn rule_with(files: Vec<FileCriterion>) -> Rule {
    rule_with_folders(files, vec![])
}

fn rule_with_folders(files: Vec<FileCriterion>, folders: Vec<FolderCriterion>) -> Rule {
    Rule {
        name: "prop".to_string(),
        detect: Detect { files, folders },
        exclusions: Exclusions::none(),
    }
}

fn deferred_patterns(lead: &Lead) -> Vec<(String, u32)> {
    let mut patterns: Vec<(String, u32)> = lead
        .extensions
        .iter()
        .map(|ext| (ext.pattern.clone(), ext.weight))
        .collect();
    patterns.sort();
    patterns
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn test_scan_total_ignores_criterion_order(
        (criteria, shuffled) in prop::collection::vec(criterion_strategy(), 0..8)
            .prop_flat_map(|criteria| (Just(criteria.clone()), Just(criteria).prop_shuffle()))
    ) {
        let temp_dir = TempDir::new().unwrap();
        for name in PRESENT {
            fs::write(temp_dir.path().join(name), "").unwrap();
        }

        let original = scan(temp_dir.path(), &rule_with(criteria));
        let reordered = scan(temp_dir.path(), &rule_with(shuffled));

        prop_assert_eq!(original.total, reordered.total);
        prop_assert_eq!(original.extensions.len(), reordered.extensions.len());
    }

    #[test]
    fn test_scan_total_ignores_folder_and_multi_name_order(
        (files, shuffled_files) in prop::collection::vec(mixed_criterion_strategy(), 0..6)
            .prop_flat_map(|files| (Just(files.clone()), Just(files).prop_shuffle())),
        (folders, shuffled_folders) in prop::collection::vec(folder_strategy(), 0..6)
            .prop_flat_map(|folders| (Just(folders.clone()), Just(folders).prop_shuffle()))
    ) {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join(PRESENT[0]), "has a marker").unwrap();
        fs::write(root.join(PRESENT[1]), "").unwrap();
        fs::create_dir(root.join("pkg")).unwrap();
        fs::write(root.join("pkg/inner.cfg"), "").unwrap();
        fs::create_dir(root.join("empty")).unwrap();

        let original = scan(root, &rule_with_folders(files, folders));
        let reordered = scan(root, &rule_with_folders(shuffled_files, shuffled_folders));

        prop_assert_eq!(original.total, reordered.total);
        prop_assert_eq!(deferred_patterns(&original), deferred_patterns(&reordered));
    }

    #[test]
    fn test_elect_returns_every_lead_with_the_best_total(
        totals in prop::collection::vec(0u64..5, 1..10)
    ) {
        let leads: Vec<Lead> = totals
            .iter()
            .enumerate()
            .map(|(i, total)| {
                let mut lead = Lead::new(format!("r{}", i));
                lead.credit(*total);
                lead
            })
            .collect();
        let best = totals.iter().copied().max().unwrap_or(0);

        let elected = elect(leads);

        prop_assert_eq!(elected.len(), totals.iter().filter(|t| **t == best).count());
        prop_assert!(elected.iter().all(|lead| lead.total == best));
    }

    #[test]
    fn test_inserting_past_the_limit_keeps_the_newest(
        limit in 1usize..8,
        extra in 1usize..8
    ) {
        let mut history = History::new((0..limit).map(|i| format!("old{}", i)));

        let inserted: Vec<String> = (0..limit + extra).map(|i| format!("new{}", i)).collect();
        for name in &inserted {
            history = history.promote_or_insert(name, limit);
            prop_assert!(history.len() <= limit);
        }

        let expected: Vec<String> = inserted.iter().rev().take(limit).cloned().collect();
        prop_assert_eq!(history.entries(), expected.as_slice());
    }

    #[test]
    fn test_promotion_is_idempotent(
        names in prop::collection::vec("[a-e]", 0..8),
        name in "[a-f]",
        limit in 1usize..6
    ) {
        let history = History::new(names);

        let once = history.promote_or_insert(&name, limit);
        let twice = once.promote_or_insert(&name, limit);

        prop_assert_eq!(once.most_recent(), Some(name.as_str()));
        prop_assert_eq!(&once, &twice);
    }
}
