//! # shlerp Project Detection
//!
//! Decides which rule best describes a project directory. Each rule lists
//! weighted signals (files, file contents, folders and file extensions); the
//! rule with the highest total wins.
//!
//! Detection runs in passes:
//!
//! 1. Rules named in the history are scanned first
//! 2. When that pass ties or finds nothing, every rule is scanned
//!
//! Within a pass, the shallow scan only looks at the project root. The deep
//! extension crawl over the whole tree runs only when the scan leaves a tie or
//! scores nothing.
//!
//! ```no_run
//! use shlerp_project_detection::{DetectionOutcome, Detector, RuleStore};
//! use std::path::Path;
//!
//! let store = RuleStore::new("rules.json", "tmp.json");
//! let detector = Detector::new(&store, 5);
//!
//! match detector.auto_detect(Path::new("."))? {
//!     DetectionOutcome::Elected(elected) => println!("{}", elected.rule.name),
//!     DetectionOutcome::Ambiguous { candidates } => println!("tie: {:?}", candidates),
//!     DetectionOutcome::NoMatch => println!("unknown project"),
//! }
//! # Ok::<(), shlerp_project_detection::DetectionError>(())
//! ```

pub mod crawler;
pub mod election;
pub mod error;
pub mod history;
pub mod rule_store;
pub mod scanner;
pub mod types;

pub use crawler::crawl;
pub use election::{elect, weight_found, DetectionOutcome, Detector, ElectedRule};
pub use error::{DetectionError, Result};
pub use history::{narrow, History};
pub use rule_store::RuleStore;
pub use scanner::scan;
pub use types::{
    is_extension_pattern, Detect, FileCriterion, FolderCriterion, Lead, PendingExtension, Rule,
};
