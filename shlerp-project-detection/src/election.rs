//! Multi-pass election of the rule that best describes a project

use crate::crawler::crawl;
use crate::error::Result;
use crate::history::{narrow, History};
use crate::rule_store::RuleStore;
use crate::scanner::scan;
use crate::types::{Lead, Rule};
use serde::Serialize;
use shlerp_common::Pretty;
use std::path::Path;
use tracing::{debug, info, warn};

/// True when at least one lead scored
pub fn weight_found(leads: &[Lead]) -> bool {
    leads.iter().any(Lead::has_weight)
}

/// Leads sharing the highest total, in their input order
///
/// Returns an empty list for empty input.
pub fn elect(mut leads: Vec<Lead>) -> Vec<Lead> {
    // Stable, so equal totals keep rule order
    leads.sort_by(|a, b| b.total.cmp(&a.total));

    let Some(best) = leads.first().map(|lead| lead.total) else {
        return leads;
    };
    leads.retain(|lead| lead.total == best);
    leads
}

/// The rule a detection settled on
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElectedRule {
    pub rule: Rule,
    pub total: u64,
}

/// Result of [`Detector::auto_detect`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DetectionOutcome {
    /// A single rule won
    Elected(ElectedRule),
    /// Several rules tied for the best score after every pass
    Ambiguous { candidates: Vec<String> },
    /// No rule scored at all
    NoMatch,
}

impl DetectionOutcome {
    pub fn elected(&self) -> Option<&ElectedRule> {
        match self {
            DetectionOutcome::Elected(elected) => Some(elected),
            _ => None,
        }
    }

    pub fn into_rule(self) -> Option<Rule> {
        match self {
            DetectionOutcome::Elected(elected) => Some(elected.rule),
            _ => None,
        }
    }
}

/// Where the detection loop stands
#[derive(Debug)]
enum DetectionState {
    /// Only rules named in the history
    TryHistory,
    /// Every rule
    TryAll,
    Done(DetectionOutcome),
}

/// What a single pass over a rule set produced
#[derive(Debug)]
enum PassResult {
    Winner { rule: Rule, total: u64 },
    Tie(Vec<Lead>),
    Nothing,
}

/// Runs detection passes and keeps the history up to date
#[derive(Debug)]
pub struct Detector<'a> {
    store: &'a RuleStore,
    history_limit: usize,
}

impl<'a> Detector<'a> {
    pub fn new(store: &'a RuleStore, history_limit: usize) -> Self {
        Self {
            store,
            history_limit,
        }
    }

    /// Decide which rule describes `project_dir`
    ///
    /// The first pass only considers rules named in the history. If it ties
    /// or finds nothing, a second pass runs over every rule. Without a usable
    /// history the first pass already covers every rule and is the only one.
    /// Rules are re-read from the store on each pass.
    ///
    /// On election the winner is moved to the front of the history and the
    /// history is written back. A failed write is logged and does not change
    /// the outcome.
    ///
    /// # Errors
    ///
    /// Only rule source errors are returned.
    pub fn auto_detect(&self, project_dir: &Path) -> Result<DetectionOutcome> {
        let mut history: Option<History> = None;
        let mut state = DetectionState::TryHistory;

        loop {
            let from_history = match state {
                DetectionState::Done(outcome) => return Ok(outcome),
                DetectionState::TryHistory => true,
                DetectionState::TryAll => false,
            };

            let rules = self.store.load_rules()?;

            let (active, final_pass) = if from_history {
                match self.store.load_history() {
                    Some(loaded) => {
                        let narrowed = narrow(&rules, &loaded);
                        debug!(
                            "History narrowed {} rules to {} (last elected: {})",
                            rules.len(),
                            narrowed.len(),
                            loaded.most_recent().unwrap_or("none")
                        );
                        history = Some(loaded);
                        (narrowed, false)
                    }
                    None => {
                        info!("No history, using the whole rule set");
                        (rules, true)
                    }
                }
            } else {
                (rules, true)
            };

            state = match run_pass(project_dir, &active) {
                PassResult::Winner { rule, total } => {
                    DetectionState::Done(self.accept(rule, total, history.as_ref()))
                }
                PassResult::Tie(leads) if final_pass => {
                    let candidates: Vec<String> = leads.into_iter().map(|l| l.name).collect();
                    warn!(
                        "Unable to determine the main language for this project, ambiguous result between: {}",
                        candidates.join(", ")
                    );
                    DetectionState::Done(DetectionOutcome::Ambiguous { candidates })
                }
                PassResult::Nothing if final_pass => {
                    warn!("Nothing matched while scanning the project");
                    DetectionState::Done(DetectionOutcome::NoMatch)
                }
                PassResult::Tie(_) | PassResult::Nothing => {
                    info!("History did not settle the project type, trying the whole rule set");
                    DetectionState::TryAll
                }
            };
        }
    }

    fn accept(&self, rule: Rule, total: u64, history: Option<&History>) -> DetectionOutcome {
        info!("Matching rule: {} (score {})", rule.name, total);

        let current = history.cloned().unwrap_or_default();
        let updated = current.promote_or_insert(&rule.name, self.history_limit);

        if history != Some(&updated) {
            if let Err(e) = self.store.persist_history(&updated) {
                warn!("{}", e);
            }
        }

        DetectionOutcome::Elected(ElectedRule { rule, total })
    }
}

/// Scan every rule, crawl when the scan cannot decide, and elect
///
/// The crawl runs when nothing scored or when the best total is shared.
/// After a tie-break crawl the election is run again.
fn run_pass(project_dir: &Path, rules: &[Rule]) -> PassResult {
    let leads: Vec<Lead> = rules.iter().map(|rule| scan(project_dir, rule)).collect();
    debug!("Leads after scan: {}", Pretty(&leads));

    let candidates = if weight_found(&leads) {
        let best = elect(leads);
        if best.len() > 1 {
            let mut tied = best;
            crawl(project_dir, &mut tied);
            elect(tied)
        } else {
            best
        }
    } else {
        let mut leads = leads;
        crawl(project_dir, &mut leads);
        if !weight_found(&leads) {
            return PassResult::Nothing;
        }
        elect(leads)
    };

    if candidates.len() > 1 {
        return PassResult::Tie(candidates);
    }

    let Some(winner) = candidates.into_iter().next() else {
        return PassResult::Nothing;
    };
    match rules.iter().find(|rule| rule.name == winner.name) {
        Some(rule) => PassResult::Winner {
            rule: rule.clone(),
            total: winner.total,
        },
        None => PassResult::Nothing,
    }
}
