//! Defines the data produced by one selection pass.

use crate::filter::{FilterResult, PathFilter, Verdict};
use crate::pattern::IgnoreRule;
use std::path::PathBuf;

/// Everything a selection pass produced for one source root.
///
/// Keeps the candidates and compiled rules alongside the result so callers can
/// explain individual decisions after the fact.
///
/// # Examples
///
/// ```
/// use dockcopy::core_types::Selection;
/// use dockcopy::pattern::compile_all;
/// use std::path::PathBuf;
///
/// let rules = compile_all(["*.log"]).unwrap();
/// let selection = Selection::new(
///     PathBuf::from("/src"),
///     vec!["a.log".to_string(), "main.c".to_string()],
///     rules,
/// );
/// assert_eq!(selection.included(), &["main.c"]);
/// assert_eq!(selection.result.excluded_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Selection {
    /// The source root the candidates are relative to.
    pub source_root: PathBuf,
    /// Every candidate, in discovery order.
    pub candidates: Vec<String>,
    /// The compiled rules, in declaration order.
    pub rules: Vec<IgnoreRule>,
    /// The filtering outcome.
    pub result: FilterResult,
}

impl Selection {
    /// Filters `candidates` with `rules` and bundles the outcome.
    pub fn new(source_root: PathBuf, candidates: Vec<String>, rules: Vec<IgnoreRule>) -> Self {
        let result = PathFilter::new(&rules).apply(&candidates);
        Self {
            source_root,
            candidates,
            rules,
            result,
        }
    }

    /// The paths to copy, in discovery order.
    pub fn included(&self) -> &[String] {
        self.result.included()
    }

    /// Every candidate paired with its verdict, in discovery order.
    pub fn verdicts(&self) -> impl Iterator<Item = (&str, Verdict)> + '_ {
        let filter = PathFilter::new(&self.rules);
        self.candidates
            .iter()
            .map(move |c| (c.as_str(), filter.verdict(c)))
    }

    /// The rule a verdict refers to, if any.
    pub fn rule(&self, verdict: &Verdict) -> Option<&IgnoreRule> {
        verdict.decided_by.and_then(|i| self.rules.get(i))
    }
}
