// src/filter.rs

//! Applies an ordered rule list to candidate paths.
//!
//! Every candidate starts out included. Rules are folded over in declaration
//! order: a matching normal rule marks the path excluded, a matching negation
//! marks it included again. The last matching rule therefore decides, and a
//! negation placed *before* the rule it was meant to override has no effect on
//! paths that rule later excludes.
//!
//! # Examples
//!
//! ```
//! use dockcopy::filter::PathFilter;
//! use dockcopy::pattern::compile_all;
//!
//! let rules = compile_all(["*.log", "!keep.log"]).unwrap();
//! let filter = PathFilter::new(&rules);
//! let result = filter.apply(["a.log", "keep.log", "b.txt"]);
//! assert_eq!(result.included(), &["keep.log", "b.txt"]);
//! ```

use crate::pattern::IgnoreRule;
use log::trace;
use tracing::instrument;

/// Final decision for one candidate path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    /// `true` if the path is left out of the copy.
    pub excluded: bool,
    /// Index of the last rule that matched the path, if any rule did.
    pub decided_by: Option<usize>,
}

impl Verdict {
    const UNTOUCHED: Verdict = Verdict {
        excluded: false,
        decided_by: None,
    };
}

/// Paths surviving a filtering pass, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterResult {
    included: Vec<String>,
    candidates: usize,
}

impl FilterResult {
    /// The surviving paths, in the order the candidates were given.
    pub fn included(&self) -> &[String] {
        &self.included
    }

    /// Consumes the result, returning the surviving paths.
    pub fn into_included(self) -> Vec<String> {
        self.included
    }

    /// Number of candidates the pass started with.
    pub fn candidate_count(&self) -> usize {
        self.candidates
    }

    /// Number of candidates the rules removed.
    pub fn excluded_count(&self) -> usize {
        self.candidates - self.included.len()
    }

    /// `true` when there were candidates but the rules excluded all of them.
    ///
    /// This is distinct from an empty source, where `candidate_count()` is zero.
    pub fn is_fully_excluded(&self) -> bool {
        self.candidates > 0 && self.included.is_empty()
    }
}

/// An ordered rule list ready to be applied to candidate paths.
///
/// The filter borrows its rules and holds no other state, so independent
/// passes can run concurrently over the same filter.
#[derive(Debug, Clone, Copy)]
pub struct PathFilter<'r> {
    rules: &'r [IgnoreRule],
}

impl<'r> PathFilter<'r> {
    pub fn new(rules: &'r [IgnoreRule]) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &'r [IgnoreRule] {
        self.rules
    }

    /// Computes the verdict for one path by folding over the rules in order.
    pub fn verdict(&self, path: &str) -> Verdict {
        self.rules
            .iter()
            .enumerate()
            .fold(Verdict::UNTOUCHED, |state, (index, rule)| {
                if rule.matches(path) {
                    Verdict {
                        excluded: !rule.is_negation(),
                        decided_by: Some(index),
                    }
                } else {
                    state
                }
            })
    }

    /// `true` if the path is excluded once every rule has been applied.
    pub fn is_excluded(&self, path: &str) -> bool {
        self.verdict(path).excluded
    }

    /// Filters candidates, keeping those whose final state is "not excluded".
    ///
    /// Discovery order is preserved.
    #[instrument(level = "debug", skip_all, fields(rules = self.rules.len()))]
    pub fn apply<I, S>(&self, candidates: I) -> FilterResult
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut result = FilterResult::default();
        for candidate in candidates {
            let path = candidate.as_ref();
            result.candidates += 1;
            let verdict = self.verdict(path);
            match verdict.decided_by {
                Some(i) => trace!(
                    "{} '{}' (rule {}: '{}')",
                    if verdict.excluded { "Excluding" } else { "Keeping" },
                    path,
                    i,
                    self.rules[i]
                ),
                None => trace!("Keeping '{}' (no rule matched)", path),
            }
            if !verdict.excluded {
                result.included.push(path.to_string());
            }
        }
        result
    }
}
