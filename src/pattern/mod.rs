// src/pattern/mod.rs

//! Compiles `.dockerignore` lines into anchored path matchers.
//!
//! Each line becomes an [`IgnoreRule`]: the original text, its polarity
//! (a leading `!` re-includes), and a regex that must match the *entire*
//! candidate path. Translation happens in a fixed order:
//!
//! 1.  a leading `!` sets the negation flag and is consumed;
//! 2.  leading `./` and `/` are stripped, so every pattern is root-relative;
//! 3.  a trailing `/` scopes the pattern to a directory and everything below it;
//! 4.  inner `.` and `..` segments and repeated slashes are resolved lexically,
//!     so `a/./b` and `a/x/../b` both mean `a/b`;
//! 5.  the remaining body is tokenized once (`**`, `*`, `?`, `[...]`, escapes,
//!     literal runs) and the tokens are composed into a regex.
//!
//! # Examples
//!
//! ```
//! use dockcopy::pattern::compile;
//!
//! let rule = compile("a/**/b").unwrap();
//! assert!(rule.matches("a/b"));
//! assert!(rule.matches("a/x/y/b"));
//! assert!(!rule.matches("a/bc"));
//!
//! let keep = compile("!keep.log").unwrap();
//! assert!(keep.is_negation());
//! assert!(keep.matches("keep.log"));
//! ```

use crate::errors::{Error, Result};
use log::debug;
use regex::Regex;
use std::borrow::Cow;
use std::fmt;
use tracing::instrument;

mod token;
mod translate;

/// One compiled ignore-file line.
///
/// Rules are immutable once compiled and are applied in the order they were
/// declared.
#[derive(Debug, Clone)]
pub struct IgnoreRule {
    source_text: String,
    is_negation: bool,
    matcher: Regex,
}

impl IgnoreRule {
    /// The original line, including any leading `!`.
    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    /// `true` if the line started with `!` (re-include instead of exclude).
    pub fn is_negation(&self) -> bool {
        self.is_negation
    }

    /// The regex the pattern was translated to.
    pub fn regex_source(&self) -> &str {
        self.matcher.as_str()
    }

    /// Tests a normalized relative path against the rule.
    ///
    /// An empty-directory marker such as `logs/` is also tested as `logs`,
    /// so a pattern naming the directory excludes it whether or not the
    /// pattern carries a trailing slash.
    pub fn matches(&self, path: &str) -> bool {
        if self.matcher.is_match(path) {
            return true;
        }
        match path.strip_suffix('/') {
            Some(dir) if !dir.is_empty() => self.matcher.is_match(dir),
            _ => false,
        }
    }
}

impl fmt::Display for IgnoreRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source_text)
    }
}

/// Compiles a single ignore line into an [`IgnoreRule`].
///
/// The line must already be stripped of its terminator; blank lines and
/// comments are filtered out by the caller (see [`crate::ignore_file`]).
///
/// # Errors
///
/// Returns [`Error::InvalidPattern`] when the line is empty after removing
/// `!` and the root prefix and cleaning dot segments, or when its body cannot be translated (dangling
/// escape, malformed bracket class).
#[instrument(level = "trace")]
pub fn compile(raw: &str) -> Result<IgnoreRule> {
    let (is_negation, rest) = match raw.strip_prefix('!') {
        Some(rest) => (true, rest),
        None => (false, raw),
    };

    let body = strip_root_prefix(rest);
    let trimmed = body.trim_end_matches('/');
    let dir_scoped = trimmed.len() != body.len();
    let trimmed = clean_segments(trimmed);

    if trimmed.is_empty() {
        return Err(invalid(raw, "empty pattern"));
    }

    let tokens = token::tokenize(&trimmed).map_err(|reason| invalid(raw, reason))?;
    let source = translate::to_regex_source(&tokens, dir_scoped);
    let matcher = Regex::new(&source).map_err(|e| invalid(raw, e.to_string()))?;

    debug!("Compiled ignore rule '{}' -> {}", raw, source);
    Ok(IgnoreRule {
        source_text: raw.to_string(),
        is_negation,
        matcher,
    })
}

/// Compiles an ordered list of lines, stopping at the first invalid one.
///
/// Declaration order is preserved in the returned vector.
pub fn compile_all<I, S>(lines: I) -> Result<Vec<IgnoreRule>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines.into_iter().map(|l| compile(l.as_ref())).collect()
}

fn strip_root_prefix(mut s: &str) -> &str {
    loop {
        if let Some(rest) = s.strip_prefix("./") {
            s = rest;
        } else if let Some(rest) = s.strip_prefix('/') {
            s = rest;
        } else {
            return s;
        }
    }
}

/// Drops empty and `.` segments and folds `x/..` pairs. A `..` with nothing
/// left to fold is kept; it can never match a candidate.
fn clean_segments(body: &str) -> Cow<'_, str> {
    if !body.split('/').any(|seg| matches!(seg, "" | "." | "..")) {
        return Cow::Borrowed(body);
    }
    let mut segments: Vec<&str> = Vec::new();
    for seg in body.split('/') {
        match seg {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ => segments.push(seg),
            },
            _ => segments.push(seg),
        }
    }
    Cow::Owned(segments.join("/"))
}

fn invalid(raw: &str, reason: impl Into<String>) -> Error {
    Error::InvalidPattern {
        origin: None,
        pattern: raw.to_string(),
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(p: &str) -> IgnoreRule {
        compile(p).unwrap_or_else(|e| panic!("'{}' should compile: {}", p, e))
    }

    #[test]
    fn test_match_is_anchored_to_full_path() {
        let r = rule("src/main.c");
        assert!(r.matches("src/main.c"));
        assert!(!r.matches("src/main.cpp"));
        assert!(!r.matches("lib/src/main.c"));
        assert!(!r.matches("src/main"));
    }

    #[test]
    fn test_literal_metacharacters_are_not_regex() {
        let r = rule("a+b.txt");
        assert!(r.matches("a+b.txt"));
        assert!(!r.matches("aab.txt"));
        assert!(!r.matches("a+bxtxt"));
        assert!(rule("(x)|{y}$").matches("(x)|{y}$"));
    }

    #[test]
    fn test_double_star_matches_zero_directories() {
        let r = rule("a/**/b");
        assert!(r.matches("a/b"));
        assert!(r.matches("a/x/b"));
        assert!(r.matches("a/x/y/b"));
        assert!(!r.matches("ab"));
        assert!(!r.matches("a/xb"));
    }

    #[test]
    fn test_leading_double_star_matches_any_depth() {
        let r = rule("**/*.tmp");
        assert!(r.matches("x.tmp"));
        assert!(r.matches("deep/er/x.tmp"));
        assert!(!r.matches("x.tmpl"));
    }

    #[test]
    fn test_single_star_does_not_cross_separator() {
        let r = rule("*.log");
        assert!(r.matches("a.log"));
        assert!(!r.matches("dir/a.log"));
        assert!(rule("*/*.log").matches("dir/a.log"));
    }

    #[test]
    fn test_question_mark_is_one_non_separator_char() {
        let r = rule("file?.txt");
        assert!(r.matches("file1.txt"));
        assert!(!r.matches("file.txt"));
        assert!(!r.matches("file12.txt"));
        assert!(!rule("a?b").matches("a/b"));
    }

    #[test]
    fn test_trailing_slash_scopes_to_directory() {
        let r = rule("logs/");
        assert!(r.matches("logs/"));
        assert!(r.matches("logs/debug.txt"));
        assert!(r.matches("logs/nested/deep.txt"));
        assert!(!r.matches("logsfile"));
        assert!(!r.matches("other/logs/debug.txt"));
    }

    #[test]
    fn test_directory_marker_matches_bare_name() {
        assert!(rule("logs").matches("logs/"));
        assert!(rule("*").matches("logs/"));
        assert!(!rule("logs").matches("logs/debug.txt"));
    }

    #[test]
    fn test_character_class() {
        let r = rule("file[0-9].txt");
        assert!(r.matches("file3.txt"));
        assert!(!r.matches("fileA.txt"));

        let neg = rule("file[!0-9].txt");
        assert!(neg.matches("fileA.txt"));
        assert!(!neg.matches("file3.txt"));
        assert!(!rule("a[!x]b").matches("a/b"));
    }

    #[test]
    fn test_leading_root_prefixes_are_stripped() {
        assert!(rule("/build").matches("build"));
        assert!(rule("./build").matches("build"));
        assert!(rule(".//build").matches("build"));
        assert!(!rule("/build").matches("/build"));
    }

    #[test]
    fn test_negation_flag_and_source_text() {
        let r = rule("!keep.log");
        assert!(r.is_negation());
        assert_eq!(r.source_text(), "!keep.log");
        assert_eq!(r.to_string(), "!keep.log");
        assert!(r.matches("keep.log"));
        assert!(!rule("keep.log").is_negation());
    }

    #[test]
    fn test_escaped_wildcard_is_literal() {
        let r = rule(r"star\*.txt");
        assert!(r.matches("star*.txt"));
        assert!(!r.matches("starry.txt"));
    }

    #[test]
    fn test_double_star_slash_alone_matches_at_any_depth() {
        let r = rule("**/");
        assert!(r.matches("top.txt"));
        assert!(r.matches("a/b/c.txt"));
        assert!(r.matches("empty/"));
    }

    #[test]
    fn test_caret_negated_class() {
        let r = rule("[^abc].txt");
        assert!(r.matches("d.txt"));
        assert!(!r.matches("a.txt"));
        assert!(!r.matches("/.txt"));
        assert!(!r.matches("dd.txt"));
        assert_eq!(rule("[^a]x").regex_source(), rule("[!a]x").regex_source());
    }

    #[test]
    fn test_inner_dot_segments_are_cleaned() {
        assert!(rule("a/./b").matches("a/b"));
        assert!(rule("a/x/../b").matches("a/b"));
        assert!(!rule("a/x/../b").matches("a/x/b"));
        assert!(rule("./src/./lib/").matches("src/lib/mod.rs"));
        assert!(rule("!a//./*.log").matches("a/z.log"));
        assert!(!rule("../b").matches("b"));
    }

    #[test]
    fn test_invalid_patterns() {
        for bad in ["!", "/", "!./", "a/..", "file[0-9", "trailing\\", "[]", "[z-a]"] {
            match compile(bad) {
                Err(Error::InvalidPattern {
                    pattern, origin, ..
                }) => {
                    assert_eq!(pattern, bad);
                    assert_eq!(origin, None);
                }
                other => panic!("'{}' should be invalid, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_compile_all_preserves_order_and_fails_fast() {
        let rules = compile_all(["*.log", "!keep.log", "build/"]).unwrap();
        let texts: Vec<&str> = rules.iter().map(IgnoreRule::source_text).collect();
        assert_eq!(texts, vec!["*.log", "!keep.log", "build/"]);

        let err = compile_all(["ok", "[bad", "also-ok"]).unwrap_err();
        assert!(err.to_string().contains("[bad"));
    }
}
