// tests/ignore_semantics.rs

use dockcopy::pattern::{compile, compile_all};
use dockcopy::PathFilter;

fn filter(rules: &[&str], candidates: &[&str]) -> Vec<String> {
    let rules = compile_all(rules.iter().copied()).unwrap();
    PathFilter::new(&rules).apply(candidates).into_included()
}

#[test]
fn test_compiled_rules_only_match_full_paths() {
    let rule = compile("build").unwrap();
    for path in ["build", "build/"] {
        assert!(rule.matches(path), "{} should match", path);
    }
    for path in ["rebuild", "builds", "src/build", "build.rs", "build/out.o"] {
        assert!(!rule.matches(path), "{} should not match", path);
    }
}

#[test]
fn test_double_star_matches_zero_directories() {
    assert!(compile("a/**/b").unwrap().matches("a/b"));
}

#[test]
fn test_trailing_slash_matches_directory_and_contents() {
    let rule = compile("logs/").unwrap();
    assert!(rule.matches("logs/"));
    assert!(rule.matches("logs/debug.txt"));
}

#[test]
fn test_negation_after_exclusion() {
    assert_eq!(
        filter(&["*.log", "!keep.log"], &["a.log", "keep.log", "b.txt"]),
        vec!["keep.log", "b.txt"]
    );
}

#[test]
fn test_negation_before_exclusion_is_overridden() {
    // Order matters: the later `*.log` re-excludes keep.log.
    assert_eq!(
        filter(&["!keep.log", "*.log"], &["a.log", "keep.log", "b.txt"]),
        vec!["b.txt"]
    );
}

#[test]
fn test_character_class() {
    let rule = compile("file[0-9].txt").unwrap();
    assert!(rule.matches("file3.txt"));
    assert!(!rule.matches("fileA.txt"));
}

#[test]
fn test_filtering_filtered_set_is_stable() {
    let rules = compile_all(["**/*.pyc", "dist/", "!dist/keep.txt", ".git/"]).unwrap();
    let filter = PathFilter::new(&rules);
    let candidates = [
        "app.py",
        "pkg/mod.pyc",
        "dist/",
        "dist/bundle.js",
        "dist/keep.txt",
        ".git/HEAD",
    ];
    let once = filter.apply(candidates).into_included();
    let twice = filter.apply(&once).into_included();
    assert_eq!(once, vec!["app.py", "dist/keep.txt"]);
    assert_eq!(once, twice);
}

#[test]
fn test_exclude_then_reinclude_keeps_everything() {
    let candidates = ["README.md", "build/out.o", "build/", "src/main.c"];
    assert_eq!(filter(&["build/", "!build/"], &candidates), candidates);
}

#[test]
fn test_directory_rule_excludes_marker_and_contents() {
    let result = filter(
        &["node_modules/"],
        &["node_modules/pkg/index.js", "node_modules/"],
    );
    assert!(result.is_empty());
}

#[test]
fn test_discovery_order_is_preserved() {
    let candidates = ["z.txt", "a.txt", "m/n.txt"];
    assert_eq!(filter(&["nothing-matches"], &candidates), candidates);
}
