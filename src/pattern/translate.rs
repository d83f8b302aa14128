// src/pattern/translate.rs

//! Composes scanned glob tokens into an anchored regular expression.

use super::token::{CharClass, ClassItem, Token};

/// Builds the regex source for a tokenized pattern body.
///
/// The result is anchored at both ends. A directory-scoped body additionally
/// accepts any deeper path below it, and the directory marker `body/` itself.
pub(crate) fn to_regex_source(tokens: &[Token], dir_scoped: bool) -> String {
    let mut re = String::from("(?s)^(?:");
    for token in tokens {
        match token {
            Token::Literal(text) => re.push_str(&regex::escape(text)),
            Token::Separator => re.push('/'),
            Token::Star => re.push_str("[^/]*"),
            Token::AnySegments => re.push_str("(?:.*/)?"),
            Token::AnyRun => re.push_str(".*"),
            Token::Question => re.push_str("[^/]"),
            Token::Class(class) => push_class(&mut re, class),
        }
    }
    re.push(')');
    if dir_scoped {
        re.push_str("(?:/.*)?");
    }
    re.push('$');
    re
}

fn push_class(re: &mut String, class: &CharClass) {
    re.push('[');
    if class.negated {
        // A negated class still stays inside one path segment.
        re.push_str("^/");
    }
    for item in &class.items {
        match *item {
            ClassItem::Char(c) => push_class_char(re, c),
            ClassItem::Range(lo, hi) => {
                push_class_char(re, lo);
                re.push('-');
                push_class_char(re, hi);
            }
        }
    }
    re.push(']');
}

fn push_class_char(re: &mut String, c: char) {
    let mut buf = [0u8; 4];
    re.push_str(&regex::escape(c.encode_utf8(&mut buf)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::token::tokenize;

    fn source(body: &str, dir_scoped: bool) -> String {
        to_regex_source(&tokenize(body).unwrap(), dir_scoped)
    }

    #[test]
    fn test_literals_are_escaped() {
        assert_eq!(source("a+b.txt", false), r"(?s)^(?:a\+b\.txt)$");
    }

    #[test]
    fn test_wildcards() {
        assert_eq!(source("*.?", false), r"(?s)^(?:[^/]*\.[^/])$");
        assert_eq!(source("a/**/b", false), r"(?s)^(?:a/(?:.*/)?b)$");
        assert_eq!(source("a/**", false), r"(?s)^(?:a/.*)$");
    }

    #[test]
    fn test_directory_scope_suffix() {
        assert_eq!(source("logs", true), r"(?s)^(?:logs)(?:/.*)?$");
    }

    #[test]
    fn test_class_translation() {
        assert_eq!(source("file[0-9].txt", false), r"(?s)^(?:file[0-9]\.txt)$");
        assert_eq!(source("[!a-]", false), r"(?s)^(?:[^/a\-])$");
        assert_eq!(source("[&~]", false), r"(?s)^(?:[\&\~])$");
    }
}
