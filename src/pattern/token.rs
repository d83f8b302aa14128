// src/pattern/token.rs

//! Single-pass tokenizer for the Docker ignore-file glob dialect.
//!
//! The tokenizer only sees the pattern body: negation, leading `./` or `/`,
//! and the trailing directory slash have already been stripped by the caller.

/// One fragment of a scanned glob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    /// A run of characters matched verbatim (escapes already resolved).
    Literal(String),
    /// `/` between two path segments. Repeated slashes collapse to one token.
    Separator,
    /// `*`: any run of characters without `/`.
    Star,
    /// `**/` at the start of a segment: zero or more whole segments.
    AnySegments,
    /// Any other `**`: any run of characters, `/` included.
    AnyRun,
    /// `?`: exactly one character other than `/`.
    Question,
    /// `[...]`: a bracket class.
    Class(CharClass),
}

/// A parsed bracket expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CharClass {
    pub negated: bool,
    pub items: Vec<ClassItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ClassItem {
    Char(char),
    Range(char, char),
}

/// Scans a pattern body into tokens.
///
/// Returns the reason as `Err` when the body cannot be tokenized; the caller
/// wraps it into an `InvalidPattern` error with the original line attached.
pub(crate) fn tokenize(body: &str) -> Result<Vec<Token>, String> {
    let chars: Vec<char> = body.chars().collect();
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            '\\' => {
                let escaped = chars.get(i + 1).ok_or("dangling escape at end of pattern")?;
                literal.push(*escaped);
                i += 2;
                continue;
            }
            '*' | '?' | '[' | '/' => flush_literal(&mut literal, &mut tokens),
            _ => {
                literal.push(c);
                i += 1;
                continue;
            }
        }

        match c {
            '/' => {
                if tokens.last() != Some(&Token::Separator) {
                    tokens.push(Token::Separator);
                }
                i += 1;
            }
            '?' => {
                tokens.push(Token::Question);
                i += 1;
            }
            '[' => {
                let (class, next) = parse_class(&chars, i)?;
                tokens.push(Token::Class(class));
                i = next;
            }
            _ => {
                let mut run = 0;
                while chars.get(i + run) == Some(&'*') {
                    run += 1;
                }
                i += run;
                if run == 1 {
                    tokens.push(Token::Star);
                    continue;
                }
                let starts_segment = matches!(
                    tokens.last(),
                    None | Some(Token::Separator) | Some(Token::AnySegments)
                );
                if starts_segment && chars.get(i) == Some(&'/') {
                    tokens.push(Token::AnySegments);
                    // The slash belongs to the `**/` unit.
                    while chars.get(i) == Some(&'/') {
                        i += 1;
                    }
                } else {
                    tokens.push(Token::AnyRun);
                }
            }
        }
    }
    flush_literal(&mut literal, &mut tokens);
    Ok(tokens)
}

fn flush_literal(literal: &mut String, tokens: &mut Vec<Token>) {
    if !literal.is_empty() {
        tokens.push(Token::Literal(std::mem::take(literal)));
    }
}

/// Parses a bracket expression starting at `chars[start] == '['`.
///
/// Returns the class and the index just past the closing `]`.
fn parse_class(chars: &[char], start: usize) -> Result<(CharClass, usize), String> {
    let mut i = start + 1;
    let negated = matches!(chars.get(i), Some('!') | Some('^'));
    if negated {
        i += 1;
    }

    let mut items = Vec::new();
    loop {
        let c = match chars.get(i) {
            None => return Err("unterminated character class".to_string()),
            Some(']') => break,
            Some('\\') => {
                i += 1;
                *chars.get(i).ok_or("dangling escape in character class")?
            }
            Some(c) => *c,
        };
        i += 1;

        if chars.get(i) == Some(&'-') && !matches!(chars.get(i + 1), None | Some(']')) {
            let hi = match chars[i + 1] {
                '\\' => {
                    i += 1;
                    *chars
                        .get(i + 1)
                        .ok_or("dangling escape in character class")?
                }
                other => other,
            };
            i += 2;
            if hi < c {
                return Err(format!("invalid range '{}-{}' in character class", c, hi));
            }
            items.push(ClassItem::Range(c, hi));
        } else {
            items.push(ClassItem::Char(c));
        }
    }

    if items.is_empty() {
        return Err("empty character class".to_string());
    }
    Ok((CharClass { negated, items }, i + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(s: &str) -> Token {
        Token::Literal(s.to_string())
    }

    #[test]
    fn test_literal_and_separators() {
        assert_eq!(
            tokenize("src//main.c").unwrap(),
            vec![lit("src"), Token::Separator, lit("main.c")]
        );
    }

    #[test]
    fn test_single_wildcards() {
        assert_eq!(
            tokenize("a*b?c").unwrap(),
            vec![lit("a"), Token::Star, lit("b"), Token::Question, lit("c")]
        );
    }

    #[test]
    fn test_double_star_segment_forms() {
        assert_eq!(
            tokenize("a/**/b").unwrap(),
            vec![lit("a"), Token::Separator, Token::AnySegments, lit("b")]
        );
        assert_eq!(
            tokenize("**/b").unwrap(),
            vec![Token::AnySegments, lit("b")]
        );
        assert_eq!(
            tokenize("a/**").unwrap(),
            vec![lit("a"), Token::Separator, Token::AnyRun]
        );
        assert_eq!(tokenize("a**b").unwrap(), vec![lit("a"), Token::AnyRun, lit("b")]);
    }

    #[test]
    fn test_escape_makes_metacharacters_literal() {
        assert_eq!(tokenize(r"a\*b\[").unwrap(), vec![lit("a*b[")]);
    }

    #[test]
    fn test_dangling_escape_is_rejected() {
        let err = tokenize("abc\\").unwrap_err();
        assert!(err.contains("dangling escape"));
    }

    #[test]
    fn test_class_items_and_negation() {
        let tokens = tokenize("[!a-c_]").unwrap();
        assert_eq!(
            tokens,
            vec![Token::Class(CharClass {
                negated: true,
                items: vec![ClassItem::Range('a', 'c'), ClassItem::Char('_')],
            })]
        );
    }

    #[test]
    fn test_class_trailing_dash_is_literal() {
        let tokens = tokenize("[a-]").unwrap();
        assert_eq!(
            tokens,
            vec![Token::Class(CharClass {
                negated: false,
                items: vec![ClassItem::Char('a'), ClassItem::Char('-')],
            })]
        );
    }

    #[test]
    fn test_malformed_classes() {
        assert!(tokenize("file[0-9.txt").unwrap_err().contains("unterminated"));
        assert!(tokenize("[]").unwrap_err().contains("empty"));
        assert!(tokenize("[z-a]").unwrap_err().contains("invalid range"));
    }
}
