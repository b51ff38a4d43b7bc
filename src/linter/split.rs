//! Splits a normalized statement into validator-ready fragments.
//!
//! Splitting is lexical: every `;` ends a fragment, including one inside a
//! string literal or a comment. Only the validator understands SQL.

use super::{normalize::TERMINATOR, types::Fragment};

/// Keyword prefix `ecpg` requires in front of embedded SQL.
pub const KEYWORD_PREFIX: &str = "EXEC SQL";

/// Lazily split `normalized` after each terminator.
///
/// Each piece keeps its terminator, gets [`KEYWORD_PREFIX`] prepended when
/// missing, and has every line break replaced by a single space.
pub fn split(normalized: &str) -> impl Iterator<Item = Fragment> + '_ {
    normalized
        .split_inclusive(TERMINATOR)
        .filter(|piece| !piece.is_empty())
        .map(|piece| {
            let mut text = String::with_capacity(KEYWORD_PREFIX.len() + 1 + piece.len());
            if !piece.starts_with(KEYWORD_PREFIX) {
                text.push_str(KEYWORD_PREFIX);
                text.push(' ');
            }
            push_single_line(&mut text, piece);
            Fragment::new(text)
        })
}

fn push_single_line(out: &mut String, piece: &str) {
    let mut chars = piece.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                chars.next_if_eq(&'\n');
                out.push(' ');
            }
            '\n' => out.push(' '),
            c => out.push(c)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str) -> Vec<String> {
        split(input).map(Fragment::into_string).collect()
    }

    #[test]
    fn test_single_statement_prefixed() {
        assert_eq!(texts("SELECT 1;"), vec!["EXEC SQL SELECT 1;"]);
    }

    #[test]
    fn test_existing_prefix_not_doubled() {
        assert_eq!(texts("EXEC SQL SELECT 1;"), vec!["EXEC SQL SELECT 1;"]);
    }

    #[test]
    fn test_n_terminators_yield_n_fragments() {
        let fragments = texts("SELECT 1;SELECT 2; SELECT 3;");
        assert_eq!(fragments.len(), 3);
        assert!(fragments.iter().all(|f| f.starts_with(KEYWORD_PREFIX)));
        assert_eq!(fragments[2], "EXEC SQL  SELECT 3;");
    }

    #[test]
    fn test_trailing_content_becomes_fragment() {
        assert_eq!(
            texts("SELECT 1; SELECT 2"),
            vec!["EXEC SQL SELECT 1;", "EXEC SQL  SELECT 2"]
        );
    }

    #[test]
    fn test_newlines_become_spaces() {
        assert_eq!(
            texts("SELECT a\nFROM t\r\nWHERE b = 1;"),
            vec!["EXEC SQL SELECT a FROM t WHERE b = 1;"]
        );
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert!(texts("").is_empty());
    }

    #[test]
    fn test_terminator_inside_literal_still_splits() {
        assert_eq!(
            texts("SELECT 'a;b';"),
            vec!["EXEC SQL SELECT 'a;", "EXEC SQL b';"]
        );
    }
}
