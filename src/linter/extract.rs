//! Pulls the one meaningful line out of noisy validator output.
//!
//! `ecpg` reports problems as `stdin:1: ERROR: syntax error at or near ...`.
//! Fragments are single-line, so line 1 is the only location it can name.

use std::sync::LazyLock;

use regex::Regex;

use super::types::DiagnosticLevel;

/// Location marker `ecpg` prints in front of diagnostics for input line 1.
pub const LOCATION_PREFIX: &str = "stdin:1:";

static LEVEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<level>ERROR|WARNING)\b").expect("level pattern is valid")
});

/// Diagnostic text extracted from validator output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    pub level:   Option<DiagnosticLevel>,
    pub message: String
}

/// Find the first line carrying [`LOCATION_PREFIX`] and return the rest of
/// it, trimmed. `None` when no such line exists.
pub fn extract(output: &str) -> Option<Extracted> {
    output.lines().find_map(|line| {
        let message = line.strip_prefix(LOCATION_PREFIX)?.trim();
        let level = LEVEL
            .captures(message)
            .and_then(|caps| match &caps["level"] {
                "ERROR" => Some(DiagnosticLevel::Error),
                "WARNING" => Some(DiagnosticLevel::Warning),
                _ => None
            });
        Some(Extracted {
            level,
            message: message.to_string()
        })
    })
}

/// First non-blank line of `output`, used when nothing could be extracted.
pub fn first_meaningful_line(output: &str) -> Option<&str> {
    output.lines().map(str::trim).find(|line| !line.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_error_line() {
        let got = extract("stdin:1: ERROR: syntax error at or near \";\"").unwrap();
        assert_eq!(got.message, "ERROR: syntax error at or near \";\"");
        assert_eq!(got.level, Some(DiagnosticLevel::Error));
    }

    #[test]
    fn test_first_matching_line_wins() {
        let output = "/* Processed by ecpg */\n\
                      stdin:1: WARNING: unsupported feature\n\
                      stdin:1: ERROR: later error\n";
        let got = extract(output).unwrap();
        assert_eq!(got.message, "WARNING: unsupported feature");
        assert_eq!(got.level, Some(DiagnosticLevel::Warning));
    }

    #[test]
    fn test_unrelated_text_yields_none() {
        assert!(extract("the brown dog jumps over the red fox").is_none());
    }

    #[test]
    fn test_empty_output_yields_none() {
        assert!(extract("").is_none());
    }

    #[test]
    fn test_prefix_must_start_line() {
        assert!(extract("error in stdin:1: something").is_none());
    }

    #[test]
    fn test_message_without_level() {
        let got = extract("stdin:1:   unterminated quoted string  ").unwrap();
        assert_eq!(got.message, "unterminated quoted string");
        assert!(got.level.is_none());
    }

    #[test]
    fn test_first_meaningful_line_skips_blanks() {
        assert_eq!(first_meaningful_line("\n  \nSegmentation fault\n"), Some("Segmentation fault"));
        assert_eq!(first_meaningful_line(" \n"), None);
    }
}
