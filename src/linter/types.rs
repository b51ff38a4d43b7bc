//! Value types flowing through the lint pipeline.
//!
//! - [`Fragment`] - One single-line statement handed to the validator
//! - [`RawOutput`] - What one validator run printed, plus its exit status
//! - [`Diagnostic`] - Why one fragment (or the whole input) was rejected
//! - [`ValidationResult`] - Ordered diagnostics for one checked input

use std::fmt;

use compact_str::CompactString;
use serde::Serialize;
use smallvec::SmallVec;

/// A single statement ready to be submitted to the validator.
///
/// Always starts with the validator keyword prefix, never contains a
/// newline and is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment(String);

impl Fragment {
    pub(crate) fn new(text: String) -> Self {
        debug_assert!(!text.is_empty());
        debug_assert!(!text.contains(['\n', '\r']));
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Fragment {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Output captured from one validator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawOutput {
    /// Whether the validator exited with status zero
    pub success:   bool,
    /// Exit code, `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
    /// Standard output followed by standard error, lossily decoded
    pub text:      String
}

/// What kind of problem a [`Diagnostic`] reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// The caller passed an empty string; nothing was validated
    EmptyStatement,
    /// The validator rejected the fragment and said why
    Syntax,
    /// The validator failed but printed nothing we recognize
    UnparseableOutput
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyStatement => write!(f, "empty-statement"),
            Self::Syntax => write!(f, "syntax"),
            Self::UnparseableOutput => write!(f, "unparseable-output")
        }
    }
}

/// Severity the validator attached to its message, when it gave one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticLevel {
    Error,
    Warning
}

/// One human-readable problem report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind:           DiagnosticKind,
    /// Zero-based position of the offending fragment, `None` for input errors
    pub fragment_index: Option<usize>,
    /// Fragment text as sent to the validator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fragment:       Option<CompactString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level:          Option<DiagnosticLevel>,
    pub message:        String
}

/// Message reported when the caller passes an empty string.
pub const EMPTY_STATEMENT_MESSAGE: &str = "statement string is empty";

impl Diagnostic {
    pub fn empty_statement() -> Self {
        Self {
            kind:           DiagnosticKind::EmptyStatement,
            fragment_index: None,
            fragment:       None,
            level:          None,
            message:        EMPTY_STATEMENT_MESSAGE.to_string()
        }
    }

    pub(crate) fn for_fragment(
        kind: DiagnosticKind,
        index: usize,
        fragment: &Fragment,
        level: Option<DiagnosticLevel>,
        message: String
    ) -> Self {
        Self {
            kind,
            fragment_index: Some(index),
            fragment: Some(CompactString::from(fragment.as_str())),
            level,
            message
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Diagnostics collected for one checked input, in fragment order.
///
/// Empty means every fragment was accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// Number of fragments submitted to the validator
    pub fragments_checked: usize,
    pub diagnostics:       SmallVec<[Diagnostic; 2]>
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn single(diagnostic: Diagnostic) -> Self {
        let mut result = Self::new();
        result.push(diagnostic);
        result
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    pub fn messages(&self) -> Vec<&str> {
        self.diagnostics.iter().map(|d| d.message.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a ValidationResult {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.iter()
    }
}
