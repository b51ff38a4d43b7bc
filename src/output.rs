use colored::Colorize;
use serde::Serialize;

use crate::linter::{Diagnostic, DiagnosticKind, DiagnosticLevel, ValidationResult};

/// Output format for results
#[derive(Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml
}

/// Output options
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format:  OutputFormat,
    pub colored: bool
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format:  OutputFormat::Text,
            colored: true
        }
    }
}

/// Check result for serialization
#[derive(Debug, Serialize)]
pub struct CheckReport<'a> {
    pub valid:             bool,
    pub fragments_checked: usize,
    pub diagnostics:       &'a [Diagnostic]
}

impl<'a> From<&'a ValidationResult> for CheckReport<'a> {
    fn from(result: &'a ValidationResult) -> Self {
        Self {
            valid:             result.is_valid(),
            fragments_checked: result.fragments_checked,
            diagnostics:       &result.diagnostics
        }
    }
}

/// Format a validation result based on output options
///
/// Text output prints one `ERROR: <message>` line per diagnostic
/// (`WARNING:` for validator warnings) and nothing when the input is valid.
pub fn format_validation_result(result: &ValidationResult, opts: &OutputOptions) -> String {
    match opts.format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&CheckReport::from(result)).unwrap_or_default()
        }
        OutputFormat::Yaml => serde_yaml::to_string(&CheckReport::from(result)).unwrap_or_default(),
        OutputFormat::Text => format_text(result, opts)
    }
}

fn format_text(result: &ValidationResult, opts: &OutputOptions) -> String {
    let mut output = String::new();

    for diagnostic in result {
        let label = match (diagnostic.kind, diagnostic.level) {
            (DiagnosticKind::UnparseableOutput, _) => "VALIDATOR",
            (_, Some(DiagnosticLevel::Warning)) => "WARNING",
            _ => "ERROR"
        };
        if opts.colored {
            let label = format!("{}: ", label);
            let label = match diagnostic.level {
                Some(DiagnosticLevel::Warning) => label.yellow().bold(),
                _ => label.red().bold()
            };
            output.push_str(&label.to_string());
        } else {
            output.push_str(&format!("{}: ", label));
        }
        output.push_str(&diagnostic.message);
        output.push('\n');

        if let (Some(index), Some(fragment)) = (diagnostic.fragment_index, &diagnostic.fragment) {
            let context = format!("  --> statement #{}: {}", index + 1, fragment);
            if opts.colored {
                output.push_str(&context.dimmed().to_string());
            } else {
                output.push_str(&context);
            }
            output.push('\n');
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_result_prints_nothing_as_text() {
        let opts = OutputOptions {
            format:  OutputFormat::Text,
            colored: false
        };
        assert!(format_validation_result(&ValidationResult::new(), &opts).is_empty());
    }

    #[test]
    fn test_warning_is_labelled_as_warning() {
        let mut result = ValidationResult::new();
        result.push(Diagnostic {
            kind:           DiagnosticKind::Syntax,
            fragment_index: Some(0),
            fragment:       Some("EXEC SQL SELECT 1;".into()),
            level:          Some(DiagnosticLevel::Warning),
            message:        "WARNING: unsupported feature".to_string()
        });
        let opts = OutputOptions {
            format:  OutputFormat::Text,
            colored: false
        };
        let text = format_validation_result(&result, &opts);
        assert!(text.starts_with("WARNING: WARNING: unsupported feature\n"));
    }

    #[test]
    fn test_report_from_result() {
        let mut result = ValidationResult::new();
        result.fragments_checked = 3;
        let report = CheckReport::from(&result);
        assert!(report.valid);
        assert_eq!(report.fragments_checked, 3);
    }
}
