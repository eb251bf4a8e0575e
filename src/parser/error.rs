use thiserror::Error;

/// Syntax records come in two strengths. Warnings (currently only the
/// declaration-outside-WAZZUP rule) are reported but do not count as
/// errors, so a program carrying nothing worse still passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

fn render(message: &str, line: &Option<usize>, severity: &Severity) -> String {
    let stage = match severity {
        Severity::Warning => "Syntax warning",
        Severity::Error => "Syntax error",
    };
    match line {
        Some(line) => format!("{} on line {}: {}", stage, line, message),
        None => format!("{}: {}", stage, message),
    }
}

/// A collected syntax record. Parsing never aborts on one of these; they
/// accumulate while recovery keeps the cursor moving.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{}", render(.message, .line, .severity))]
pub struct ParseError {
    pub message: String,
    pub line: Option<usize>,
    pub severity: Severity,
}

impl ParseError {
    pub fn new(message: impl Into<String>, line: Option<usize>) -> Self {
        ParseError {
            message: message.into(),
            line,
            severity: Severity::Error,
        }
    }

    pub fn warning(message: impl Into<String>, line: Option<usize>) -> Self {
        ParseError {
            message: message.into(),
            line,
            severity: Severity::Warning,
        }
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}
