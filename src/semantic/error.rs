use thiserror::Error;

fn render(message: &str, line: &Option<usize>) -> String {
    match line {
        Some(line) => format!("Semantic error on line {}: {}", line, message),
        None => format!("Semantic error: {}", message),
    }
}

/// A collected semantic error. Like syntax errors these are accumulated,
/// never thrown; one meaningless construct must not hide the next.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{}", render(.message, .line))]
pub struct SemanticError {
    pub message: String,
    pub line: Option<usize>,
}

impl SemanticError {
    pub fn new(message: impl Into<String>, line: Option<usize>) -> Self {
        SemanticError {
            message: message.into(),
            line,
        }
    }
}
