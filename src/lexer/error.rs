use thiserror::Error;

/// Scanning failure. Unlike parse and semantic records, a lexer error
/// aborts the pass: the token stream would be meaningless past an
/// unrecognized character.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Lexer error on line {line}: {message}")]
pub struct LexerError {
    pub message: String,
    pub line: usize,
}

impl LexerError {
    pub fn new(message: impl Into<String>, line: usize) -> Self {
        LexerError {
            message: message.into(),
            line,
        }
    }
}
