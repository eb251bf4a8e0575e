pub mod error;
pub mod lexer;
pub mod token;

#[cfg(test)]
mod tests;

pub use error::LexerError;
pub use lexer::{tokenize, Lexer};
pub use token::{Token, TokenKind};
