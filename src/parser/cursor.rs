use super::error::ParseError;
use crate::lexer::{Token, TokenKind};

/// Read-only window over the token stream. Owns the position and the
/// syntax-error sink; `expect` records a mismatch and keeps the parse
/// moving instead of failing it.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
    errors: Vec<ParseError>,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            errors: Vec::new(),
        }
    }

    pub fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    pub fn previous(&self) -> Option<&Token> {
        if self.pos == 0 {
            None
        } else {
            self.tokens.get(self.pos - 1)
        }
    }

    pub fn peek_next(&self) -> Option<&Token> {
        self.tokens.get(self.pos + 1)
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Line of the current token, falling back to the previous one once
    /// the stream is exhausted.
    pub fn line(&self) -> Option<usize> {
        self.current()
            .or_else(|| self.previous())
            .map(|token| token.line)
    }

    pub fn advance(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }

    pub fn check(&self, kind: TokenKind) -> bool {
        self.current().map_or(false, |token| token.kind == kind)
    }

    pub fn check_text(&self, kind: TokenKind, text: &str) -> bool {
        self.current()
            .map_or(false, |token| token.kind == kind && token.text == text)
    }

    pub fn match_kind(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            return true;
        }
        false
    }

    pub fn match_text(&mut self, kind: TokenKind, text: &str) -> bool {
        if self.check_text(kind, text) {
            self.advance();
            return true;
        }
        false
    }

    /// Consumes and returns the current token when it has the wanted kind.
    /// On a mismatch records an error, skips the offending token and returns
    /// it anyway so production functions can keep building.
    pub fn expect(&mut self, kind: TokenKind) -> Token {
        self.expect_with(kind, None)
    }

    /// Like `expect` but also requires the exact keyword text.
    pub fn expect_text(&mut self, kind: TokenKind, text: &str) -> Token {
        self.expect_with(kind, Some(text))
    }

    fn expect_with(&mut self, kind: TokenKind, text: Option<&str>) -> Token {
        let wanted = match text {
            Some(text) => format!("'{}'", text),
            None => kind.to_string(),
        };
        match self.current() {
            Some(token) if token.kind == kind && text.map_or(true, |t| token.text == t) => {
                let token = token.clone();
                self.advance();
                token
            }
            Some(token) => {
                let token = token.clone();
                self.record(
                    format!("Expected {}, got '{}'", wanted, token.text),
                    Some(token.line),
                );
                self.advance();
                token
            }
            None => {
                let line = self.line();
                self.record(format!("Expected {}, got end of input", wanted), line);
                Token::new(kind, text.unwrap_or(""), line.unwrap_or(1), 1)
            }
        }
    }

    pub fn record(&mut self, message: impl Into<String>, line: Option<usize>) {
        self.errors.push(ParseError::new(message, line));
    }

    /// Records at warning strength; the record is reported but does not
    /// count against the program.
    pub fn record_warning(&mut self, message: impl Into<String>, line: Option<usize>) {
        self.errors.push(ParseError::warning(message, line));
    }

    pub fn take_errors(&mut self) -> Vec<ParseError> {
        std::mem::take(&mut self.errors)
    }
}
