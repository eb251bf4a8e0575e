//! Recursive-descent parser with one-token error recovery.
//!
//! `parse` never fails as a whole: a malformed construct records a
//! `ParseError`, leaves an `Error` placeholder node behind and the cursor
//! moves on, so one defect does not hide the rest of the program. The
//! partial tree is returned together with the collected errors.

use crate::ast::{Node, NodeKind};
use crate::lexer::{Token, TokenKind};

pub mod cursor;
pub mod error;
mod expressions;
mod statements;

#[cfg(test)]
mod tests;

pub use cursor::Cursor;
pub use error::ParseError;

/// Parses a token stream into a syntax tree plus the collected syntax
/// errors. An empty stream still yields a bare `Program` node alongside
/// missing-delimiter errors.
pub fn parse(tokens: &[Token]) -> (Node, Vec<ParseError>) {
    let mut parser = Parser::new(tokens);
    let program = parser.program();
    (program, parser.cursor.take_errors())
}

pub struct Parser<'a> {
    cursor: Cursor<'a>,
    in_wazzup: bool,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            cursor: Cursor::new(tokens),
            in_wazzup: false,
        }
    }

    /// program := HAI stmt_list KTHXBYE
    fn program(&mut self) -> Node {
        let mut node = Node::new(NodeKind::Program);
        self.cursor.expect_text(TokenKind::CodeDelimiter, "HAI");
        for statement in self.statement_list() {
            node.add(statement);
        }
        self.cursor.expect_text(TokenKind::CodeDelimiter, "KTHXBYE");
        node
    }

    /// Parses statements until the current token belongs to the stop set.
    /// The terminator itself is never consumed here; the enclosing
    /// production claims it.
    fn statement_list(&mut self) -> Vec<Node> {
        let mut statements = Vec::new();
        loop {
            if self.at_stop_token() {
                break;
            }
            // WAZZUP opens the declaration section, BUHBYE closes it.
            if self.cursor.match_text(TokenKind::VarListDelimiter, "WAZZUP") {
                self.in_wazzup = true;
                continue;
            }
            if self.cursor.match_text(TokenKind::VarListDelimiter, "BUHBYE") {
                self.in_wazzup = false;
                continue;
            }
            statements.push(self.statement());
        }
        statements
    }

    /// Stop set for statement lists: end of input, program delimiters and
    /// every keyword that closes or continues an enclosing construct
    /// (conditional branches, switch cases, loop and function ends,
    /// exception handlers).
    fn at_stop_token(&self) -> bool {
        let token = match self.cursor.current() {
            Some(token) => token,
            None => return true,
        };
        match token.kind {
            TokenKind::CodeDelimiter => true,
            TokenKind::ControlFlow => {
                matches!(token.text.as_str(), "OIC" | "MEBBE" | "NO WAI" | "OMG" | "OMGWTF")
            }
            TokenKind::FunctionKeyword => token.text == "IF U SAY SO",
            TokenKind::Looping => token.text == "IM OUTTA YR",
            TokenKind::ExceptionKeyword => token.text == "O NOES" || token.text == "KTHX",
            _ => false,
        }
    }

    fn statement(&mut self) -> Node {
        let token = match self.cursor.current() {
            Some(token) => token.clone(),
            None => return Node::new(NodeKind::Error),
        };
        match token.kind {
            TokenKind::OutputKeyword => self.print_statement(),
            TokenKind::VarDeclaration => self.var_declaration(),
            TokenKind::Identifier => match self.cursor.peek_next().map(|next| next.kind) {
                Some(TokenKind::VarAssignment) => self.assignment(),
                Some(TokenKind::IsNowA) => self.typecast_statement(),
                _ => self.expression_statement(),
            },
            TokenKind::ControlFlow if token.text == "O RLY?" => self.conditional(),
            TokenKind::Looping if token.text == "IM IN YR" => self.loop_statement(),
            TokenKind::FunctionKeyword if token.text == "HOW IZ I" => self.function_def(),
            TokenKind::InputKeyword => self.input_statement(),
            TokenKind::ReturnKeyword => self.return_statement(),
            TokenKind::ExitKeyword => self.exit_statement(),
            TokenKind::ExceptionKeyword if token.text == "PLZ" => self.exception_statement(),
            _ if expressions::starts_expression(&token) => self.expression_statement(),
            _ => {
                self.cursor.record(
                    format!("Unknown statement starting with '{}'", token.text),
                    Some(token.line),
                );
                self.cursor.advance();
                Node::with_line(NodeKind::Error, token.line)
            }
        }
    }

    /// block := stmt_list (wrapped in a `Block` node)
    fn block(&mut self) -> Node {
        let mut node = Node::new(NodeKind::Block);
        for statement in self.statement_list() {
            node.add(statement);
        }
        node
    }
}
