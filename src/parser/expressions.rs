//! Expression productions. Operators are prefix keywords in this grammar,
//! so there is no precedence climbing; each operator family has its own
//! operand rule instead.

use super::Parser;
use crate::ast::{Node, NodeKind};
use crate::lexer::{Token, TokenKind};

/// True when a token can begin an expression. Drives both the statement
/// dispatcher and the optional-operand rule for print statements.
pub(super) fn starts_expression(token: &Token) -> bool {
    match token.kind {
        TokenKind::IntLiteral
        | TokenKind::FloatLiteral
        | TokenKind::StringLiteral
        | TokenKind::TroofLiteral
        | TokenKind::Identifier
        | TokenKind::ArithmeticOperator
        | TokenKind::ComparisonOperator
        | TokenKind::LogicalOperator
        | TokenKind::Concatenation
        | TokenKind::Maek => true,
        TokenKind::FunctionKeyword => token.text == "I IZ",
        _ => false,
    }
}

impl Parser<'_> {
    /// expr := literal | IDENT | operation | comparison | logical | smoosh
    ///       | func_call | typecast
    pub(super) fn expression(&mut self) -> Node {
        let token = match self.cursor.current() {
            Some(token) => token.clone(),
            None => {
                let line = self.cursor.line();
                self.cursor.record("Expected expression, got end of input", line);
                let mut node = Node::new(NodeKind::Error);
                node.line = line;
                return node;
            }
        };
        match token.kind {
            TokenKind::IntLiteral
            | TokenKind::FloatLiteral
            | TokenKind::StringLiteral
            | TokenKind::TroofLiteral => {
                self.cursor.advance();
                Node::with_value(NodeKind::Literal, token.text, token.line)
            }
            TokenKind::Identifier => {
                self.cursor.advance();
                Node::with_value(NodeKind::Identifier, token.text, token.line)
            }
            TokenKind::ArithmeticOperator => self.operation(),
            TokenKind::ComparisonOperator => self.comparison(),
            TokenKind::LogicalOperator => self.logical(),
            TokenKind::Concatenation => self.smoosh(),
            TokenKind::Maek => self.maek_expression(),
            TokenKind::FunctionKeyword if token.text == "I IZ" => self.function_call(),
            _ => {
                self.cursor.record(
                    format!("Unexpected token '{}' in expression", token.text),
                    Some(token.line),
                );
                self.cursor.advance();
                Node::with_value(NodeKind::Error, token.text, token.line)
            }
        }
    }

    /// operation := ARITH_OP expr (AN expr)*
    ///
    /// Arity is not enforced here; the analyzer rejects anything with
    /// fewer than two operands.
    fn operation(&mut self) -> Node {
        let operator = self.cursor.expect(TokenKind::ArithmeticOperator);
        let mut node = Node::with_value(NodeKind::Operation, operator.text, operator.line);
        node.add(self.expression());
        while self.cursor.match_kind(TokenKind::ParamSeparator) {
            node.add(self.expression());
        }
        node
    }

    /// comparison := CMP_OP expr (AN expr)?
    fn comparison(&mut self) -> Node {
        let operator = self.cursor.expect(TokenKind::ComparisonOperator);
        let mut node = Node::with_value(NodeKind::Comparison, operator.text, operator.line);
        node.add(self.expression());
        if self.cursor.match_kind(TokenKind::ParamSeparator) {
            node.add(self.expression());
        }
        node
    }

    /// logical := NOT expr
    ///          | (BOTH|EITHER|WON) OF expr AN expr
    ///          | (ANY|ALL) OF expr (AN expr)* MKAY
    ///
    /// The variadic forms need an explicit `MKAY` terminator because their
    /// operand count is unbounded.
    fn logical(&mut self) -> Node {
        let operator = self.cursor.expect(TokenKind::LogicalOperator);
        let mut node = Node::with_value(
            NodeKind::Logical,
            operator.text.clone(),
            operator.line,
        );
        match operator.text.as_str() {
            "NOT" => node.add(self.expression()),
            "BOTH OF" | "EITHER OF" | "WON OF" => {
                node.add(self.expression());
                self.cursor.expect(TokenKind::ParamSeparator);
                node.add(self.expression());
            }
            "ANY OF" | "ALL OF" => {
                node.add(self.expression());
                while self.cursor.match_kind(TokenKind::ParamSeparator) {
                    node.add(self.expression());
                }
                self.cursor.expect_text(TokenKind::FunctionKeyword, "MKAY");
            }
            _ => {
                self.cursor.record(
                    format!("Unknown logical operator '{}'", operator.text),
                    Some(operator.line),
                );
            }
        }
        node
    }

    /// smoosh := SMOOSH expr (AN expr)*
    fn smoosh(&mut self) -> Node {
        let keyword = self.cursor.expect(TokenKind::Concatenation);
        let mut node = Node::with_line(NodeKind::Smoosh, keyword.line);
        node.add(self.expression());
        while self.cursor.match_kind(TokenKind::ParamSeparator) {
            node.add(self.expression());
        }
        node
    }

    /// typecast expression := MAEK expr A? TYPE
    fn maek_expression(&mut self) -> Node {
        let keyword = self.cursor.expect(TokenKind::Maek);
        let operand = self.expression();
        self.cursor.match_kind(TokenKind::A);
        let type_name = self.cursor.expect(TokenKind::TypeLiteral);
        let mut node = Node::with_value(NodeKind::Typecast, type_name.text, keyword.line);
        node.add(operand);
        node
    }

    /// func_call := I-IZ IDENT (YR expr)* MKAY
    pub(super) fn function_call(&mut self) -> Node {
        let opener = self.cursor.expect_text(TokenKind::FunctionKeyword, "I IZ");
        let name = self.cursor.expect(TokenKind::Identifier);
        let mut node = Node::with_value(NodeKind::FuncCall, name.text, opener.line);

        let mut args = Node::new(NodeKind::ArgList);
        while self.cursor.match_kind(TokenKind::Yr) {
            args.add(self.expression());
        }
        node.add(args);

        self.cursor.expect_text(TokenKind::FunctionKeyword, "MKAY");
        node
    }
}
