//! Statement productions. One function per grammar rule; every function
//! returns a node even after a mismatch, relying on the cursor's
//! record-and-skip recovery.

use super::{expressions, Parser};
use crate::ast::{Node, NodeKind};
use crate::lexer::TokenKind;

impl Parser<'_> {
    /// print := VISIBLE|INVISIBLE [expr (YR expr)*]
    ///
    /// A bare output keyword is legal; operands are only parsed when the
    /// next token can start an expression.
    pub(super) fn print_statement(&mut self) -> Node {
        let keyword = self.cursor.expect(TokenKind::OutputKeyword);
        let mut node = Node::with_value(NodeKind::Print, keyword.text, keyword.line);
        let has_operand = self
            .cursor
            .current()
            .map_or(false, expressions::starts_expression);
        if has_operand {
            node.add(self.expression());
            while self.cursor.match_kind(TokenKind::Yr) {
                node.add(self.expression());
            }
        }
        node
    }

    /// declaration := I-HAS-A IDENT (ITZ expr)?
    pub(super) fn var_declaration(&mut self) -> Node {
        let keyword = self.cursor.expect(TokenKind::VarDeclaration);
        if !self.in_wazzup {
            self.cursor
                .record_warning("Variable declaration outside WAZZUP", Some(keyword.line));
        }
        let mut node = Node::with_line(NodeKind::VarDeclaration, keyword.line);
        let name = self.cursor.expect(TokenKind::Identifier);
        node.add(Node::with_value(NodeKind::Identifier, name.text, name.line));
        if self.cursor.match_kind(TokenKind::VarAssignment) {
            node.add(self.expression());
        }
        node
    }

    /// assignment := IDENT R expr
    pub(super) fn assignment(&mut self) -> Node {
        let target = self.cursor.expect(TokenKind::Identifier);
        let mut node = Node::with_line(NodeKind::Assignment, target.line);
        node.add(Node::with_value(
            NodeKind::Identifier,
            target.text,
            target.line,
        ));
        self.cursor.expect(TokenKind::VarAssignment);
        node.add(self.expression());
        node
    }

    /// typecast statement := IDENT IS-NOW-A TYPE
    pub(super) fn typecast_statement(&mut self) -> Node {
        let target = self.cursor.expect(TokenKind::Identifier);
        self.cursor.expect(TokenKind::IsNowA);
        let type_name = self.cursor.expect(TokenKind::TypeLiteral);
        let mut node = Node::with_value(NodeKind::Typecast, type_name.text, target.line);
        node.add(Node::with_value(
            NodeKind::Identifier,
            target.text,
            target.line,
        ));
        node
    }

    /// conditional := O-RLY? YA-RLY block (MEBBE expr block)* (NO-WAI block)? OIC
    pub(super) fn conditional(&mut self) -> Node {
        let opener = self.cursor.expect_text(TokenKind::ControlFlow, "O RLY?");
        let mut node = Node::with_line(NodeKind::Conditional, opener.line);

        let yarly = self.cursor.expect_text(TokenKind::ControlFlow, "YA RLY");
        let mut then_branch = Node::with_line(NodeKind::YaRly, yarly.line);
        then_branch.add(self.block());
        node.add(then_branch);

        while self.cursor.check_text(TokenKind::ControlFlow, "MEBBE") {
            let mebbe = self.cursor.expect_text(TokenKind::ControlFlow, "MEBBE");
            let mut branch = Node::with_line(NodeKind::Mebbe, mebbe.line);
            branch.add(self.expression());
            branch.add(self.block());
            node.add(branch);
        }

        if self.cursor.check_text(TokenKind::ControlFlow, "NO WAI") {
            let nowai = self.cursor.expect_text(TokenKind::ControlFlow, "NO WAI");
            let mut branch = Node::with_line(NodeKind::NoWai, nowai.line);
            branch.add(self.block());
            node.add(branch);
        }

        self.cursor.expect_text(TokenKind::ControlFlow, "OIC");
        node
    }

    /// loop := IM-IN-YR IDENT ((UPPIN|NERFIN) YR IDENT)? TIL expr block
    ///         IM-OUTTA-YR IDENT
    ///
    /// `WILE` is scanned but not part of this grammar; it surfaces as an
    /// expect mismatch on `TIL`.
    pub(super) fn loop_statement(&mut self) -> Node {
        let opener = self.cursor.expect_text(TokenKind::Looping, "IM IN YR");
        let name = self.cursor.expect(TokenKind::Identifier);
        let mut node = Node::with_value(NodeKind::Loop, name.text, opener.line);

        if self.cursor.check_text(TokenKind::Looping, "UPPIN")
            || self.cursor.check_text(TokenKind::Looping, "NERFIN")
        {
            let direction = self.cursor.expect(TokenKind::Looping);
            self.cursor.expect(TokenKind::Yr);
            let variable = self.cursor.expect(TokenKind::Identifier);
            let mut direction_node =
                Node::with_value(NodeKind::Direction, direction.text, direction.line);
            direction_node.add(Node::with_value(
                NodeKind::Identifier,
                variable.text,
                variable.line,
            ));
            node.add(direction_node);
        }

        self.cursor.expect_text(TokenKind::Looping, "TIL");
        node.add(self.expression());
        node.add(self.block());
        self.cursor.expect_text(TokenKind::Looping, "IM OUTTA YR");
        self.cursor.expect(TokenKind::Identifier);
        node
    }

    /// switch := expr WTF? (OMG literal block)* (OMGWTF block)? OIC
    ///
    /// Entered from `expression_statement` once the scrutinee expression
    /// turns out to be followed by `WTF?`.
    pub(super) fn switch_statement(&mut self, scrutinee: Node) -> Node {
        let opener = self.cursor.expect_text(TokenKind::ControlFlow, "WTF?");
        let mut node = Node::with_line(NodeKind::Switch, opener.line);
        node.add(scrutinee);

        while self.cursor.check_text(TokenKind::ControlFlow, "OMG") {
            let omg = self.cursor.expect_text(TokenKind::ControlFlow, "OMG");
            let mut case = Node::with_line(NodeKind::Case, omg.line);
            case.add(self.case_literal());
            case.add(self.block());
            node.add(case);
        }

        if self.cursor.check_text(TokenKind::ControlFlow, "OMGWTF") {
            let omgwtf = self.cursor.expect_text(TokenKind::ControlFlow, "OMGWTF");
            let mut default = Node::with_line(NodeKind::Default, omgwtf.line);
            default.add(self.block());
            node.add(default);
        }

        self.cursor.expect_text(TokenKind::ControlFlow, "OIC");
        node
    }

    /// Case labels are restricted to literals. On anything else the error
    /// is recorded without consuming, so the block parser can still claim
    /// the offending token.
    fn case_literal(&mut self) -> Node {
        if let Some(token) = self.cursor.current() {
            let is_literal = matches!(
                token.kind,
                TokenKind::IntLiteral
                    | TokenKind::FloatLiteral
                    | TokenKind::StringLiteral
                    | TokenKind::TroofLiteral
            );
            if is_literal {
                let token = token.clone();
                self.cursor.advance();
                return Node::with_value(NodeKind::Literal, token.text, token.line);
            }
            let (text, line) = (token.text.clone(), token.line);
            self.cursor
                .record(format!("Expected literal, got '{}'", text), Some(line));
            return Node::with_line(NodeKind::Error, line);
        }
        let line = self.cursor.line();
        self.cursor.record("Expected literal, got end of input", line);
        Node::new(NodeKind::Error)
    }

    /// func_def := HOW-IZ-I IDENT (YR IDENT)* block IF-U-SAY-SO
    pub(super) fn function_def(&mut self) -> Node {
        let opener = self.cursor.expect_text(TokenKind::FunctionKeyword, "HOW IZ I");
        let name = self.cursor.expect(TokenKind::Identifier);
        let mut node = Node::with_value(NodeKind::FuncDef, name.text, opener.line);

        let mut params = Node::new(NodeKind::ParamList);
        while self.cursor.match_kind(TokenKind::Yr) {
            let param = self.cursor.expect(TokenKind::Identifier);
            params.add(Node::with_value(
                NodeKind::Identifier,
                param.text,
                param.line,
            ));
        }
        node.add(params);

        node.add(self.block());
        self.cursor
            .expect_text(TokenKind::FunctionKeyword, "IF U SAY SO");
        node
    }

    /// input := GIMMEH IDENT
    pub(super) fn input_statement(&mut self) -> Node {
        let keyword = self.cursor.expect(TokenKind::InputKeyword);
        let mut node = Node::with_line(NodeKind::Input, keyword.line);
        let target = self.cursor.expect(TokenKind::Identifier);
        node.add(Node::with_value(
            NodeKind::Identifier,
            target.text,
            target.line,
        ));
        node
    }

    /// return := FOUND YR expr
    pub(super) fn return_statement(&mut self) -> Node {
        let keyword = self.cursor.expect(TokenKind::ReturnKeyword);
        let mut node = Node::with_line(NodeKind::Return, keyword.line);
        self.cursor.expect(TokenKind::Yr);
        node.add(self.expression());
        node
    }

    /// exit := GTFO
    pub(super) fn exit_statement(&mut self) -> Node {
        let keyword = self.cursor.expect(TokenKind::ExitKeyword);
        Node::with_line(NodeKind::Exit, keyword.line)
    }

    /// exception := PLZ expr? AWSUM-THX block (O-NOES block)? KTHX
    pub(super) fn exception_statement(&mut self) -> Node {
        let opener = self.cursor.expect_text(TokenKind::ExceptionKeyword, "PLZ");
        let mut node = Node::with_line(NodeKind::Exception, opener.line);

        if !self.cursor.check_text(TokenKind::ExceptionKeyword, "AWSUM THX") {
            node.add(self.expression());
        }

        let thx = self
            .cursor
            .expect_text(TokenKind::ExceptionKeyword, "AWSUM THX");
        let mut success = Node::with_line(NodeKind::Success, thx.line);
        success.add(self.block());
        node.add(success);

        if self.cursor.check_text(TokenKind::ExceptionKeyword, "O NOES") {
            let noes = self.cursor.expect_text(TokenKind::ExceptionKeyword, "O NOES");
            let mut failure = Node::with_line(NodeKind::Failure, noes.line);
            failure.add(self.block());
            node.add(failure);
        }

        self.cursor.expect_text(TokenKind::ExceptionKeyword, "KTHX");
        node
    }

    /// A bare expression used as a statement. When the expression turns
    /// out to be a switch scrutinee (next token is `WTF?`) the switch
    /// production takes over.
    pub(super) fn expression_statement(&mut self) -> Node {
        let expr = self.expression();
        if self.cursor.check_text(TokenKind::ControlFlow, "WTF?") {
            return self.switch_statement(expr);
        }
        let mut node = Node::new(NodeKind::ExprStatement);
        node.line = expr.line;
        node.add(expr);
        node
    }
}
