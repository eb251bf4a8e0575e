#[cfg(test)]
mod tests {
    use crate::ast::{Node, NodeKind};
    use crate::lexer::{tokenize, TokenKind};
    use crate::parser::{parse, Cursor, ParseError};

    fn parse_source(source: &str) -> (Node, Vec<ParseError>) {
        let tokens = tokenize(source).unwrap();
        parse(&tokens)
    }

    fn parse_clean(source: &str) -> Node {
        let (program, errors) = parse_source(source);
        assert!(errors.is_empty(), "unexpected syntax errors: {:?}", errors);
        program
    }

    #[test]
    fn test_cursor_walks_the_stream() {
        let tokens = tokenize("HAI VISIBLE X KTHXBYE").unwrap();
        let mut cursor = Cursor::new(&tokens);

        assert!(cursor.previous().is_none());
        assert!(!cursor.is_at_end());
        assert!(cursor.check_text(TokenKind::CodeDelimiter, "HAI"));
        assert!(!cursor.match_text(TokenKind::CodeDelimiter, "KTHXBYE"));
        assert!(cursor.match_text(TokenKind::CodeDelimiter, "HAI"));
        assert_eq!(cursor.previous().map(|t| t.text.as_str()), Some("HAI"));

        assert!(cursor.match_kind(TokenKind::OutputKeyword));
        cursor.advance();
        assert!(cursor.match_kind(TokenKind::CodeDelimiter));
        assert!(cursor.is_at_end());
        assert!(cursor.current().is_none());
        // Exhausted stream still knows where it ended.
        assert_eq!(cursor.line(), Some(1));
    }

    #[test]
    fn test_cursor_expect_synthesizes_at_end_of_input() {
        let tokens = tokenize("HAI").unwrap();
        let mut cursor = Cursor::new(&tokens);
        cursor.advance();

        let token = cursor.expect_text(TokenKind::CodeDelimiter, "KTHXBYE");
        assert_eq!(token.kind, TokenKind::CodeDelimiter);
        assert_eq!(token.line, 1);
        let errors = cursor.take_errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Expected 'KTHXBYE', got end of input");
    }

    #[test]
    fn test_empty_program() {
        let program = parse_clean("HAI\nKTHXBYE");
        assert_eq!(program.kind, NodeKind::Program);
        assert!(program.children.is_empty());
    }

    #[test]
    fn test_empty_token_stream_reports_both_delimiters() {
        let (program, errors) = parse(&[]);
        assert_eq!(program.kind, NodeKind::Program);
        assert!(program.children.is_empty());
        assert_eq!(errors.len(), 2);
        assert!(errors[0].message.contains("'HAI'"));
        assert!(errors[1].message.contains("'KTHXBYE'"));
    }

    #[test]
    fn test_missing_end_delimiter_still_returns_tree() {
        let (program, errors) = parse_source("HAI\nWAZZUP\nI HAS A X\nBUHBYE");
        assert_eq!(program.children.len(), 1);
        assert_eq!(program.children[0].kind, NodeKind::VarDeclaration);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("'KTHXBYE'"));
        assert!(errors[0].message.contains("end of input"));
    }

    #[test]
    fn test_declaration_with_initializer() {
        let program = parse_clean("HAI\nWAZZUP\nI HAS A X ITZ 5\nBUHBYE\nKTHXBYE");
        let declaration = &program.children[0];
        assert_eq!(declaration.kind, NodeKind::VarDeclaration);
        assert_eq!(declaration.line, Some(3));
        match &declaration.children[..] {
            [name, init] => {
                assert_eq!(name.kind, NodeKind::Identifier);
                assert_eq!(name.value.as_deref(), Some("X"));
                assert_eq!(init.kind, NodeKind::Literal);
                assert_eq!(init.value.as_deref(), Some("5"));
            }
            _ => panic!("expected identifier and initializer children"),
        }
    }

    #[test]
    fn test_declaration_outside_wazzup_is_flagged() {
        let (program, errors) = parse_source("HAI\nI HAS A X\nKTHXBYE");
        assert_eq!(program.children[0].kind, NodeKind::VarDeclaration);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Variable declaration outside WAZZUP");
        assert_eq!(errors[0].line, Some(2));
        assert!(errors[0].is_warning(), "WAZZUP rule must not fail the program");
    }

    #[test]
    fn test_declaration_inside_wazzup_is_clean() {
        let (_, errors) = parse_source("HAI\nWAZZUP\nI HAS A X\nBUHBYE\nKTHXBYE");
        assert!(errors.is_empty(), "unexpected records: {:?}", errors);
    }

    #[test]
    fn test_identifier_lookahead_disambiguation() {
        let program = parse_clean(
            "HAI\nWAZZUP\nI HAS A X\nBUHBYE\nX R 2\nX IS NOW A YARN\nX\nKTHXBYE",
        );
        let kinds: Vec<NodeKind> = program.children.iter().map(|child| child.kind).collect();
        assert_eq!(
            kinds,
            vec![
                NodeKind::VarDeclaration,
                NodeKind::Assignment,
                NodeKind::Typecast,
                NodeKind::ExprStatement,
            ]
        );
        let typecast = &program.children[2];
        assert_eq!(typecast.value.as_deref(), Some("YARN"));
        assert_eq!(typecast.children[0].kind, NodeKind::Identifier);
    }

    #[test]
    fn test_print_with_and_without_operands() {
        let program = parse_clean("HAI\nVISIBLE \"A\" YR 1 YR WIN\nVISIBLE\nKTHXBYE");
        let full = &program.children[0];
        assert_eq!(full.kind, NodeKind::Print);
        assert_eq!(full.value.as_deref(), Some("VISIBLE"));
        assert_eq!(full.children.len(), 3);
        let bare = &program.children[1];
        assert!(bare.children.is_empty());
    }

    #[test]
    fn test_nested_arithmetic_expression() {
        let program = parse_clean("HAI\nSUM OF 1 AN DIFF OF 5 AN 2\nKTHXBYE");
        let statement = &program.children[0];
        assert_eq!(statement.kind, NodeKind::ExprStatement);
        let operation = &statement.children[0];
        assert_eq!(operation.kind, NodeKind::Operation);
        assert_eq!(operation.value.as_deref(), Some("SUM OF"));
        assert_eq!(operation.children.len(), 2);
        let inner = &operation.children[1];
        assert_eq!(inner.kind, NodeKind::Operation);
        assert_eq!(inner.value.as_deref(), Some("DIFF OF"));
    }

    #[test]
    fn test_conditional_with_all_branches() {
        let source = "HAI\n\
                      O RLY?\n\
                      YA RLY\n    VISIBLE \"A\"\n\
                      MEBBE BOTH SAEM 1 AN 2\n    VISIBLE \"B\"\n\
                      NO WAI\n    VISIBLE \"C\"\n\
                      OIC\n\
                      KTHXBYE";
        let program = parse_clean(source);
        let conditional = &program.children[0];
        assert_eq!(conditional.kind, NodeKind::Conditional);
        match &conditional.children[..] {
            [ya_rly, mebbe, no_wai] => {
                assert_eq!(ya_rly.kind, NodeKind::YaRly);
                assert_eq!(ya_rly.children[0].kind, NodeKind::Block);
                assert_eq!(mebbe.kind, NodeKind::Mebbe);
                assert_eq!(mebbe.children[0].kind, NodeKind::Comparison);
                assert_eq!(mebbe.children[1].kind, NodeKind::Block);
                assert_eq!(no_wai.kind, NodeKind::NoWai);
            }
            _ => panic!("expected YA RLY, MEBBE and NO WAI branches"),
        }
    }

    #[test]
    fn test_switch_grows_from_expression_statement() {
        let source = "HAI\n\
                      X\n\
                      WTF?\n\
                      OMG 1\n    VISIBLE \"ONE\"\n    GTFO\n\
                      OMG 2\n    VISIBLE \"TWO\"\n\
                      OMGWTF\n    VISIBLE \"ELSE\"\n\
                      OIC\n\
                      KTHXBYE";
        let program = parse_clean(source);
        let switch = &program.children[0];
        assert_eq!(switch.kind, NodeKind::Switch);
        assert_eq!(switch.children[0].kind, NodeKind::Identifier);
        assert_eq!(switch.children[1].kind, NodeKind::Case);
        assert_eq!(switch.children[1].children[0].value.as_deref(), Some("1"));
        assert_eq!(switch.children[2].kind, NodeKind::Case);
        assert_eq!(switch.children[3].kind, NodeKind::Default);
        // first case body: print then exit
        let body = &switch.children[1].children[1];
        assert_eq!(body.children.len(), 2);
        assert_eq!(body.children[1].kind, NodeKind::Exit);
    }

    #[test]
    fn test_loop_with_direction_clause() {
        let source = "HAI\n\
                      IM IN YR loopy UPPIN YR i TIL BOTH SAEM i AN 10\n\
                      VISIBLE i\n\
                      IM OUTTA YR loopy\n\
                      KTHXBYE";
        let program = parse_clean(source);
        let looped = &program.children[0];
        assert_eq!(looped.kind, NodeKind::Loop);
        assert_eq!(looped.value.as_deref(), Some("loopy"));
        match &looped.children[..] {
            [direction, condition, body] => {
                assert_eq!(direction.kind, NodeKind::Direction);
                assert_eq!(direction.value.as_deref(), Some("UPPIN"));
                assert_eq!(direction.children[0].value.as_deref(), Some("i"));
                assert_eq!(condition.kind, NodeKind::Comparison);
                assert_eq!(body.kind, NodeKind::Block);
            }
            _ => panic!("expected direction, condition and body"),
        }
    }

    #[test]
    fn test_function_def_and_call() {
        let source = "HAI\n\
                      HOW IZ I add YR a YR b\n\
                      FOUND YR SUM OF a AN b\n\
                      IF U SAY SO\n\
                      I IZ add YR 1 YR 2 MKAY\n\
                      KTHXBYE";
        let program = parse_clean(source);
        let def = &program.children[0];
        assert_eq!(def.kind, NodeKind::FuncDef);
        assert_eq!(def.value.as_deref(), Some("add"));
        let params = &def.children[0];
        assert_eq!(params.kind, NodeKind::ParamList);
        assert_eq!(params.children.len(), 2);
        let body = &def.children[1];
        assert_eq!(body.children[0].kind, NodeKind::Return);

        let call_statement = &program.children[1];
        assert_eq!(call_statement.kind, NodeKind::ExprStatement);
        let call = &call_statement.children[0];
        assert_eq!(call.kind, NodeKind::FuncCall);
        assert_eq!(call.value.as_deref(), Some("add"));
        assert_eq!(call.children[0].children.len(), 2);
    }

    #[test]
    fn test_exception_with_failure_handler() {
        let source = "HAI\n\
                      PLZ QUOSHUNT OF 1 AN 0\n\
                      AWSUM THX\n    VISIBLE \"OK\"\n\
                      O NOES\n    VISIBLE \"ERR\"\n\
                      KTHX\n\
                      KTHXBYE";
        let program = parse_clean(source);
        let exception = &program.children[0];
        assert_eq!(exception.kind, NodeKind::Exception);
        match &exception.children[..] {
            [guarded, success, failure] => {
                assert_eq!(guarded.kind, NodeKind::Operation);
                assert_eq!(success.kind, NodeKind::Success);
                assert_eq!(failure.kind, NodeKind::Failure);
            }
            _ => panic!("expected guarded expression and both handlers"),
        }
    }

    #[test]
    fn test_logical_and_smoosh_expressions() {
        let program =
            parse_clean("HAI\nANY OF WIN AN FAIL AN WIN MKAY\nSMOOSH \"a\" AN \"b\"\nKTHXBYE");
        let any_of = &program.children[0].children[0];
        assert_eq!(any_of.kind, NodeKind::Logical);
        assert_eq!(any_of.value.as_deref(), Some("ANY OF"));
        assert_eq!(any_of.children.len(), 3);
        let smoosh = &program.children[1].children[0];
        assert_eq!(smoosh.kind, NodeKind::Smoosh);
        assert_eq!(smoosh.children.len(), 2);
    }

    #[test]
    fn test_maek_expression() {
        let program = parse_clean("HAI\nMAEK \"5\" A NUMBR\nKTHXBYE");
        let cast = &program.children[0].children[0];
        assert_eq!(cast.kind, NodeKind::Typecast);
        assert_eq!(cast.value.as_deref(), Some("NUMBR"));
        assert_eq!(cast.children[0].kind, NodeKind::Literal);
    }

    #[test]
    fn test_unknown_statement_recovers_with_one_token_skip() {
        let (program, errors) = parse_source("HAI\nMKAY\nVISIBLE 1\nKTHXBYE");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("Unknown statement starting with 'MKAY'"));
        assert_eq!(program.children.len(), 2);
        assert_eq!(program.children[0].kind, NodeKind::Error);
        assert_eq!(program.children[1].kind, NodeKind::Print);
    }

    #[test]
    fn test_expected_token_error_names_found_token() {
        let (_, errors) = parse_source("HAI\nWAZZUP\nI HAS A 5\nBUHBYE\nKTHXBYE");
        assert!(!errors.is_empty());
        assert!(errors[0].message.contains("Expected identifier, got '5'"));
    }

    #[test]
    fn test_wile_is_rejected_by_loop_grammar() {
        let source = "HAI\n\
                      IM IN YR loopy WILE BOTH SAEM i AN 10\n\
                      IM OUTTA YR loopy\n\
                      KTHXBYE";
        let (program, errors) = parse_source(source);
        assert_eq!(program.children[0].kind, NodeKind::Loop);
        assert!(errors.iter().any(|e| e.message.contains("Expected 'TIL', got 'WILE'")));
    }
}
