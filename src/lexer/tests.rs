#[cfg(test)]
mod lexer_tests {
    use crate::lexer::{tokenize, TokenKind};

    #[test]
    fn test_declaration_line() {
        let source = "I HAS A X ITZ 5";
        let tokens = tokenize(source).unwrap();

        assert_eq!(tokens[0].kind, TokenKind::VarDeclaration);
        assert_eq!(tokens[0].text, "I HAS A");
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].text, "X");
        assert_eq!(tokens[2].kind, TokenKind::VarAssignment);
        assert_eq!(tokens[2].text, "ITZ");
        assert_eq!(tokens[3].kind, TokenKind::IntLiteral);
        assert_eq!(tokens[3].text, "5");
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0].to_string(), "VarDeclaration 'I HAS A'");
    }

    #[test]
    fn test_multi_word_operator_beats_identifier() {
        let source = "SUM OF 2 AN 3";
        let tokens = tokenize(source).unwrap();

        assert_eq!(tokens[0].kind, TokenKind::ArithmeticOperator);
        assert_eq!(tokens[0].text, "SUM OF");
        assert_eq!(tokens[1].kind, TokenKind::IntLiteral);
        assert_eq!(tokens[2].kind, TokenKind::ParamSeparator);
        assert_eq!(tokens[3].kind, TokenKind::IntLiteral);
    }

    #[test]
    fn test_keyword_prefix_stays_identifier() {
        // WINNER and NOTHING start with keywords but are plain names.
        let tokens = tokenize("WINNER NOTHING").unwrap();

        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].text, "WINNER");
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].text, "NOTHING");
    }

    #[test]
    fn test_line_and_column_tracking() {
        let source = "HAI\nVISIBLE X\nKTHXBYE";
        let tokens = tokenize(source).unwrap();

        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[0].column, 1);
        assert_eq!(tokens[1].text, "VISIBLE");
        assert_eq!(tokens[1].line, 2);
        assert_eq!(tokens[1].column, 1);
        assert_eq!(tokens[2].text, "X");
        assert_eq!(tokens[2].line, 2);
        assert_eq!(tokens[2].column, 9);
        assert_eq!(tokens[3].text, "KTHXBYE");
        assert_eq!(tokens[3].line, 3);
    }

    #[test]
    fn test_comments_are_discarded() {
        let source = "HAI BTW greet the world\nVISIBLE X\nKTHXBYE";
        let tokens = tokenize(source).unwrap();

        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[1].text, "VISIBLE");
    }

    #[test]
    fn test_block_comment_spans_lines() {
        let source = "HAI\nOBTW this goes\non and on\nTLDR\nKTHXBYE";
        let tokens = tokenize(source).unwrap();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].text, "KTHXBYE");
        assert_eq!(tokens[1].line, 5);
    }

    #[test]
    fn test_string_literal_keeps_quotes() {
        let tokens = tokenize(r#"VISIBLE "O HAI THAR""#).unwrap();

        assert_eq!(tokens[1].kind, TokenKind::StringLiteral);
        assert_eq!(tokens[1].text, "\"O HAI THAR\"");
    }

    #[test]
    fn test_numeric_literals() {
        let tokens = tokenize("3.5 -2.25 42 -7").unwrap();

        assert_eq!(tokens[0].kind, TokenKind::FloatLiteral);
        assert_eq!(tokens[1].kind, TokenKind::FloatLiteral);
        assert_eq!(tokens[1].text, "-2.25");
        assert_eq!(tokens[2].kind, TokenKind::IntLiteral);
        assert_eq!(tokens[3].kind, TokenKind::IntLiteral);
        assert_eq!(tokens[3].text, "-7");
    }

    #[test]
    fn test_question_mark_keywords() {
        let tokens = tokenize("O RLY? WTF? OMGWTF").unwrap();

        assert_eq!(tokens[0].kind, TokenKind::ControlFlow);
        assert_eq!(tokens[0].text, "O RLY?");
        assert_eq!(tokens[1].text, "WTF?");
        assert_eq!(tokens[2].text, "OMGWTF");
    }

    #[test]
    fn test_kthx_is_not_kthxbye() {
        let tokens = tokenize("KTHX KTHXBYE").unwrap();

        assert_eq!(tokens[0].kind, TokenKind::ExceptionKeyword);
        assert_eq!(tokens[1].kind, TokenKind::CodeDelimiter);
    }

    #[test]
    fn test_unrecognized_character_fails() {
        let err = tokenize("I HAS A X\nI HAS A # Y").unwrap_err();

        assert_eq!(err.line, 2);
        assert!(err.message.contains('#'), "message was: {}", err.message);
    }

    #[test]
    fn test_tokens_round_trip_to_source_columns() {
        let source = "HAI\nI HAS A X ITZ SUM OF 2 AN 3.5\nKTHXBYE";
        let lines: Vec<&str> = source.lines().collect();

        for token in tokenize(source).unwrap() {
            let line_text = lines[token.line - 1];
            let at_column = &line_text[token.column - 1..];
            assert!(
                at_column.starts_with(&token.text),
                "token '{}' not at line {} column {}",
                token.text,
                token.line,
                token.column
            );
        }
    }
}
