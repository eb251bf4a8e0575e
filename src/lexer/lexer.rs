use lazy_static::lazy_static;
use regex::Regex;

use super::error::LexerError;
use super::token::{Token, TokenKind};

/// One row of the scan table: a position-anchored pattern and the kind it
/// produces. Rows with `kind: None` (whitespace, comments) are consumed
/// without emitting a token.
struct TokenPattern {
    kind: Option<TokenKind>,
    regex: Regex,
}

impl TokenPattern {
    fn emit(kind: TokenKind, pattern: &str) -> Self {
        TokenPattern {
            kind: Some(kind),
            regex: Regex::new(pattern).expect("invalid token pattern"),
        }
    }

    fn skip(pattern: &str) -> Self {
        TokenPattern {
            kind: None,
            regex: Regex::new(pattern).expect("invalid token pattern"),
        }
    }
}

lazy_static! {
    /// Scan table, tried in order at each position. Ordering carries the
    /// disambiguation rules: comments before everything, multi-word
    /// keywords before their single-word prefixes, every keyword before
    /// the identifier pattern, floats before ints. Keywords end with `\b`
    /// so WINNER lexes as an identifier rather than WIN + NER.
    static ref TOKEN_PATTERNS: Vec<TokenPattern> = vec![
        TokenPattern::skip(r"^[ \t\r]+"),
        TokenPattern::skip(r"^\n"),
        TokenPattern::skip(r"^OBTW[\s\S]*?TLDR"),
        TokenPattern::skip(r"^BTW[^\n]*"),
        TokenPattern::emit(TokenKind::CodeDelimiter, r"^(?:HAI|KTHXBYE)\b"),
        TokenPattern::emit(TokenKind::VarListDelimiter, r"^(?:WAZZUP|BUHBYE)\b"),
        TokenPattern::emit(TokenKind::VarDeclaration, r"^I HAS A\b"),
        TokenPattern::emit(TokenKind::IsNowA, r"^IS NOW A\b"),
        TokenPattern::emit(
            TokenKind::ArithmeticOperator,
            r"^(?:SUM OF|DIFF OF|PRODUKT OF|QUOSHUNT OF|MOD OF|BIGGR OF|SMALLR OF)\b",
        ),
        TokenPattern::emit(TokenKind::ComparisonOperator, r"^(?:BOTH SAEM|DIFFRINT)\b"),
        TokenPattern::emit(
            TokenKind::LogicalOperator,
            r"^(?:BOTH OF|EITHER OF|WON OF|ANY OF|ALL OF|NOT)\b",
        ),
        // O RLY? and WTF? end in '?', where \b can never hold.
        TokenPattern::emit(
            TokenKind::ControlFlow,
            r"^(?:O RLY\?|WTF\?|YA RLY\b|NO WAI\b|MEBBE\b|OIC\b|OMGWTF\b|OMG\b)",
        ),
        TokenPattern::emit(
            TokenKind::Looping,
            r"^(?:IM IN YR|IM OUTTA YR|UPPIN|NERFIN|TIL|WILE)\b",
        ),
        TokenPattern::emit(
            TokenKind::FunctionKeyword,
            r"^(?:HOW IZ I|IF U SAY SO|I IZ|MKAY)\b",
        ),
        TokenPattern::emit(
            TokenKind::ExceptionKeyword,
            r"^(?:PLZ|AWSUM THX|O NOES|KTHX)\b",
        ),
        TokenPattern::emit(TokenKind::VarAssignment, r"^(?:ITZ|R)\b"),
        TokenPattern::emit(TokenKind::OutputKeyword, r"^(?:VISIBLE|INVISIBLE)\b"),
        TokenPattern::emit(TokenKind::InputKeyword, r"^GIMMEH\b"),
        TokenPattern::emit(TokenKind::ReturnKeyword, r"^FOUND\b"),
        TokenPattern::emit(TokenKind::ExitKeyword, r"^GTFO\b"),
        TokenPattern::emit(TokenKind::Concatenation, r"^SMOOSH\b"),
        TokenPattern::emit(TokenKind::Maek, r"^MAEK\b"),
        TokenPattern::emit(
            TokenKind::TypeLiteral,
            r"^(?:NUMBR|NUMBAR|YARN|TROOF|NOOB)\b",
        ),
        TokenPattern::emit(TokenKind::TroofLiteral, r"^(?:WIN|FAIL)\b"),
        TokenPattern::emit(TokenKind::ParamSeparator, r"^AN\b"),
        TokenPattern::emit(TokenKind::Yr, r"^YR\b"),
        TokenPattern::emit(TokenKind::A, r"^A\b"),
        TokenPattern::emit(TokenKind::FloatLiteral, r"^-?\d+\.\d+"),
        TokenPattern::emit(TokenKind::IntLiteral, r"^-?\d+"),
        TokenPattern::emit(TokenKind::StringLiteral, r#"^"[^"\n]*""#),
        TokenPattern::emit(TokenKind::Identifier, r"^[A-Za-z][A-Za-z0-9_]*"),
    ];
}

pub struct Lexer<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    pos: usize,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Lexer {
            source,
            tokens: Vec::new(),
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    pub fn tokenize(mut self) -> Result<Vec<Token>, LexerError> {
        while self.pos < self.source.len() {
            let rest = &self.source[self.pos..];
            let matched = TOKEN_PATTERNS
                .iter()
                .find_map(|pattern| pattern.regex.find(rest).map(|m| (pattern, m)));

            match matched {
                Some((pattern, m)) => {
                    let text = m.as_str();
                    if let Some(kind) = pattern.kind {
                        self.tokens
                            .push(Token::new(kind, text, self.line, self.column));
                    }
                    self.consume(text.len());
                }
                None => {
                    let offender = rest.chars().next().map(String::from).unwrap_or_default();
                    return Err(LexerError::new(
                        format!("Unrecognized character '{}'", offender),
                        self.line,
                    ));
                }
            }
        }
        Ok(self.tokens)
    }

    /// Advances past `len` bytes of source, keeping the line and column
    /// counters in step. Block comments are the one token form that can
    /// span lines.
    fn consume(&mut self, len: usize) {
        for c in self.source[self.pos..self.pos + len].chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.pos += len;
    }
}

/// Scans LOLCODE source into its token sequence. Whitespace and both
/// comment forms (BTW line comments, OBTW..TLDR blocks) are discarded.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexerError> {
    Lexer::new(source).tokenize()
}
