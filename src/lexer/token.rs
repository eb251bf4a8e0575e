use std::fmt;

/// Lexical categories of LOLCODE. Multi-keyword categories keep the
/// concrete keyword in the token's `text` field, so the parser narrows
/// with `(kind, text)` pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum TokenKind {
    // Program framing
    CodeDelimiter,    // HAI, KTHXBYE
    VarListDelimiter, // WAZZUP, BUHBYE

    // Declarations and assignment
    VarDeclaration, // I HAS A
    VarAssignment,  // ITZ, R

    // I/O
    OutputKeyword, // VISIBLE, INVISIBLE
    InputKeyword,  // GIMMEH

    // Operators by category
    ArithmeticOperator, // SUM OF, DIFF OF, PRODUKT OF, QUOSHUNT OF, MOD OF, BIGGR OF, SMALLR OF
    ComparisonOperator, // BOTH SAEM, DIFFRINT
    LogicalOperator,    // BOTH OF, EITHER OF, WON OF, ANY OF, ALL OF, NOT
    Concatenation,      // SMOOSH

    // Block and control keywords
    ControlFlow,      // O RLY?, YA RLY, MEBBE, NO WAI, OIC, WTF?, OMG, OMGWTF
    Looping,          // IM IN YR, IM OUTTA YR, UPPIN, NERFIN, TIL, WILE
    FunctionKeyword,  // HOW IZ I, IF U SAY SO, I IZ, MKAY
    ReturnKeyword,    // FOUND
    ExitKeyword,      // GTFO
    ExceptionKeyword, // PLZ, AWSUM THX, O NOES, KTHX

    // Typecasting
    Maek,        // MAEK
    IsNowA,      // IS NOW A
    A,           // A
    TypeLiteral, // NUMBR, NUMBAR, YARN, TROOF, NOOB

    // Structural separators
    ParamSeparator, // AN
    Yr,             // YR

    // Literals and identifiers
    IntLiteral,
    FloatLiteral,
    StringLiteral, // quotes kept in `text`
    TroofLiteral,  // WIN, FAIL
    Identifier,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::CodeDelimiter => "code delimiter",
            TokenKind::VarListDelimiter => "variable list delimiter",
            TokenKind::VarDeclaration => "I HAS A",
            TokenKind::VarAssignment => "assignment keyword",
            TokenKind::OutputKeyword => "output keyword",
            TokenKind::InputKeyword => "GIMMEH",
            TokenKind::ArithmeticOperator => "arithmetic operator",
            TokenKind::ComparisonOperator => "comparison operator",
            TokenKind::LogicalOperator => "logical operator",
            TokenKind::Concatenation => "SMOOSH",
            TokenKind::ControlFlow => "control flow keyword",
            TokenKind::Looping => "loop keyword",
            TokenKind::FunctionKeyword => "function keyword",
            TokenKind::ReturnKeyword => "FOUND",
            TokenKind::ExitKeyword => "GTFO",
            TokenKind::ExceptionKeyword => "exception keyword",
            TokenKind::Maek => "MAEK",
            TokenKind::IsNowA => "IS NOW A",
            TokenKind::A => "A",
            TokenKind::TypeLiteral => "type literal",
            TokenKind::ParamSeparator => "AN",
            TokenKind::Yr => "YR",
            TokenKind::IntLiteral => "integer literal",
            TokenKind::FloatLiteral => "float literal",
            TokenKind::StringLiteral => "string literal",
            TokenKind::TroofLiteral => "TROOF literal",
            TokenKind::Identifier => "identifier",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact source text of the token (string literals keep their quotes).
    pub text: String,
    /// 1-based line of the token's first character.
    pub line: usize,
    /// 1-based column of the token's first character.
    pub column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize, column: usize) -> Self {
        Token {
            kind,
            text: text.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} '{}'", self.kind, self.text)
    }
}
