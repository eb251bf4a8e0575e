//! Static analysis for LOLCODE.
//!
//! Three stages make up the pipeline: [`lexer`] scans source text into
//! tokens, [`parser`] builds a syntax tree while collecting recoverable
//! syntax errors, and [`semantic`] walks the tree to infer types,
//! evaluate constant expressions and fill the declare-once symbol table.
//! Programs are validated, never run.
//!
//! [`semantic::analyze_source`] composes the stages into a single call
//! from source text to a [`semantic::Report`].

pub mod ast;
pub mod cli;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod semantic;

pub use ast::{Node, NodeKind};
pub use lexer::{tokenize, LexerError, Token, TokenKind};
pub use parser::{parse, ParseError};
pub use semantic::{analyze, analyze_source, AnalysisOptions, Report, SymbolTable, Value};
