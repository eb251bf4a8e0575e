pub mod analyzer;
pub mod error;
pub mod symbol;
pub mod value;


use crate::ast::Node;
use crate::lexer::{self, LexerError};
use crate::parser::{self, ParseError};

use analyzer::SemanticAnalyzer;
pub use error::SemanticError;
pub use symbol::{DuplicateDeclaration, SymbolTable};
pub use value::Value;

/// Behavior switches for rules with more than one defensible reading.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalysisOptions {
    /// Flag non-string SMOOSH operands instead of coercing them.
    pub strict_smoosh: bool,
    /// Skip semantic analysis entirely when the parse produced syntax
    /// errors, instead of analyzing the partial tree.
    pub gate_semantics: bool,
}

/// Everything the front end produced for one source text.
#[derive(Debug)]
pub struct Report {
    pub ast: Node,
    pub syntax_errors: Vec<ParseError>,
    pub semantic_errors: Vec<SemanticError>,
    pub symbols: SymbolTable,
}

impl Report {
    /// Syntax records at error strength; the parser's warnings are
    /// reported but not counted.
    pub fn syntax_error_count(&self) -> usize {
        self.syntax_errors
            .iter()
            .filter(|error| !error.is_warning())
            .count()
    }

    pub fn error_count(&self) -> usize {
        self.syntax_error_count() + self.semantic_errors.len()
    }

    pub fn is_clean(&self) -> bool {
        self.error_count() == 0
    }
}

/// Analyzes a parsed tree with a fresh symbol table. The tree is not
/// mutated, so running this twice yields identical results.
pub fn analyze(root: &Node, options: &AnalysisOptions) -> (Vec<SemanticError>, SymbolTable) {
    SemanticAnalyzer::new(options).analyze(root)
}

/// Runs the full pipeline on raw source text: scan, parse, analyze.
/// Scanning is strict and fails the whole run; parse and semantic errors
/// are collected into the report instead.
pub fn analyze_source(source: &str, options: &AnalysisOptions) -> Result<Report, LexerError> {
    let tokens = lexer::tokenize(source)?;
    let (ast, syntax_errors) = parser::parse(&tokens);
    let gated = options.gate_semantics && syntax_errors.iter().any(|error| !error.is_warning());
    let (semantic_errors, symbols) = if gated {
        (Vec::new(), SymbolTable::new())
    } else {
        analyze(&ast, options)
    };
    Ok(Report {
        ast,
        syntax_errors,
        semantic_errors,
        symbols,
    })
}
