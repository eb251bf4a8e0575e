use std::path::PathBuf;

use anyhow::bail;

use crate::diagnostics;
use crate::lexer::tokenize;
use crate::parser::parse;
use crate::semantic::{self, AnalysisOptions};

/// Validates that the input file has a .lol extension.
fn validate_lol_file(input: &PathBuf) -> anyhow::Result<()> {
    if input.extension().map_or(false, |ext| ext == "lol") {
        Ok(())
    } else {
        bail!(
            "Input file must have a .lol extension, but got: {}",
            input.display()
        );
    }
}

/// Runs the full pipeline over a file and renders the report. Fails with
/// a non-zero exit when any errors were found; warnings alone pass.
pub fn check(
    input: PathBuf,
    options: AnalysisOptions,
    show_ast: bool,
    show_symbols: bool,
) -> anyhow::Result<()> {
    validate_lol_file(&input)?;
    println!("Checking {}...", input.display());

    let source = std::fs::read_to_string(&input)?;
    let report = match semantic::analyze_source(&source, &options) {
        Ok(report) => report,
        Err(error) => {
            diagnostics::print_lexer_error(&source, &error);
            bail!("1 lexical error found in {}", input.display());
        }
    };

    diagnostics::print_report(&source, &report);

    if show_ast {
        println!("\nAST:");
        print!("{}", report.ast.pretty());
    }
    if show_symbols {
        println!("\nSymbol table:");
        for (name, value) in report.symbols.iter() {
            println!("  {} = {} ({})", name, value, value.type_name());
        }
    }

    if !report.is_clean() {
        bail!("{} error(s) found in {}", report.error_count(), input.display());
    }
    println!("No errors found in {}.", input.display());
    Ok(())
}

/// Dumps the token sequence of a file as pretty-printed JSON.
pub fn lex(input: PathBuf, output: Option<PathBuf>) -> anyhow::Result<()> {
    validate_lol_file(&input)?;
    println!("Generating lexer tokens for {}...", input.display());

    let source = std::fs::read_to_string(&input)?;
    let tokens = tokenize(&source)?;

    let json = serde_json::to_string_pretty(&tokens)?;
    let output_path = output.unwrap_or_else(|| {
        let mut path = input.clone();
        path.set_extension("lol.lex.json");
        path
    });
    std::fs::write(&output_path, json)?;

    println!("Lexer tokens generated successfully: {}", output_path.display());
    Ok(())
}

/// Dumps the syntax tree of a file as pretty-printed JSON. Parse defects
/// go to stderr; the partial tree is still written.
pub fn gen_ast(input: PathBuf, output: Option<PathBuf>) -> anyhow::Result<()> {
    validate_lol_file(&input)?;
    println!("Generating AST for {}...", input.display());

    let source = std::fs::read_to_string(&input)?;
    let tokens = tokenize(&source)?;
    let (program, errors) = parse(&tokens);
    for error in &errors {
        eprintln!("{}", error);
    }

    let json = serde_json::to_string_pretty(&program)?;
    let output_path = output.unwrap_or_else(|| {
        let mut path = input.clone();
        path.set_extension("lol.ast.json");
        path
    });
    std::fs::write(&output_path, json)?;

    println!("AST generated successfully: {}", output_path.display());
    Ok(())
}
