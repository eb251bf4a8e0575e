//! Human-facing rendering of analysis results: each collected record as
//! a stage-tagged `Line N: message` line with the offending source line
//! underneath, then an error-count summary.

pub mod color;

use crate::lexer::LexerError;
use crate::semantic::Report;

fn get_line(source: &str, line: usize) -> Option<&str> {
    source.lines().nth(line.saturating_sub(1))
}

fn print_record(source: &str, tag: &str, message: &str, line: Option<usize>) {
    match line {
        Some(line) => {
            println!("{} Line {}: {}", tag, line, message);
            if let Some(text) = get_line(source, line) {
                println!("{}", color::excerpt(text));
            }
        }
        None => println!("{} {}", tag, message),
    }
}

/// Renders a scan failure. Scanning aborts on the first one, so this is
/// always a single record.
pub fn print_lexer_error(source: &str, error: &LexerError) {
    print_record(
        source,
        &color::error_tag("lexical"),
        &error.message,
        Some(error.line),
    );
}

/// Renders every record of a report, syntax first, followed by the
/// error-count summary.
pub fn print_report(source: &str, report: &Report) {
    for error in &report.syntax_errors {
        let tag = if error.is_warning() {
            color::warning_tag("syntax")
        } else {
            color::error_tag("syntax")
        };
        print_record(source, &tag, &error.message, error.line);
    }
    for error in &report.semantic_errors {
        print_record(
            source,
            &color::error_tag("semantic"),
            &error.message,
            error.line,
        );
    }
    println!(
        "{} syntax error(s), {} semantic error(s)",
        report.syntax_error_count(),
        report.semantic_errors.len()
    );
}
