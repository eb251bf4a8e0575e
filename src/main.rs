use clap::Parser;
use lolcheck::cli;
use lolcheck::semantic::AnalysisOptions;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lolcheck")]
#[command(about = "A static analyzer for LOLCODE: lexer, recursive-descent parser and semantic checker")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Check a LOLCODE file without running it
    #[command(alias = "c")]
    Check {
        /// Input file to check
        input: PathBuf,

        /// Flag non-string SMOOSH operands instead of coercing them
        #[arg(long)]
        strict_smoosh: bool,

        /// Skip semantic analysis when the parse produced syntax errors
        #[arg(long)]
        gate_semantics: bool,

        /// Print the syntax tree after the report
        #[arg(long)]
        ast: bool,

        /// Print the final symbol table after the report
        #[arg(long)]
        symbols: bool,
    },

    /// Generate lexer tokens from a LOLCODE file
    #[command(alias = "l")]
    Lex {
        /// Input file to generate tokens from
        input: PathBuf,

        /// Output JSON file name (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate AST JSON from a LOLCODE file
    #[command(alias = "ast")]
    GenAst {
        /// Input file to generate AST from
        input: PathBuf,

        /// Output JSON file name (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            input,
            strict_smoosh,
            gate_semantics,
            ast,
            symbols,
        } => {
            let options = AnalysisOptions {
                strict_smoosh,
                gate_semantics,
            };
            cli::check(input, options, ast, symbols)?;
        }
        Commands::Lex { input, output } => {
            cli::lex(input, output)?;
        }
        Commands::GenAst { input, output } => {
            cli::gen_ast(input, output)?;
        }
    }

    Ok(())
}
