//! ucdl - check and inspect use-case diagram files
//!
//! Usage:
//!   ucdl <file>                  # Parse a diagram and print its AST
//!   ucdl <file> --tokens         # Print the token stream instead
//!   ucdl <file> --format json    # Print the AST as JSON
//!   ucdl - < diagram.puml        # Read from stdin
//!
//! Logging goes to stderr and is controlled through `RUST_LOG`.

use std::io::Read;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;
use ucdl::parser::{LexerOptions, ParseOptions, tokenize_with};
use ucdl::{LineIndex, ParseError, parse_with};

#[derive(Parser)]
#[command(name = "ucdl")]
#[command(version)]
#[command(about = "Parse PlantUML-style use-case diagrams")]
struct Cli {
    /// Input diagram file, or `-` for stdin
    #[arg(value_name = "FILE")]
    file: String,

    /// Print the token stream instead of the AST
    #[arg(short, long)]
    tokens: bool,

    /// Output format for the AST
    #[arg(short, long, value_enum, default_value_t = Format::Debug)]
    format: Format,

    /// Skip characters that start no token instead of failing
    #[arg(long)]
    lenient: bool,

    /// Maximum package nesting depth
    #[arg(long, value_name = "DEPTH")]
    max_nesting: Option<usize>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Debug,
    Json,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let source = match read_source(&cli.file) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error reading '{}': {}", cli.file, e);
            return ExitCode::FAILURE;
        }
    };

    let lexer = if cli.lenient {
        LexerOptions::lenient()
    } else {
        LexerOptions::default()
    };
    let mut parser = ParseOptions::default();
    if let Some(depth) = cli.max_nesting {
        parser.max_nesting = depth;
    }

    if cli.tokens {
        return match tokenize_with(&source, &lexer) {
            Ok(lexed) => {
                for token in &lexed.tokens {
                    println!("{}", token);
                }
                ExitCode::SUCCESS
            }
            Err(e) => {
                report(&cli.file, &source, &ParseError::from(e));
                ExitCode::FAILURE
            }
        };
    }

    let diagram = match parse_with(&source, &lexer, &parser) {
        Ok(d) => d,
        Err(e) => {
            report(&cli.file, &source, &e);
            return ExitCode::FAILURE;
        }
    };

    match cli.format {
        Format::Debug => println!("{:#?}", diagram),
        Format::Json => match serde_json::to_string_pretty(&diagram) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing to JSON: {}", e);
                return ExitCode::FAILURE;
            }
        },
    }
    ExitCode::SUCCESS
}

fn read_source(path: &str) -> std::io::Result<String> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path)
    }
}

/// Print `file:line:col: message` followed by the offending source line
fn report(path: &str, source: &str, err: &ParseError) {
    let index = LineIndex::new(source);
    let pos = index.line_col(err.range().start());
    eprintln!(
        "{}:{}:{}: {}: {}",
        path,
        pos.line,
        pos.col,
        err.code().category_description(),
        err.format()
    );
    if let Some(text) = index.line_text(pos.line) {
        eprintln!("  | {}", text);
    }
}
