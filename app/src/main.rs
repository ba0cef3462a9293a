//! FILENAME: app/src/main.rs
//! PURPOSE: Console driver for the expression parser.
//! CONTEXT: Thin shell around the parser crate. Reads an expression from the
//! command line (or falls back to a sample), parses it, and prints the
//! resulting tree as pretty JSON.

use std::process::ExitCode;

use tracing::info;

const SAMPLE_EXPRESSION: &str = "20 + 30 - 49 * 25 + 10";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let input = if args.is_empty() {
        SAMPLE_EXPRESSION.to_string()
    } else {
        args.join(" ")
    };

    info!(%input, "parsing expression");

    let program = match parser::parse(&input) {
        Ok(program) => program,
        Err(error) => {
            eprintln!("parse error: {}", error);
            return ExitCode::FAILURE;
        }
    };

    match serde_json::to_string_pretty(&program) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("failed to serialize tree: {}", error);
            ExitCode::FAILURE
        }
    }
}
