use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use lox_scan::driver::{self, Format};
use lox_scan::{logging, repl};

#[derive(Parser, Debug)]
#[command(name = "lox-scan", about = "Tokenize Lox source code")]
struct Cli {
    /// Lox source file to scan (omit for REPL)
    file: Option<PathBuf>,

    /// Token output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Render errors with source snippets
    #[arg(long)]
    fancy: bool,
}

fn main() -> Result<ExitCode> {
    logging::init_tracing();
    let cli = Cli::parse();

    match cli.file {
        Some(ref path) => {
            let status = driver::run_file(
                path,
                cli.format,
                cli.fancy,
                &mut io::stdout().lock(),
                &mut io::stderr().lock(),
            )?;
            Ok(ExitCode::from(status))
        }
        None => {
            repl::run_repl()?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
