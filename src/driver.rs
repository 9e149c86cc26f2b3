use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;

use crate::diagnostics::Diagnostics;
use crate::scanner;
use crate::scanner::token::Token;

/// Exit status for a script with lexical errors.
pub const EXIT_DATA_ERR: u8 = 65;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

pub fn write_tokens(out: &mut impl Write, tokens: &[Token], format: Format) -> Result<()> {
    match format {
        Format::Text => {
            for token in tokens {
                writeln!(out, "{token}")?;
            }
        }
        Format::Json => {
            let json = serde_json::to_string_pretty(tokens).context("serialize tokens to JSON")?;
            writeln!(out, "{json}")?;
        }
    }
    Ok(())
}

/// Print what the scan reported, either as plain `[line N] Error: ...` lines
/// or as miette reports with the offending source.
pub fn write_errors(
    err: &mut impl Write,
    diagnostics: Diagnostics,
    name: &str,
    source: &str,
    fancy: bool,
) -> Result<()> {
    if fancy {
        for error in diagnostics.into_errors() {
            writeln!(err, "{:?}", error.with_source_code(name, source))?;
        }
    } else {
        for report in diagnostics.reports() {
            writeln!(err, "{report}")?;
        }
    }
    Ok(())
}

/// Scan one file, writing tokens to `out` and errors to `err`. Returns the
/// process exit status.
pub fn run_file(
    path: &Path,
    format: Format,
    fancy: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<u8> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("read source file '{}'", path.display()))?;

    let mut diagnostics = Diagnostics::new();
    let tokens = scanner::scan_tokens(&source, &mut diagnostics);
    write_tokens(out, &tokens, format)?;

    if diagnostics.had_error() {
        write_errors(err, diagnostics, &path.display().to_string(), &source, fancy)?;
        return Ok(EXIT_DATA_ERR);
    }
    Ok(0)
}
