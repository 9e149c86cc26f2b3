pub mod lexer;
pub mod token;

use crate::diagnostics::Diagnostics;
use crate::error::ScanError;
use token::Token;

pub use lexer::{Scanner, scan_tokens};

/// Scan source code into a list of tokens, or every error found on the way.
pub fn scan(source: &str) -> Result<Vec<Token>, Vec<ScanError>> {
    let mut diagnostics = Diagnostics::new();
    let tokens = scan_tokens(source, &mut diagnostics);
    if diagnostics.had_error() {
        Err(diagnostics.into_errors())
    } else {
        Ok(tokens)
    }
}
