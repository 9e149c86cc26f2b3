use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::debug;

use crate::diagnostics::Diagnostics;
use crate::scanner;
use crate::scanner::token::{Token, TokenKind};

/// Run the interactive prompt. Each line is scanned on its own and its tokens
/// printed; errors on one line do not carry over to the next.
pub fn run_repl() -> anyhow::Result<()> {
    let mut editor = DefaultEditor::new()?;
    let mut diagnostics = Diagnostics::new();

    loop {
        let line = match editor.readline("> ") {
            Ok(line) => line,
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => break,
            Err(e) => return Err(e.into()),
        };

        if line.trim().is_empty() {
            continue;
        }
        let _ = editor.add_history_entry(line.as_str());

        let tokens = scanner::scan_tokens(&line, &mut diagnostics);
        for token in printable(&tokens) {
            println!("{token}");
        }
        for report in diagnostics.reports() {
            eprintln!("{report}");
        }
        if diagnostics.had_error() {
            debug!(errors = diagnostics.reports().len(), "line had errors");
        }
        diagnostics.reset();
    }
    Ok(())
}

/// Tokens worth echoing at the prompt: everything except the end marker.
fn printable(tokens: &[Token]) -> impl Iterator<Item = &Token> {
    tokens.iter().filter(|t| t.kind != TokenKind::Eof)
}
