use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::scanner::token::Span;

#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum ScanError {
    #[error("Unexpected character '{ch}'")]
    #[diagnostic(code(lox::scan::unexpected_character))]
    UnexpectedCharacter {
        ch: char,
        line: usize,
        #[label("not valid here")]
        span: SourceSpan,
    },

    #[error("Unterminated string")]
    #[diagnostic(
        code(lox::scan::unterminated_string),
        help("add a closing '\"'")
    )]
    UnterminatedString {
        line: usize,
        #[label("string starts here")]
        span: SourceSpan,
    },
}

impl ScanError {
    pub fn unexpected_character(ch: char, line: usize, span: Span) -> Self {
        Self::UnexpectedCharacter {
            ch,
            line,
            span: span.into(),
        }
    }

    pub fn unterminated_string(line: usize, span: Span) -> Self {
        Self::UnterminatedString {
            line,
            span: span.into(),
        }
    }

    /// Line the error is reported against.
    pub fn line(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { line, .. } | Self::UnterminatedString { line, .. } => *line,
        }
    }

    pub fn span(&self) -> SourceSpan {
        match self {
            Self::UnexpectedCharacter { span, .. } | Self::UnterminatedString { span, .. } => *span,
        }
    }

    /// Attach source code so the error renders with a snippet.
    pub fn with_source_code(
        self,
        name: impl AsRef<str>,
        source: impl Into<String>,
    ) -> miette::Report {
        miette::Report::new(self)
            .with_source_code(miette::NamedSource::new(name, source.into()))
    }
}
