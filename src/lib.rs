pub mod diagnostics;
pub mod driver;
pub mod error;
pub mod logging;
pub mod repl;
pub mod scanner;

// Re-export the types most callers need
pub use diagnostics::{Diagnostics, Report, Reporter};
pub use error::ScanError;
pub use scanner::token::{Literal, Span, Token, TokenKind};
