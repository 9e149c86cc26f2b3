//! Error reporting for the scanner.
//!
//! The scanner never fails outright. Every problem it finds is handed to a
//! [`Reporter`] and scanning carries on with the next character. Callers own
//! the reporter, so whether an error occurred is a property of the session
//! that ran the scan rather than of the process.

use std::fmt;

use crate::error::ScanError;

/// Sink for lexical errors.
pub trait Reporter {
    /// Record one error. `location` is extra context placed after `Error`
    /// in the rendered line; the scanner always passes an empty string.
    fn report(&mut self, line: usize, location: &str, message: &str);

    /// Record a structured scan error. Reporters that only care about the
    /// rendered form can rely on the default.
    fn scan_error(&mut self, error: ScanError) {
        self.report(error.line(), "", &error.to_string());
    }
}

/// One rendered error line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub line: usize,
    pub location: String,
    pub message: String,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[line {}] Error{}: {}",
            self.line, self.location, self.message
        )
    }
}

/// Collects everything reported during a scan.
#[derive(Debug, Default)]
pub struct Diagnostics {
    reports: Vec<Report>,
    errors: Vec<ScanError>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn had_error(&self) -> bool {
        !self.reports.is_empty()
    }

    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    pub fn errors(&self) -> &[ScanError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<ScanError> {
        self.errors
    }

    /// Forget everything reported so far. The REPL calls this between lines.
    pub fn reset(&mut self) {
        self.reports.clear();
        self.errors.clear();
    }
}

impl Reporter for Diagnostics {
    fn report(&mut self, line: usize, location: &str, message: &str) {
        self.reports.push(Report {
            line,
            location: location.to_string(),
            message: message.to_string(),
        });
    }

    fn scan_error(&mut self, error: ScanError) {
        self.report(error.line(), "", &error.to_string());
        self.errors.push(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::token::Span;

    #[test]
    fn report_rendering() {
        let report = Report {
            line: 3,
            location: String::new(),
            message: "Unterminated string".to_string(),
        };
        assert_eq!(report.to_string(), "[line 3] Error: Unterminated string");

        let located = Report {
            line: 7,
            location: " at 'foo'".to_string(),
            message: "Expect ';'".to_string(),
        };
        assert_eq!(located.to_string(), "[line 7] Error at 'foo': Expect ';'");
    }

    #[test]
    fn collects_and_resets() {
        let mut diagnostics = Diagnostics::new();
        assert!(!diagnostics.had_error());

        diagnostics.scan_error(ScanError::unexpected_character('@', 1, Span::new(0, 1)));
        diagnostics.report(2, "", "something else");

        assert!(diagnostics.had_error());
        assert_eq!(diagnostics.reports().len(), 2);
        assert_eq!(diagnostics.errors().len(), 1);
        assert_eq!(
            diagnostics.reports()[0].to_string(),
            "[line 1] Error: Unexpected character '@'"
        );

        diagnostics.reset();
        assert!(!diagnostics.had_error());
        assert!(diagnostics.errors().is_empty());
    }

    #[test]
    fn default_scan_error_goes_through_report() {
        struct Lines(Vec<String>);

        impl Reporter for Lines {
            fn report(&mut self, line: usize, location: &str, message: &str) {
                self.0.push(format!("{line}|{location}|{message}"));
            }
        }

        let mut lines = Lines(Vec::new());
        lines.scan_error(ScanError::unterminated_string(5, Span::new(0, 4)));
        assert_eq!(lines.0, vec!["5||Unterminated string".to_string()]);
    }
}
