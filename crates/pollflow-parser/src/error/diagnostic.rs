//! The diagnostic type reported by the flow parser.

use std::fmt;

use crate::{
    error::{Severity, error_code::ErrorCode, label::Label},
    span::Span,
};

/// A diagnostic message with source location information.
///
/// Carries a severity, an optional [`ErrorCode`], the message, any number of
/// labeled spans and an optional help text.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    severity: Severity,
    code: Option<ErrorCode>,
    message: String,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Diagnostic {
    /// Create a warning diagnostic.
    ///
    /// # Example
    ///
    /// ```
    /// # use pollflow_parser::error::{Diagnostic, ErrorCode};
    /// # use pollflow_parser::Span;
    ///
    /// let diag = Diagnostic::warning("description line without a process")
    ///     .with_code(ErrorCode::E001)
    ///     .with_label(Span::new(0..24), "ignored")
    ///     .with_help("add a `### ` process header above this line");
    /// assert!(diag.severity().is_warning());
    /// ```
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Get the severity of this diagnostic.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Get the error code, if any.
    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    /// Get the primary message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get all labels attached to this diagnostic.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Get the help text, if any.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Set the error code.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a primary label.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    /// Add a secondary label.
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: None,
            message: message.into(),
            labels: Vec::new(),
            help: None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // "warning[E102]: message" or "warning: message"
        write!(f, "{}", self.severity)?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for Diagnostic {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_defaults() {
        let diag = Diagnostic::warning("pollutant entry skipped");

        assert!(diag.severity().is_warning());
        assert!(diag.code().is_none());
        assert!(diag.labels().is_empty());
        assert!(diag.help().is_none());
    }

    #[test]
    fn test_builder_chain() {
        let diag = Diagnostic::warning("pollutant entry outside a pollutant list")
            .with_code(ErrorCode::E003)
            .with_label(Span::new(20..40), "ignored")
            .with_secondary_label(Span::new(0..12), "process starts here")
            .with_help("add `- **污染物**` before the entries");

        assert_eq!(diag.code(), Some(ErrorCode::E003));
        assert_eq!(diag.labels().len(), 2);
        assert!(diag.labels()[0].is_primary());
        assert!(diag.labels()[1].is_secondary());
        assert_eq!(diag.help(), Some("add `- **污染物**` before the entries"));
    }

    #[test]
    fn test_display() {
        let with_code = Diagnostic::warning("unknown category `X`").with_code(ErrorCode::E101);
        assert_eq!(with_code.to_string(), "warning[E101]: unknown category `X`");

        let without_code = Diagnostic::warning("pollutant list header outside a process");
        assert_eq!(
            without_code.to_string(),
            "warning: pollutant list header outside a process"
        );
    }
}
