//! Error adapter for converting PollflowError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.
//!
//! # Multi-Diagnostic Support
//!
//! Parser advisories are rendered one report each, with the offending line
//! of the markdown source shown as a snippet. They appear both as warnings
//! on successful runs and after the main message of
//! [`PollflowError::EmptyFlow`].

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, Severity as MietteSeverity, SourceSpan};

use pollflow::PollflowError;
use pollflow_parser::error::{Diagnostic, Severity};

/// Adapter for a single parser diagnostic.
pub struct DiagnosticAdapter<'a> {
    diag: &'a Diagnostic,
    src: &'a str,
}

impl<'a> DiagnosticAdapter<'a> {
    /// Create a new diagnostic adapter.
    pub fn new(diag: &'a Diagnostic, src: &'a str) -> Self {
        Self { diag, src }
    }
}

impl fmt::Debug for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticAdapter")
            .field("diag", &self.diag)
            .finish()
    }
}

impl fmt::Display for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.diag.message())
    }
}

impl std::error::Error for DiagnosticAdapter<'_> {}

impl MietteDiagnostic for DiagnosticAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .code()
            .map(|c| Box::new(c) as Box<dyn fmt::Display>)
    }

    fn severity(&self) -> Option<MietteSeverity> {
        Some(match self.diag.severity() {
            Severity::Warning => MietteSeverity::Warning,
        })
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .help()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let labels = self.diag.labels();
        if labels.is_empty() {
            return None;
        }

        Some(Box::new(labels.iter().map(|label| {
            let span = span_to_miette(label.span());
            let message = Some(label.message().to_string());
            if label.is_primary() {
                LabeledSpan::new_primary_with_span(message, span)
            } else {
                LabeledSpan::new_with_span(message, span)
            }
        })))
    }
}

/// Adapter for [`PollflowError`] itself.
///
/// Errors carry no source location; the advisories behind an
/// [`PollflowError::EmptyFlow`] are reported separately through
/// [`DiagnosticAdapter`].
pub struct ErrorAdapter<'a>(pub &'a PollflowError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            PollflowError::Io(_) => "pollflow::io",
            PollflowError::Input(_) => "pollflow::input",
            PollflowError::EmptyFlow { .. } => "pollflow::empty_flow",
            PollflowError::Config(_) => "pollflow::config",
            PollflowError::Render(_) => "pollflow::render",
            PollflowError::Export(_) => "pollflow::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            PollflowError::EmptyFlow { .. } => Some(Box::new(
                "start every process step with a `### ` heading, e.g. `### 1. 下料`",
            )),
            _ => None,
        }
    }
}

/// A reportable error that can be rendered by miette.
///
/// This enum wraps either a single diagnostic or a non-diagnostic error,
/// providing a uniform interface for error rendering.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A rich diagnostic with source location information.
    Diagnostic(DiagnosticAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Diagnostic(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Diagnostic(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn severity(&self) -> Option<MietteSeverity> {
        match self {
            Reportable::Diagnostic(d) => d.severity(),
            Reportable::Error(e) => e.severity(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Diagnostic(d) => d.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Diagnostic(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a parser [`Span`](pollflow_parser::Span) to a miette [`SourceSpan`].
fn span_to_miette(span: pollflow_parser::Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}

/// Wrap parser advisories for rendering against `src`.
pub fn diagnostics_to_reportables<'a>(
    diagnostics: &'a [Diagnostic],
    src: &'a str,
) -> impl Iterator<Item = Reportable<'a>> {
    diagnostics
        .iter()
        .map(move |d| Reportable::Diagnostic(DiagnosticAdapter::new(d, src)))
}

/// Convert a [`PollflowError`] into a list of reportable errors.
///
/// The error itself always comes first. For [`PollflowError::EmptyFlow`] it
/// is followed by one [`Reportable`] per collected advisory.
pub fn to_reportables(err: &PollflowError) -> Vec<Reportable<'_>> {
    let mut reportables = vec![Reportable::Error(ErrorAdapter(err))];
    if let PollflowError::EmptyFlow { diagnostics, src } = err {
        reportables.extend(diagnostics_to_reportables(diagnostics, src));
    }
    reportables
}
