//! Severity levels for diagnostics.

use std::fmt;

/// The severity level of a diagnostic.
///
/// The flow parser never fails, so every diagnostic it reports is a
/// [`Severity::Warning`]: the line was skipped and parsing continued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// A non-fatal advisory. Parsing continued past it.
    Warning,
}

impl Severity {
    /// Returns `true` if this is a warning severity.
    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
        }
    }
}
