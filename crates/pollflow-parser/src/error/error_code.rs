//! Error codes for parser advisories.
//!
//! Codes are organized by concern:
//! - `E0xx` - Document structure (a line appears where it cannot apply)
//! - `E1xx` - Pollutant label validation

use std::fmt;

/// Error codes for categorizing parser advisories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Structure (E0xx)
    // =========================================================================
    /// Description without a process.
    ///
    /// A `- **工艺流程描述**` line appeared before any `### ` process header.
    E001,

    /// Pollutant without a process.
    ///
    /// A pollutant entry appeared inside a pollutant list that does not
    /// belong to any process.
    E002,

    /// Pollutant outside a pollutant list.
    ///
    /// A line shaped like a pollutant entry appeared before the
    /// `- **污染物**` header of its process. It is ignored.
    E003,

    /// Malformed pollutant entry.
    ///
    /// The entry has a label but no pollutant text after the separator.
    E004,

    // =========================================================================
    // Label validation (E1xx)
    // =========================================================================
    /// Unknown pollutant category.
    ///
    /// The label does not start with one of `G`, `W`, `S` or `N`.
    E101,

    /// Invalid pollutant label.
    ///
    /// The label's category is known but the label breaks the category's
    /// digit rule, e.g. `G` without a number.
    E102,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E003 => "E003",
            ErrorCode::E004 => "E004",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "description without a process",
            ErrorCode::E002 => "pollutant without a process",
            ErrorCode::E003 => "pollutant outside a pollutant list",
            ErrorCode::E004 => "malformed pollutant entry",
            ErrorCode::E101 => "unknown pollutant category",
            ErrorCode::E102 => "invalid pollutant label",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
