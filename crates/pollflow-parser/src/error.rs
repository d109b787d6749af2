//! Advisories reported while parsing.
//!
//! The flow parser never fails. Lines it cannot use are skipped, and each
//! skip that might surprise the author is reported as a [`Diagnostic`] with
//! [`Severity::Warning`], an [`ErrorCode`] and a label pointing at the line.
//!
//! # Example
//!
//! ```
//! # use pollflow_parser::error::{Diagnostic, ErrorCode};
//! # use pollflow_parser::Span;
//!
//! let diag = Diagnostic::warning("invalid pollutant label `G`")
//!     .with_code(ErrorCode::E102)
//!     .with_label(Span::new(40..52), "entry skipped")
//!     .with_help("gas labels need at least one digit, e.g. `G1`");
//! assert_eq!(diag.to_string(), "warning[E102]: invalid pollutant label `G`");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod severity;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use severity::Severity;
