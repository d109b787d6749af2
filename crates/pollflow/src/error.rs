//! Error types for Pollflow operations.
//!
//! This module provides the main error type [`PollflowError`] which wraps
//! the error conditions that can occur between reading markdown and writing
//! a diagram. Parsing itself never fails; it only produces advisory
//! [`Diagnostic`]s, which travel inside [`PollflowError::EmptyFlow`] when no
//! process could be recovered at all.

use std::io;

use thiserror::Error;

use pollflow_parser::error::Diagnostic;

use crate::render::RenderError;

/// The main error type for Pollflow operations.
#[derive(Debug, Error)]
pub enum PollflowError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input was rejected before parsing (empty or too long).
    #[error("Input error: {0}")]
    Input(String),

    /// Parsing produced no process nodes.
    ///
    /// `diagnostics` holds the advisories collected while scanning, which
    /// usually explain why nothing was recognized.
    #[error("无法解析工艺流程，请检查内容格式 / cannot parse process flow, check content format")]
    EmptyFlow {
        diagnostics: Vec<Diagnostic>,
        src: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),
}

impl From<crate::export::Error> for PollflowError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl PollflowError {
    /// Create a new `EmptyFlow` error with the associated source text.
    pub fn new_empty_flow(diagnostics: Vec<Diagnostic>, src: impl Into<String>) -> Self {
        Self::EmptyFlow {
            diagnostics,
            src: src.into(),
        }
    }
}
