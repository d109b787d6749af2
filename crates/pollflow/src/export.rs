//! Export functionality for Pollflow diagrams.
//!
//! This module provides the [`Exporter`] trait that defines the interface for
//! serializing a rendered [`Scene`] into an output format. It is the final
//! stage in the Pollflow processing pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! Markdown
//!     ↓ parse
//! Process nodes
//!     ↓ layout
//! FlowLayout
//!     ↓ render
//! Scene
//!     ↓ export (this module)
//! Output bytes
//! ```
//!
//! # Available Backends
//!
//! - [`svg`] - SVG output via [`svg::SvgBuilder`] and [`svg::Svg`]
//! - [`png`] - PNG output rasterized from the SVG backend with `resvg`
//!
//! # Error Handling
//!
//! Export operations return [`Error`], covering rendering failures and I/O
//! errors. [`Error`] converts into [`PollflowError::Export`] at the crate
//! boundary.
//!
//! [`PollflowError::Export`]: crate::PollflowError::Export

pub mod png;
pub mod svg;

use std::io::Write;

use pollflow_core::draw::Scene;

/// Abstraction for diagram export backends.
///
/// Implementors convert a [`Scene`] into a specific output format and write
/// it to `out`.
pub trait Exporter {
    /// Exports a scene to the backend's output format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the scene cannot be converted to the
    /// target format, or [`Error::Io`] if writing the output fails.
    fn export_scene(&self, scene: &Scene, out: &mut dyn Write) -> Result<(), Error>;
}

/// Errors that can occur during diagram export.
#[derive(Debug)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    Render(String),
    /// An I/O error encountered while writing output.
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
