//! Turns a laid-out flow into a [`Scene`] of drawing primitives.
//!
//! The renderer draws back to front:
//!
//! 1. curved connectors between consecutive process boxes,
//! 2. the process boxes with their titles,
//! 3. each pollutant group followed by the dashed connector that links it to
//!    its process box,
//! 4. the [`legend`].
//!
//! Every element the renderer references must have a position in the
//! [`FlowLayout`]; a missing one aborts rendering with
//! [`RenderError::MissingPosition`].

mod flow;
pub mod legend;

pub use flow::FlowRenderer;

use thiserror::Error;

use pollflow_core::{color::Color, draw::StrokeStyle};

use crate::{config::AppConfig, layout::LayoutId};

/// Errors raised while building a scene.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The layout has no position for an element the node list refers to.
    #[error("no layout position for `{0}`")]
    MissingPosition(LayoutId),
}

/// Colors and dash styles resolved from configuration.
///
/// Resolving happens once up front, so that malformed colors are reported as
/// configuration errors before anything is drawn.
#[derive(Debug, Clone)]
pub struct RenderStyle {
    pub(crate) process_fill: Color,
    pub(crate) process_stroke: Color,
    pub(crate) connector_color: Color,
    pub(crate) group_stroke: Color,
    pub(crate) legend_background: Color,
    pub(crate) legend_border: Color,
    pub(crate) group_dash: StrokeStyle,
    pub(crate) connector_dash: StrokeStyle,
}

impl RenderStyle {
    /// Resolves the style section and dash patterns of `config`.
    ///
    /// # Errors
    ///
    /// Returns a message naming the first field that fails to parse.
    pub fn from_config(config: &AppConfig) -> Result<Self, String> {
        let style = config.style();
        Ok(Self {
            process_fill: style.process_fill()?,
            process_stroke: style.process_stroke()?,
            connector_color: style.connector_color()?,
            group_stroke: style.group_stroke()?,
            legend_background: style.legend_background()?,
            legend_border: style.legend_border()?,
            group_dash: config.layout().group_dash_style()?,
            connector_dash: config.layout().connector_dash_style()?,
        })
    }
}
