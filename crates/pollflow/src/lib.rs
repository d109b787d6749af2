//! Pollflow - process and pollutant flow diagrams from markdown.
//!
//! Parsing, layout, rendering and export for process-flow descriptions
//! written in a small markdown template: one `### ` heading per process
//! step, an optional description bullet, and a pollutant list whose entries
//! are coded `G`/`W`/`S`/`N` by category.

pub mod config;
pub mod export;
pub mod layout;
pub mod render;

mod error;

pub use pollflow_core::{color, draw, geometry, model, pollutant};
pub use pollflow_parser::{ParseOutput, error::Diagnostic};

pub use error::PollflowError;

use std::io::Write;

use log::{debug, info, trace};

use pollflow_core::{draw::Scene, model::ProcessNode};

use config::AppConfig;
use export::{
    Exporter,
    png::Png,
    svg::{Svg, SvgBuilder},
};
use layout::{FlowLayout, LayoutOptimizer};
use render::{FlowRenderer, RenderStyle};

/// Output formats supported by [`FlowBuilder::export`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Png,
}

/// Builder for parsing and rendering Pollflow diagrams.
///
/// This provides an API for processing flow descriptions through parsing,
/// layout, rendering and export stages. Every call works on fresh state, so
/// one builder can serve any number of independent documents.
///
/// # Examples
///
/// ```rust
/// use pollflow::{FlowBuilder, config::AppConfig};
///
/// let source = "### 1. 下料\n- **工艺流程描述**：切割管材。\n- **污染物**\n  - **S1**: 金属边角料\n";
///
/// let builder = FlowBuilder::new(AppConfig::default());
///
/// // Parse source to process nodes
/// let parsed = builder.parse(source).expect("Failed to parse");
/// assert_eq!(parsed.nodes()[0].title(), "下料");
///
/// // Render process nodes to SVG
/// let svg = builder.render_svg(parsed.nodes()).expect("Failed to render");
/// assert!(svg.contains("下料"));
/// ```
#[derive(Debug, Default)]
pub struct FlowBuilder {
    config: AppConfig,
}

impl FlowBuilder {
    /// Create a new flow builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this builder renders with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Check markdown content before parsing.
    ///
    /// # Errors
    ///
    /// Returns [`PollflowError::Input`] if the content is blank or longer
    /// than the configured maximum number of characters.
    pub fn validate_input(&self, source: &str) -> Result<(), PollflowError> {
        if source.trim().is_empty() {
            return Err(PollflowError::Input("content is empty".to_string()));
        }

        let max = self.config.input().max_content_length();
        let length = source.chars().count();
        if length > max {
            return Err(PollflowError::Input(format!(
                "content is {length} characters long, the maximum is {max}"
            )));
        }
        Ok(())
    }

    /// Parse markdown into process nodes.
    ///
    /// Parsing itself never fails. Lines that do not fit their context are
    /// skipped and reported as warnings in [`ParseOutput::diagnostics`].
    ///
    /// # Errors
    ///
    /// Returns [`PollflowError::Input`] if the content fails
    /// [`validate_input`](Self::validate_input), or
    /// [`PollflowError::EmptyFlow`] if no process step was found.
    pub fn parse(&self, source: &str) -> Result<ParseOutput, PollflowError> {
        info!("Parsing process flow");
        self.validate_input(source)?;

        let output = pollflow_parser::parse(source);
        if output.is_empty() {
            let (_, diagnostics) = output.into_parts();
            return Err(PollflowError::new_empty_flow(diagnostics, source));
        }

        debug!(
            node_count = output.nodes().len(),
            warning_count = output.diagnostics().len();
            "Process flow parsed successfully"
        );
        trace!(nodes:? = output.nodes(); "Parsed process nodes");
        Ok(output)
    }

    /// Compute positions for `nodes`.
    pub fn layout(&self, nodes: &[ProcessNode]) -> FlowLayout {
        let layout = LayoutOptimizer::new(self.config.layout()).optimize(nodes);
        info!(
            width = layout.dimensions().width(),
            height = layout.dimensions().height(),
            suggested_scale = layout.optimal_scale();
            "Layout calculated"
        );
        layout
    }

    /// Lay out and render `nodes` into a scene of drawing primitives.
    ///
    /// # Errors
    ///
    /// Returns [`PollflowError::Config`] if a configured color or dash
    /// pattern is malformed, or [`PollflowError::Render`] if the layout
    /// misses an element.
    pub fn render_scene(&self, nodes: &[ProcessNode]) -> Result<Scene, PollflowError> {
        let style = RenderStyle::from_config(&self.config).map_err(PollflowError::Config)?;
        let layout = self.layout(nodes);
        let scene = FlowRenderer::new(self.config.layout(), &style).render(nodes, &layout)?;
        Ok(scene)
    }

    /// Render `nodes` to an SVG string.
    ///
    /// # Errors
    ///
    /// See [`render_scene`](Self::render_scene).
    pub fn render_svg(&self, nodes: &[ProcessNode]) -> Result<String, PollflowError> {
        let mut out = Vec::new();
        self.export(nodes, OutputFormat::Svg, &mut out)?;
        let svg = String::from_utf8(out)
            .map_err(|err| PollflowError::Export(Box::new(err)))?;
        info!("SVG rendered successfully");
        Ok(svg)
    }

    /// Render `nodes` to PNG bytes at the configured raster scale.
    ///
    /// # Errors
    ///
    /// See [`render_scene`](Self::render_scene); additionally returns
    /// [`PollflowError::Export`] if rasterization fails.
    pub fn render_png(&self, nodes: &[ProcessNode]) -> Result<Vec<u8>, PollflowError> {
        let mut out = Vec::new();
        self.export(nodes, OutputFormat::Png, &mut out)?;
        info!(bytes = out.len(); "PNG rendered successfully");
        Ok(out)
    }

    /// Render `nodes` in `format` and write the result to `out`.
    ///
    /// # Errors
    ///
    /// See [`render_scene`](Self::render_scene); additionally returns
    /// [`PollflowError::Export`] if encoding or writing fails.
    pub fn export(
        &self,
        nodes: &[ProcessNode],
        format: OutputFormat,
        out: &mut dyn Write,
    ) -> Result<(), PollflowError> {
        let scene = self.render_scene(nodes)?;
        let svg = self.svg_exporter()?;
        let exporter: Box<dyn Exporter> = match format {
            OutputFormat::Svg => Box::new(svg),
            OutputFormat::Png => Box::new(Png::new(svg, self.config.export().raster_scale())),
        };
        info!(format:?; "Exporting scene");
        exporter.export_scene(&scene, out)?;
        Ok(())
    }

    fn svg_exporter(&self) -> Result<Svg, PollflowError> {
        let style = self.config.style();
        let background = style.background_color().map_err(PollflowError::Config)?;
        let arrow_color = style.connector_color().map_err(PollflowError::Config)?;
        Ok(SvgBuilder::new()
            .with_background(background)
            .with_font_family(style.font_family())
            .with_arrow(arrow_color, self.config.layout().arrow_size())
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use config::InputConfig;

    fn builder_with_limit(max: usize) -> FlowBuilder {
        FlowBuilder::new(AppConfig::new(
            Default::default(),
            Default::default(),
            Default::default(),
            InputConfig::new(max),
        ))
    }

    #[test]
    fn test_validate_rejects_blank_input() {
        let builder = FlowBuilder::default();
        assert!(matches!(
            builder.validate_input(" \n\t"),
            Err(PollflowError::Input(_))
        ));
    }

    #[test]
    fn test_validate_counts_characters_not_bytes() {
        let builder = builder_with_limit(4);
        assert!(builder.validate_input("下料工序").is_ok());
        assert!(matches!(
            builder.validate_input("下料工序。"),
            Err(PollflowError::Input(_))
        ));
    }

    #[test]
    fn test_parse_without_headers_is_empty_flow() {
        let err = FlowBuilder::default()
            .parse("- **污染物**\n  - **G1**: 粉尘\n")
            .unwrap_err();
        let PollflowError::EmptyFlow { diagnostics, src } = &err else {
            panic!("expected EmptyFlow, got {err:?}");
        };
        assert!(!diagnostics.is_empty());
        assert!(src.contains("G1"));
        assert!(err.to_string().contains("cannot parse process flow"));
    }

    #[test]
    fn test_invalid_style_is_config_error() {
        let config: AppConfig = toml::from_str(
            r#"
            [style]
            process_fill = "definitely-not-a-color"
            "#,
        )
        .unwrap();
        let builder = FlowBuilder::new(config);
        let nodes = [ProcessNode::new(0, "下料")];
        let err = builder.render_scene(&nodes).unwrap_err();
        let PollflowError::Config(message) = &err else {
            panic!("expected Config error, got {err:?}");
        };
        assert!(message.contains("process_fill"));
    }

    #[test]
    fn test_png_uses_raster_scale() {
        let nodes = [ProcessNode::new(0, "下料")];
        let png = FlowBuilder::default().render_png(&nodes).unwrap();

        let width = u32::from_be_bytes([png[16], png[17], png[18], png[19]]);
        let height = u32::from_be_bytes([png[20], png[21], png[22], png[23]]);
        assert_eq!((width, height), (2400, 1600));
    }
}
