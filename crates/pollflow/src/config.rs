//! Configuration types for Pollflow diagram generation.
//!
//! All geometry constants, colors and export settings are plain values that
//! callers construct (or deserialize) once and pass into
//! [`FlowBuilder::new`](crate::FlowBuilder::new). Every type implements
//! [`serde::Deserialize`]; missing fields fall back to the defaults listed
//! on each field.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining all sections.
//! - [`LayoutConfig`] - Box sizes, spacing, font sizes and legend placement.
//! - [`StyleConfig`] - Colors and optional background.
//! - [`ExportConfig`] - Raster export settings.
//! - [`InputConfig`] - Limits applied to the markdown input.
//!
//! # Example
//!
//! ```
//! # use pollflow::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.layout().process_box_width(), 160.0);
//! assert_eq!(config.export().raster_scale(), 2.0);
//! assert!(config.style().background_color().is_ok());
//! ```

use serde::Deserialize;

use pollflow_core::{color::Color, draw::StrokeStyle, geometry::Size};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    layout: LayoutConfig,

    #[serde(default)]
    style: StyleConfig,

    #[serde(default)]
    export: ExportConfig,

    #[serde(default)]
    input: InputConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(
        layout: LayoutConfig,
        style: StyleConfig,
        export: ExportConfig,
        input: InputConfig,
    ) -> Self {
        Self {
            layout,
            style,
            export,
            input,
        }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the export configuration.
    pub fn export(&self) -> &ExportConfig {
        &self.export
    }

    /// Returns the input configuration.
    pub fn input(&self) -> &InputConfig {
        &self.input
    }
}

/// Geometry constants of the diagram.
///
/// Nothing in the layout is derived from text metrics; every size below is
/// used as-is.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Minimum canvas width. Default `1200`.
    canvas_min_width: f32,
    /// Minimum canvas height. Default `800`.
    canvas_min_height: f32,
    /// Padding around the content and top offset of the first box. Default `50`.
    canvas_padding: f32,

    /// Process box width. Default `160`.
    process_box_width: f32,
    /// Process box height. Default `60`.
    process_box_height: f32,
    /// Vertical gap between consecutive process boxes. Default `60`.
    process_vertical_spacing: f32,
    /// Default `5`.
    process_corner_radius: f32,

    /// Pollutant box width. Default `20`.
    pollutant_box_width: f32,
    /// Pollutant box height. Default `20`.
    pollutant_box_height: f32,
    /// Horizontal gap between pollutant boxes of one group. Default `5`.
    pollutant_spacing: f32,
    /// Default `3`.
    pollutant_corner_radius: f32,

    /// Padding between a group container and its pollutant boxes. Default `10`.
    group_inner_padding: f32,
    /// Gap between a process box and its pollutant groups. Default `60`.
    group_outer_gap: f32,
    /// Default `3`.
    group_corner_radius: f32,
    /// Dash pattern of group containers. Default `"5,5"`.
    group_dash_pattern: String,

    /// Connector stroke width. Default `2`.
    connector_stroke_width: f32,
    /// Arrowhead marker size. Default `6`.
    arrow_size: f32,
    /// Dash pattern of pollutant connectors. Default `"5,5"`.
    connector_dash_pattern: String,

    /// Default `16`.
    process_font_size: f32,
    /// Default `12`.
    pollutant_font_size: f32,
    /// Default `20`.
    legend_title_font_size: f32,

    /// Horizontal space reserved right of the content for the legend. Default `230`.
    legend_reserved_width: f32,
    /// Legend x offset from the padded right content bound. Default `80`.
    legend_offset_x: f32,
    /// Upward shift of the legend from the last process box bottom. Default `120`.
    legend_offset_y: f32,
    /// Default `150`.
    legend_width: f32,
    /// Padding between the legend background and its content. Default `20`.
    legend_padding: f32,
    /// Vertical distance between legend entries. Default `30`.
    legend_item_spacing: f32,
    /// Default `8`.
    legend_corner_radius: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas_min_width: 1200.0,
            canvas_min_height: 800.0,
            canvas_padding: 50.0,
            process_box_width: 160.0,
            process_box_height: 60.0,
            process_vertical_spacing: 60.0,
            process_corner_radius: 5.0,
            pollutant_box_width: 20.0,
            pollutant_box_height: 20.0,
            pollutant_spacing: 5.0,
            pollutant_corner_radius: 3.0,
            group_inner_padding: 10.0,
            group_outer_gap: 60.0,
            group_corner_radius: 3.0,
            group_dash_pattern: "5,5".to_string(),
            connector_stroke_width: 2.0,
            arrow_size: 6.0,
            connector_dash_pattern: "5,5".to_string(),
            process_font_size: 16.0,
            pollutant_font_size: 12.0,
            legend_title_font_size: 20.0,
            legend_reserved_width: 230.0,
            legend_offset_x: 80.0,
            legend_offset_y: 120.0,
            legend_width: 150.0,
            legend_padding: 20.0,
            legend_item_spacing: 30.0,
            legend_corner_radius: 8.0,
        }
    }
}

impl LayoutConfig {
    pub fn canvas_min_size(&self) -> Size {
        Size::new(self.canvas_min_width, self.canvas_min_height)
    }

    pub fn canvas_padding(&self) -> f32 {
        self.canvas_padding
    }

    pub fn process_box_size(&self) -> Size {
        Size::new(self.process_box_width, self.process_box_height)
    }

    pub fn process_box_width(&self) -> f32 {
        self.process_box_width
    }

    pub fn process_box_height(&self) -> f32 {
        self.process_box_height
    }

    pub fn process_vertical_spacing(&self) -> f32 {
        self.process_vertical_spacing
    }

    pub fn process_corner_radius(&self) -> f32 {
        self.process_corner_radius
    }

    pub fn pollutant_box_size(&self) -> Size {
        Size::new(self.pollutant_box_width, self.pollutant_box_height)
    }

    pub fn pollutant_spacing(&self) -> f32 {
        self.pollutant_spacing
    }

    pub fn pollutant_corner_radius(&self) -> f32 {
        self.pollutant_corner_radius
    }

    pub fn group_inner_padding(&self) -> f32 {
        self.group_inner_padding
    }

    pub fn group_outer_gap(&self) -> f32 {
        self.group_outer_gap
    }

    pub fn group_corner_radius(&self) -> f32 {
        self.group_corner_radius
    }

    /// Returns the parsed dash style of group containers.
    pub fn group_dash_style(&self) -> Result<StrokeStyle, String> {
        self.group_dash_pattern
            .parse()
            .map_err(|err| format!("Invalid group dash pattern in config: {err}"))
    }

    pub fn connector_stroke_width(&self) -> f32 {
        self.connector_stroke_width
    }

    pub fn arrow_size(&self) -> f32 {
        self.arrow_size
    }

    /// Returns the parsed dash style of pollutant connectors.
    pub fn connector_dash_style(&self) -> Result<StrokeStyle, String> {
        self.connector_dash_pattern
            .parse()
            .map_err(|err| format!("Invalid connector dash pattern in config: {err}"))
    }

    pub fn process_font_size(&self) -> f32 {
        self.process_font_size
    }

    pub fn pollutant_font_size(&self) -> f32 {
        self.pollutant_font_size
    }

    pub fn legend_title_font_size(&self) -> f32 {
        self.legend_title_font_size
    }

    pub fn legend_reserved_width(&self) -> f32 {
        self.legend_reserved_width
    }

    pub fn legend_offset_x(&self) -> f32 {
        self.legend_offset_x
    }

    pub fn legend_offset_y(&self) -> f32 {
        self.legend_offset_y
    }

    pub fn legend_width(&self) -> f32 {
        self.legend_width
    }

    pub fn legend_padding(&self) -> f32 {
        self.legend_padding
    }

    pub fn legend_item_spacing(&self) -> f32 {
        self.legend_item_spacing
    }

    pub fn legend_corner_radius(&self) -> f32 {
        self.legend_corner_radius
    }

    /// Width of a pollutant group container holding `count` boxes.
    ///
    /// An empty side has no group and therefore no width.
    ///
    /// ```
    /// # use pollflow::config::LayoutConfig;
    /// let layout = LayoutConfig::default();
    /// assert_eq!(layout.group_width(0), 0.0);
    /// assert_eq!(layout.group_width(1), 40.0);
    /// assert_eq!(layout.group_width(3), 90.0);
    /// ```
    pub fn group_width(&self, count: usize) -> f32 {
        if count == 0 {
            return 0.0;
        }
        let count = count as f32;
        count * self.pollutant_box_width
            + (count - 1.0) * self.pollutant_spacing
            + 2.0 * self.group_inner_padding
    }

    /// Height of every pollutant group container.
    pub fn group_height(&self) -> f32 {
        self.pollutant_box_height + 2.0 * self.group_inner_padding
    }
}

/// Visual styling configuration for rendered diagrams.
///
/// Colors are CSS color strings, validated when a diagram is rendered.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Optional canvas background color. Default: none (transparent).
    background_color: Option<String>,
    /// Optional font family set on the document root.
    font_family: Option<String>,
    /// Default `#F3E5F5`.
    process_fill: String,
    /// Default `#7B1FA2`.
    process_stroke: String,
    /// Color of connectors and arrowheads. Default `#666666`.
    connector_color: String,
    /// Outline color of pollutant group containers. Default `#666666`.
    group_stroke: String,
    /// Default `white`.
    legend_background: String,
    /// Default `#E5E7EB`.
    legend_border: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: None,
            font_family: None,
            process_fill: "#F3E5F5".to_string(),
            process_stroke: "#7B1FA2".to_string(),
            connector_color: "#666666".to_string(),
            group_stroke: "#666666".to_string(),
            legend_background: "white".to_string(),
            legend_border: "#E5E7EB".to_string(),
        }
    }
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    pub fn font_family(&self) -> Option<&str> {
        self.font_family.as_deref()
    }

    pub fn process_fill(&self) -> Result<Color, String> {
        parse_color("process_fill", &self.process_fill)
    }

    pub fn process_stroke(&self) -> Result<Color, String> {
        parse_color("process_stroke", &self.process_stroke)
    }

    pub fn connector_color(&self) -> Result<Color, String> {
        parse_color("connector_color", &self.connector_color)
    }

    pub fn group_stroke(&self) -> Result<Color, String> {
        parse_color("group_stroke", &self.group_stroke)
    }

    pub fn legend_background(&self) -> Result<Color, String> {
        parse_color("legend_background", &self.legend_background)
    }

    pub fn legend_border(&self) -> Result<Color, String> {
        parse_color("legend_border", &self.legend_border)
    }
}

fn parse_color(field: &str, value: &str) -> Result<Color, String> {
    Color::new(value).map_err(|err| format!("Invalid {field} in config: {err}"))
}

/// Export settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Scale factor applied when rasterizing to PNG. Default `2.0`.
    raster_scale: f32,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { raster_scale: 2.0 }
    }
}

impl ExportConfig {
    pub fn new(raster_scale: f32) -> Self {
        Self { raster_scale }
    }

    pub fn raster_scale(&self) -> f32 {
        self.raster_scale
    }
}

/// Limits applied to markdown input before parsing.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Maximum accepted input length in characters. Default `50000`.
    max_content_length: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_content_length: 50_000,
        }
    }
}

impl InputConfig {
    pub fn new(max_content_length: usize) -> Self {
        Self { max_content_length }
    }

    pub fn max_content_length(&self) -> usize {
        self.max_content_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style_colors_are_valid() {
        let style = StyleConfig::default();
        assert!(style.process_fill().is_ok());
        assert!(style.process_stroke().is_ok());
        assert!(style.connector_color().is_ok());
        assert!(style.group_stroke().is_ok());
        assert!(style.legend_background().is_ok());
        assert!(style.legend_border().is_ok());
        assert_eq!(style.background_color(), Ok(None));
    }

    #[test]
    fn test_dash_patterns_parse() {
        let layout = LayoutConfig::default();
        assert_eq!(layout.group_dash_style(), Ok(StrokeStyle::Dashed));
        assert_eq!(layout.connector_dash_style(), Ok(StrokeStyle::Dashed));
    }

    #[test]
    fn test_group_geometry() {
        let layout = LayoutConfig::default();
        assert_eq!(layout.group_width(2), 65.0);
        assert_eq!(layout.group_height(), 40.0);
    }

    #[test]
    fn test_invalid_color_is_reported_with_field_name() {
        let err = parse_color("process_fill", "nope").unwrap_err();
        assert!(err.contains("process_fill"));
    }
}
