//! Stroke and line-style definitions.
//!
//! # Overview
//!
//! - [`StrokeDefinition`]: color, width and [`StrokeStyle`] of a line or border
//! - [`StrokeStyle`]: solid or a dash pattern
//! - [`apply_stroke!`](crate::apply_stroke!): applies a definition to an SVG element
//!
//! # SVG Attribute Mapping
//!
//! | Rust Property | SVG Attribute | Example Values |
//! |--------------|---------------|----------------|
//! | `color` | `stroke`, `stroke-opacity` | `"#666666"`, `1` |
//! | `width` | `stroke-width` | `2.0` |
//! | `style` | `stroke-dasharray` | `"5,5"` |

use std::str::FromStr;

use crate::color::Color;

/// Defines the visual style of a stroke, including dash patterns.
///
/// # SVG Mapping
///
/// - `Solid`: No dasharray attribute
/// - `Dashed`: "5,5"
/// - `Dotted`: "2,3"
/// - `Custom(pattern)`: Uses the provided pattern string
#[derive(Debug, Default, Clone, PartialEq)]
pub enum StrokeStyle {
    /// Solid continuous line (default)
    #[default]
    Solid,
    /// Dashed line with equal dash and gap lengths (5px dash, 5px gap)
    Dashed,
    /// Dotted line with small dots (2px dot, 3px gap)
    Dotted,
    /// Custom SVG dasharray pattern, e.g. "10,5"
    Custom(String),
}

impl FromStr for StrokeStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Err("empty stroke style".to_string()),
            "solid" => Ok(Self::Solid),
            "dashed" | "5,5" => Ok(Self::Dashed),
            "dotted" | "2,3" => Ok(Self::Dotted),
            // Any other value is treated as a custom dasharray pattern
            pattern => Ok(Self::Custom(pattern.to_string())),
        }
    }
}

impl StrokeStyle {
    /// Returns the SVG dasharray value for this style, or None for solid lines
    pub fn to_svg_value(&self) -> Option<String> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some("5,5".to_string()),
            Self::Dotted => Some("2,3".to_string()),
            Self::Custom(pattern) => Some(pattern.clone()),
        }
    }

    /// Returns `true` for every style except [`StrokeStyle::Solid`].
    pub fn is_dashed(&self) -> bool {
        !matches!(self, Self::Solid)
    }
}

/// A stroke definition for rendering lines and borders.
///
/// # Examples
///
/// ```
/// use pollflow_core::draw::{StrokeDefinition, StrokeStyle};
/// use pollflow_core::color::Color;
///
/// let stroke = StrokeDefinition::solid(Color::new("#7B1FA2").unwrap(), 2.0);
/// assert_eq!(*stroke.style(), StrokeStyle::Solid);
///
/// let stroke = StrokeDefinition::new(Color::new("#666666").unwrap(), 1.0)
///     .with_style(StrokeStyle::Dashed);
/// assert_eq!(stroke.style().to_svg_value().as_deref(), Some("5,5"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    style: StrokeStyle,
}

impl StrokeDefinition {
    /// Creates a new solid stroke with the given color and width.
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            style: StrokeStyle::Solid,
        }
    }

    /// Creates a solid stroke (convenience constructor).
    pub fn solid(color: Color, width: f32) -> Self {
        Self::new(color, width)
    }

    /// Returns the stroke with a different style (builder style).
    pub fn with_style(mut self, style: StrokeStyle) -> Self {
        self.style = style;
        self
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the stroke style.
    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self::new(Color::default(), 1.0)
    }
}

/// Apply all stroke attributes to an SVG element.
///
/// Sets color, opacity, width, and the dash pattern when the style is not solid.
///
/// # Examples
///
/// ```
/// use pollflow_core::draw::{StrokeDefinition, StrokeStyle};
/// use pollflow_core::color::Color;
/// use svg::node::element as svg_element;
///
/// let stroke = StrokeDefinition::new(Color::new("#666666").unwrap(), 1.0)
///     .with_style(StrokeStyle::Dashed);
/// let rect = svg_element::Rectangle::new()
///     .set("width", 100)
///     .set("height", 50);
///
/// let rect = pollflow_core::apply_stroke!(rect, &stroke);
/// assert!(rect.to_string().contains("stroke-dasharray=\"5,5\""));
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let mut elem = $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width());

        if let Some(dasharray) = $stroke.style().to_svg_value() {
            elem = elem.set("stroke-dasharray", dasharray);
        }

        elem
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_default() {
        let stroke = StrokeDefinition::default();
        assert_eq!(stroke.width(), 1.0);
        assert_eq!(stroke.color().to_string(), "black");
        assert_eq!(*stroke.style(), StrokeStyle::Solid);
    }

    #[test]
    fn test_stroke_constructors() {
        let color = Color::new("#666666").unwrap();
        assert_eq!(*StrokeDefinition::solid(color, 2.0).style(), StrokeStyle::Solid);
        let dashed = StrokeDefinition::new(color, 2.0).with_style(StrokeStyle::Dashed);
        assert_eq!(*dashed.style(), StrokeStyle::Dashed);
        assert_eq!(dashed.width(), 2.0);
    }

    #[test]
    fn test_stroke_style_svg_values() {
        assert_eq!(StrokeStyle::Solid.to_svg_value(), None);
        assert_eq!(StrokeStyle::Dashed.to_svg_value().as_deref(), Some("5,5"));
        assert_eq!(StrokeStyle::Dotted.to_svg_value().as_deref(), Some("2,3"));
        assert_eq!(
            StrokeStyle::Custom("8,4".to_string()).to_svg_value().as_deref(),
            Some("8,4")
        );
        assert!(!StrokeStyle::Solid.is_dashed());
        assert!(StrokeStyle::Custom("1,1".to_string()).is_dashed());
    }

    #[test]
    fn test_stroke_style_from_str() {
        assert_eq!(StrokeStyle::from_str("solid").unwrap(), StrokeStyle::Solid);
        assert_eq!(StrokeStyle::from_str("dashed").unwrap(), StrokeStyle::Dashed);
        assert_eq!(StrokeStyle::from_str("5,5").unwrap(), StrokeStyle::Dashed);
        assert_eq!(StrokeStyle::from_str(" dotted ").unwrap(), StrokeStyle::Dotted);
        assert_eq!(
            StrokeStyle::from_str("10,5,2,5").unwrap(),
            StrokeStyle::Custom("10,5,2,5".to_string())
        );
        assert!(StrokeStyle::from_str("  ").is_err());
    }

    #[test]
    fn test_apply_stroke_solid_has_no_dasharray() {
        let stroke = StrokeDefinition::solid(Color::new("#7B1FA2").unwrap(), 2.0);
        let rect = crate::apply_stroke!(svg::node::element::Rectangle::new(), &stroke);
        let markup = rect.to_string();
        assert!(markup.contains("stroke-width=\"2\""));
        assert!(!markup.contains("stroke-dasharray"));
    }
}
