//! SVG export backend.

use std::io::Write;

use log::debug;
use svg::node::element as svg_element;

use pollflow_core::{
    apply_stroke,
    color::Color,
    draw::{ConnectorPrimitive, GroupPrimitive, Primitive, RectPrimitive, Scene, TextPrimitive},
};

use super::{Error, Exporter};

/// Id of the arrowhead marker referenced by connectors.
pub const ARROW_MARKER_ID: &str = "arrow";

/// Builder for [`Svg`] exporters.
#[derive(Debug, Clone, Default)]
pub struct SvgBuilder {
    background: Option<Color>,
    font_family: Option<String>,
    arrow_color: Color,
    arrow_size: f32,
}

impl SvgBuilder {
    pub fn new() -> Self {
        Self {
            arrow_size: 6.0,
            ..Self::default()
        }
    }

    /// Fills the whole canvas with `color` before drawing.
    pub fn with_background(mut self, color: Option<Color>) -> Self {
        self.background = color;
        self
    }

    /// Sets a font family on the document root.
    pub fn with_font_family(mut self, family: Option<&str>) -> Self {
        self.font_family = family.map(str::to_string);
        self
    }

    /// Sets the color and size of the arrowhead marker.
    pub fn with_arrow(mut self, color: Color, size: f32) -> Self {
        self.arrow_color = color;
        self.arrow_size = size;
        self
    }

    pub fn build(self) -> Svg {
        Svg {
            background: self.background,
            font_family: self.font_family,
            arrow_color: self.arrow_color,
            arrow_size: self.arrow_size,
        }
    }
}

/// Serializes scenes into SVG documents.
#[derive(Debug, Clone)]
pub struct Svg {
    background: Option<Color>,
    font_family: Option<String>,
    arrow_color: Color,
    arrow_size: f32,
}

impl Svg {
    /// Builds the SVG document for `scene`.
    ///
    /// The document declares the scene size as `width`, `height` and
    /// `viewBox`, defines the arrowhead marker, and contains one element per
    /// primitive in scene order.
    pub fn render_scene(&self, scene: &Scene) -> svg::Document {
        let size = scene.size();
        let mut doc = svg::Document::new()
            .set("viewBox", format!("0 0 {} {}", size.width(), size.height()))
            .set("width", size.width())
            .set("height", size.height());
        if let Some(family) = &self.font_family {
            doc = doc.set("font-family", family.as_str());
        }

        doc = doc.add(self.marker_definitions());

        if let Some(color) = self.background {
            doc = doc.add(
                svg_element::Rectangle::new()
                    .set("x", 0)
                    .set("y", 0)
                    .set("width", size.width())
                    .set("height", size.height())
                    .set("fill", color.to_string())
                    .set("fill-opacity", color.alpha()),
            );
        }

        for primitive in scene.primitives() {
            doc = doc.add(render_primitive(primitive));
        }

        debug!(
            primitive_count = scene.primitives().len(),
            width = size.width(),
            height = size.height();
            "Serialized scene to SVG"
        );
        doc
    }

    fn marker_definitions(&self) -> svg_element::Definitions {
        let marker = svg_element::Marker::new()
            .set("id", ARROW_MARKER_ID)
            .set("viewBox", "0 0 10 10")
            .set("refX", 9)
            .set("refY", 5)
            .set("markerWidth", self.arrow_size)
            .set("markerHeight", self.arrow_size)
            .set("orient", "auto")
            .add(
                svg_element::Path::new()
                    .set("d", "M 0 0 L 10 5 L 0 10 z")
                    .set("fill", self.arrow_color.to_string())
                    .set("fill-opacity", self.arrow_color.alpha()),
            );
        svg_element::Definitions::new().add(marker)
    }
}

impl Exporter for Svg {
    fn export_scene(&self, scene: &Scene, out: &mut dyn Write) -> Result<(), Error> {
        let document = self.render_scene(scene);
        svg::write(out, &document)?;
        Ok(())
    }
}

fn render_primitive(primitive: &Primitive) -> Box<dyn svg::Node> {
    match primitive {
        Primitive::Rect(rect) => Box::new(render_rect(rect)),
        Primitive::Text(text) => Box::new(render_text(text)),
        Primitive::Connector(connector) => Box::new(render_connector(connector)),
        Primitive::Group(group) => Box::new(render_group(group)),
    }
}

fn render_rect(rect: &RectPrimitive) -> svg_element::Rectangle {
    let bounds = rect.bounds();
    let mut elem = svg_element::Rectangle::new()
        .set("x", bounds.left())
        .set("y", bounds.top())
        .set("width", bounds.width())
        .set("height", bounds.height());
    if rect.corner_radius() > 0.0 {
        elem = elem.set("rx", rect.corner_radius());
    }
    elem = match rect.fill() {
        Some(fill) => elem
            .set("fill", fill.to_string())
            .set("fill-opacity", fill.alpha()),
        None => elem.set("fill", "none"),
    };
    match rect.stroke() {
        Some(stroke) => apply_stroke!(elem, stroke),
        None => elem,
    }
}

fn render_text(text: &TextPrimitive) -> svg_element::Text {
    let style = text.style();
    let position = text.position();
    let mut elem = svg_element::Text::new(text.content())
        .set("x", position.x())
        .set("y", position.y())
        .set("font-size", style.font_size())
        .set("font-weight", style.weight().as_str())
        .set("text-anchor", style.anchor().as_str());
    if style.middle_baseline() {
        elem = elem.set("dominant-baseline", "middle");
    }
    elem
}

fn render_connector(connector: &ConnectorPrimitive) -> svg_element::Path {
    let elem = svg_element::Path::new()
        .set("d", connector.path().path_data())
        .set("fill", "none");
    let elem = apply_stroke!(elem, connector.stroke());
    if connector.arrowhead() {
        elem.set("marker-end", format!("url(#{ARROW_MARKER_ID})"))
    } else {
        elem
    }
}

fn render_group(group: &GroupPrimitive) -> svg_element::Group {
    let mut elem = svg_element::Group::new().set("class", group.role().class_name());
    if let Some(id) = group.id() {
        elem = elem.set("id", id);
    }
    for child in group.children() {
        elem = elem.add(render_primitive(child));
    }
    elem
}
