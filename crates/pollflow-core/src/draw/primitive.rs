//! Typed drawing primitives.
//!
//! The renderer never builds markup directly. It accumulates a [`Scene`] of
//! [`Primitive`]s which an exporter later serializes, so layout and drawing
//! logic can be tested by asserting on primitives instead of SVG text.

use std::fmt;

use crate::{
    color::Color,
    draw::StrokeDefinition,
    geometry::{Bounds, Point, Size},
    pollutant::{PollutantCategory, Side},
};

/// Font weight of a text primitive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    /// Returns the CSS `font-weight` value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Bold => "bold",
        }
    }
}

/// Horizontal anchoring of a text primitive relative to its position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl TextAnchor {
    /// Returns the SVG `text-anchor` value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// Font settings of a text primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    font_size: f32,
    weight: FontWeight,
    anchor: TextAnchor,
    middle_baseline: bool,
}

impl TextStyle {
    /// Creates a normal-weight, start-anchored style of the given font size.
    pub fn new(font_size: f32) -> Self {
        Self {
            font_size,
            weight: FontWeight::Normal,
            anchor: TextAnchor::Start,
            middle_baseline: false,
        }
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Vertically centers the text on its position (`dominant-baseline: middle`).
    pub fn with_middle_baseline(mut self) -> Self {
        self.middle_baseline = true;
        self
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn weight(&self) -> FontWeight {
        self.weight
    }

    pub fn anchor(&self) -> TextAnchor {
        self.anchor
    }

    pub fn middle_baseline(&self) -> bool {
        self.middle_baseline
    }
}

/// A rounded rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct RectPrimitive {
    bounds: Bounds,
    corner_radius: f32,
    fill: Option<Color>,
    stroke: Option<StrokeDefinition>,
}

impl RectPrimitive {
    /// Creates an unfilled, unstroked rectangle covering `bounds`.
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            corner_radius: 0.0,
            fill: None,
            stroke: None,
        }
    }

    pub fn with_corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn with_stroke(mut self, stroke: StrokeDefinition) -> Self {
        self.stroke = Some(stroke);
        self
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    /// Returns the fill color; `None` means `fill="none"`.
    pub fn fill(&self) -> Option<Color> {
        self.fill
    }

    pub fn stroke(&self) -> Option<&StrokeDefinition> {
        self.stroke.as_ref()
    }
}

/// A single line of text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    position: Point,
    content: String,
    style: TextStyle,
}

impl TextPrimitive {
    pub fn new(position: Point, content: impl Into<String>, style: TextStyle) -> Self {
        Self {
            position,
            content: content.into(),
            style,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }
}

/// Geometry of a connector between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConnectorPath {
    /// A straight segment from `start` to `end`.
    Straight { start: Point, end: Point },
    /// A cubic curve leaving `start` vertically and entering `end` vertically,
    /// with both control points on the vertical midpoint between them.
    Curved { start: Point, end: Point },
}

impl ConnectorPath {
    pub fn start(&self) -> Point {
        match self {
            Self::Straight { start, .. } | Self::Curved { start, .. } => *start,
        }
    }

    pub fn end(&self) -> Point {
        match self {
            Self::Straight { end, .. } | Self::Curved { end, .. } => *end,
        }
    }

    /// Returns the SVG path data.
    ///
    /// ```
    /// # use pollflow_core::draw::ConnectorPath;
    /// # use pollflow_core::geometry::Point;
    /// let path = ConnectorPath::Curved {
    ///     start: Point::new(600.0, 110.0),
    ///     end: Point::new(600.0, 170.0),
    /// };
    /// assert_eq!(path.path_data(), "M 600 110 C 600 140, 600 140, 600 170");
    /// ```
    pub fn path_data(&self) -> String {
        match self {
            Self::Straight { start, end } => {
                format!("M {} {} L {} {}", start.x(), start.y(), end.x(), end.y())
            }
            Self::Curved { start, end } => {
                let mid_y = (start.y() + end.y()) / 2.0;
                format!(
                    "M {} {} C {} {}, {} {}, {} {}",
                    start.x(),
                    start.y(),
                    start.x(),
                    mid_y,
                    end.x(),
                    mid_y,
                    end.x(),
                    end.y()
                )
            }
        }
    }
}

/// A stroked connector path, optionally ending in an arrowhead.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectorPrimitive {
    path: ConnectorPath,
    stroke: StrokeDefinition,
    arrowhead: bool,
}

impl ConnectorPrimitive {
    pub fn new(path: ConnectorPath, stroke: StrokeDefinition) -> Self {
        Self {
            path,
            stroke,
            arrowhead: false,
        }
    }

    pub fn with_arrowhead(mut self) -> Self {
        self.arrowhead = true;
        self
    }

    pub fn path(&self) -> &ConnectorPath {
        &self.path
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    pub fn arrowhead(&self) -> bool {
        self.arrowhead
    }
}

/// What a [`GroupPrimitive`] represents in the diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupRole {
    ProcessBox,
    PollutantGroup(Side),
    PollutantBox(PollutantCategory),
    Legend,
    LegendItem(PollutantCategory),
}

impl GroupRole {
    /// Returns the CSS class emitted for this role.
    pub fn class_name(self) -> String {
        match self {
            Self::ProcessBox => "process-box".to_string(),
            Self::PollutantGroup(side) => format!("pollutant-group {side}"),
            Self::PollutantBox(category) => format!("pollutant-box {category}"),
            Self::Legend => "legend".to_string(),
            Self::LegendItem(category) => format!("legend-item {category}"),
        }
    }
}

impl fmt::Display for GroupRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.class_name())
    }
}

/// A role-tagged group of child primitives.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupPrimitive {
    role: GroupRole,
    id: Option<String>,
    children: Vec<Primitive>,
}

impl GroupPrimitive {
    pub fn new(role: GroupRole) -> Self {
        Self {
            role,
            id: None,
            children: Vec::new(),
        }
    }

    /// Tags the group with the id of the model element it draws.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn push(&mut self, primitive: impl Into<Primitive>) {
        self.children.push(primitive.into());
    }

    pub fn role(&self) -> GroupRole {
        self.role
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn children(&self) -> &[Primitive] {
        &self.children
    }
}

/// One drawable item of a [`Scene`].
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Rect(RectPrimitive),
    Text(TextPrimitive),
    Connector(ConnectorPrimitive),
    Group(GroupPrimitive),
}

impl From<RectPrimitive> for Primitive {
    fn from(rect: RectPrimitive) -> Self {
        Self::Rect(rect)
    }
}

impl From<TextPrimitive> for Primitive {
    fn from(text: TextPrimitive) -> Self {
        Self::Text(text)
    }
}

impl From<ConnectorPrimitive> for Primitive {
    fn from(connector: ConnectorPrimitive) -> Self {
        Self::Connector(connector)
    }
}

impl From<GroupPrimitive> for Primitive {
    fn from(group: GroupPrimitive) -> Self {
        Self::Group(group)
    }
}

/// A complete diagram: canvas size plus primitives in back-to-front order.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    size: Size,
    primitives: Vec<Primitive>,
}

impl Scene {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            primitives: Vec::new(),
        }
    }

    pub fn push(&mut self, primitive: impl Into<Primitive>) {
        self.primitives.push(primitive.into());
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Returns every group in the scene, nested ones included, in draw order.
    pub fn groups(&self) -> Vec<&GroupPrimitive> {
        fn collect<'a>(primitives: &'a [Primitive], out: &mut Vec<&'a GroupPrimitive>) {
            for primitive in primitives {
                if let Primitive::Group(group) = primitive {
                    out.push(group);
                    collect(group.children(), out);
                }
            }
        }

        let mut out = Vec::new();
        collect(&self.primitives, &mut out);
        out
    }

    /// Returns the top-level connectors in draw order.
    pub fn connectors(&self) -> impl Iterator<Item = &ConnectorPrimitive> {
        self.primitives.iter().filter_map(|primitive| match primitive {
            Primitive::Connector(connector) => Some(connector),
            _ => None,
        })
    }

    /// Counts the groups for which `predicate` holds.
    pub fn count_groups(&self, predicate: impl Fn(GroupRole) -> bool) -> usize {
        self.groups()
            .into_iter()
            .filter(|group| predicate(group.role()))
            .count()
    }
}
