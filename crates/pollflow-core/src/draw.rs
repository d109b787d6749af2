//! Drawing definitions for Pollflow diagrams.
//!
//! The renderer never writes markup directly. It produces a [`Scene`]: an
//! ordered list of typed [`Primitive`]s (rectangles, text, connectors and
//! role-tagged groups) that an exporter later serializes. Strokes are
//! described once with [`StrokeDefinition`] and applied to SVG elements with
//! [`apply_stroke!`](crate::apply_stroke!).

mod primitive;
mod stroke;

pub use primitive::{
    ConnectorPath, ConnectorPrimitive, FontWeight, GroupPrimitive, GroupRole, Primitive,
    RectPrimitive, Scene, TextAnchor, TextPrimitive, TextStyle,
};
pub use stroke::{StrokeDefinition, StrokeStyle};
