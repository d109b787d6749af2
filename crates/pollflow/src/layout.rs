//! Layout of process flows.
//!
//! Process boxes are stacked in a single centered column; each process's
//! pollutants are split by [`Side`] into a group on the left and a group on
//! the right of its box. The [`LayoutOptimizer`] produces a [`FlowLayout`]
//! holding the top-left position of every drawn element, the canvas size and
//! the padded content bounds the legend is anchored to.

mod optimizer;
mod scale;
mod tracker;

pub use optimizer::LayoutOptimizer;
pub use scale::{MAX_SCALE, MIN_SCALE, NEUTRAL_SCALE, ScaleCalculator, calculate_optimal_scale};
pub use tracker::{CoordinateTracker, ProcessCoordinates};

use std::fmt;

use indexmap::IndexMap;

use pollflow_core::{
    geometry::{Point, Size},
    model::{NodeId, PollutantId},
    pollutant::Side,
};

/// Key of a positioned element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LayoutId {
    /// A process box.
    Process(NodeId),
    /// The container of a process's pollutants on one side.
    Group(NodeId, Side),
    /// A single pollutant box.
    Pollutant(NodeId, PollutantId),
}

impl fmt::Display for LayoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Process(node) => write!(f, "{node}"),
            Self::Group(node, side) => write!(f, "{node}-{side}"),
            Self::Pollutant(node, pollutant) => write!(f, "{node}-{pollutant}"),
        }
    }
}

/// Content bounds expanded by the canvas padding.
///
/// There is no top edge: content always starts at the canvas padding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddedBounds {
    left: f32,
    right: f32,
    bottom: f32,
}

impl PaddedBounds {
    pub fn new(left: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            right,
            bottom,
        }
    }

    pub fn left(self) -> f32 {
        self.left
    }

    pub fn right(self) -> f32 {
        self.right
    }

    pub fn bottom(self) -> f32 {
        self.bottom
    }
}

/// Result of laying out a process flow.
#[derive(Debug, Clone)]
pub struct FlowLayout {
    positions: IndexMap<LayoutId, Point>,
    dimensions: Size,
    bounds: PaddedBounds,
    processes: Vec<ProcessCoordinates>,
    padding: f32,
}

impl FlowLayout {
    pub(crate) fn new(
        positions: IndexMap<LayoutId, Point>,
        dimensions: Size,
        bounds: PaddedBounds,
        processes: Vec<ProcessCoordinates>,
        padding: f32,
    ) -> Self {
        Self {
            positions,
            dimensions,
            bounds,
            processes,
            padding,
        }
    }

    /// Top-left positions of every element, in layout order.
    pub fn positions(&self) -> &IndexMap<LayoutId, Point> {
        &self.positions
    }

    /// Returns the top-left position of one element.
    pub fn position(&self, id: &LayoutId) -> Option<Point> {
        self.positions.get(id).copied()
    }

    /// Returns the canvas size.
    pub fn dimensions(&self) -> Size {
        self.dimensions
    }

    /// Returns the padded content bounds.
    pub fn bounds(&self) -> PaddedBounds {
        self.bounds
    }

    /// Returns the tracked coordinates of every process, in flow order.
    pub fn process_coordinates(&self) -> &[ProcessCoordinates] {
        &self.processes
    }

    /// Suggested viewer zoom for showing this layout on its own canvas.
    ///
    /// The content is padded by the same canvas padding the layout used.
    pub fn optimal_scale(&self) -> f32 {
        ScaleCalculator::new(self.padding).calculate(
            &self.processes,
            self.dimensions.width(),
            self.dimensions.height(),
        )
    }
}
