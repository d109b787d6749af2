//! Suggested zoom factor for viewing a laid-out flow.
//!
//! The factor fits the padded content into a viewport at 75% utilization,
//! nudges it up for very small flows and down for large ones, and clamps the
//! result to `[MIN_SCALE, MAX_SCALE]`.

use log::trace;

use pollflow_core::geometry::{Bounds, Insets};

use super::tracker::ProcessCoordinates;

/// Smallest scale ever suggested.
pub const MIN_SCALE: f32 = 0.5;
/// Largest scale ever suggested.
pub const MAX_SCALE: f32 = 2.0;
/// Scale returned when there is nothing sensible to fit.
pub const NEUTRAL_SCALE: f32 = 1.0;

const UTILIZATION: f32 = 0.75;
const SMALL_FLOW_MAX_NODES: usize = 3;
const SMALL_FLOW_FACTOR: f32 = 1.2;
const LARGE_FLOW_MIN_NODES: usize = 10;
const LARGE_FLOW_FACTOR: f32 = 0.8;
const DEFAULT_PADDING: f32 = 50.0;

/// Computes viewer scale factors from tracked process coordinates.
#[derive(Debug, Clone, Copy)]
pub struct ScaleCalculator {
    padding: f32,
}

impl Default for ScaleCalculator {
    fn default() -> Self {
        Self::new(DEFAULT_PADDING)
    }
}

impl ScaleCalculator {
    /// Creates a calculator that pads the content bounds by `padding` on every side.
    pub fn new(padding: f32) -> Self {
        Self { padding }
    }

    /// Returns the scale at which `processes` fit a `canvas_width` ×
    /// `canvas_height` viewport.
    ///
    /// Children of each process are included in both the bounds and the node
    /// count. Returns [`NEUTRAL_SCALE`] when there are no processes or the
    /// content or viewport has no positive finite area.
    pub fn calculate(
        &self,
        processes: &[ProcessCoordinates],
        canvas_width: f32,
        canvas_height: f32,
    ) -> f32 {
        let content = processes
            .iter()
            .fold(Bounds::EMPTY, |acc, process| acc.merge(&process.total_bounds()));
        if !content.is_finite() {
            return NEUTRAL_SCALE;
        }

        let padded = content.add_padding(Insets::uniform(self.padding));
        let (width, height) = (padded.width(), padded.height());
        if width <= 0.0 || height <= 0.0 {
            return NEUTRAL_SCALE;
        }
        if !(canvas_width.is_finite() && canvas_height.is_finite())
            || canvas_width <= 0.0
            || canvas_height <= 0.0
        {
            return NEUTRAL_SCALE;
        }

        let scale_x = canvas_width * UTILIZATION / width;
        let scale_y = canvas_height * UTILIZATION / height;
        let mut scale = scale_x.min(scale_y);

        let node_count: usize = processes.iter().map(ProcessCoordinates::node_count).sum();
        if node_count <= SMALL_FLOW_MAX_NODES {
            scale *= SMALL_FLOW_FACTOR;
        } else if node_count >= LARGE_FLOW_MIN_NODES {
            scale *= LARGE_FLOW_FACTOR;
        }

        let scale = scale.clamp(MIN_SCALE, MAX_SCALE);
        trace!(node_count, scale_x, scale_y, scale; "Calculated optimal scale");
        scale
    }
}

/// Returns the suggested scale using the default canvas padding.
///
/// # Examples
///
/// ```
/// # use pollflow::layout::{calculate_optimal_scale, ProcessCoordinates};
/// # use pollflow_core::{geometry::{Bounds, Size}, model::NodeId};
/// let process = ProcessCoordinates::new(
///     NodeId::from_index(0),
///     600.0,
///     Bounds::new_from_center_x(600.0, 50.0, Size::new(160.0, 60.0)),
/// );
/// // A single small box fits easily, so the result hits the upper clamp.
/// assert_eq!(calculate_optimal_scale(&[process], 1200.0, 800.0), 2.0);
/// assert_eq!(calculate_optimal_scale(&[], 1200.0, 800.0), 1.0);
/// ```
pub fn calculate_optimal_scale(
    processes: &[ProcessCoordinates],
    canvas_width: f32,
    canvas_height: f32,
) -> f32 {
    ScaleCalculator::default().calculate(processes, canvas_width, canvas_height)
}
