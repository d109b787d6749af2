//! Accumulates the bounds of every drawn element during layout.

use indexmap::IndexMap;
use log::debug;

use pollflow_core::{
    geometry::{Bounds, Size},
    model::NodeId,
};

/// Horizontal center and extent of one process box and everything tracked
/// against it.
///
/// `bounds` starts as the process box itself and grows as pollutant boxes
/// and group containers are tracked for the same process. `children` holds
/// processes that run in parallel with this one; the flow layout never
/// produces them, but the scale calculator accounts for them.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessCoordinates {
    id: NodeId,
    center_x: f32,
    bounds: Bounds,
    children: Vec<ProcessCoordinates>,
}

impl ProcessCoordinates {
    pub fn new(id: NodeId, center_x: f32, bounds: Bounds) -> Self {
        Self {
            id,
            center_x,
            bounds,
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn center_x(&self) -> f32 {
        self.center_x
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn children(&self) -> &[ProcessCoordinates] {
        &self.children
    }

    /// Adds a parallel process below this one.
    pub fn push_child(&mut self, child: ProcessCoordinates) {
        self.children.push(child);
    }

    /// Number of processes in this subtree, this one included.
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(ProcessCoordinates::node_count)
            .sum::<usize>()
    }

    /// Union of this process's bounds and all of its descendants'.
    pub fn total_bounds(&self) -> Bounds {
        self.children
            .iter()
            .fold(self.bounds, |acc, child| acc.merge(&child.total_bounds()))
    }
}

/// Records process boxes and the pollutant elements attached to them, and
/// keeps the union of everything seen so far as the canvas bounds.
///
/// Canvas bounds start at [`Bounds::EMPTY`] and only ever grow.
#[derive(Debug, Default)]
pub struct CoordinateTracker {
    processes: IndexMap<NodeId, ProcessCoordinates>,
    canvas: Bounds,
}

impl CoordinateTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a process box horizontally centered on `center_x`.
    ///
    /// Tracking the same id twice replaces its coordinates but leaves the
    /// canvas bounds as they were, since they never shrink.
    pub fn track_process_box(&mut self, id: &NodeId, center_x: f32, y: f32, width: f32, height: f32) {
        let bounds = Bounds::new_from_center_x(center_x, y, Size::new(width, height));
        self.processes.insert(
            id.clone(),
            ProcessCoordinates::new(id.clone(), center_x, bounds),
        );
        self.canvas = self.canvas.merge(&bounds);
    }

    /// Grows the bounds of process `process_id` and the canvas by `bounds`.
    ///
    /// Unknown process ids are ignored.
    pub fn track_pollutant_box(&mut self, process_id: &NodeId, bounds: Bounds) {
        let Some(process) = self.processes.get_mut(process_id) else {
            debug!(process_id:% = process_id; "Ignoring pollutant box for untracked process");
            return;
        };
        process.bounds = process.bounds.merge(&bounds);
        self.canvas = self.canvas.merge(&bounds);
    }

    /// Attaches `child` as a parallel process of `parent_id`.
    ///
    /// Unknown parent ids are ignored.
    pub fn track_parallel_process(&mut self, parent_id: &NodeId, child: ProcessCoordinates) {
        let Some(parent) = self.processes.get_mut(parent_id) else {
            debug!(parent_id:% = parent_id; "Ignoring parallel process for untracked parent");
            return;
        };
        self.canvas = self.canvas.merge(&child.total_bounds());
        parent.push_child(child);
    }

    /// Returns the union of everything tracked so far.
    pub fn canvas_bounds(&self) -> Bounds {
        self.canvas
    }

    pub fn process_coordinates(&self, id: &NodeId) -> Option<&ProcessCoordinates> {
        self.processes.get(id)
    }

    /// Returns all tracked processes in insertion order.
    pub fn all_process_coordinates(&self) -> impl Iterator<Item = &ProcessCoordinates> {
        self.processes.values()
    }

    /// Consumes the tracker, returning its processes in insertion order.
    pub fn into_process_coordinates(self) -> Vec<ProcessCoordinates> {
        self.processes.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pollflow_core::geometry::Point;

    fn id(index: usize) -> NodeId {
        NodeId::from_index(index)
    }

    #[test]
    fn test_new_tracker_has_empty_bounds() {
        let tracker = CoordinateTracker::new();
        assert_eq!(tracker.canvas_bounds(), Bounds::EMPTY);
        assert!(!tracker.canvas_bounds().is_finite());
        assert_eq!(tracker.all_process_coordinates().count(), 0);
    }

    #[test]
    fn test_track_process_box_centers_horizontally() {
        let mut tracker = CoordinateTracker::new();
        tracker.track_process_box(&id(0), 600.0, 50.0, 160.0, 60.0);

        let coords = tracker.process_coordinates(&id(0)).unwrap();
        assert_eq!(coords.center_x(), 600.0);
        assert_eq!(coords.bounds(), Bounds::new(520.0, 680.0, 50.0, 110.0));
        assert_eq!(tracker.canvas_bounds(), coords.bounds());
    }

    #[test]
    fn test_track_pollutant_box_grows_process_and_canvas() {
        let mut tracker = CoordinateTracker::new();
        tracker.track_process_box(&id(0), 600.0, 50.0, 160.0, 60.0);
        let pollutant = Bounds::new_from_top_left(Point::new(750.0, 70.0), Size::new(20.0, 20.0));
        tracker.track_pollutant_box(&id(0), pollutant);

        let coords = tracker.process_coordinates(&id(0)).unwrap();
        assert_eq!(coords.bounds().right(), 770.0);
        assert_eq!(coords.bounds().left(), 520.0);
        assert_eq!(tracker.canvas_bounds().right(), 770.0);
    }

    #[test]
    fn test_track_pollutant_box_for_unknown_process_is_noop() {
        let mut tracker = CoordinateTracker::new();
        tracker.track_process_box(&id(0), 600.0, 50.0, 160.0, 60.0);
        let before = tracker.canvas_bounds();

        tracker.track_pollutant_box(&id(7), Bounds::new(0.0, 5000.0, 0.0, 5000.0));

        assert_eq!(tracker.canvas_bounds(), before);
        assert!(tracker.process_coordinates(&id(7)).is_none());
    }

    #[test]
    fn test_canvas_bounds_never_shrink() {
        let mut tracker = CoordinateTracker::new();
        tracker.track_process_box(&id(0), 600.0, 50.0, 160.0, 60.0);
        tracker.track_process_box(&id(1), 100.0, 170.0, 20.0, 20.0);

        let canvas = tracker.canvas_bounds();
        assert_eq!(canvas.left(), 90.0);
        assert_eq!(canvas.right(), 680.0);
        assert_eq!(canvas.top(), 50.0);
        assert_eq!(canvas.bottom(), 190.0);
    }

    #[test]
    fn test_processes_keep_insertion_order() {
        let mut tracker = CoordinateTracker::new();
        for index in [2, 0, 1] {
            tracker.track_process_box(&id(index), 600.0, 50.0, 160.0, 60.0);
        }
        let ids: Vec<_> = tracker
            .into_process_coordinates()
            .into_iter()
            .map(|coords| coords.id().to_string())
            .collect();
        assert_eq!(ids, ["process-3", "process-1", "process-2"]);
    }

    #[test]
    fn test_parallel_process_counts_and_bounds() {
        let mut tracker = CoordinateTracker::new();
        tracker.track_process_box(&id(0), 600.0, 50.0, 160.0, 60.0);
        let child = ProcessCoordinates::new(
            id(1),
            900.0,
            Bounds::new_from_center_x(900.0, 50.0, Size::new(160.0, 60.0)),
        );
        tracker.track_parallel_process(&id(0), child);

        let parent = tracker.process_coordinates(&id(0)).unwrap();
        assert_eq!(parent.node_count(), 2);
        assert_eq!(parent.total_bounds().right(), 980.0);
        assert_eq!(parent.bounds().right(), 680.0);
        assert_eq!(tracker.canvas_bounds().right(), 980.0);
    }
}
