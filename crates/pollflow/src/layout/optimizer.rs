//! Positions process boxes and their pollutant groups.

use indexmap::IndexMap;
use log::{debug, trace};

use pollflow_core::{
    geometry::{Bounds, Point, Size},
    model::ProcessNode,
    pollutant::Side,
};

use super::{FlowLayout, LayoutId, PaddedBounds, tracker::CoordinateTracker};
use crate::config::LayoutConfig;

/// Computes a [`FlowLayout`] for a sequence of process nodes.
///
/// Every call to [`optimize`](Self::optimize) starts from a fresh
/// [`CoordinateTracker`], so one optimizer can be reused across flows.
#[derive(Debug, Clone)]
pub struct LayoutOptimizer<'a> {
    config: &'a LayoutConfig,
}

impl<'a> LayoutOptimizer<'a> {
    pub fn new(config: &'a LayoutConfig) -> Self {
        Self { config }
    }

    /// Lays out `nodes` top to bottom in a single centered column.
    ///
    /// The column is centered on a provisional canvas wide enough for the
    /// widest pollutant group on both sides. Each process box is placed
    /// `process_box_height + process_vertical_spacing` below the previous
    /// one, with its left-side pollutants in a group to the left and its
    /// right-side pollutants in a group to the right. A side with no
    /// pollutants gets no group.
    pub fn optimize(&self, nodes: &[ProcessNode]) -> FlowLayout {
        let config = self.config;
        let box_size = config.process_box_size();
        let padding = config.canvas_padding();
        let min_size = config.canvas_min_size();

        let max_per_side = nodes
            .iter()
            .flat_map(|node| Side::ALL.map(|side| node.pollutants_on(side).count()))
            .max()
            .unwrap_or(0);
        let initial_width = min_size.width().max(
            box_size.width()
                + 2.0 * config.group_width(max_per_side)
                + 2.0 * config.group_outer_gap()
                + 2.0 * padding,
        );
        let center_x = initial_width / 2.0;
        let box_x = center_x - box_size.width() / 2.0;

        let mut tracker = CoordinateTracker::new();
        let mut positions = IndexMap::new();

        let mut y = padding;
        for node in nodes {
            trace!(node_id:% = node.id(), y; "Placing process box");
            positions.insert(LayoutId::Process(node.id().clone()), Point::new(box_x, y));
            tracker.track_process_box(node.id(), center_x, y, box_size.width(), box_size.height());

            for side in Side::ALL {
                self.place_group(node, side, Point::new(box_x, y), &mut tracker, &mut positions);
            }

            y += box_size.height() + config.process_vertical_spacing();
        }

        let canvas = tracker.canvas_bounds();
        let content = if canvas.is_finite() {
            canvas
        } else {
            Bounds::new(center_x, center_x, padding, padding)
        };
        let bounds = PaddedBounds::new(
            content.left() - padding,
            content.right() + padding,
            content.bottom() + padding,
        );

        // The legend sits right of the padded content, so the canvas must
        // reach past it even when the content does not start at the left edge.
        // The last term covers a wide right-only group pushing `right` past
        // `width - reserved` while the left side stays near the column.
        let reserved = config.legend_reserved_width();
        let width = min_size
            .width()
            .max(bounds.right() - bounds.left() + reserved)
            .max(bounds.right() + reserved);
        let height = min_size
            .height()
            .max(bounds.bottom() - content.top() + padding);

        debug!(
            node_count = nodes.len(),
            max_per_side,
            width,
            height;
            "Computed flow layout"
        );

        FlowLayout::new(
            positions,
            Size::new(width, height),
            bounds,
            tracker.into_process_coordinates(),
            padding,
        )
    }

    /// Places the group of `node`'s pollutants on `side` next to the box at `box_origin`.
    fn place_group(
        &self,
        node: &ProcessNode,
        side: Side,
        box_origin: Point,
        tracker: &mut CoordinateTracker,
        positions: &mut IndexMap<LayoutId, Point>,
    ) {
        let config = self.config;
        let pollutants: Vec<_> = node.pollutants_on(side).collect();
        if pollutants.is_empty() {
            return;
        }

        let box_size = config.process_box_size();
        let pollutant_size = config.pollutant_box_size();
        let group_size = Size::new(config.group_width(pollutants.len()), config.group_height());

        let start_x = match side {
            Side::Left => box_origin.x() - config.group_outer_gap() - group_size.width(),
            Side::Right => box_origin.x() + box_size.width() + config.group_outer_gap(),
        };
        let group_origin = Point::new(
            start_x,
            box_origin.y() + (box_size.height() - group_size.height()) / 2.0,
        );
        positions.insert(LayoutId::Group(node.id().clone(), side), group_origin);
        tracker.track_pollutant_box(node.id(), group_origin.to_bounds(group_size));

        let pollutant_y = box_origin.y() + (box_size.height() - pollutant_size.height()) / 2.0;
        let step = pollutant_size.width() + config.pollutant_spacing();
        for (i, pollutant) in pollutants.into_iter().enumerate() {
            let origin = Point::new(
                start_x + config.group_inner_padding() + i as f32 * step,
                pollutant_y,
            );
            positions.insert(
                LayoutId::Pollutant(node.id().clone(), pollutant.id().clone()),
                origin,
            );
            tracker.track_pollutant_box(node.id(), origin.to_bounds(pollutant_size));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use float_cmp::assert_approx_eq;
    use proptest::prelude::*;

    use pollflow_core::pollutant::PollutantCategory;

    use crate::layout::ScaleCalculator;

    fn cutting_node() -> ProcessNode {
        let mut node = ProcessNode::new(0, "下料");
        node.set_description("切割管材。");
        node.push_pollutant(PollutantCategory::SolidWaste, "S1", "金属边角料");
        node.push_pollutant(PollutantCategory::Noise, "N", "设备噪声");
        node
    }

    fn node_with(index: usize, left: usize, right: usize) -> ProcessNode {
        let mut node = ProcessNode::new(index, format!("工序{index}"));
        for i in 0..left {
            node.push_pollutant(PollutantCategory::Gas, format!("G{}", i + 1), "废气");
        }
        for i in 0..right {
            node.push_pollutant(PollutantCategory::SolidWaste, format!("S{}", i + 1), "固废");
        }
        node
    }

    #[test]
    fn test_single_node_positions() {
        let config = LayoutConfig::default();
        let node = cutting_node();
        let layout = LayoutOptimizer::new(&config).optimize(std::slice::from_ref(&node));
        let id = node.id().clone();

        assert_eq!(
            layout.position(&LayoutId::Process(id.clone())),
            Some(Point::new(520.0, 50.0))
        );
        assert_eq!(
            layout.position(&LayoutId::Group(id.clone(), Side::Right)),
            Some(Point::new(740.0, 60.0))
        );
        assert_eq!(layout.position(&LayoutId::Group(id.clone(), Side::Left)), None);

        let pollutant_xs: Vec<f32> = node
            .pollutants()
            .iter()
            .map(|p| {
                let position = layout
                    .position(&LayoutId::Pollutant(id.clone(), p.id().clone()))
                    .unwrap();
                assert_eq!(position.y(), 70.0);
                position.x()
            })
            .collect();
        assert_eq!(pollutant_xs, [750.0, 775.0]);
    }

    #[test]
    fn test_single_node_bounds_and_dimensions() {
        let config = LayoutConfig::default();
        let layout = LayoutOptimizer::new(&config).optimize(&[cutting_node()]);

        let bounds = layout.bounds();
        assert_eq!(bounds.left(), 470.0);
        assert_eq!(bounds.right(), 855.0);
        assert_eq!(bounds.bottom(), 160.0);
        assert_eq!(layout.dimensions(), Size::new(1200.0, 800.0));
    }

    #[test]
    fn test_no_left_pollutants_means_no_left_bounds() {
        let config = LayoutConfig::default();
        let layout = LayoutOptimizer::new(&config).optimize(&[cutting_node()]);

        let coords = &layout.process_coordinates()[0];
        assert_eq!(coords.bounds().left(), 520.0);
        assert!(coords.children().is_empty());
        assert!(
            !layout
                .positions()
                .keys()
                .any(|key| matches!(key, LayoutId::Group(_, Side::Left)))
        );
    }

    #[test]
    fn test_left_group_ends_outer_gap_before_box() {
        let config = LayoutConfig::default();
        let node = node_with(0, 3, 0);
        let layout = LayoutOptimizer::new(&config).optimize(std::slice::from_ref(&node));

        // Group width for 3 boxes is 90; box x is 520.
        let group = layout
            .position(&LayoutId::Group(node.id().clone(), Side::Left))
            .unwrap();
        assert_eq!(group.x(), 520.0 - 60.0 - 90.0);
        assert_eq!(layout.process_coordinates()[0].bounds().left(), 370.0);
    }

    #[test]
    fn test_wide_groups_widen_canvas() {
        let config = LayoutConfig::default();
        let layout = LayoutOptimizer::new(&config).optimize(&[node_with(0, 17, 17)]);

        // Group width 440, provisional width 1260, content spans 50..1210.
        assert_approx_eq!(f32, layout.bounds().left(), 0.0);
        assert_approx_eq!(f32, layout.bounds().right(), 1260.0);
        assert_approx_eq!(f32, layout.dimensions().width(), 1490.0);
    }

    #[test]
    fn test_right_only_group_keeps_legend_on_canvas() {
        let config = LayoutConfig::default();
        let layout = LayoutOptimizer::new(&config).optimize(&[node_with(0, 0, 17)]);

        // Box at 550, right group 770..1210, no left group: padded span is only 760.
        assert_approx_eq!(f32, layout.bounds().left(), 500.0);
        assert_approx_eq!(f32, layout.bounds().right(), 1260.0);
        assert_approx_eq!(f32, layout.dimensions().width(), 1490.0);
    }

    #[test]
    fn test_empty_flow_uses_minimum_canvas() {
        let config = LayoutConfig::default();
        let layout = LayoutOptimizer::new(&config).optimize(&[]);

        assert!(layout.positions().is_empty());
        assert!(layout.process_coordinates().is_empty());
        assert_eq!(layout.dimensions(), config.canvas_min_size());
        assert_eq!(layout.optimal_scale(), 1.0);
    }

    #[test]
    fn test_optimal_scale_uses_configured_padding() {
        let config: LayoutConfig = toml::from_str("canvas_padding = 200.0").unwrap();
        let layout = LayoutOptimizer::new(&config).optimize(&[cutting_node()]);

        // Content 520..805 x 200..260 padded by 200 is 685 x 460 on a 1235 x 800 canvas.
        assert_eq!(layout.dimensions(), Size::new(1235.0, 800.0));
        let (width, height) = (layout.dimensions().width(), layout.dimensions().height());
        assert_approx_eq!(f32, layout.optimal_scale(), 600.0 / 460.0 * 1.2, epsilon = 1e-4);
        assert_approx_eq!(
            f32,
            layout.optimal_scale(),
            ScaleCalculator::new(200.0).calculate(layout.process_coordinates(), width, height)
        );
        assert_eq!(
            ScaleCalculator::default().calculate(layout.process_coordinates(), width, height),
            2.0
        );
    }

    #[test]
    fn test_tall_flow_grows_canvas_height() {
        let config = LayoutConfig::default();
        let nodes: Vec<_> = (0..8).map(|i| node_with(i, 0, 0)).collect();
        let layout = LayoutOptimizer::new(&config).optimize(&nodes);

        // Last box bottom: 50 + 7 * 120 + 60 = 950.
        assert_eq!(layout.bounds().bottom(), 1000.0);
        assert_eq!(layout.dimensions().height(), 1000.0);
    }

    proptest! {
        #[test]
        fn boxes_step_down_and_canvas_respects_minimum(
            counts in prop::collection::vec((0usize..6, 0usize..6), 1..12)
        ) {
            let config = LayoutConfig::default();
            let nodes: Vec<_> = counts
                .iter()
                .enumerate()
                .map(|(i, (left, right))| node_with(i, *left, *right))
                .collect();
            let layout = LayoutOptimizer::new(&config).optimize(&nodes);

            let step = config.process_box_height() + config.process_vertical_spacing();
            for pair in nodes.windows(2) {
                let above = layout.position(&LayoutId::Process(pair[0].id().clone())).unwrap();
                let below = layout.position(&LayoutId::Process(pair[1].id().clone())).unwrap();
                prop_assert_eq!(below.x(), above.x());
                prop_assert!((below.y() - above.y() - step).abs() < 1e-3);
            }

            let dimensions = layout.dimensions();
            prop_assert!(dimensions.width() >= config.canvas_min_size().width());
            prop_assert!(dimensions.height() >= config.canvas_min_size().height());
            prop_assert!(layout.bounds().right() + config.legend_reserved_width() <= dimensions.width());

            for ((left, _), node) in counts.iter().zip(&nodes) {
                let has_left = layout
                    .position(&LayoutId::Group(node.id().clone(), Side::Left))
                    .is_some();
                prop_assert_eq!(has_left, *left > 0);
            }
        }
    }
}
