use log::{debug, trace};

use pollflow_core::{
    draw::{
        ConnectorPath, ConnectorPrimitive, FontWeight, GroupPrimitive, GroupRole, RectPrimitive,
        Scene, StrokeDefinition, TextAnchor, TextPrimitive, TextStyle,
    },
    geometry::{Point, Size},
    model::{Pollutant, ProcessNode},
    pollutant::Side,
};

use super::{RenderError, RenderStyle, legend};
use crate::{
    config::LayoutConfig,
    layout::{FlowLayout, LayoutId},
};

/// Builds the [`Scene`] for a process flow from its [`FlowLayout`].
#[derive(Debug, Clone, Copy)]
pub struct FlowRenderer<'a> {
    config: &'a LayoutConfig,
    style: &'a RenderStyle,
}

impl<'a> FlowRenderer<'a> {
    pub fn new(config: &'a LayoutConfig, style: &'a RenderStyle) -> Self {
        Self { config, style }
    }

    /// Renders `nodes` at the positions recorded in `layout`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::MissingPosition`] if `layout` lacks a process
    /// box, pollutant group or pollutant box that `nodes` refer to.
    pub fn render(&self, nodes: &[ProcessNode], layout: &FlowLayout) -> Result<Scene, RenderError> {
        let mut scene = Scene::new(layout.dimensions());

        let origins = nodes
            .iter()
            .map(|node| position(layout, LayoutId::Process(node.id().clone())))
            .collect::<Result<Vec<_>, _>>()?;

        for pair in origins.windows(2) {
            scene.push(self.process_connector(pair[0], pair[1]));
        }

        for (node, origin) in nodes.iter().zip(&origins) {
            scene.push(self.process_box(node, *origin));
        }

        for (node, origin) in nodes.iter().zip(&origins) {
            for side in Side::ALL {
                let pollutants: Vec<_> = node.pollutants_on(side).collect();
                if pollutants.is_empty() {
                    continue;
                }
                let group_origin = position(layout, LayoutId::Group(node.id().clone(), side))?;
                let (group, anchor) =
                    self.pollutant_group(node, side, &pollutants, group_origin, layout)?;
                scene.push(group);
                scene.push(self.pollutant_connector(*origin, side, anchor));
            }
        }

        let last_box_bottom = origins
            .last()
            .map(|origin| origin.y() + self.config.process_box_height())
            .unwrap_or_else(|| self.config.canvas_padding());
        scene.push(legend::build_legend(
            self.config,
            self.style,
            layout.bounds(),
            last_box_bottom,
        ));

        debug!(
            primitive_count = scene.primitives().len(),
            width = scene.size().width(),
            height = scene.size().height();
            "Rendered flow scene"
        );
        Ok(scene)
    }

    /// Curved connector from the bottom center of one box to the top center of the next.
    fn process_connector(&self, from: Point, to: Point) -> ConnectorPrimitive {
        let half_width = self.config.process_box_width() / 2.0;
        let start = Point::new(from.x() + half_width, from.y() + self.config.process_box_height());
        let end = Point::new(to.x() + half_width, to.y());
        ConnectorPrimitive::new(
            ConnectorPath::Curved { start, end },
            StrokeDefinition::solid(self.style.connector_color, self.config.connector_stroke_width()),
        )
        .with_arrowhead()
    }

    fn process_box(&self, node: &ProcessNode, origin: Point) -> GroupPrimitive {
        let size = self.config.process_box_size();
        let bounds = origin.to_bounds(size);

        let mut group = GroupPrimitive::new(GroupRole::ProcessBox).with_id(node.id().as_str());
        group.push(
            RectPrimitive::new(bounds)
                .with_corner_radius(self.config.process_corner_radius())
                .with_fill(self.style.process_fill)
                .with_stroke(StrokeDefinition::solid(self.style.process_stroke, 2.0)),
        );
        group.push(TextPrimitive::new(
            center_of(origin, size),
            node.title(),
            TextStyle::new(self.config.process_font_size())
                .with_weight(FontWeight::Bold)
                .with_anchor(TextAnchor::Middle)
                .with_middle_baseline(),
        ));
        group
    }

    /// Builds one pollutant group and returns it with the point its connector ends at.
    fn pollutant_group(
        &self,
        node: &ProcessNode,
        side: Side,
        pollutants: &[&Pollutant],
        origin: Point,
        layout: &FlowLayout,
    ) -> Result<(GroupPrimitive, Point), RenderError> {
        let size = Size::new(
            self.config.group_width(pollutants.len()),
            self.config.group_height(),
        );
        trace!(node_id:% = node.id(), side:%, count = pollutants.len(); "Rendering pollutant group");

        let mut group = GroupPrimitive::new(GroupRole::PollutantGroup(side))
            .with_id(LayoutId::Group(node.id().clone(), side).to_string());
        group.push(
            RectPrimitive::new(origin.to_bounds(size))
                .with_corner_radius(self.config.group_corner_radius())
                .with_stroke(
                    StrokeDefinition::new(self.style.group_stroke, 1.0)
                        .with_style(self.style.group_dash.clone()),
                ),
        );

        for pollutant in pollutants {
            let id = LayoutId::Pollutant(node.id().clone(), pollutant.id().clone());
            let box_origin = position(layout, id.clone())?;
            group.push(self.pollutant_box(pollutant, box_origin, id));
        }

        let anchor_y = origin.y() + size.height() / 2.0;
        let anchor = match side {
            Side::Left => Point::new(origin.x() + size.width(), anchor_y),
            Side::Right => Point::new(origin.x(), anchor_y),
        };
        Ok((group, anchor))
    }

    fn pollutant_box(&self, pollutant: &Pollutant, origin: Point, id: LayoutId) -> GroupPrimitive {
        let size = self.config.pollutant_box_size();
        let palette = pollutant.category().palette();

        let mut group =
            GroupPrimitive::new(GroupRole::PollutantBox(pollutant.category())).with_id(id.to_string());
        group.push(
            RectPrimitive::new(origin.to_bounds(size))
                .with_corner_radius(self.config.pollutant_corner_radius())
                .with_fill(palette.fill())
                .with_stroke(StrokeDefinition::solid(palette.stroke(), 1.0)),
        );
        group.push(TextPrimitive::new(
            center_of(origin, size),
            pollutant.label(),
            TextStyle::new(self.config.pollutant_font_size())
                .with_anchor(TextAnchor::Middle)
                .with_middle_baseline(),
        ));
        group
    }

    /// Dashed connector from the side midpoint of a process box to its group.
    fn pollutant_connector(&self, box_origin: Point, side: Side, anchor: Point) -> ConnectorPrimitive {
        let size = self.config.process_box_size();
        let y = box_origin.y() + size.height() / 2.0;
        let start = match side {
            Side::Left => Point::new(box_origin.x(), y),
            Side::Right => Point::new(box_origin.x() + size.width(), y),
        };
        ConnectorPrimitive::new(
            ConnectorPath::Straight { start, end: anchor },
            StrokeDefinition::new(self.style.connector_color, self.config.connector_stroke_width())
                .with_style(self.style.connector_dash.clone()),
        )
        .with_arrowhead()
    }
}

fn position(layout: &FlowLayout, id: LayoutId) -> Result<Point, RenderError> {
    layout
        .position(&id)
        .ok_or(RenderError::MissingPosition(id))
}

fn center_of(origin: Point, size: Size) -> Point {
    Point::new(
        origin.x() + size.width() / 2.0,
        origin.y() + size.height() / 2.0,
    )
}
