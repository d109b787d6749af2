//! The category legend.
//!
//! The legend lists every [`PollutantCategory`] with a color swatch, its code
//! letter and its display name. It is anchored to the right of the padded
//! content and aligned with the bottom of the last process box.

use pollflow_core::{
    draw::{
        FontWeight, GroupPrimitive, GroupRole, RectPrimitive, StrokeDefinition, TextAnchor,
        TextPrimitive, TextStyle,
    },
    geometry::{Bounds, Point, Size},
    pollutant::PollutantCategory,
};

use super::RenderStyle;
use crate::{config::LayoutConfig, layout::PaddedBounds};

/// Title drawn above the legend entries.
pub const LEGEND_TITLE: &str = "图例";

/// Gap between a swatch and its category name.
const NAME_GAP: f32 = 15.0;

/// Builds the legend group.
///
/// The title sits at `(bounds.right + legend_offset_x, last_box_bottom -
/// legend_offset_y)`, pushed down when needed so the background never
/// starts above the top canvas edge. Entries follow two paddings below the
/// title, one every `legend_item_spacing`.
pub fn build_legend(
    config: &LayoutConfig,
    style: &RenderStyle,
    bounds: PaddedBounds,
    last_box_bottom: f32,
) -> GroupPrimitive {
    let padding = config.legend_padding();
    let spacing = config.legend_item_spacing();

    let x = bounds.right() + config.legend_offset_x();
    let y = (last_box_bottom - config.legend_offset_y()).max(padding);

    let categories = PollutantCategory::ALL;
    let background = Bounds::new_from_top_left(
        Point::new(x - padding, y - padding),
        Size::new(
            config.legend_width(),
            categories.len() as f32 * spacing + 3.0 * padding,
        ),
    );

    let mut legend = GroupPrimitive::new(GroupRole::Legend).with_id("legend");
    legend.push(
        RectPrimitive::new(background)
            .with_corner_radius(config.legend_corner_radius())
            .with_fill(style.legend_background)
            .with_stroke(StrokeDefinition::solid(style.legend_border, 1.0)),
    );
    legend.push(TextPrimitive::new(
        Point::new(x, y),
        LEGEND_TITLE,
        TextStyle::new(config.legend_title_font_size()).with_weight(FontWeight::Bold),
    ));

    for (i, category) in categories.into_iter().enumerate() {
        let item_y = y + 2.0 * padding + i as f32 * spacing;
        legend.push(legend_item(config, category, Point::new(x, item_y)));
    }
    legend
}

fn legend_item(config: &LayoutConfig, category: PollutantCategory, origin: Point) -> GroupPrimitive {
    let swatch = config.pollutant_box_size();
    let palette = category.palette();
    let font_size = config.pollutant_font_size();
    let text_y = origin.y() + swatch.height() / 2.0;

    let mut item = GroupPrimitive::new(GroupRole::LegendItem(category));
    item.push(
        RectPrimitive::new(origin.to_bounds(swatch))
            .with_corner_radius(config.pollutant_corner_radius())
            .with_fill(palette.fill())
            .with_stroke(StrokeDefinition::solid(palette.stroke(), 1.0)),
    );
    item.push(TextPrimitive::new(
        Point::new(origin.x() + swatch.width() / 2.0, text_y),
        category.code().to_string(),
        TextStyle::new(font_size)
            .with_weight(FontWeight::Bold)
            .with_anchor(TextAnchor::Middle)
            .with_middle_baseline(),
    ));
    item.push(TextPrimitive::new(
        Point::new(origin.x() + swatch.width() + NAME_GAP, text_y),
        category.name(),
        TextStyle::new(font_size).with_middle_baseline(),
    ));
    item
}
