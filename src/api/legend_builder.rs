use crate::render::SvgElement;

use super::axis_builder::translate;
use super::{LegendAnchor, LegendConfig, LegendDirection, LegendItem, LineModel, ThemeConfig};

const SYMBOL_LABEL_GAP: f64 = 8.0;

/// Legend items derived from the series, last series first.
fn series_legend_items(model: &LineModel) -> Vec<LegendItem> {
    model
        .series
        .iter()
        .rev()
        .map(|serie| LegendItem {
            id: serie.id.clone(),
            label: serie.id.clone(),
            color: serie.color,
        })
        .collect()
}

/// Builds the `legends` layer.
pub(super) fn build_legends(
    legends: &[LegendConfig],
    model: &LineModel,
    theme: &ThemeConfig,
    width: f64,
    height: f64,
) -> SvgElement {
    let series_items = series_legend_items(model);
    let boxes = legends.iter().map(|legend| {
        let items = legend.data.as_deref().unwrap_or(&series_items);
        build_box_legend(legend, items, theme, width, height)
    });
    SvgElement::group().attr("data-layer", "legends").children(boxes)
}

fn build_box_legend(
    legend: &LegendConfig,
    items: &[LegendItem],
    theme: &ThemeConfig,
    container_width: f64,
    container_height: f64,
) -> SvgElement {
    let count = items.len() as f64;
    let spacing_total = (count - 1.0).max(0.0) * legend.items_spacing;
    let (box_width, box_height) = match legend.direction {
        LegendDirection::Column => (legend.item_width, count * legend.item_height + spacing_total),
        LegendDirection::Row => (count * legend.item_width + spacing_total, legend.item_height),
    };
    let (x, y) = anchor_position(
        legend.anchor,
        container_width - box_width,
        container_height - box_height,
    );

    let mut group = SvgElement::group()
        .attr("data-role", "legend")
        .attr("transform", translate(x + legend.translate_x, y + legend.translate_y));
    for (index, item) in items.iter().enumerate() {
        let step = index as f64;
        let (item_x, item_y) = match legend.direction {
            LegendDirection::Column => (0.0, step * (legend.item_height + legend.items_spacing)),
            LegendDirection::Row => (step * (legend.item_width + legend.items_spacing), 0.0),
        };
        group.push(
            SvgElement::group()
                .attr("data-legend-item", item.id.clone())
                .attr("transform", translate(item_x, item_y))
                .child(
                    SvgElement::new("rect")
                        .num("x", 0.0)
                        .num("y", (legend.item_height - legend.symbol_size) / 2.0)
                        .num("width", legend.symbol_size)
                        .num("height", legend.symbol_size)
                        .attr("fill", item.color.to_hex()),
                )
                .child(
                    SvgElement::new("text")
                        .num("x", legend.symbol_size + SYMBOL_LABEL_GAP)
                        .num("y", legend.item_height / 2.0)
                        .attr("dominant-baseline", "central")
                        .attr("fill", theme.text_color.to_hex())
                        .num("font-size", theme.font_size)
                        .text(item.label.clone()),
                ),
        );
    }
    group
}

/// Top-left corner of a box with `free_x`/`free_y` slack in its container.
fn anchor_position(anchor: LegendAnchor, free_x: f64, free_y: f64) -> (f64, f64) {
    match anchor {
        LegendAnchor::TopLeft => (0.0, 0.0),
        LegendAnchor::Top => (free_x / 2.0, 0.0),
        LegendAnchor::TopRight => (free_x, 0.0),
        LegendAnchor::Right => (free_x, free_y / 2.0),
        LegendAnchor::BottomRight => (free_x, free_y),
        LegendAnchor::Bottom => (free_x / 2.0, free_y),
        LegendAnchor::BottomLeft => (0.0, free_y),
        LegendAnchor::Left => (0.0, free_y / 2.0),
        LegendAnchor::Center => (free_x / 2.0, free_y / 2.0),
    }
}
