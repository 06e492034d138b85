use crate::core::primitives::format_coord;
use crate::core::{ComputedScale, DatumValue, ScaleSpec, ValueFormat};
use crate::render::SvgElement;

use super::{AxisConfig, LineChartConfig, LineModel, ThemeConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AxisSide {
    Top,
    Right,
    Bottom,
    Left,
}

impl AxisSide {
    fn name(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        }
    }

    fn is_horizontal(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }
}

/// Builds the `axes` layer: one group per configured side.
pub(super) fn build_axes(
    config: &LineChartConfig,
    model: &LineModel,
    width: f64,
    height: f64,
) -> SvgElement {
    let sides = [
        (AxisSide::Top, &config.axis_top),
        (AxisSide::Right, &config.axis_right),
        (AxisSide::Bottom, &config.axis_bottom),
        (AxisSide::Left, &config.axis_left),
    ];
    let axes = sides.into_iter().filter_map(|(side, axis)| {
        let axis = axis.as_ref()?;
        let (scale, format) = if side.is_horizontal() {
            (&model.x_scale, &config.x_format)
        } else {
            (&model.y_scale, &config.y_format)
        };
        Some(build_axis(
            side,
            axis,
            scale,
            axis.format.as_ref().unwrap_or(format),
            (width, height),
            &config.theme,
        ))
    });
    SvgElement::group().attr("data-layer", "axes").children(axes)
}

fn build_axis(
    side: AxisSide,
    axis: &AxisConfig,
    scale: &ComputedScale,
    format: &ValueFormat,
    (width, height): (f64, f64),
    theme: &ThemeConfig,
) -> SvgElement {
    let (offset_x, offset_y) = match side {
        AxisSide::Top | AxisSide::Left => (0.0, 0.0),
        AxisSide::Right => (width, 0.0),
        AxisSide::Bottom => (0.0, height),
    };
    let mut group = SvgElement::group()
        .attr("data-axis", side.name())
        .attr("transform", translate(offset_x, offset_y));

    let domain = if side.is_horizontal() {
        SvgElement::new("line").num("x1", 0.0).num("x2", width).num("y1", 0.0).num("y2", 0.0)
    } else {
        SvgElement::new("line").num("x1", 0.0).num("x2", 0.0).num("y1", 0.0).num("y2", height)
    };
    group.push(domain.attr("stroke", theme.axis_color.to_hex()).num("stroke-width", 1.0));

    let ticks = axis
        .tick_count
        .map_or_else(|| scale.default_ticks(), |count| scale.ticks(count));
    let label_distance = axis.tick_size + axis.tick_padding;
    for value in ticks {
        let Some(position) = scale.map(&value) else {
            continue;
        };
        let (tick_x, tick_y) = if side.is_horizontal() {
            (position, 0.0)
        } else {
            (0.0, position)
        };
        let (line_x, line_y, text_x, text_y, anchor, baseline) = match side {
            AxisSide::Top => (0.0, -axis.tick_size, 0.0, -label_distance, "middle", "alphabetic"),
            AxisSide::Bottom => (0.0, axis.tick_size, 0.0, label_distance, "middle", "hanging"),
            AxisSide::Left => (-axis.tick_size, 0.0, -label_distance, 0.0, "end", "central"),
            AxisSide::Right => (axis.tick_size, 0.0, label_distance, 0.0, "start", "central"),
        };
        let label = SvgElement::new("text")
            .attr("text-anchor", anchor)
            .attr("dominant-baseline", baseline)
            .attr(
                "transform",
                format!("{} rotate({})", translate(text_x, text_y), format_coord(axis.tick_rotation)),
            )
            .attr("fill", theme.text_color.to_hex())
            .num("font-size", theme.font_size)
            .text(format.format(&value));
        group.push(
            SvgElement::group()
                .attr("transform", translate(tick_x, tick_y))
                .child(
                    SvgElement::new("line")
                        .num("x1", 0.0)
                        .num("y1", 0.0)
                        .num("x2", line_x)
                        .num("y2", line_y)
                        .attr("stroke", theme.axis_color.to_hex())
                        .num("stroke-width", 1.0),
                )
                .child(label),
        );
    }

    if let Some(legend) = &axis.legend {
        let transform = match side {
            AxisSide::Top | AxisSide::Bottom => translate(width / 2.0, axis.legend_offset),
            AxisSide::Left | AxisSide::Right => format!(
                "{} rotate(-90)",
                translate(axis.legend_offset, height / 2.0)
            ),
        };
        group.push(
            SvgElement::new("text")
                .attr("data-role", "axis-legend")
                .attr("transform", transform)
                .attr("text-anchor", "middle")
                .attr("fill", theme.text_color.to_hex())
                .num("font-size", theme.font_size)
                .text(legend.clone()),
        );
    }
    group
}

/// Builds the `grid` layer from x/y ticks or explicit grid values.
pub(super) fn build_grid(
    config: &LineChartConfig,
    model: &LineModel,
    width: f64,
    height: f64,
) -> SvgElement {
    let mut group = SvgElement::group().attr("data-layer", "grid");
    let stroke = config.theme.grid_color.to_hex();

    if config.enable_grid_x {
        for x in grid_positions(&model.x_scale, &config.x_scale, config.grid_x_values.as_deref()) {
            group.push(
                SvgElement::new("line")
                    .num("x1", x)
                    .num("x2", x)
                    .num("y1", 0.0)
                    .num("y2", height)
                    .attr("stroke", stroke.clone())
                    .num("stroke-width", 1.0),
            );
        }
    }
    if config.enable_grid_y {
        for y in grid_positions(&model.y_scale, &config.y_scale, config.grid_y_values.as_deref()) {
            group.push(
                SvgElement::new("line")
                    .num("x1", 0.0)
                    .num("x2", width)
                    .num("y1", y)
                    .num("y2", y)
                    .attr("stroke", stroke.clone())
                    .num("stroke-width", 1.0),
            );
        }
    }
    group
}

fn grid_positions(
    scale: &ComputedScale,
    spec: &ScaleSpec,
    explicit: Option<&[DatumValue]>,
) -> Vec<f64> {
    match explicit {
        Some(values) => values
            .iter()
            .filter_map(|value| spec.parse(value))
            .filter_map(|value| scale.map(&value))
            .collect(),
        None => scale
            .default_ticks()
            .iter()
            .filter_map(|value| scale.map(value))
            .collect(),
    }
}

pub(super) fn translate(x: f64, y: f64) -> String {
    format!("translate({},{})", format_coord(x), format_coord(y))
}
