use tracing::trace;

use crate::core::ComputedSerie;
use crate::extensions::{LayerContext, place_markers};
use crate::interaction::CrosshairType;
use crate::render::{Color, Layer, LayerKind, Renderer, SvgElement};

use super::LineChart;
use super::axis_builder::{build_axes, build_grid, translate};
use super::legend_builder::build_legends;

const RESET_CONTROL_WIDTH: f64 = 60.0;
const RESET_CONTROL_HEIGHT: f64 = 20.0;

impl<R: Renderer> LineChart<R> {
    /// Materializes the chart as an SVG tree: the outer `<svg>`, a margin
    /// group and every active layer in list order.
    #[must_use]
    pub fn build_document(&self) -> SvgElement {
        let dims = self.dimensions;
        let mut body = SvgElement::group()
            .attr("data-role", "chart-body")
            .attr("transform", translate(dims.margin.left, dims.margin.top));

        for layer in &self.layers {
            let element = match layer {
                Layer::Builtin(kind) => self.build_layer(*kind),
                Layer::Custom(custom) => Some(
                    SvgElement::group()
                        .attr("data-layer", custom.id().to_owned())
                        .child(custom.render(&self.layer_context())),
                ),
            };
            match element {
                Some(element) => body.push(element),
                None => trace!(layer = layer.name(), "layer inactive"),
            }
        }

        if self.config.use_brush {
            body.push(self.build_reset_control());
        }

        let mut svg = SvgElement::new("svg")
            .attr("xmlns", "http://www.w3.org/2000/svg")
            .num("width", dims.outer_width)
            .num("height", dims.outer_height)
            .attr("role", "img");
        if self.config.theme.background.alpha > 0.0 {
            svg.push(
                SvgElement::new("rect")
                    .num("width", dims.outer_width)
                    .num("height", dims.outer_height)
                    .attr("fill", self.config.theme.background.to_hex()),
            );
        }
        svg.child(body)
    }

    /// Serialized markup of [`LineChart::build_document`].
    #[must_use]
    pub fn to_svg_string(&self) -> String {
        self.build_document().to_svg_string()
    }

    /// Read-only view passed to custom layers.
    #[must_use]
    pub fn layer_context(&self) -> LayerContext<'_> {
        LayerContext {
            inner_width: self.dimensions.inner_width,
            inner_height: self.dimensions.inner_height,
            series: &self.model.series,
            slices: &self.model.slices,
            points: &self.model.points,
            x_scale: &self.model.x_scale,
            y_scale: &self.model.y_scale,
            line_generator: self.model.line_generator,
            area_generator: self.model.area_generator,
            config: &self.config,
        }
    }

    /// Builds one built-in layer, `None` when its enabling conditions do not
    /// hold.
    #[must_use]
    pub fn build_layer(&self, kind: LayerKind) -> Option<SvgElement> {
        let config = &self.config;
        let (width, height) = (self.dimensions.inner_width, self.dimensions.inner_height);
        match kind {
            LayerKind::Grid => Some(build_grid(config, &self.model, width, height)),
            LayerKind::Markers => Some(self.build_markers()),
            LayerKind::Axes => Some(build_axes(config, &self.model, width, height)),
            LayerKind::Areas => config.enable_area.then(|| self.build_areas()),
            LayerKind::Crosshair => self.build_crosshair(),
            LayerKind::Lines => Some(self.build_lines()),
            LayerKind::Points => config.enable_points.then(|| self.build_points()),
            LayerKind::Slices => (config.is_interactive && config.enable_slices.is_some())
                .then(|| self.build_slices()),
            LayerKind::Mesh => (config.is_interactive
                && config.use_mesh
                && config.enable_slices.is_none())
            .then(|| self.build_mesh()),
            LayerKind::Legends => Some(build_legends(
                &config.legends,
                &self.model,
                &config.theme,
                width,
                height,
            )),
            LayerKind::Brush => self.build_brush(),
        }
    }

    fn build_markers(&self) -> SvgElement {
        let placed = place_markers(
            &self.config.markers,
            (&self.config.x_scale, &self.model.x_scale),
            (&self.config.y_scale, &self.model.y_scale),
            self.dimensions.inner_width,
            self.dimensions.inner_height,
        );
        let markers = placed.into_iter().map(|placed| {
            let mut line = SvgElement::new("line")
                .num("x1", placed.x1)
                .num("y1", placed.y1)
                .num("x2", placed.x2)
                .num("y2", placed.y2)
                .attr("stroke", placed.marker.line_color.to_hex())
                .num("stroke-width", placed.marker.line_width);
            if let Some(dash) = &placed.marker.line_dash {
                line = line.attr("stroke-dasharray", dash.clone());
            }
            let mut group = SvgElement::group().attr("data-role", "marker").child(line);
            if let Some(legend) = &placed.marker.legend {
                group.push(
                    SvgElement::new("text")
                        .num("x", placed.legend_x)
                        .num("y", placed.legend_y)
                        .attr("text-anchor", placed.legend_anchor)
                        .attr("fill", self.config.theme.text_color.to_hex())
                        .num("font-size", self.config.theme.font_size)
                        .text(legend.clone()),
                );
            }
            group
        });
        SvgElement::group().attr("data-layer", "markers").children(markers)
    }

    fn build_areas(&self) -> SvgElement {
        let areas = self.model.series.iter().rev().filter_map(|serie| {
            let path = self.model.area_generator.path(&serie.positions())?;
            Some(
                serie_path(serie, path)
                    .attr("fill", serie.color.to_hex())
                    .attr("fill-opacity", self.config.area_opacity.to_string())
                    .attr("stroke-width", "0")
                    .attr(
                        "style",
                        format!("mix-blend-mode: {}", self.config.area_blend_mode),
                    ),
            )
        });
        SvgElement::group().attr("data-layer", "areas").children(areas)
    }

    fn build_lines(&self) -> SvgElement {
        let lines = self.model.series.iter().rev().filter_map(|serie| {
            let path = self.model.line_generator.path(&serie.positions())?;
            Some(
                serie_path(serie, path)
                    .attr("fill", "none")
                    .attr("stroke", serie.color.to_hex())
                    .num("stroke-width", self.config.line_width),
            )
        });
        SvgElement::group().attr("data-layer", "lines").children(lines)
    }

    fn build_points(&self) -> SvgElement {
        let config = &self.config;
        let points = self.model.points.iter().map(|point| {
            let mut group = SvgElement::group()
                .attr("data-point", point.id.clone())
                .attr("transform", translate(point.x, point.y))
                .child(
                    SvgElement::new("circle")
                        .num("r", config.point_size / 2.0)
                        .attr("fill", point.color.to_hex())
                        .attr("stroke", point.border_color.to_hex())
                        .num("stroke-width", config.point_border_width),
                );
            if config.enable_point_label {
                group.push(
                    SvgElement::new("text")
                        .num("y", config.point_label_y_offset)
                        .attr("text-anchor", "middle")
                        .attr("fill", config.theme.text_color.to_hex())
                        .num("font-size", config.theme.font_size)
                        .text(point.data.y_formatted.clone()),
                );
            }
            group
        });
        SvgElement::group().attr("data-layer", "points").children(points)
    }

    fn build_slices(&self) -> SvgElement {
        let debug = self.config.debug_slices;
        let current = self.interaction.current_slice();
        let slices = self.model.slices.iter().enumerate().map(|(index, slice)| {
            let highlighted = debug && current == Some(index);
            SvgElement::new("rect")
                .attr("data-slice", index.to_string())
                .num("x", slice.x0)
                .num("y", slice.y0)
                .num("width", slice.width)
                .num("height", slice.height)
                .attr("stroke", "red")
                .num("stroke-width", if debug { 1.0 } else { 0.0 })
                .attr("stroke-opacity", "0.75")
                .attr("fill", "red")
                .attr("fill-opacity", if highlighted { "0.35" } else { "0" })
        });
        SvgElement::group().attr("data-layer", "slices").children(slices)
    }

    fn build_mesh(&self) -> SvgElement {
        let mut group = SvgElement::group().attr("data-layer", "mesh").child(
            SvgElement::new("rect")
                .attr("data-role", "mesh-area")
                .num("width", self.dimensions.inner_width)
                .num("height", self.dimensions.inner_height)
                .attr("fill", "transparent"),
        );
        if self.config.debug_mesh {
            if let Some(point) = self.current_point() {
                group.push(
                    SvgElement::new("circle")
                        .attr("data-role", "mesh-current")
                        .num("cx", point.x)
                        .num("cy", point.y)
                        .num("r", 6.0)
                        .attr("fill", "red")
                        .attr("fill-opacity", "0.35"),
                );
            }
        }
        group
    }

    fn build_crosshair(&self) -> Option<SvgElement> {
        if !self.config.is_interactive || !self.config.enable_crosshair {
            return None;
        }
        let (x, y, kind) = match (self.config.enable_slices, self.current_slice()) {
            (Some(axis), Some(slice)) => (slice.x, slice.y, CrosshairType::from(axis)),
            _ => {
                let point = self.current_point()?;
                (point.x, point.y, self.config.crosshair_type)
            }
        };
        let stroke = self.config.theme.crosshair_color;
        let lines = kind
            .guide_lines(x, y, self.dimensions.inner_width, self.dimensions.inner_height)
            .into_iter()
            .map(|line| {
                SvgElement::new("line")
                    .num("x1", line.x1)
                    .num("y1", line.y1)
                    .num("x2", line.x2)
                    .num("y2", line.y2)
                    .attr("stroke", stroke.to_hex())
                    .num("stroke-width", 1.0)
                    .attr("stroke-opacity", "0.75")
                    .attr("stroke-dasharray", "6 6")
            });
        Some(SvgElement::group().attr("data-layer", "crosshair").children(lines))
    }

    fn build_brush(&self) -> Option<SvgElement> {
        let rect = self.brush_rectangle()?;
        Some(
            SvgElement::group().attr("data-layer", "brush").child(
                SvgElement::new("rect")
                    .num("x", rect.x)
                    .num("y", rect.y)
                    .num("width", rect.width)
                    .num("height", rect.height)
                    .attr("fill", "blue")
                    .attr("fill-opacity", "0.1"),
            ),
        )
    }

    fn build_reset_control(&self) -> SvgElement {
        let theme = &self.config.theme;
        SvgElement::group()
            .attr("data-role", "brush-reset")
            .attr(
                "transform",
                translate(self.dimensions.inner_width - RESET_CONTROL_WIDTH, 0.0),
            )
            .attr("cursor", "pointer")
            .child(
                SvgElement::new("rect")
                    .num("width", RESET_CONTROL_WIDTH)
                    .num("height", RESET_CONTROL_HEIGHT)
                    .num("rx", 3.0)
                    .attr("fill", Color::WHITE.to_hex())
                    .attr("stroke", theme.axis_color.to_hex()),
            )
            .child(
                SvgElement::new("text")
                    .num("x", RESET_CONTROL_WIDTH / 2.0)
                    .num("y", RESET_CONTROL_HEIGHT / 2.0)
                    .attr("text-anchor", "middle")
                    .attr("dominant-baseline", "central")
                    .attr("fill", theme.text_color.to_hex())
                    .num("font-size", theme.font_size)
                    .text("Reset"),
            )
    }
}

fn serie_path(serie: &ComputedSerie, path: String) -> SvgElement {
    SvgElement::new("path")
        .attr("data-serie", serie.id.clone())
        .attr("d", path)
}
