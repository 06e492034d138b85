use indexmap::IndexMap;
use tracing::trace;

use crate::core::{
    AreaGenerator, ComputedScale, ComputedSerie, DatumValue, Dimensions, LineGenerator,
    PointStyle, ScaledPoint, Series, Slice, build_points, build_slices, compute_xy_scales,
    downsample_series,
};
use crate::error::ChartResult;
use crate::render::Color;

use super::LineChartConfig;

/// Everything derived from the displayed data: scales, positioned series,
/// points, slices and path generators.
#[derive(Debug, Clone, PartialEq)]
pub struct LineModel {
    /// Displayed data after down-sampling.
    pub display_data: Vec<Series>,
    pub x_scale: ComputedScale,
    pub y_scale: ComputedScale,
    pub series: Vec<ComputedSerie>,
    pub points: Vec<ScaledPoint>,
    /// Empty unless slices are enabled.
    pub slices: Vec<Slice>,
    pub line_generator: LineGenerator,
    pub area_generator: AreaGenerator,
    /// Series id to resolved palette color, in series order.
    pub series_colors: IndexMap<String, Color>,
}

impl LineModel {
    pub fn build(
        data: &[Series],
        config: &LineChartConfig,
        dimensions: Dimensions,
    ) -> ChartResult<Self> {
        let (width, height) = (dimensions.inner_width, dimensions.inner_height);
        let display_data = downsample_series(data, config.max_number_of_points);

        let scales =
            compute_xy_scales(&display_data, &config.x_scale, &config.y_scale, width, height)?;
        let mut series = scales.series;
        let mut series_colors = IndexMap::with_capacity(series.len());
        for (index, serie) in series.iter_mut().enumerate() {
            serie.color = config.colors.color_at(index);
            series_colors.insert(serie.id.clone(), serie.color);
        }

        let points = build_points(
            &series,
            PointStyle {
                color: config.point_color,
                border_color: config.point_border_color,
                x_format: &config.x_format,
                y_format: &config.y_format,
            },
        );
        let slices = config
            .enable_slices
            .map(|axis| build_slices(&points, axis, width, height))
            .unwrap_or_default();

        let baseline_y = scales
            .y_scale
            .map(&DatumValue::Number(config.area_baseline_value))
            .unwrap_or(height);

        trace!(
            series = series.len(),
            points = points.len(),
            slices = slices.len(),
            "line model rebuilt"
        );

        Ok(Self {
            display_data,
            x_scale: scales.x_scale,
            y_scale: scales.y_scale,
            series,
            points,
            slices,
            line_generator: LineGenerator::new(config.curve),
            area_generator: AreaGenerator::new(config.curve, baseline_y),
            series_colors,
        })
    }
}
