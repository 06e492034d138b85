use serde::{Deserialize, Serialize};

use crate::core::format::ValueFormat;
use crate::core::slices::SliceAxis;
use crate::core::types::DatumValue;
use crate::core::xy_scales::ComputedSerie;
use crate::render::{Color, InheritedColor};

/// Data carried by a scaled point, with labels already formatted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointData {
    pub x: DatumValue,
    pub y: DatumValue,
    pub x_formatted: String,
    pub y_formatted: String,
}

impl PointData {
    #[must_use]
    pub fn value_on(&self, axis: SliceAxis) -> &DatumValue {
        match axis {
            SliceAxis::X => &self.x,
            SliceAxis::Y => &self.y,
        }
    }
}

/// Renderable point in inner-area pixel coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaledPoint {
    /// `"<serie id>.<index within serie>"`.
    pub id: String,
    /// Position across all series, in build order.
    pub index: usize,
    pub serie_id: String,
    pub serie_color: Color,
    pub x: f64,
    pub y: f64,
    pub color: Color,
    pub border_color: Color,
    pub data: PointData,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointStyle<'a> {
    pub color: InheritedColor,
    pub border_color: InheritedColor,
    pub x_format: &'a ValueFormat,
    pub y_format: &'a ValueFormat,
}

/// Flattens every defined datum of every series into scaled points.
///
/// Data without a position (missing or unparseable coordinate) is skipped and
/// does not consume an index.
#[must_use]
pub fn build_points(series: &[ComputedSerie], style: PointStyle<'_>) -> Vec<ScaledPoint> {
    let mut points = Vec::new();
    for serie in series {
        let defined = serie.data.iter().filter_map(|datum| {
            let (x, y) = datum.position?;
            let data_x = datum.data.x.clone()?;
            let data_y = datum.data.y.clone()?;
            Some((x, y, data_x, data_y))
        });

        for (index, (x, y, data_x, data_y)) in defined.enumerate() {
            points.push(ScaledPoint {
                id: format!("{}.{index}", serie.id),
                index: points.len(),
                serie_id: serie.id.clone(),
                serie_color: serie.color,
                x,
                y,
                color: style.color.resolve(serie.color),
                border_color: style.border_color.resolve(serie.color),
                data: PointData {
                    x_formatted: style.x_format.format(&data_x),
                    y_formatted: style.y_format.format(&data_y),
                    x: data_x,
                    y: data_y,
                },
            });
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::{PointStyle, build_points};
    use crate::core::format::ValueFormat;
    use crate::core::types::{Datum, Series};
    use crate::core::xy_scales::{ScaleSpec, compute_xy_scales};
    use crate::render::{Color, InheritedColor};

    #[test]
    fn ids_and_indices_skip_gaps() {
        let series = vec![
            Series::new(
                "a",
                vec![Datum::xy(0.0, 1.0), Datum::gap(1.0), Datum::xy(2.0, 2.0)],
            ),
            Series::from_xy("b", &[(0.0, 3.0)]),
        ];
        let mut scales =
            compute_xy_scales(&series, &ScaleSpec::linear(), &ScaleSpec::linear(), 10.0, 10.0)
                .expect("scales");
        scales.series[1].color = Color::WHITE;

        let format = ValueFormat::fixed(1);
        let points = build_points(
            &scales.series,
            PointStyle {
                color: InheritedColor::FromSerie,
                border_color: InheritedColor::Fixed(Color::BLACK),
                x_format: &format,
                y_format: &format,
            },
        );

        let ids: Vec<&str> = points.iter().map(|point| point.id.as_str()).collect();
        assert_eq!(ids, vec!["a.0", "a.1", "b.0"]);
        assert_eq!(points[2].index, 2);
        assert_eq!(points[2].color, Color::WHITE);
        assert_eq!(points[2].border_color, Color::BLACK);
        assert_eq!(points[1].data.y_formatted, "2.0");
    }
}
