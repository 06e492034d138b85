use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::primitives::{parse_time_text, unix_millis_to_datetime};
use crate::core::scale::{LinearScale, PointScale};
use crate::core::types::{Datum, DatumValue, Series};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

const DEFAULT_TICK_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleBound {
    #[default]
    Auto,
    Value(f64),
}

/// Declarative scale description, resolved against data by
/// [`compute_xy_scales`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScaleSpec {
    Linear {
        #[serde(default)]
        min: ScaleBound,
        #[serde(default)]
        max: ScaleBound,
        #[serde(default)]
        stacked: bool,
        #[serde(default)]
        reverse: bool,
    },
    Time {
        /// chrono pattern used to parse text values; RFC 3339 when absent.
        #[serde(default)]
        format: Option<String>,
    },
    Point,
}

impl ScaleSpec {
    #[must_use]
    pub fn linear() -> Self {
        Self::Linear {
            min: ScaleBound::Auto,
            max: ScaleBound::Auto,
            stacked: false,
            reverse: false,
        }
    }

    #[must_use]
    pub fn time(format: Option<&str>) -> Self {
        Self::Time {
            format: format.map(str::to_owned),
        }
    }

    #[must_use]
    pub fn is_stacked(&self) -> bool {
        matches!(self, Self::Linear { stacked: true, .. })
    }

    /// Normalizes a raw value into the kind this scale works with.
    ///
    /// Returns `None` when the value cannot be interpreted, which makes the
    /// datum behave like a `null`.
    #[must_use]
    pub fn parse(&self, value: &DatumValue) -> Option<DatumValue> {
        match self {
            Self::Linear { .. } => match value {
                DatumValue::Number(number) => {
                    number.is_finite().then_some(DatumValue::Number(*number))
                }
                DatumValue::Time(_) => value.as_f64().map(DatumValue::Number),
                DatumValue::Text(text) => text
                    .trim()
                    .parse::<f64>()
                    .ok()
                    .filter(|number| number.is_finite())
                    .map(DatumValue::Number),
            },
            Self::Time { format } => match value {
                DatumValue::Time(time) => Some(DatumValue::Time(*time)),
                DatumValue::Number(millis) => {
                    unix_millis_to_datetime(*millis).map(DatumValue::Time)
                }
                DatumValue::Text(text) => {
                    parse_time_text(text, format.as_deref()).map(DatumValue::Time)
                }
            },
            Self::Point => Some(value.clone()),
        }
    }

    fn validate(&self) -> ChartResult<()> {
        if let Self::Linear { min, max, .. } = self {
            for (name, bound) in [("min", min), ("max", max)] {
                if let ScaleBound::Value(value) = bound {
                    if !value.is_finite() {
                        return Err(ChartError::InvalidData(format!(
                            "linear scale `{name}` must be finite"
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

/// A scale resolved against data and a pixel range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ComputedScale {
    Linear(LinearScale),
    /// Linear mapping over unix milliseconds.
    Time(LinearScale),
    Point(PointScale),
}

impl ComputedScale {
    /// Maps an already parsed value to a pixel coordinate.
    #[must_use]
    pub fn map(&self, value: &DatumValue) -> Option<f64> {
        match self {
            Self::Linear(scale) | Self::Time(scale) => value.as_f64().map(|v| scale.map(v)),
            Self::Point(scale) => scale.map(&category_key(value)),
        }
    }

    /// Tick values in data space, suitable for axes and grids.
    #[must_use]
    pub fn ticks(&self, count: usize) -> Vec<DatumValue> {
        match self {
            Self::Linear(scale) => scale.ticks(count).into_iter().map(DatumValue::Number).collect(),
            Self::Time(scale) => {
                let (start, end) = scale.domain();
                let count = count.max(1);
                (0..=count)
                    .filter_map(|i| {
                        let millis = start + (end - start) * i as f64 / count as f64;
                        unix_millis_to_datetime(millis).map(DatumValue::Time)
                    })
                    .collect()
            }
            Self::Point(scale) => scale
                .categories()
                .iter()
                .map(|category| DatumValue::Text(category.clone()))
                .collect(),
        }
    }

    #[must_use]
    pub fn default_ticks(&self) -> Vec<DatumValue> {
        self.ticks(DEFAULT_TICK_COUNT)
    }
}

pub(crate) fn category_key(value: &DatumValue) -> String {
    value.to_string()
}

/// One datum after parsing and scaling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputedDatum {
    /// Parsed data (`None` coordinates when the raw value was missing or
    /// unparseable).
    pub data: Datum,
    /// Stacked y value when the y scale is stacked.
    pub y_stacked: Option<f64>,
    /// Pixel position inside the inner area, `None` for gaps.
    pub position: Option<(f64, f64)>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputedSerie {
    pub id: String,
    pub color: Color,
    pub data: Vec<ComputedDatum>,
}

impl ComputedSerie {
    #[must_use]
    pub fn positions(&self) -> Vec<Option<(f64, f64)>> {
        self.data.iter().map(|datum| datum.position).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct XyScales {
    pub x_scale: ComputedScale,
    pub y_scale: ComputedScale,
    pub series: Vec<ComputedSerie>,
}

/// Resolves both scales against `series` and positions every datum inside a
/// `width` x `height` inner area (y grows downward).
pub fn compute_xy_scales(
    series: &[Series],
    x_spec: &ScaleSpec,
    y_spec: &ScaleSpec,
    width: f64,
    height: f64,
) -> ChartResult<XyScales> {
    x_spec.validate()?;
    y_spec.validate()?;

    let mut parsed: Vec<Vec<Datum>> = series
        .iter()
        .map(|serie| {
            serie
                .data
                .iter()
                .map(|datum| Datum {
                    x: datum.x.as_ref().and_then(|value| x_spec.parse(value)),
                    y: datum.y.as_ref().and_then(|value| y_spec.parse(value)),
                })
                .collect()
        })
        .collect();
    for (serie, data) in series.iter().zip(&parsed) {
        let skipped = serie
            .data
            .iter()
            .zip(data)
            .filter(|(raw, parsed)| raw.is_defined() && !parsed.is_defined())
            .count();
        if skipped > 0 {
            trace!(serie = %serie.id, skipped, "skipping unparseable data");
        }
    }

    let stacked = if y_spec.is_stacked() {
        Some(stack_values(&parsed))
    } else {
        None
    };

    let x_values = parsed.iter().flatten().filter_map(|datum| datum.x.as_ref());
    let x_scale = build_scale(x_spec, x_values, 0.0, width)?;

    let y_scale = match &stacked {
        Some(stacked) => {
            let values: Vec<DatumValue> = stacked
                .iter()
                .flatten()
                .filter_map(|value| value.map(DatumValue::Number))
                .collect();
            build_scale(y_spec, values.iter(), height, 0.0)?
        }
        None => {
            let y_values = parsed.iter().flatten().filter_map(|datum| datum.y.as_ref());
            build_scale(y_spec, y_values, height, 0.0)?
        }
    };

    let computed = series
        .iter()
        .zip(parsed.iter_mut())
        .enumerate()
        .map(|(serie_index, (serie, data))| {
            let data = std::mem::take(data)
                .into_iter()
                .enumerate()
                .map(|(index, datum)| {
                    let y_stacked = stacked
                        .as_ref()
                        .and_then(|stacked| stacked[serie_index][index]);
                    let position = match (&datum.x, &datum.y) {
                        (Some(x), Some(y)) => {
                            let y_value = y_stacked.map_or_else(|| y.clone(), DatumValue::Number);
                            x_scale.map(x).zip(y_scale.map(&y_value))
                        }
                        _ => None,
                    };
                    ComputedDatum {
                        data: datum,
                        y_stacked,
                        position,
                    }
                })
                .collect();
            ComputedSerie {
                id: serie.id.clone(),
                color: Color::BLACK,
                data,
            }
        })
        .collect();

    Ok(XyScales {
        x_scale,
        y_scale,
        series: computed,
    })
}

fn stack_values(parsed: &[Vec<Datum>]) -> Vec<Vec<Option<f64>>> {
    let mut running: Vec<f64> = Vec::new();
    parsed
        .iter()
        .map(|data| {
            data.iter()
                .enumerate()
                .map(|(index, datum)| {
                    if running.len() <= index {
                        running.resize(index + 1, 0.0);
                    }
                    let value = datum.y.as_ref().and_then(DatumValue::as_f64)?;
                    running[index] += value;
                    Some(running[index])
                })
                .collect()
        })
        .collect()
}

fn build_scale<'a>(
    spec: &ScaleSpec,
    values: impl Iterator<Item = &'a DatumValue>,
    range_start: f64,
    range_end: f64,
) -> ChartResult<ComputedScale> {
    match spec {
        ScaleSpec::Linear {
            min, max, reverse, ..
        } => {
            let (data_min, data_max) = numeric_extent(values);
            let mut start = match min {
                ScaleBound::Auto => data_min,
                ScaleBound::Value(value) => *value,
            };
            let mut end = match max {
                ScaleBound::Auto => data_max,
                ScaleBound::Value(value) => *value,
            };
            if start == end {
                end = start + 1.0;
            }
            if start > end {
                std::mem::swap(&mut start, &mut end);
            }
            let (from, to) = if *reverse {
                (range_end, range_start)
            } else {
                (range_start, range_end)
            };
            let scale = LinearScale::new(start, end)?.with_range(from, to)?;
            Ok(ComputedScale::Linear(scale))
        }
        ScaleSpec::Time { .. } => {
            let (start, mut end) = numeric_extent(values);
            if start == end {
                end = start + 1.0;
            }
            let scale = LinearScale::new(start, end)?.with_range(range_start, range_end)?;
            Ok(ComputedScale::Time(scale))
        }
        ScaleSpec::Point => {
            let categories: IndexSet<String> = values.map(category_key).collect();
            Ok(ComputedScale::Point(PointScale::new(
                categories,
                range_start,
                range_end,
            )))
        }
    }
}

fn numeric_extent<'a>(values: impl Iterator<Item = &'a DatumValue>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for value in values.filter_map(DatumValue::as_f64) {
        min = min.min(value);
        max = max.max(value);
    }
    if min.is_finite() && max.is_finite() {
        (min, max)
    } else {
        (0.0, 1.0)
    }
}
