use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::decimal_to_f64;
use crate::error::{ChartError, ChartResult};

/// Outer chart size in pixels, margins included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Margin {
    #[serde(default)]
    pub top: f64,
    #[serde(default)]
    pub right: f64,
    #[serde(default)]
    pub bottom: f64,
    #[serde(default)]
    pub left: f64,
}

impl Margin {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn validate(self) -> ChartResult<Self> {
        for (name, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "margin `{name}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

/// Resolved outer/inner chart dimensions.
///
/// Scales map values into the inner area, which is the viewport minus the
/// margins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub margin: Margin,
    pub outer_width: f64,
    pub outer_height: f64,
    pub inner_width: f64,
    pub inner_height: f64,
}

impl Dimensions {
    pub fn resolve(viewport: Viewport, margin: Margin) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let margin = margin.validate()?;

        let outer_width = f64::from(viewport.width);
        let outer_height = f64::from(viewport.height);
        let inner_width = outer_width - margin.left - margin.right;
        let inner_height = outer_height - margin.top - margin.bottom;
        if inner_width <= 0.0 || inner_height <= 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "margins leave no inner area: inner={inner_width}x{inner_height}"
            )));
        }

        Ok(Self {
            margin,
            outer_width,
            outer_height,
            inner_width,
            inner_height,
        })
    }
}

/// One raw coordinate of a datum.
///
/// JSON numbers become `Number`, RFC 3339 strings become `Time`, any other
/// string is kept as a `Text` category. Scales may re-parse values (see
/// `ScaleSpec::parse`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DatumValue {
    Number(f64),
    Time(DateTime<Utc>),
    Text(String),
}

impl DatumValue {
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Time(time) => Some(time.timestamp_millis() as f64),
            Self::Text(_) => None,
        }
    }

    #[must_use]
    pub fn as_time(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Time(time) => Some(*time),
            _ => None,
        }
    }

    /// Orders two values of the same kind.
    ///
    /// Numbers compare numerically, instants chronologically and text
    /// lexicographically. Mixed kinds are unordered.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.partial_cmp(b),
            (Self::Time(a), Self::Time(b)) => Some(a.cmp(b)),
            (Self::Text(a), Self::Text(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }

    /// Returns `true` when `self` lies inside the inclusive `[start, end]` range.
    #[must_use]
    pub fn is_within(&self, start: &Self, end: &Self) -> bool {
        matches!(
            self.compare(start),
            Some(Ordering::Greater | Ordering::Equal)
        ) && matches!(self.compare(end), Some(Ordering::Less | Ordering::Equal))
    }
}

impl fmt::Display for DatumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Time(time) => write!(f, "{}", time.format("%Y-%m-%dT%H:%M:%SZ")),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<f64> for DatumValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for DatumValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<i32> for DatumValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<DateTime<Utc>> for DatumValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Time(value)
    }
}

/// Decimals that do not fit an `f64` become NaN, which scales treat as a gap.
impl From<Decimal> for DatumValue {
    fn from(value: Decimal) -> Self {
        Self::Number(decimal_to_f64(value, "datum value").unwrap_or(f64::NAN))
    }
}

impl From<&str> for DatumValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for DatumValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Raw `{x, y}` input datum. A missing coordinate breaks the line.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Datum {
    #[serde(default)]
    pub x: Option<DatumValue>,
    #[serde(default)]
    pub y: Option<DatumValue>,
}

impl Datum {
    #[must_use]
    pub fn new(x: impl Into<DatumValue>, y: impl Into<DatumValue>) -> Self {
        Self {
            x: Some(x.into()),
            y: Some(y.into()),
        }
    }

    #[must_use]
    pub fn xy(x: f64, y: f64) -> Self {
        Self::new(x, y)
    }

    #[must_use]
    pub fn gap(x: impl Into<DatumValue>) -> Self {
        Self {
            x: Some(x.into()),
            y: None,
        }
    }

    #[must_use]
    pub fn is_defined(&self) -> bool {
        self.x.is_some() && self.y.is_some()
    }
}

/// One named line and its ordered data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub id: String,
    #[serde(default)]
    pub data: Vec<Datum>,
}

impl Series {
    #[must_use]
    pub fn new(id: impl Into<String>, data: Vec<Datum>) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }

    #[must_use]
    pub fn from_xy(id: impl Into<String>, points: &[(f64, f64)]) -> Self {
        Self::new(id, points.iter().map(|&(x, y)| Datum::xy(x, y)).collect())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Parses the `[{"id": ..., "data": [{"x": ..., "y": ...}]}]` input shape.
pub fn series_from_json_str(json: &str) -> ChartResult<Vec<Series>> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::{DatumValue, Dimensions, Margin, Viewport};
    use std::cmp::Ordering;

    #[test]
    fn dimensions_subtract_margins() {
        let dims = Dimensions::resolve(
            Viewport::new(800, 400),
            Margin::new(10.0, 20.0, 30.0, 40.0),
        )
        .expect("dimensions");
        assert_eq!(dims.inner_width, 740.0);
        assert_eq!(dims.inner_height, 360.0);
    }

    #[test]
    fn dimensions_reject_margins_wider_than_viewport() {
        assert!(
            Dimensions::resolve(Viewport::new(100, 100), Margin::new(0.0, 60.0, 0.0, 60.0))
                .is_err()
        );
    }

    #[test]
    fn mixed_value_kinds_are_unordered() {
        let number = DatumValue::Number(1.0);
        let text = DatumValue::from("a");
        assert_eq!(number.compare(&text), None);
        assert!(!number.is_within(&text, &text));
        assert_eq!(
            DatumValue::from("a").compare(&DatumValue::from("b")),
            Some(Ordering::Less)
        );
    }
}
