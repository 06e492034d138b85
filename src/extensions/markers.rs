use serde::{Deserialize, Serialize};

use crate::core::{ComputedScale, DatumValue, ScaleSpec};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

const LEGEND_OFFSET_PX: f64 = 14.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerAxis {
    /// Vertical rule at an x value.
    X,
    /// Horizontal rule at a y value.
    Y,
}

/// Rule line across the inner area at a data value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartesianMarker {
    pub axis: MarkerAxis,
    pub value: DatumValue,
    #[serde(default)]
    pub legend: Option<String>,
    #[serde(default = "default_line_color")]
    pub line_color: Color,
    #[serde(default = "default_line_width")]
    pub line_width: f64,
    #[serde(default)]
    pub line_dash: Option<String>,
}

impl CartesianMarker {
    #[must_use]
    pub fn new(axis: MarkerAxis, value: impl Into<DatumValue>) -> Self {
        Self {
            axis,
            value: value.into(),
            legend: None,
            line_color: default_line_color(),
            line_width: default_line_width(),
            line_dash: None,
        }
    }

    #[must_use]
    pub fn with_legend(mut self, legend: impl Into<String>) -> Self {
        self.legend = Some(legend.into());
        self
    }

    #[must_use]
    pub fn with_line_color(mut self, color: Color) -> Self {
        self.line_color = color;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.line_width.is_finite() || self.line_width < 0.0 {
            return Err(ChartError::InvalidConfig(
                "marker line width must be finite and >= 0".to_owned(),
            ));
        }
        self.line_color.validate()
    }
}

fn default_line_color() -> Color {
    Color::BLACK
}

fn default_line_width() -> f64 {
    1.0
}

/// Marker resolved to inner-area pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedMarker {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub legend_x: f64,
    pub legend_y: f64,
    pub legend_anchor: &'static str,
    pub marker: CartesianMarker,
}

/// Scales every marker onto a `width` x `height` area.
///
/// Markers whose value cannot be parsed or mapped by their axis' scale are
/// skipped.
#[must_use]
pub fn place_markers(
    markers: &[CartesianMarker],
    (x_spec, x_scale): (&ScaleSpec, &ComputedScale),
    (y_spec, y_scale): (&ScaleSpec, &ComputedScale),
    width: f64,
    height: f64,
) -> Vec<PlacedMarker> {
    markers
        .iter()
        .filter_map(|marker| {
            let placed = match marker.axis {
                MarkerAxis::X => {
                    let x = x_scale.map(&x_spec.parse(&marker.value)?)?;
                    PlacedMarker {
                        x1: x,
                        y1: 0.0,
                        x2: x,
                        y2: height,
                        legend_x: x + LEGEND_OFFSET_PX,
                        legend_y: LEGEND_OFFSET_PX,
                        legend_anchor: "start",
                        marker: marker.clone(),
                    }
                }
                MarkerAxis::Y => {
                    let y = y_scale.map(&y_spec.parse(&marker.value)?)?;
                    PlacedMarker {
                        x1: 0.0,
                        y1: y,
                        x2: width,
                        y2: y,
                        legend_x: width - LEGEND_OFFSET_PX,
                        legend_y: y - LEGEND_OFFSET_PX,
                        legend_anchor: "end",
                        marker: marker.clone(),
                    }
                }
            };
            placed.x1.is_finite().then_some(placed)
        })
        .collect()
}
