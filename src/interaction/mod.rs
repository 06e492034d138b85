mod brush;

use serde::{Deserialize, Serialize};

use crate::core::SliceAxis;

pub use brush::{BrushAnchor, BrushPhase, BrushRect, BrushResolution, BrushSelection, BrushState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrosshairType {
    #[default]
    Cross,
    /// Vertical line only.
    X,
    /// Horizontal line only.
    Y,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl From<SliceAxis> for CrosshairType {
    fn from(axis: SliceAxis) -> Self {
        match axis {
            SliceAxis::X => Self::X,
            SliceAxis::Y => Self::Y,
        }
    }
}

/// One crosshair segment in inner-area coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GuideLine {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl CrosshairType {
    /// Guide lines through `(x, y)` clipped to a `width` x `height` area.
    ///
    /// Corner variants draw only the two segments between the point and the
    /// named corner.
    #[must_use]
    pub fn guide_lines(self, x: f64, y: f64, width: f64, height: f64) -> Vec<GuideLine> {
        let vertical = |y1: f64, y2: f64| GuideLine { x1: x, y1, x2: x, y2 };
        let horizontal = |x1: f64, x2: f64| GuideLine { x1, y1: y, x2, y2: y };
        match self {
            Self::Cross => vec![vertical(0.0, height), horizontal(0.0, width)],
            Self::X => vec![vertical(0.0, height)],
            Self::Y => vec![horizontal(0.0, width)],
            Self::TopLeft => vec![vertical(0.0, y), horizontal(0.0, x)],
            Self::TopRight => vec![vertical(0.0, y), horizontal(x, width)],
            Self::BottomLeft => vec![vertical(y, height), horizontal(0.0, x)],
            Self::BottomRight => vec![vertical(y, height), horizontal(x, width)],
        }
    }
}

/// Hover state owned by the chart.
///
/// Indices point into the current model's slices/points and are cleared
/// whenever the model is rebuilt.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InteractionState {
    current_slice: Option<usize>,
    current_point: Option<usize>,
    cursor: Option<(f64, f64)>,
}

impl InteractionState {
    #[must_use]
    pub fn current_slice(self) -> Option<usize> {
        self.current_slice
    }

    #[must_use]
    pub fn current_point(self) -> Option<usize> {
        self.current_point
    }

    /// Last pointer position inside the inner area.
    #[must_use]
    pub fn cursor(self) -> Option<(f64, f64)> {
        self.cursor
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.cursor = Some((x, y));
    }

    pub fn set_current_slice(&mut self, index: Option<usize>) {
        self.current_slice = index;
    }

    pub fn set_current_point(&mut self, index: Option<usize>) {
        self.current_point = index;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::{CrosshairType, GuideLine};

    #[test]
    fn bottom_right_crosshair_runs_to_the_corner() {
        let lines = CrosshairType::BottomRight.guide_lines(10.0, 20.0, 100.0, 50.0);
        assert_eq!(
            lines,
            vec![
                GuideLine { x1: 10.0, y1: 20.0, x2: 10.0, y2: 50.0 },
                GuideLine { x1: 10.0, y1: 20.0, x2: 100.0, y2: 20.0 },
            ]
        );
    }
}
