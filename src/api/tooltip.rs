use serde::{Deserialize, Serialize};

use crate::core::{ScaledPoint, SliceAxis};
use crate::render::{Color, Renderer};

use super::LineChart;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointTooltip {
    pub point_id: String,
    pub serie_id: String,
    pub x: String,
    pub y: String,
    pub color: Color,
}

impl From<&ScaledPoint> for PointTooltip {
    fn from(point: &ScaledPoint) -> Self {
        Self {
            point_id: point.id.clone(),
            serie_id: point.serie_id.clone(),
            x: point.data.x_formatted.clone(),
            y: point.data.y_formatted.clone(),
            color: point.serie_color,
        }
    }
}

/// Tooltip content for the hovered point or slice. Placement is left to the
/// host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Tooltip {
    Point(PointTooltip),
    Slice { axis: SliceAxis, rows: Vec<PointTooltip> },
}

impl<R: Renderer> LineChart<R> {
    #[must_use]
    pub fn tooltip(&self) -> Option<Tooltip> {
        if !self.config.is_interactive {
            return None;
        }
        if let (Some(axis), Some(slice)) = (self.config.enable_slices, self.current_slice()) {
            return Some(Tooltip::Slice {
                axis,
                rows: slice.points.iter().map(PointTooltip::from).collect(),
            });
        }
        self.current_point()
            .map(|point| Tooltip::Point(PointTooltip::from(point)))
    }
}
