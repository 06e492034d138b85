use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{DatumValue, Slice, SliceAxis};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrushPhase {
    #[default]
    Idle,
    Dragging,
}

/// Slice snapshot captured when the pointer goes down, moves or goes up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrushAnchor {
    pub axis: SliceAxis,
    /// Slice coordinate on `axis`.
    pub coordinate: f64,
    pub x0: f64,
    pub y0: f64,
    pub width: f64,
    pub height: f64,
    /// Data value of the slice's first point on `axis`.
    pub value: Option<DatumValue>,
    /// Id of the slice's first point.
    pub point_id: Option<String>,
}

impl BrushAnchor {
    #[must_use]
    pub fn from_slice(slice: &Slice, axis: SliceAxis) -> Self {
        let first = slice.first_point();
        Self {
            axis,
            coordinate: slice.coordinate(axis),
            x0: slice.x0,
            y0: slice.y0,
            width: slice.width,
            height: slice.height,
            value: first.map(|point| point.data.value_on(axis).clone()),
            point_id: first.map(|point| point.id.clone()),
        }
    }
}

/// Highlight rectangle drawn while a drag is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrushRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Start/end pair captured by a completed drag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrushSelection {
    pub start: BrushAnchor,
    pub end: BrushAnchor,
}

/// What a completed drag does to the displayed data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BrushResolution {
    /// Zero-width drag: show the original data again.
    Restore,
    /// Keep data whose coordinate lies in `[start, end]`.
    Filter { start: DatumValue, end: DatumValue },
}

impl BrushSelection {
    /// Anchors ordered by coordinate ascending.
    #[must_use]
    pub fn ordered(&self) -> (&BrushAnchor, &BrushAnchor) {
        if self.end.coordinate < self.start.coordinate {
            (&self.end, &self.start)
        } else {
            (&self.start, &self.end)
        }
    }

    #[must_use]
    pub fn resolve(&self) -> BrushResolution {
        let (low, high) = self.ordered();
        if low.point_id == high.point_id {
            return BrushResolution::Restore;
        }
        match (&low.value, &high.value) {
            (Some(start), Some(end)) => BrushResolution::Filter {
                start: start.clone(),
                end: end.clone(),
            },
            _ => BrushResolution::Restore,
        }
    }
}

/// Drag-to-filter state machine driven by slice pointer events.
///
/// `Idle --down--> Dragging --up--> Idle`. A pointer-down while dragging
/// restarts the sequence from the new slice.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BrushState {
    phase: BrushPhase,
    start: Option<BrushAnchor>,
    end: Option<BrushAnchor>,
}

impl BrushState {
    #[must_use]
    pub fn phase(&self) -> BrushPhase {
        self.phase
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.phase == BrushPhase::Dragging
    }

    #[must_use]
    pub fn start(&self) -> Option<&BrushAnchor> {
        self.start.as_ref()
    }

    #[must_use]
    pub fn end(&self) -> Option<&BrushAnchor> {
        self.end.as_ref()
    }

    pub fn pointer_down(&mut self, anchor: BrushAnchor) {
        trace!(coordinate = anchor.coordinate, "brush start");
        self.start = Some(anchor);
        self.end = None;
        self.phase = BrushPhase::Dragging;
    }

    /// Updates the provisional end; ignored unless dragging.
    pub fn pointer_move(&mut self, anchor: BrushAnchor) {
        if self.phase == BrushPhase::Dragging {
            self.end = Some(anchor);
        }
    }

    /// Ends the drag and returns the completed selection.
    ///
    /// Returns `None` (and changes nothing) when no drag is in progress.
    /// Start and end are cleared once the selection is handed out.
    pub fn pointer_up(&mut self, anchor: BrushAnchor) -> Option<BrushSelection> {
        if self.phase != BrushPhase::Dragging {
            trace!("pointer up without brush drag ignored");
            return None;
        }
        self.phase = BrushPhase::Idle;
        self.end = None;
        let start = self.start.take()?;
        trace!(
            start = start.coordinate,
            end = anchor.coordinate,
            "brush finalized"
        );
        Some(BrushSelection { start, end: anchor })
    }

    /// Ends the drag at the provisional end, or at the start when the drag
    /// never reached another slice.
    pub fn release(&mut self) -> Option<BrushSelection> {
        if self.phase != BrushPhase::Dragging {
            return None;
        }
        let anchor = self.end.clone().or_else(|| self.start.clone())?;
        self.pointer_up(anchor)
    }

    /// Highlight rectangle, present only while dragging with a provisional end.
    #[must_use]
    pub fn rectangle(&self) -> Option<BrushRect> {
        if self.phase != BrushPhase::Dragging {
            return None;
        }
        let (start, end) = (self.start.as_ref()?, self.end.as_ref()?);
        let rect = match start.axis {
            SliceAxis::X => BrushRect {
                x: start.coordinate.min(end.coordinate),
                y: 0.0,
                width: (start.coordinate - end.coordinate).abs(),
                height: start.height,
            },
            SliceAxis::Y => BrushRect {
                x: 0.0,
                y: start.coordinate.min(end.coordinate),
                width: start.width,
                height: (start.coordinate - end.coordinate).abs(),
            },
        };
        Some(rect)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
