use tracing::{debug, warn};

use crate::core::{DatumValue, Series, series_in_value_window};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{BrushAnchor, BrushRect, BrushResolution, BrushSelection, BrushState};
use crate::render::Renderer;

use super::LineChart;

impl<R: Renderer> LineChart<R> {
    #[must_use]
    pub fn brush_state(&self) -> &BrushState {
        &self.brush
    }

    /// Highlight rectangle of the drag in progress, if any.
    #[must_use]
    pub fn brush_rectangle(&self) -> Option<BrushRect> {
        if self.config.brush_active() {
            self.brush.rectangle()
        } else {
            None
        }
    }

    /// Filters every series to `[start, end]` on the slice axis, as a
    /// completed drag would.
    pub fn brush_to_range(&mut self, start: &DatumValue, end: &DatumValue) -> ChartResult<()> {
        if self.config.stacked_y_slices() {
            return Err(ChartError::InvalidConfig(
                "brushing is unavailable on stacked y slices".to_owned(),
            ));
        }
        let (axis, spec) = self.config.slice_scale();
        let (Some(start), Some(end)) = (spec.parse(start), spec.parse(end)) else {
            return Err(ChartError::InvalidData(format!(
                "brush range `{start}`..`{end}` does not match the {axis:?} scale"
            )));
        };
        self.brush.reset();
        self.apply_brush_resolution(BrushResolution::Filter { start, end })
    }

    /// Restores the original data and clears the brush.
    pub fn reset_brush(&mut self) -> ChartResult<()> {
        debug!("brush reset");
        self.brush.reset();
        self.brushed_data = None;
        self.rebuild_model()?;
        (self.handlers.on_brush_change)(&self.original_data);
        Ok(())
    }

    pub(super) fn brush_anchor(&self, index: usize) -> Option<BrushAnchor> {
        let axis = self.config.enable_slices?;
        self.model
            .slices
            .get(index)
            .map(|slice| BrushAnchor::from_slice(slice, axis))
    }

    pub(super) fn release_brush(&mut self) -> ChartResult<()> {
        if !self.config.brush_active() {
            return Ok(());
        }
        match self.brush.release() {
            Some(selection) => self.finalize_brush(&selection),
            None => Ok(()),
        }
    }

    pub(super) fn finalize_brush(&mut self, selection: &BrushSelection) -> ChartResult<()> {
        self.apply_brush_resolution(selection.resolve())
    }

    fn apply_brush_resolution(&mut self, resolution: BrushResolution) -> ChartResult<()> {
        match resolution {
            BrushResolution::Restore => {
                debug!("zero-width brush restores original data");
                self.brushed_data = None;
                self.rebuild_model()?;
                (self.handlers.on_brush_change)(&self.original_data);
            }
            BrushResolution::Filter { start, end } => {
                let (axis, spec) = self.config.slice_scale();
                let filtered =
                    series_in_value_window(&self.original_data, axis, spec, &start, &end);
                let kept: usize = filtered.iter().map(Series::len).sum();
                if kept == 0 {
                    warn!(%start, %end, "brush filter matched no data");
                } else {
                    debug!(%start, %end, kept, "brush filter applied");
                }
                self.brushed_data = Some(filtered);
                self.rebuild_model()?;
                if let Some(filtered) = &self.brushed_data {
                    (self.handlers.on_brush_change)(filtered);
                }
            }
        }
        Ok(())
    }
}
