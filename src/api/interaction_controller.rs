use ordered_float::OrderedFloat;
use tracing::trace;

use crate::core::{ScaledPoint, Slice, slice_index_at};
use crate::error::{ChartError, ChartResult};
use crate::interaction::InteractionState;
use crate::render::Renderer;

use super::{LineChart, PointerPosition};

impl<R: Renderer> LineChart<R> {
    #[must_use]
    pub fn interaction_state(&self) -> InteractionState {
        self.interaction
    }

    #[must_use]
    pub fn current_slice(&self) -> Option<&Slice> {
        self.interaction
            .current_slice()
            .and_then(|index| self.model.slices.get(index))
    }

    #[must_use]
    pub fn current_point(&self) -> Option<&ScaledPoint> {
        self.interaction
            .current_point()
            .and_then(|index| self.model.points.get(index))
    }

    /// Handles pointer movement; `(x, y)` is relative to the outer SVG.
    ///
    /// Routed to slices when they are enabled, otherwise to the mesh.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> ChartResult<()> {
        let (x, y) = self.to_inner(x, y)?;
        if !self.config.is_interactive {
            return Ok(());
        }
        self.interaction.on_pointer_move(x, y);
        if self.config.enable_slices.is_some() {
            match slice_index_at(&self.model.slices, x, y) {
                Some(index) => self.slice_pointer_move(index)?,
                None => self.slice_pointer_leave(),
            }
        } else if self.config.use_mesh {
            self.mesh_pointer_move(PointerPosition { x, y });
        }
        Ok(())
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) -> ChartResult<()> {
        let (x, y) = self.to_inner(x, y)?;
        if !self.config.is_interactive {
            return Ok(());
        }
        match slice_index_at(&self.model.slices, x, y) {
            Some(index) => self.slice_pointer_down(index),
            None => Ok(()),
        }
    }

    /// Ends a brush drag. A release outside every slice ends it at the last
    /// slice the drag reached.
    pub fn pointer_up(&mut self, x: f64, y: f64) -> ChartResult<()> {
        let (x, y) = self.to_inner(x, y)?;
        if !self.config.is_interactive {
            return Ok(());
        }
        match slice_index_at(&self.model.slices, x, y) {
            Some(index) => self.slice_pointer_up(index),
            None => self.release_brush(),
        }
    }

    /// Marks the pointer as outside the chart. An in-progress brush drag is
    /// kept.
    pub fn pointer_leave(&mut self) {
        if let (Some(point), Some((x, y))) = (
            self.interaction
                .current_point()
                .and_then(|index| self.model.points.get(index)),
            self.interaction.cursor(),
        ) {
            (self.handlers.on_mouse_leave)(point, PointerPosition { x, y });
        }
        self.interaction.clear();
    }

    /// Clicks the mesh point nearest to `(x, y)`.
    pub fn click(&mut self, x: f64, y: f64) -> ChartResult<()> {
        let (x, y) = self.to_inner(x, y)?;
        if !self.mesh_enabled() {
            return Ok(());
        }
        let position = PointerPosition { x, y };
        if let Some(point) = self
            .mesh_point_at(position)
            .and_then(|index| self.model.points.get(index))
        {
            (self.handlers.on_click)(point, position);
        }
        Ok(())
    }

    pub fn slice_pointer_enter(&mut self, index: usize) -> ChartResult<()> {
        self.check_slice_index(index)?;
        self.interaction.set_current_slice(Some(index));
        Ok(())
    }

    /// Hover over slice `index`; extends the brush while dragging.
    pub fn slice_pointer_move(&mut self, index: usize) -> ChartResult<()> {
        self.check_slice_index(index)?;
        self.interaction.set_current_slice(Some(index));
        if self.config.brush_active() && self.brush.is_dragging() {
            if let Some(anchor) = self.brush_anchor(index) {
                self.brush.pointer_move(anchor);
            }
        }
        Ok(())
    }

    pub fn slice_pointer_leave(&mut self) {
        self.interaction.set_current_slice(None);
    }

    /// Starts (or restarts) a brush drag at slice `index`.
    pub fn slice_pointer_down(&mut self, index: usize) -> ChartResult<()> {
        self.check_slice_index(index)?;
        if !self.config.brush_active() {
            return Ok(());
        }
        if let Some(anchor) = self.brush_anchor(index) {
            self.brush.pointer_down(anchor);
        }
        Ok(())
    }

    /// Ends a brush drag at slice `index` and applies the selection.
    pub fn slice_pointer_up(&mut self, index: usize) -> ChartResult<()> {
        self.check_slice_index(index)?;
        if !self.config.brush_active() {
            return Ok(());
        }
        let Some(anchor) = self.brush_anchor(index) else {
            return Ok(());
        };
        match self.brush.pointer_up(anchor) {
            Some(selection) => self.finalize_brush(&selection),
            None => Ok(()),
        }
    }

    fn mesh_enabled(&self) -> bool {
        self.config.is_interactive && self.config.use_mesh && self.config.enable_slices.is_none()
    }

    fn mesh_pointer_move(&mut self, position: PointerPosition) {
        let next = self.mesh_point_at(position);
        let previous = self.interaction.current_point();
        if previous != next {
            trace!(?previous, ?next, "mesh current point changed");
            if let Some(point) = previous.and_then(|index| self.model.points.get(index)) {
                (self.handlers.on_mouse_leave)(point, position);
            }
            if let Some(point) = next.and_then(|index| self.model.points.get(index)) {
                (self.handlers.on_mouse_enter)(point, position);
            }
            self.interaction.set_current_point(next);
        }
        if let Some(point) = next.and_then(|index| self.model.points.get(index)) {
            (self.handlers.on_mouse_move)(point, position);
        }
    }

    /// Nearest point by Euclidean distance, for positions inside the inner
    /// area.
    fn mesh_point_at(&self, position: PointerPosition) -> Option<usize> {
        let inside = (0.0..=self.dimensions.inner_width).contains(&position.x)
            && (0.0..=self.dimensions.inner_height).contains(&position.y);
        if !inside {
            return None;
        }
        self.model
            .points
            .iter()
            .enumerate()
            .min_by_key(|(_, point)| {
                OrderedFloat((point.x - position.x).powi(2) + (point.y - position.y).powi(2))
            })
            .map(|(index, _)| index)
    }

    fn check_slice_index(&self, index: usize) -> ChartResult<()> {
        if index < self.model.slices.len() {
            Ok(())
        } else {
            Err(ChartError::InvalidData(format!(
                "slice index {index} out of range ({} slices)",
                self.model.slices.len()
            )))
        }
    }

    fn to_inner(&self, x: f64, y: f64) -> ChartResult<(f64, f64)> {
        if !x.is_finite() || !y.is_finite() {
            return Err(ChartError::InvalidData(
                "pointer position must be finite".to_owned(),
            ));
        }
        let margin = self.dimensions.margin;
        Ok((x - margin.left, y - margin.top))
    }
}
