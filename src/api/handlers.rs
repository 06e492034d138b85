use std::fmt;

use crate::core::{ScaledPoint, Series};

/// Pointer position in inner-area coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

pub type PointHandler = Box<dyn FnMut(&ScaledPoint, PointerPosition)>;
pub type BrushChangeHandler = Box<dyn FnMut(&[Series])>;

/// Host callbacks. Every handler defaults to a no-op.
pub struct ChartHandlers {
    pub(crate) on_mouse_enter: PointHandler,
    pub(crate) on_mouse_move: PointHandler,
    pub(crate) on_mouse_leave: PointHandler,
    pub(crate) on_click: PointHandler,
    pub(crate) on_brush_change: BrushChangeHandler,
}

impl Default for ChartHandlers {
    fn default() -> Self {
        Self {
            on_mouse_enter: Box::new(|_, _| {}),
            on_mouse_move: Box::new(|_, _| {}),
            on_mouse_leave: Box::new(|_, _| {}),
            on_click: Box::new(|_, _| {}),
            on_brush_change: Box::new(|_| {}),
        }
    }
}

impl ChartHandlers {
    #[must_use]
    pub fn with_on_mouse_enter(
        mut self,
        handler: impl FnMut(&ScaledPoint, PointerPosition) + 'static,
    ) -> Self {
        self.on_mouse_enter = Box::new(handler);
        self
    }

    #[must_use]
    pub fn with_on_mouse_move(
        mut self,
        handler: impl FnMut(&ScaledPoint, PointerPosition) + 'static,
    ) -> Self {
        self.on_mouse_move = Box::new(handler);
        self
    }

    #[must_use]
    pub fn with_on_mouse_leave(
        mut self,
        handler: impl FnMut(&ScaledPoint, PointerPosition) + 'static,
    ) -> Self {
        self.on_mouse_leave = Box::new(handler);
        self
    }

    #[must_use]
    pub fn with_on_click(
        mut self,
        handler: impl FnMut(&ScaledPoint, PointerPosition) + 'static,
    ) -> Self {
        self.on_click = Box::new(handler);
        self
    }

    /// Receives the filtered series after a brush drag, or the original
    /// series after a restore or reset.
    #[must_use]
    pub fn with_on_brush_change(mut self, handler: impl FnMut(&[Series]) + 'static) -> Self {
        self.on_brush_change = Box::new(handler);
        self
    }
}

impl fmt::Debug for ChartHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartHandlers").finish_non_exhaustive()
    }
}
