use std::fmt;

use serde::{Deserialize, Serialize};

use crate::extensions::CustomLayer;

/// Built-in chart layers, in the order they can be stacked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    Grid,
    Markers,
    Axes,
    Areas,
    Crosshair,
    Lines,
    Points,
    Slices,
    Mesh,
    Legends,
    Brush,
}

impl LayerKind {
    #[must_use]
    pub fn canonical_order() -> Vec<Self> {
        vec![
            Self::Grid,
            Self::Markers,
            Self::Axes,
            Self::Areas,
            Self::Crosshair,
            Self::Lines,
            Self::Points,
            Self::Slices,
            Self::Mesh,
            Self::Legends,
            Self::Brush,
        ]
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::Markers => "markers",
            Self::Axes => "axes",
            Self::Areas => "areas",
            Self::Crosshair => "crosshair",
            Self::Lines => "lines",
            Self::Points => "points",
            Self::Slices => "slices",
            Self::Mesh => "mesh",
            Self::Legends => "legends",
            Self::Brush => "brush",
        }
    }
}

/// One entry of the chart layer list: a built-in layer or a caller-supplied
/// render callback.
pub enum Layer {
    Builtin(LayerKind),
    Custom(CustomLayer),
}

impl Layer {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Builtin(kind) => kind.name(),
            Self::Custom(layer) => layer.id(),
        }
    }
}

impl fmt::Debug for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin(kind) => f.debug_tuple("Builtin").field(kind).finish(),
            Self::Custom(layer) => f.debug_tuple("Custom").field(&layer.id()).finish(),
        }
    }
}

impl From<LayerKind> for Layer {
    fn from(kind: LayerKind) -> Self {
        Self::Builtin(kind)
    }
}

impl From<CustomLayer> for Layer {
    fn from(layer: CustomLayer) -> Self {
        Self::Custom(layer)
    }
}
