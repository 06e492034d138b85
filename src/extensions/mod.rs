//! Optional pieces layered on top of the core chart: markers and custom
//! render callbacks.

pub mod custom_layers;
pub mod markers;

pub use custom_layers::{CustomLayer, LayerContext};
pub use markers::{CartesianMarker, MarkerAxis, PlacedMarker, place_markers};
