//! brush-line: line chart model and SVG renderer with slice hit-testing,
//! down-sampling and a drag-to-filter brush.
//!
//! The host owns the event loop and forwards pointer events; the crate owns
//! the chart model, the interaction state machine and the SVG output.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{LineChart, LineChartConfig};
pub use error::{ChartError, ChartResult};
