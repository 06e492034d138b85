mod layer_stack;
mod null_renderer;
mod primitives;
mod svg;
mod svg_renderer;

pub use layer_stack::{Layer, LayerKind};
pub use null_renderer::NullRenderer;
pub use primitives::{Color, ColorScheme, InheritedColor};
pub use svg::{SvgElement, SvgNode};
pub use svg_renderer::SvgStringRenderer;

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic SVG tree so drawing
/// code stays isolated from chart domain and interaction logic.
pub trait Renderer {
    fn render(&mut self, document: &SvgElement) -> ChartResult<()>;
}
