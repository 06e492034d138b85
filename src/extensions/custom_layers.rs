use std::fmt;

use crate::api::LineChartConfig;
use crate::core::{AreaGenerator, ComputedScale, ComputedSerie, LineGenerator, ScaledPoint, Slice};
use crate::render::SvgElement;

/// Read-only view handed to custom layer callbacks.
#[derive(Debug, Clone, Copy)]
pub struct LayerContext<'a> {
    pub inner_width: f64,
    pub inner_height: f64,
    pub series: &'a [ComputedSerie],
    pub slices: &'a [Slice],
    pub points: &'a [ScaledPoint],
    pub x_scale: &'a ComputedScale,
    pub y_scale: &'a ComputedScale,
    pub line_generator: LineGenerator,
    pub area_generator: AreaGenerator,
    pub config: &'a LineChartConfig,
}

type RenderLayerFn = Box<dyn Fn(&LayerContext<'_>) -> SvgElement>;

/// Caller-supplied layer drawn in its slot of the layer list.
pub struct CustomLayer {
    id: String,
    render: RenderLayerFn,
}

impl CustomLayer {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        render: impl Fn(&LayerContext<'_>) -> SvgElement + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            render: Box::new(render),
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn render(&self, context: &LayerContext<'_>) -> SvgElement {
        (self.render)(context)
    }
}

impl fmt::Debug for CustomLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomLayer").field("id", &self.id).finish()
    }
}
