use tracing::debug;

use crate::core::{Dimensions, Series};
use crate::error::ChartResult;
use crate::interaction::{BrushState, InteractionState};
use crate::render::{Layer, Renderer};

use super::{ChartHandlers, LineChartConfig, LineModel};

/// Line chart facade consumed by host applications.
///
/// `LineChart` owns the original data, the brushed subset, the derived
/// model and the interaction state, and hands a finished SVG tree to its
/// renderer on [`LineChart::render`].
pub struct LineChart<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: LineChartConfig,
    pub(super) dimensions: Dimensions,
    pub(super) original_data: Vec<Series>,
    /// Brush-filtered subset of the original data; `None` shows everything.
    pub(super) brushed_data: Option<Vec<Series>>,
    pub(super) model: LineModel,
    pub(super) interaction: InteractionState,
    pub(super) brush: BrushState,
    pub(super) handlers: ChartHandlers,
    pub(super) layers: Vec<Layer>,
}

impl<R: Renderer> LineChart<R> {
    pub fn new(renderer: R, config: LineChartConfig) -> ChartResult<Self> {
        let dimensions = config.validate()?;
        let model = LineModel::build(&[], &config, dimensions)?;
        let layers = config.layers.iter().copied().map(Layer::Builtin).collect();
        debug!(
            width = config.viewport.width,
            height = config.viewport.height,
            "line chart created"
        );

        Ok(Self {
            renderer,
            config,
            dimensions,
            original_data: Vec::new(),
            brushed_data: None,
            model,
            interaction: InteractionState::default(),
            brush: BrushState::default(),
            handlers: ChartHandlers::default(),
            layers,
        })
    }

    #[must_use]
    pub fn config(&self) -> &LineChartConfig {
        &self.config
    }

    /// Replaces the configuration and rebuilds the model.
    ///
    /// The layer list is reset to `config.layers` only when that list
    /// changed, so custom layers survive unrelated config updates.
    pub fn set_config(&mut self, config: LineChartConfig) -> ChartResult<()> {
        let dimensions = config.validate()?;
        let model = LineModel::build(self.active_data(), &config, dimensions)?;
        if config.layers != self.config.layers {
            self.layers = config.layers.iter().copied().map(Layer::Builtin).collect();
        }
        debug!(
            width = config.viewport.width,
            height = config.viewport.height,
            "line chart config replaced"
        );
        self.config = config;
        self.dimensions = dimensions;
        self.model = model;
        self.interaction.clear();
        if !self.config.brush_active() {
            self.brush.reset();
        }
        Ok(())
    }

    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    #[must_use]
    pub fn model(&self) -> &LineModel {
        &self.model
    }

    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Replaces the layer list, built-in and custom entries alike.
    pub fn set_layers(&mut self, layers: Vec<Layer>) {
        self.layers = layers;
    }

    pub fn set_handlers(&mut self, handlers: ChartHandlers) {
        self.handlers = handlers;
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let document = self.build_document();
        self.renderer.render(&document)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub(super) fn active_data(&self) -> &[Series] {
        self.brushed_data.as_deref().unwrap_or(&self.original_data)
    }
}
