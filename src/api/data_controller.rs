use tracing::debug;

use crate::core::{Series, needs_downsampling};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::{LineChart, LineModel};

impl<R: Renderer> LineChart<R> {
    /// Replaces the series data. Clears any brush filter.
    pub fn set_data(&mut self, data: Vec<Series>) -> ChartResult<()> {
        let point_count: usize = data.iter().map(Series::len).sum();
        debug!(
            series = data.len(),
            point_count,
            downsampled = needs_downsampling(&data, self.config.max_number_of_points),
            "set line data"
        );
        self.original_data = data;
        self.brushed_data = None;
        self.brush.reset();
        self.rebuild_model()
    }

    /// Parses `[{"id": ..., "data": [...]}]` and replaces the series data.
    pub fn set_data_json(&mut self, json: &str) -> ChartResult<()> {
        self.set_data(crate::core::series_from_json_str(json)?)
    }

    /// Input data as supplied, never modified by brushing.
    #[must_use]
    pub fn original_data(&self) -> &[Series] {
        &self.original_data
    }

    /// Data currently shown (brushed or original, after down-sampling).
    #[must_use]
    pub fn displayed_data(&self) -> &[Series] {
        &self.model.display_data
    }

    #[must_use]
    pub fn is_brushed(&self) -> bool {
        self.brushed_data.is_some()
    }

    pub(super) fn rebuild_model(&mut self) -> ChartResult<()> {
        self.model = LineModel::build(self.active_data(), &self.config, self.dimensions)?;
        self.interaction.clear();
        Ok(())
    }
}
