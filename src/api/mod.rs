mod axis_builder;
mod brush_controller;
mod chart;
mod chart_model;
mod config;
mod data_controller;
mod handlers;
mod interaction_controller;
mod legend_builder;
mod render_coordinator;
mod tooltip;

pub use chart::LineChart;
pub use chart_model::LineModel;
pub use config::{
    AxisConfig, LegendAnchor, LegendConfig, LegendDirection, LegendItem, LineChartConfig,
    ThemeConfig,
};
pub use handlers::{BrushChangeHandler, ChartHandlers, PointHandler, PointerPosition};
pub use tooltip::{PointTooltip, Tooltip};
