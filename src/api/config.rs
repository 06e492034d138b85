use serde::{Deserialize, Serialize};

use crate::core::{
    DatumValue, Dimensions, LineCurve, Margin, ScaleSpec, SliceAxis, ValueFormat, Viewport,
};
use crate::error::{ChartError, ChartResult};
use crate::extensions::CartesianMarker;
use crate::interaction::CrosshairType;
use crate::render::{Color, ColorScheme, InheritedColor, LayerKind};

/// One axis of the chart (top, right, bottom or left).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisConfig {
    #[serde(default = "default_tick_size")]
    pub tick_size: f64,
    #[serde(default = "default_tick_padding")]
    pub tick_padding: f64,
    /// Tick label rotation in degrees.
    #[serde(default)]
    pub tick_rotation: f64,
    /// Approximate tick count; `None` uses the scale default.
    #[serde(default)]
    pub tick_count: Option<usize>,
    /// Overrides the chart's value format for this axis.
    #[serde(default)]
    pub format: Option<ValueFormat>,
    #[serde(default)]
    pub legend: Option<String>,
    #[serde(default)]
    pub legend_offset: f64,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            tick_size: default_tick_size(),
            tick_padding: default_tick_padding(),
            tick_rotation: 0.0,
            tick_count: None,
            format: None,
            legend: None,
            legend_offset: 0.0,
        }
    }
}

impl AxisConfig {
    #[must_use]
    pub fn with_legend(mut self, legend: impl Into<String>, offset: f64) -> Self {
        self.legend = Some(legend.into());
        self.legend_offset = offset;
        self
    }

    fn validate(&self, side: &str) -> ChartResult<()> {
        for (name, value) in [
            ("tick_size", self.tick_size),
            ("tick_padding", self.tick_padding),
            ("tick_rotation", self.tick_rotation),
            ("legend_offset", self.legend_offset),
        ] {
            if !value.is_finite() {
                return Err(ChartError::InvalidConfig(format!(
                    "axis_{side}.{name} must be finite"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendAnchor {
    TopLeft,
    Top,
    TopRight,
    Right,
    #[default]
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendDirection {
    Row,
    #[default]
    Column,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendItem {
    pub id: String,
    pub label: String,
    pub color: Color,
}

/// Box legend anchored inside the inner area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendConfig {
    #[serde(default)]
    pub anchor: LegendAnchor,
    #[serde(default)]
    pub direction: LegendDirection,
    #[serde(default)]
    pub translate_x: f64,
    #[serde(default)]
    pub translate_y: f64,
    #[serde(default = "default_legend_item_width")]
    pub item_width: f64,
    #[serde(default = "default_legend_item_height")]
    pub item_height: f64,
    #[serde(default)]
    pub items_spacing: f64,
    #[serde(default = "default_legend_symbol_size")]
    pub symbol_size: f64,
    /// Explicit items; series (last first) when absent.
    #[serde(default)]
    pub data: Option<Vec<LegendItem>>,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            anchor: LegendAnchor::default(),
            direction: LegendDirection::default(),
            translate_x: 0.0,
            translate_y: 0.0,
            item_width: default_legend_item_width(),
            item_height: default_legend_item_height(),
            items_spacing: 0.0,
            symbol_size: default_legend_symbol_size(),
            data: None,
        }
    }
}

impl LegendConfig {
    fn validate(&self) -> ChartResult<()> {
        for (name, value) in [
            ("item_width", self.item_width),
            ("item_height", self.item_height),
            ("items_spacing", self.items_spacing),
            ("symbol_size", self.symbol_size),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "legend {name} must be finite and >= 0"
                )));
            }
        }
        if !self.translate_x.is_finite() || !self.translate_y.is_finite() {
            return Err(ChartError::InvalidConfig(
                "legend translation must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default = "default_background")]
    pub background: Color,
    #[serde(default = "default_text_color")]
    pub text_color: Color,
    #[serde(default = "default_font_size")]
    pub font_size: f64,
    #[serde(default = "default_axis_color")]
    pub axis_color: Color,
    #[serde(default = "default_grid_color")]
    pub grid_color: Color,
    #[serde(default = "default_crosshair_color")]
    pub crosshair_color: Color,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background: default_background(),
            text_color: default_text_color(),
            font_size: default_font_size(),
            axis_color: default_axis_color(),
            grid_color: default_grid_color(),
            crosshair_color: default_crosshair_color(),
        }
    }
}

/// Public line chart configuration.
///
/// Every optional field carries a serde default so a JSON document only needs
/// the viewport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChartConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub margin: Margin,

    #[serde(default = "default_x_scale")]
    pub x_scale: ScaleSpec,
    #[serde(default)]
    pub x_format: ValueFormat,
    #[serde(default = "default_y_scale")]
    pub y_scale: ScaleSpec,
    #[serde(default)]
    pub y_format: ValueFormat,

    #[serde(default = "LayerKind::canonical_order")]
    pub layers: Vec<LayerKind>,
    #[serde(default)]
    pub curve: LineCurve,
    #[serde(default)]
    pub area_baseline_value: f64,
    #[serde(default)]
    pub colors: ColorScheme,

    #[serde(default)]
    pub axis_top: Option<AxisConfig>,
    #[serde(default)]
    pub axis_right: Option<AxisConfig>,
    #[serde(default = "default_axis")]
    pub axis_bottom: Option<AxisConfig>,
    #[serde(default = "default_axis")]
    pub axis_left: Option<AxisConfig>,
    #[serde(default = "default_true")]
    pub enable_grid_x: bool,
    #[serde(default = "default_true")]
    pub enable_grid_y: bool,
    #[serde(default)]
    pub grid_x_values: Option<Vec<DatumValue>>,
    #[serde(default)]
    pub grid_y_values: Option<Vec<DatumValue>>,

    #[serde(default = "default_line_width")]
    pub line_width: f64,
    #[serde(default)]
    pub enable_area: bool,
    #[serde(default = "default_area_opacity")]
    pub area_opacity: f64,
    #[serde(default = "default_area_blend_mode")]
    pub area_blend_mode: String,

    #[serde(default = "default_true")]
    pub enable_points: bool,
    #[serde(default = "default_point_size")]
    pub point_size: f64,
    #[serde(default)]
    pub point_color: InheritedColor,
    #[serde(default)]
    pub point_border_width: f64,
    #[serde(default)]
    pub point_border_color: InheritedColor,
    #[serde(default)]
    pub enable_point_label: bool,
    #[serde(default = "default_point_label_y_offset")]
    pub point_label_y_offset: f64,

    #[serde(default)]
    pub markers: Vec<CartesianMarker>,
    #[serde(default)]
    pub legends: Vec<LegendConfig>,

    #[serde(default = "default_true")]
    pub is_interactive: bool,
    #[serde(default)]
    pub use_mesh: bool,
    #[serde(default)]
    pub debug_mesh: bool,
    #[serde(default)]
    pub use_brush: bool,
    #[serde(default)]
    pub enable_slices: Option<SliceAxis>,
    #[serde(default)]
    pub debug_slices: bool,
    #[serde(default = "default_true")]
    pub enable_crosshair: bool,
    #[serde(default = "default_crosshair_type")]
    pub crosshair_type: CrosshairType,

    /// Per-series cap applied by down-sampling; `None` or 0 disables it.
    #[serde(default)]
    pub max_number_of_points: Option<usize>,

    #[serde(default)]
    pub theme: ThemeConfig,
}

impl LineChartConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            margin: Margin::default(),
            x_scale: default_x_scale(),
            x_format: ValueFormat::default(),
            y_scale: default_y_scale(),
            y_format: ValueFormat::default(),
            layers: LayerKind::canonical_order(),
            curve: LineCurve::default(),
            area_baseline_value: 0.0,
            colors: ColorScheme::default(),
            axis_top: None,
            axis_right: None,
            axis_bottom: default_axis(),
            axis_left: default_axis(),
            enable_grid_x: true,
            enable_grid_y: true,
            grid_x_values: None,
            grid_y_values: None,
            line_width: default_line_width(),
            enable_area: false,
            area_opacity: default_area_opacity(),
            area_blend_mode: default_area_blend_mode(),
            enable_points: true,
            point_size: default_point_size(),
            point_color: InheritedColor::default(),
            point_border_width: 0.0,
            point_border_color: InheritedColor::default(),
            enable_point_label: false,
            point_label_y_offset: default_point_label_y_offset(),
            markers: Vec::new(),
            legends: Vec::new(),
            is_interactive: true,
            use_mesh: false,
            debug_mesh: false,
            use_brush: false,
            enable_slices: None,
            debug_slices: false,
            enable_crosshair: true,
            crosshair_type: default_crosshair_type(),
            max_number_of_points: None,
            theme: ThemeConfig::default(),
        }
    }

    #[must_use]
    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn with_x_scale(mut self, spec: ScaleSpec) -> Self {
        self.x_scale = spec;
        self
    }

    #[must_use]
    pub fn with_y_scale(mut self, spec: ScaleSpec) -> Self {
        self.y_scale = spec;
        self
    }

    #[must_use]
    pub fn with_x_format(mut self, format: ValueFormat) -> Self {
        self.x_format = format;
        self
    }

    #[must_use]
    pub fn with_y_format(mut self, format: ValueFormat) -> Self {
        self.y_format = format;
        self
    }

    #[must_use]
    pub fn with_layers(mut self, layers: Vec<LayerKind>) -> Self {
        self.layers = layers;
        self
    }

    #[must_use]
    pub fn with_curve(mut self, curve: LineCurve) -> Self {
        self.curve = curve;
        self
    }

    #[must_use]
    pub fn with_area(mut self, enabled: bool) -> Self {
        self.enable_area = enabled;
        self
    }

    #[must_use]
    pub fn with_points(mut self, enabled: bool) -> Self {
        self.enable_points = enabled;
        self
    }

    #[must_use]
    pub fn with_slices(mut self, axis: Option<SliceAxis>) -> Self {
        self.enable_slices = axis;
        self
    }

    #[must_use]
    pub fn with_mesh(mut self, enabled: bool) -> Self {
        self.use_mesh = enabled;
        self
    }

    #[must_use]
    pub fn with_brush(mut self, enabled: bool) -> Self {
        self.use_brush = enabled;
        self
    }

    #[must_use]
    pub fn with_interactive(mut self, enabled: bool) -> Self {
        self.is_interactive = enabled;
        self
    }

    #[must_use]
    pub fn with_crosshair(mut self, enabled: bool, crosshair_type: CrosshairType) -> Self {
        self.enable_crosshair = enabled;
        self.crosshair_type = crosshair_type;
        self
    }

    #[must_use]
    pub fn with_max_number_of_points(mut self, max: Option<usize>) -> Self {
        self.max_number_of_points = max;
        self
    }

    #[must_use]
    pub fn with_markers(mut self, markers: Vec<CartesianMarker>) -> Self {
        self.markers = markers;
        self
    }

    #[must_use]
    pub fn with_legends(mut self, legends: Vec<LegendConfig>) -> Self {
        self.legends = legends;
        self
    }

    /// Brush events are processed only for interactive, sliced charts with
    /// the brush enabled. Stacked y slices order data by running sums, which
    /// no value window can express, so they never brush.
    #[must_use]
    pub fn brush_active(&self) -> bool {
        self.is_interactive
            && self.use_brush
            && self.enable_slices.is_some()
            && !self.stacked_y_slices()
    }

    #[must_use]
    pub fn stacked_y_slices(&self) -> bool {
        self.enable_slices == Some(SliceAxis::Y) && self.y_scale.is_stacked()
    }

    /// Scale of the axis slices are built on (x when slices are disabled).
    #[must_use]
    pub fn slice_scale(&self) -> (SliceAxis, &ScaleSpec) {
        match self.enable_slices {
            Some(SliceAxis::Y) => (SliceAxis::Y, &self.y_scale),
            _ => (SliceAxis::X, &self.x_scale),
        }
    }

    /// Checks the config and resolves its dimensions.
    pub fn validate(&self) -> ChartResult<Dimensions> {
        let dimensions = Dimensions::resolve(self.viewport, self.margin)?;

        for (name, value) in [
            ("line_width", self.line_width),
            ("point_size", self.point_size),
            ("point_border_width", self.point_border_width),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        if !self.area_opacity.is_finite() || !(0.0..=1.0).contains(&self.area_opacity) {
            return Err(ChartError::InvalidConfig(
                "area_opacity must be in [0, 1]".to_owned(),
            ));
        }
        if !self.area_baseline_value.is_finite() || !self.point_label_y_offset.is_finite() {
            return Err(ChartError::InvalidConfig(
                "area_baseline_value and point_label_y_offset must be finite".to_owned(),
            ));
        }
        if self.colors.0.is_empty() {
            return Err(ChartError::InvalidConfig(
                "color scheme must not be empty".to_owned(),
            ));
        }
        for color in &self.colors.0 {
            color.validate()?;
        }
        for (side, axis) in [
            ("top", &self.axis_top),
            ("right", &self.axis_right),
            ("bottom", &self.axis_bottom),
            ("left", &self.axis_left),
        ] {
            if let Some(axis) = axis {
                axis.validate(side)?;
            }
        }
        for marker in &self.markers {
            marker.validate()?;
        }
        for legend in &self.legends {
            legend.validate()?;
        }
        if !self.theme.font_size.is_finite() || self.theme.font_size <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "theme font_size must be finite and > 0".to_owned(),
            ));
        }

        Ok(dimensions)
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> ChartResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn default_true() -> bool {
    true
}

fn default_x_scale() -> ScaleSpec {
    ScaleSpec::Point
}

fn default_y_scale() -> ScaleSpec {
    ScaleSpec::linear()
}

fn default_axis() -> Option<AxisConfig> {
    Some(AxisConfig::default())
}

fn default_tick_size() -> f64 {
    5.0
}

fn default_tick_padding() -> f64 {
    5.0
}

fn default_line_width() -> f64 {
    2.0
}

fn default_area_opacity() -> f64 {
    0.2
}

fn default_area_blend_mode() -> String {
    "normal".to_owned()
}

fn default_point_size() -> f64 {
    6.0
}

fn default_point_label_y_offset() -> f64 {
    -12.0
}

fn default_crosshair_type() -> CrosshairType {
    CrosshairType::BottomLeft
}

fn default_legend_item_width() -> f64 {
    80.0
}

fn default_legend_item_height() -> f64 {
    20.0
}

fn default_legend_symbol_size() -> f64 {
    12.0
}

fn default_background() -> Color {
    Color::rgba(1.0, 1.0, 1.0, 0.0)
}

fn default_text_color() -> Color {
    Color::rgb8(0x33, 0x33, 0x33)
}

fn default_font_size() -> f64 {
    11.0
}

fn default_axis_color() -> Color {
    Color::rgb8(0x77, 0x77, 0x77)
}

fn default_grid_color() -> Color {
    Color::rgb8(0xdd, 0xdd, 0xdd)
}

fn default_crosshair_color() -> Color {
    Color::rgb8(0x00, 0x00, 0x00)
}
