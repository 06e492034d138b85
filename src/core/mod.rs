pub mod downsample;
pub mod format;
pub mod line_series;
pub mod points;
pub mod primitives;
pub mod scale;
pub mod slices;
pub mod types;
pub mod windowing;
pub mod xy_scales;

pub use downsample::{downsample_data, downsample_series, downsampled_indices, needs_downsampling};
pub use format::ValueFormat;
pub use line_series::{AreaGenerator, LineCurve, LineGenerator};
pub use points::{PointData, PointStyle, ScaledPoint, build_points};
pub use scale::{LinearScale, PointScale};
pub use slices::{Slice, SliceAxis, build_slices, slice_index_at};
pub use types::{Datum, DatumValue, Dimensions, Margin, Series, Viewport, series_from_json_str};
pub use windowing::series_in_value_window;
pub use xy_scales::{
    ComputedDatum, ComputedScale, ComputedSerie, ScaleBound, ScaleSpec, XyScales,
    compute_xy_scales,
};
