use indexmap::IndexSet;

use crate::core::slices::SliceAxis;
use crate::core::types::{DatumValue, Series};
use crate::core::xy_scales::{ScaleSpec, category_key};

/// Keeps, per series, the data whose coordinate on `axis` falls inside the
/// inclusive `[start, end]` window. The bounds may be given in either order.
///
/// Raw values are normalized with `spec` (the scale of `axis`) before the
/// comparison, so temporal text is compared as instants. On a point scale
/// values are ordered by category position, first appearance across
/// `series` first, so the window is always a contiguous run of categories.
/// Data whose coordinate is missing or cannot be compared with the bounds is
/// dropped.
#[must_use]
pub fn series_in_value_window(
    series: &[Series],
    axis: SliceAxis,
    spec: &ScaleSpec,
    start: &DatumValue,
    end: &DatumValue,
) -> Vec<Series> {
    let keys = WindowKeys::new(series, axis, spec);
    let bounds = keys.key(start).zip(keys.key(end));
    let (low, high) = match &bounds {
        Some((start, end)) if start.compare(end) == Some(std::cmp::Ordering::Greater) => {
            (Some(end), Some(start))
        }
        Some((start, end)) => (Some(start), Some(end)),
        None => (None, None),
    };

    series
        .iter()
        .map(|serie| Series {
            id: serie.id.clone(),
            data: serie
                .data
                .iter()
                .filter(|datum| {
                    let (Some(low), Some(high)) = (low, high) else {
                        return false;
                    };
                    let raw = match axis {
                        SliceAxis::X => datum.x.as_ref(),
                        SliceAxis::Y => datum.y.as_ref(),
                    };
                    raw.and_then(|value| keys.key(value))
                        .is_some_and(|value| value.is_within(low, high))
                })
                .cloned()
                .collect(),
        })
        .collect()
}

// Comparable form of a slice-axis value.
struct WindowKeys<'a> {
    spec: &'a ScaleSpec,
    categories: Option<IndexSet<String>>,
}

impl<'a> WindowKeys<'a> {
    fn new(series: &[Series], axis: SliceAxis, spec: &'a ScaleSpec) -> Self {
        let categories = matches!(spec, ScaleSpec::Point).then(|| {
            series
                .iter()
                .flat_map(|serie| &serie.data)
                .filter_map(|datum| match axis {
                    SliceAxis::X => datum.x.as_ref(),
                    SliceAxis::Y => datum.y.as_ref(),
                })
                .filter_map(|value| spec.parse(value))
                .map(|value| category_key(&value))
                .collect()
        });
        Self { spec, categories }
    }

    fn key(&self, value: &DatumValue) -> Option<DatumValue> {
        let parsed = self.spec.parse(value)?;
        match &self.categories {
            Some(categories) => categories
                .get_index_of(&category_key(&parsed))
                .map(|index| DatumValue::Number(index as f64)),
            None => Some(parsed),
        }
    }
}
