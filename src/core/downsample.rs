use crate::core::types::{Datum, Series};

/// Returns the indices kept when striding `len` samples down to at most
/// `max_points` (plus the forced last sample).
///
/// `stride = ceil(len / max_points)`; every stride-th index starting at 0 is
/// kept and the last index is appended when the walk did not land on it.
/// Lengths at or below `max_points`, and a zero maximum, keep everything.
#[must_use]
pub fn downsampled_indices(len: usize, max_points: usize) -> Vec<usize> {
    if max_points == 0 || len <= max_points {
        return (0..len).collect();
    }

    let stride = len.div_ceil(max_points);
    let mut indices: Vec<usize> = (0..len).step_by(stride).collect();
    let last = len - 1;
    if indices.last() != Some(&last) {
        indices.push(last);
    }
    indices
}

/// Strides one series' data down to at most `max_points` samples.
#[must_use]
pub fn downsample_data(data: &[Datum], max_points: usize) -> Vec<Datum> {
    downsampled_indices(data.len(), max_points)
        .into_iter()
        .map(|index| data[index].clone())
        .collect()
}

#[must_use]
pub fn needs_downsampling(series: &[Series], max_points: Option<usize>) -> bool {
    match max_points {
        Some(max) if max > 0 => series.iter().any(|serie| serie.data.len() > max),
        _ => false,
    }
}

/// Returns a copy of `series` where every series longer than `max_points` is
/// strided down. Shorter series are copied unchanged; the input is never
/// modified. `None` or `Some(0)` disables down-sampling.
#[must_use]
pub fn downsample_series(series: &[Series], max_points: Option<usize>) -> Vec<Series> {
    let Some(max) = max_points.filter(|max| *max > 0) else {
        return series.to_vec();
    };

    #[cfg(feature = "parallel-downsample")]
    {
        use rayon::prelude::*;

        return series
            .par_iter()
            .map(|serie| downsample_one(serie, max))
            .collect();
    }

    #[cfg(not(feature = "parallel-downsample"))]
    {
        series.iter().map(|serie| downsample_one(serie, max)).collect()
    }
}

fn downsample_one(serie: &Series, max: usize) -> Series {
    if serie.data.len() <= max {
        return serie.clone();
    }
    Series {
        id: serie.id.clone(),
        data: downsample_data(&serie.data, max),
    }
}
