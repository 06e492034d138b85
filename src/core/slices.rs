use std::collections::BTreeMap;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::points::ScaledPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SliceAxis {
    X,
    Y,
}

/// Hit-test band aggregating every point that shares one pixel coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slice {
    /// Shared coordinate on the slice axis.
    pub id: f64,
    pub x0: f64,
    pub x: f64,
    pub y0: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Contained points, last series first.
    pub points: SmallVec<[ScaledPoint; 4]>,
}

impl Slice {
    #[must_use]
    pub fn coordinate(&self, axis: SliceAxis) -> f64 {
        match axis {
            SliceAxis::X => self.x,
            SliceAxis::Y => self.y,
        }
    }

    #[must_use]
    pub fn first_point(&self) -> Option<&ScaledPoint> {
        self.points.first()
    }

    /// Inclusive band test; a shared edge belongs to both neighbors.
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x0 && x <= self.x0 + self.width && y >= self.y0 && y <= self.y0 + self.height
    }
}

/// Groups points by their coordinate on `axis` and computes the band of each
/// group.
///
/// Bands are ordered by coordinate. Interior edges sit halfway between
/// neighboring coordinates; the first band starts at 0 and the last one ends
/// at `width` (x-slices) or `height` (y-slices), so the bands partition the
/// axis.
#[must_use]
pub fn build_slices(points: &[ScaledPoint], axis: SliceAxis, width: f64, height: f64) -> Vec<Slice> {
    let mut groups: BTreeMap<OrderedFloat<f64>, SmallVec<[ScaledPoint; 4]>> = BTreeMap::new();
    for point in points {
        let key = match axis {
            SliceAxis::X => point.x,
            SliceAxis::Y => point.y,
        };
        groups.entry(OrderedFloat(key)).or_default().push(point.clone());
    }

    let coordinates: Vec<f64> = groups.keys().map(|key| key.0).collect();
    let extent = match axis {
        SliceAxis::X => width,
        SliceAxis::Y => height,
    };

    groups
        .into_values()
        .enumerate()
        .map(|(index, mut slice_points)| {
            slice_points.reverse();
            let coordinate = coordinates[index];
            let start = if index == 0 {
                0.0
            } else {
                coordinate - (coordinate - coordinates[index - 1]) / 2.0
            };
            let end = coordinates
                .get(index + 1)
                .map_or(extent, |next| coordinate + (next - coordinate) / 2.0);

            match axis {
                SliceAxis::X => Slice {
                    id: coordinate,
                    x0: start,
                    x: coordinate,
                    y0: 0.0,
                    y: 0.0,
                    width: end - start,
                    height,
                    points: slice_points,
                },
                SliceAxis::Y => Slice {
                    id: coordinate,
                    x0: 0.0,
                    x: 0.0,
                    y0: start,
                    y: coordinate,
                    width,
                    height: end - start,
                    points: slice_points,
                },
            }
        })
        .collect()
}

/// Index of the slice whose band contains `(x, y)`. A pointer on a shared
/// edge resolves to the lower slice.
#[must_use]
pub fn slice_index_at(slices: &[Slice], x: f64, y: f64) -> Option<usize> {
    slices.iter().position(|slice| slice.contains(x, y))
}
