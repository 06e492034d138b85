use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Continuous mapping from a numeric domain onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start: 0.0,
            range_end: 1.0,
        })
    }

    pub fn with_range(mut self, range_start: f64, range_end: f64) -> ChartResult<Self> {
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }
        self.range_start = range_start;
        self.range_end = range_end;
        Ok(self)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let range_span = self.range_end - self.range_start;
        if range_span == 0.0 {
            return self.domain_start;
        }
        let normalized = (pixel - self.range_start) / range_span;
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }

    /// Returns "nice" tick values (1, 2 or 5 times a power of ten) covering
    /// the domain, roughly `count` of them.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        let (min, max) = if self.domain_start <= self.domain_end {
            (self.domain_start, self.domain_end)
        } else {
            (self.domain_end, self.domain_start)
        };
        let Some(step) = tick_step(min, max, count) else {
            return Vec::new();
        };

        let first = (min / step).ceil() as i64;
        let last = (max / step).floor() as i64;
        (first..=last).map(|i| i as f64 * step).collect()
    }
}

fn tick_step(min: f64, max: f64, count: usize) -> Option<f64> {
    if count == 0 || !(max > min) {
        return None;
    }
    let raw = (max - min) / count as f64;
    let power = raw.log10().floor();
    let magnitude = 10f64.powf(power);
    let error = raw / magnitude;
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    let step = factor * magnitude;
    (step.is_finite() && step > 0.0).then_some(step)
}

/// Categorical scale spreading categories evenly over the range, first and
/// last category on the range edges. A single category sits at the center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointScale {
    categories: IndexSet<String>,
    range_start: f64,
    range_end: f64,
}

impl PointScale {
    #[must_use]
    pub fn new(categories: IndexSet<String>, range_start: f64, range_end: f64) -> Self {
        Self {
            categories,
            range_start,
            range_end,
        }
    }

    #[must_use]
    pub fn categories(&self) -> &IndexSet<String> {
        &self.categories
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        let intervals = self.categories.len().saturating_sub(1).max(1);
        (self.range_end - self.range_start) / intervals as f64
    }

    #[must_use]
    pub fn map(&self, category: &str) -> Option<f64> {
        let index = self.categories.get_index_of(category)?;
        let step = self.step();
        let used = step * self.categories.len().saturating_sub(1) as f64;
        let offset = (self.range_end - self.range_start - used) / 2.0;
        Some(self.range_start + offset + step * index as f64)
    }
}
