use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::core::primitives::format_coord;

/// Interpolation between consecutive points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineCurve {
    #[default]
    Linear,
    /// Steps at the midpoint between samples.
    Step,
    StepBefore,
    StepAfter,
    /// Monotone cubic interpolation in x (no overshoot between samples).
    MonotoneX,
}

/// Builds SVG path data for a line through positioned samples.
///
/// `None` samples are gaps: the path is split into separate subpaths around
/// them. The output is deterministic so rendering and tests consume the
/// exact same geometry.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LineGenerator {
    pub curve: LineCurve,
}

impl LineGenerator {
    #[must_use]
    pub fn new(curve: LineCurve) -> Self {
        Self { curve }
    }

    /// Returns `None` when no sample is defined.
    #[must_use]
    pub fn path(&self, samples: &[Option<(f64, f64)>]) -> Option<String> {
        let mut out = String::new();
        for segment in defined_segments(samples) {
            write_curve(&mut out, &segment, self.curve);
        }
        (!out.is_empty()).then_some(out)
    }
}

/// Builds closed SVG path data for the area between a line and a horizontal
/// baseline.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AreaGenerator {
    pub curve: LineCurve,
    /// Baseline in pixel space (the scaled baseline value).
    pub baseline_y: f64,
}

impl AreaGenerator {
    #[must_use]
    pub fn new(curve: LineCurve, baseline_y: f64) -> Self {
        Self { curve, baseline_y }
    }

    #[must_use]
    pub fn path(&self, samples: &[Option<(f64, f64)>]) -> Option<String> {
        let mut out = String::new();
        for segment in defined_segments(samples) {
            let (Some(first), Some(last)) = (segment.first(), segment.last()) else {
                continue;
            };
            write_curve(&mut out, &segment, self.curve);
            let base = format_coord(self.baseline_y);
            let _ = write!(
                out,
                "L{},{}L{},{}Z",
                format_coord(last.0),
                base,
                format_coord(first.0),
                base
            );
        }
        (!out.is_empty()).then_some(out)
    }
}

fn defined_segments(samples: &[Option<(f64, f64)>]) -> Vec<Vec<(f64, f64)>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();
    for sample in samples {
        match sample {
            Some(point) if point.0.is_finite() && point.1.is_finite() => current.push(*point),
            _ => {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

fn write_curve(out: &mut String, points: &[(f64, f64)], curve: LineCurve) {
    let Some(&(x0, y0)) = points.first() else {
        return;
    };
    let _ = write!(out, "M{},{}", format_coord(x0), format_coord(y0));

    match curve {
        LineCurve::Linear => {
            for &(x, y) in &points[1..] {
                line_to(out, x, y);
            }
        }
        LineCurve::Step | LineCurve::StepBefore | LineCurve::StepAfter => {
            for pair in points.windows(2) {
                let ((xa, ya), (xb, yb)) = (pair[0], pair[1]);
                match curve {
                    LineCurve::StepBefore => {
                        line_to(out, xa, yb);
                    }
                    LineCurve::StepAfter => {
                        line_to(out, xb, ya);
                    }
                    _ => {
                        let mid = (xa + xb) / 2.0;
                        line_to(out, mid, ya);
                        line_to(out, mid, yb);
                    }
                }
                line_to(out, xb, yb);
            }
        }
        LineCurve::MonotoneX => write_monotone(out, points),
    }
}

fn line_to(out: &mut String, x: f64, y: f64) {
    let _ = write!(out, "L{},{}", format_coord(x), format_coord(y));
}

fn write_monotone(out: &mut String, points: &[(f64, f64)]) {
    if points.len() < 3 {
        for &(x, y) in &points[1..] {
            line_to(out, x, y);
        }
        return;
    }

    let last = points.len() - 1;
    let mut tangents = vec![0.0; points.len()];
    for i in 1..last {
        tangents[i] = interior_tangent(points[i - 1], points[i], points[i + 1]);
    }
    tangents[0] = endpoint_tangent(points[0], points[1], tangents[1]);
    tangents[last] = endpoint_tangent(points[last - 1], points[last], tangents[last - 1]);

    for i in 0..last {
        let (x0, y0) = points[i];
        let (x1, y1) = points[i + 1];
        let dx = (x1 - x0) / 3.0;
        let _ = write!(
            out,
            "C{},{},{},{},{},{}",
            format_coord(x0 + dx),
            format_coord(y0 + dx * tangents[i]),
            format_coord(x1 - dx),
            format_coord(y1 - dx * tangents[i + 1]),
            format_coord(x1),
            format_coord(y1)
        );
    }
}

// Fritsch-Carlson tangent at the middle sample, zero at local extrema.
fn interior_tangent(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> f64 {
    let h0 = b.0 - a.0;
    let h1 = c.0 - b.0;
    let s0 = if h0 != 0.0 { (b.1 - a.1) / h0 } else { 0.0 };
    let s1 = if h1 != 0.0 { (c.1 - b.1) / h1 } else { 0.0 };
    if h0 + h1 == 0.0 {
        return 0.0;
    }
    let p = (s0 * h1 + s1 * h0) / (h0 + h1);
    let tangent = (s0.signum() + s1.signum()) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    if tangent.is_finite() { tangent } else { 0.0 }
}

fn endpoint_tangent(a: (f64, f64), b: (f64, f64), neighbor: f64) -> f64 {
    let h = b.0 - a.0;
    if h == 0.0 {
        return neighbor;
    }
    (3.0 * (b.1 - a.1) / h - neighbor) / 2.0
}

#[cfg(test)]
mod tests {
    use super::{AreaGenerator, LineCurve, LineGenerator};

    #[test]
    fn linear_path_splits_at_gaps() {
        let generator = LineGenerator::new(LineCurve::Linear);
        let path = generator
            .path(&[Some((0.0, 10.0)), Some((5.0, 5.0)), None, Some((10.0, 0.0))])
            .expect("path");
        assert_eq!(path, "M0,10L5,5M10,0");
    }

    #[test]
    fn empty_samples_have_no_path() {
        assert!(LineGenerator::default().path(&[None, None]).is_none());
    }

    #[test]
    fn step_after_holds_value_until_next_sample() {
        let generator = LineGenerator::new(LineCurve::StepAfter);
        let path = generator
            .path(&[Some((0.0, 10.0)), Some((4.0, 2.0))])
            .expect("path");
        assert_eq!(path, "M0,10L4,10L4,2");
    }

    #[test]
    fn area_closes_on_baseline() {
        let generator = AreaGenerator::new(LineCurve::Linear, 100.0);
        let path = generator
            .path(&[Some((0.0, 10.0)), Some((50.0, 20.0))])
            .expect("path");
        assert_eq!(path, "M0,10L50,20L50,100L0,100Z");
    }

    #[test]
    fn monotone_curve_emits_cubic_segments() {
        let generator = LineGenerator::new(LineCurve::MonotoneX);
        let path = generator
            .path(&[Some((0.0, 0.0)), Some((1.0, 1.0)), Some((2.0, 0.0))])
            .expect("path");
        assert_eq!(path.matches('C').count(), 2);
        assert!(path.starts_with("M0,0C"));
    }
}
