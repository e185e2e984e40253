//! Arc-length resampling of strokes to a fixed point count.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::point::{path_length, Point};

/// Default number of points both strokes are resampled to before comparison.
pub const DEFAULT_SAMPLE_COUNT: usize = 50;

/// What to do with a stroke that already has `n` or fewer points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShortStrokePolicy {
    /// Upsample by interpolation so the output always has exactly `n` points.
    #[default]
    Interpolate,
    /// Return the stroke unchanged. Output length is then the input length.
    Preserve,
}

impl fmt::Display for ShortStrokePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShortStrokePolicy::Interpolate => write!(f, "interpolate"),
            ShortStrokePolicy::Preserve => write!(f, "preserve"),
        }
    }
}

impl FromStr for ShortStrokePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "interpolate" => Ok(ShortStrokePolicy::Interpolate),
            "preserve" => Ok(ShortStrokePolicy::Preserve),
            other => Err(format!("unknown short stroke policy: {other}")),
        }
    }
}

/// Resample `points` to exactly `n` points evenly spaced along the path.
///
/// Strokes shorter than `n` are upsampled. Returns an empty vector when the
/// stroke is empty or `n == 0`.
pub fn resample(points: &[Point], n: usize) -> Vec<Point> {
    resample_with(points, n, ShortStrokePolicy::Interpolate)
}

/// Resample with an explicit policy for strokes of `n` points or fewer.
pub fn resample_with(points: &[Point], n: usize, policy: ShortStrokePolicy) -> Vec<Point> {
    if points.is_empty() || n == 0 {
        return Vec::new();
    }
    if points.len() <= n && policy == ShortStrokePolicy::Preserve {
        return points.to_vec();
    }

    let first = points[0];
    let last = points[points.len() - 1];

    let total = path_length(points);
    if total == 0.0 {
        return vec![first; n];
    }
    if n == 1 {
        return vec![first];
    }

    let interval = total / (n - 1) as f64;
    let mut out = Vec::with_capacity(n);
    out.push(first);

    // `cursor` is where the walk currently stands; it is either an input
    // vertex or the last emitted point on the segment towards `points[next]`.
    let mut cursor = first;
    let mut next = 1;
    let mut carried = 0.0;

    while next < points.len() && out.len() < n {
        let target = points[next];
        let d = cursor.distance(target);
        if d > 0.0 && carried + d >= interval {
            let t = (interval - carried) / d;
            let emitted = cursor.lerp(target, t);
            out.push(emitted);
            cursor = emitted;
            carried = 0.0;
        } else {
            carried += d;
            cursor = target;
            next += 1;
        }
    }

    // Rounding can leave the walk one point short of the end.
    out.resize(n, last);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(n: usize, len: f64) -> Vec<Point> {
        (0..n)
            .map(|i| {
                let t = i as f64 / (n - 1) as f64 * len;
                Point::new(t, 0.0)
            })
            .collect()
    }

    fn assert_evenly_spaced(points: &[Point], expected: f64) {
        for w in points.windows(2) {
            let d = w[0].distance(w[1]);
            assert!(
                (d - expected).abs() < 1e-6,
                "spacing {d} differs from {expected}"
            );
        }
    }

    #[test]
    fn empty_or_zero_count() {
        assert!(resample(&[], 10).is_empty());
        assert!(resample(&[Point::new(1.0, 1.0)], 0).is_empty());
    }

    #[test]
    fn downsample_hits_exact_count() {
        let input = line(200, 49.0);
        let out = resample(&input, 50);
        assert_eq!(out.len(), 50);
        assert_eq!(out[0], input[0]);
        assert!(out[49].distance(input[199]) < 1e-6);
        assert_evenly_spaced(&out, 1.0);
    }

    #[test]
    fn uneven_input_spacing_is_evened_out() {
        // Dense at the start, sparse at the end.
        let input = vec![
            Point::new(0.0, 0.0),
            Point::new(0.5, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.5, 0.0),
            Point::new(2.0, 0.0),
            Point::new(10.0, 0.0),
        ];
        let out = resample(&input, 5);
        assert_eq!(out.len(), 5);
        assert_evenly_spaced(&out, 2.5);
    }

    #[test]
    fn follows_corners() {
        let input = vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 10.0),
            Point::new(0.5, 10.0),
            Point::new(10.0, 10.0),
        ];
        let out = resample(&input, 3);
        assert_eq!(out.len(), 3);
        assert!(out[1].distance(Point::new(0.0, 10.0)) < 1e-9);
        assert!(out[2].distance(Point::new(10.0, 10.0)) < 1e-9);
    }

    #[test]
    fn short_stroke_is_upsampled() {
        let input = vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
        let out = resample(&input, 11);
        assert_eq!(out.len(), 11);
        assert_evenly_spaced(&out, 1.0);
    }

    #[test]
    fn short_stroke_preserved_when_asked() {
        let input = vec![Point::new(0.0, 0.0), Point::new(3.0, 4.0)];
        let out = resample_with(&input, 50, ShortStrokePolicy::Preserve);
        assert_eq!(out, input);
    }

    #[test]
    fn zero_length_path_repeats_first_point() {
        let p = Point::new(4.0, 4.0);
        let out = resample(&[p, p, p], 2);
        assert_eq!(out, vec![p, p]);
        assert_eq!(resample(&[p], 7), vec![p; 7]);
    }

    #[test]
    fn duplicate_points_are_skipped() {
        let input = vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(5.0, 0.0),
            Point::new(5.0, 0.0),
            Point::new(10.0, 0.0),
        ];
        let out = resample(&input, 3);
        assert_eq!(out.len(), 3);
        assert_evenly_spaced(&out, 5.0);
    }

    #[test]
    fn single_sample_is_first_point() {
        let out = resample(&line(20, 5.0), 1);
        assert_eq!(out, vec![Point::new(0.0, 0.0)]);
    }

    #[test]
    fn policy_parse_and_display() {
        assert_eq!(
            "Preserve".parse::<ShortStrokePolicy>().unwrap(),
            ShortStrokePolicy::Preserve
        );
        assert_eq!(ShortStrokePolicy::Interpolate.to_string(), "interpolate");
        assert!("stretch".parse::<ShortStrokePolicy>().is_err());
    }
}
