//! Point geometry shared by the normalizer, resampler and comparator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A single sample of a drawn stroke.
///
/// Serialized as a two-element array `[x, y]` so stroke files stay compact.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Linear interpolation towards `other`; `t = 0` is `self`, `t = 1` is `other`.
    pub fn lerp(self, other: Point, t: f64) -> Point {
        Point {
            x: self.x + t * (other.x - self.x),
            y: self.y + t * (other.y - self.y),
        }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point { x, y }
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Point {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .trim()
            .split_once(',')
            .ok_or_else(|| format!("expected 'x,y', got '{s}'"))?;
        let x: f64 = x
            .trim()
            .parse()
            .map_err(|_| format!("invalid x coordinate in '{s}'"))?;
        let y: f64 = y
            .trim()
            .parse()
            .map_err(|_| format!("invalid y coordinate in '{s}'"))?;
        Ok(Point { x, y })
    }
}

/// Parse a whitespace-separated list of `x,y` pairs, e.g. `"0,0 10,10 20,5"`.
pub fn parse_points(s: &str) -> Result<Vec<Point>, String> {
    s.split_whitespace().map(str::parse).collect()
}

/// Total polyline length of a stroke.
pub fn path_length(points: &[Point]) -> f64 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}
