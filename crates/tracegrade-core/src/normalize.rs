//! Geometric normalization of strokes into a unit frame.

use crate::point::Point;

/// Smallest extent used for either bounding-box axis.
///
/// Keeps single points and perfectly horizontal or vertical strokes from
/// dividing by zero.
pub const MIN_EXTENT: f64 = 1.0;

/// Map a stroke into `[0, 1] x [0, 1]`, independent of its position and size.
///
/// The stroke is translated so its bounding box starts at the origin and
/// divided by the longer bounding-box side. Aspect ratio and point order are
/// preserved; an empty stroke yields an empty result.
pub fn normalize(points: &[Point]) -> Vec<Point> {
    let Some(first) = points.first() else {
        return Vec::new();
    };

    let (mut min_x, mut max_x, mut min_y, mut max_y) = (first.x, first.x, first.y, first.y);
    for p in &points[1..] {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }

    let width = (max_x - min_x).max(MIN_EXTENT);
    let height = (max_y - min_y).max(MIN_EXTENT);
    let scale = width.max(height);

    points
        .iter()
        .map(|p| Point::new((p.x - min_x) / scale, (p.y - min_y) / scale))
        .collect()
}
