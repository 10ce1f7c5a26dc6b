//! Stop-line geometry predicates.
//!
//! All coordinates live in source-image pixel space: origin at the top-left,
//! y growing downward. "Below" a line therefore means farther along the
//! direction of travel toward the camera.

use crate::analyzer::bbox::BoundingBox;

/// A point in image pixel space.
pub type Point = nalgebra::Point2<f32>;

const EPS: f32 = 1e-6;

/// A user-drawn stop-line segment.
///
/// The two endpoints define an infinite line for side/distance tests and a
/// finite segment for box intersection tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopLine {
    pub p1: Point,
    pub p2: Point,
}

impl StopLine {
    #[inline]
    pub fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    /// Build a stop-line from user-collected click points.
    ///
    /// Returns `None` unless exactly two points were supplied; a half-drawn
    /// or over-drawn line is not usable, not an error.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        match points {
            [p1, p2] => Some(Self::new(*p1, *p2)),
            _ => None,
        }
    }

    /// Whether `point` lies on the far (travel) side of the line.
    #[inline]
    pub fn is_below(&self, point: Point) -> bool {
        is_below_line(point, self.p1, self.p2)
    }

    /// Whether `point` lies on the near side of the line.
    #[inline]
    pub fn is_above(&self, point: Point) -> bool {
        is_above_line(point, self.p1, self.p2)
    }

    /// Perpendicular distance from `point` to the infinite line.
    #[inline]
    pub fn distance_to(&self, point: Point) -> f32 {
        signed_distance(point, self.p1, self.p2)
    }

    /// Whether the line separates or crosses the given box.
    #[inline]
    pub fn intersects(&self, bbox: &BoundingBox) -> bool {
        line_intersects_box(self.p1, self.p2, bbox)
    }
}

/// Test whether `point` is below the line through `p1` and `p2`.
///
/// For a vertical line the side follows the drawing direction: when the line
/// descends top-to-bottom (`p2.y > p1.y`), "below" is the half-plane with
/// larger x, otherwise the one with smaller x.
pub fn is_below_line(point: Point, p1: Point, p2: Point) -> bool {
    if (p2.x - p1.x).abs() < EPS {
        return if p2.y > p1.y {
            point.x > p1.x
        } else {
            point.x < p1.x
        };
    }
    let k = (p2.y - p1.y) / (p2.x - p1.x);
    let b = p1.y - k * p1.x;
    point.y > k * point.x + b
}

/// Mirror of [`is_below_line`]: the opposite half-plane.
///
/// A point exactly on the line is neither below nor above.
pub fn is_above_line(point: Point, p1: Point, p2: Point) -> bool {
    if (p2.x - p1.x).abs() < EPS {
        return if p2.y > p1.y {
            point.x < p1.x
        } else {
            point.x > p1.x
        };
    }
    let k = (p2.y - p1.y) / (p2.x - p1.x);
    let b = p1.y - k * p1.x;
    point.y < k * point.x + b
}

/// Perpendicular distance from `point` to the infinite line through `p1`, `p2`.
///
/// Uses the standard implicit-form distance `|A*px + B*py + C| / sqrt(A^2+B^2)`
/// with `A = y2-y1`, `B = -(x2-x1)`, `C = (x2-x1)*y1 - (y2-y1)*x1`; for a
/// vertical line this reduces to `|px - x1|`. Coincident endpoints degrade to
/// the plain point-to-point distance.
pub fn signed_distance(point: Point, p1: Point, p2: Point) -> f32 {
    let a = p2.y - p1.y;
    let b = -(p2.x - p1.x);
    let c = (p2.x - p1.x) * p1.y - (p2.y - p1.y) * p1.x;

    let denom = (a * a + b * b).sqrt();
    if denom < EPS {
        return nalgebra::distance(&point, &p1);
    }
    (a * point.x + b * point.y + c).abs() / denom
}

/// Test whether the stop-line touches the box.
///
/// True when the box corners do not all fall on one side of the infinite
/// line, or when the finite segment crosses one of the box's four edges.
pub fn line_intersects_box(p1: Point, p2: Point, bbox: &BoundingBox) -> bool {
    let below = bbox.corners().map(|c| is_below_line(c, p1, p2));
    if below.iter().any(|&side| side != below[0]) {
        return true;
    }
    segment_crosses_edges(p1, p2, bbox)
}

/// Check the finite segment against each box edge.
///
/// Every edge check clips twice: the projected crossing must fall inside the
/// segment's own x/y span and inside the box side's extent, so a segment
/// lying wholly outside the box never registers through its infinite
/// extension.
fn segment_crosses_edges(p1: Point, p2: Point, bbox: &BoundingBox) -> bool {
    let (sx_min, sx_max) = (p1.x.min(p2.x), p1.x.max(p2.x));
    let (sy_min, sy_max) = (p1.y.min(p2.y), p1.y.max(p2.y));

    if (p2.x - p1.x).abs() < EPS {
        // Vertical segment: only the top/bottom edges can be crossed.
        let x = p1.x;
        if x < bbox.x1 || x > bbox.x2 {
            return false;
        }
        return [bbox.y1, bbox.y2]
            .iter()
            .any(|&edge_y| sy_min <= edge_y && edge_y <= sy_max);
    }

    let k = (p2.y - p1.y) / (p2.x - p1.x);
    let b = p1.y - k * p1.x;

    // Left/right edges: x is fixed, solve for y.
    for edge_x in [bbox.x1, bbox.x2] {
        if sx_min <= edge_x && edge_x <= sx_max {
            let y = k * edge_x + b;
            if bbox.y1 <= y && y <= bbox.y2 {
                return true;
            }
        }
    }

    // Top/bottom edges: y is fixed, solve for x; a horizontal segment never
    // reaches an edge at a different y.
    if k.abs() > EPS {
        for edge_y in [bbox.y1, bbox.y2] {
            if sy_min <= edge_y && edge_y <= sy_max {
                let x = (edge_y - b) / k;
                if bbox.x1 <= x && x <= bbox.x2 {
                    return true;
                }
            }
        }
    }

    false
}
