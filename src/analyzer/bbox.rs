//! Validated bounding-box value type.
//!
//! Detector output arrives as loose coordinate tuples; validation happens
//! once here, so the geometry code never re-checks shape.

use crate::analyzer::geometry::Point;

/// A detected object's rectangle in image pixel space, TLBR format.
///
/// Construction normalizes coordinate order, so `x1 <= x2` and `y1 <= y2`
/// always hold.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    /// Left edge x coordinate
    pub x1: f32,
    /// Top edge y coordinate
    pub y1: f32,
    /// Right edge x coordinate
    pub x2: f32,
    /// Bottom edge y coordinate
    pub y2: f32,
}

impl BoundingBox {
    /// Create a new box from two corner coordinates, in either order.
    #[inline]
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            x1: x1.min(x2),
            y1: y1.min(y2),
            x2: x1.max(x2),
            y2: y1.max(y2),
        }
    }

    /// Build a box from a raw coordinate slice.
    ///
    /// Returns `None` for slices with fewer than four values; extra values
    /// are ignored. Malformed detector rows are dropped here, not deep in
    /// the evaluator.
    pub fn from_slice(coords: &[f32]) -> Option<Self> {
        match coords {
            [x1, y1, x2, y2, ..] => Some(Self::new(*x1, *y1, *x2, *y2)),
            _ => None,
        }
    }

    /// Midpoint of the lower edge, the proxy for a vehicle's leading
    /// contact point.
    #[inline]
    pub fn bottom_center(&self) -> Point {
        Point::new((self.x1 + self.x2) / 2.0, self.y2)
    }

    /// The four corners, clockwise from top-left.
    #[inline]
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.x1, self.y1),
            Point::new(self.x2, self.y1),
            Point::new(self.x2, self.y2),
            Point::new(self.x1, self.y2),
        ]
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.x2 - self.x1
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.y2 - self.y1
    }

    #[inline]
    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    /// Whether the box covers no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_corner_order() {
        let b = BoundingBox::new(150.0, 180.0, 50.0, 120.0);
        assert_eq!(b, BoundingBox::new(50.0, 120.0, 150.0, 180.0));
        assert!(b.x1 <= b.x2);
        assert!(b.y1 <= b.y2);
    }

    #[test]
    fn test_from_slice() {
        let b = BoundingBox::from_slice(&[50.0, 120.0, 150.0, 180.0]).unwrap();
        assert_eq!(b.width(), 100.0);
        assert_eq!(b.height(), 60.0);

        assert!(BoundingBox::from_slice(&[50.0, 120.0, 150.0]).is_none());
        assert!(BoundingBox::from_slice(&[]).is_none());

        // Extra trailing values (e.g. score columns) are ignored.
        assert!(BoundingBox::from_slice(&[0.0, 0.0, 1.0, 1.0, 0.9]).is_some());
    }

    #[test]
    fn test_bottom_center() {
        let b = BoundingBox::new(50.0, 120.0, 150.0, 180.0);
        let p = b.bottom_center();
        assert_eq!((p.x, p.y), (100.0, 180.0));
    }

    #[test]
    fn test_corners_and_area() {
        let b = BoundingBox::new(0.0, 0.0, 10.0, 20.0);
        assert_eq!(b.corners().len(), 4);
        assert_eq!(b.area(), 200.0);
        assert!(!b.is_empty());
        assert!(BoundingBox::new(5.0, 5.0, 5.0, 9.0).is_empty());
    }
}
