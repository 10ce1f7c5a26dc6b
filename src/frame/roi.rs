//! Region-of-interest extraction from a frame.

use ndarray::{Array3, ArrayView3, s};

use crate::analyzer::BoundingBox;

/// Crop the region under `bbox` out of `frame`.
///
/// Coordinates are clamped to the frame, so a box hanging off the edge
/// yields the in-frame part. A box entirely outside the frame, or with no
/// extent after clamping, yields an empty crop; downstream classification
/// treats that as `Unknown` rather than failing.
pub fn crop(frame: ArrayView3<u8>, bbox: &BoundingBox) -> Array3<u8> {
    let (h, w, c) = frame.dim();

    let x1 = (bbox.x1.floor().max(0.0) as usize).min(w);
    let y1 = (bbox.y1.floor().max(0.0) as usize).min(h);
    let x2 = (bbox.x2.ceil().max(0.0) as usize).min(w);
    let y2 = (bbox.y2.ceil().max(0.0) as usize).min(h);

    if x2 <= x1 || y2 <= y1 {
        return Array3::zeros((0, 0, c));
    }

    frame.slice(s![y1..y2, x1..x2, ..]).to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;

    fn frame() -> Array3<u8> {
        // Pixel value encodes its row, for easy slicing checks.
        Array3::from_shape_fn((100, 200, 3), |(y, _, _)| y as u8)
    }

    #[test]
    fn test_crop_interior() {
        let frame = frame();
        let roi = crop(frame.view(), &BoundingBox::new(50.0, 10.0, 150.0, 40.0));
        assert_eq!(roi.dim(), (30, 100, 3));
        assert_eq!(roi[[0, 0, 0]], 10);
        assert_eq!(roi[[29, 0, 0]], 39);
    }

    #[test]
    fn test_crop_clamps_to_frame() {
        let frame = frame();
        let roi = crop(frame.view(), &BoundingBox::new(-20.0, -20.0, 50.0, 50.0));
        assert_eq!(roi.dim(), (50, 50, 3));

        let roi = crop(frame.view(), &BoundingBox::new(180.0, 80.0, 400.0, 400.0));
        assert_eq!(roi.dim(), (20, 20, 3));
    }

    #[test]
    fn test_crop_outside_frame_is_empty() {
        let frame = frame();
        let roi = crop(frame.view(), &BoundingBox::new(300.0, 300.0, 400.0, 400.0));
        assert_eq!(roi.dim(), (0, 0, 3));
    }

    #[test]
    fn test_degenerate_box_is_empty() {
        let frame = frame();
        let roi = crop(frame.view(), &BoundingBox::new(50.0, 50.0, 50.0, 50.0));
        assert_eq!(roi.dim().0, 0);
    }
}
