//! Builder assembling detections from raw model-output coordinates.

use crate::analyzer::BoundingBox;
use crate::integration::detector::Detection;

/// Assembles a [`Detection`] from the coordinate layouts detection models
/// commonly emit.
///
/// YOLO-family backends report boxes either as corners (x1, y1, x2, y2) or
/// as center plus size (cx, cy, w, h). Both funnel through
/// [`BoundingBox::new`], so the built detection always carries a normalized
/// box regardless of corner order.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetectionBuilder {
    bbox: BoundingBox,
    score: f32,
}

impl DetectionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Corner-format box (x1, y1, x2, y2); the corners may come in either
    /// order.
    pub fn corners(mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        self.bbox = BoundingBox::new(x1, y1, x2, y2);
        self
    }

    /// Center/size-format box (center x, center y, width, height).
    pub fn centered(mut self, cx: f32, cy: f32, w: f32, h: f32) -> Self {
        self.bbox = BoundingBox::new(cx - w / 2.0, cy - h / 2.0, cx + w / 2.0, cy + h / 2.0);
        self
    }

    /// Confidence score reported by the model.
    pub fn score(mut self, score: f32) -> Self {
        self.score = score;
        self
    }

    /// Build the final [`Detection`].
    pub fn build(self) -> Detection {
        Detection::from_bbox(self.bbox, self.score)
    }
}
