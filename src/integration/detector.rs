//! Trait for object detection inference backends.

use ndarray::ArrayView3;

use crate::analyzer::BoundingBox;

/// Object classes the analysis asks a detector for.
///
/// The variants mirror the two COCO classes the reference pipeline filters
/// on: cars and traffic lights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectClass {
    /// A road vehicle.
    Vehicle,
    /// A traffic light.
    TrafficLight,
}

impl ObjectClass {
    /// The COCO dataset class id for this object class.
    #[inline]
    pub fn coco_id(self) -> u32 {
        match self {
            Self::Vehicle => 2,
            Self::TrafficLight => 9,
        }
    }
}

/// A single detector output: a validated box plus its confidence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Detection {
    /// Bounding box in TLBR pixel coordinates.
    pub bbox: BoundingBox,
    /// Detection confidence score.
    pub score: f32,
}

impl Detection {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32, score: f32) -> Self {
        Self {
            bbox: BoundingBox::new(x1, y1, x2, y2),
            score,
        }
    }

    pub fn from_bbox(bbox: BoundingBox, score: f32) -> Self {
        Self { bbox, score }
    }
}

/// Trait for object detection inference backends.
///
/// Implement this trait to connect any detection model to the analysis
/// pipeline. The pipeline only reads bounding boxes from the returned
/// detections; it expects the backend to have already filtered by the
/// requested class.
///
/// # Example
///
/// ```ignore
/// use stopline_rs::{DetectionSource, Detection, ObjectClass};
/// use ndarray::ArrayView3;
///
/// struct MyDetector {
///     // Your model here
/// }
///
/// impl DetectionSource for MyDetector {
///     type Error = std::io::Error;
///
///     fn detect(
///         &mut self,
///         frame: ArrayView3<u8>,
///         class: ObjectClass,
///     ) -> Result<Vec<Detection>, Self::Error> {
///         // Run inference and return detections of the requested class
///         Ok(vec![])
///     }
/// }
/// ```
pub trait DetectionSource {
    /// Error type for detection failures.
    type Error;

    /// Run inference on an RGB frame (HWC layout) and return detections of
    /// the requested class.
    fn detect(
        &mut self,
        frame: ArrayView3<u8>,
        class: ObjectClass,
    ) -> Result<Vec<Detection>, Self::Error>;
}

/// Helper trait for converting model-specific outputs to `Detection`.
///
/// Implement this for your model's output format to enable easy conversion.
pub trait IntoDetections {
    /// Convert the output into a vector of detections.
    fn into_detections(self) -> Vec<Detection>;
}

impl IntoDetections for Vec<Detection> {
    fn into_detections(self) -> Vec<Detection> {
        self
    }
}

/// Raw detector rows convert by dropping entries too short to carry a box.
impl IntoDetections for Vec<Vec<f32>> {
    fn into_detections(self) -> Vec<Detection> {
        self.into_iter()
            .filter_map(|row| {
                let bbox = BoundingBox::from_slice(&row)?;
                let score = row.get(4).copied().unwrap_or(0.0);
                Some(Detection::from_bbox(bbox, score))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coco_ids() {
        assert_eq!(ObjectClass::Vehicle.coco_id(), 2);
        assert_eq!(ObjectClass::TrafficLight.coco_id(), 9);
    }

    #[test]
    fn test_raw_rows_drop_short_entries() {
        let rows = vec![
            vec![10.0, 20.0, 50.0, 80.0, 0.9],
            vec![1.0, 2.0, 3.0], // malformed, silently skipped
            vec![0.0, 0.0, 5.0, 5.0],
        ];
        let detections = rows.into_detections();
        assert_eq!(detections.len(), 2);
        assert_eq!(detections[0].score, 0.9);
        assert_eq!(detections[1].score, 0.0);
    }
}
