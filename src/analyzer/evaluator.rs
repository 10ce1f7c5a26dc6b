//! Stop-line evaluation for detected vehicle boxes.

use crate::analyzer::bbox::BoundingBox;
use crate::analyzer::geometry::StopLine;
use crate::analyzer::signal::SignalState;

/// Configuration for the stop-line evaluator.
#[derive(Debug, Clone)]
pub struct EvaluatorConfig {
    /// Distance in pixels behind the line within which a vehicle still
    /// counts as over it. A policy knob, not a derived constant.
    pub threshold: f32,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self { threshold: 50.0 }
    }
}

/// Per-vehicle evaluation against the stop-line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    /// The vehicle's detection box.
    pub bbox: BoundingBox,
    /// Whether the vehicle has crossed, or sits within the threshold of,
    /// the line.
    pub is_over: bool,
    /// Distance from the box's bottom-center to the line; non-positive
    /// when `is_over`, so consumers can sort and filter on sign alone.
    pub distance: f32,
}

impl Evaluation {
    /// The violation decision table: over the line while the light is red.
    ///
    /// `Green`, `Yellow` and `Unknown` never produce a violation; an
    /// unidentified light gives the driver the benefit of the doubt.
    #[inline]
    pub fn is_violation(&self, signal: SignalState) -> bool {
        self.is_over && signal == SignalState::Red
    }
}

/// Evaluates vehicle boxes against a user-drawn stop-line.
#[derive(Debug, Clone, Default)]
pub struct StopLineEvaluator {
    config: EvaluatorConfig,
}

impl StopLineEvaluator {
    pub fn new(config: EvaluatorConfig) -> Self {
        Self { config }
    }

    /// The configured proximity threshold in pixels.
    #[inline]
    pub fn threshold(&self) -> f32 {
        self.config.threshold
    }

    /// Evaluate each box against the line.
    ///
    /// With no line configured there is nothing to evaluate and the result
    /// is empty; this is not a fault. A box is over the line when the line
    /// crosses it, or when its bottom-center has passed the line or sits
    /// within [`EvaluatorConfig::threshold`] pixels behind it.
    pub fn evaluate(&self, boxes: &[BoundingBox], line: Option<&StopLine>) -> Vec<Evaluation> {
        let Some(line) = line else {
            return Vec::new();
        };

        boxes
            .iter()
            .map(|bbox| self.evaluate_one(bbox, line))
            .collect()
    }

    fn evaluate_one(&self, bbox: &BoundingBox, line: &StopLine) -> Evaluation {
        let intersects = line.intersects(bbox);
        let bottom = bbox.bottom_center();
        let below = line.is_below(bottom);
        let distance = line.distance_to(bottom);

        let is_over = intersects || (below && distance <= self.config.threshold);

        Evaluation {
            bbox: *bbox,
            is_over,
            // Negated when over, so "on or past the line" reads as <= 0.
            distance: if is_over { -distance } else { distance },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::geometry::Point;

    fn horizontal_line() -> StopLine {
        StopLine::new(Point::new(0.0, 100.0), Point::new(200.0, 100.0))
    }

    #[test]
    fn test_no_line_yields_empty() {
        let evaluator = StopLineEvaluator::default();
        let boxes = [BoundingBox::new(50.0, 120.0, 150.0, 180.0)];
        assert!(evaluator.evaluate(&boxes, None).is_empty());
    }

    #[test]
    fn test_no_boxes_yields_empty() {
        let evaluator = StopLineEvaluator::default();
        let line = horizontal_line();
        assert!(evaluator.evaluate(&[], Some(&line)).is_empty());
    }

    #[test]
    fn test_box_beyond_threshold_is_not_over() {
        // Bottom-center (100, 180) is 80px past the line, over the 50px
        // default threshold and not intersecting, so not over.
        let evaluator = StopLineEvaluator::default();
        let line = horizontal_line();
        let boxes = [BoundingBox::new(50.0, 120.0, 150.0, 180.0)];

        let results = evaluator.evaluate(&boxes, Some(&line));
        assert_eq!(results.len(), 1);
        assert!(!results[0].is_over);
        assert!((results[0].distance - 80.0).abs() < 1e-4);
    }

    #[test]
    fn test_wider_threshold_flips_decision() {
        let evaluator = StopLineEvaluator::new(EvaluatorConfig { threshold: 100.0 });
        let line = horizontal_line();
        let boxes = [BoundingBox::new(50.0, 120.0, 150.0, 180.0)];

        let results = evaluator.evaluate(&boxes, Some(&line));
        assert!(results[0].is_over);
        assert!((results[0].distance + 80.0).abs() < 1e-4);
    }

    #[test]
    fn test_straddling_box_is_over_regardless_of_threshold() {
        let evaluator = StopLineEvaluator::new(EvaluatorConfig { threshold: 0.0 });
        let line = horizontal_line();
        let boxes = [BoundingBox::new(50.0, 80.0, 150.0, 120.0)];

        let results = evaluator.evaluate(&boxes, Some(&line));
        assert!(results[0].is_over);
        assert!(results[0].distance <= 0.0);
    }

    #[test]
    fn test_box_before_line_keeps_positive_distance() {
        let evaluator = StopLineEvaluator::default();
        let line = horizontal_line();
        let boxes = [BoundingBox::new(50.0, 10.0, 150.0, 60.0)];

        let results = evaluator.evaluate(&boxes, Some(&line));
        assert!(!results[0].is_over);
        assert!((results[0].distance - 40.0).abs() < 1e-4);
    }

    #[test]
    fn test_box_just_behind_line_within_threshold() {
        let evaluator = StopLineEvaluator::default();
        let line = horizontal_line();
        // Bottom-center at y = 130, 30px past the line.
        let boxes = [BoundingBox::new(50.0, 105.0, 150.0, 130.0)];

        let results = evaluator.evaluate(&boxes, Some(&line));
        assert!(results[0].is_over);
        assert!((results[0].distance + 30.0).abs() < 1e-4);
    }

    #[test]
    fn test_violation_table() {
        let over = Evaluation {
            bbox: BoundingBox::default(),
            is_over: true,
            distance: -10.0,
        };
        let behind = Evaluation {
            bbox: BoundingBox::default(),
            is_over: false,
            distance: 10.0,
        };

        assert!(over.is_violation(SignalState::Red));
        assert!(!over.is_violation(SignalState::Green));
        assert!(!over.is_violation(SignalState::Yellow));
        assert!(!over.is_violation(SignalState::Unknown));
        assert!(!behind.is_violation(SignalState::Red));
    }
}
