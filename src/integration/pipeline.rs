//! AnalysisPipeline for combining detection with stop-line analysis.

use log::debug;
use ndarray::ArrayView3;

use crate::analyzer::{
    BoundingBox, ClassifierConfig, EvaluatorConfig, FrameReport, SignalClassifier, SignalState,
    StopLine, StopLineEvaluator,
};
use crate::frame::crop;

use super::{DetectionSource, ObjectClass};

/// End-to-end analysis of a single frame: detection, traffic-light
/// classification, and stop-line evaluation.
///
/// Bundles any [`DetectionSource`] with the signal classifier and the
/// stop-line evaluator.
pub struct AnalysisPipeline<D: DetectionSource> {
    detector: D,
    classifier: SignalClassifier,
    evaluator: StopLineEvaluator,
}

impl<D: DetectionSource> AnalysisPipeline<D> {
    /// Create a pipeline with explicit classifier and evaluator configs.
    pub fn new(detector: D, classifier: ClassifierConfig, evaluator: EvaluatorConfig) -> Self {
        Self {
            detector,
            classifier: SignalClassifier::new(classifier),
            evaluator: StopLineEvaluator::new(evaluator),
        }
    }

    /// Create a pipeline with default configuration.
    pub fn with_default_config(detector: D) -> Self {
        Self::new(
            detector,
            ClassifierConfig::default(),
            EvaluatorConfig::default(),
        )
    }

    /// Analyze one RGB frame (HWC layout) against the given stop-line.
    ///
    /// Runs vehicle and traffic-light detection, classifies the first
    /// traffic light found (none found means [`SignalState::Unknown`]),
    /// and evaluates every vehicle box against the line. With no line the
    /// report carries the signal but no vehicle evaluations.
    ///
    /// Only detector failures surface as errors; degenerate crops and
    /// missing lines degrade inside the core.
    pub fn analyze(
        &mut self,
        frame: ArrayView3<u8>,
        stop_line: Option<&StopLine>,
    ) -> Result<FrameReport, D::Error> {
        let vehicles = self.detector.detect(frame, ObjectClass::Vehicle)?;
        let lights = self.detector.detect(frame, ObjectClass::TrafficLight)?;

        let signal = match lights.first() {
            Some(light) => {
                let roi = crop(frame, &light.bbox);
                self.classifier.classify(roi.view())
            }
            None => SignalState::Unknown,
        };
        debug!(
            "frame analysis: {} vehicles, {} traffic lights, signal {:?}",
            vehicles.len(),
            lights.len(),
            signal
        );

        let boxes: Vec<BoundingBox> = vehicles.iter().map(|d| d.bbox).collect();
        let evaluations = self.evaluator.evaluate(&boxes, stop_line);

        let report = FrameReport::new(signal, evaluations);
        if report.violation_count() > 0 {
            debug!("{} violation(s) detected", report.violation_count());
        }
        Ok(report)
    }

    /// Get a reference to the underlying detector.
    pub fn detector(&self) -> &D {
        &self.detector
    }

    /// Get a mutable reference to the underlying detector.
    pub fn detector_mut(&mut self) -> &mut D {
        &mut self.detector
    }

    /// Get a reference to the signal classifier.
    pub fn classifier(&self) -> &SignalClassifier {
        &self.classifier
    }

    /// Get a reference to the stop-line evaluator.
    pub fn evaluator(&self) -> &StopLineEvaluator {
        &self.evaluator
    }
}
