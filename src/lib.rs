//! Stop-line and red-light violation analysis for still traffic-camera
//! frames.
//!
//! The core is pure and synchronous: a [`SignalClassifier`] turns a
//! traffic-light crop into a discrete [`SignalState`] from fixed HSV color
//! bands, and a [`StopLineEvaluator`] decides, per detected vehicle box,
//! whether it has crossed (or sits within a tolerance of) a user-drawn
//! [`StopLine`]. A frame's violations are the over-line vehicles seen while
//! the signal is red.
//!
//! Detection itself is pluggable: implement [`DetectionSource`] for your
//! inference backend and drive everything through [`AnalysisPipeline`], or
//! call the analyzer pieces directly on boxes you already have.
//!
//! Every degenerate input degrades to a sentinel (`Unknown`, an empty
//! result) instead of an error; the analyzer functions never fail.

pub mod analyzer;
pub mod frame;
pub mod integration;

pub use analyzer::{
    BoundingBox, ClassifierConfig, Evaluation, EvaluatorConfig, FrameReport, Point,
    SignalClassifier, SignalState, StopLine, StopLineEvaluator,
};
pub use integration::{
    AnalysisPipeline, Detection, DetectionBuilder, DetectionSource, IntoDetections, ObjectClass,
};
