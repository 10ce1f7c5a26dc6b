mod bbox;
mod evaluator;
mod geometry;
mod report;
mod signal;

pub use bbox::BoundingBox;
pub use evaluator::{Evaluation, EvaluatorConfig, StopLineEvaluator};
pub use geometry::{
    Point, StopLine, is_above_line, is_below_line, line_intersects_box, signed_distance,
};
pub use report::FrameReport;
pub use signal::{ClassifierConfig, SignalClassifier, SignalState};
