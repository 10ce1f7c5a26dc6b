//! Combined per-frame analysis result.

use crate::analyzer::evaluator::Evaluation;
use crate::analyzer::signal::SignalState;

/// The outcome of analyzing one frame: the classified signal plus the
/// per-vehicle stop-line evaluations.
#[derive(Debug, Clone, Default)]
pub struct FrameReport {
    /// Classified state of the frame's traffic light, `Unknown` when no
    /// light was found.
    pub signal: SignalState,
    /// One evaluation per detected vehicle, in detector order.
    pub vehicles: Vec<Evaluation>,
}

impl FrameReport {
    pub fn new(signal: SignalState, vehicles: Vec<Evaluation>) -> Self {
        Self { signal, vehicles }
    }

    /// Vehicles judged to be violating under this frame's signal.
    pub fn violations(&self) -> impl Iterator<Item = &Evaluation> {
        let signal = self.signal;
        self.vehicles.iter().filter(move |e| e.is_violation(signal))
    }

    pub fn violation_count(&self) -> usize {
        self.violations().count()
    }
}
