//! Integration module for connecting object detection backends with the
//! stop-line analysis core.
//!
//! This module provides traits and utilities for feeding any inference
//! backend's output into the signal classifier and stop-line evaluator.

mod builder;
mod detector;
mod pipeline;

pub use builder::DetectionBuilder;
pub use detector::{Detection, DetectionSource, IntoDetections, ObjectClass};
pub use pipeline::AnalysisPipeline;
