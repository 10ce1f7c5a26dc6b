//! Pixel-buffer plumbing around the analysis core.
//!
//! Frames and crops are `ndarray` buffers in HWC layout with RGB channel
//! order, matching what the detector backends consume.

mod preprocess;
mod roi;

pub use preprocess::{PreprocessError, median_blur};
pub use roi::crop;

#[cfg(feature = "image-io")]
mod io;

#[cfg(feature = "image-io")]
pub use io::{FrameIoError, load_rgb};
