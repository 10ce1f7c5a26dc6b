//! Loading still frames from disk, behind the `image-io` feature.

use std::path::Path;

use log::debug;
use ndarray::Array3;
use thiserror::Error;

/// Failure to bring an image file into an analyzable frame buffer.
#[derive(Debug, Error)]
pub enum FrameIoError {
    #[error("failed to load image: {0}")]
    Image(#[from] image::ImageError),
    #[error("decoded pixel buffer does not match image dimensions: {0}")]
    Shape(#[from] ndarray::ShapeError),
}

/// Load an image file as an RGB frame in HWC layout.
pub fn load_rgb<P: AsRef<Path>>(path: P) -> Result<Array3<u8>, FrameIoError> {
    let img = image::open(path.as_ref())?.to_rgb8();
    let (w, h) = img.dimensions();
    debug!("loaded {}x{} frame from {:?}", w, h, path.as_ref());

    let frame = Array3::from_shape_vec((h as usize, w as usize, 3), img.into_raw())?;
    Ok(frame)
}
