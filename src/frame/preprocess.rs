//! Frame denoising ahead of detection.

use ndarray::{Array3, ArrayView3};
use thiserror::Error;

/// Invalid preprocessing configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PreprocessError {
    /// Median filtering needs an odd window so the center pixel exists.
    #[error("median blur kernel size must be odd, got {0}")]
    EvenKernelSize(usize),
}

/// Per-channel median filter with a square `kernel_size` window.
///
/// Edge pixels use a clamped window. The kernel size must be odd;
/// an even size is the one configuration error this crate reports
/// instead of degrading.
pub fn median_blur(
    frame: ArrayView3<u8>,
    kernel_size: usize,
) -> Result<Array3<u8>, PreprocessError> {
    if kernel_size % 2 == 0 {
        return Err(PreprocessError::EvenKernelSize(kernel_size));
    }

    let (h, w, c) = frame.dim();
    let radius = (kernel_size / 2) as isize;
    let mut out = Array3::zeros((h, w, c));
    let mut window = Vec::with_capacity(kernel_size * kernel_size);

    for y in 0..h {
        for x in 0..w {
            for ch in 0..c {
                window.clear();
                for dy in -radius..=radius {
                    for dx in -radius..=radius {
                        let ny = (y as isize + dy).clamp(0, h as isize - 1) as usize;
                        let nx = (x as isize + dx).clamp(0, w as isize - 1) as usize;
                        window.push(frame[[ny, nx, ch]]);
                    }
                }
                window.sort_unstable();
                out[[y, x, ch]] = window[window.len() / 2];
            }
        }
    }

    Ok(out)
}
