//! Pixel format conversion for framebuffer sinks.

use crate::core::data::pixel_grid::PixelGrid;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormatError {
    LengthMismatch { expected: usize, found: usize },
}

impl fmt::Display for PixelFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, found } => {
                write!(
                    f,
                    "RGBA frame length {} does not match expected {}",
                    found, expected
                )
            }
        }
    }
}

impl Error for PixelFormatError {}

/// Copies a grid's RGB triples into an RGBA frame, setting alpha to 255.
pub fn copy_grid_to_rgba(grid: &PixelGrid, dst: &mut [u8]) -> Result<(), PixelFormatError> {
    let expected = grid.size().pixel_count() * 4;

    if dst.len() != expected {
        return Err(PixelFormatError::LengthMismatch {
            expected,
            found: dst.len(),
        });
    }

    for (src_pixel, dst_pixel) in grid.buffer().chunks_exact(3).zip(dst.chunks_exact_mut(4)) {
        dst_pixel[..3].copy_from_slice(src_pixel);
        dst_pixel[3] = 255;
    }

    Ok(())
}
