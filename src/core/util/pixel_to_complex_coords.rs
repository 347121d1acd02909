use crate::core::data::complex::Complex;
use crate::core::data::grid_size::GridSize;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToComplexCoordsError {
    PointOutsideGrid { point: Point, size: GridSize },
}

impl fmt::Display for PixelToComplexCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideGrid { point, size } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the {}x{} grid",
                    point.x,
                    point.y,
                    size.width(),
                    size.height()
                )
            }
        }
    }
}

impl Error for PixelToComplexCoordsError {}

/// Maps a pixel to the complex plane.
///
/// The grid centre lands on `origin` and the grid width spans `extent` plane
/// units. Both axes share the same pixel pitch (`extent / width`), so a square
/// grid reproduces `origin + extent * ((x/w - 0.5) + i(0.5 - y/h))` exactly.
/// Rows grow downward while the imaginary axis grows upward.
pub fn pixel_to_complex_coords(
    pixel: Point,
    size: GridSize,
    origin: Complex,
    extent: f64,
) -> Result<Complex, PixelToComplexCoordsError> {
    if !size.contains_point(pixel) {
        return Err(PixelToComplexCoordsError::PointOutsideGrid { point: pixel, size });
    }

    Ok(grid_to_complex(pixel.x as f64, pixel.y as f64, size, origin, extent))
}

#[inline]
pub(crate) fn grid_to_complex(x: f64, y: f64, size: GridSize, origin: Complex, extent: f64) -> Complex {
    let width = size.width() as f64;
    let height = size.height() as f64;

    Complex {
        real: origin.real + extent * (x / width - 0.5),
        imag: origin.imag + extent * (0.5 * height - y) / width,
    }
}
