use crate::core::data::complex::Complex;
use crate::core::data::grid_size::GridSize;
use crate::core::data::point::Point;
use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, grid_to_complex, pixel_to_complex_coords,
};
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidExtent { extent: f64 },
    InvalidOrigin { origin: Complex },
    ZeroIterationLimit,
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidExtent { extent } => {
                write!(f, "extent must be positive and finite, got {}", extent)
            }
            Self::InvalidOrigin { origin } => {
                write!(
                    f,
                    "origin must be finite, got {} + {}i",
                    origin.real, origin.imag
                )
            }
            Self::ZeroIterationLimit => {
                write!(f, "iteration limit must be greater than zero")
            }
        }
    }
}

impl Error for ViewportError {}

/// The visible region of the plane plus the iteration budget.
///
/// `origin` is the plane coordinate of the grid centre and `extent` the plane
/// width spanned by the grid. `extent > 0` and `iteration_limit >= 1` hold for
/// every value of this type.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    origin: Complex,
    extent: f64,
    iteration_limit: u32,
}

impl Viewport {
    pub fn new(origin: Complex, extent: f64, iteration_limit: u32) -> Result<Self, ViewportError> {
        if !origin.is_finite() {
            return Err(ViewportError::InvalidOrigin { origin });
        }

        if !extent.is_finite() || extent <= 0.0 {
            return Err(ViewportError::InvalidExtent { extent });
        }

        if iteration_limit == 0 {
            return Err(ViewportError::ZeroIterationLimit);
        }

        Ok(Self {
            origin,
            extent,
            iteration_limit,
        })
    }

    #[must_use]
    pub fn origin(&self) -> Complex {
        self.origin
    }

    #[must_use]
    pub fn extent(&self) -> f64 {
        self.extent
    }

    #[must_use]
    pub fn iteration_limit(&self) -> u32 {
        self.iteration_limit
    }

    pub fn sample(&self, pixel: Point, size: GridSize) -> Result<Complex, PixelToComplexCoordsError> {
        pixel_to_complex_coords(pixel, size, self.origin, self.extent)
    }

    /// Bounds-free variant of [`Viewport::sample`] for the render inner loop,
    /// where `column`/`row` come from the grid's own iteration.
    #[inline]
    #[must_use]
    pub(crate) fn sample_at(&self, column: u32, row: u32, size: GridSize) -> Complex {
        grid_to_complex(column as f64, row as f64, size, self.origin, self.extent)
    }

    /// Shifts the origin by a plane offset. A move that would leave the
    /// origin non-finite leaves the viewport unchanged.
    #[must_use]
    pub fn translated(&self, offset: Complex) -> Self {
        let origin = self.origin + offset;

        if !origin.is_finite() {
            return *self;
        }

        Self { origin, ..*self }
    }

    #[must_use]
    pub fn recentred(&self, origin: Complex) -> Self {
        self.translated(origin - self.origin)
    }

    /// Multiplies the extent by `factor`, capped at `max_extent` when given.
    /// Results that are not positive and finite leave the extent unchanged.
    #[must_use]
    pub fn scaled(&self, factor: f64, max_extent: Option<f64>) -> Self {
        let mut extent = self.extent * factor;

        if let Some(max_extent) = max_extent {
            extent = extent.min(max_extent);
        }

        if !extent.is_finite() || extent <= 0.0 {
            return *self;
        }

        Self { extent, ..*self }
    }

    /// Sets the iteration limit, never going below `minimum` (itself at least 1).
    #[must_use]
    pub fn with_iteration_limit(&self, iteration_limit: u32, minimum: u32) -> Self {
        Self {
            iteration_limit: iteration_limit.max(minimum.max(1)),
            ..*self
        }
    }
}
