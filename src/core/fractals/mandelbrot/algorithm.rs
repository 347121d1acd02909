use crate::core::actions::render_grid::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

/// Escape radius 2, compared squared.
const ESCAPE_NORM_SQUARED: f64 = 4.0;

/// Counts iterations of `z ← z² + c` from `z = 0` until `|z|² > 4` or the
/// budget runs out. A return value equal to `iteration_limit` means the
/// orbit never escaped.
#[must_use]
pub fn escape_time(c: Complex, iteration_limit: u32) -> u32 {
    let mut z = Complex::ZERO;

    for iteration in 0..iteration_limit {
        if z.norm_squared() > ESCAPE_NORM_SQUARED {
            return iteration;
        }
        z = z * z + c;
    }

    iteration_limit
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MandelbrotAlgorithm {
    iteration_limit: u32,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;

    #[inline]
    fn compute(&self, sample: Complex) -> Self::Success {
        escape_time(sample, self.iteration_limit)
    }
}

impl MandelbrotAlgorithm {
    pub fn new(iteration_limit: u32) -> Result<Self, MandelbrotError> {
        if iteration_limit == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        Ok(Self { iteration_limit })
    }

    /// Infallible, since a viewport's iteration limit is never zero.
    #[must_use]
    pub fn for_viewport(viewport: &Viewport) -> Self {
        Self {
            iteration_limit: viewport.iteration_limit(),
        }
    }

    #[must_use]
    pub fn iteration_limit(&self) -> u32 {
        self.iteration_limit
    }
}
