use crate::core::data::complex::Complex;

/// Per-sample computation run by the render workers.
pub trait FractalAlgorithm {
    type Success;

    fn compute(&self, sample: Complex) -> Self::Success;
}
