use crate::core::actions::render_grid::render_grid::RenderGridError;
use crate::core::fractals::mandelbrot::colour_maps::errors::MandelbrotColourMapError;
use std::error::Error;
use std::fmt;

/// A frame could not be produced or shown. `E` is the display sink's error.
#[derive(Debug)]
pub enum FrameLoopError<E> {
    Render(RenderGridError<MandelbrotColourMapError>),
    Display(E),
}

impl<E: fmt::Display> fmt::Display for FrameLoopError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Render(err) => write!(f, "render failed: {}", err),
            Self::Display(err) => write!(f, "display sink failed: {}", err),
        }
    }
}

impl<E: Error + 'static> Error for FrameLoopError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Render(err) => Some(err),
            Self::Display(err) => Some(err),
        }
    }
}

impl<E> From<RenderGridError<MandelbrotColourMapError>> for FrameLoopError<E> {
    fn from(err: RenderGridError<MandelbrotColourMapError>) -> Self {
        Self::Render(err)
    }
}
