use crate::controllers::interactive::data::frame_stats::FrameStats;
use crate::controllers::interactive::ports::display_sink::DisplaySink;
use crate::core::data::grid_size::GridSize;
use crate::core::data::pixel_grid::PixelGrid;
use crate::presenters::pixels::pixel_format::{PixelFormatError, copy_grid_to_rgba};
use pixels::{Pixels, SurfaceTexture};
use std::error::Error;
use std::fmt;
use winit::window::Window;

const WINDOW_TITLE: &str = "Mandelbrot";

#[derive(Debug)]
pub enum PixelsPresenterError {
    Format(PixelFormatError),
    Pixels(pixels::Error),
    Texture(pixels::TextureError),
}

impl fmt::Display for PixelsPresenterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format(err) => write!(f, "{}", err),
            Self::Pixels(err) => write!(f, "pixels error: {}", err),
            Self::Texture(err) => write!(f, "surface error: {}", err),
        }
    }
}

impl Error for PixelsPresenterError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Format(err) => Some(err),
            Self::Pixels(err) => Some(err),
            Self::Texture(err) => Some(err),
        }
    }
}

impl From<PixelFormatError> for PixelsPresenterError {
    fn from(err: PixelFormatError) -> Self {
        Self::Format(err)
    }
}

impl From<pixels::TextureError> for PixelsPresenterError {
    fn from(err: pixels::TextureError) -> Self {
        Self::Texture(err)
    }
}

impl From<pixels::Error> for PixelsPresenterError {
    fn from(err: pixels::Error) -> Self {
        Self::Pixels(err)
    }
}

/// Shows frames in a window through a `pixels` framebuffer sized to the grid.
/// Frame statistics go into the window title.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    window: &'static Window,
}

impl DisplaySink for PixelsPresenter {
    type Error = PixelsPresenterError;

    fn present(&mut self, grid: &PixelGrid, stats: &FrameStats) -> Result<(), Self::Error> {
        copy_grid_to_rgba(grid, self.pixels.frame_mut())?;
        self.window
            .set_title(&format!("{} | {}", WINDOW_TITLE, stats.summary()));
        self.pixels.render()?;

        Ok(())
    }
}

impl PixelsPresenter {
    pub fn new(window: &'static Window, grid_size: GridSize) -> Result<Self, PixelsPresenterError> {
        let surface = window.inner_size();
        let surface_texture = SurfaceTexture::new(surface.width, surface.height, window);
        let pixels = Pixels::new(grid_size.width(), grid_size.height(), surface_texture)?;

        Ok(Self { pixels, window })
    }

    /// Follows window resizes; the grid keeps its size and is scaled.
    pub fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), PixelsPresenterError> {
        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)?;
        Ok(())
    }
}
