pub mod controllers;
pub mod core;
pub mod input;
pub mod presenters;

pub use crate::controllers::interactive::{
    DisplaySink, FrameLoop, FrameLoopError, FrameOutcome, FrameState, FrameStats, InputSource,
};
pub use crate::core::actions::render_grid::render_grid::{
    RenderGridError, RenderReport, RenderStrategy, TileScheduler,
};
pub use crate::core::data::{
    colour::Colour, complex::Complex, grid_size::GridSize, pixel_grid::PixelGrid, point::Point,
    row_range::RowRange, viewport::Viewport,
};
pub use crate::core::fractals::mandelbrot::algorithm::{MandelbrotAlgorithm, escape_time};
pub use crate::core::fractals::mandelbrot::colour_maps::hue_cycle::MandelbrotHueCycle;
pub use crate::core::fractals::mandelbrot::errors::ConfigError;
pub use crate::core::fractals::mandelbrot::mandelbrot_config::{MandelbrotConfig, ValidatedConfig};
pub use crate::core::navigation::{Command, NavigationLimits, PanDirection, ZoomStep, navigate};
pub use crate::core::util::partition_rows::partition_rows;
pub use crate::input::cli::CliArgs;
pub use crate::input::script::ScriptedInput;
pub use crate::presenters::file::ppm::PpmFilePresenter;
