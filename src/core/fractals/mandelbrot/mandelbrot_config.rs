use std::num::NonZeroU32;

use crate::core::actions::render_grid::render_grid::RenderStrategy;
use crate::core::data::complex::Complex;
use crate::core::data::grid_size::GridSize;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::colour_maps::hue_cycle::DEFAULT_SATURATION;
use crate::core::fractals::mandelbrot::errors::ConfigError;
use crate::core::util::calculate_worker_count::calculate_worker_count;

pub const DEFAULT_GRID_WIDTH: u32 = 600;
pub const DEFAULT_GRID_HEIGHT: u32 = 600;
pub const DEFAULT_ORIGIN: Complex = Complex {
    real: -0.5,
    imag: 0.0,
};
pub const DEFAULT_EXTENT: f64 = 2.5;
pub const DEFAULT_ITERATION_LIMIT: u32 = 250;

/// How far out the view may zoom, as a multiple of the initial extent.
pub const DEFAULT_MAX_EXTENT_FACTOR: f64 = 4.0;

/// Startup settings as given by the user. Nothing here is trusted until
/// [`MandelbrotConfig::validate`] has accepted it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotConfig {
    pub grid_width: u32,
    pub grid_height: u32,
    /// `None` uses every available hardware thread.
    pub worker_count: Option<u32>,
    pub initial_origin: Complex,
    pub initial_extent: f64,
    pub initial_iteration_limit: u32,
    /// Upper bound for zooming out. `None` lets the view zoom out freely.
    pub max_extent: Option<f64>,
    pub saturation: f64,
    pub strategy: RenderStrategy,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            worker_count: None,
            initial_origin: DEFAULT_ORIGIN,
            initial_extent: DEFAULT_EXTENT,
            initial_iteration_limit: DEFAULT_ITERATION_LIMIT,
            max_extent: Some(DEFAULT_EXTENT * DEFAULT_MAX_EXTENT_FACTOR),
            saturation: DEFAULT_SATURATION,
            strategy: RenderStrategy::default(),
        }
    }
}

impl MandelbrotConfig {
    pub fn validate(&self) -> Result<ValidatedConfig, ConfigError> {
        let grid_size = GridSize::new(self.grid_width, self.grid_height)?;
        let initial_view = Viewport::new(
            self.initial_origin,
            self.initial_extent,
            self.initial_iteration_limit,
        )?;

        let workers = match self.worker_count {
            Some(count) => Some(NonZeroU32::new(count).ok_or(ConfigError::ZeroWorkerCount)?),
            None => None,
        };

        if let Some(max_extent) = self.max_extent {
            if !max_extent.is_finite() || max_extent <= 0.0 {
                return Err(ConfigError::InvalidMaxExtent { max_extent });
            }

            if max_extent < self.initial_extent {
                return Err(ConfigError::MaxExtentBelowInitial {
                    max_extent,
                    initial_extent: self.initial_extent,
                });
            }
        }

        if !(0.0..=1.0).contains(&self.saturation) {
            return Err(ConfigError::InvalidSaturation {
                saturation: self.saturation,
            });
        }

        Ok(ValidatedConfig {
            grid_size,
            initial_view,
            workers: calculate_worker_count(workers),
            max_extent: self.max_extent,
            saturation: self.saturation,
            strategy: self.strategy,
        })
    }
}

/// Configuration that passed validation, with defaults resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedConfig {
    pub grid_size: GridSize,
    pub initial_view: Viewport,
    pub workers: NonZeroU32,
    pub max_extent: Option<f64>,
    pub saturation: f64,
    pub strategy: RenderStrategy,
}
