use crate::core::data::grid_size::GridSizeError;
use crate::core::data::viewport::ViewportError;
use std::{error::Error, fmt};

#[derive(Debug, PartialEq)]
pub enum MandelbrotError {
    ZeroMaxIterationsError,
}

impl fmt::Display for MandelbrotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterationsError => {
                write!(f, "Maximum iterations must be greater than zero")
            }
        }
    }
}

impl Error for MandelbrotError {}

/// Rejected configuration, reported once at startup.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    GridSize(GridSizeError),
    Viewport(ViewportError),
    ZeroWorkerCount,
    InvalidMaxExtent { max_extent: f64 },
    MaxExtentBelowInitial { max_extent: f64, initial_extent: f64 },
    InvalidSaturation { saturation: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GridSize(err) => write!(f, "invalid grid size: {}", err),
            Self::Viewport(err) => write!(f, "invalid initial view: {}", err),
            Self::ZeroWorkerCount => write!(f, "worker count must be at least 1"),
            Self::InvalidMaxExtent { max_extent } => {
                write!(f, "max extent must be positive and finite, got {}", max_extent)
            }
            Self::MaxExtentBelowInitial {
                max_extent,
                initial_extent,
            } => {
                write!(
                    f,
                    "max extent {} is smaller than the initial extent {}",
                    max_extent, initial_extent
                )
            }
            Self::InvalidSaturation { saturation } => {
                write!(f, "saturation must be within [0, 1], got {}", saturation)
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::GridSize(err) => Some(err),
            Self::Viewport(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GridSizeError> for ConfigError {
    fn from(err: GridSizeError) -> Self {
        Self::GridSize(err)
    }
}

impl From<ViewportError> for ConfigError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}
