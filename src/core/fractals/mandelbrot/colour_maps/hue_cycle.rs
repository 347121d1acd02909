use crate::core::actions::render_grid::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_maps::errors::MandelbrotColourMapError;

pub const DEFAULT_SATURATION: f64 = 0.8;

const HUE_PERIOD: u32 = 360;
const SECTOR_DEGREES: u32 = 60;

/// Colours escape times by hue: one full turn of the colour wheel every
/// 360 iterations, at a fixed saturation. Interior points are black.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotHueCycle {
    max_iterations: u32,
    saturation: f64,
}

impl ColourMap<u32> for MandelbrotHueCycle {
    type Failure = MandelbrotColourMapError;

    fn map(&self, iterations: u32) -> Result<Colour, Self::Failure> {
        if iterations > self.max_iterations {
            return Err(MandelbrotColourMapError::IterationsExceedMax {
                iterations,
                max_iterations: self.max_iterations,
            });
        }

        let value = if iterations == self.max_iterations { 0.0 } else { 1.0 };

        Ok(hsv_to_rgb(iterations % HUE_PERIOD, self.saturation, value))
    }
}

impl MandelbrotHueCycle {
    /// `saturation` is clamped into `[0, 1]`.
    #[must_use]
    pub fn new(max_iterations: u32, saturation: f64) -> Self {
        Self {
            max_iterations,
            saturation: saturation.clamp(0.0, 1.0),
        }
    }

    #[must_use]
    pub fn saturation(&self) -> f64 {
        self.saturation
    }
}

/// Sector-based HSV to RGB conversion for a whole-degree hue in `0..360`.
fn hsv_to_rgb(hue: u32, saturation: f64, value: f64) -> Colour {
    let sector = hue / SECTOR_DEGREES;
    let offset = hue as f64 / SECTOR_DEGREES as f64 - sector as f64;

    let p = value * (1.0 - saturation);
    let q = value * (1.0 - saturation * offset);
    let t = value * (1.0 - saturation * (1.0 - offset));

    let (r, g, b) = match sector {
        0 => (value, t, p),
        1 => (q, value, p),
        2 => (p, value, t),
        3 => (p, q, value),
        4 => (t, p, value),
        _ => (value, p, q),
    };

    Colour {
        r: to_channel(r),
        g: to_channel(g),
        b: to_channel(b),
    }
}

fn to_channel(component: f64) -> u8 {
    (component * 255.0).round().clamp(0.0, 255.0) as u8
}
