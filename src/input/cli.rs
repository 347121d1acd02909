use crate::core::actions::render_grid::render_grid::RenderStrategy;
use crate::core::data::complex::Complex;
use crate::core::fractals::mandelbrot::mandelbrot_config::{
    DEFAULT_EXTENT, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_ITERATION_LIMIT,
    DEFAULT_MAX_EXTENT_FACTOR, DEFAULT_ORIGIN, MandelbrotConfig,
};
use crate::core::fractals::mandelbrot::colour_maps::hue_cycle::DEFAULT_SATURATION;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum StrategyArg {
    #[default]
    Rayon,
    Threads,
}

impl From<StrategyArg> for RenderStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Rayon => RenderStrategy::RayonPool,
            StrategyArg::Threads => RenderStrategy::ScopedThreads,
        }
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "mandelbrot_explorer")]
#[command(about = "Escape-time Mandelbrot renderer")]
pub struct CliArgs {
    #[arg(long, default_value_t = DEFAULT_GRID_WIDTH)]
    pub width: u32,

    #[arg(long, default_value_t = DEFAULT_GRID_HEIGHT)]
    pub height: u32,

    /// Render workers (default: all hardware threads)
    #[arg(long)]
    pub workers: Option<u32>,

    #[arg(long, allow_negative_numbers = true, default_value_t = DEFAULT_ORIGIN.real)]
    pub origin_re: f64,

    #[arg(long, allow_negative_numbers = true, default_value_t = DEFAULT_ORIGIN.imag)]
    pub origin_im: f64,

    /// Width of the visible plane region
    #[arg(long, allow_negative_numbers = true, default_value_t = DEFAULT_EXTENT)]
    pub extent: f64,

    #[arg(long, default_value_t = DEFAULT_ITERATION_LIMIT)]
    pub iterations: u32,

    /// Largest extent zooming out may reach (default: 4x the initial extent)
    #[arg(long, allow_negative_numbers = true)]
    pub max_extent: Option<f64>,

    /// Let zooming out go without bound
    #[arg(long, conflicts_with = "max_extent")]
    pub no_max_extent: bool,

    #[arg(long, allow_negative_numbers = true, default_value_t = DEFAULT_SATURATION)]
    pub saturation: f64,

    #[arg(long, value_enum, default_value_t = StrategyArg::Rayon)]
    pub strategy: StrategyArg,

    /// Whitespace-separated commands applied before rendering, e.g. "zoom-in up center:120,80"
    #[arg(long, default_value = "")]
    pub commands: String,

    /// Where the headless renderer writes its PPM image
    #[arg(long, default_value = "mandelbrot.ppm")]
    pub output: PathBuf,
}

impl CliArgs {
    /// Unvalidated configuration; call [`MandelbrotConfig::validate`] on it.
    #[must_use]
    pub fn to_config(&self) -> MandelbrotConfig {
        let max_extent = if self.no_max_extent {
            None
        } else {
            Some(
                self.max_extent
                    .unwrap_or(self.extent * DEFAULT_MAX_EXTENT_FACTOR),
            )
        };

        MandelbrotConfig {
            grid_width: self.width,
            grid_height: self.height,
            worker_count: self.workers,
            initial_origin: Complex::new(self.origin_re, self.origin_im),
            initial_extent: self.extent,
            initial_iteration_limit: self.iterations,
            max_extent,
            saturation: self.saturation,
            strategy: self.strategy.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_config_defaults() {
        let args = CliArgs::try_parse_from(["mandelbrot_explorer"]).unwrap();

        assert_eq!(args.to_config(), MandelbrotConfig::default());
        assert_eq!(args.output, PathBuf::from("mandelbrot.ppm"));
        assert!(args.commands.is_empty());
    }

    #[test]
    fn test_flags_are_applied() {
        let args = CliArgs::try_parse_from([
            "mandelbrot_explorer",
            "--width",
            "320",
            "--height",
            "200",
            "--workers",
            "2",
            "--origin-re",
            "-0.75",
            "--origin-im",
            "0.1",
            "--extent",
            "0.5",
            "--iterations",
            "500",
            "--saturation",
            "1",
            "--strategy",
            "threads",
            "--commands",
            "zoom-in up",
            "--output",
            "out.ppm",
        ])
        .unwrap();
        let config = args.to_config();

        assert_eq!(config.grid_width, 320);
        assert_eq!(config.grid_height, 200);
        assert_eq!(config.worker_count, Some(2));
        assert_eq!(config.initial_origin, Complex::new(-0.75, 0.1));
        assert_eq!(config.initial_extent, 0.5);
        assert_eq!(config.initial_iteration_limit, 500);
        assert_eq!(config.max_extent, Some(2.0));
        assert_eq!(config.saturation, 1.0);
        assert_eq!(config.strategy, RenderStrategy::ScopedThreads);
        assert_eq!(args.commands, "zoom-in up");
        assert_eq!(args.output, PathBuf::from("out.ppm"));
    }

    #[test]
    fn test_max_extent_options() {
        let explicit =
            CliArgs::try_parse_from(["mandelbrot_explorer", "--max-extent", "6"]).unwrap();
        let disabled = CliArgs::try_parse_from(["mandelbrot_explorer", "--no-max-extent"]).unwrap();

        assert_eq!(explicit.to_config().max_extent, Some(6.0));
        assert_eq!(disabled.to_config().max_extent, None);
        assert!(
            CliArgs::try_parse_from([
                "mandelbrot_explorer",
                "--max-extent",
                "6",
                "--no-max-extent"
            ])
            .is_err()
        );
    }

    #[test]
    fn test_unknown_strategy_is_rejected() {
        assert!(CliArgs::try_parse_from(["mandelbrot_explorer", "--strategy", "gpu"]).is_err());
    }
}
