use log::{debug, error, trace, warn};
use std::time::{Duration, Instant};

use crate::controllers::interactive::data::frame_stats::FrameStats;
use crate::controllers::interactive::errors::frame_loop::FrameLoopError;
use crate::controllers::interactive::ports::display_sink::DisplaySink;
use crate::controllers::interactive::ports::input_source::InputSource;
use crate::core::actions::render_grid::render_grid::{RenderGridError, TileScheduler};
use crate::core::data::pixel_grid::PixelGrid;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_maps::errors::MandelbrotColourMapError;
use crate::core::fractals::mandelbrot::colour_maps::hue_cycle::MandelbrotHueCycle;
use crate::core::fractals::mandelbrot::mandelbrot_config::ValidatedConfig;
use crate::core::navigation::limits::NavigationLimits;
use crate::core::navigation::navigate::{NavigationWarning, navigate};

/// Whether the grid still shows the current viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameState {
    Clean,
    Dirty,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameOutcome {
    Presented(FrameStats),
    Terminated,
}

/// Owns the view state and the grid, and turns input into presented frames.
///
/// Input is drained before any recompute starts, so the viewport never
/// changes while the tile scheduler is reading it.
#[derive(Debug)]
pub struct FrameLoop {
    viewport: Viewport,
    initial_view: Viewport,
    limits: NavigationLimits,
    saturation: f64,
    grid: PixelGrid,
    scheduler: TileScheduler,
    state: FrameState,
    frames_presented: u64,
    last_render_duration: Duration,
    last_frame_at: Option<Instant>,
}

impl FrameLoop {
    #[must_use]
    pub fn new(config: &ValidatedConfig) -> Self {
        debug!(
            "frame loop: {}x{} grid, {} workers, {:?}",
            config.grid_size.width(),
            config.grid_size.height(),
            config.workers,
            config.strategy
        );

        Self {
            viewport: config.initial_view,
            initial_view: config.initial_view,
            limits: NavigationLimits::with_max_extent(config.max_extent),
            saturation: config.saturation,
            grid: PixelGrid::new(config.grid_size),
            scheduler: TileScheduler::new(config.workers, config.strategy),
            state: FrameState::Dirty,
            frames_presented: 0,
            last_render_duration: Duration::ZERO,
            last_frame_at: None,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    #[must_use]
    pub fn state(&self) -> FrameState {
        self.state
    }

    #[must_use]
    pub fn zoom_factor(&self) -> f64 {
        self.initial_view.extent() / self.viewport.extent()
    }

    /// Drains pending input and applies it to the viewport. Returns `true`
    /// when a terminate command was seen; commands after it are dropped.
    pub fn apply_input<I: InputSource>(&mut self, input: &mut I) -> bool {
        for command in input.drain_commands() {
            trace!("applying {:?}", command);

            let report = navigate(
                &self.viewport,
                command,
                &self.limits,
                self.grid.size(),
                &self.initial_view,
            );

            match report.warning {
                Some(NavigationWarning::RecenterOutsideGrid) => {
                    warn!("ignoring {:?}: pixel is outside the grid", command);
                }
                Some(warning) => debug!("{:?} after {:?}", warning, command),
                None => {}
            }

            if report.terminate {
                return true;
            }

            self.viewport = report.viewport;
            if report.marks_dirty {
                self.state = FrameState::Dirty;
            }
        }

        false
    }

    /// Runs one frame: input, recompute if dirty, then one hand-off to `sink`.
    pub fn step<I, D>(
        &mut self,
        input: &mut I,
        sink: &mut D,
    ) -> Result<FrameOutcome, FrameLoopError<D::Error>>
    where
        I: InputSource,
        D: DisplaySink,
    {
        if self.apply_input(input) {
            debug!("terminating after {} frames", self.frames_presented);
            return Ok(FrameOutcome::Terminated);
        }

        let recomputed = self.state == FrameState::Dirty;
        if recomputed {
            self.recompute()?;
        }

        let now = Instant::now();
        let frames_per_second = self
            .last_frame_at
            .map(|previous| now.duration_since(previous).as_secs_f64())
            .filter(|elapsed| *elapsed > 0.0)
            .map(f64::recip);
        self.last_frame_at = Some(now);
        self.frames_presented += 1;

        let stats = FrameStats {
            frame_number: self.frames_presented,
            iteration_limit: self.viewport.iteration_limit(),
            zoom_factor: self.zoom_factor(),
            recomputed,
            render_duration: self.last_render_duration,
            frames_per_second,
        };

        if let Err(err) = sink.present(&self.grid, &stats) {
            error!("display sink rejected frame {}: {}", stats.frame_number, err);
            return Err(FrameLoopError::Display(err));
        }

        Ok(FrameOutcome::Presented(stats))
    }

    /// Steps until the input source terminates. Returns the number of
    /// frames presented.
    pub fn run<I, D>(&mut self, input: &mut I, sink: &mut D) -> Result<u64, FrameLoopError<D::Error>>
    where
        I: InputSource,
        D: DisplaySink,
    {
        let first_frame = self.frames_presented;

        loop {
            if let FrameOutcome::Terminated = self.step(input, sink)? {
                return Ok(self.frames_presented - first_frame);
            }
        }
    }

    fn recompute(&mut self) -> Result<(), RenderGridError<MandelbrotColourMapError>> {
        let algorithm = MandelbrotAlgorithm::for_viewport(&self.viewport);
        let colour_map = MandelbrotHueCycle::new(self.viewport.iteration_limit(), self.saturation);

        let report = self
            .scheduler
            .render(&self.viewport, &algorithm, &colour_map, &mut self.grid)?;

        self.last_render_duration = report.duration;
        self.state = FrameState::Clean;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::point::Point;
    use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
    use crate::core::navigation::command::{Command, PanDirection, ZoomStep};
    use std::collections::VecDeque;
    use std::error::Error;
    use std::fmt;

    struct QueuedInput {
        batches: VecDeque<Vec<Command>>,
    }

    impl QueuedInput {
        fn new(batches: Vec<Vec<Command>>) -> Self {
            Self {
                batches: batches.into(),
            }
        }
    }

    impl InputSource for QueuedInput {
        fn drain_commands(&mut self) -> Vec<Command> {
            self.batches.pop_front().unwrap_or_default()
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        frames: Vec<(FrameStats, Vec<u8>)>,
    }

    #[derive(Debug)]
    struct SinkClosed;

    impl fmt::Display for SinkClosed {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "sink closed")
        }
    }

    impl Error for SinkClosed {}

    impl DisplaySink for RecordingSink {
        type Error = SinkClosed;

        fn present(&mut self, grid: &PixelGrid, stats: &FrameStats) -> Result<(), Self::Error> {
            self.frames.push((*stats, grid.buffer().to_vec()));
            Ok(())
        }
    }

    struct ClosedSink;

    impl DisplaySink for ClosedSink {
        type Error = SinkClosed;

        fn present(&mut self, _: &PixelGrid, _: &FrameStats) -> Result<(), Self::Error> {
            Err(SinkClosed)
        }
    }

    fn small_loop() -> FrameLoop {
        let config = MandelbrotConfig {
            grid_width: 40,
            grid_height: 30,
            worker_count: Some(3),
            ..MandelbrotConfig::default()
        };

        FrameLoop::new(&config.validate().unwrap())
    }

    #[test]
    fn test_starts_dirty_and_first_frame_recomputes() {
        let mut frame_loop = small_loop();
        let mut sink = RecordingSink::default();
        assert_eq!(frame_loop.state(), FrameState::Dirty);

        let outcome = frame_loop
            .step(&mut QueuedInput::new(vec![]), &mut sink)
            .unwrap();

        let FrameOutcome::Presented(stats) = outcome else {
            panic!("expected a presented frame, got {:?}", outcome);
        };
        assert!(stats.recomputed);
        assert_eq!(stats.frame_number, 1);
        assert_eq!(stats.iteration_limit, 250);
        assert_eq!(stats.zoom_factor, 1.0);
        assert_eq!(stats.frames_per_second, None);
        assert_eq!(frame_loop.state(), FrameState::Clean);
        assert_eq!(sink.frames.len(), 1);
    }

    #[test]
    fn test_clean_frames_are_presented_without_recompute() {
        let mut frame_loop = small_loop();
        let mut input = QueuedInput::new(vec![]);
        let mut sink = RecordingSink::default();

        frame_loop.step(&mut input, &mut sink).unwrap();
        frame_loop.step(&mut input, &mut sink).unwrap();

        assert_eq!(sink.frames.len(), 2);
        assert!(!sink.frames[1].0.recomputed);
        assert_eq!(sink.frames[0].1, sink.frames[1].1);
    }

    #[test]
    fn test_navigation_marks_dirty_and_repopulates() {
        let mut frame_loop = small_loop();
        let mut sink = RecordingSink::default();
        let mut input = QueuedInput::new(vec![vec![], vec![Command::ZoomIn(ZoomStep::Coarse)]]);

        frame_loop.step(&mut input, &mut sink).unwrap();
        frame_loop.step(&mut input, &mut sink).unwrap();

        let (stats, pixels) = &sink.frames[1];
        assert!(stats.recomputed);
        assert!((stats.zoom_factor - 1.5).abs() < 1e-12);
        assert!((frame_loop.viewport().extent() - 2.5 / 1.5).abs() < 1e-12);
        assert_ne!(pixels, &sink.frames[0].1);
    }

    #[test]
    fn test_apply_input_flips_state_to_dirty() {
        let mut frame_loop = small_loop();
        frame_loop
            .step(&mut QueuedInput::new(vec![]), &mut RecordingSink::default())
            .unwrap();

        let terminated = frame_loop.apply_input(&mut QueuedInput::new(vec![vec![
            Command::Pan(PanDirection::Left),
        ]]));

        assert!(!terminated);
        assert_eq!(frame_loop.state(), FrameState::Dirty);
    }

    #[test]
    fn test_terminate_stops_without_presenting() {
        let mut frame_loop = small_loop();
        let mut sink = RecordingSink::default();
        let mut input = QueuedInput::new(vec![vec![
            Command::IncreaseIterations,
            Command::Terminate,
            Command::IncreaseIterations,
        ]]);

        let outcome = frame_loop.step(&mut input, &mut sink).unwrap();

        assert_eq!(outcome, FrameOutcome::Terminated);
        assert!(sink.frames.is_empty());
        assert_eq!(frame_loop.viewport().iteration_limit(), 275);
    }

    #[test]
    fn test_run_counts_presented_frames() {
        let mut frame_loop = small_loop();
        let mut sink = RecordingSink::default();
        let mut input = QueuedInput::new(vec![
            vec![Command::Pan(PanDirection::Up)],
            vec![],
            vec![Command::Reset],
            vec![Command::Terminate],
        ]);

        let frames = frame_loop.run(&mut input, &mut sink).unwrap();

        assert_eq!(frames, 3);
        assert_eq!(sink.frames.len(), 3);
        assert_eq!(
            sink.frames.iter().map(|(stats, _)| stats.frame_number).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_reset_renders_the_initial_frame_again() {
        let mut frame_loop = small_loop();
        let mut sink = RecordingSink::default();
        let mut input = QueuedInput::new(vec![
            vec![],
            vec![Command::Recenter(Point { x: 5, y: 5 }), Command::ZoomIn(ZoomStep::Fine)],
            vec![Command::Reset],
        ]);

        for _ in 0..3 {
            frame_loop.step(&mut input, &mut sink).unwrap();
        }

        assert_ne!(sink.frames[1].1, sink.frames[0].1);
        assert_eq!(sink.frames[2].1, sink.frames[0].1);
    }

    #[test]
    fn test_rendered_grid_has_black_interior_at_centre() {
        let mut frame_loop = small_loop();
        frame_loop
            .step(&mut QueuedInput::new(vec![]), &mut RecordingSink::default())
            .unwrap();

        assert_eq!(
            frame_loop.grid().pixel(Point { x: 20, y: 15 }).unwrap(),
            Colour::BLACK
        );
    }

    #[test]
    fn test_sink_failure_is_reported() {
        let mut frame_loop = small_loop();

        let result = frame_loop.step(&mut QueuedInput::new(vec![]), &mut ClosedSink);

        assert!(matches!(result, Err(FrameLoopError::Display(SinkClosed))));
    }
}
