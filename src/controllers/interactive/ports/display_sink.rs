use crate::controllers::interactive::data::frame_stats::FrameStats;
use crate::core::data::pixel_grid::PixelGrid;
use std::error::Error;

/// Shows a completed grid. Called once per frame, never mid-render.
pub trait DisplaySink {
    type Error: Error + 'static;

    fn present(&mut self, grid: &PixelGrid, stats: &FrameStats) -> Result<(), Self::Error>;
}
