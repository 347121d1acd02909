use std::time::Duration;

/// Readout that accompanies every presented frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
    /// Counts presented frames, starting at 1.
    pub frame_number: u64,
    pub iteration_limit: u32,
    /// Initial extent divided by the current extent.
    pub zoom_factor: f64,
    /// Whether the grid was recomputed for this frame.
    pub recomputed: bool,
    /// Duration of the most recent recompute.
    pub render_duration: Duration,
    /// Derived from the time since the previous frame. `None` for the first.
    pub frames_per_second: Option<f64>,
}

impl FrameStats {
    /// One-line summary, e.g. for a window title.
    #[must_use]
    pub fn summary(&self) -> String {
        let fps = match self.frames_per_second {
            Some(fps) => format!("{:.0} fps", fps),
            None => "-- fps".to_string(),
        };

        format!(
            "{} | {} iterations | zoom x{:.2} | render {:.1} ms",
            fps,
            self.iteration_limit,
            self.zoom_factor,
            self.render_duration.as_secs_f64() * 1000.0
        )
    }
}
