use crate::core::navigation::command::ZoomStep;

/// Step sizes and bounds applied by [`crate::core::navigation::navigate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationLimits {
    /// A pan moves the origin by `extent / pan_divisor`.
    pub pan_divisor: f64,
    pub coarse_zoom_factor: f64,
    pub fine_zoom_factor: f64,
    pub iteration_step: u32,
    pub min_iteration_limit: u32,
    pub max_extent: Option<f64>,
}

impl NavigationLimits {
    #[must_use]
    pub fn with_max_extent(max_extent: Option<f64>) -> Self {
        Self {
            max_extent,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn zoom_factor(&self, step: ZoomStep) -> f64 {
        match step {
            ZoomStep::Coarse => self.coarse_zoom_factor,
            ZoomStep::Fine => self.fine_zoom_factor,
        }
    }
}

impl Default for NavigationLimits {
    fn default() -> Self {
        Self {
            pan_divisor: 25.0,
            coarse_zoom_factor: 1.5,
            fine_zoom_factor: 1.2,
            iteration_step: 25,
            min_iteration_limit: 25,
            max_extent: None,
        }
    }
}
