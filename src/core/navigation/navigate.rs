use crate::core::data::complex::Complex;
use crate::core::data::grid_size::GridSize;
use crate::core::data::viewport::Viewport;
use crate::core::navigation::command::{Command, PanDirection};
use crate::core::navigation::limits::NavigationLimits;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationWarning {
    /// A recenter pixel fell outside the grid and was ignored.
    RecenterOutsideGrid,
    /// A zoom-out stopped at the maximum extent.
    ExtentClamped,
    /// An iteration decrement stopped at the minimum.
    IterationLimitClamped,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationReport {
    pub viewport: Viewport,
    /// Set for every command except [`Command::Terminate`].
    pub marks_dirty: bool,
    pub terminate: bool,
    pub warning: Option<NavigationWarning>,
}

/// Applies one command to a viewport.
///
/// `initial` is the startup view that [`Command::Reset`] returns to.
/// `size` is only needed to resolve [`Command::Recenter`].
#[must_use]
pub fn navigate(
    viewport: &Viewport,
    command: Command,
    limits: &NavigationLimits,
    size: GridSize,
    initial: &Viewport,
) -> NavigationReport {
    let mut report = NavigationReport {
        viewport: *viewport,
        marks_dirty: true,
        terminate: false,
        warning: None,
    };

    match command {
        Command::Pan(direction) => {
            let step = viewport.extent() / limits.pan_divisor;
            report.viewport = viewport.translated(pan_offset(direction, step));
        }
        Command::ZoomIn(step) => {
            report.viewport = viewport.scaled(limits.zoom_factor(step).recip(), None);
        }
        Command::ZoomOut(step) => {
            report.viewport = viewport.scaled(limits.zoom_factor(step), limits.max_extent);

            if let Some(max_extent) = limits.max_extent
                && viewport.extent() * limits.zoom_factor(step) > max_extent
            {
                report.warning = Some(NavigationWarning::ExtentClamped);
            }
        }
        Command::Recenter(pixel) => match viewport.sample(pixel, size) {
            Ok(target) => report.viewport = viewport.recentred(target),
            Err(_) => report.warning = Some(NavigationWarning::RecenterOutsideGrid),
        },
        Command::Reset => {
            report.viewport = *initial;
        }
        Command::IncreaseIterations => {
            let limit = viewport
                .iteration_limit()
                .saturating_add(limits.iteration_step);
            report.viewport = viewport.with_iteration_limit(limit, limits.min_iteration_limit);
        }
        Command::DecreaseIterations => {
            let wanted = viewport
                .iteration_limit()
                .saturating_sub(limits.iteration_step);
            report.viewport = viewport.with_iteration_limit(wanted, limits.min_iteration_limit);

            if wanted < limits.min_iteration_limit {
                report.warning = Some(NavigationWarning::IterationLimitClamped);
            }
        }
        Command::Terminate => {
            report.marks_dirty = false;
            report.terminate = true;
        }
    }

    report
}

fn pan_offset(direction: PanDirection, step: f64) -> Complex {
    match direction {
        PanDirection::Up => Complex::new(0.0, step),
        PanDirection::Down => Complex::new(0.0, -step),
        PanDirection::Left => Complex::new(-step, 0.0),
        PanDirection::Right => Complex::new(step, 0.0),
    }
}
