use crate::controllers::interactive::ports::input_source::InputSource;
use crate::core::data::grid_size::GridSize;
use crate::core::data::point::Point;
use crate::core::navigation::command::{Command, PanDirection, ZoomStep};
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, MouseButton, MouseScrollDelta};
use winit::keyboard::KeyCode;

#[must_use]
pub fn command_for_key(key_code: KeyCode) -> Option<Command> {
    let command = match key_code {
        KeyCode::ArrowUp => Command::Pan(PanDirection::Up),
        KeyCode::ArrowDown => Command::Pan(PanDirection::Down),
        KeyCode::ArrowLeft => Command::Pan(PanDirection::Left),
        KeyCode::ArrowRight => Command::Pan(PanDirection::Right),
        KeyCode::KeyW => Command::ZoomIn(ZoomStep::Coarse),
        KeyCode::KeyS => Command::ZoomOut(ZoomStep::Coarse),
        KeyCode::KeyR => Command::Reset,
        KeyCode::BracketRight => Command::IncreaseIterations,
        KeyCode::BracketLeft => Command::DecreaseIterations,
        KeyCode::Escape => Command::Terminate,
        _ => return None,
    };

    Some(command)
}

/// Scroll up zooms in, scroll down zooms out, both in fine steps.
#[must_use]
pub fn command_for_scroll(delta: MouseScrollDelta) -> Option<Command> {
    let vertical = match delta {
        MouseScrollDelta::LineDelta(_, y) => f64::from(y),
        MouseScrollDelta::PixelDelta(position) => position.y,
    };

    if vertical > 0.0 {
        Some(Command::ZoomIn(ZoomStep::Fine))
    } else if vertical < 0.0 {
        Some(Command::ZoomOut(ZoomStep::Fine))
    } else {
        None
    }
}

/// Maps a cursor position in the window to the grid pixel under it.
#[must_use]
pub fn cursor_to_grid(
    position: PhysicalPosition<f64>,
    window: PhysicalSize<u32>,
    grid: GridSize,
) -> Option<Point> {
    if window.width == 0 || window.height == 0 {
        return None;
    }

    let x = (position.x / f64::from(window.width) * f64::from(grid.width())).floor();
    let y = (position.y / f64::from(window.height) * f64::from(grid.height())).floor();

    if !x.is_finite() || !y.is_finite() {
        return None;
    }

    Some(Point {
        x: x as i32,
        y: y as i32,
    })
}

/// Collects commands from window events until the frame loop drains them.
#[derive(Debug, Clone, PartialEq)]
pub struct GuiInputQueue {
    grid: GridSize,
    cursor: Option<PhysicalPosition<f64>>,
    pending: Vec<Command>,
}

impl InputSource for GuiInputQueue {
    fn drain_commands(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.pending)
    }
}

impl GuiInputQueue {
    #[must_use]
    pub fn new(grid: GridSize) -> Self {
        Self {
            grid,
            cursor: None,
            pending: Vec::new(),
        }
    }

    #[cfg(test)]
    fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn handle_key_event(&mut self, key_code: KeyCode, state: ElementState) {
        if state != ElementState::Pressed {
            return;
        }

        if let Some(command) = command_for_key(key_code) {
            self.pending.push(command);
        }
    }

    pub fn handle_cursor_moved(&mut self, position: PhysicalPosition<f64>) {
        self.cursor = Some(position);
    }

    pub fn handle_mouse_input(
        &mut self,
        button: MouseButton,
        state: ElementState,
        window: PhysicalSize<u32>,
    ) {
        if state != ElementState::Pressed || button != MouseButton::Left {
            return;
        }

        if let Some(pixel) = self
            .cursor
            .and_then(|position| cursor_to_grid(position, window, self.grid))
        {
            self.pending.push(Command::Recenter(pixel));
        }
    }

    pub fn handle_scroll(&mut self, delta: MouseScrollDelta) {
        if let Some(command) = command_for_scroll(delta) {
            self.pending.push(command);
        }
    }

    pub fn handle_close_requested(&mut self) {
        self.pending.push(Command::Terminate);
    }
}
