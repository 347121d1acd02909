//! GUI input adapter: maps winit keyboard, mouse and window events to
//! navigation commands.

pub mod keymap;

pub use keymap::GuiInputQueue;
