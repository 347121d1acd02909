//! Port definitions for the interactive controller.
//!
//! The frame loop reads commands from an [`InputSource`] and hands finished
//! frames to a [`DisplaySink`]; adapters for both live outside `core/`.

pub mod display_sink;
pub mod input_source;

pub use display_sink::DisplaySink;
pub use input_source::InputSource;
