//! Interactive frame loop for real-time fractal exploration.
//!
//! # Architecture
//!
//! The frame loop follows the ports & adapters pattern:
//! - **Input**: an [`InputSource`] yielding navigation commands
//! - **Output**: a [`DisplaySink`] receiving each completed grid
//! - **Core**: navigation and the tile scheduler from `core/`

pub mod data;
pub mod errors;
mod frame_loop;
pub mod ports;

pub use data::frame_stats::FrameStats;
pub use errors::frame_loop::FrameLoopError;
pub use frame_loop::{FrameLoop, FrameOutcome, FrameState};
pub use ports::{DisplaySink, InputSource};
