//! Input adapters for the fractal explorer.
//!
//! This module contains adapters that receive input from various sources
//! and translate them into configuration or navigation commands.

pub mod cli;
#[cfg(feature = "gui")]
pub mod gui;
pub mod script;
