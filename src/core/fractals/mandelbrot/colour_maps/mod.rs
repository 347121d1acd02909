pub mod errors;
pub mod hue_cycle;
