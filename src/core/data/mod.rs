pub mod colour;
pub mod complex;
pub mod grid_size;
pub mod pixel_grid;
pub mod point;
pub mod row_range;
pub mod viewport;
