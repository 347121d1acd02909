pub mod render_grid;
