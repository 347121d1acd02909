pub mod calculate_worker_count;
pub mod partition_rows;
pub mod pixel_to_complex_coords;
