use crate::core::data::row_range::RowRange;
use std::num::NonZeroU32;

/// Number of ranges actually produced for `height` rows: never more ranges
/// than rows, so every range owns at least one row.
#[must_use]
pub fn calculate_band_count(workers: NonZeroU32, height: u32) -> u32 {
    workers.get().min(height.max(1))
}

/// Splits `[0, height)` into contiguous row ranges, one per worker.
///
/// Each range gets `height / bands` rows and the last one also takes the
/// remainder, so the ranges cover every row exactly once.
#[must_use]
pub fn partition_rows(height: u32, workers: NonZeroU32) -> Vec<RowRange> {
    if height == 0 {
        return Vec::new();
    }

    let bands = calculate_band_count(workers, height);
    let band_height = height / bands;

    (0..bands)
        .map(|band| {
            let start = band * band_height;
            let end = if band == bands - 1 {
                height // last band takes any remainder rows
            } else {
                start + band_height
            };

            RowRange::new(start, end)
        })
        .collect()
}
