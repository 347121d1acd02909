use crate::core::data::colour::Colour;
use crate::core::data::grid_size::GridSize;
use crate::core::data::point::Point;
use crate::core::data::row_range::RowRange;
use std::error::Error;
use std::fmt;

const BYTES_PER_PIXEL: usize = 3;

fn grid_size_to_buffer_size(size: GridSize) -> usize {
    size.pixel_count() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelGridError {
    PixelOutsideBounds {
        pixel: Point,
        size: GridSize,
    },
    BoundsMismatch {
        grid_size: usize,
        buffer_size: usize,
    },
    /// Row ranges handed to [`PixelGrid::bands_mut`] overlap, leave a gap,
    /// or run past the last row.
    InvalidPartition {
        expected_start: u32,
        found: RowRange,
    },
    IncompletePartition {
        covered_rows: u32,
        height: u32,
    },
}

impl fmt::Display for PixelGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelOutsideBounds { pixel, size } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} grid",
                    pixel.x,
                    pixel.y,
                    size.width(),
                    size.height()
                )
            }
            Self::BoundsMismatch {
                grid_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "grid size {} does not match buffer size {}",
                    grid_size, buffer_size
                )
            }
            Self::InvalidPartition {
                expected_start,
                found,
            } => {
                write!(
                    f,
                    "row range [{}, {}) does not start at row {}",
                    found.start, found.end, expected_start
                )
            }
            Self::IncompletePartition {
                covered_rows,
                height,
            } => {
                write!(
                    f,
                    "row ranges cover {} of {} rows",
                    covered_rows, height
                )
            }
        }
    }
}

impl Error for PixelGridError {}

pub type PixelGridData = Vec<u8>;

/// Row-major grid of RGB triples, three bytes per pixel.
#[derive(Debug, Clone)]
pub struct PixelGrid {
    size: GridSize,
    buffer: PixelGridData,
}

impl PixelGrid {
    #[must_use]
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            buffer: vec![0; grid_size_to_buffer_size(size)],
        }
    }

    #[cfg(test)]
    pub fn from_data(size: GridSize, buffer: PixelGridData) -> Result<Self, PixelGridError> {
        let expected = grid_size_to_buffer_size(size);

        if expected != buffer.len() {
            return Err(PixelGridError::BoundsMismatch {
                grid_size: expected,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { size, buffer })
    }

    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    pub fn pixel(&self, pixel: Point) -> Result<Colour, PixelGridError> {
        let index = self.index_of(pixel)?;

        Ok(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    #[cfg(test)]
    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelGridError> {
        let index = self.index_of(pixel)?;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }

    /// Splits the buffer into one mutable band per range.
    ///
    /// The ranges must be sorted, contiguous and cover `[0, height)` exactly;
    /// anything else is rejected before a single byte is handed out, so the
    /// returned bands never alias and never leave a row unowned.
    pub fn bands_mut(&mut self, ranges: &[RowRange]) -> Result<Vec<GridBand<'_>>, PixelGridError> {
        let width = self.size.width();
        let height = self.size.height();
        let row_bytes = width as usize * BYTES_PER_PIXEL;

        let mut expected_start = 0;
        for &range in ranges {
            if range.start != expected_start || range.end < range.start || range.end > height {
                return Err(PixelGridError::InvalidPartition {
                    expected_start,
                    found: range,
                });
            }
            expected_start = range.end;
        }

        if expected_start != height {
            return Err(PixelGridError::IncompletePartition {
                covered_rows: expected_start,
                height,
            });
        }

        let mut bands = Vec::with_capacity(ranges.len());
        let mut rest: &mut [u8] = &mut self.buffer;

        for &range in ranges {
            let (data, tail) = std::mem::take(&mut rest).split_at_mut(range.len() as usize * row_bytes);
            bands.push(GridBand { rows: range, width, data });
            rest = tail;
        }

        Ok(bands)
    }

    /// A single band, for filling one range on its own.
    pub fn band_mut(&mut self, range: RowRange) -> Result<GridBand<'_>, PixelGridError> {
        if range.end < range.start || range.end > self.size.height() {
            return Err(PixelGridError::InvalidPartition {
                expected_start: range.start,
                found: range,
            });
        }

        let width = self.size.width();
        let row_bytes = width as usize * BYTES_PER_PIXEL;
        let data = &mut self.buffer[range.start as usize * row_bytes..range.end as usize * row_bytes];

        Ok(GridBand { rows: range, width, data })
    }

    fn index_of(&self, pixel: Point) -> Result<usize, PixelGridError> {
        if !self.size.contains_point(pixel) {
            return Err(PixelGridError::PixelOutsideBounds {
                pixel,
                size: self.size,
            });
        }

        Ok((pixel.y as usize * self.size.width() as usize + pixel.x as usize) * BYTES_PER_PIXEL)
    }
}

/// Exclusive view of a contiguous block of grid rows.
#[derive(Debug)]
pub struct GridBand<'a> {
    rows: RowRange,
    width: u32,
    data: &'a mut [u8],
}

impl GridBand<'_> {
    #[must_use]
    pub fn rows(&self) -> RowRange {
        self.rows
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Yields `(row, rgb_bytes)` for every row in the band, with `row` in grid coordinates.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = (u32, &mut [u8])> {
        let row_bytes = self.width as usize * BYTES_PER_PIXEL;

        (self.rows.start..self.rows.end).zip(self.data.chunks_exact_mut(row_bytes))
    }
}

/// Writes `colour` into the pixel at `column` of an RGB row slice.
pub fn write_rgb(row: &mut [u8], column: usize, colour: Colour) {
    let index = column * BYTES_PER_PIXEL;

    row[index] = colour.r;
    row[index + 1] = colour.g;
    row[index + 2] = colour.b;
}
