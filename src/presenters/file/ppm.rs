use crate::controllers::interactive::data::frame_stats::FrameStats;
use crate::controllers::interactive::ports::display_sink::DisplaySink;
use crate::core::data::pixel_grid::PixelGrid;
use log::debug;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes each presented frame to one binary PPM file. Later frames
/// overwrite earlier ones.
#[derive(Debug)]
pub struct PpmFilePresenter {
    path: PathBuf,
    frames_written: u64,
}

impl DisplaySink for PpmFilePresenter {
    type Error = std::io::Error;

    fn present(&mut self, grid: &PixelGrid, stats: &FrameStats) -> Result<(), Self::Error> {
        write_ppm(grid, &self.path)?;
        self.frames_written += 1;

        debug!(
            "wrote frame {} to {} ({})",
            stats.frame_number,
            self.path.display(),
            stats.summary()
        );

        Ok(())
    }
}

impl PpmFilePresenter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            frames_written: 0,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }
}

pub fn write_ppm(grid: &PixelGrid, filepath: impl AsRef<Path>) -> std::io::Result<()> {
    let mut file = BufWriter::new(File::create(filepath)?);
    let size = grid.size();

    // PPM header: P6 means binary RGB, then width, height and max_colour
    writeln!(file, "P6")?;
    writeln!(file, "{} {}", size.width(), size.height())?;
    writeln!(file, "255")?;
    file.write_all(grid.buffer())?;
    file.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::grid_size::GridSize;
    use crate::core::data::point::Point;
    use std::time::Duration;

    fn stats(frame_number: u64) -> FrameStats {
        FrameStats {
            frame_number,
            iteration_limit: 250,
            zoom_factor: 1.0,
            recomputed: true,
            render_duration: Duration::ZERO,
            frames_per_second: None,
        }
    }

    #[test]
    fn test_writes_header_and_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.ppm");
        let mut grid = PixelGrid::new(GridSize::new(2, 1).unwrap());
        grid.set_pixel(Point { x: 1, y: 0 }, Colour { r: 1, g: 2, b: 3 })
            .unwrap();

        let mut presenter = PpmFilePresenter::new(&path);
        presenter.present(&grid, &stats(1)).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        let mut expected = b"P6\n2 1\n255\n".to_vec();
        expected.extend_from_slice(&[0, 0, 0, 1, 2, 3]);
        assert_eq!(bytes, expected);
        assert_eq!(presenter.frames_written(), 1);
        assert_eq!(presenter.path(), path.as_path());
    }

    #[test]
    fn test_last_frame_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.ppm");
        let mut presenter = PpmFilePresenter::new(&path);
        let mut grid = PixelGrid::new(GridSize::new(1, 1).unwrap());

        presenter.present(&grid, &stats(1)).unwrap();
        grid.set_pixel(Point { x: 0, y: 0 }, Colour { r: 9, g: 9, b: 9 })
            .unwrap();
        presenter.present(&grid, &stats(2)).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[bytes.len() - 3..], &[9, 9, 9]);
        assert_eq!(presenter.frames_written(), 2);
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut presenter = PpmFilePresenter::new(dir.path().join("missing").join("frame.ppm"));
        let grid = PixelGrid::new(GridSize::new(1, 1).unwrap());

        assert!(presenter.present(&grid, &stats(1)).is_err());
        assert_eq!(presenter.frames_written(), 0);
    }
}
