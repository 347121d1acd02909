use log::{debug, warn};
use rayon::prelude::*;
use std::num::NonZeroU32;
use std::thread;
use std::time::{Duration, Instant};

use crate::core::actions::render_grid::ports::colour_map::ColourMap;
use crate::core::actions::render_grid::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::grid_size::GridSize;
use crate::core::data::pixel_grid::{GridBand, PixelGrid, PixelGridError, write_rgb};
use crate::core::data::row_range::RowRange;
use crate::core::data::viewport::Viewport;
use crate::core::util::partition_rows::partition_rows;

/// How a render pass fans out over its row bands.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum RenderStrategy {
    /// A rayon pool bounded to the worker count, one task per band.
    #[default]
    RayonPool,
    /// One scoped OS thread per band, joined before the pass returns.
    ScopedThreads,
}

/// Error type for a render pass.
#[derive(Debug)]
pub enum RenderGridError<E> {
    /// The bands could not be carved out of the grid.
    Grid(PixelGridError),
    /// The colour map rejected a computed value.
    ColourMap(E),
}

impl<E: std::fmt::Display> std::fmt::Display for RenderGridError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderGridError::Grid(e) => write!(f, "grid error: {}", e),
            RenderGridError::ColourMap(e) => write!(f, "colour map error: {}", e),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for RenderGridError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderGridError::Grid(e) => Some(e),
            RenderGridError::ColourMap(e) => Some(e),
        }
    }
}

impl<E> From<PixelGridError> for RenderGridError<E> {
    fn from(err: PixelGridError) -> Self {
        RenderGridError::Grid(err)
    }
}

/// What one render pass did.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RenderReport {
    pub bands: u32,
    /// Bands that had to be filled on the calling thread.
    pub sequential_bands: u32,
    pub duration: Duration,
}

/// Splits the grid into row bands and fills them concurrently.
///
/// Every band is owned by exactly one worker for the length of a pass and
/// all workers are joined before [`TileScheduler::render`] returns.
#[derive(Debug)]
pub struct TileScheduler {
    workers: NonZeroU32,
    strategy: RenderStrategy,
    pool: Option<rayon::ThreadPool>,
}

impl TileScheduler {
    #[must_use]
    pub fn new(workers: NonZeroU32, strategy: RenderStrategy) -> Self {
        let pool = match strategy {
            RenderStrategy::RayonPool => build_pool(workers),
            RenderStrategy::ScopedThreads => None,
        };

        Self {
            workers,
            strategy,
            pool,
        }
    }

    #[must_use]
    pub fn workers(&self) -> NonZeroU32 {
        self.workers
    }

    #[must_use]
    pub fn strategy(&self) -> RenderStrategy {
        self.strategy
    }

    /// Recomputes every pixel of `grid` for `viewport`.
    ///
    /// On error the grid may be partly overwritten.
    pub fn render<Alg, CMap>(
        &self,
        viewport: &Viewport,
        algorithm: &Alg,
        colour_map: &CMap,
        grid: &mut PixelGrid,
    ) -> Result<RenderReport, RenderGridError<CMap::Failure>>
    where
        Alg: FractalAlgorithm + Sync,
        CMap: ColourMap<Alg::Success> + Sync,
        CMap::Failure: Send,
    {
        let started = Instant::now();
        let size = grid.size();
        let ranges = partition_rows(size.height(), self.workers);
        let job = BandJob {
            size,
            viewport,
            algorithm,
            colour_map,
        };

        let sequential_bands = match (self.strategy, &self.pool) {
            (RenderStrategy::RayonPool, Some(pool)) => {
                let bands = grid.bands_mut(&ranges)?;
                pool.install(|| {
                    bands
                        .into_par_iter()
                        .with_max_len(1)
                        .try_for_each(|mut band| job.fill(&mut band))
                })
                .map_err(RenderGridError::ColourMap)?;
                0
            }
            (RenderStrategy::RayonPool, None) => fill_sequentially(&job, grid, &ranges)?,
            (RenderStrategy::ScopedThreads, _) => {
                let unspawned = render_scoped_threads(&job, grid.bands_mut(&ranges)?)?;
                fill_sequentially(&job, grid, &unspawned)?
            }
        };

        let report = RenderReport {
            bands: ranges.len() as u32,
            sequential_bands: sequential_bands as u32,
            duration: started.elapsed(),
        };

        debug!(
            "rendered {}x{} grid in {} bands ({} sequential) in {:?}",
            size.width(),
            size.height(),
            report.bands,
            report.sequential_bands,
            report.duration
        );

        Ok(report)
    }
}

fn build_pool(workers: NonZeroU32) -> Option<rayon::ThreadPool> {
    match rayon::ThreadPoolBuilder::new()
        .num_threads(workers.get() as usize)
        .thread_name(|index| format!("render-worker-{index}"))
        .build()
    {
        Ok(pool) => Some(pool),
        Err(err) => {
            warn!("could not start render pool, rendering sequentially: {}", err);
            None
        }
    }
}

/// Fills `ranges` one after another on the calling thread. Returns how many
/// bands were filled.
fn fill_sequentially<Alg, CMap>(
    job: &BandJob<'_, Alg, CMap>,
    grid: &mut PixelGrid,
    ranges: &[RowRange],
) -> Result<usize, RenderGridError<CMap::Failure>>
where
    Alg: FractalAlgorithm,
    CMap: ColourMap<Alg::Success>,
{
    for &range in ranges {
        job.fill(&mut grid.band_mut(range)?)
            .map_err(RenderGridError::ColourMap)?;
    }

    Ok(ranges.len())
}

/// Spawns one scoped thread per band and joins them all. Returns the ranges
/// whose thread could not be spawned; those are left for the caller.
fn render_scoped_threads<Alg, CMap>(
    job: &BandJob<'_, Alg, CMap>,
    bands: Vec<GridBand<'_>>,
) -> Result<Vec<RowRange>, RenderGridError<CMap::Failure>>
where
    Alg: FractalAlgorithm + Sync,
    CMap: ColourMap<Alg::Success> + Sync,
    CMap::Failure: Send,
{
    thread::scope(|scope| -> Result<Vec<RowRange>, RenderGridError<CMap::Failure>> {
        let mut handles = Vec::with_capacity(bands.len());
        let mut unspawned = Vec::new();

        for (index, mut band) in bands.into_iter().enumerate() {
            let range = band.rows();
            let spawned = thread::Builder::new()
                .name(format!("render-band-{index}"))
                .spawn_scoped(scope, move || job.fill(&mut band));

            match spawned {
                Ok(handle) => handles.push(handle),
                Err(err) => {
                    warn!(
                        "could not spawn worker for rows {}..{}, filling them sequentially: {}",
                        range.start, range.end, err
                    );
                    unspawned.push(range);
                }
            }
        }

        for handle in handles {
            match handle.join() {
                Ok(result) => result.map_err(RenderGridError::ColourMap)?,
                Err(panic) => std::panic::resume_unwind(panic),
            }
        }

        Ok(unspawned)
    })
}

/// Shared, read-only inputs of one pass.
struct BandJob<'a, Alg, CMap> {
    size: GridSize,
    viewport: &'a Viewport,
    algorithm: &'a Alg,
    colour_map: &'a CMap,
}

impl<Alg, CMap> BandJob<'_, Alg, CMap>
where
    Alg: FractalAlgorithm,
    CMap: ColourMap<Alg::Success>,
{
    fn fill(&self, band: &mut GridBand<'_>) -> Result<(), CMap::Failure> {
        let width = self.size.width();

        for (row, pixels) in band.rows_mut() {
            for column in 0..width {
                let sample = self.viewport.sample_at(column, row, self.size);
                let colour = self.colour_map.map(self.algorithm.compute(sample))?;
                write_rgb(pixels, column as usize, colour);
            }
        }

        Ok(())
    }
}
