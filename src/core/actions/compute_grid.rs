//! Parallel escape-time compute over the pixel grid.
//!
//! A pass is submitted with [`ComputeBackend::submit`] and synchronised
//! with [`ComputePass::wait`]. The grid moves into the pass on submission
//! and comes back out of `wait`, so the result buffers cannot be read
//! while workers are still writing them.

use crate::core::data::iteration_grid::IterationGrid;
use crate::core::data::viewport::Viewport;
use crate::core::mandelbrot::escape_iterations;
use crate::core::util::pixel_to_plane::pixel_to_plane;
use rayon::prelude::*;
use std::error::Error;
use std::fmt;
use std::sync::mpsc;

#[derive(Debug)]
pub enum ComputeBackendError {
    ZeroMaxIterations,
    ThreadPool(rayon::ThreadPoolBuildError),
}

impl fmt::Display for ComputeBackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => {
                write!(f, "maximum iterations must be greater than zero")
            }
            Self::ThreadPool(err) => {
                write!(f, "failed to build compute thread pool: {}", err)
            }
        }
    }
}

impl Error for ComputeBackendError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ZeroMaxIterations => None,
            Self::ThreadPool(err) => Some(err),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ComputeError {
    WorkerLost,
}

impl fmt::Display for ComputeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WorkerLost => {
                write!(f, "compute worker disconnected before delivering results")
            }
        }
    }
}

impl Error for ComputeError {}

/// Owns the worker pool and the escape-iteration bound.
pub struct ComputeBackend {
    pool: rayon::ThreadPool,
    max_iterations: u32,
}

impl ComputeBackend {
    pub fn new(max_iterations: u32) -> Result<Self, ComputeBackendError> {
        if max_iterations == 0 {
            return Err(ComputeBackendError::ZeroMaxIterations);
        }

        let num_threads: usize = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(4);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()
            .map_err(ComputeBackendError::ThreadPool)?;

        Ok(Self {
            pool,
            max_iterations,
        })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Starts a full-grid pass for `viewport` and hands back the pass
    /// handle. The caller gets the grid back from [`ComputePass::wait`].
    pub fn submit(&self, viewport: Viewport, mut grid: IterationGrid) -> ComputePass {
        let (sender, receiver) = mpsc::channel();
        let max_iterations = self.max_iterations;

        self.pool.spawn(move || {
            fill_grid(viewport, max_iterations, &mut grid);
            let _ = sender.send(grid);
        });

        ComputePass { receiver }
    }
}

/// A compute pass in flight. Dropping it without waiting discards the
/// grid along with the pass.
pub struct ComputePass {
    receiver: mpsc::Receiver<IterationGrid>,
}

impl ComputePass {
    /// Blocks until every worker has written its cells, then returns the
    /// fully rewritten grid.
    pub fn wait(self) -> Result<IterationGrid, ComputeError> {
        self.receiver.recv().map_err(|_| ComputeError::WorkerLost)
    }
}

/// The kernel: rewrites every cell of both buffers for `viewport`.
///
/// Rows are independent, so they are dispatched as parallel bands; no two
/// workers touch the same cell.
pub fn fill_grid(viewport: Viewport, max_iterations: u32, grid: &mut IterationGrid) {
    let width = grid.width();
    let height = grid.height();
    let (hue, in_set) = grid.buffers_mut();

    hue.par_chunks_mut(width as usize)
        .zip(in_set.par_chunks_mut(width as usize))
        .enumerate()
        .for_each(|(py, (hue_row, in_set_row))| {
            for px in 0..width {
                let c = pixel_to_plane(px, py as u32, width, height, viewport);
                let m = escape_iterations(c, max_iterations);

                in_set_row[px as usize] = m == max_iterations;
                hue_row[px as usize] = (255 * m as u64 / max_iterations as u64) as u8;
            }
        });
}
