// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The render entry points.  A `Renderer` holds everything that stays
//! fixed for a render (the plane and the iteration cap) and fills a
//! fresh `IterationBuffer` with escape times, either on one thread or
//! by draining a `RowScheduler` with a `WorkerPool`.

use itertools::iproduct;

use error::{Error, Result};
use escape::{escape_time, IterationCap};
use planes::{Pixel, PlaneMapper, Resolution, Viewport};
use pool::WorkerPool;
use scheduler::{Row, RowScheduler};

/// The escape time of every pixel in an image, row-major, along with
/// the dimensions and cap it was computed with.
#[derive(Clone, Debug, PartialEq)]
pub struct IterationBuffer {
    resolution: Resolution,
    cap: IterationCap,
    cells: Vec<u16>,
}

impl IterationBuffer {
    /// Reserves a zeroed buffer for the given resolution, failing
    /// rather than aborting if the memory isn't there.
    fn allocate(resolution: Resolution, cap: IterationCap) -> Result<Self> {
        let len = resolution.cells().ok_or(Error::Allocation(None))?;
        let mut cells: Vec<u16> = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| Error::Allocation(Some(len)))?;
        cells.resize(len, 0);
        Ok(IterationBuffer {
            resolution,
            cap,
            cells,
        })
    }

    /// The dimensions of the image.
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// The cap the counts were computed against.
    pub fn cap(&self) -> IterationCap {
        self.cap
    }

    /// All the counts, row-major.
    pub fn cells(&self) -> &[u16] {
        &self.cells
    }

    /// One row of counts, or `None` if the row is out of range.
    pub fn row(&self, index: usize) -> Option<&[u16]> {
        if index >= self.resolution.height {
            return None;
        }
        let start = index * self.resolution.width;
        self.cells.get(start..start + self.resolution.width)
    }

    /// Gives up the counts.
    pub fn into_cells(self) -> Vec<u16> {
        self.cells
    }
}

/// Renders the Mandelbrot set over one viewport at one resolution.
/// Once set, this object should not be mutable.
#[derive(Copy, Clone, Debug)]
pub struct Renderer {
    plane: PlaneMapper,
    cap: IterationCap,
}

impl Renderer {
    /// Requires the region of the complex plane to sample, the size of
    /// the image, and the limits on each orbit.
    pub fn new(viewport: Viewport, resolution: Resolution, cap: IterationCap) -> Self {
        Renderer {
            plane: PlaneMapper::new(viewport, resolution),
            cap,
        }
    }

    /// The mapping between pixels and points this renderer uses.
    pub fn plane(&self) -> &PlaneMapper {
        &self.plane
    }

    /// Fills in one claimed row.
    fn render_row(&self, row: Row) {
        for (column, cell) in row.cells.iter_mut().enumerate() {
            let point = self.plane.pixel_to_point(&Pixel(column, row.index));
            *cell = escape_time(point, &self.cap);
        }
    }

    /// The main function for single-threaded renders.  Walks the
    /// image row by row with no scheduler at all.
    pub fn render_single(&self) -> Result<IterationBuffer> {
        let mut buffer = IterationBuffer::allocate(self.plane.resolution, self.cap)?;
        let (width, height) = (self.plane.resolution.width, self.plane.resolution.height);
        for (row, column) in iproduct!(0..height, 0..width) {
            let point = self.plane.pixel_to_point(&Pixel(column, row));
            buffer.cells[row * width + column] = escape_time(point, &self.cap);
        }
        Ok(buffer)
    }

    /// A multi-threaded render that takes a worker count.  Rows are
    /// handed out one at a time to whichever worker is free, so the
    /// result is the same no matter how many workers there are.
    pub fn render(&self, workers: usize) -> Result<IterationBuffer> {
        let mut buffer = IterationBuffer::allocate(self.plane.resolution, self.cap)?;
        if self.plane.is_empty() {
            debug!("nothing to render at {:?}", self.plane.resolution);
            return Ok(buffer);
        }

        let pool = WorkerPool::new(workers);
        let per_worker = {
            let scheduler = RowScheduler::new(&mut buffer.cells, self.plane.resolution.width);
            pool.run(&scheduler, |row| self.render_row(row))?
        };
        debug!(
            "rendered {}x{} at {} iterations on {} workers, rows per worker: {:?}",
            self.plane.resolution.width,
            self.plane.resolution.height,
            self.cap.max_iter,
            pool.workers(),
            per_worker
        );
        Ok(buffer)
    }
}

/// Renders one image in a single call: the viewport, the resolution,
/// the iteration cap, and the number of workers to spread it over.
/// Uses the default escape bound.
pub fn render(
    viewport: Viewport,
    resolution: Resolution,
    max_iter: u16,
    workers: u16,
) -> Result<IterationBuffer> {
    let cap = IterationCap {
        max_iter,
        ..IterationCap::default()
    };
    Renderer::new(viewport, resolution, cap).render(usize::from(workers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use num::Complex;

    fn renderer(width: usize, height: usize, max_iter: u16) -> Renderer {
        Renderer::new(
            Viewport::default(),
            Resolution::new(width, height),
            IterationCap::new(max_iter, 1_000_000.0),
        )
    }

    #[test]
    fn worker_count_does_not_change_the_image() {
        let r = renderer(64, 37, 200);
        let reference = r.render_single().unwrap();
        for &workers in &[1, 2, 3, 8, 37, 50] {
            assert_eq!(r.render(workers).unwrap(), reference, "with {} workers", workers);
        }
    }

    #[test]
    fn cells_hold_the_kernel_output() {
        let r = renderer(7, 4, 100);
        let buffer = r.render(3).unwrap();
        let point = r.plane().pixel_to_point(&Pixel(5, 2));
        assert_eq!(buffer.row(2).unwrap()[5], escape_time(point, &buffer.cap()));
        assert!(buffer.row(4).is_none());
    }

    #[test]
    fn origin_pixel_is_capped() {
        // Pixel (0, 0) of this view sits on 0+0i.
        let r = Renderer::new(
            Viewport::new(0.0, 0.0, 1.0),
            Resolution::new(4, 4),
            IterationCap::new(321, 1_000_000.0),
        );
        assert_eq!(r.plane().pixel_to_point(&Pixel(0, 0)), Complex::new(0.0, 0.0));
        assert_eq!(r.render(2).unwrap().cells()[0], 321);
    }

    #[test]
    fn degenerate_sizes_do_not_crash() {
        assert!(renderer(0, 5, 10).render(4).unwrap().cells().is_empty());
        assert!(renderer(5, 0, 10).render(4).unwrap().cells().is_empty());
        assert!(renderer(0, 0, 10).render_single().unwrap().cells().is_empty());
        assert_eq!(renderer(1, 1, 10).render(1).unwrap().cells().len(), 1);
    }

    #[test]
    fn zero_workers_leave_the_buffer_untouched() {
        let buffer = renderer(3, 3, 10).render(0).unwrap();
        assert_eq!(buffer.into_cells(), vec![0; 9]);
    }

    #[test]
    fn impossible_sizes_are_allocation_failures() {
        match renderer(usize::max_value(), 2, 10).render(1) {
            Err(Error::Allocation(None)) => (),
            other => panic!("expected an allocation failure, got {:?}", other),
        }
        match renderer(usize::max_value() / 2, 1, 10).render(1) {
            Err(Error::Allocation(Some(_))) => (),
            other => panic!("expected an allocation failure, got {:?}", other),
        }
    }

    #[test]
    fn one_call_render_uses_the_default_bound() {
        let buffer = render(Viewport::default(), Resolution::new(8, 4), 50, 2).unwrap();
        assert_eq!(buffer.cap(), IterationCap::new(50, 1_000_000.0));
        assert_eq!(buffer.cells().len(), 32);
    }
}
