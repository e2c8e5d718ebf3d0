// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A fixed-size pool of scoped threads that drain a `RowScheduler`.
//! Every worker loops on `claim()` until it comes back empty, then
//! quits; `run` doesn't return until all of them have.

extern crate crossbeam;

use crossbeam::thread::ScopedJoinHandle;

use error::{Error, Result};
use scheduler::{Row, RowScheduler};

/// Describes how many threads to throw at a render.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct WorkerPool {
    workers: usize,
}

impl WorkerPool {
    /// Constructor.  Zero workers is allowed, and does no work.
    pub fn new(workers: usize) -> Self {
        WorkerPool { workers }
    }

    /// The number of threads this pool launches.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Launches the workers, each of which claims rows from the
    /// scheduler and hands them to `work` until there are none left.
    /// Returns the number of rows each worker processed, in launch
    /// order.  If any worker panics, the whole run is reported as
    /// failed.
    pub fn run<'a, F>(&self, scheduler: &RowScheduler<'a>, work: F) -> Result<Vec<usize>>
    where
        F: Fn(Row<'a>) + Sync,
    {
        if self.workers == 0 {
            warn!("worker pool has no workers; {} rows left unrendered", scheduler.height());
            return Ok(vec![]);
        }

        let work = &work;
        crossbeam::scope(|spawner| {
            let handles: Vec<ScopedJoinHandle<usize>> = (0..self.workers)
                .map(|_| {
                    spawner.spawn(move |_| {
                        let mut rows = 0;
                        while let Some(row) = scheduler.claim() {
                            work(row);
                            rows += 1;
                        }
                        rows
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| handle.join().map_err(|_| Error::WorkerPanicked))
                .collect::<Result<Vec<usize>>>()
        })
        .map_err(|_| Error::WorkerPanicked)?
    }
}
