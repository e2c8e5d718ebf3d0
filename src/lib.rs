#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot renderer
//!
//! The Mandelbrot set is the set of points on the complex plane
//! which, when repeatedly squared and added back to themselves, never
//! go to infinity.  Every pixel of the image is a point; we count how
//! many rounds each point survives before its orbit wanders past a
//! bound, up to some cap.  Points that hit the cap are (probably) in
//! the set.
//!
//! Rendering is split by rows.  A `RowScheduler` hands each row of
//! the iteration buffer to exactly one of the threads in a
//! `WorkerPool`, which keeps every thread busy even though rows
//! crossing the set's boundary take far longer than rows that don't.
//! Once every row is done, the `ppm` module turns the iteration
//! counts into grey levels and writes them out as a 16-bit binary PPM.
//!
//! ```no_run
//! use mandelbrot::{ppm, render, Resolution, Viewport};
//!
//! let buffer = render(Viewport::default(), Resolution::new(640, 400), 1000, 4).unwrap();
//! ppm::save("mandel.ppm", &buffer).unwrap();
//! ```

extern crate crossbeam;
#[macro_use]
extern crate failure;
extern crate itertools;
#[macro_use]
extern crate log;
extern crate num;

pub mod error;
pub mod escape;
pub mod intensity;
pub mod planes;
pub mod pool;
pub mod ppm;
pub mod render;
pub mod scheduler;

pub use error::{Error, Result};
pub use escape::{escape_time, IterationCap};
pub use planes::{Pixel, PlaneMapper, Resolution, Viewport};
pub use pool::WorkerPool;
pub use render::{render, IterationBuffer, Renderer};
pub use scheduler::{Row, RowScheduler};
