// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Everything that can go wrong with a render or a write.  Bad
//! parameters aren't in here: zero-sized images and zero workers are
//! allowed, they just don't produce anything interesting.

use std::io;

/// The error type for rendering and serialization.
#[derive(Debug, Fail)]
pub enum Error {
    /// The iteration buffer could not be allocated.  The field is the
    /// number of cells requested, or `None` if `width * height` overflowed.
    #[fail(display = "could not allocate an iteration buffer of {:?} cells", _0)]
    Allocation(Option<usize>),

    /// A worker thread panicked before the render finished.
    #[fail(display = "a render worker panicked")]
    WorkerPanicked,

    /// The buffer handed to the serializer doesn't match its stated
    /// dimensions.  Fields are the expected and actual lengths.
    #[fail(display = "buffer holds {} cells, image needs {}", _1, _0)]
    BufferShape(usize, usize),

    /// The destination could not be opened or written.
    #[fail(display = "could not write image: {}", _0)]
    Io(#[cause] io::Error),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

/// Shorthand for results in this crate.
pub type Result<T> = ::std::result::Result<T, Error>;
