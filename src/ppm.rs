// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Writes an iteration buffer out as a binary PPM ("P6") with a
//! maximum sample value of 65535.  At that depth the format wants
//! each sample as two bytes, most significant first, no matter what
//! the host's byte order is.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use error::{Error, Result};
use intensity;
use render::IterationBuffer;

/// Writes one 16-bit sample in big-endian order.
#[inline]
fn write_sample<W: Write>(out: &mut W, sample: u16) -> Result<()> {
    out.write_all(&sample.to_be_bytes())?;
    Ok(())
}

/// Serializes the raw parts of an image: its dimensions, its
/// iteration counts in row-major order, and the cap those counts were
/// computed against.  Output is buffered and flushed before returning.
pub fn write_raw<W: Write>(
    out: W,
    width: usize,
    height: usize,
    cells: &[u16],
    max_iter: u16,
) -> Result<()> {
    let expected = width
        .checked_mul(height)
        .ok_or(Error::BufferShape(usize::max_value(), cells.len()))?;
    if expected != cells.len() {
        return Err(Error::BufferShape(expected, cells.len()));
    }

    let mut out = BufWriter::new(out);
    write!(out, "P6\n{} {}\n{}\n", width, height, intensity::MAX_SAMPLE)?;
    for &idx in cells {
        for &channel in &intensity::rgb(idx, max_iter) {
            write_sample(&mut out, channel)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Serializes a rendered buffer to any writer.
pub fn write<W: Write>(out: W, buffer: &IterationBuffer) -> Result<()> {
    let resolution = buffer.resolution();
    write_raw(
        out,
        resolution.width,
        resolution.height,
        buffer.cells(),
        buffer.cap().max_iter,
    )
}

/// Creates (or truncates) the file at `path` and serializes the
/// buffer into it.
pub fn save<P: AsRef<Path>>(path: P, buffer: &IterationBuffer) -> Result<()> {
    let file = File::create(path)?;
    write(file, buffer)
}
