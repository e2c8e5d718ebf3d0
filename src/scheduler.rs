// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Hands out the rows of an image, one at a time, to whichever worker
//! asks next.  The escape time of a row varies wildly depending on
//! how much of the set's boundary it crosses, so rather than cut the
//! image into one fixed band per thread, every worker comes back to
//! the scheduler for more as soon as it finishes a row.  The only
//! thing behind the lock is a counter and the iterator that carves
//! the buffer into rows, so holding it costs next to nothing compared
//! to rendering a row.

use std::slice::ChunksMut;
use std::sync::Mutex;

/// A row claimed from the scheduler: its index from the top of the
/// image, and the only mutable view of its cells.
#[derive(Debug)]
pub struct Row<'a> {
    /// The row's index, in `[0, height)`.
    pub index: usize,
    /// The row's cells, `width` of them.
    pub cells: &'a mut [u16],
}

struct Cursor<'a> {
    next_row: usize,
    rows: ChunksMut<'a, u16>,
}

/// Owns the shared row cursor for one render.  Each row of the buffer
/// it was built from is handed out exactly once, in increasing order,
/// and once they're gone every further claim comes back empty.
pub struct RowScheduler<'a> {
    height: usize,
    cursor: Mutex<Cursor<'a>>,
}

impl<'a> RowScheduler<'a> {
    /// Takes the buffer to be carved up and the width of a row.  The
    /// height is however many whole rows the buffer holds.  A width of
    /// zero yields a scheduler with no rows at all.
    pub fn new(buffer: &'a mut [u16], width: usize) -> Self {
        // chunks_mut() refuses a chunk size of zero; an image with no
        // columns has nothing to hand out anyway.
        let height = if width == 0 { 0 } else { buffer.len() / width };
        RowScheduler {
            height,
            cursor: Mutex::new(Cursor {
                next_row: 0,
                rows: buffer.chunks_mut(width.max(1)),
            }),
        }
    }

    /// The number of rows this scheduler will hand out over its life.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Claims the next unclaimed row, or returns `None` when every row
    /// has been handed out.  A poisoned lock means another worker
    /// panicked mid-claim; that render is already lost, so the claim
    /// reports no more work and lets the pool surface the panic.
    pub fn claim(&self) -> Option<Row<'a>> {
        let mut cursor = match self.cursor.lock() {
            Ok(cursor) => cursor,
            Err(_) => return None,
        };
        if cursor.next_row >= self.height {
            return None;
        }
        let index = cursor.next_row;
        cursor.next_row += 1;
        cursor.rows.next().map(|cells| Row { index, cells })
    }
}
