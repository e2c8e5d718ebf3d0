// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Turns an iteration count into a grey level.  The curve is a
//! seventh power of the fraction of the iteration budget left unused,
//! which keeps almost everything dark and saves the bright end for
//! counts near zero.

/// The brightest sample a 16-bit channel can hold.
pub const MAX_SAMPLE: u16 = 65535;

/// Maps `idx` in `[0, max_iter]` to `round(65535 * (1 - idx/max_iter)^7)`.
/// A count at the cap is black, a count of zero is full white.  With a
/// cap of zero every count is at the cap, so everything is black.
pub fn intensity(idx: u16, max_iter: u16) -> u16 {
    if max_iter == 0 {
        return 0;
    }
    let t = 1.0 - f64::from(idx) / f64::from(max_iter);
    (f64::from(MAX_SAMPLE) * t.powi(7)).round() as u16
}

/// The three channels of a pixel; always identical, since the image
/// is greyscale.
#[inline]
pub fn rgb(idx: u16, max_iter: u16) -> [u16; 3] {
    let value = intensity(idx, max_iter);
    [value, value, value]
}
