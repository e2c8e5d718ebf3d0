// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time kernel.  Takes a point on the complex plane and
//! repeatedly squares it and adds the original point back in,
//! counting how many rounds it takes for the result to wander past
//! the escape bound.  Points that never wander off within the
//! iteration cap are, as far as we can tell, inside the set.

use num::Complex;

/// The iteration cap used when the caller has no better idea.
pub const DEFAULT_MAX_ITER: u16 = 1000;

/// The escape bound used when the caller has no better idea.  This
/// is compared against the *squared* modulus, so it corresponds to a
/// radius of 1000.
pub const DEFAULT_MAX_BOUND: f64 = 1_000_000.0;

/// The two limits on an orbit: how many iterations we're willing to
/// spend on it, and how far (squared) it may travel from the origin
/// before we declare it escaped.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IterationCap {
    /// The largest iteration count a pixel can record.
    pub max_iter: u16,
    /// The squared modulus at or past which an orbit has escaped.
    pub max_bound: f64,
}

impl IterationCap {
    /// Constructor.
    pub fn new(max_iter: u16, max_bound: f64) -> Self {
        IterationCap {
            max_iter,
            max_bound,
        }
    }
}

impl Default for IterationCap {
    fn default() -> Self {
        IterationCap::new(DEFAULT_MAX_ITER, DEFAULT_MAX_BOUND)
    }
}

/// Returns the first `n` for which `|z_n|^2 >= max_bound`, where the
/// orbit starts at `z_0 = c` and continues `z_{n+1} = z_n^2 + c`.  If
/// the orbit is still inside the bound after `max_iter` steps, returns
/// `max_iter`.
///
/// The square is computed by hand from the components rather than
/// through `Complex`'s `Mul`, which lets the squared terms be shared
/// between the bound test and the next step.
#[inline]
pub fn escape_time(c: Complex<f64>, cap: &IterationCap) -> u16 {
    let (mut re, mut im) = (c.re, c.im);
    let mut iter: u16 = 0;
    while iter < cap.max_iter {
        let (re2, im2) = (re * re, im * im);
        if re2 + im2 >= cap.max_bound {
            break;
        }
        im = 2.0 * re * im + c.im;
        re = re2 - im2 + c.re;
        iter += 1;
    }
    iter
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cap(max_iter: u16) -> IterationCap {
        IterationCap::new(max_iter, DEFAULT_MAX_BOUND)
    }

    #[test]
    fn origin_never_escapes() {
        for &max_iter in &[1, 2, 17, 1000, u16::max_value()] {
            assert_eq!(escape_time(Complex::new(0.0, 0.0), &cap(max_iter)), max_iter);
        }
    }

    #[test]
    fn two_escapes_quickly() {
        // 2 -> 6 -> 38 -> 1446; 1446^2 is the first past a million.
        let n = escape_time(Complex::new(2.0, 0.0), &cap(1000));
        assert_eq!(n, 3);
        assert!(n < 5);
    }

    #[test]
    fn point_already_outside_the_bound_is_zero() {
        let c = Complex::new(1000.0, 1.0);
        assert_eq!(escape_time(c, &cap(1000)), 0);
    }

    #[test]
    fn bound_is_compared_against_squared_modulus() {
        // |c|^2 is exactly 4, which counts as escaped.
        let c = Complex::new(2.0, 0.0);
        assert_eq!(escape_time(c, &IterationCap::new(50, 4.0)), 0);
        // 2 -> 6, and 36 >= 5.
        assert_eq!(escape_time(c, &IterationCap::new(50, 5.0)), 1);
    }

    #[test]
    fn zero_cap_reports_zero() {
        assert_eq!(escape_time(Complex::new(5.0, 5.0), &cap(0)), 0);
        assert_eq!(escape_time(Complex::new(0.0, 0.0), &cap(0)), 0);
    }

    #[test]
    fn agrees_with_complex_arithmetic() {
        let cap = cap(500);
        for &(re, im) in &[(-0.75, 0.1), (0.3, 0.5), (-1.8, 0.0), (0.25, 0.01), (-0.1, 0.9)] {
            let c = Complex::new(re, im);
            let mut z = c;
            let mut n = 0;
            while n < cap.max_iter && z.norm_sqr() < cap.max_bound {
                z = z * z + c;
                n += 1;
            }
            assert_eq!(escape_time(c, &cap), n, "at {}", c);
        }
    }
}
