// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the PlaneMapper struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0,
//! and a rectangle on the complex plane described by an origin and
//! the width of its real axis.  Pixels are square, so the height of
//! the complex rectangle falls out of the aspect ratio of the image.
use num::Complex;

/// The real origin of the default view, taken together with
/// `DEFAULT_MIN_IMAG` and `DEFAULT_SPAN_REAL` it frames the whole set.
pub const DEFAULT_MIN_REAL: f64 = -2.5;
/// The imaginary origin of the default view.
pub const DEFAULT_MIN_IMAG: f64 = -1.0;
/// The width of the real axis of the default view.
pub const DEFAULT_SPAN_REAL: f64 = 3.5;

/// Describes the region of the complex plane being sampled: the
/// corner with the smallest real and imaginary components, and the
/// width along the real axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    /// Real component of the sampled rectangle's origin.
    pub min_real: f64,
    /// Imaginary component of the sampled rectangle's origin.
    pub min_imag: f64,
    /// Width of the sampled rectangle along the real axis.
    pub span_real: f64,
}

impl Viewport {
    /// Builds a viewport from its origin and real-axis width.
    pub fn new(min_real: f64, min_imag: f64, span_real: f64) -> Self {
        Viewport {
            min_real,
            min_imag,
            span_real,
        }
    }

    /// The origin of the viewport as a complex number.
    pub fn origin(&self) -> Complex<f64> {
        Complex::new(self.min_real, self.min_imag)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport::new(DEFAULT_MIN_REAL, DEFAULT_MIN_IMAG, DEFAULT_SPAN_REAL)
    }
}

/// Describes the width and height of an integral plane that is
/// assumed to start at 0,0.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// Number of pixel columns.
    pub width: usize,
    /// Number of pixel rows.
    pub height: usize,
}

impl Resolution {
    /// Constructor.
    pub fn new(width: usize, height: usize) -> Self {
        Resolution { width, height }
    }

    /// The total number of points in the integral grid, or `None` if
    /// that number doesn't fit in memory's address space.
    pub fn cells(&self) -> Option<usize> {
        self.width.checked_mul(self.height)
    }

    /// Describes that the integral plane has no area.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Describes the column, row of a pixel.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// Contains the definitions of two planes: an integral cartesian
/// plane, and a complex cartesian plane.  Maps pixels in the first
/// to points in the second.
#[derive(Copy, Clone, Debug)]
pub struct PlaneMapper {
    /// The size of the integral cartesian plane.
    pub resolution: Resolution,
    /// The region of the complex plane the pixels cover.
    pub viewport: Viewport,
    // The distance on the complex plane between two adjacent pixels,
    // on either axis.
    increment: f64,
}

impl PlaneMapper {
    /// Takes the viewport and the resolution.  The per-pixel increment
    /// is derived from the real span alone and applied to both axes.
    /// A zero-width resolution produces an infinite increment; the
    /// plane has no pixels to map, so that's harmless.
    pub fn new(viewport: Viewport, resolution: Resolution) -> PlaneMapper {
        PlaneMapper {
            resolution,
            viewport,
            increment: viewport.span_real / (resolution.width as f64),
        }
    }

    /// The distance between adjacent sample points.
    pub fn increment(&self) -> f64 {
        self.increment
    }

    /// The total number of points in the integral grid, or `None` if
    /// that overflows.
    pub fn len(&self) -> Option<usize> {
        self.resolution.cells()
    }

    /// Describes that the integral plane is of a size.
    pub fn is_empty(&self) -> bool {
        self.resolution.is_empty()
    }

    /// Given a pixel on the integral cartesian plane, return the
    /// complex number at which that pixel samples the set.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        Complex::new(
            self.viewport.min_real + (pixel.0 as f64) * self.increment,
            self.viewport.min_imag + (pixel.1 as f64) * self.increment,
        )
    }
}
