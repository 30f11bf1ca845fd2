// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! The energy of a pixel is the dual-gradient of its four neighbours:
//! the difference between the pixels to its left and right, and
//! between the pixels above and below it, taken per channel, squared,
//! and summed.  This is the rusty expression of:
//!
//! ```text
//!        |Δx|² = (Δrx)²+(Δgx)²+(Δbx)²
//!        |Δy|² = (Δry)²+(Δgy)²+(Δby)²
//!       e(x,y) = √(|Δx|²+|Δy|²)
//! ```
//!
//! Pixels on the border have no neighbour on one side, and are given
//! a flat `BORDER_ENERGY` instead, which is higher than any interior
//! pixel can reach with eight-bit channels.  Nothing is cached; every
//! call reads the pixels as they are right now.

use crate::error::{Result, SeamError};
use crate::flipper::PixelView;
use crate::twodmap::TwoDimensionalMap;
use image::Pixel;
use itertools::iproduct;
use num_traits::pow;
use std::iter::zip;

/// Energy of every pixel on the edge of the image.
pub const BORDER_ENERGY: f64 = 1000.0;

// Takes the channels from two pixels, maps the difference between each
// channel, squares it, and sums them all up.
fn gradient<P>(p1: &P, p2: &P) -> u32
where
    P: Pixel<Subpixel = u8>,
{
    zip(p1.channels(), p2.channels())
        .map(|(c1, c2)| pow(i32::from(*c2) - i32::from(*c1), 2) as u32)
        .sum()
}

// Coordinates are assumed to be in bounds.
fn energy_unchecked<V>(image: &V, x: u32, y: u32) -> f64
where
    V: PixelView,
    V::Pixel: Pixel<Subpixel = u8>,
{
    let (width, height) = image.dimensions();
    if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
        return BORDER_ENERGY;
    }
    let dx = gradient(&image.get_pixel(x - 1, y), &image.get_pixel(x + 1, y));
    let dy = gradient(&image.get_pixel(x, y - 1), &image.get_pixel(x, y + 1));
    f64::from(dx + dy).sqrt()
}

/// The energy of the pixel at column `x`, row `y`.
pub fn energy_at<V>(image: &V, x: u32, y: u32) -> Result<f64>
where
    V: PixelView,
    V::Pixel: Pixel<Subpixel = u8>,
{
    let (width, height) = image.dimensions();
    if x >= width || y >= height {
        return Err(SeamError::OutOfRange {
            x,
            y,
            width,
            height,
        });
    }
    Ok(energy_unchecked(image, x, y))
}

/// Fill `row` with the energies of every pixel in row `y`.  The buffer
/// is reused from row to row by the seam finder.
pub(crate) fn row_energies<V>(image: &V, y: u32, row: &mut Vec<f64>)
where
    V: PixelView,
    V::Pixel: Pixel<Subpixel = u8>,
{
    row.clear();
    row.extend((0..image.width()).map(|x| energy_unchecked(image, x, y)));
}

/// Compute the energy of every pixel in an image.
pub fn energy_map<V>(image: &V) -> TwoDimensionalMap<f64>
where
    V: PixelView,
    V::Pixel: Pixel<Subpixel = u8>,
{
    let (width, height) = image.dimensions();
    let mut emap = TwoDimensionalMap::filled(width, height, 0.0);
    for (y, x) in iproduct!(0..height, 0..width) {
        emap[(x, y)] = energy_unchecked(image, x, y);
    }
    emap
}
