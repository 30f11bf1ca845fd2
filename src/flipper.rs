// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Image dimensional flipper
//!
//! The seam finder only knows how to run top-to-bottom.  A horizontal
//! seam of an image is exactly a vertical seam of that image turned
//! 90°, so rather than write the algorithm twice we hand it a view
//! that maps the width to the height, and every x to y and vice versa.
//!
//! The carver may keep its pixels stored either way up.  A `Flipper`
//! is built from the layout the pixels are stored in and the frame the
//! caller wants to read them in, and does whatever remapping that
//! takes.  Nothing is copied.

use crate::twodmap::TwoDimensionalMap;
use std::fmt;

/// Which way a seam runs.  A vertical seam runs top to bottom and
/// narrows the image; a horizontal one runs left to right and shortens
/// it.  Also used to describe which way up the carver has stored its
/// pixels: `Horizontal` means transposed.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

impl Orientation {
    pub fn turn(self) -> Self {
        match self {
            Orientation::Vertical => Orientation::Horizontal,
            Orientation::Horizontal => Orientation::Vertical,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Vertical => f.write_str("vertical"),
            Orientation::Horizontal => f.write_str("horizontal"),
        }
    }
}

/// Read-only, addressable pixel source.  The energy model and the seam
/// finder are written against this and nothing else.
pub trait PixelView {
    type Pixel: Copy;

    fn dimensions(&self) -> (u32, u32);

    /// Callers keep `x < width` and `y < height`.
    fn get_pixel(&self, x: u32, y: u32) -> Self::Pixel;

    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }
}

impl<P: Copy> PixelView for TwoDimensionalMap<P> {
    type Pixel = P;

    fn dimensions(&self) -> (u32, u32) {
        TwoDimensionalMap::dimensions(self)
    }

    fn get_pixel(&self, x: u32, y: u32) -> P {
        self[(x, y)]
    }
}

/// A map seen in some frame.  When `flipped`, the map's columns are
/// presented as rows.
#[derive(Debug, Copy, Clone)]
pub struct Flipper<'a, P: Copy> {
    map: &'a TwoDimensionalMap<P>,
    flipped: bool,
}

impl<'a, P: Copy> Flipper<'a, P> {
    /// View `map`, stored in `layout`, as it appears in `frame`.
    pub fn new(map: &'a TwoDimensionalMap<P>, layout: Orientation, frame: Orientation) -> Self {
        Flipper {
            map,
            flipped: layout != frame,
        }
    }
}

impl<'a, P: Copy> PixelView for Flipper<'a, P> {
    type Pixel = P;

    fn dimensions(&self) -> (u32, u32) {
        let (x, y) = self.map.dimensions();
        if self.flipped {
            (y, x)
        } else {
            (x, y)
        }
    }

    fn get_pixel(&self, x: u32, y: u32) -> P {
        if self.flipped {
            self.map[(y, x)]
        } else {
            self.map[(x, y)]
        }
    }
}
