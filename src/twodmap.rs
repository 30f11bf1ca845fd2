// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The two-dimensional map
//!
//! Everything in this crate that has a width and a height lives in one
//! of these: the pixels of the image being carved, the energy snapshot
//! handed to the dump routine, and the distance-and-parent table the
//! seam finder builds.

use crate::error::{Result, SeamError};
use itertools::iproduct;
use std::ops::{Index, IndexMut};
use std::slice::ChunksExact;

/// An addressable two-dimensional field, stored row-major.  The
/// dimensions are never zero.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoDimensionalMap<P: Copy> {
    width: u32,
    height: u32,
    cells: Vec<P>,
}

impl<P: Copy> TwoDimensionalMap<P> {
    /// Wrap a row-major buffer of `width * height` cells.
    pub fn from_raw(width: u32, height: u32, cells: Vec<P>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(SeamError::MissingArgument("the map has no pixels"));
        }
        let expected = width as usize * height as usize;
        if cells.len() != expected {
            return Err(SeamError::BufferSize {
                expected,
                found: cells.len(),
            });
        }
        Ok(TwoDimensionalMap {
            width,
            height,
            cells,
        })
    }

    /// A map with every cell set to `value`.  Callers guarantee
    /// non-zero dimensions.
    pub(crate) fn filled(width: u32, height: u32, value: P) -> Self {
        debug_assert!(width > 0 && height > 0);
        TwoDimensionalMap {
            width,
            height,
            cells: vec![value; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.  This
    // particular variant is the same one used in image.rs.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// The value at a single address, or `None` off the map.
    pub fn get(&self, x: u32, y: u32) -> Option<&P> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.get_index(x, y)])
        } else {
            None
        }
    }

    /// Each row as a contiguous slice, top to bottom.
    pub fn rows(&self) -> ChunksExact<'_, P> {
        self.cells.chunks_exact(self.width as usize)
    }

    /// The map with every `(x, y)` moved to `(y, x)`.
    pub fn transpose(&self) -> Self {
        let cells = iproduct!(0..self.width, 0..self.height)
            .map(|(x, y)| self[(x, y)])
            .collect();
        TwoDimensionalMap {
            width: self.height,
            height: self.width,
            cells,
        }
    }

    /// Hand back the row-major buffer.
    pub fn into_raw(self) -> Vec<P> {
        self.cells
    }
}

impl<P: Copy> Index<(u32, u32)> for TwoDimensionalMap<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.cells[index]
    }
}

impl<P: Copy> IndexMut<(u32, u32)> for TwoDimensionalMap<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.cells[index]
    }
}

/// One node of the seam digraph: the cheapest known distance from the
/// virtual source, and the column of the parent in the row above.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct DistanceAndBackPointer {
    pub distance: f64,
    pub parent: u32,
}

impl DistanceAndBackPointer {
    pub const UNREACHED: Self = DistanceAndBackPointer {
        distance: f64::INFINITY,
        parent: 0,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATA: [u8; 6] = [1, 2, 3, 4, 5, 6];

    #[test]
    fn addressing_is_row_major() {
        let map = TwoDimensionalMap::from_raw(3, 2, DATA.to_vec()).unwrap();
        assert_eq!(map[(0, 0)], 1);
        assert_eq!(map[(2, 0)], 3);
        assert_eq!(map[(0, 1)], 4);
        assert_eq!(map[(2, 1)], 6);
        assert_eq!(map.get(3, 0), None);
        assert_eq!(map.get(0, 2), None);
    }

    #[test]
    fn rows_are_contiguous() {
        let map = TwoDimensionalMap::from_raw(3, 2, DATA.to_vec()).unwrap();
        let rows: Vec<&[u8]> = map.rows().collect();
        assert_eq!(rows, vec![&[1, 2, 3][..], &[4, 5, 6][..]]);
    }

    #[test]
    fn transpose_swaps_axes() {
        let map = TwoDimensionalMap::from_raw(3, 2, DATA.to_vec()).unwrap();
        let flipped = map.transpose();
        assert_eq!(flipped.dimensions(), (2, 3));
        assert_eq!(flipped.into_raw(), vec![1, 4, 2, 5, 3, 6]);
        assert_eq!(map.transpose().transpose(), map);
    }

    #[test]
    fn index_mut_writes_in_place() {
        let mut map = TwoDimensionalMap::filled(2, 2, 0u8);
        map[(1, 0)] = 9;
        assert_eq!(map.into_raw(), vec![0, 9, 0, 0]);
    }

    #[test]
    fn rejects_empty_and_mismatched_buffers() {
        assert_eq!(
            TwoDimensionalMap::<u8>::from_raw(0, 2, vec![]),
            Err(SeamError::MissingArgument("the map has no pixels"))
        );
        assert_eq!(
            TwoDimensionalMap::from_raw(2, 2, DATA.to_vec()),
            Err(SeamError::BufferSize {
                expected: 4,
                found: 6
            })
        );
    }
}
