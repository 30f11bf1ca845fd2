// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarver - The main structure
//!
//! Owns the pixels being carved, and the helpers for finding and
//! removing horizontal and vertical seams.
//!
//! Only one removal routine exists, the vertical one.  A horizontal
//! removal transposes the pixels first and removes a vertical seam from
//! that.  The pixels are then left transposed, so a run of horizontal
//! removals pays for the transpose once; `layout` records which way up
//! they are, and every read goes through a `Flipper` so callers never
//! see the difference.

use crate::energy::{energy_at, energy_map};
use crate::error::{Result, SeamError};
use crate::flipper::{Flipper, Orientation, PixelView};
use crate::seamfinder::{find_vertical_seam, Seam};
use crate::twodmap::TwoDimensionalMap;
use image::{ImageBuffer, Pixel};
use log::{debug, trace};

// Check a vertical seam against a view of `width` x `height` pixels.
// Every check happens before anything is touched.
fn validate_seam(seam: &[u32], (width, height): (u32, u32), orientation: Orientation) -> Result<()> {
    if seam.is_empty() {
        return Err(SeamError::MissingArgument("the seam is empty"));
    }
    if seam.len() != height as usize {
        return Err(SeamError::InvalidSeamShape {
            expected: height as usize,
            found: seam.len(),
        });
    }
    if let Some((position, &index)) = seam.iter().enumerate().find(|&(_, &x)| x >= width) {
        return Err(SeamError::SeamIndexOutOfRange {
            position,
            index,
            bound: width,
        });
    }
    if let Some(position) = seam.windows(2).position(|w| w[0].abs_diff(w[1]) > 1) {
        return Err(SeamError::InvalidSeamContinuity {
            position,
            from: seam[position],
            to: seam[position + 1],
        });
    }
    if width <= 1 {
        return Err(SeamError::DimensionTooSmall { orientation });
    }
    Ok(())
}

// Copy every pixel except the one the seam names in each row, keeping
// the rest in order.  The seam has already been validated.
fn remove_vertical_seam<P: Copy>(map: &TwoDimensionalMap<P>, seam: &[u32]) -> Result<TwoDimensionalMap<P>> {
    let (width, height) = map.dimensions();
    let mut cells = Vec::with_capacity((width as usize - 1) * height as usize);
    for (row, &column) in map.rows().zip(seam) {
        let column = column as usize;
        cells.extend_from_slice(&row[..column]);
        cells.extend_from_slice(&row[column + 1..]);
    }
    TwoDimensionalMap::from_raw(width - 1, height, cells)
}

/// A struct for holding the image to be carved.
#[derive(Debug, Clone)]
pub struct SeamCarver<P: Pixel<Subpixel = u8>> {
    pixels: TwoDimensionalMap<P>,
    layout: Orientation,
}

impl<P: Pixel<Subpixel = u8>> SeamCarver<P> {
    /// Creates a new SeamCarver from a map of pixels, stored upright.
    pub fn new(pixels: TwoDimensionalMap<P>) -> Self {
        SeamCarver {
            pixels,
            layout: Orientation::Vertical,
        }
    }

    /// Creates a new SeamCarver from a row-major vector of pixels.
    pub fn from_raw(width: u32, height: u32, pixels: Vec<P>) -> Result<Self> {
        TwoDimensionalMap::from_raw(width, height, pixels).map(Self::new)
    }

    /// Creates a new SeamCarver with a copy of an image to be carved.
    pub fn from_image(image: &ImageBuffer<P, Vec<u8>>) -> Result<Self> {
        let (width, height) = image.dimensions();
        Self::from_raw(width, height, image.pixels().copied().collect())
    }

    // The pixels as they look in `frame`.
    fn view(&self, frame: Orientation) -> Flipper<'_, P> {
        Flipper::new(&self.pixels, self.layout, frame)
    }

    pub fn width(&self) -> u32 {
        self.view(Orientation::Vertical).width()
    }

    pub fn height(&self) -> u32 {
        self.view(Orientation::Vertical).height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.view(Orientation::Vertical).dimensions()
    }

    /// The energy of the pixel at column `x`, row `y`.
    pub fn energy(&self, x: u32, y: u32) -> Result<f64> {
        energy_at(&self.view(Orientation::Vertical), x, y)
    }

    /// The energy of every pixel, as of now.
    pub fn energy_map(&self) -> TwoDimensionalMap<f64> {
        energy_map(&self.view(Orientation::Vertical))
    }

    /// Entry `y` is the column of the pixel to remove from row `y`.
    pub fn find_vertical_seam(&self) -> Seam {
        find_vertical_seam(&self.view(Orientation::Vertical))
    }

    /// Entry `x` is the row of the pixel to remove from column `x`.
    pub fn find_horizontal_seam(&self) -> Seam {
        find_vertical_seam(&self.view(Orientation::Horizontal))
    }

    /// Remove one pixel from every row, narrowing the image by one.
    pub fn remove_vertical_seam(&mut self, seam: &[u32]) -> Result<()> {
        self.remove_seam(seam, Orientation::Vertical)
    }

    /// Remove one pixel from every column, shortening the image by one.
    pub fn remove_horizontal_seam(&mut self, seam: &[u32]) -> Result<()> {
        self.remove_seam(seam, Orientation::Horizontal)
    }

    fn remove_seam(&mut self, seam: &[u32], orientation: Orientation) -> Result<()> {
        validate_seam(seam, self.view(orientation).dimensions(), orientation)?;
        if self.layout != orientation {
            self.pixels = self.pixels.transpose();
            self.layout = orientation;
        }
        self.pixels = remove_vertical_seam(&self.pixels, seam)?;
        let (width, height) = self.dimensions();
        debug!("removed {} seam, now {}x{}", orientation, width, height);
        trace!("seam: {:?}", seam);
        Ok(())
    }

    /// A snapshot of the pixels as they stand, upright.
    pub fn current_pixels(&self) -> TwoDimensionalMap<P> {
        match self.layout {
            Orientation::Vertical => self.pixels.clone(),
            Orientation::Horizontal => self.pixels.transpose(),
        }
    }

    /// A snapshot of the pixels as an image buffer.
    pub fn to_image(&self) -> ImageBuffer<P, Vec<u8>> {
        let view = self.view(Orientation::Vertical);
        let (width, height) = view.dimensions();
        ImageBuffer::from_fn(width, height, |x, y| view.get_pixel(x, y))
    }

    // This is absurdly inefficient, as the entire energy map and
    // energy seam digraph is recalculated for every seam.

    /// Given a desired new width and height, repeatedly carve seams out
    /// of the image, alternating directions while both still need to
    /// shrink.
    pub fn carve_to(&mut self, newwidth: u32, newheight: u32) -> Result<()> {
        let (width, height) = self.dimensions();
        if width < newwidth || height < newheight {
            return Err(SeamError::CannotEnlarge {
                width,
                height,
                target_width: newwidth,
                target_height: newheight,
            });
        }
        if newwidth == 0 {
            return Err(SeamError::DimensionTooSmall {
                orientation: Orientation::Vertical,
            });
        }
        if newheight == 0 {
            return Err(SeamError::DimensionTooSmall {
                orientation: Orientation::Horizontal,
            });
        }

        let mut direction = Orientation::Vertical;
        while self.width() > newwidth && self.height() > newheight {
            self.carve_once(direction)?;
            direction = direction.turn();
        }
        while self.width() > newwidth {
            self.carve_once(Orientation::Vertical)?;
        }
        while self.height() > newheight {
            self.carve_once(Orientation::Horizontal)?;
        }
        Ok(())
    }

    fn carve_once(&mut self, direction: Orientation) -> Result<()> {
        let seam = find_vertical_seam(&self.view(direction));
        self.remove_seam(&seam, direction)
    }
}
