// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Render an energy map as a greyscale image, for looking at.

use crate::twodmap::TwoDimensionalMap;
use image::{GrayImage, Luma};

/// Scale every energy so the highest maps to white and zero to black.
pub fn energy_to_image(energy: &TwoDimensionalMap<f64>) -> GrayImage {
    let (width, height) = energy.dimensions();
    let factor = energy.rows().flatten().copied().fold(0.0, f64::max);
    GrayImage::from_fn(width, height, |x, y| {
        let level = if factor > 0.0 {
            (energy[(x, y)] / factor * 255.0).round().clamp(0.0, 255.0)
        } else {
            0.0
        };
        Luma([level as u8])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brightest_is_the_highest_energy() {
        let energy = TwoDimensionalMap::from_raw(2, 2, vec![0.0, 250.0, 500.0, 1000.0]).unwrap();
        let image = energy_to_image(&energy);
        assert_eq!(image.dimensions(), (2, 2));
        assert_eq!(image.into_raw(), vec![0, 64, 128, 255]);
    }

    #[test]
    fn all_zero_is_all_black() {
        let energy = TwoDimensionalMap::filled(3, 1, 0.0);
        assert_eq!(energy_to_image(&energy).into_raw(), vec![0, 0, 0]);
    }
}
