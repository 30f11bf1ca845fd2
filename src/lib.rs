// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seam carving: content-aware image resizing.
//!
//! Find the connected path of least important pixels running through
//! an image, top to bottom or left to right, and take it out.  Repeat
//! until the image is the size you want.
//!
//! ```
//! use image::Rgb;
//! use seamcarve::SeamCarver;
//!
//! let pixels = (0..20u8).map(|i| Rgb([i * 12, 255 - i * 12, i])).collect();
//! let mut carver = SeamCarver::from_raw(5, 4, pixels)?;
//! let seam = carver.find_vertical_seam();
//! carver.remove_vertical_seam(&seam)?;
//! assert_eq!(carver.dimensions(), (4, 4));
//! # Ok::<(), seamcarve::SeamError>(())
//! ```

pub mod ternary;

pub mod error;
pub use error::{Result, SeamError};

pub mod twodmap;
pub use twodmap::TwoDimensionalMap;

pub mod flipper;
pub use flipper::{Flipper, Orientation, PixelView};

pub mod energy;
pub use energy::{energy_at, energy_map, BORDER_ENERGY};

pub mod seamfinder;
pub use seamfinder::{find_vertical_seam, Seam};

pub mod seamcarver;
pub use seamcarver::SeamCarver;

pub mod dump;
pub use dump::energy_to_image;
