// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors raised by the carver.
//!
//! Every one of these is a caller mistake: a coordinate or seam that
//! doesn't fit the image as it currently stands.  Nothing here is
//! transient, and nothing is retried.  An operation that fails leaves
//! the image exactly as it was.

use crate::flipper::Orientation;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SeamError>;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SeamError {
    #[error("pixel ({x}, {y}) is outside a {width}x{height} image")]
    OutOfRange {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    #[error("seam entry {position} is {index}, which is not below {bound}")]
    SeamIndexOutOfRange { position: usize, index: u32, bound: u32 },

    #[error("seam has {found} entries, expected {expected}")]
    InvalidSeamShape { expected: usize, found: usize },

    #[error("seam jumps from {from} to {to} at entry {position}")]
    InvalidSeamContinuity { position: usize, from: u32, to: u32 },

    #[error("cannot remove a {orientation} seam: the image is only one pixel across")]
    DimensionTooSmall { orientation: Orientation },

    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("pixel buffer holds {found} pixels, expected {expected}")]
    BufferSize { expected: usize, found: usize },

    #[error("seam carving cannot enlarge a {width}x{height} image to {target_width}x{target_height}")]
    CannotEnlarge {
        width: u32,
        height: u32,
        target_width: u32,
        target_height: u32,
    },
}
