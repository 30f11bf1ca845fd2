// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Find the cheapest top-to-bottom seam
//!
//! The image is treated as a digraph.  Every pixel in row `y` has an
//! edge to the (up to) three pixels below it in row `y + 1`, a virtual
//! source sits above the top row with an edge to every pixel in it,
//! and every pixel in the bottom row has an edge to a virtual sink.
//! The weight of an edge is the energy of the pixel it enters; edges
//! into the sink weigh nothing.
//!
//! Every edge points one row down, so plain row order is already a
//! topological order of the graph and a single pass of edge
//! relaxation gives the shortest source-to-sink path.  The graph
//! itself is never built: nodes are `(x, y)` addresses in a
//! distance-and-parent table the same shape as the image.
//!
//! Ties go left.  Pixels are relaxed left to right, each pixel relaxes
//! its children left to right, and a distance only changes on strict
//! improvement, so every pixel ends up pointing at the leftmost of its
//! cheapest parents and the sink at the leftmost cheapest pixel of the
//! bottom row.

use crate::cq;
use crate::energy::row_energies;
use crate::flipper::PixelView;
use crate::twodmap::{DistanceAndBackPointer, TwoDimensionalMap};
use image::Pixel;

/// One column index per row, top to bottom, for a vertical seam; one
/// row index per column, left to right, for a horizontal one.
pub type Seam = Vec<u32>;

type PathMap = TwoDimensionalMap<DistanceAndBackPointer>;

// v -> w
#[inline]
fn relax(paths: &mut PathMap, (vx, vy): (u32, u32), w: (u32, u32), weight: f64) {
    let candidate = paths[(vx, vy)].distance + weight;
    if candidate < paths[w].distance {
        paths[w] = DistanceAndBackPointer {
            distance: candidate,
            parent: vx,
        };
    }
}

/// Return the list of x-coordinates that, when mapped with the range
/// (0..height), give the XY coordinates of the lowest-energy
/// top-to-bottom seam.  Hand this a `Flipper` to get a horizontal seam.
pub fn find_vertical_seam<V>(image: &V) -> Seam
where
    V: PixelView,
    V::Pixel: Pixel<Subpixel = u8>,
{
    let (width, height) = image.dimensions();
    let maxwidth = width - 1;
    let mut paths = PathMap::filled(width, height, DistanceAndBackPointer::UNREACHED);
    let mut energies = Vec::with_capacity(width as usize);

    // Source -> top row.  The source contributes nothing but the
    // weight of the pixel entered.
    row_energies(image, 0, &mut energies);
    for (x, energy) in (0..width).zip(&energies) {
        paths[(x, 0)] = DistanceAndBackPointer {
            distance: *energy,
            parent: x,
        };
    }

    // Row y -> row y + 1, in topological order.
    for y in 0..height - 1 {
        row_energies(image, y + 1, &mut energies);
        for x in 0..width {
            let children = cq!(x == 0, 0, x - 1)..=cq!(x == maxwidth, maxwidth, x + 1);
            for child in children {
                relax(&mut paths, (x, y), (child, y + 1), energies[child as usize]);
            }
        }
    }

    // Bottom row -> sink, at no cost.
    let bottom = height - 1;
    let mut sink = DistanceAndBackPointer::UNREACHED;
    for x in 0..width {
        let distance = paths[(x, bottom)].distance;
        if distance < sink.distance {
            sink = DistanceAndBackPointer { distance, parent: x };
        }
    }

    // Walk the back pointers up from the sink, filling the seam from
    // the bottom.
    let mut seam = vec![0; height as usize];
    let mut column = sink.parent;
    for y in (0..height).rev() {
        seam[y as usize] = column;
        column = paths[(column, y)].parent;
    }
    seam
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::energy::tests::three_by_four;
    use crate::flipper::{Flipper, Orientation};
    use image::Rgb;

    // A deterministic pseudo-random image, no two runs alike in width
    // and height.
    fn noise(width: u32, height: u32, seed: u32) -> TwoDimensionalMap<Rgb<u8>> {
        let mut state = seed;
        let mut next = || {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            (state >> 16) as u8
        };
        let cells = (0..width * height)
            .map(|_| Rgb([next(), next(), next()]))
            .collect();
        TwoDimensionalMap::from_raw(width, height, cells).unwrap()
    }

    fn assert_valid(seam: &[u32], length: u32, bound: u32) {
        assert_eq!(seam.len(), length as usize);
        assert!(seam.iter().all(|&x| x < bound));
        assert!(seam.windows(2).all(|w| w[0].abs_diff(w[1]) <= 1));
    }

    #[test]
    fn vertical_seam_of_three_by_four() {
        assert_eq!(find_vertical_seam(&three_by_four()), vec![0, 1, 1, 0]);
    }

    #[test]
    fn horizontal_seam_of_three_by_four() {
        let image = three_by_four();
        let flipped = Flipper::new(&image, Orientation::Vertical, Orientation::Horizontal);
        assert_eq!(find_vertical_seam(&flipped), vec![1, 2, 1]);
    }

    #[test]
    fn seams_are_always_connected_and_in_bounds() {
        for (width, height, seed) in [(1, 1, 1), (1, 7, 2), (7, 1, 3), (2, 2, 4), (9, 6, 5), (6, 13, 6)] {
            let image = noise(width, height, seed);
            assert_valid(&find_vertical_seam(&image), height, width);
            let flipped = Flipper::new(&image, Orientation::Vertical, Orientation::Horizontal);
            assert_valid(&find_vertical_seam(&flipped), width, height);
        }
    }

    #[test]
    fn finding_is_deterministic() {
        let image = noise(12, 10, 42);
        assert_eq!(find_vertical_seam(&image), find_vertical_seam(&image));
    }

    #[test]
    fn uniform_images_take_the_leftmost_path() {
        let image = TwoDimensionalMap::filled(6, 5, Rgb([7u8, 7, 7]));
        let seam = find_vertical_seam(&image);
        assert_valid(&seam, 5, 6);
        assert_eq!(seam, vec![0, 1, 1, 1, 0]);
    }

    #[test]
    fn steep_gradients_are_avoided() {
        // Black, with white down both outer columns.  The interior pixels
        // next to the white columns carry a big horizontal gradient, the
        // one in the middle carries none.
        let white = Rgb([255u8, 255, 255]);
        let black = Rgb([0u8, 0, 0]);
        let cells = (0..15)
            .map(|i| cq!(i % 5 == 0 || i % 5 == 4, white, black))
            .collect();
        let image = TwoDimensionalMap::from_raw(5, 3, cells).unwrap();
        assert_eq!(find_vertical_seam(&image), vec![1, 2, 1]);
    }
}
