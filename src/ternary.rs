// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// A one-line conditional expression.  `cargo fmt` spreads an `if`
/// expression over five lines, and the clipping rules at the left and
/// right edges of a row read far better side by side:
///
/// ```
/// # use seamcarve::cq;
/// let (x, maxwidth) = (2u32, 4u32);
/// let children = cq!(x == 0, 0, x - 1)..=cq!(x == maxwidth, maxwidth, x + 1);
/// assert_eq!(children, 1..=3);
/// ```
#[macro_export]
macro_rules! cq {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}
