//! Reusable lattice fixtures.
//!
//! Lattice sizes every site ordering accepts, sizes each one rejects, and
//! a small-pool [`LayoutConfig`] builder so tests do not ask the default
//! allocator for 8 GiB of bookkeeping.

use tessel_codec::LayoutScheme;
use tessel_layout::LayoutConfig;

/// Sizes admissible under every ordering: at least two axes, axis 0
/// divisible by 4 and the rest even.
pub const UNIVERSAL_SIZES: &[&[u32]] = &[
    &[4, 2],
    &[8, 4],
    &[4, 2, 6],
    &[4, 4, 4, 4],
    &[8, 2, 4, 6],
    &[4, 2, 2, 2, 2],
];

/// A size the ordering must reject, or `None` if it accepts every
/// non-empty size.
pub fn rejected_size(scheme: LayoutScheme) -> Option<&'static [u32]> {
    match scheme {
        LayoutScheme::Lexicographic => None,
        LayoutScheme::Checkerboard2 | LayoutScheme::Checkerboard3DTimeFastest => {
            Some(&[3, 4, 4, 4])
        }
        LayoutScheme::Checkerboard32 => Some(&[8, 3, 4, 4]),
    }
}

/// Config for `dims` under `scheme` with a 16 MiB pool.
pub fn small_config(dims: &[u32], scheme: LayoutScheme) -> LayoutConfig {
    LayoutConfig {
        pool_size_gb: 1.0 / 64.0,
        ..LayoutConfig::new(dims.to_vec()).with_scheme(scheme)
    }
}
