//! Benchmark profiles and utilities for the Tessel lattice layout engine.
//!
//! - [`REFERENCE_LATTICE`]: 16³×32 (131K sites), accepted by every ordering
//! - [`STRESS_LATTICE`]: 32³×64 (~2.1M sites) for stress testing
//! - [`profile_config`]: a [`LayoutConfig`] with a small pool for a profile
//! - [`sample_coords`]: deterministic in-bounds coordinates

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use smallvec::SmallVec;
use tessel_codec::LayoutScheme;
use tessel_core::Coord;
use tessel_layout::LayoutConfig;

/// Reference lattice: 16×16×16×32.
pub const REFERENCE_LATTICE: [u32; 4] = [16, 16, 16, 32];

/// Stress lattice: 32×32×32×64.
pub const STRESS_LATTICE: [u32; 4] = [32, 32, 32, 64];

/// Config for `dims` under `scheme` with a 64 MiB pool.
pub fn profile_config(dims: &[u32], scheme: LayoutScheme) -> LayoutConfig {
    LayoutConfig {
        pool_size_gb: 1.0 / 16.0,
        ..LayoutConfig::new(dims.to_vec()).with_scheme(scheme)
    }
}

/// `n` deterministic pseudo-random coordinates inside `dims`.
pub fn sample_coords(dims: &[u32], n: usize, seed: u64) -> Vec<Coord> {
    (0..n as u64)
        .map(|i| {
            let mut h = seed
                .wrapping_mul(6364136223846793005)
                .wrapping_add(i.wrapping_mul(1442695040888963407));
            dims.iter()
                .map(|&d| {
                    h = h.rotate_left(17).wrapping_mul(2862933555777941757);
                    ((h >> 33) % u64::from(d)) as i32
                })
                .collect::<SmallVec<_>>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessel_codec::lexico::in_bounds;

    #[test]
    fn profiles_validate_for_every_ordering() {
        for dims in [REFERENCE_LATTICE, STRESS_LATTICE] {
            for scheme in LayoutScheme::ALL {
                profile_config(&dims, scheme).validate().unwrap();
                scheme.build(&dims).unwrap();
            }
        }
    }

    #[test]
    fn sample_coords_are_in_bounds() {
        let coords = sample_coords(&REFERENCE_LATTICE, 1000, 42);
        assert_eq!(coords.len(), 1000);
        assert!(coords.iter().all(|c| in_bounds(c, &REFERENCE_LATTICE)));
    }

    #[test]
    fn sample_coords_deterministic() {
        assert_eq!(
            sample_coords(&[8, 8], 50, 7),
            sample_coords(&[8, 8], 50, 7)
        );
    }
}
