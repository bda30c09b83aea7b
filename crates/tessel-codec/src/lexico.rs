//! Mixed-radix helpers shared by every codec.
//!
//! All orderings reduce to a lexicographic index over some (possibly
//! shrunk) grid, with axis 0 varying fastest.

use crate::error::CodecError;
use tessel_core::Coord;

/// Largest accepted extent: coordinates use `i32`, so each axis must fit.
pub const MAX_EXTENT: u32 = i32::MAX as u32;

/// Lexicographic index of `coord` within `extents`, axis 0 fastest.
///
/// ```
/// use tessel_codec::lexico::lex_index;
///
/// assert_eq!(lex_index(&[1, 2], &[2, 3]), 5);
/// ```
pub fn lex_index(coord: &[i32], extents: &[u32]) -> usize {
    debug_assert_eq!(coord.len(), extents.len());
    coord
        .iter()
        .zip(extents)
        .rev()
        .fold(0usize, |acc, (&c, &e)| acc * e as usize + c as usize)
}

/// Inverse of [`lex_index`]: decode `index` into a coordinate of `extents`.
pub fn lex_coord(index: usize, extents: &[u32]) -> Coord {
    let mut rest = index;
    extents
        .iter()
        .map(|&e| {
            let e = e as usize;
            let c = rest % e;
            rest /= e;
            c as i32
        })
        .collect()
}

/// Product of `extents`, or `None` on overflow.
pub fn checked_volume(extents: &[u32]) -> Option<usize> {
    extents
        .iter()
        .try_fold(1usize, |acc, &e| acc.checked_mul(e as usize))
}

/// Whether `coord` has one in-range component per axis.
pub fn in_bounds(coord: &[i32], extents: &[u32]) -> bool {
    coord.len() == extents.len()
        && coord
            .iter()
            .zip(extents)
            .all(|(&c, &e)| c >= 0 && (c as u32) < e)
}

/// Reject empty, zero or oversized extents and return the volume.
pub fn validate_extents(extents: &[u32]) -> Result<usize, CodecError> {
    if extents.is_empty() {
        return Err(CodecError::NoDimensions);
    }
    for (axis, &value) in extents.iter().enumerate() {
        if value == 0 {
            return Err(CodecError::ZeroExtent { axis });
        }
        if value > MAX_EXTENT {
            return Err(CodecError::ExtentTooLarge {
                axis,
                value,
                max: MAX_EXTENT,
            });
        }
    }
    checked_volume(extents).ok_or_else(|| CodecError::VolumeOverflow {
        extents: extents.to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn axis_zero_runs_fastest() {
        let extents = [3, 2, 2];
        assert_eq!(lex_index(&[0, 0, 0], &extents), 0);
        assert_eq!(lex_index(&[1, 0, 0], &extents), 1);
        assert_eq!(lex_index(&[0, 1, 0], &extents), 3);
        assert_eq!(lex_index(&[0, 0, 1], &extents), 6);
        assert_eq!(lex_index(&[2, 1, 1], &extents), 11);
    }

    #[test]
    fn decode_matches_worked_example() {
        assert_eq!(lex_coord(5, &[2, 3]).as_slice(), &[1, 2]);
    }

    #[test]
    fn validate_rejects_degenerate_extents() {
        assert_eq!(validate_extents(&[]), Err(CodecError::NoDimensions));
        assert_eq!(
            validate_extents(&[4, 0, 2]),
            Err(CodecError::ZeroExtent { axis: 1 })
        );
        assert!(matches!(
            validate_extents(&[MAX_EXTENT + 1]),
            Err(CodecError::ExtentTooLarge { axis: 0, .. })
        ));
        assert!(matches!(
            validate_extents(&[MAX_EXTENT, MAX_EXTENT, MAX_EXTENT, MAX_EXTENT, MAX_EXTENT]),
            Err(CodecError::VolumeOverflow { .. })
        ));
        assert_eq!(validate_extents(&[2, 3, 4]), Ok(24));
    }

    #[test]
    fn in_bounds_checks_rank_and_range() {
        assert!(in_bounds(&[1, 2], &[2, 3]));
        assert!(!in_bounds(&[2, 2], &[2, 3]));
        assert!(!in_bounds(&[-1, 0], &[2, 3]));
        assert!(!in_bounds(&[1], &[2, 3]));
    }

    proptest! {
        #[test]
        fn decode_inverts_encode(
            extents in prop::collection::vec(1u32..6, 1..5),
            seed in any::<usize>(),
        ) {
            let volume = checked_volume(&extents).unwrap();
            let index = seed % volume;
            let coord = lex_coord(index, &extents);
            prop_assert!(in_bounds(&coord, &extents));
            prop_assert_eq!(lex_index(&coord, &extents), index);
        }
    }
}
