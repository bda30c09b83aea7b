//! Exhaustive bijection self-check run at layout creation.
//!
//! Every linear index is decoded to a coordinate and re-encoded; any
//! mismatch means arrays indexed by this layout would be silently
//! scrambled, so the layout is rejected outright.

use crate::config::SelfCheckMode;
use crate::error::LayoutError;
use rayon::prelude::*;
use tessel_codec::CoordinateCodec;
use tessel_core::NodeId;

/// Round-trip a single index, returning the violation if it fails.
fn check_index(codec: &dyn CoordinateCodec, node: NodeId, index: usize) -> Option<LayoutError> {
    let coord = codec.index_to_coord(node, index);
    if !codec.contains(&coord) {
        return Some(LayoutError::BijectionViolation {
            index,
            coord,
            roundtrip: None,
        });
    }
    let j = codec.coord_to_index(&coord);
    (j != index).then_some(LayoutError::BijectionViolation {
        index,
        coord,
        roundtrip: Some(j),
    })
}

/// Verify `coord_to_index(index_to_coord(node, i)) == i` for every `i` in
/// `[0, volume)`.
///
/// In [`SelfCheckMode::Parallel`] the sweep is split across the rayon
/// pool and stops at the first failure any worker finds, so the reported
/// index is not necessarily the lowest. [`SelfCheckMode::Serial`] always
/// reports the lowest failing index.
pub fn verify_bijection(
    codec: &dyn CoordinateCodec,
    node: NodeId,
    mode: SelfCheckMode,
) -> Result<(), LayoutError> {
    let volume = codec.volume();
    tracing::debug!(scheme = %codec.scheme(), volume, ?mode, "checking layout bijection");

    let failure = match mode {
        SelfCheckMode::Parallel => (0..volume)
            .into_par_iter()
            .find_map_any(|i| check_index(codec, node, i)),
        SelfCheckMode::Serial => (0..volume).find_map(|i| check_index(codec, node, i)),
    };
    match failure {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;
    use tessel_codec::{LayoutScheme, Lexicographic};
    use tessel_core::Coord;

    /// Lexicographic order with two sites collapsed onto one index.
    #[derive(Debug)]
    struct Collapsing(Lexicographic);

    impl CoordinateCodec for Collapsing {
        fn scheme(&self) -> LayoutScheme {
            LayoutScheme::Lexicographic
        }
        fn extents(&self) -> &[u32] {
            self.0.extents()
        }
        fn volume(&self) -> usize {
            self.0.volume()
        }
        fn block_count(&self) -> usize {
            1
        }
        fn block_of_coord(&self, _coord: &[i32]) -> usize {
            0
        }
        fn coord_to_index(&self, coord: &[i32]) -> usize {
            let i = self.0.coord_to_index(coord);
            if i == 5 {
                4
            } else {
                i
            }
        }
        fn index_to_coord(&self, node: NodeId, index: usize) -> Coord {
            self.0.index_to_coord(node, index)
        }
    }

    /// Decodes one index to a site outside the lattice.
    #[derive(Debug)]
    struct Escaping(Lexicographic);

    impl CoordinateCodec for Escaping {
        fn scheme(&self) -> LayoutScheme {
            LayoutScheme::Lexicographic
        }
        fn extents(&self) -> &[u32] {
            self.0.extents()
        }
        fn volume(&self) -> usize {
            self.0.volume()
        }
        fn block_count(&self) -> usize {
            1
        }
        fn block_of_coord(&self, _coord: &[i32]) -> usize {
            0
        }
        fn coord_to_index(&self, coord: &[i32]) -> usize {
            self.0.coord_to_index(coord)
        }
        fn index_to_coord(&self, node: NodeId, index: usize) -> Coord {
            if index == 3 {
                smallvec![9, 9]
            } else {
                self.0.index_to_coord(node, index)
            }
        }
    }

    #[test]
    fn every_scheme_passes() {
        for scheme in LayoutScheme::ALL {
            let codec = scheme.build(&[8, 4, 2, 6]).unwrap();
            for mode in [SelfCheckMode::Parallel, SelfCheckMode::Serial] {
                assert_eq!(verify_bijection(codec.as_ref(), NodeId(0), mode), Ok(()));
            }
        }
    }

    #[test]
    fn serial_reports_lowest_failing_index() {
        let codec = Collapsing(Lexicographic::new(&[4, 4]).unwrap());
        assert_eq!(
            verify_bijection(&codec, NodeId(0), SelfCheckMode::Serial),
            Err(LayoutError::BijectionViolation {
                index: 5,
                coord: smallvec![1, 1],
                roundtrip: Some(4),
            })
        );
    }

    #[test]
    fn parallel_detects_collapsed_sites() {
        let codec = Collapsing(Lexicographic::new(&[16, 16]).unwrap());
        assert!(matches!(
            verify_bijection(&codec, NodeId(0), SelfCheckMode::Parallel),
            Err(LayoutError::BijectionViolation { index: 5, .. })
        ));
    }

    #[test]
    fn out_of_lattice_coordinate_is_a_violation() {
        let codec = Escaping(Lexicographic::new(&[2, 2]).unwrap());
        assert_eq!(
            verify_bijection(&codec, NodeId(0), SelfCheckMode::Serial),
            Err(LayoutError::BijectionViolation {
                index: 3,
                coord: smallvec![9, 9],
                roundtrip: None,
            })
        );
    }
}
