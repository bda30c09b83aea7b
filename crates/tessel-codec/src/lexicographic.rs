//! Plain lexicographic site order.

use crate::codec::CoordinateCodec;
use crate::error::CodecError;
use crate::lexico;
use crate::scheme::LayoutScheme;
use tessel_core::{Coord, NodeId};

/// Mixed-radix site order with axis 0 varying fastest.
///
/// Stepping a coordinate by one along axis 0 (without wrapping) steps the
/// index by one. Any non-empty set of non-zero extents is accepted.
///
/// # Examples
///
/// ```
/// use tessel_codec::{CoordinateCodec, Lexicographic};
/// use tessel_core::NodeId;
///
/// let codec = Lexicographic::new(&[2, 3]).unwrap();
/// assert_eq!(codec.coord_to_index(&[1, 2]), 5);
/// assert_eq!(codec.index_to_coord(NodeId(0), 5).as_slice(), &[1, 2]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lexicographic {
    extents: Vec<u32>,
    volume: usize,
}

impl Lexicographic {
    /// Build the codec for `extents`.
    pub fn new(extents: &[u32]) -> Result<Self, CodecError> {
        let volume = lexico::validate_extents(extents)?;
        Ok(Self {
            extents: extents.to_vec(),
            volume,
        })
    }
}

impl CoordinateCodec for Lexicographic {
    fn scheme(&self) -> LayoutScheme {
        LayoutScheme::Lexicographic
    }

    fn extents(&self) -> &[u32] {
        &self.extents
    }

    fn volume(&self) -> usize {
        self.volume
    }

    fn block_count(&self) -> usize {
        1
    }

    fn block_of_coord(&self, _coord: &[i32]) -> usize {
        0
    }

    fn coord_to_index(&self, coord: &[i32]) -> usize {
        lexico::lex_index(coord, &self.extents)
    }

    fn index_to_coord(&self, _node: NodeId, index: usize) -> Coord {
        lexico::lex_coord(index, &self.extents)
    }
}
