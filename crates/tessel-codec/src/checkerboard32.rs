//! Hypercube checkerboard site order with `2^(nd+1)` sublattices.

use crate::codec::CoordinateCodec;
use crate::error::CodecError;
use crate::lexico;
use crate::scheme::LayoutScheme;
use tessel_core::{Coord, NodeId};

/// `2^(nd+1)`-way checkerboard over hypercubes (32-way for `nd = 4`).
///
/// Each site gets an `nd + 1` bit sublattice id:
///
/// - bit `m` (for `m < nd`) is the low bit of `coord[m]`;
/// - bit `nd` is the colour of the enclosing 2×…×2 hypercube, the parity
///   of `sum(coord[m] >> 1)`.
///
/// Sublattices occupy consecutive blocks of `volume >> (nd+1)` indices in
/// ascending id order. Within a sublattice, sites are ordered
/// lexicographically over the shrunk grid `[d0/4, d1/2, ..., d(nd-1)/2]`.
///
/// This bit layout is persisted implicitly by every array stored in this
/// order and must not change.
///
/// Axis 0 must be divisible by 4 and every other axis by 2.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Checkerboard32 {
    extents: Vec<u32>,
    cb_extents: Vec<u32>,
    volume: usize,
    vol_cb: usize,
}

impl Checkerboard32 {
    /// Build the codec for `extents`.
    ///
    /// Returns `Err(CodecError::IndivisibleExtent)` if axis 0 is not a
    /// multiple of 4 or any other axis is odd.
    pub fn new(extents: &[u32]) -> Result<Self, CodecError> {
        let volume = lexico::validate_extents(extents)?;
        for (axis, &extent) in extents.iter().enumerate() {
            let divisor = if axis == 0 { 4 } else { 2 };
            if extent % divisor != 0 {
                return Err(CodecError::IndivisibleExtent {
                    scheme: LayoutScheme::Checkerboard32,
                    axis,
                    extent,
                    divisor,
                });
            }
        }
        let cb_extents = extents
            .iter()
            .enumerate()
            .map(|(axis, &e)| if axis == 0 { e >> 2 } else { e >> 1 })
            .collect();
        Ok(Self {
            extents: extents.to_vec(),
            cb_extents,
            volume,
            vol_cb: volume >> (extents.len() + 1),
        })
    }

    /// Extents of the shrunk grid each sublattice is ordered over.
    pub fn cb_extents(&self) -> &[u32] {
        &self.cb_extents
    }
}

impl CoordinateCodec for Checkerboard32 {
    fn scheme(&self) -> LayoutScheme {
        LayoutScheme::Checkerboard32
    }

    fn extents(&self) -> &[u32] {
        &self.extents
    }

    fn volume(&self) -> usize {
        self.volume
    }

    fn block_count(&self) -> usize {
        1 << (self.extents.len() + 1)
    }

    fn block_of_coord(&self, coord: &[i32]) -> usize {
        let nd = self.extents.len();
        let subl = coord
            .iter()
            .rev()
            .fold(0usize, |subl, &c| (subl << 1) | (c & 1) as usize);
        let cb = coord.iter().fold(0, |cb, &c| cb ^ ((c >> 1) & 1)) as usize;
        subl | (cb << nd)
    }

    fn coord_to_index(&self, coord: &[i32]) -> usize {
        let subl = self.block_of_coord(coord);
        let cb_coord: Coord = coord
            .iter()
            .enumerate()
            .map(|(m, &c)| if m == 0 { c >> 2 } else { c >> 1 })
            .collect();
        lexico::lex_index(&cb_coord, &self.cb_extents) + subl * self.vol_cb
    }

    fn index_to_coord(&self, _node: NodeId, index: usize) -> Coord {
        let nd = self.extents.len();
        let mut subl = index / self.vol_cb;
        let mut coord = lexico::lex_coord(index % self.vol_cb, &self.cb_extents);

        // Hypercube parity contributed by the shrunk axes 1..nd.
        let cb = coord[1..].iter().fold(0, |cb, &c| cb ^ (c & 1)) as usize;

        coord[0] <<= 2;
        for c in coord.iter_mut().skip(1) {
            *c <<= 1;
        }

        subl ^= cb << nd;
        for (m, c) in coord.iter_mut().enumerate() {
            *c ^= ((subl >> m) & 1) as i32;
        }
        // What remains of the hypercube bit is axis 0's second-lowest bit.
        coord[0] ^= (((subl >> nd) & 1) << 1) as i32;
        coord
    }
}
