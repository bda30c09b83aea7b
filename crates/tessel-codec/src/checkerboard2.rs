//! Two-colour (red/black) checkerboard site order.

use crate::codec::CoordinateCodec;
use crate::error::CodecError;
use crate::lexico;
use crate::scheme::LayoutScheme;
use smallvec::SmallVec;
use tessel_core::{Coord, NodeId};

/// Even/odd checkerboard order over every axis.
///
/// A site's colour is the parity of the sum of its coordinate components.
/// Even sites occupy `[0, volume/2)` and odd sites `[volume/2, volume)`;
/// within a colour, sites are ordered lexicographically over the grid with
/// axis 0 halved.
///
/// Axis 0 must be even. Other axes may have any extent.
///
/// # Examples
///
/// ```
/// use tessel_codec::{Checkerboard2, CoordinateCodec};
/// use tessel_core::NodeId;
///
/// let codec = Checkerboard2::new(&[4, 4, 4, 4]).unwrap();
/// assert_eq!(codec.coord_to_index(&[0, 0, 0, 0]), 0);
/// assert_eq!(codec.coord_to_index(&[1, 0, 0, 0]), 128);
/// assert_eq!(codec.index_to_coord(NodeId(0), 128).as_slice(), &[1, 0, 0, 0]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Checkerboard2 {
    extents: Vec<u32>,
    cb_extents: Vec<u32>,
    volume: usize,
    vol_cb: usize,
}

impl Checkerboard2 {
    /// Build the codec for `extents`.
    ///
    /// Returns `Err(CodecError::IndivisibleExtent)` if axis 0 is odd.
    pub fn new(extents: &[u32]) -> Result<Self, CodecError> {
        let volume = lexico::validate_extents(extents)?;
        if extents[0] % 2 != 0 {
            return Err(CodecError::IndivisibleExtent {
                scheme: LayoutScheme::Checkerboard2,
                axis: 0,
                extent: extents[0],
                divisor: 2,
            });
        }
        let mut cb_extents = extents.to_vec();
        cb_extents[0] /= 2;
        Ok(Self {
            extents: extents.to_vec(),
            cb_extents,
            volume,
            vol_cb: volume / 2,
        })
    }

    /// Extents of the half-lattice each colour is ordered over.
    pub fn cb_extents(&self) -> &[u32] {
        &self.cb_extents
    }
}

impl CoordinateCodec for Checkerboard2 {
    fn scheme(&self) -> LayoutScheme {
        LayoutScheme::Checkerboard2
    }

    fn extents(&self) -> &[u32] {
        &self.extents
    }

    fn volume(&self) -> usize {
        self.volume
    }

    fn block_count(&self) -> usize {
        2
    }

    fn block_of_coord(&self, coord: &[i32]) -> usize {
        coord.iter().fold(0, |cb, &c| cb ^ (c & 1)) as usize
    }

    fn coord_to_index(&self, coord: &[i32]) -> usize {
        let cb = self.block_of_coord(coord);
        let mut cb_coord: Coord = SmallVec::from_slice(coord);
        cb_coord[0] >>= 1;
        lexico::lex_index(&cb_coord, &self.cb_extents) + cb * self.vol_cb
    }

    fn index_to_coord(&self, _node: NodeId, index: usize) -> Coord {
        let cb = (index / self.vol_cb) as i32;
        let mut coord = lexico::lex_coord(index % self.vol_cb, &self.cb_extents);

        // Axis 0's low bit makes the full coordinate sum match the colour.
        let cbb = coord[1..].iter().fold(cb & 1, |acc, &c| acc ^ (c & 1));
        coord[0] = 2 * coord[0] + cbb;
        coord
    }
}
