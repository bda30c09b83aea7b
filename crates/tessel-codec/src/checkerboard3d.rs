//! Two-colour checkerboard over the spatial axes, time kept unsplit.

use crate::codec::CoordinateCodec;
use crate::error::CodecError;
use crate::lexico;
use crate::scheme::LayoutScheme;
use smallvec::SmallVec;
use tessel_core::{Coord, NodeId};

/// Even/odd checkerboard order that ignores the last (time) axis.
///
/// Colour is the parity of the sum of axes `0..nd-1`; the last axis never
/// contributes, so every time slice carries the same spatial colouring.
/// Axis 0 is halved and reconstructed exactly as in
/// [`Checkerboard2`](crate::Checkerboard2), but the parity accounting runs
/// over a different set of axes and is kept as its own code path.
///
/// Needs at least two axes and an even axis 0.
///
/// # Examples
///
/// ```
/// use tessel_codec::{Checkerboard3DTimeFastest, CoordinateCodec};
///
/// let codec = Checkerboard3DTimeFastest::new(&[4, 4, 4, 4]).unwrap();
/// // Stepping only the time axis never changes colour.
/// assert!(codec.coord_to_index(&[0, 0, 0, 1]) < 128);
/// assert!(codec.coord_to_index(&[1, 0, 0, 1]) >= 128);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Checkerboard3DTimeFastest {
    extents: Vec<u32>,
    cb_extents: Vec<u32>,
    volume: usize,
    vol_cb: usize,
}

impl Checkerboard3DTimeFastest {
    /// Build the codec for `extents`.
    ///
    /// Returns `Err(CodecError::TooFewDimensions)` for a one-axis lattice
    /// and `Err(CodecError::IndivisibleExtent)` if axis 0 is odd.
    pub fn new(extents: &[u32]) -> Result<Self, CodecError> {
        let volume = lexico::validate_extents(extents)?;
        if extents.len() < 2 {
            return Err(CodecError::TooFewDimensions {
                scheme: LayoutScheme::Checkerboard3DTimeFastest,
                ndim: extents.len(),
                min: 2,
            });
        }
        if extents[0] % 2 != 0 {
            return Err(CodecError::IndivisibleExtent {
                scheme: LayoutScheme::Checkerboard3DTimeFastest,
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

    /// Index of the unsplit time axis.
    pub fn time_axis(&self) -> usize {
        self.extents.len() - 1
    }
}

impl CoordinateCodec for Checkerboard3DTimeFastest {
    fn scheme(&self) -> LayoutScheme {
        LayoutScheme::Checkerboard3DTimeFastest
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
        coord[..self.time_axis()]
            .iter()
            .fold(0, |cb, &c| cb ^ (c & 1)) as usize
    }

    fn coord_to_index(&self, coord: &[i32]) -> usize {
        let cb = self.block_of_coord(coord);
        let mut cb_coord: Coord = SmallVec::from_slice(coord);
        cb_coord[0] /= 2;
        lexico::lex_index(&cb_coord, &self.cb_extents) + cb * self.vol_cb
    }

    fn index_to_coord(&self, _node: NodeId, index: usize) -> Coord {
        let cb = (index / self.vol_cb) as i32;
        let mut coord = lexico::lex_coord(index % self.vol_cb, &self.cb_extents);

        // Spatial axes 1..nd-1 only; the time axis is excluded.
        let cbb = coord[1..self.time_axis()]
            .iter()
            .fold(cb & 1, |acc, &c| acc ^ (c & 1));
        coord[0] = 2 * coord[0] + cbb;
        coord
    }
}
