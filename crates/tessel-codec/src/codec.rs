//! The core `CoordinateCodec` trait and `dyn CoordinateCodec` downcast support.

use crate::lexico;
use crate::scheme::LayoutScheme;
use std::any::Any;
use std::fmt;
use tessel_core::{Coord, NodeId};

/// Bijection between lattice coordinates and linear site indices.
///
/// A codec is built once for a fixed set of extents and is immutable
/// afterwards, so it can be shared across worker threads without locking.
///
/// Indices are grouped into [`block_count`](Self::block_count) contiguous
/// blocks of [`block_volume`](Self::block_volume) sites each: one block for
/// the lexicographic order, one per colour for the checkerboard orders and
/// one per sublattice for the 32-way order.
///
/// # Contract
///
/// For every valid coordinate `c` and every `i` in `[0, volume)`:
///
/// - `index_to_coord(node, coord_to_index(c)) == c`
/// - `coord_to_index(index_to_coord(node, i)) == i`
/// - `coord_to_index(c) / block_volume() == block_of_coord(c)`
///
/// The unchecked conversions assume valid input; use the `checked_*`
/// variants for untrusted coordinates or indices.
pub trait CoordinateCodec: Any + fmt::Debug + Send + Sync + 'static {
    /// The ordering this codec implements.
    fn scheme(&self) -> LayoutScheme;

    /// Lattice extent per axis.
    fn extents(&self) -> &[u32];

    /// Number of lattice axes.
    fn ndim(&self) -> usize {
        self.extents().len()
    }

    /// Total number of sites.
    fn volume(&self) -> usize;

    /// Number of contiguous index blocks (colours or sublattices).
    fn block_count(&self) -> usize;

    /// Number of sites in each block.
    fn block_volume(&self) -> usize {
        self.volume() / self.block_count()
    }

    /// Block (colour or sublattice) a coordinate belongs to.
    fn block_of_coord(&self, coord: &[i32]) -> usize;

    /// Linear index of a valid coordinate.
    fn coord_to_index(&self, coord: &[i32]) -> usize;

    /// Coordinate of a valid linear index.
    ///
    /// `node` identifies the owning node; single-node codecs ignore it.
    fn index_to_coord(&self, node: NodeId, index: usize) -> Coord;

    /// Whether `coord` lies inside the lattice.
    fn contains(&self, coord: &[i32]) -> bool {
        lexico::in_bounds(coord, self.extents())
    }

    /// Bounds-checked [`coord_to_index`](Self::coord_to_index).
    fn checked_coord_to_index(&self, coord: &[i32]) -> Option<usize> {
        if self.contains(coord) {
            Some(self.coord_to_index(coord))
        } else {
            None
        }
    }

    /// Bounds-checked [`index_to_coord`](Self::index_to_coord).
    fn checked_index_to_coord(&self, node: NodeId, index: usize) -> Option<Coord> {
        if index < self.volume() {
            Some(self.index_to_coord(node, index))
        } else {
            None
        }
    }
}

impl dyn CoordinateCodec {
    /// Attempt to downcast a trait object to a concrete codec type.
    ///
    /// Lets hot loops that know the active ordering call the concrete
    /// conversion directly.
    pub fn downcast_ref<T: CoordinateCodec>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }
}
