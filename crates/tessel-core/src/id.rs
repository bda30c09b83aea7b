//! Strongly-typed identifiers and the [`Coord`] type alias.

use smallvec::SmallVec;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Default lattice dimensionality: three space axes plus time.
pub const ND: usize = 4;

/// A lattice site coordinate, one component per axis.
///
/// Uses `SmallVec<[i32; 4]>` so the common four-dimensional lattice never
/// touches the heap. Higher-dimensional lattices spill transparently.
/// Valid components satisfy `0 <= c[i] < extent[i]`.
pub type Coord = SmallVec<[i32; 4]>;

/// Identifies a compute node in the logical process grid.
///
/// A single-node layout only ever uses `NodeId(0)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// The primary node.
    pub const PRIMARY: NodeId = NodeId(0);
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for NodeId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Counter for unique [`LayoutInstanceId`] allocation.
static LAYOUT_INSTANCE_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-instance identifier for a created layout.
///
/// Data indexed by one layout must not be reinterpreted through another;
/// consumers that cache index tables compare instance IDs to detect a
/// layout that was torn down and recreated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayoutInstanceId(u64);

impl LayoutInstanceId {
    /// Allocate a fresh, unique instance ID. Thread-safe.
    pub fn next() -> Self {
        Self(LAYOUT_INSTANCE_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for LayoutInstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
