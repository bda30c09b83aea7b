//! Node topology: which process owns which sites.

use std::fmt;
use tessel_core::{Coord, NodeId};

/// Placement of lattice sites onto compute nodes.
///
/// A multi-node decomposition would answer these non-trivially; the
/// codecs never depend on the implementation, so one can be added beside
/// [`SingleNode`] without touching the site orderings.
pub trait NodeTopology: fmt::Debug + Send + Sync {
    /// Node this process runs as.
    fn node_number(&self) -> NodeId;

    /// Number of nodes in the process grid.
    fn num_nodes(&self) -> usize;

    /// Whether this process is the primary (I/O and reporting) node.
    fn primary_node(&self) -> bool {
        self.node_number() == NodeId::PRIMARY
    }

    /// Node owning the site at `coord`.
    fn node_number_of(&self, coord: &[i32]) -> NodeId;

    /// Node at `node_coord` in the logical process grid.
    fn node_number_from(&self, node_coord: &[i32]) -> NodeId;

    /// Logical process-grid coordinate of `node`.
    fn node_coord_of(&self, node: NodeId) -> Coord;
}

/// The whole lattice on one node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SingleNode {
    nd: usize,
}

impl SingleNode {
    /// Single-node topology for an `nd`-dimensional lattice.
    pub fn new(nd: usize) -> Self {
        Self { nd }
    }
}

impl NodeTopology for SingleNode {
    fn node_number(&self) -> NodeId {
        NodeId::PRIMARY
    }

    fn num_nodes(&self) -> usize {
        1
    }

    fn primary_node(&self) -> bool {
        true
    }

    fn node_number_of(&self, _coord: &[i32]) -> NodeId {
        NodeId::PRIMARY
    }

    fn node_number_from(&self, _node_coord: &[i32]) -> NodeId {
        NodeId::PRIMARY
    }

    fn node_coord_of(&self, _node: NodeId) -> Coord {
        std::iter::repeat_n(0, self.nd).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_node_answers_are_degenerate() {
        let t = SingleNode::new(4);
        assert_eq!(t.node_number(), NodeId(0));
        assert_eq!(t.num_nodes(), 1);
        assert!(t.primary_node());
        assert_eq!(t.node_number_of(&[3, 1, 2, 0]), NodeId(0));
        assert_eq!(t.node_number_from(&[0, 0, 0, 0]), NodeId(0));
        assert_eq!(t.node_coord_of(NodeId(5)).as_slice(), &[0, 0, 0, 0]);
    }

    #[test]
    fn default_primary_node_follows_node_number() {
        #[derive(Debug)]
        struct Secondary;
        impl NodeTopology for Secondary {
            fn node_number(&self) -> NodeId {
                NodeId(1)
            }
            fn num_nodes(&self) -> usize {
                2
            }
            fn node_number_of(&self, coord: &[i32]) -> NodeId {
                NodeId((coord[0] >= 2) as u32)
            }
            fn node_number_from(&self, node_coord: &[i32]) -> NodeId {
                NodeId(node_coord[0] as u32)
            }
            fn node_coord_of(&self, node: NodeId) -> Coord {
                smallvec::smallvec![node.0 as i32]
            }
        }
        assert!(!Secondary.primary_node());
    }
}
