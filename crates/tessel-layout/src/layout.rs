//! The immutable query surface of a created layout.

use crate::geometry::GeometryConfig;
use crate::topology::NodeTopology;
use std::sync::Arc;
use tessel_codec::{CodecError, CoordinateCodec, LayoutScheme, Lexicographic};
use tessel_core::{Coord, LayoutInstanceId, NodeId};

/// A validated lattice layout.
///
/// Produced by [`LayoutManager::create_layout`](crate::LayoutManager::create_layout)
/// only after every site passed the bijection self-check. Immutable and
/// `Send + Sync`: share it behind an `Arc` with every array and worker
/// that needs lattice geometry or site indexing.
#[derive(Debug)]
pub struct Layout {
    geometry: GeometryConfig,
    codec: Arc<dyn CoordinateCodec>,
    topology: Arc<dyn NodeTopology>,
    lexicographic: Lexicographic,
    instance_id: LayoutInstanceId,
}

impl Layout {
    /// Assemble a layout from a created geometry and its resolved codec.
    ///
    /// Performs no self-check; the manager runs it before calling this.
    pub(crate) fn new(
        geometry: GeometryConfig,
        codec: Arc<dyn CoordinateCodec>,
        topology: Arc<dyn NodeTopology>,
    ) -> Result<Self, CodecError> {
        let lexicographic = Lexicographic::new(geometry.lattice_size())?;
        Ok(Self {
            geometry,
            codec,
            topology,
            lexicographic,
            instance_id: LayoutInstanceId::next(),
        })
    }

    /// Unique identifier of this layout instance.
    pub fn instance_id(&self) -> LayoutInstanceId {
        self.instance_id
    }

    /// The geometry this layout was created from.
    pub fn geometry(&self) -> &GeometryConfig {
        &self.geometry
    }

    /// The active site ordering.
    pub fn scheme(&self) -> LayoutScheme {
        self.codec.scheme()
    }

    /// The resolved codec, for callers that convert in bulk.
    pub fn codec(&self) -> &Arc<dyn CoordinateCodec> {
        &self.codec
    }

    /// Number of lattice axes.
    pub fn nd(&self) -> usize {
        self.geometry.nd()
    }

    /// Lattice extent per axis.
    pub fn lattice_size(&self) -> &[u32] {
        self.geometry.lattice_size()
    }

    /// Subgrid extent per axis on this node.
    pub fn subgrid_lattice_size(&self) -> &[u32] {
        self.geometry.subgrid_lattice_size()
    }

    /// Total number of lattice sites.
    pub fn volume(&self) -> usize {
        self.geometry.volume()
    }

    /// Number of sites stored on this node.
    pub fn sites_on_node(&self) -> usize {
        self.geometry.subgrid_volume()
    }

    /// This node's number.
    pub fn node_number(&self) -> NodeId {
        self.topology.node_number()
    }

    /// Node owning the site at `coord`.
    pub fn node_number_of(&self, coord: &[i32]) -> NodeId {
        self.topology.node_number_of(coord)
    }

    /// Number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.topology.num_nodes()
    }

    /// Whether this is the primary node.
    pub fn primary_node(&self) -> bool {
        self.topology.primary_node()
    }

    /// This node's logical coordinate in the process grid.
    pub fn node_coord(&self) -> &Coord {
        self.geometry.node_coord()
    }

    /// Extent of the logical process grid.
    pub fn logical_size(&self) -> &[u32] {
        self.geometry.logical_size()
    }

    /// Node at the given logical process-grid coordinate. Not meant to be fast.
    pub fn node_number_from(&self, node_coord: &[i32]) -> NodeId {
        self.topology.node_number_from(node_coord)
    }

    /// Logical process-grid coordinate of `node`. Not meant to be fast.
    pub fn logical_coord_from(&self, node: NodeId) -> Coord {
        self.topology.node_coord_of(node)
    }

    /// Whether an I/O grid is defined. Always true once a layout exists.
    pub fn is_io_grid_defined(&self) -> bool {
        !self.geometry.io_grid().is_empty()
    }

    /// Number of I/O node groups.
    pub fn num_io_node_grid(&self) -> usize {
        self.geometry.num_io_nodes()
    }

    /// The I/O node grid.
    pub fn io_node_grid(&self) -> &[u32] {
        self.geometry.io_grid()
    }

    /// Linear index of the site at a valid `coord`.
    pub fn linear_site_index(&self, coord: &[i32]) -> usize {
        self.codec.coord_to_index(coord)
    }

    /// Linear index of `coord`, or `None` if it lies outside the lattice.
    pub fn checked_linear_site_index(&self, coord: &[i32]) -> Option<usize> {
        self.codec.checked_coord_to_index(coord)
    }

    /// Linear index of the site with lexicographic number `lexicosite`.
    pub fn linear_site_index_from_lex(&self, lexicosite: usize) -> usize {
        let coord = self
            .lexicographic
            .index_to_coord(self.node_number(), lexicosite);
        self.codec.coord_to_index(&coord)
    }

    /// Coordinate of the site stored at `linear` on `node`.
    pub fn site_coords(&self, node: NodeId, linear: usize) -> Coord {
        self.codec.index_to_coord(node, linear)
    }
}

#[cfg(test)]
impl Layout {
    /// Single-node layout built without the manager, for unit tests.
    pub(crate) fn for_tests(dims: &[u32], scheme: LayoutScheme) -> Self {
        let mut geometry = GeometryConfig::new(dims.len());
        geometry.set_lattice_size(dims);
        geometry.create().unwrap();
        geometry.set_io_grid_defaults();
        let codec = scheme.build(dims).unwrap();
        let topology = Arc::new(crate::topology::SingleNode::new(dims.len()));
        Self::new(geometry, codec, topology).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(dims: &[u32], scheme: LayoutScheme) -> Layout {
        Layout::for_tests(dims, scheme)
    }

    #[test]
    fn query_surface_on_single_node() {
        let l = layout(&[4, 4, 4, 4], LayoutScheme::Checkerboard2);
        assert_eq!(l.volume(), 256);
        assert_eq!(l.sites_on_node(), 256);
        assert_eq!(l.lattice_size(), &[4, 4, 4, 4]);
        assert_eq!(l.subgrid_lattice_size(), &[4, 4, 4, 4]);
        assert_eq!(l.node_number(), NodeId(0));
        assert_eq!(l.num_nodes(), 1);
        assert!(l.primary_node());
        assert_eq!(l.node_coord().as_slice(), &[0, 0, 0, 0]);
        assert_eq!(l.logical_size(), &[1, 1, 1, 1]);
        assert_eq!(l.node_number_of(&[3, 3, 3, 3]), NodeId(0));
        assert_eq!(l.node_number_from(&[0, 0, 0, 0]), NodeId(0));
        assert_eq!(l.logical_coord_from(NodeId(0)).as_slice(), &[0, 0, 0, 0]);
        assert!(l.is_io_grid_defined());
        assert_eq!(l.num_io_node_grid(), 1);
        assert_eq!(l.io_node_grid(), &[1, 1, 1, 1]);
        assert_eq!(l.scheme(), LayoutScheme::Checkerboard2);
    }

    #[test]
    fn lexicographic_site_number_goes_through_active_codec() {
        let l = layout(&[4, 4, 4, 4], LayoutScheme::Checkerboard2);
        // Lexicographic site 1 is (1,0,0,0), the first odd site.
        assert_eq!(l.linear_site_index_from_lex(1), 128);
        for lex in 0..l.volume() {
            let coord = tessel_codec::lexico::lex_coord(lex, l.lattice_size());
            assert_eq!(l.linear_site_index_from_lex(lex), l.linear_site_index(&coord));
        }
    }

    #[test]
    fn site_coords_inverts_linear_site_index() {
        let l = layout(&[8, 2, 4, 2], LayoutScheme::Checkerboard32);
        for i in 0..l.volume() {
            let c = l.site_coords(l.node_number(), i);
            assert_eq!(l.linear_site_index(&c), i);
        }
    }

    #[test]
    fn checked_index_rejects_outside_sites() {
        let l = layout(&[4, 4], LayoutScheme::Lexicographic);
        assert_eq!(l.checked_linear_site_index(&[3, 3]), Some(15));
        assert_eq!(l.checked_linear_site_index(&[4, 0]), None);
    }

    #[test]
    fn layout_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Layout>();
    }

    #[test]
    fn instance_ids_differ_per_layout() {
        let a = layout(&[2, 2], LayoutScheme::Lexicographic);
        let b = layout(&[2, 2], LayoutScheme::Lexicographic);
        assert_ne!(a.instance_id(), b.instance_id());
    }
}
