//! Lattice geometry: extents, volumes, node placement and I/O grid.

use crate::error::LayoutError;
use std::fmt;
use tessel_codec::lexico::validate_extents;
use tessel_core::{Coord, ND};

/// Extents and derived volumes of the lattice owned by this process.
///
/// Populated in two steps: [`set_lattice_size`](Self::set_lattice_size)
/// stores the requested extents unchecked, then [`create`](Self::create)
/// validates them and fills in the derived fields. On a single node the
/// subgrid is the whole lattice, the node sits at the origin of a
/// 1×…×1 process grid, and the I/O grid is all ones.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeometryConfig {
    nd: usize,
    dims: Vec<u32>,
    volume: usize,
    subgrid_volume: usize,
    node_coord: Coord,
    logical_size: Vec<u32>,
    io_grid: Vec<u32>,
    created: bool,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self::new(ND)
    }
}

impl GeometryConfig {
    /// Empty geometry for an `nd`-dimensional lattice.
    pub fn new(nd: usize) -> Self {
        Self {
            nd,
            dims: Vec::new(),
            volume: 0,
            subgrid_volume: 0,
            node_coord: Coord::new(),
            logical_size: Vec::new(),
            io_grid: Vec::new(),
            created: false,
        }
    }

    /// Store the requested extents. Validation is deferred to [`create`](Self::create).
    pub fn set_lattice_size(&mut self, dims: &[u32]) {
        self.dims = dims.to_vec();
        self.created = false;
    }

    /// Validate the extents and compute the derived geometry.
    ///
    /// # Errors
    ///
    /// - [`LayoutError::DimensionMismatch`] if the extents do not have `nd` axes
    /// - [`LayoutError::Codec`] for anything the site orderings reject
    ///   regardless of scheme: no axes, a zero or oversized extent, or a
    ///   volume that overflows `usize`
    pub fn create(&mut self) -> Result<(), LayoutError> {
        if self.dims.len() != self.nd {
            return Err(LayoutError::DimensionMismatch {
                expected: self.nd,
                got: self.dims.len(),
            });
        }
        let volume = validate_extents(&self.dims)?;

        self.volume = volume;
        self.subgrid_volume = volume;
        self.node_coord = std::iter::repeat_n(0, self.nd).collect();
        self.logical_size = vec![1; self.nd];
        self.created = true;
        Ok(())
    }

    /// Reset the I/O grid to all ones.
    pub fn set_io_grid_defaults(&mut self) {
        self.io_grid = vec![1; self.nd];
    }

    /// Request an I/O grid.
    ///
    /// A single node has nothing to group, so the request is ignored and
    /// the grid is reset to all ones.
    pub fn set_io_grid(&mut self, requested: &[u32]) {
        if requested.iter().any(|&n| n != 1) {
            tracing::debug!(
                ?requested,
                "ignoring requested I/O grid on a single-node layout"
            );
        }
        self.set_io_grid_defaults();
    }

    /// Required dimensionality.
    pub fn nd(&self) -> usize {
        self.nd
    }

    /// Requested lattice extents.
    pub fn lattice_size(&self) -> &[u32] {
        &self.dims
    }

    /// Extents of the subgrid on this node.
    pub fn subgrid_lattice_size(&self) -> &[u32] {
        &self.dims
    }

    /// Total number of lattice sites. Zero before [`create`](Self::create).
    pub fn volume(&self) -> usize {
        self.volume
    }

    /// Number of sites owned by this node.
    pub fn subgrid_volume(&self) -> usize {
        self.subgrid_volume
    }

    /// Position of this node in the logical process grid.
    pub fn node_coord(&self) -> &Coord {
        &self.node_coord
    }

    /// Extent of the logical process grid.
    pub fn logical_size(&self) -> &[u32] {
        &self.logical_size
    }

    /// The I/O node grid. Empty until defaults are applied.
    pub fn io_grid(&self) -> &[u32] {
        &self.io_grid
    }

    /// Number of I/O node groups.
    pub fn num_io_nodes(&self) -> usize {
        self.io_grid.iter().map(|&n| n as usize).product()
    }

    /// Whether [`create`](Self::create) has succeeded since the last resize.
    pub fn is_created(&self) -> bool {
        self.created
    }

    /// Number of nodes in the process grid.
    pub fn num_nodes(&self) -> usize {
        self.logical_size.iter().map(|&n| n as usize).product()
    }

    /// Human-readable summary of the created geometry.
    pub fn summary(&self) -> GeometrySummary<'_> {
        GeometrySummary { geometry: self }
    }
}

/// Display adapter printing the lattice initialization report.
///
/// ```
/// use tessel_layout::GeometryConfig;
///
/// let mut g = GeometryConfig::new(2);
/// g.set_lattice_size(&[4, 2]);
/// g.create().unwrap();
/// let text = g.summary().to_string();
/// assert!(text.contains("  problem size = 4 2\n"));
/// assert!(text.contains("  total volume = 8\n"));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct GeometrySummary<'a> {
    geometry: &'a GeometryConfig,
}

fn write_axes(f: &mut fmt::Formatter<'_>, label: &str, axes: &[u32]) -> fmt::Result {
    write!(f, "  {label} =")?;
    for n in axes {
        write!(f, " {n}")?;
    }
    writeln!(f)
}

impl fmt::Display for GeometrySummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let g = self.geometry;
        writeln!(f, "Lattice initialized:")?;
        write_axes(f, "problem size", g.lattice_size())?;
        write_axes(f, "layout size", g.lattice_size())?;
        write_axes(f, "logical machine size", g.logical_size())?;
        write_axes(f, "subgrid size", g.subgrid_lattice_size())?;
        writeln!(f, "  total number of nodes = {}", g.num_nodes())?;
        writeln!(f, "  total volume = {}", g.volume())?;
        writeln!(f, "  subgrid volume = {}", g.subgrid_volume())
    }
}
