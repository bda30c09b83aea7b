//! Setup-phase layout orchestration.
//!
//! [`LayoutManager`] collects the lattice size, site ordering and pool
//! settings, then [`create_layout()`](LayoutManager::create_layout) runs
//! the full creation sequence:
//!
//! geometry → codec → summary → bijection self-check → pool → subsets →
//! maps → RNG → I/O grid → frozen [`Layout`].
//!
//! The manager owns the mutable setup state and the collaborators; the
//! [`Layout`] it returns is immutable and shared by `Arc`.

use crate::collaborators::Collaborators;
use crate::config::{pool_size_mb, LayoutConfig, SelfCheckMode};
use crate::error::LayoutError;
use crate::geometry::GeometryConfig;
use crate::layout::Layout;
use crate::selfcheck::verify_bijection;
use crate::topology::{NodeTopology, SingleNode};
use std::sync::Arc;
use tessel_codec::LayoutScheme;

// Compile-time assertion: LayoutManager can move to another thread.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<LayoutManager>();
    }
};

// ── LayoutManager ──────────────────────────────────────────────────

/// Owner of layout setup state and the collaborators it initialises.
///
/// # Example
///
/// ```
/// use tessel_codec::LayoutScheme;
/// use tessel_layout::{Collaborators, LayoutManager};
///
/// let mut manager = LayoutManager::new(4, Collaborators::default());
/// manager.initialize_library();
/// manager.set_lattice_size(&[4, 4, 4, 4]);
/// manager.set_scheme(LayoutScheme::Checkerboard2);
/// manager.set_pool_size_gb(0.125);
/// let layout = manager.create_layout().unwrap();
/// assert_eq!(layout.linear_site_index(&[1, 0, 0, 0]), 128);
/// ```
#[derive(Debug)]
pub struct LayoutManager {
    initialized: bool,
    geometry: GeometryConfig,
    scheme: LayoutScheme,
    self_check: SelfCheckMode,
    pool_size_gb: f32,
    requested_io_grid: Option<Vec<u32>>,
    topology: Arc<dyn NodeTopology>,
    collaborators: Collaborators,
    layout: Option<Arc<Layout>>,
}

impl LayoutManager {
    /// Manager for an `nd`-dimensional lattice with default settings.
    pub fn new(nd: usize, collaborators: Collaborators) -> Self {
        let defaults = LayoutConfig::default();
        Self {
            initialized: false,
            geometry: GeometryConfig::new(nd),
            scheme: defaults.scheme,
            self_check: defaults.self_check,
            pool_size_gb: defaults.pool_size_gb,
            requested_io_grid: None,
            topology: Arc::new(SingleNode::new(nd)),
            collaborators,
            layout: None,
        }
    }

    /// Manager primed with every setting in `config`.
    ///
    /// The library is not marked initialised and no layout is created.
    ///
    /// # Errors
    ///
    /// Returns the first failure from [`LayoutConfig::validate`].
    pub fn from_config(
        config: &LayoutConfig,
        collaborators: Collaborators,
    ) -> Result<Self, LayoutError> {
        config.validate()?;
        let mut manager = Self::new(config.nd, collaborators);
        manager.set_lattice_size(&config.lattice_size);
        manager.set_scheme(config.scheme);
        manager.set_self_check(config.self_check);
        manager.set_pool_size_gb(config.pool_size_gb);
        if let Some(grid) = &config.io_grid {
            manager.set_io_grid(grid);
        }
        Ok(manager)
    }

    // ── Library state ──────────────────────────────────────────────

    /// Mark the library initialised. Idempotent.
    pub fn initialize_library(&mut self) {
        if !self.initialized {
            tracing::debug!("library initialized");
        }
        self.initialized = true;
    }

    /// Whether [`initialize_library`](Self::initialize_library) has run.
    pub fn is_library_initialized(&self) -> bool {
        self.initialized
    }

    // ── Setup ──────────────────────────────────────────────────────

    /// Store the lattice extents. Validated by [`create_layout`](Self::create_layout).
    pub fn set_lattice_size(&mut self, dims: &[u32]) {
        self.warn_if_created("lattice size");
        self.geometry.set_lattice_size(dims);
    }

    /// Select the site ordering.
    pub fn set_scheme(&mut self, scheme: LayoutScheme) {
        self.warn_if_created("site ordering");
        self.scheme = scheme;
    }

    /// Select how the bijection self-check sweeps the lattice.
    pub fn set_self_check(&mut self, mode: SelfCheckMode) {
        self.self_check = mode;
    }

    /// Set the memory pool size in GiB.
    pub fn set_pool_size_gb(&mut self, pool_size_gb: f32) {
        self.warn_if_created("pool size");
        self.pool_size_gb = pool_size_gb;
    }

    /// Request an I/O node grid. A single-node layout always ends up with
    /// all ones.
    pub fn set_io_grid(&mut self, grid: &[u32]) {
        self.warn_if_created("I/O grid");
        self.requested_io_grid = Some(grid.to_vec());
    }

    fn warn_if_created(&self, what: &str) {
        if self.layout.is_some() {
            tracing::warn!(setting = what, "layout already created; change applies after shutdown");
        }
    }

    /// Current setup geometry. Derived fields are only meaningful once a
    /// layout has been created.
    pub fn geometry(&self) -> &GeometryConfig {
        &self.geometry
    }

    /// Currently selected site ordering.
    pub fn scheme(&self) -> LayoutScheme {
        self.scheme
    }

    // ── Creation ───────────────────────────────────────────────────

    /// Compute the geometry, validate the site ordering and initialise
    /// every collaborator.
    ///
    /// # Errors
    ///
    /// - [`LayoutError::NotInitialized`] before [`initialize_library`](Self::initialize_library)
    /// - [`LayoutError::AlreadyCreated`] if a layout exists; call
    ///   [`shutdown`](Self::shutdown) first
    /// - [`LayoutError::DimensionMismatch`] or [`LayoutError::Codec`] for
    ///   unusable extents
    /// - [`LayoutError::BijectionViolation`] if any site fails to round-trip
    /// - [`LayoutError::AllocatorFailed`] if the pool cannot be set up
    ///
    /// Nothing is handed to the collaborators unless every check passed.
    pub fn create_layout(&mut self) -> Result<Arc<Layout>, LayoutError> {
        if !self.initialized {
            return Err(LayoutError::NotInitialized);
        }
        if self.layout.is_some() {
            return Err(LayoutError::AlreadyCreated);
        }

        self.geometry.create()?;
        let codec = self.scheme.build(self.geometry.lattice_size())?;
        tracing::info!(scheme = %self.scheme, "{}", self.geometry.summary());

        verify_bijection(codec.as_ref(), self.topology.node_number(), self.self_check)?;

        let pool_mb = pool_size_mb(self.pool_size_gb);
        self.collaborators
            .allocator
            .init(pool_mb)
            .map_err(|reason| LayoutError::AllocatorFailed { reason })?;

        match &self.requested_io_grid {
            Some(grid) => self.geometry.set_io_grid(grid),
            None => self.geometry.set_io_grid_defaults(),
        }

        let layout = Arc::new(Layout::new(
            self.geometry.clone(),
            codec,
            Arc::clone(&self.topology),
        )?);
        self.collaborators.subsets.init_default_sets(&layout);
        self.collaborators.maps.init_default_maps(&layout);
        self.collaborators.rng.initialize_default(&layout);

        tracing::info!(
            scheme = %layout.scheme(),
            volume = layout.volume(),
            instance = %layout.instance_id(),
            "finished lattice layout"
        );
        self.layout = Some(Arc::clone(&layout));
        Ok(layout)
    }

    /// The created layout.
    ///
    /// # Errors
    ///
    /// [`LayoutError::LayoutNotCreated`] before a successful
    /// [`create_layout`](Self::create_layout) or after [`shutdown`](Self::shutdown).
    pub fn layout(&self) -> Result<&Arc<Layout>, LayoutError> {
        self.layout.as_ref().ok_or(LayoutError::LayoutNotCreated)
    }

    /// Whether a layout currently exists.
    pub fn is_created(&self) -> bool {
        self.layout.is_some()
    }

    /// The collaborators, for reading the defaults they built.
    pub fn collaborators(&self) -> &Collaborators {
        &self.collaborators
    }

    /// Mutable access to the collaborators, e.g. to draw from the RNG.
    pub fn collaborators_mut(&mut self) -> &mut Collaborators {
        &mut self.collaborators
    }

    /// Finalise the RNG and drop the layout.
    ///
    /// Outstanding `Arc<Layout>` clones stay valid; a new layout may be
    /// created afterwards.
    pub fn shutdown(&mut self) {
        if self.layout.take().is_some() {
            self.collaborators.rng.finalize();
            tracing::debug!("layout shut down");
        }
    }
}
