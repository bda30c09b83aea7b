//! Services initialised once a layout exists.
//!
//! Layout creation ends by handing the new [`Layout`] to four
//! collaborators: a memory pool, the default site subsets, the default
//! shift maps and the default RNG. Each is a trait so tests and other
//! backends can substitute their own; [`Collaborators::default`] wires in
//! the in-crate implementations.

use crate::config::LayoutConfig;
use crate::layout::Layout;
use crate::maps::ShiftMaps;
use crate::pool::PoolBudget;
use crate::rng::SiteRng;
use crate::subsets::ParitySubsets;
use std::any::Any;
use std::fmt;

/// Per-site random number generation.
pub trait RngService: Any + Send {
    /// Seed the default generator for every site of `layout`.
    fn initialize_default(&mut self, layout: &Layout);

    /// Release generator state at shutdown.
    fn finalize(&mut self);
}

/// Memory pool sized at layout creation.
pub trait PoolAllocator: Any + Send {
    /// Reserve a pool of `pool_size_mb` MiB.
    ///
    /// # Errors
    ///
    /// Returns a human-readable reason if the pool cannot be set up.
    fn init(&mut self, pool_size_mb: usize) -> Result<(), String>;
}

/// Default site subsets (e.g. even/odd).
pub trait SubsetInitializer: Any + Send {
    /// Build the default subsets for `layout`.
    fn init_default_sets(&mut self, layout: &Layout);
}

/// Default nearest-neighbour shift maps.
pub trait MapInitializer: Any + Send {
    /// Build the default shift tables for `layout`.
    fn init_default_maps(&mut self, layout: &Layout);
}

macro_rules! impl_downcast {
    ($($tr:ident),*) => {$(
        impl dyn $tr {
            /// Attempt to downcast to a concrete implementation.
            pub fn downcast_ref<T: $tr>(&self) -> Option<&T> {
                (self as &dyn Any).downcast_ref::<T>()
            }

            /// Attempt to mutably downcast to a concrete implementation.
            pub fn downcast_mut<T: $tr>(&mut self) -> Option<&mut T> {
                (self as &mut dyn Any).downcast_mut::<T>()
            }
        }
    )*};
}

impl_downcast!(RngService, PoolAllocator, SubsetInitializer, MapInitializer);

/// The collaborator set a [`LayoutManager`](crate::LayoutManager) drives.
pub struct Collaborators {
    /// Per-site RNG.
    pub rng: Box<dyn RngService>,
    /// Memory pool.
    pub allocator: Box<dyn PoolAllocator>,
    /// Default subsets.
    pub subsets: Box<dyn SubsetInitializer>,
    /// Default shift maps.
    pub maps: Box<dyn MapInitializer>,
}

impl Collaborators {
    /// The in-crate defaults, with the RNG seeded from `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Box::new(SiteRng::new(seed)),
            allocator: Box::new(PoolBudget::new()),
            subsets: Box::new(ParitySubsets::new()),
            maps: Box::new(ShiftMaps::new()),
        }
    }

    /// The in-crate defaults, with the RNG seeded from `config.seed`.
    pub fn for_config(config: &LayoutConfig) -> Self {
        Self::with_seed(config.seed)
    }

    /// The default RNG, if it is in use.
    pub fn site_rng(&self) -> Option<&SiteRng> {
        self.rng.downcast_ref()
    }

    /// Mutable access to the default RNG, if it is in use.
    pub fn site_rng_mut(&mut self) -> Option<&mut SiteRng> {
        self.rng.downcast_mut()
    }

    /// The default pool allocator, if it is in use.
    pub fn pool_budget(&self) -> Option<&PoolBudget> {
        self.allocator.downcast_ref()
    }

    /// The default subsets, if they are in use.
    pub fn parity_subsets(&self) -> Option<&ParitySubsets> {
        self.subsets.downcast_ref()
    }

    /// The default shift maps, if they are in use.
    pub fn shift_maps(&self) -> Option<&ShiftMaps> {
        self.maps.downcast_ref()
    }
}

impl Default for Collaborators {
    fn default() -> Self {
        Self::for_config(&LayoutConfig::default())
    }
}

impl fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collaborators").finish_non_exhaustive()
    }
}
