//! Lattice geometry, layout creation and self-validation.
//!
//! [`LayoutManager`] is the setup-phase orchestrator: it collects the
//! lattice size and site ordering, computes the geometry, resolves the
//! [`CoordinateCodec`](tessel_codec::CoordinateCodec), verifies that every
//! site round-trips, and hands out an immutable [`Layout`] that the rest
//! of the library queries for volumes, node topology and
//! coordinate/index conversions.
//!
//! Nothing here terminates the process. Every configuration or
//! validation failure is a [`LayoutError`]; [`bootstrap_or_exit`] is the
//! single place that turns one into an exit.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bootstrap;
pub mod collaborators;
pub mod config;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod manager;
pub mod maps;
pub mod pool;
pub mod rng;
pub mod selfcheck;
pub mod subsets;
pub mod topology;

pub use bootstrap::{bootstrap, bootstrap_or_exit};
pub use collaborators::{
    Collaborators, MapInitializer, PoolAllocator, RngService, SubsetInitializer,
};
pub use config::{LayoutConfig, SelfCheckMode};
pub use error::LayoutError;
pub use geometry::{GeometryConfig, GeometrySummary};
pub use layout::Layout;
pub use manager::LayoutManager;
pub use maps::ShiftMaps;
pub use pool::PoolBudget;
pub use rng::SiteRng;
pub use subsets::ParitySubsets;
pub use topology::{NodeTopology, SingleNode};
