//! Core types for the Tessel lattice layout engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the coordinate type and the strongly-typed identifiers shared by the
//! codec and layout crates.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod id;

pub use id::{Coord, LayoutInstanceId, NodeId, ND};
