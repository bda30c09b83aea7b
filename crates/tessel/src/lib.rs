//! Tessel: a lattice layout engine.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Tessel sub-crates. For most users, adding `tessel` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use tessel::prelude::*;
//!
//! let config = LayoutConfig {
//!     pool_size_gb: 0.25,
//!     ..LayoutConfig::new(vec![4, 4, 4, 4]).with_scheme(LayoutScheme::Checkerboard2)
//! };
//! let manager = bootstrap(&config, Collaborators::for_config(&config)).unwrap();
//! let layout = manager.layout().unwrap();
//!
//! // Even sites fill the first half of the index range, odd sites the second.
//! assert_eq!(layout.volume(), 256);
//! assert_eq!(layout.linear_site_index(&[0, 0, 0, 0]), 0);
//! assert_eq!(layout.linear_site_index(&[1, 0, 0, 0]), 128);
//! assert_eq!(layout.site_coords(layout.node_number(), 128).as_slice(), &[1, 0, 0, 0]);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tessel-core` | `Coord`, `NodeId`, `LayoutInstanceId` |
//! | [`codec`] | `tessel-codec` | Site orderings and the `CoordinateCodec` trait |
//! | [`layout`] | `tessel-layout` | Geometry, layout creation, collaborators |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core identifiers and coordinate type (`tessel-core`).
pub use tessel_core as types;

/// Site orderings (`tessel-codec`).
///
/// [`codec::LayoutScheme`] selects an ordering and builds its
/// [`codec::CoordinateCodec`]; the concrete codecs are available for
/// callers that want to bypass dynamic dispatch.
pub use tessel_codec as codec;

/// Geometry, layout creation and validation (`tessel-layout`).
///
/// [`layout::LayoutManager`] drives setup; [`layout::Layout`] is the
/// immutable query surface it produces.
pub use tessel_layout as layout;

/// Common imports for typical Tessel usage.
///
/// ```rust
/// use tessel::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use tessel_core::{Coord, LayoutInstanceId, NodeId};

    // Orderings
    pub use tessel_codec::{CodecError, CoordinateCodec, LayoutScheme};

    // Layout
    pub use tessel_layout::{
        bootstrap, bootstrap_or_exit, Collaborators, Layout, LayoutConfig, LayoutError,
        LayoutManager, SelfCheckMode,
    };
}
