//! Coordinate/index codecs for Tessel lattices.
//!
//! This crate defines the [`CoordinateCodec`] trait, the mapping between a
//! lattice site coordinate and its linear memory offset, along with the
//! four concrete site orderings and the [`LayoutScheme`] selector that
//! resolves one of them.
//!
//! # Orderings
//!
//! - [`Lexicographic`]: mixed-radix order, axis 0 fastest
//! - [`Checkerboard2`]: even/odd sites in two contiguous halves
//! - [`Checkerboard3DTimeFastest`]: even/odd split ignoring the last axis
//! - [`Checkerboard32`]: `2^(nd+1)` hypercube sublattices
//!
//! Every codec is a bijection between the valid coordinates and
//! `[0, volume)`. Switching codecs changes the site order of every array
//! indexed by it.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod checkerboard2;
pub mod checkerboard32;
pub mod checkerboard3d;
pub mod codec;
pub mod error;
pub mod lexico;
pub mod lexicographic;
pub mod scheme;

#[cfg(test)]
pub(crate) mod compliance;

pub use checkerboard2::Checkerboard2;
pub use checkerboard32::Checkerboard32;
pub use checkerboard3d::Checkerboard3DTimeFastest;
pub use codec::CoordinateCodec;
pub use error::CodecError;
pub use lexicographic::Lexicographic;
pub use scheme::LayoutScheme;
