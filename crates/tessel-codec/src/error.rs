//! Error types for codec construction.

use crate::scheme::LayoutScheme;
use std::fmt;

/// Errors arising from codec construction or scheme selection.
///
/// Codec queries themselves are total over the valid domain; only the
/// lattice extents a codec is built for can be rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CodecError {
    /// The extent list was empty.
    NoDimensions,
    /// An axis has zero sites.
    ZeroExtent {
        /// The offending axis.
        axis: usize,
    },
    /// An extent does not fit the `i32` coordinate components.
    ExtentTooLarge {
        /// The offending axis.
        axis: usize,
        /// The requested extent.
        value: u32,
        /// Largest accepted extent.
        max: u32,
    },
    /// An extent is not divisible as the scheme's splitting requires.
    IndivisibleExtent {
        /// The scheme that rejected the extent.
        scheme: LayoutScheme,
        /// The offending axis.
        axis: usize,
        /// The requested extent.
        extent: u32,
        /// The divisor the extent must be a multiple of.
        divisor: u32,
    },
    /// The scheme needs more axes than were supplied.
    TooFewDimensions {
        /// The scheme that rejected the lattice.
        scheme: LayoutScheme,
        /// Supplied dimensionality.
        ndim: usize,
        /// Minimum dimensionality.
        min: usize,
    },
    /// The product of the extents overflows `usize`.
    VolumeOverflow {
        /// The requested extents.
        extents: Vec<u32>,
    },
    /// A scheme name could not be parsed.
    UnknownScheme {
        /// The unrecognised name.
        name: String,
    },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDimensions => write!(f, "lattice must have at least one axis"),
            Self::ZeroExtent { axis } => write!(f, "axis {axis} has zero extent"),
            Self::ExtentTooLarge { axis, value, max } => {
                write!(f, "axis {axis} extent {value} exceeds maximum {max}")
            }
            Self::IndivisibleExtent {
                scheme,
                axis,
                extent,
                divisor,
            } => write!(
                f,
                "{scheme} layout needs axis {axis} extent divisible by {divisor}, got {extent}"
            ),
            Self::TooFewDimensions { scheme, ndim, min } => {
                write!(f, "{scheme} layout needs at least {min} axes, got {ndim}")
            }
            Self::VolumeOverflow { extents } => {
                write!(f, "lattice volume of {extents:?} overflows usize")
            }
            Self::UnknownScheme { name } => write!(f, "unknown layout scheme '{name}'"),
        }
    }
}

impl std::error::Error for CodecError {}
