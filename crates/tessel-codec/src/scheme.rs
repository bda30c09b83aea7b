//! Site-ordering selector.

use crate::checkerboard2::Checkerboard2;
use crate::checkerboard32::Checkerboard32;
use crate::checkerboard3d::Checkerboard3DTimeFastest;
use crate::codec::CoordinateCodec;
use crate::error::CodecError;
use crate::lexicographic::Lexicographic;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Which site ordering a layout uses.
///
/// Exactly one scheme is active per process run. Changing it changes the
/// in-memory and on-disk order of every per-site array, so data written
/// under one scheme cannot be read back under another.
///
/// # Examples
///
/// ```
/// use tessel_codec::LayoutScheme;
///
/// let codec = LayoutScheme::Checkerboard2.build(&[4, 4, 4, 4]).unwrap();
/// assert_eq!(codec.volume(), 256);
/// assert_eq!(codec.coord_to_index(&[1, 0, 0, 0]), 128);
///
/// let parsed: LayoutScheme = "cb32".parse().unwrap();
/// assert_eq!(parsed, LayoutScheme::Checkerboard32);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LayoutScheme {
    /// Plain mixed-radix order, axis 0 fastest.
    Lexicographic,
    /// Even/odd (red/black) checkerboard over all axes.
    #[default]
    Checkerboard2,
    /// Even/odd checkerboard over all but the last axis.
    Checkerboard3DTimeFastest,
    /// `2^(nd+1)`-way hypercube checkerboard.
    Checkerboard32,
}

impl LayoutScheme {
    /// Every scheme, in declaration order.
    pub const ALL: [LayoutScheme; 4] = [
        LayoutScheme::Lexicographic,
        LayoutScheme::Checkerboard2,
        LayoutScheme::Checkerboard3DTimeFastest,
        LayoutScheme::Checkerboard32,
    ];

    /// Short name, accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Lexicographic => "lexicographic",
            Self::Checkerboard2 => "cb2",
            Self::Checkerboard3DTimeFastest => "cb3d",
            Self::Checkerboard32 => "cb32",
        }
    }

    /// Human-readable description for diagnostics.
    pub fn description(self) -> &'static str {
        match self {
            Self::Lexicographic => "lexicographic layout",
            Self::Checkerboard2 => "2 checkerboard (red/black) layout",
            Self::Checkerboard3DTimeFastest => {
                "2 checkerboard (red/black) layout in 3D, time running fastest"
            }
            Self::Checkerboard32 => "32 checkerboard layout",
        }
    }

    /// Resolve the codec for `extents`.
    ///
    /// This is the single point where the ordering is chosen; callers keep
    /// the returned handle and never re-dispatch on the scheme.
    pub fn build(self, extents: &[u32]) -> Result<Arc<dyn CoordinateCodec>, CodecError> {
        Ok(match self {
            Self::Lexicographic => Arc::new(Lexicographic::new(extents)?),
            Self::Checkerboard2 => Arc::new(Checkerboard2::new(extents)?),
            Self::Checkerboard3DTimeFastest => {
                Arc::new(Checkerboard3DTimeFastest::new(extents)?)
            }
            Self::Checkerboard32 => Arc::new(Checkerboard32::new(extents)?),
        })
    }
}

impl fmt::Display for LayoutScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LayoutScheme {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lexicographic" | "lexico" | "lex" => Ok(Self::Lexicographic),
            "cb2" | "checkerboard2" => Ok(Self::Checkerboard2),
            "cb3d" | "checkerboard3d" | "checkerboard3dtimefastest" => {
                Ok(Self::Checkerboard3DTimeFastest)
            }
            "cb32" | "checkerboard32" => Ok(Self::Checkerboard32),
            _ => Err(CodecError::UnknownScheme {
                name: s.to_string(),
            }),
        }
    }
}
