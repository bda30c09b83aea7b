//! Layout error type.

use std::error::Error;
use std::fmt;
use tessel_codec::CodecError;
use tessel_core::Coord;

/// Errors from layout configuration, creation and validation.
///
/// Every variant means the layout cannot be used: downstream arrays would
/// be indexed inconsistently. Callers are expected to stop rather than
/// continue with a partially valid geometry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// `create_layout` was called before `initialize_library`.
    NotInitialized,
    /// The lattice size vector has the wrong number of axes.
    DimensionMismatch {
        /// Required dimensionality.
        expected: usize,
        /// Supplied dimensionality.
        got: usize,
    },
    /// A configuration value is out of range.
    InvalidConfig {
        /// What went wrong.
        reason: String,
    },
    /// The site ordering rejected the lattice extents.
    Codec(CodecError),
    /// A linear index failed the coordinate round trip.
    BijectionViolation {
        /// The index that failed.
        index: usize,
        /// The coordinate it decoded to.
        coord: Coord,
        /// The index the coordinate re-encoded to, or `None` if the
        /// coordinate fell outside the lattice.
        roundtrip: Option<usize>,
    },
    /// The memory pool could not be initialised.
    AllocatorFailed {
        /// Collaborator-supplied reason.
        reason: String,
    },
    /// A layout query was made before `create_layout` succeeded.
    LayoutNotCreated,
    /// `create_layout` was called twice without an intervening shutdown.
    AlreadyCreated,
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInitialized => write!(f, "library is not initialized"),
            Self::DimensionMismatch { expected, got } => write!(
                f,
                "dimension of lattice size ({got}) not the same as the default ({expected})"
            ),
            Self::InvalidConfig { reason } => write!(f, "invalid layout config: {reason}"),
            Self::Codec(e) => write!(f, "site ordering: {e}"),
            Self::BijectionViolation {
                index,
                coord,
                roundtrip,
            } => {
                write!(
                    f,
                    "layout functions do not work correctly with this lattice size: \
                     index {index} -> {coord:?}"
                )?;
                match roundtrip {
                    Some(j) => write!(f, " -> {j}"),
                    None => write!(f, " (outside lattice)"),
                }
            }
            Self::AllocatorFailed { reason } => write!(f, "pool allocator: {reason}"),
            Self::LayoutNotCreated => write!(f, "layout has not been created"),
            Self::AlreadyCreated => write!(f, "layout already created"),
        }
    }
}

impl Error for LayoutError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Codec(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CodecError> for LayoutError {
    fn from(e: CodecError) -> Self {
        Self::Codec(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn codec_errors_chain_as_source() {
        let err = LayoutError::from(CodecError::ZeroExtent { axis: 2 });
        assert_eq!(
            err.source().map(|s| s.to_string()),
            Some("axis 2 has zero extent".to_string())
        );
    }

    #[test]
    fn bijection_violation_message() {
        let err = LayoutError::BijectionViolation {
            index: 7,
            coord: smallvec![1, 0],
            roundtrip: Some(3),
        };
        assert!(err.to_string().ends_with("index 7 -> [1, 0] -> 3"));
        let outside = LayoutError::BijectionViolation {
            index: 7,
            coord: smallvec![9, 0],
            roundtrip: None,
        };
        assert!(outside.to_string().ends_with("(outside lattice)"));
    }
}
