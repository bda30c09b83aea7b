//! Layout configuration and validation.
//!
//! [`LayoutConfig`] is the builder input for [`bootstrap`](crate::bootstrap).
//! [`validate()`](LayoutConfig::validate) checks structural invariants
//! before any geometry is computed.

use crate::error::LayoutError;
use tessel_codec::LayoutScheme;
use tessel_core::ND;

/// Environment variable selecting the site ordering.
pub const ENV_LAYOUT: &str = "TESSEL_LAYOUT";

/// Environment variable overriding the memory pool size in GiB.
pub const ENV_POOL_GB: &str = "TESSEL_POOL_GB";

// ── SelfCheckMode ──────────────────────────────────────────────────

/// How the bijection self-check sweeps the lattice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelfCheckMode {
    /// Split the index range across the rayon thread pool.
    #[default]
    Parallel,
    /// Sweep on the calling thread; reports the lowest failing index.
    Serial,
}

// ── LayoutConfig ───────────────────────────────────────────────────

/// Complete configuration for creating a lattice layout.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Lattice extent per axis. Must have exactly `nd` entries.
    pub lattice_size: Vec<u32>,
    /// Lattice dimensionality. Default: 4.
    pub nd: usize,
    /// Site ordering. Default: [`LayoutScheme::Checkerboard2`].
    pub scheme: LayoutScheme,
    /// Requested I/O node grid. Accepted for interface compatibility;
    /// a single-node layout always uses all ones.
    pub io_grid: Option<Vec<u32>>,
    /// Memory pool handed to the allocator, in GiB. Default: 8.0.
    pub pool_size_gb: f32,
    /// Self-check sweep strategy. Default: parallel.
    pub self_check: SelfCheckMode,
    /// Seed for the default per-site RNG. Default: 11.
    pub seed: u64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            lattice_size: Vec::new(),
            nd: ND,
            scheme: LayoutScheme::default(),
            io_grid: None,
            pool_size_gb: 8.0,
            self_check: SelfCheckMode::default(),
            seed: 11,
        }
    }
}

impl LayoutConfig {
    /// Configuration for `lattice_size` with every other field defaulted
    /// and `nd` taken from the size vector.
    pub fn new(lattice_size: impl Into<Vec<u32>>) -> Self {
        let lattice_size = lattice_size.into();
        Self {
            nd: lattice_size.len(),
            lattice_size,
            ..Self::default()
        }
    }

    /// Set the site ordering.
    pub fn with_scheme(mut self, scheme: LayoutScheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Set the self-check sweep strategy.
    pub fn with_self_check(mut self, mode: SelfCheckMode) -> Self {
        self.self_check = mode;
        self
    }

    /// Pool size in whole MiB, as handed to the allocator.
    pub fn pool_size_mb(&self) -> usize {
        pool_size_mb(self.pool_size_gb)
    }

    /// Apply [`ENV_LAYOUT`] and [`ENV_POOL_GB`] from the process environment.
    pub fn with_env(self) -> Result<Self, LayoutError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`, which maps a variable name to its value.
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, LayoutError> {
        if let Some(name) = lookup(ENV_LAYOUT) {
            self.scheme = name.parse()?;
        }
        if let Some(raw) = lookup(ENV_POOL_GB) {
            self.pool_size_gb = raw.trim().parse().map_err(|_| LayoutError::InvalidConfig {
                reason: format!("{ENV_POOL_GB}={raw:?} is not a number"),
            })?;
        }
        Ok(self)
    }

    /// Validate all structural invariants.
    ///
    /// Extent divisibility is left to the site ordering, which reports it
    /// as [`LayoutError::Codec`] at layout creation.
    pub fn validate(&self) -> Result<(), LayoutError> {
        // 1. Dimensionality must be positive and match the size vector.
        if self.nd == 0 {
            return Err(LayoutError::InvalidConfig {
                reason: "nd must be at least 1".into(),
            });
        }
        if self.lattice_size.len() != self.nd {
            return Err(LayoutError::DimensionMismatch {
                expected: self.nd,
                got: self.lattice_size.len(),
            });
        }
        // 2. Pool size must be finite and positive.
        if !self.pool_size_gb.is_finite() || self.pool_size_gb <= 0.0 {
            return Err(LayoutError::InvalidConfig {
                reason: format!(
                    "pool_size_gb must be finite and positive, got {}",
                    self.pool_size_gb
                ),
            });
        }
        // 3. A requested I/O grid must at least have the right rank.
        if let Some(grid) = &self.io_grid {
            if grid.len() != self.nd {
                return Err(LayoutError::InvalidConfig {
                    reason: format!("io_grid has {} axes, expected {}", grid.len(), self.nd),
                });
            }
        }
        Ok(())
    }
}

/// Convert a pool size in GiB to whole MiB, rounding down.
pub(crate) fn pool_size_mb(pool_size_gb: f32) -> usize {
    (f64::from(pool_size_gb) * 1024.0).floor() as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessel_codec::CodecError;

    fn env(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn defaults() {
        let cfg = LayoutConfig::default();
        assert_eq!(cfg.nd, 4);
        assert_eq!(cfg.scheme, LayoutScheme::Checkerboard2);
        assert_eq!(cfg.pool_size_mb(), 8192);
        assert_eq!(cfg.self_check, SelfCheckMode::Parallel);
    }

    #[test]
    fn new_takes_nd_from_size() {
        let cfg = LayoutConfig::new(vec![4, 4, 8]);
        assert_eq!(cfg.nd, 3);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_wrong_rank() {
        let cfg = LayoutConfig {
            lattice_size: vec![4, 4, 4],
            ..Default::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(LayoutError::DimensionMismatch {
                expected: 4,
                got: 3
            })
        );
    }

    #[test]
    fn validate_rejects_bad_pool_size() {
        for bad in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let cfg = LayoutConfig {
                pool_size_gb: bad,
                ..LayoutConfig::new(vec![4, 4, 4, 4])
            };
            assert!(matches!(
                cfg.validate(),
                Err(LayoutError::InvalidConfig { .. })
            ));
        }
    }

    #[test]
    fn validate_rejects_io_grid_of_wrong_rank() {
        let cfg = LayoutConfig {
            io_grid: Some(vec![2, 2]),
            ..LayoutConfig::new(vec![4, 4, 4, 4])
        };
        assert!(matches!(
            cfg.validate(),
            Err(LayoutError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn pool_size_rounds_down_to_whole_mib() {
        assert_eq!(pool_size_mb(0.5), 512);
        assert_eq!(pool_size_mb(1.0009), 1024);
    }

    #[test]
    fn overrides_select_scheme_and_pool() {
        let cfg = LayoutConfig::new(vec![8, 4, 4, 4])
            .with_overrides(env(&[("TESSEL_LAYOUT", "cb32"), ("TESSEL_POOL_GB", "0.25")]))
            .unwrap();
        assert_eq!(cfg.scheme, LayoutScheme::Checkerboard32);
        assert_eq!(cfg.pool_size_mb(), 256);
    }

    #[test]
    fn overrides_reject_unknown_scheme() {
        let err = LayoutConfig::default()
            .with_overrides(env(&[("TESSEL_LAYOUT", "zorder")]))
            .unwrap_err();
        assert_eq!(
            err,
            LayoutError::Codec(CodecError::UnknownScheme {
                name: "zorder".into()
            })
        );
    }

    #[test]
    fn overrides_reject_non_numeric_pool() {
        assert!(matches!(
            LayoutConfig::default().with_overrides(env(&[("TESSEL_POOL_GB", "lots")])),
            Err(LayoutError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn absent_overrides_leave_config_untouched() {
        let cfg = LayoutConfig::new(vec![4, 4]);
        assert_eq!(cfg.clone().with_overrides(|_| None).unwrap(), cfg);
    }
}
