//! Default memory pool allocator.

use crate::collaborators::PoolAllocator;

/// Records the pool budget handed over at layout creation.
///
/// Nothing is reserved up front; the budget is bookkeeping that array
/// allocations can be checked against.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PoolBudget {
    bytes: Option<usize>,
}

impl PoolBudget {
    /// An uninitialised budget.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pool size in bytes, or `None` before [`init`](PoolAllocator::init).
    pub fn bytes(&self) -> Option<usize> {
        self.bytes
    }

    /// Whether the pool has been initialised.
    pub fn is_initialized(&self) -> bool {
        self.bytes.is_some()
    }
}

impl PoolAllocator for PoolBudget {
    fn init(&mut self, pool_size_mb: usize) -> Result<(), String> {
        if pool_size_mb == 0 {
            return Err("pool size must be at least 1 MiB".into());
        }
        let bytes = pool_size_mb
            .checked_mul(1024 * 1024)
            .ok_or_else(|| format!("pool size of {pool_size_mb} MiB overflows usize"))?;
        tracing::debug!(pool_size_mb, "memory pool budget set");
        self.bytes = Some(bytes);
        Ok(())
    }
}
