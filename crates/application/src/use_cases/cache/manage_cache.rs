use crate::services::{CacheEntry, ResolutionCache};
use iterdns_domain::DomainError;
use tracing::info;

/// Operator-facing inspection and pruning of a session cache.
#[derive(Debug, Default, Clone, Copy)]
pub struct ManageCacheUseCase;

impl ManageCacheUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn list(&self, cache: &ResolutionCache) -> Vec<CacheEntry> {
        cache.list_entries()
    }

    /// Removes the entry named by an operator-supplied, 1-based index such
    /// as `"3"`.
    pub fn remove(&self, cache: &mut ResolutionCache, index: &str) -> Result<CacheEntry, DomainError> {
        let parsed: i64 = index.trim().parse().map_err(|_| {
            DomainError::InvalidCacheCommand(format!("'{}' is not a number", index.trim()))
        })?;

        if parsed < 1 {
            return Err(DomainError::InvalidCacheCommand(
                "index must be positive".to_string(),
            ));
        }

        let index = usize::try_from(parsed).map_err(|_| DomainError::CacheEntryNotFound {
            index: usize::MAX,
            len: cache.len(),
        })?;

        let removed = cache.remove_entry(index)?;
        info!(entry = %removed, "Removed cache entry");
        Ok(removed)
    }

    pub fn clear(&self, cache: &mut ResolutionCache) {
        let removed = cache.len();
        cache.clear();
        info!(removed, "Cache cleared");
    }
}
