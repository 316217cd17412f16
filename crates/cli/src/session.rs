use crate::di::DnsClient;
use iterdns_application::services::{CacheEntry, ResolutionCache};
use iterdns_application::use_cases::{IterativeResolver, ManageCacheUseCase, Resolution};
use iterdns_domain::DomainError;

/// One interactive run: a resolver and the cache it fills.
pub struct Session {
    resolver: IterativeResolver<DnsClient>,
    cache: ResolutionCache,
    cache_admin: ManageCacheUseCase,
}

impl Session {
    pub fn new(resolver: IterativeResolver<DnsClient>) -> Self {
        Self {
            resolver,
            cache: ResolutionCache::new(),
            cache_admin: ManageCacheUseCase::new(),
        }
    }

    pub fn resolve(&mut self, domain: &str) -> Result<Resolution, DomainError> {
        self.resolver.resolve_str(domain, &mut self.cache)
    }

    pub fn cache_entries(&self) -> Vec<CacheEntry> {
        self.cache_admin.list(&self.cache)
    }

    pub fn remove_cache_entry(&mut self, index: &str) -> Result<CacheEntry, DomainError> {
        self.cache_admin.remove(&mut self.cache, index)
    }

    pub fn clear_cache(&mut self) {
        self.cache_admin.clear(&mut self.cache);
    }
}
