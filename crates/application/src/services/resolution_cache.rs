use iterdns_domain::{DomainError, DomainName};
use rustc_hash::FxHashMap;
use std::fmt;
use std::net::Ipv4Addr;
use tracing::debug;

/// Map that remembers first-insertion order. Overwriting a key keeps its
/// original position.
#[derive(Debug)]
struct OrderedMap<V> {
    values: FxHashMap<DomainName, V>,
    order: Vec<DomainName>,
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self {
            values: FxHashMap::default(),
            order: Vec::new(),
        }
    }
}

impl<V> OrderedMap<V> {
    fn get(&self, key: &DomainName) -> Option<&V> {
        self.values.get(key)
    }

    fn insert(&mut self, key: DomainName, value: V) {
        if self.values.insert(key.clone(), value).is_none() {
            self.order.push(key);
        }
    }

    fn remove(&mut self, key: &DomainName) -> Option<V> {
        let removed = self.values.remove(key)?;
        self.order.retain(|k| k != key);
        Some(removed)
    }

    fn iter(&self) -> impl Iterator<Item = (&DomainName, &V)> {
        self.order
            .iter()
            .filter_map(|key| self.values.get(key).map(|value| (key, value)))
    }

    fn len(&self) -> usize {
        self.order.len()
    }

    fn clear(&mut self) {
        self.values.clear();
        self.order.clear();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheRecord {
    Address {
        name: DomainName,
        address: Ipv4Addr,
    },
    NameServers {
        zone: DomainName,
        servers: Vec<Ipv4Addr>,
    },
}

/// One row of the cache listing. `index` is 1-based and only valid until the
/// cache is next modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    pub index: usize,
    pub record: CacheRecord,
}

impl fmt::Display for CacheEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.record {
            CacheRecord::Address { name, address } => {
                write!(f, "{}. IP: {} -> {}", self.index, name, address)
            }
            CacheRecord::NameServers { zone, servers } => {
                let servers: Vec<String> = servers.iter().map(|ip| ip.to_string()).collect();
                write!(f, "{}. NS: {} -> [{}]", self.index, zone, servers.join(", "))
            }
        }
    }
}

/// Session-scoped store of resolved addresses and delegation server sets.
///
/// Entries never expire. Address entries are listed before name-server
/// entries, each group in insertion order.
#[derive(Debug, Default)]
pub struct ResolutionCache {
    addresses: OrderedMap<Ipv4Addr>,
    name_servers: OrderedMap<Vec<Ipv4Addr>>,
}

impl ResolutionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup_ip(&self, name: &DomainName) -> Option<Ipv4Addr> {
        self.addresses.get(name).copied()
    }

    pub fn lookup_ns(&self, zone: &DomainName) -> Option<&[Ipv4Addr]> {
        self.name_servers.get(zone).map(Vec::as_slice)
    }

    pub fn store_ip(&mut self, name: DomainName, address: Ipv4Addr) {
        debug!(domain = %name, address = %address, "Caching address");
        self.addresses.insert(name, address);
    }

    /// Stores a server set for `zone`. An empty set is not cached, so the next
    /// lookup goes back to the network. Returns whether anything was stored.
    pub fn store_ns(&mut self, zone: DomainName, servers: Vec<Ipv4Addr>) -> bool {
        if servers.is_empty() {
            debug!(zone = %zone, "Refusing to cache empty name server set");
            return false;
        }
        debug!(zone = %zone, servers = servers.len(), "Caching name servers");
        self.name_servers.insert(zone, servers);
        true
    }

    pub fn list_entries(&self) -> Vec<CacheEntry> {
        let addresses = self
            .addresses
            .iter()
            .map(|(name, address)| CacheRecord::Address {
                name: name.clone(),
                address: *address,
            });
        let name_servers = self
            .name_servers
            .iter()
            .map(|(zone, servers)| CacheRecord::NameServers {
                zone: zone.clone(),
                servers: servers.clone(),
            });

        addresses
            .chain(name_servers)
            .enumerate()
            .map(|(i, record)| CacheEntry {
                index: i + 1,
                record,
            })
            .collect()
    }

    /// Removes the entry at a 1-based `index` of [`list_entries`](Self::list_entries).
    pub fn remove_entry(&mut self, index: usize) -> Result<CacheEntry, DomainError> {
        if index == 0 {
            return Err(DomainError::InvalidCacheCommand(
                "index must be positive".to_string(),
            ));
        }

        let len = self.len();
        let entry = self
            .list_entries()
            .into_iter()
            .nth(index - 1)
            .ok_or(DomainError::CacheEntryNotFound { index, len })?;

        let removed = match &entry.record {
            CacheRecord::Address { name, .. } => self.addresses.remove(name).is_some(),
            CacheRecord::NameServers { zone, .. } => self.name_servers.remove(zone).is_some(),
        };
        if !removed {
            return Err(DomainError::CacheEntryNotFound { index, len });
        }

        Ok(entry)
    }

    pub fn clear(&mut self) {
        self.addresses.clear();
        self.name_servers.clear();
    }

    pub fn len(&self) -> usize {
        self.addresses.len() + self.name_servers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
