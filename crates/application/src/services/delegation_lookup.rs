use super::delegation_extractor::{extract_server_ips, first_address, ns_target_names};
use super::resolution_cache::ResolutionCache;
use crate::ports::NameServerQuery;
use iterdns_domain::{DnsMessage, DomainError, DomainName, RecordType};
use std::net::Ipv4Addr;
use tracing::{debug, info, warn};

/// Finds the server set one level further down the hierarchy: TLD servers
/// from the root, authoritative servers from the TLD servers.
///
/// Successful, non-empty results are cached under the zone name; failures
/// are never cached.
pub struct DelegationLookup<'a, Q> {
    client: &'a Q,
    root_server: Ipv4Addr,
}

impl<'a, Q: NameServerQuery> DelegationLookup<'a, Q> {
    pub fn new(client: &'a Q, root_server: Ipv4Addr) -> Self {
        Self {
            client,
            root_server,
        }
    }

    pub fn tld_servers(
        &self,
        tld: &DomainName,
        cache: &mut ResolutionCache,
    ) -> Result<Vec<Ipv4Addr>, DomainError> {
        if let Some(servers) = cache.lookup_ns(tld) {
            info!(tld = %tld, servers = servers.len(), "Using cached TLD servers");
            return Ok(servers.to_vec());
        }

        let response = self
            .client
            .query(self.root_server, tld, RecordType::NS)
            .map_err(|e| DomainError::NoDelegation {
                zone: tld.to_string(),
                reason: format!("root server query failed: {}", e),
            })?;

        let servers = extract_server_ips(&response);
        if servers.is_empty() {
            return Err(DomainError::NoDelegation {
                zone: tld.to_string(),
                reason: format!("root server {} returned no usable glue", self.root_server),
            });
        }

        info!(tld = %tld, servers = servers.len(), "Found TLD servers");
        cache.store_ns(tld.clone(), servers.clone());
        Ok(servers)
    }

    /// Asks each TLD server in turn for the delegation of `domain` and stops
    /// at the first one that yields a usable server set.
    pub fn authoritative_servers(
        &self,
        domain: &DomainName,
        tld_servers: &[Ipv4Addr],
        cache: &mut ResolutionCache,
    ) -> Result<Vec<Ipv4Addr>, DomainError> {
        if let Some(servers) = cache.lookup_ns(domain) {
            info!(domain = %domain, servers = servers.len(), "Using cached authoritative servers");
            return Ok(servers.to_vec());
        }

        for &server in tld_servers {
            let response = match self.client.query(server, domain, RecordType::NS) {
                Ok(response) => response,
                Err(e) if e.is_query_error() => {
                    debug!(domain = %domain, server = %server, error = %e, "TLD server query failed");
                    continue;
                }
                Err(e) => return Err(e),
            };

            let mut servers = extract_server_ips(&response);
            if servers.is_empty() {
                info!(
                    domain = %domain,
                    server = %server,
                    "Referral carries no glue, resolving name server names"
                );
                servers = self.resolve_without_glue(&response, tld_servers)?;
            }

            if !servers.is_empty() {
                info!(domain = %domain, servers = servers.len(), "Found authoritative servers");
                cache.store_ns(domain.clone(), servers.clone());
                return Ok(servers);
            }

            debug!(domain = %domain, server = %server, "No usable delegation from TLD server");
        }

        Err(DomainError::NoDelegation {
            zone: domain.to_string(),
            reason: format!(
                "none of {} TLD server(s) returned a usable delegation",
                tld_servers.len()
            ),
        })
    }

    fn resolve_without_glue(
        &self,
        response: &DnsMessage,
        tld_servers: &[Ipv4Addr],
    ) -> Result<Vec<Ipv4Addr>, DomainError> {
        let mut servers = Vec::new();
        for ns_name in ns_target_names(response) {
            if let Some(address) = self.resolve_ns_name(&ns_name, tld_servers)? {
                servers.push(address);
            }
        }
        Ok(servers)
    }

    // Only the TLD candidates are asked; no descent is started for the
    // name server's own name.
    fn resolve_ns_name(
        &self,
        ns_name: &DomainName,
        tld_servers: &[Ipv4Addr],
    ) -> Result<Option<Ipv4Addr>, DomainError> {
        for &server in tld_servers {
            let response = match self.client.query(server, ns_name, RecordType::A) {
                Ok(response) => response,
                Err(e) if e.is_query_error() => continue,
                Err(e) => return Err(e),
            };

            if let Some(address) = first_address(&response) {
                info!(name_server = %ns_name, address = %address, "Resolved name server");
                return Ok(Some(address));
            }
        }

        warn!(name_server = %ns_name, "Could not resolve name server address");
        Ok(None)
    }
}
