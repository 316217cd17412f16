use crate::ports::NameServerQuery;
use crate::services::{answer_from, DelegationLookup, ResolutionCache};
use iterdns_domain::{AnswerOutcome, DomainError, DomainName, RecordType, ResolverConfig};
use std::net::Ipv4Addr;
use tracing::{debug, info, warn};

pub const DEFAULT_MAX_REDIRECTS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The name that was asked for.
    pub query: DomainName,
    pub address: Ipv4Addr,
    /// The name the address actually belongs to, after following aliases.
    pub canonical_name: DomainName,
    /// Alias targets in the order they were followed.
    pub aliases: Vec<DomainName>,
    pub cache_hit: bool,
}

/// Walks root -> TLD -> authoritative for a name, following CNAMEs.
pub struct IterativeResolver<Q> {
    client: Q,
    root_server: Ipv4Addr,
    max_redirects: usize,
}

impl<Q: NameServerQuery> IterativeResolver<Q> {
    pub fn new(client: Q, root_server: Ipv4Addr) -> Self {
        Self {
            client,
            root_server,
            max_redirects: DEFAULT_MAX_REDIRECTS,
        }
    }

    pub fn from_config(client: Q, config: &ResolverConfig) -> Self {
        Self::new(client, config.root_server).with_max_redirects(config.max_redirects)
    }

    pub fn with_max_redirects(mut self, max_redirects: usize) -> Self {
        self.max_redirects = max_redirects;
        self
    }

    pub fn root_server(&self) -> Ipv4Addr {
        self.root_server
    }

    pub fn resolve_str(
        &self,
        name: &str,
        cache: &mut ResolutionCache,
    ) -> Result<Resolution, DomainError> {
        let name = DomainName::new(name)?;
        self.resolve(&name, cache)
    }

    pub fn resolve(
        &self,
        name: &DomainName,
        cache: &mut ResolutionCache,
    ) -> Result<Resolution, DomainError> {
        info!(domain = %name, "Resolving");

        let delegation = DelegationLookup::new(&self.client, self.root_server);
        let mut current = name.clone();
        let mut aliases = Vec::new();

        for _ in 0..self.max_redirects {
            if let Some(address) = cache.lookup_ip(&current) {
                info!(domain = %current, address = %address, "Found in cache");
                return Ok(Resolution {
                    query: name.clone(),
                    address,
                    canonical_name: current,
                    aliases,
                    cache_hit: true,
                });
            }

            let tld = current.tld();
            let tld_servers = delegation
                .tld_servers(&tld, cache)
                .inspect_err(|e| warn!(tld = %tld, error = %e, "Failed to get TLD servers"))?;

            let auth_servers = delegation
                .authoritative_servers(&current, &tld_servers, cache)
                .inspect_err(|e| {
                    warn!(domain = %current, error = %e, "Failed to get authoritative servers")
                })?;

            match self.query_authoritative(&current, &auth_servers)? {
                AnswerOutcome::Address(address) => {
                    info!(domain = %name, address = %address, "Resolved");
                    cache.store_ip(current.clone(), address);
                    return Ok(Resolution {
                        query: name.clone(),
                        address,
                        canonical_name: current,
                        aliases,
                        cache_hit: false,
                    });
                }
                AnswerOutcome::Alias(target) => {
                    info!(domain = %current, alias = %target, "Following alias");
                    aliases.push(target.clone());
                    current = target;
                }
                AnswerOutcome::Failed(reason) => {
                    warn!(domain = %current, reason = %reason, "Failed to resolve");
                    return Err(DomainError::NoAnswer {
                        domain: current.to_string(),
                        reason,
                    });
                }
            }
        }

        warn!(domain = %name, redirects = self.max_redirects, "Too many redirects");
        Err(DomainError::TooManyRedirects {
            domain: name.to_string(),
        })
    }

    fn query_authoritative(
        &self,
        domain: &DomainName,
        servers: &[Ipv4Addr],
    ) -> Result<AnswerOutcome, DomainError> {
        for &server in servers {
            let response = match self.client.query(server, domain, RecordType::A) {
                Ok(response) => response,
                Err(e) if e.is_query_error() => {
                    debug!(domain = %domain, server = %server, error = %e, "Authoritative query failed");
                    continue;
                }
                Err(e) => return Err(e),
            };

            match answer_from(&response) {
                Some(outcome) => return Ok(outcome),
                None => debug!(domain = %domain, server = %server, "No A or CNAME in answer"),
            }
        }

        Ok(AnswerOutcome::Failed(
            "no usable answer from authoritative servers".to_string(),
        ))
    }
}
