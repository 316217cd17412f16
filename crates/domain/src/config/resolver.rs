use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Root server every cold resolution starts from.
    #[serde(default = "default_root_server")]
    pub root_server: Ipv4Addr,

    #[serde(default = "default_dns_port")]
    pub dns_port: u16,

    /// Per-query wait bound, in seconds.
    #[serde(default = "default_query_timeout")]
    pub query_timeout: u64,

    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,

    /// Local address the session socket binds to.
    #[serde(default = "default_bind_address")]
    pub bind_address: SocketAddr,

    #[serde(default = "default_max_response_size")]
    pub max_response_size: usize,
}

impl ResolverConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout)
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            root_server: default_root_server(),
            dns_port: default_dns_port(),
            query_timeout: default_query_timeout(),
            max_redirects: default_max_redirects(),
            bind_address: default_bind_address(),
            max_response_size: default_max_response_size(),
        }
    }
}

fn default_root_server() -> Ipv4Addr {
    Ipv4Addr::new(199, 7, 83, 42)
}

fn default_dns_port() -> u16 {
    53
}

fn default_query_timeout() -> u64 {
    5
}

fn default_max_redirects() -> usize {
    10
}

fn default_bind_address() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 0))
}

fn default_max_response_size() -> usize {
    8192
}
