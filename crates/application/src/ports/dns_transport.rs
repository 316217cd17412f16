use iterdns_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,
}

/// Moves one serialized query to a server and brings one reply back.
///
/// Implementations block until a reply arrives or `timeout` elapses, and
/// report the latter as `DomainError::TransportTimeout`.
pub trait DnsTransport {
    fn send(
        &self,
        server: SocketAddr,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;

    fn protocol_name(&self) -> &'static str;
}
