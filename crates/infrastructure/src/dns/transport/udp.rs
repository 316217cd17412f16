//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! Messages are sent as-is (no framing). One socket is bound per session
//! and reused for every query; each exchange blocks until a datagram
//! arrives or the per-query timeout expires.

use super::{DnsTransport, TransportResponse};
use iterdns_domain::DomainError;
use std::io;
use std::net::{SocketAddr, UdpSocket};
use std::time::Duration;
use tracing::{debug, warn};

pub struct UdpTransport {
    socket: UdpSocket,
    max_response_size: usize,
}

impl UdpTransport {
    pub fn bind(bind_addr: SocketAddr, max_response_size: usize) -> Result<Self, DomainError> {
        let socket = UdpSocket::bind(bind_addr).map_err(|e| DomainError::TransportError {
            server: bind_addr.to_string(),
            reason: format!("failed to bind UDP socket: {}", e),
        })?;

        debug!(local = ?socket.local_addr().ok(), "UDP socket bound");

        Ok(Self {
            socket,
            max_response_size,
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, DomainError> {
        self.socket
            .local_addr()
            .map_err(|e| DomainError::TransportError {
                server: "local".to_string(),
                reason: e.to_string(),
            })
    }

    fn io_error(server: SocketAddr, action: &str, e: io::Error) -> DomainError {
        match e.kind() {
            io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut => DomainError::TransportTimeout {
                server: server.to_string(),
            },
            _ => DomainError::TransportError {
                server: server.to_string(),
                reason: format!("failed to {}: {}", action, e),
            },
        }
    }
}

impl DnsTransport for UdpTransport {
    fn send(
        &self,
        server: SocketAddr,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        self.socket
            .set_read_timeout(Some(timeout))
            .map_err(|e| Self::io_error(server, "set read timeout", e))?;

        let bytes_sent = self
            .socket
            .send_to(message_bytes, server)
            .map_err(|e| Self::io_error(server, "send UDP query", e))?;

        debug!(server = %server, bytes_sent, "UDP query sent");

        let mut recv_buf = vec![0u8; self.max_response_size];

        let (bytes_received, from_addr) = self
            .socket
            .recv_from(&mut recv_buf)
            .map_err(|e| Self::io_error(server, "receive UDP response", e))?;

        if from_addr.ip() != server.ip() {
            warn!(
                expected = %server,
                received_from = %from_addr,
                "UDP response from unexpected source"
            );
        }

        recv_buf.truncate(bytes_received);

        debug!(server = %server, bytes_received, "UDP response received");

        Ok(TransportResponse { bytes: recv_buf })
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}
