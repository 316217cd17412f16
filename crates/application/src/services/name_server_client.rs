use crate::ports::{DnsTransport, MessageCodec, NameServerQuery};
use iterdns_domain::{DnsMessage, DomainError, DomainName, RecordType};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;
use tracing::{debug, warn};

/// Builds a query with the codec, ships it with the transport, and checks
/// that the reply belongs to the query and reports success.
pub struct NameServerClient<T, C> {
    transport: T,
    codec: C,
    port: u16,
    timeout: Duration,
}

impl<T: DnsTransport, C: MessageCodec> NameServerClient<T, C> {
    pub fn new(transport: T, codec: C, port: u16, timeout: Duration) -> Self {
        Self {
            transport,
            codec,
            port,
            timeout,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn exchange(
        &self,
        server: SocketAddr,
        name: &DomainName,
        record_type: RecordType,
    ) -> Result<DnsMessage, DomainError> {
        let query = self.codec.build_query(name, record_type)?;

        debug!(
            server = %server,
            domain = %name,
            record_type = %record_type,
            id = query.id,
            protocol = self.transport.protocol_name(),
            "Sending query"
        );

        let response = self.transport.send(server, &query.bytes, self.timeout)?;

        let message = self.codec.parse(&response.bytes).map_err(|e| {
            DomainError::MalformedResponse {
                server: server.to_string(),
                reason: e.to_string(),
            }
        })?;

        if message.id != query.id {
            return Err(DomainError::TransactionMismatch {
                server: server.to_string(),
                expected: query.id,
                received: message.id,
            });
        }

        if !message.response_code.is_success() {
            return Err(DomainError::ServerError {
                server: server.to_string(),
                rcode: message.response_code.to_string(),
            });
        }

        debug!(
            server = %server,
            domain = %name,
            answers = message.answers.len(),
            authority = message.authority.len(),
            additional = message.additional.len(),
            "Response parsed"
        );

        Ok(message)
    }
}

impl<T: DnsTransport, C: MessageCodec> NameServerQuery for NameServerClient<T, C> {
    fn query(
        &self,
        server: Ipv4Addr,
        name: &DomainName,
        record_type: RecordType,
    ) -> Result<DnsMessage, DomainError> {
        let server_addr = SocketAddr::new(IpAddr::V4(server), self.port);

        self.exchange(server_addr, name, record_type)
            .inspect_err(|e| {
                warn!(
                    server = %server_addr,
                    domain = %name,
                    record_type = %record_type,
                    error = %e,
                    "Query failed"
                );
            })
    }
}
