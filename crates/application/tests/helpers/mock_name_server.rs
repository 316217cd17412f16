use iterdns_application::ports::{
    DnsTransport, EncodedQuery, MessageCodec, NameServerQuery, TransportResponse,
};
use iterdns_domain::{DnsMessage, DomainError, DomainName, RecordType, ResponseCode};
use std::collections::HashMap;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Mutex;
use std::time::Duration;

type QueryKey = (Ipv4Addr, String, RecordType);

/// Scripted name-server network. Unscripted queries time out.
#[derive(Default)]
pub struct MockNameServerQuery {
    responses: Mutex<HashMap<QueryKey, Result<DnsMessage, DomainError>>>,
    calls: Mutex<Vec<QueryKey>>,
}

impl MockNameServerQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, server: &str, name: &str, record_type: RecordType, message: DnsMessage) {
        self.responses.lock().unwrap().insert(
            (server.parse().unwrap(), name.to_string(), record_type),
            Ok(message),
        );
    }

    pub fn fail(&self, server: &str, name: &str, record_type: RecordType, error: DomainError) {
        self.responses.lock().unwrap().insert(
            (server.parse().unwrap(), name.to_string(), record_type),
            Err(error),
        );
    }

    pub fn calls(&self) -> Vec<QueryKey> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn was_queried(&self, server: &str, name: &str, record_type: RecordType) -> bool {
        let key = (server.parse().unwrap(), name.to_string(), record_type);
        self.calls.lock().unwrap().contains(&key)
    }

    pub fn reset_calls(&self) {
        self.calls.lock().unwrap().clear();
    }
}

impl NameServerQuery for MockNameServerQuery {
    fn query(
        &self,
        server: Ipv4Addr,
        name: &DomainName,
        record_type: RecordType,
    ) -> Result<DnsMessage, DomainError> {
        let key = (server, name.as_str().to_string(), record_type);
        self.calls.lock().unwrap().push(key.clone());

        self.responses
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .unwrap_or_else(|| {
                Err(DomainError::TransportTimeout {
                    server: format!("{}:53", server),
                })
            })
    }
}

/// Transport that records what it was asked to send and replies with a
/// fixed payload or error.
pub struct MockTransport {
    reply: Result<Vec<u8>, DomainError>,
    sent: Mutex<Vec<(SocketAddr, Vec<u8>, Duration)>>,
}

impl MockTransport {
    pub fn replying(bytes: &[u8]) -> Self {
        Self {
            reply: Ok(bytes.to_vec()),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: DomainError) -> Self {
        Self {
            reply: Err(error),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<(SocketAddr, Vec<u8>, Duration)> {
        self.sent.lock().unwrap().clone()
    }
}

impl DnsTransport for MockTransport {
    fn send(
        &self,
        server: SocketAddr,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        self.sent
            .lock()
            .unwrap()
            .push((server, message_bytes.to_vec(), timeout));

        self.reply.clone().map(|bytes| TransportResponse { bytes })
    }

    fn protocol_name(&self) -> &'static str {
        "MOCK"
    }
}

/// Codec with a fixed query id whose parse result is scripted.
pub struct MockCodec {
    query_id: u16,
    parsed: Result<DnsMessage, DomainError>,
}

impl MockCodec {
    pub fn new(query_id: u16, parsed: DnsMessage) -> Self {
        Self {
            query_id,
            parsed: Ok(parsed),
        }
    }

    pub fn unparseable(query_id: u16) -> Self {
        Self {
            query_id,
            parsed: Err(DomainError::InvalidDnsResponse(
                "truncated header".to_string(),
            )),
        }
    }

    pub fn empty_reply(query_id: u16) -> Self {
        Self::new(query_id, DnsMessage::new(query_id, ResponseCode::NoError))
    }
}

impl MessageCodec for MockCodec {
    fn build_query(
        &self,
        name: &DomainName,
        record_type: RecordType,
    ) -> Result<EncodedQuery, DomainError> {
        Ok(EncodedQuery {
            id: self.query_id,
            bytes: format!("{} {}", name, record_type).into_bytes(),
        })
    }

    fn parse(&self, _bytes: &[u8]) -> Result<DnsMessage, DomainError> {
        self.parsed.clone()
    }
}
