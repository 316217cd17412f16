mod dns_transport;
mod message_codec;
mod name_server_query;

pub use dns_transport::{DnsTransport, TransportResponse};
pub use message_codec::{EncodedQuery, MessageCodec};
pub use name_server_query::NameServerQuery;

// Re-export for convenience
pub use iterdns_domain::{DnsMessage, DomainName, RecordType};
