pub mod message_builder;
pub mod record_type_map;
pub mod response_parser;

pub use message_builder::MessageBuilder;
pub use record_type_map::RecordTypeMapper;
pub use response_parser::ResponseParser;

use iterdns_application::ports::{EncodedQuery, MessageCodec};
use iterdns_domain::{DnsMessage, DomainError, DomainName, RecordType};

/// [`MessageCodec`] backed by `hickory-proto` serialization.
#[derive(Debug, Default, Clone, Copy)]
pub struct HickoryMessageCodec;

impl HickoryMessageCodec {
    pub fn new() -> Self {
        Self
    }
}

impl MessageCodec for HickoryMessageCodec {
    fn build_query(
        &self,
        name: &DomainName,
        record_type: RecordType,
    ) -> Result<EncodedQuery, DomainError> {
        let (id, bytes) = MessageBuilder::build_query_with_id(&name.to_fqdn(), record_type)?;
        Ok(EncodedQuery { id, bytes })
    }

    fn parse(&self, bytes: &[u8]) -> Result<DnsMessage, DomainError> {
        ResponseParser::parse(bytes)
    }
}
