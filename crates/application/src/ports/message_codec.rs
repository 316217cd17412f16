use iterdns_domain::{DnsMessage, DomainError, DomainName, RecordType};

/// A query ready for the wire, with the transaction id the reply must echo.
#[derive(Debug, Clone)]
pub struct EncodedQuery {
    pub id: u16,
    pub bytes: Vec<u8>,
}

pub trait MessageCodec {
    /// Serialize a single-question, non-recursive query.
    fn build_query(
        &self,
        name: &DomainName,
        record_type: RecordType,
    ) -> Result<EncodedQuery, DomainError>;

    /// Parse a raw response. Names are surfaced as received, trailing dot
    /// included.
    fn parse(&self, bytes: &[u8]) -> Result<DnsMessage, DomainError>;
}
