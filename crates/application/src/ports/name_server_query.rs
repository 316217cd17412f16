use iterdns_domain::{DnsMessage, DomainError, DomainName, RecordType};
use std::net::Ipv4Addr;

/// One validated question/answer exchange with a single name server.
///
/// A successful return means the reply matched the query's transaction id
/// and carried a NOERROR response code.
pub trait NameServerQuery {
    fn query(
        &self,
        server: Ipv4Addr,
        name: &DomainName,
        record_type: RecordType,
    ) -> Result<DnsMessage, DomainError>;
}

impl<Q: NameServerQuery + ?Sized> NameServerQuery for &Q {
    fn query(
        &self,
        server: Ipv4Addr,
        name: &DomainName,
        record_type: RecordType,
    ) -> Result<DnsMessage, DomainError> {
        (**self).query(server, name, record_type)
    }
}

impl<Q: NameServerQuery + ?Sized> NameServerQuery for Box<Q> {
    fn query(
        &self,
        server: Ipv4Addr,
        name: &DomainName,
        record_type: RecordType,
    ) -> Result<DnsMessage, DomainError> {
        (**self).query(server, name, record_type)
    }
}
