use super::RecordType;
use std::net::Ipv4Addr;

/// Type-specific payload of a resource record.
///
/// Names are kept exactly as the codec rendered them, trailing root dot
/// included. Stripping it is the resolver's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    Name(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRecord {
    pub name: String,

    pub record_type: RecordType,

    pub data: RecordData,

    pub ttl: u32,
}

impl DnsRecord {
    pub fn new(name: impl Into<String>, record_type: RecordType, data: RecordData, ttl: u32) -> Self {
        Self {
            name: name.into(),
            record_type,
            data,
            ttl,
        }
    }

    pub fn a(name: impl Into<String>, address: Ipv4Addr) -> Self {
        Self::new(name, RecordType::A, RecordData::A(address), 0)
    }

    pub fn ns(zone: impl Into<String>, server: impl Into<String>) -> Self {
        Self::new(zone, RecordType::NS, RecordData::Name(server.into()), 0)
    }

    pub fn cname(alias: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(alias, RecordType::CNAME, RecordData::Name(target.into()), 0)
    }

    pub fn ipv4(&self) -> Option<Ipv4Addr> {
        match (&self.record_type, &self.data) {
            (RecordType::A, RecordData::A(address)) => Some(*address),
            _ => None,
        }
    }

    pub fn target_name(&self) -> Option<&str> {
        match &self.data {
            RecordData::Name(name) if self.record_type.carries_name() => Some(name),
            _ => None,
        }
    }
}
