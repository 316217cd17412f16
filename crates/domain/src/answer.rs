use super::DomainName;
use std::net::Ipv4Addr;

/// Outcome of asking the authoritative servers for a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// An A record: resolution is finished.
    Address(Ipv4Addr),
    /// A CNAME record: resolution continues with the target.
    Alias(DomainName),
    /// Neither, or every server failed.
    Failed(String),
}
