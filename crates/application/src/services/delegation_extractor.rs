//! Reading next-hop server addresses out of referral responses.

use iterdns_domain::{DnsMessage, DomainName, RecordType};
use std::net::Ipv4Addr;

/// Target names of every NS record in the authority section, in order.
/// Records whose target is not a usable name are skipped.
pub fn ns_target_names(message: &DnsMessage) -> Vec<DomainName> {
    message
        .authority
        .iter()
        .filter(|record| record.record_type == RecordType::NS)
        .filter_map(|record| record.target_name())
        .filter_map(|target| DomainName::new(target).ok())
        .collect()
}

/// Joins the authority NS targets against the additional-section A records
/// (glue). Output follows the additional section's order.
pub fn extract_server_ips(message: &DnsMessage) -> Vec<Ipv4Addr> {
    let ns_names = ns_target_names(message);
    if ns_names.is_empty() {
        return Vec::new();
    }

    message
        .additional
        .iter()
        .filter_map(|record| {
            let address = record.ipv4()?;
            let owner = DomainName::new(&record.name).ok()?;
            ns_names.contains(&owner).then_some(address)
        })
        .collect()
}

/// First A record in the answer section, else the first in the additional
/// section. Used when an NS name has to be looked up without glue.
pub fn first_address(message: &DnsMessage) -> Option<Ipv4Addr> {
    message
        .answers
        .iter()
        .find_map(|record| record.ipv4())
        .or_else(|| message.additional.iter().find_map(|record| record.ipv4()))
}
