use iterdns_domain::{DnsMessage, DnsRecord, DomainName, ResponseCode};
use std::net::Ipv4Addr;

pub fn name(s: &str) -> DomainName {
    DomainName::new(s).unwrap()
}

pub struct DnsMessageBuilder {
    message: DnsMessage,
}

impl DnsMessageBuilder {
    pub fn new() -> Self {
        Self {
            message: DnsMessage::new(0, ResponseCode::NoError),
        }
    }

    pub fn id(mut self, id: u16) -> Self {
        self.message.id = id;
        self
    }

    pub fn response_code(mut self, code: ResponseCode) -> Self {
        self.message.response_code = code;
        self
    }

    pub fn answer_a(mut self, owner: &str, ip: &str) -> Self {
        self.message
            .answers
            .push(DnsRecord::a(owner, ip.parse::<Ipv4Addr>().unwrap()));
        self
    }

    pub fn answer_cname(mut self, owner: &str, target: &str) -> Self {
        self.message.answers.push(DnsRecord::cname(owner, target));
        self
    }

    pub fn authority_ns(mut self, zone: &str, server: &str) -> Self {
        self.message.authority.push(DnsRecord::ns(zone, server));
        self
    }

    pub fn additional_a(mut self, owner: &str, ip: &str) -> Self {
        self.message
            .additional
            .push(DnsRecord::a(owner, ip.parse::<Ipv4Addr>().unwrap()));
        self
    }

    pub fn build(self) -> DnsMessage {
        self.message
    }
}

impl Default for DnsMessageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A referral for `zone` naming each `(ns, glue)` pair, with the glue in the
/// additional section.
pub fn referral(zone: &str, servers: &[(&str, &str)]) -> DnsMessage {
    let mut builder = DnsMessageBuilder::new();
    for (ns, _) in servers {
        builder = builder.authority_ns(zone, ns);
    }
    for (ns, ip) in servers {
        builder = builder.additional_a(ns, ip);
    }
    builder.build()
}
