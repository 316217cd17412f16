#![allow(dead_code)]
use std::net::Ipv4Addr;

pub const TYPE_A: u16 = 1;
pub const TYPE_NS: u16 = 2;
pub const TYPE_CNAME: u16 = 5;
pub const TYPE_SRV: u16 = 33;

pub const RCODE_NXDOMAIN: u8 = 3;
pub const RCODE_REFUSED: u8 = 5;

/// Uncompressed wire encoding of a dotted name.
pub fn encode_name(name: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(name.len() + 2);
    for label in name.trim_end_matches('.').split('.').filter(|l| !l.is_empty()) {
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0);
    out
}

#[derive(Debug, Clone)]
pub struct WireRecord {
    name: String,
    rtype: u16,
    ttl: u32,
    rdata: Vec<u8>,
}

impl WireRecord {
    pub fn a(name: &str, ip: &str) -> Self {
        let ip: Ipv4Addr = ip.parse().unwrap();
        Self::raw(name, TYPE_A, ip.octets().to_vec())
    }

    pub fn ns(zone: &str, server: &str) -> Self {
        Self::raw(zone, TYPE_NS, encode_name(server))
    }

    pub fn cname(alias: &str, target: &str) -> Self {
        Self::raw(alias, TYPE_CNAME, encode_name(target))
    }

    pub fn srv(name: &str, port: u16, target: &str) -> Self {
        let mut rdata = vec![0x00, 0x0a, 0x00, 0x05];
        rdata.extend_from_slice(&port.to_be_bytes());
        rdata.extend_from_slice(&encode_name(target));
        Self::raw(name, TYPE_SRV, rdata)
    }

    pub fn raw(name: &str, rtype: u16, rdata: Vec<u8>) -> Self {
        Self {
            name: name.to_string(),
            rtype,
            ttl: 3600,
            rdata,
        }
    }

    fn write(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&encode_name(&self.name));
        out.extend_from_slice(&self.rtype.to_be_bytes());
        out.extend_from_slice(&1u16.to_be_bytes());
        out.extend_from_slice(&self.ttl.to_be_bytes());
        out.extend_from_slice(&(self.rdata.len() as u16).to_be_bytes());
        out.extend_from_slice(&self.rdata);
    }
}

/// Hand-assembled DNS response datagram.
#[derive(Debug, Clone, Default)]
pub struct WireResponse {
    id: u16,
    rcode: u8,
    question: Option<(String, u16)>,
    answers: Vec<WireRecord>,
    authority: Vec<WireRecord>,
    additional: Vec<WireRecord>,
}

impl WireResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: u16) -> Self {
        self.id = id;
        self
    }

    pub fn rcode(mut self, rcode: u8) -> Self {
        self.rcode = rcode;
        self
    }

    pub fn question(mut self, name: &str, qtype: u16) -> Self {
        self.question = Some((name.to_string(), qtype));
        self
    }

    pub fn answer(mut self, record: WireRecord) -> Self {
        self.answers.push(record);
        self
    }

    pub fn authority(mut self, record: WireRecord) -> Self {
        self.authority.push(record);
        self
    }

    pub fn additional(mut self, record: WireRecord) -> Self {
        self.additional.push(record);
        self
    }

    /// Referral for `zone` with one NS record and matching glue per pair.
    pub fn referral(zone: &str, servers: &[(&str, &str)]) -> Self {
        let mut response = Self::new();
        for (ns, ip) in servers {
            response = response
                .authority(WireRecord::ns(zone, ns))
                .additional(WireRecord::a(ns, ip));
        }
        response
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(512);
        out.extend_from_slice(&self.id.to_be_bytes());
        // QR set, opcode QUERY, AA/TC/RD/RA clear.
        out.push(0x80);
        out.push(self.rcode & 0x0f);
        let qdcount = u16::from(self.question.is_some());
        out.extend_from_slice(&qdcount.to_be_bytes());
        out.extend_from_slice(&(self.answers.len() as u16).to_be_bytes());
        out.extend_from_slice(&(self.authority.len() as u16).to_be_bytes());
        out.extend_from_slice(&(self.additional.len() as u16).to_be_bytes());

        if let Some((name, qtype)) = &self.question {
            out.extend_from_slice(&encode_name(name));
            out.extend_from_slice(&qtype.to_be_bytes());
            out.extend_from_slice(&1u16.to_be_bytes());
        }

        for record in self
            .answers
            .iter()
            .chain(&self.authority)
            .chain(&self.additional)
        {
            record.write(&mut out);
        }

        out
    }
}

/// Reads id, lowercased question name and question type out of a query.
pub fn parse_question(query: &[u8]) -> Option<(u16, String, u16)> {
    if query.len() < 12 {
        return None;
    }
    let id = u16::from_be_bytes([query[0], query[1]]);

    let mut pos = 12;
    let mut labels = Vec::new();
    loop {
        let len = *query.get(pos)? as usize;
        pos += 1;
        if len == 0 {
            break;
        }
        let label = query.get(pos..pos + len)?;
        labels.push(String::from_utf8_lossy(label).to_ascii_lowercase());
        pos += len;
    }

    let qtype = u16::from_be_bytes([*query.get(pos)?, *query.get(pos + 1)?]);
    Some((id, labels.join("."), qtype))
}
