use super::record_type_map::RecordTypeMapper;
use hickory_proto::op::Message;
use hickory_proto::rr::{RData, Record};
use iterdns_domain::{DnsMessage, DnsRecord, DomainError, RecordData, ResponseCode};
use tracing::debug;

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<DnsMessage, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let response_code = ResponseCode::from_u16(u16::from(message.response_code()));

        let parsed = DnsMessage {
            id: message.id(),
            response_code,
            answers: Self::convert_section(message.answers()),
            authority: Self::convert_section(message.name_servers()),
            additional: Self::convert_section(message.additionals()),
        };

        debug!(
            id = parsed.id,
            rcode = %parsed.response_code,
            answers = parsed.answers.len(),
            authority = parsed.authority.len(),
            additional = parsed.additional.len(),
            "DNS response parsed"
        );

        Ok(parsed)
    }

    fn convert_section(records: &[Record]) -> Vec<DnsRecord> {
        records.iter().filter_map(Self::convert_record).collect()
    }

    fn convert_record(record: &Record) -> Option<DnsRecord> {
        let Some(record_type) = RecordTypeMapper::from_hickory(record.record_type()) else {
            debug!(record_type = ?record.record_type(), "Skipping unsupported record");
            return None;
        };

        // Names stay in wire (punycode) form; to_utf8 would decode IDN labels.
        let data = match record.data() {
            RData::A(a) => RecordData::A(a.0),
            RData::NS(ns) => RecordData::Name(ns.0.to_ascii()),
            RData::CNAME(cname) => RecordData::Name(cname.0.to_ascii()),
            _ => {
                debug!(record_type = %record_type, "Record data does not match its type");
                return None;
            }
        };

        Some(DnsRecord::new(
            record.name().to_ascii(),
            record_type,
            data,
            record.ttl(),
        ))
    }
}
