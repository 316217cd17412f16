use iterdns_domain::{AnswerOutcome, DnsMessage, DomainName, RecordType};

/// Interprets an authoritative reply to an A query.
///
/// The first A or CNAME record of the answer section decides the outcome and
/// later records are ignored. `None` means the answer section held neither,
/// which the caller treats as "try the next server". Aliases found only in
/// the additional section are not considered.
pub fn answer_from(message: &DnsMessage) -> Option<AnswerOutcome> {
    message.answers.iter().find_map(|record| match record.record_type {
        RecordType::A => record.ipv4().map(AnswerOutcome::Address),
        RecordType::CNAME => {
            let target = record.target_name()?;
            Some(match DomainName::new(target) {
                Ok(alias) => AnswerOutcome::Alias(alias),
                Err(e) => AnswerOutcome::Failed(format!("unusable alias target: {}", e)),
            })
        }
        _ => None,
    })
}
