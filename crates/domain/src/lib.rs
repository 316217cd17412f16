//! iterdns Domain Layer
pub mod answer;
pub mod config;
pub mod dns_message;
pub mod dns_record;
pub mod domain_name;
pub mod errors;

pub use answer::AnswerOutcome;
pub use config::{CliOverrides, Config, ConfigError, LoggingConfig, ResolverConfig};
pub use dns_message::{DnsMessage, ResponseCode};
pub use dns_record::{DnsRecord, RecordData, RecordType};
pub use domain_name::DomainName;
pub use errors::DomainError;
