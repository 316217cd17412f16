mod dns;

pub use dns::{DnsClient, DnsServices};
