pub mod udp;

pub use iterdns_application::ports::{DnsTransport, TransportResponse};
pub use udp::UdpTransport;
