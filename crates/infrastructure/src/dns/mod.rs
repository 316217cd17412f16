pub mod codec;
pub mod transport;

pub use codec::HickoryMessageCodec;
pub use transport::udp::UdpTransport;
