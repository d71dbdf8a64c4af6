pub mod forwarding;
pub mod rdata;
pub mod resolver;
pub mod transport;

pub use forwarding::{DnsResponse, MessageBuilder, ResponseParser};
pub use rdata::RdataDecoder;
pub use resolver::{StubResolver, SystemConfig};
