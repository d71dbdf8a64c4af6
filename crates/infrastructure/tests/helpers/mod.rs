#![allow(dead_code)]

mod dns_server_mock;
mod wire;

pub use dns_server_mock::{MockDnsServer, MockQuery, MockResponse, Protocol};
pub use wire::{encode_name, encode_response};
