//! Ferrous Lookup Infrastructure Layer
//!
//! DNS wire handling and the stub resolver behind the application's
//! `DnsResolver` port.

pub mod dns;
