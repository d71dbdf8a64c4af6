//! Ferrous Lookup Domain Layer
pub mod config;
pub mod dns_record;
pub mod errors;
pub mod query_target;

pub use config::{
    CliOverrides, Config, ConfigError, LoggingConfig, LookupOptions, NxdomainHandling,
    ResolverConfig,
};
pub use dns_record::{
    normalize, type_mnemonic, DnsName, LocData, NormalizedRecord, RecordData, RecordType,
    LOC_EQUATOR,
};
pub use errors::{DomainError, LookupError};
pub use query_target::QueryTarget;
