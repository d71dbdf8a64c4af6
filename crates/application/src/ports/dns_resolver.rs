use async_trait::async_trait;
use ferrous_lookup_domain::{DomainError, QueryTarget, RecordData};
use std::net::IpAddr;

#[async_trait]
pub trait DnsResolver: Send + Sync {
    /// Resolves the records of `target.record_type` for `target.name`.
    ///
    /// A name that does not exist yields an empty list when
    /// `target.nxdomain_is_empty` is set and `DomainError::NxDomain` otherwise.
    /// A successful answer without matching records is an empty list.
    async fn resolve(&self, target: &QueryTarget) -> Result<Vec<RecordData>, DomainError>;

    /// IPv4 then IPv6 addresses of `hostname`, using the system resolver.
    async fn resolve_addresses(&self, hostname: &str) -> Result<Vec<IpAddr>, DomainError>;
}
