use crate::ports::DnsResolver;
use crate::services::guarded_run;
use ferrous_lookup_domain::{
    normalize, DomainError, LookupError, LookupOptions, NormalizedRecord, QueryTarget,
};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, info};

/// Looks up every name in order and returns the normalized records of all of
/// them, or the first failure.
pub struct LookupRecordsUseCase {
    resolver: Arc<dyn DnsResolver>,
}

impl LookupRecordsUseCase {
    pub fn new(resolver: Arc<dyn DnsResolver>) -> Self {
        Self { resolver }
    }

    pub async fn execute(
        &self,
        names: &[String],
        options: &LookupOptions,
    ) -> Result<Vec<NormalizedRecord>, LookupError> {
        let servers = match &options.servers {
            Some(servers) => Some(self.resolve_servers(servers).await?),
            None => None,
        };

        let mut result = Vec::new();
        for name in names {
            let records = self.lookup_name(name, servers.clone(), options).await?;
            debug!(name = %name, record_type = %options.record_type, count = records.len(), "Name resolved");
            result.extend(records);
        }

        info!(
            names = names.len(),
            record_type = %options.record_type,
            records = result.len(),
            "Lookup completed"
        );
        Ok(result)
    }

    /// Turns the configured servers into addresses, keeping their order.
    /// Hostnames expand in place to all of their addresses.
    async fn resolve_servers(&self, servers: &[String]) -> Result<Arc<[IpAddr]>, LookupError> {
        let mut addresses = Vec::with_capacity(servers.len());
        for server in servers {
            let server = server.trim();
            if let Ok(ip) = server.parse::<IpAddr>() {
                addresses.push(ip);
                continue;
            }

            let resolved = guarded_run(move || self.fetch_addresses(server), server).await?;
            debug!(server = %server, addresses = ?resolved, "Server hostname resolved");
            addresses.extend(resolved);
        }
        Ok(Arc::from(addresses))
    }

    async fn fetch_addresses(&self, hostname: &str) -> Result<Vec<IpAddr>, LookupError> {
        Ok(self.resolver.resolve_addresses(hostname).await?)
    }

    async fn lookup_name(
        &self,
        name: &str,
        servers: Option<Arc<[IpAddr]>>,
        options: &LookupOptions,
    ) -> Result<Vec<NormalizedRecord>, LookupError> {
        let target = QueryTarget::new(name, options.record_type)
            .with_servers(servers)
            .with_nxdomain_is_empty(options.nxdomain_is_empty())
            .with_relative(options.search)
            .with_search(options.search);

        guarded_run(move || self.fetch_records(target), name).await
    }

    async fn fetch_records(&self, target: QueryTarget) -> Result<Vec<NormalizedRecord>, LookupError> {
        match self.resolver.resolve(&target).await {
            Ok(records) => Ok(records.iter().map(normalize).collect()),
            Err(DomainError::NxDomain { .. }) => Err(LookupError::NxDomain {
                name: target.name.to_string(),
            }),
            Err(e) => Err(e.into()),
        }
    }
}
