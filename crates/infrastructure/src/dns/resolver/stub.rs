use super::failover::{display_servers, AttemptError, FailoverStrategy};
use super::search::candidate_names;
use super::system_config::SystemConfig;
use crate::dns::forwarding::DnsResponse;
use async_trait::async_trait;
use ferrous_lookup_application::ports::DnsResolver;
use ferrous_lookup_domain::{DomainError, QueryTarget, RecordData, RecordType, ResolverConfig};
use hickory_proto::rr::Name;
use std::net::{IpAddr, SocketAddr};
use tracing::{debug, info, warn};

const DNS_PORT: u16 = 53;

/// Stub resolver: sends recursive queries to a list of nameservers and
/// applies the timeout and SERVFAIL retry policy of [`ResolverConfig`].
pub struct StubResolver {
    config: ResolverConfig,
    system: SystemConfig,
    port: u16,
}

impl StubResolver {
    pub fn new(config: ResolverConfig, system: SystemConfig) -> Self {
        info!(
            timeout_ms = config.timeout.as_millis() as u64,
            timeout_retries = config.timeout_retries,
            servfail_retries = config.servfail_retries,
            nameservers = system.nameservers.len(),
            "Stub DNS resolver created"
        );

        Self {
            config,
            system,
            port: DNS_PORT,
        }
    }

    /// Resolver using the nameservers and search list of the host.
    pub fn from_system(config: ResolverConfig) -> Self {
        Self::new(config, SystemConfig::load())
    }

    /// Sends queries to `port` instead of 53.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    fn socket_addrs(&self, servers: &[IpAddr]) -> Vec<SocketAddr> {
        servers
            .iter()
            .map(|ip| SocketAddr::new(*ip, self.port))
            .collect()
    }

    /// Runs attempts until one yields a NOERROR or NXDOMAIN response or the
    /// retry budget for the failure seen is spent.
    async fn query_with_retries(
        &self,
        servers: &[SocketAddr],
        name: &Name,
        record_type: RecordType,
    ) -> Result<DnsResponse, DomainError> {
        let mut timeouts = 0u32;
        let mut servfails = 0u32;

        loop {
            let attempt = tokio::time::timeout(
                self.config.timeout,
                FailoverStrategy::query(servers, name, record_type, self.config.timeout),
            )
            .await;

            match attempt {
                Ok(Ok(result)) => return Ok(result.response),
                Ok(Err(AttemptError::Failed(e))) => return Err(e),
                Ok(Err(AttemptError::ServFail)) => {
                    if servfails >= self.config.servfail_retries {
                        return Err(DomainError::ServerResponse {
                            rcode: "SERVFAIL".to_string(),
                            servers: display_servers(servers),
                        });
                    }
                    servfails += 1;
                    warn!(name = %name, retry = servfails, "SERVFAIL, retrying");
                }
                Ok(Err(AttemptError::Timeout)) | Err(_) => {
                    if timeouts >= self.config.timeout_retries {
                        return Err(DomainError::QueryTimeout {
                            attempts: timeouts + 1,
                        });
                    }
                    timeouts += 1;
                    warn!(name = %name, retry = timeouts, "Query timed out, retrying");
                }
            }
        }
    }

    async fn lookup(
        &self,
        name: &str,
        absolute: bool,
        search: &[Name],
        servers: &[IpAddr],
        record_type: RecordType,
        nxdomain_is_empty: bool,
    ) -> Result<Vec<RecordData>, DomainError> {
        let servers = self.socket_addrs(servers);
        let candidates = candidate_names(name, absolute, search, self.system.ndots)?;

        for candidate in &candidates {
            debug!(name = %candidate, record_type = %record_type, "Querying candidate name");

            let response = self
                .query_with_retries(&servers, candidate, record_type)
                .await?;

            if response.is_nxdomain() {
                debug!(name = %candidate, "NXDOMAIN, trying next candidate");
                continue;
            }

            let records = response.decode_answers(record_type)?;
            debug!(name = %candidate, records = records.len(), "Answer received");
            return Ok(records);
        }

        if nxdomain_is_empty {
            return Ok(Vec::new());
        }
        Err(DomainError::NxDomain {
            name: candidates
                .iter()
                .map(Name::to_string)
                .collect::<Vec<_>>()
                .join(", "),
        })
    }
}

#[async_trait]
impl DnsResolver for StubResolver {
    async fn resolve(&self, target: &QueryTarget) -> Result<Vec<RecordData>, DomainError> {
        // The search list belongs to the system nameservers.
        let (servers, search) = match &target.server_addresses {
            Some(servers) => (&servers[..], &[][..]),
            None => (&self.system.nameservers[..], &self.system.search[..]),
        };

        self.lookup(
            &target.name,
            target.is_absolute(),
            search,
            servers,
            target.record_type,
            target.nxdomain_is_empty,
        )
        .await
    }

    async fn resolve_addresses(&self, hostname: &str) -> Result<Vec<IpAddr>, DomainError> {
        let mut addresses = Vec::new();

        for record_type in [RecordType::A, RecordType::AAAA] {
            let records = self
                .lookup(
                    hostname,
                    true,
                    &[],
                    &self.system.nameservers,
                    record_type,
                    false,
                )
                .await?;

            addresses.extend(records.into_iter().filter_map(|record| match record {
                RecordData::A { address } => Some(IpAddr::V4(address)),
                RecordData::AAAA { address } => Some(IpAddr::V6(address)),
                _ => None,
            }));
        }

        debug!(hostname = %hostname, addresses = addresses.len(), "Hostname resolved");
        Ok(addresses)
    }
}
