use async_trait::async_trait;
use ferrous_lookup_application::ports::DnsResolver;
use ferrous_lookup_domain::{DomainError, QueryTarget, RecordData};
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Resolver double keyed by queried name. Unknown names behave as NXDOMAIN.
#[derive(Clone, Default)]
pub struct MockDnsResolver {
    records: Arc<RwLock<HashMap<String, Vec<RecordData>>>>,
    errors: Arc<RwLock<HashMap<String, DomainError>>>,
    addresses: Arc<RwLock<HashMap<String, Vec<IpAddr>>>>,
    queries: Arc<RwLock<Vec<QueryTarget>>>,
    address_lookups: Arc<RwLock<Vec<String>>>,
}

impl MockDnsResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_records(&self, name: &str, records: Vec<RecordData>) {
        self.records.write().await.insert(name.to_string(), records);
    }

    pub async fn set_error(&self, name: &str, error: DomainError) {
        self.errors.write().await.insert(name.to_string(), error);
    }

    pub async fn set_addresses(&self, hostname: &str, addresses: Vec<IpAddr>) {
        self.addresses
            .write()
            .await
            .insert(hostname.to_string(), addresses);
    }

    pub async fn queries(&self) -> Vec<QueryTarget> {
        self.queries.read().await.clone()
    }

    pub async fn queried_names(&self) -> Vec<String> {
        self.queries
            .read()
            .await
            .iter()
            .map(|q| q.name.to_string())
            .collect()
    }

    pub async fn address_lookups(&self) -> Vec<String> {
        self.address_lookups.read().await.clone()
    }
}

#[async_trait]
impl DnsResolver for MockDnsResolver {
    async fn resolve(&self, target: &QueryTarget) -> Result<Vec<RecordData>, DomainError> {
        self.queries.write().await.push(target.clone());

        let name = target.name.as_ref();
        if let Some(error) = self.errors.read().await.get(name) {
            return Err(error.clone());
        }
        match self.records.read().await.get(name) {
            Some(records) => Ok(records.clone()),
            None if target.nxdomain_is_empty => Ok(vec![]),
            None => Err(DomainError::NxDomain {
                name: name.to_string(),
            }),
        }
    }

    async fn resolve_addresses(&self, hostname: &str) -> Result<Vec<IpAddr>, DomainError> {
        self.address_lookups.write().await.push(hostname.to_string());
        self.addresses
            .read()
            .await
            .get(hostname)
            .cloned()
            .ok_or_else(|| DomainError::NxDomain {
                name: hostname.to_string(),
            })
    }
}
