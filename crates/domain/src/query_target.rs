use crate::dns_record::RecordType;
use std::net::IpAddr;
use std::sync::Arc;

/// A single query handed to the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTarget {
    pub name: Arc<str>,
    pub record_type: RecordType,
    pub server_addresses: Option<Arc<[IpAddr]>>,
    pub nxdomain_is_empty: bool,
    pub target_can_be_relative: bool,
    pub search: bool,
}

impl QueryTarget {
    pub fn new(name: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            name: name.into(),
            record_type,
            server_addresses: None,
            nxdomain_is_empty: true,
            target_can_be_relative: true,
            search: true,
        }
    }

    pub fn with_servers(mut self, servers: Option<Arc<[IpAddr]>>) -> Self {
        self.server_addresses = servers.filter(|s| !s.is_empty());
        self
    }

    pub fn with_nxdomain_is_empty(mut self, nxdomain_is_empty: bool) -> Self {
        self.nxdomain_is_empty = nxdomain_is_empty;
        self
    }

    pub fn with_search(mut self, search: bool) -> Self {
        self.search = search;
        self
    }

    pub fn with_relative(mut self, target_can_be_relative: bool) -> Self {
        self.target_can_be_relative = target_can_be_relative;
        self
    }

    /// True when the name must be queried exactly as written.
    pub fn is_absolute(&self) -> bool {
        !self.target_can_be_relative || !self.search || self.name.ends_with('.')
    }
}
