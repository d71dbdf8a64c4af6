use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Unsupported record type: {0}")]
    UnsupportedRecordType(String),

    #[error("The DNS query name does not exist: {name}")]
    NxDomain { name: String },

    #[error("The DNS operation timed out after {attempts} attempts")]
    QueryTimeout { attempts: u32 },

    #[error("Error {rcode} while querying {servers}")]
    ServerResponse { rcode: String, servers: String },

    #[error("No nameservers available to query")]
    NoNameservers,

    #[error("Transport timeout connecting to {server}")]
    TransportTimeout { server: String },

    #[error("Transport connection refused by {server}")]
    TransportConnectionRefused { server: String },

    #[error("Transport connection reset by {server}")]
    TransportConnectionReset { server: String },

    #[error("Transport error with {server}: {reason}")]
    TransportError { server: String, reason: String },
}

impl DomainError {
    pub fn is_nxdomain(&self) -> bool {
        matches!(self, DomainError::NxDomain { .. })
    }

    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            DomainError::QueryTimeout { .. } | DomainError::TransportTimeout { .. }
        )
    }

    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            DomainError::TransportTimeout { .. }
                | DomainError::TransportConnectionRefused { .. }
                | DomainError::TransportConnectionReset { .. }
                | DomainError::TransportError { .. }
        )
    }
}

/// Error surfaced to callers of a lookup run.
///
/// `NxDomain` and `Query` are the normalized, user-facing failures. `Dns`
/// carries a raw resolver error; once a run has passed through
/// `guarded_run` it only holds failures outside the recognised DNS set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Got NXDOMAIN when querying {name}")]
    NxDomain { name: String },

    #[error("{message}")]
    Query { context: String, message: String },

    #[error(transparent)]
    Dns(#[from] DomainError),
}

impl LookupError {
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, LookupError::Dns(_))
    }

    /// The name or server the failure was reported for, if any.
    pub fn context(&self) -> Option<&str> {
        match self {
            LookupError::NxDomain { name } => Some(name),
            LookupError::Query { context, .. } => Some(context),
            LookupError::Dns(_) => None,
        }
    }
}
