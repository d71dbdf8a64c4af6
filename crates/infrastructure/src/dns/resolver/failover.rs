use super::query::{query_server, QueryAttemptResult};
use ferrous_lookup_domain::{DomainError, RecordType};
use hickory_proto::rr::Name;
use std::net::SocketAddr;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Why one pass over the server list produced no usable response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptError {
    /// At least one server answered SERVFAIL.
    ServFail,
    /// Every server timed out.
    Timeout,
    /// Any other failure; not retried.
    Failed(DomainError),
}

pub struct FailoverStrategy;

impl FailoverStrategy {
    /// Asks the servers in order until one gives a NOERROR or NXDOMAIN
    /// response. The remaining time is shared evenly by the servers not yet
    /// asked.
    pub async fn query(
        servers: &[SocketAddr],
        name: &Name,
        record_type: RecordType,
        timeout: Duration,
    ) -> Result<QueryAttemptResult, AttemptError> {
        if servers.is_empty() {
            return Err(AttemptError::Failed(DomainError::NoNameservers));
        }
        debug!(strategy = "failover", servers = servers.len(), name = %name, record_type = %record_type, "Trying sequentially");

        let deadline = Instant::now() + timeout;
        let mut saw_servfail = false;
        let mut last_rcode: Option<String> = None;
        let mut last_error: Option<DomainError> = None;

        for (index, server) in servers.iter().enumerate() {
            let left = deadline.saturating_duration_since(Instant::now());
            if left.is_zero() {
                break;
            }
            let share = left / (servers.len() - index) as u32;

            match query_server(*server, name, record_type, share).await {
                Ok(r) if r.response.is_server_error() => {
                    let rcode = r.response.rcode_name();
                    warn!(server = %server, rcode = %rcode, position = index, "Failing over");
                    if r.response.is_servfail() {
                        saw_servfail = true;
                    } else {
                        last_rcode = Some(rcode);
                    }
                }
                Ok(r) => {
                    debug!(server = %r.server_addr, latency_ms = r.latency_ms, position = index, "Server responded");
                    return Ok(r);
                }
                Err(e) if e.is_timeout() => {
                    warn!(server = %server, position = index, "Server timed out, failing over");
                }
                Err(e) => {
                    warn!(server = %server, error = %e, position = index, "Failing over");
                    last_error = Some(e);
                }
            }
        }

        if saw_servfail {
            return Err(AttemptError::ServFail);
        }
        if let Some(rcode) = last_rcode {
            return Err(AttemptError::Failed(DomainError::ServerResponse {
                rcode,
                servers: display_servers(servers),
            }));
        }
        match last_error {
            Some(e) => Err(AttemptError::Failed(e)),
            None => Err(AttemptError::Timeout),
        }
    }
}

/// Server addresses as shown in error messages, ports omitted.
pub fn display_servers(servers: &[SocketAddr]) -> String {
    servers
        .iter()
        .map(|s| s.ip().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
