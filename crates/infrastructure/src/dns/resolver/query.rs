use crate::dns::forwarding::{DnsResponse, MessageBuilder, ResponseParser};
use crate::dns::transport::Transport;
use ferrous_lookup_domain::{DomainError, RecordType};
use hickory_proto::rr::Name;
use std::net::SocketAddr;
use std::time::{Duration, Instant};
use tracing::debug;

/// Result of a single-server query attempt
pub struct QueryAttemptResult {
    pub response: DnsResponse,
    pub server_addr: SocketAddr,
    pub latency_ms: u64,
}

/// Execute a DNS query against a single server
///
/// Handles the full flow: build message → send via UDP → parse response.
/// If the UDP response is truncated (TC bit), the same query is repeated
/// over TCP within what is left of `timeout`.
pub async fn query_server(
    server_addr: SocketAddr,
    name: &Name,
    record_type: RecordType,
    timeout: Duration,
) -> Result<QueryAttemptResult, DomainError> {
    let start = Instant::now();

    let (id, query_bytes) = MessageBuilder::build_query(name, record_type)?;

    let udp = Transport::udp(server_addr);
    let raw = udp.send(&query_bytes, timeout).await?;
    let mut response = ResponseParser::parse(raw.bytes)?;
    check_id(server_addr, id, &response)?;

    if response.truncated {
        debug!(
            server = %server_addr,
            name = %name,
            "Response truncated (TC bit), retrying via TCP"
        );

        let remaining = timeout
            .checked_sub(start.elapsed())
            .unwrap_or(Duration::from_millis(500));

        let tcp = Transport::tcp(server_addr);
        let raw = tcp.send(&query_bytes, remaining).await?;
        response = ResponseParser::parse(raw.bytes)?;
        check_id(server_addr, id, &response)?;
    }

    Ok(QueryAttemptResult {
        response,
        server_addr,
        latency_ms: start.elapsed().as_millis() as u64,
    })
}

fn check_id(server_addr: SocketAddr, expected: u16, response: &DnsResponse) -> Result<(), DomainError> {
    if response.id != expected {
        return Err(DomainError::TransportError {
            server: server_addr.to_string(),
            reason: format!(
                "response ID {} does not match query ID {}",
                response.id, expected
            ),
        });
    }
    Ok(())
}
