use ferrous_lookup_domain::{DomainError, LookupError};
use std::future::Future;
use tracing::debug;

/// Runs `operation` and rewrites recognised DNS failures into a
/// `LookupError::Query` naming `context`.
///
/// Errors that are already user facing, and DNS errors outside the
/// recognised set, are returned unchanged.
pub async fn guarded_run<T, F, Fut>(operation: F, context: &str) -> Result<T, LookupError>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, LookupError>>,
{
    match operation().await {
        Ok(value) => Ok(value),
        Err(LookupError::Dns(error)) => match describe(&error, context) {
            Some(message) => {
                debug!(context = %context, error = %error, "DNS failure converted");
                Err(LookupError::Query {
                    context: context.to_string(),
                    message,
                })
            }
            None => Err(LookupError::Dns(error)),
        },
        Err(other) => Err(other),
    }
}

fn describe(error: &DomainError, context: &str) -> Option<String> {
    match error {
        DomainError::ServerResponse { .. } => Some(format!(
            "Unexpected resolving error for {}: {}",
            context, error
        )),
        DomainError::NxDomain { .. }
        | DomainError::QueryTimeout { .. }
        | DomainError::NoNameservers
        | DomainError::InvalidDomainName(_)
        | DomainError::InvalidDnsResponse(_) => {
            Some(format!("Unexpected DNS error for {}: {}", context, error))
        }
        e if e.is_transport() => Some(format!("Unexpected DNS error for {}: {}", context, error)),
        _ => None,
    }
}
