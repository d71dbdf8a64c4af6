mod failover;
mod query;
mod search;
mod stub;
mod system_config;

pub use failover::{AttemptError, FailoverStrategy};
pub use query::{query_server, QueryAttemptResult};
pub use search::candidate_names;
pub use stub::StubResolver;
pub use system_config::{SystemConfig, RESOLV_CONF_PATH};
