use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use super::errors::ConfigError;
use crate::dns_record::RecordType;

/// What to do when a queried name does not exist.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum NxdomainHandling {
    /// Treat the name as having no records.
    #[default]
    Empty,
    /// Abort the whole run.
    Fail,
}

impl NxdomainHandling {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Fail => "fail",
        }
    }
}

impl fmt::Display for NxdomainHandling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NxdomainHandling {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "empty" => Ok(Self::Empty),
            "fail" => Ok(Self::Fail),
            other => Err(format!(
                "Invalid nxdomain handling '{}': expected 'empty' or 'fail'",
                other
            )),
        }
    }
}

/// Timeout and retry policy owned by a resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverConfig {
    pub timeout: Duration,
    pub timeout_retries: u32,
    pub servfail_retries: u32,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(default_query_timeout() as u64),
            timeout_retries: default_query_retry(),
            servfail_retries: 0,
        }
    }
}

/// Options of a lookup run, read from the `[lookup]` table and the command line.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct LookupOptions {
    #[serde(default)]
    pub names: Vec<String>,

    #[serde(default = "default_record_type", rename = "type")]
    pub record_type: RecordType,

    /// Seconds to wait for one attempt.
    #[serde(default = "default_query_timeout")]
    pub query_timeout: f64,

    /// Retries after a timed out attempt.
    #[serde(default = "default_query_retry")]
    pub query_retry: u32,

    #[serde(default)]
    pub servfail_retries: u32,

    /// IP addresses or hostnames. `None` uses the system resolver.
    #[serde(default)]
    pub servers: Option<Vec<String>>,

    #[serde(default)]
    pub nxdomain_handling: NxdomainHandling,

    #[serde(default = "default_true")]
    pub search: bool,
}

impl Default for LookupOptions {
    fn default() -> Self {
        Self {
            names: Vec::new(),
            record_type: default_record_type(),
            query_timeout: default_query_timeout(),
            query_retry: default_query_retry(),
            servfail_retries: 0,
            servers: None,
            nxdomain_handling: NxdomainHandling::Empty,
            search: true,
        }
    }
}

impl LookupOptions {
    pub fn new(names: Vec<String>) -> Self {
        Self {
            names,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.names.is_empty() {
            return Err(ConfigError::Validation(
                "At least one name to look up is required".to_string(),
            ));
        }
        if let Some(blank) = self.names.iter().find(|n| n.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "Invalid name to look up: '{}'",
                blank
            )));
        }
        if self.query_timeout <= 0.0 || Duration::try_from_secs_f64(self.query_timeout).is_err() {
            return Err(ConfigError::Validation(format!(
                "query_timeout must be a positive number of seconds, got {}",
                self.query_timeout
            )));
        }
        if let Some(servers) = &self.servers {
            if servers.iter().any(|s| s.trim().is_empty()) {
                return Err(ConfigError::Validation(
                    "Server entries cannot be empty".to_string(),
                ));
            }
        }
        Ok(())
    }

    pub fn nxdomain_is_empty(&self) -> bool {
        self.nxdomain_handling == NxdomainHandling::Empty
    }

    pub fn resolver_config(&self) -> ResolverConfig {
        ResolverConfig {
            timeout: Duration::try_from_secs_f64(self.query_timeout)
                .unwrap_or(ResolverConfig::default().timeout),
            timeout_retries: self.query_retry,
            servfail_retries: self.servfail_retries,
        }
    }
}

fn default_record_type() -> RecordType {
    RecordType::A
}

fn default_query_timeout() -> f64 {
    10.0
}

fn default_query_retry() -> u32 {
    3
}

fn default_true() -> bool {
    true
}
