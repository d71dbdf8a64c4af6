use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::lookup::{LookupOptions, NxdomainHandling};
use crate::dns_record::RecordType;

const LOCAL_CONFIG: &str = "ferrous-lookup.toml";
const SYSTEM_CONFIG: &str = "/etc/ferrous-lookup/config.toml";

/// Main configuration structure for Ferrous Lookup
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Lookup defaults (record type, timeouts, servers)
    #[serde(default)]
    pub lookup: LookupOptions,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-lookup.toml in current directory
    /// 3. /etc/ferrous-lookup/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG).exists() {
            Self::from_file(LOCAL_CONFIG)?
        } else if std::path::Path::new(SYSTEM_CONFIG).exists() {
            Self::from_file(SYSTEM_CONFIG)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if !overrides.names.is_empty() {
            self.lookup.names = overrides.names;
        }
        if let Some(record_type) = overrides.record_type {
            self.lookup.record_type = record_type;
        }
        if let Some(timeout) = overrides.query_timeout {
            self.lookup.query_timeout = timeout;
        }
        if let Some(retry) = overrides.query_retry {
            self.lookup.query_retry = retry;
        }
        if let Some(retries) = overrides.servfail_retries {
            self.lookup.servfail_retries = retries;
        }
        if let Some(servers) = overrides.servers {
            self.lookup.servers = Some(servers);
        }
        if let Some(handling) = overrides.nxdomain_handling {
            self.lookup.nxdomain_handling = handling;
        }
        if let Some(search) = overrides.search {
            self.lookup.search = search;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Log level cannot be empty".to_string(),
            ));
        }
        self.lookup.validate()
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG, SYSTEM_CONFIG]
            .into_iter()
            .find(|p| std::path::Path::new(p).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub names: Vec<String>,
    pub record_type: Option<RecordType>,
    pub query_timeout: Option<f64>,
    pub query_retry: Option<u32>,
    pub servfail_retries: Option<u32>,
    pub servers: Option<Vec<String>>,
    pub nxdomain_handling: Option<NxdomainHandling>,
    pub search: Option<bool>,
    pub log_level: Option<String>,
}
