use ferrous_lookup_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

/// Logged once the subscriber is installed, so the level from the file applies.
pub fn log_loaded(config_path: Option<&str>, config: &Config) {
    let source = config_path
        .map(str::to_string)
        .or_else(Config::get_config_path)
        .unwrap_or_else(|| "default".to_string());

    info!(
        config_file = %source,
        names = config.lookup.names.len(),
        record_type = %config.lookup.record_type,
        query_timeout = config.lookup.query_timeout,
        servers = ?config.lookup.servers,
        "Configuration loaded"
    );
}
