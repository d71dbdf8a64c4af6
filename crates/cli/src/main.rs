use clap::Parser;
use ferrous_lookup_application::use_cases::LookupRecordsUseCase;
use ferrous_lookup_domain::{CliOverrides, NxdomainHandling, RecordType};
use ferrous_lookup_infrastructure::dns::StubResolver;
use std::sync::Arc;
use tracing::info;

mod bootstrap;

#[derive(Parser)]
#[command(name = "ferrous-lookup")]
#[command(version)]
#[command(about = "Ferrous Lookup - DNS record lookups with normalized JSON output")]
struct Cli {
    /// Names to look up, in order
    #[arg(value_name = "NAMES")]
    names: Vec<String>,

    /// Record type to query
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    record_type: Option<RecordType>,

    /// Seconds to wait for one attempt
    #[arg(long, value_name = "SECONDS")]
    query_timeout: Option<f64>,

    /// Retries after a timed out attempt
    #[arg(long, value_name = "N")]
    query_retry: Option<u32>,

    /// Retries after a SERVFAIL answer
    #[arg(long, value_name = "N")]
    servfail_retries: Option<u32>,

    /// Nameserver IP or hostname (repeatable); defaults to the system resolver
    #[arg(short = 's', long = "server", value_name = "SERVER")]
    servers: Vec<String>,

    /// What a non-existent name yields: empty or fail
    #[arg(long, value_name = "MODE")]
    nxdomain_handling: Option<NxdomainHandling>,

    /// Query names exactly as given, without the search list
    #[arg(long)]
    no_search: bool,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Indent the JSON output
    #[arg(long)]
    pretty: bool,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            names: self.names.clone(),
            record_type: self.record_type,
            query_timeout: self.query_timeout,
            query_retry: self.query_retry,
            servfail_retries: self.servfail_retries,
            servers: (!self.servers.is_empty()).then(|| self.servers.clone()),
            nxdomain_handling: self.nxdomain_handling,
            search: self.no_search.then_some(false),
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;
    bootstrap::init_logging(&config);
    bootstrap::config::log_loaded(cli.config.as_deref(), &config);

    info!("Starting Ferrous Lookup v{}", env!("CARGO_PKG_VERSION"));

    let options = &config.lookup;
    let resolver = Arc::new(StubResolver::from_system(options.resolver_config()));
    let lookup = LookupRecordsUseCase::new(resolver);

    let records = lookup.execute(&options.names, options).await?;

    let output = if cli.pretty {
        serde_json::to_string_pretty(&records)?
    } else {
        serde_json::to_string(&records)?
    };
    println!("{}", output);

    Ok(())
}
