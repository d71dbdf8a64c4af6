mod errors;
mod logging;
mod lookup;
mod root;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use lookup::{LookupOptions, NxdomainHandling, ResolverConfig};
pub use root::{CliOverrides, Config};
