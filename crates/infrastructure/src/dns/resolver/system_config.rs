//! System resolver configuration read from a glibc-style `resolv.conf`.

use hickory_proto::rr::Name;
use resolv_conf::ScopedIp;
use std::net::{IpAddr, Ipv4Addr};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, warn};

pub const RESOLV_CONF_PATH: &str = "/etc/resolv.conf";
const DEFAULT_NDOTS: usize = 1;
const MAX_NDOTS: usize = 15;

/// Nameservers and relative-name rules of the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemConfig {
    pub nameservers: Vec<IpAddr>,

    /// Suffixes tried for relative names, in order.
    pub search: Vec<Name>,

    /// Relative names with more labels than this are first tried as-is.
    pub ndots: usize,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            nameservers: vec![IpAddr::V4(Ipv4Addr::LOCALHOST)],
            search: Vec::new(),
            ndots: DEFAULT_NDOTS,
        }
    }
}

impl SystemConfig {
    /// Reads `/etc/resolv.conf`, falling back to the loopback resolver.
    pub fn load() -> Self {
        Self::load_from(RESOLV_CONF_PATH)
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> Self {
        match std::fs::read_to_string(path.as_ref()) {
            Ok(contents) => {
                let config = Self::parse(&contents);
                debug!(
                    path = %path.as_ref().display(),
                    nameservers = ?config.nameservers,
                    search = config.search.len(),
                    ndots = config.ndots,
                    "System resolver configuration loaded"
                );
                config
            }
            Err(e) => {
                warn!(
                    path = %path.as_ref().display(),
                    error = %e,
                    "Cannot read resolver configuration, using defaults"
                );
                Self::default()
            }
        }
    }

    /// Parses resolv.conf text. A file that does not parse yields the
    /// defaults.
    pub fn parse(contents: &str) -> Self {
        let conf = match resolv_conf::Config::parse(contents) {
            Ok(conf) => conf,
            Err(e) => {
                warn!(error = %e, "Malformed resolver configuration, using defaults");
                return Self::default();
            }
        };

        let mut nameservers: Vec<IpAddr> = conf
            .nameservers
            .iter()
            .map(|ip| match ip {
                ScopedIp::V4(addr) => IpAddr::V4(*addr),
                ScopedIp::V6(addr, _scope) => IpAddr::V6(*addr),
            })
            .collect();
        if nameservers.is_empty() {
            nameservers.push(IpAddr::V4(Ipv4Addr::LOCALHOST));
        }

        let search = match (conf.get_search(), conf.get_domain()) {
            (Some(search), _) => search.iter().filter_map(|s| parse_suffix(s)).collect(),
            (None, Some(domain)) => parse_suffix(domain).into_iter().collect(),
            (None, None) => Vec::new(),
        };

        Self {
            nameservers,
            search,
            ndots: (conf.ndots as usize).min(MAX_NDOTS),
        }
    }
}

fn parse_suffix(word: &str) -> Option<Name> {
    let mut name = Name::from_str(word).ok()?;
    name.set_fqdn(true);
    if name.is_root() {
        return None;
    }
    Some(name)
}
