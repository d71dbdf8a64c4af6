mod dns_resolver;

pub use dns_resolver::DnsResolver;
