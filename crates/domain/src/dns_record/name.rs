use serde::{Serialize, Serializer};
use std::fmt;

/// An absolute domain name held as raw wire labels.
///
/// Displays in presentation form with a trailing dot. The root name renders
/// as a single `.`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DnsName {
    labels: Vec<Vec<u8>>,
}

impl DnsName {
    pub fn root() -> Self {
        Self { labels: Vec::new() }
    }

    pub fn from_labels(labels: Vec<Vec<u8>>) -> Self {
        Self { labels }
    }

    /// Builds a name from dotted text. Escapes are not interpreted; a
    /// trailing dot is optional.
    pub fn from_ascii(name: &str) -> Self {
        let labels = name
            .trim_end_matches('.')
            .split('.')
            .filter(|label| !label.is_empty())
            .map(|label| label.as_bytes().to_vec())
            .collect();
        Self { labels }
    }
}

fn write_label(f: &mut fmt::Formatter<'_>, label: &[u8]) -> fmt::Result {
    for &byte in label {
        match byte {
            b'.' | b';' | b'\\' | b'(' | b')' | b'"' | b'@' | b'$' => {
                write!(f, "\\{}", byte as char)?
            }
            0x21..=0x7e => write!(f, "{}", byte as char)?,
            _ => write!(f, "\\{:03}", byte)?,
        }
    }
    Ok(())
}

impl fmt::Display for DnsName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.labels.is_empty() {
            return f.write_str(".");
        }
        for label in &self.labels {
            write_label(f, label)?;
            f.write_str(".")?;
        }
        Ok(())
    }
}

impl Serialize for DnsName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
