use super::record_type::type_mnemonic;
use super::{LocData, RecordData};
use base64::Engine;
use data_encoding::{BASE32HEX_NOPAD, HEXLOWER};
use serde::Serialize;
use serde_json::{Map, Value};

/// A flat, ordered field mapping describing one record.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct NormalizedRecord(Map<String, Value>);

impl NormalizedRecord {
    fn with_capacity(capacity: usize) -> Self {
        Self(Map::with_capacity(capacity))
    }

    fn put(&mut self, field: &str, value: impl Into<Value>) -> &mut Self {
        self.0.insert(field.to_string(), value.into());
        self
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

fn text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

fn hex(bytes: &[u8]) -> String {
    HEXLOWER.encode(bytes)
}

fn b64(bytes: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(bytes)
}

fn windows(types: &[u16]) -> String {
    types
        .iter()
        .map(|code| type_mnemonic(*code))
        .collect::<Vec<_>>()
        .join(" ")
}

fn strings(parts: &[Vec<u8>]) -> (Vec<Value>, String) {
    let list: Vec<String> = parts.iter().map(|p| text(p)).collect();
    let joined = list.concat();
    (list.into_iter().map(Value::String).collect(), joined)
}

fn coordinate(raw: u32) -> Value {
    Value::Array(
        LocData::coordinate_tuple(raw)
            .iter()
            .map(|part| Value::from(*part))
            .collect(),
    )
}

/// Converts a decoded record into its flat field mapping.
pub fn normalize(data: &RecordData) -> NormalizedRecord {
    let mut out = NormalizedRecord::with_capacity(9);
    match data {
        RecordData::A { address } => {
            out.put("address", address.to_string());
        }
        RecordData::AAAA { address } => {
            out.put("address", address.to_string());
        }
        RecordData::CAA { flags, tag, value } => {
            out.put("flags", *flags)
                .put("tag", text(tag))
                .put("value", text(value));
        }
        RecordData::CNAME { target }
        | RecordData::DNAME { target }
        | RecordData::NS { target }
        | RecordData::PTR { target } => {
            out.put("target", target.to_string());
        }
        RecordData::DNSKEY {
            flags,
            protocol,
            algorithm,
            key,
        } => {
            out.put("flags", *flags)
                .put("protocol", *protocol)
                .put("algorithm", *algorithm)
                .put("key", b64(key));
        }
        RecordData::DS {
            key_tag,
            algorithm,
            digest_type,
            digest,
        } => {
            out.put("key_tag", *key_tag)
                .put("algorithm", *algorithm)
                .put("digest_type", *digest_type)
                .put("digest", hex(digest));
        }
        RecordData::HINFO { cpu, os } => {
            out.put("cpu", text(cpu)).put("os", text(os));
        }
        RecordData::LOC(loc) => {
            out.put("latitude", coordinate(loc.latitude))
                .put("longitude", coordinate(loc.longitude))
                .put("altitude", loc.altitude_cm())
                .put("size", loc.size_cm())
                .put("horizontal_precision", loc.horizontal_precision_cm())
                .put("vertical_precision", loc.vertical_precision_cm());
        }
        RecordData::MX {
            preference,
            exchange,
        } => {
            out.put("preference", *preference)
                .put("exchange", exchange.to_string());
        }
        RecordData::NAPTR {
            order,
            preference,
            flags,
            service,
            regexp,
            replacement,
        } => {
            out.put("order", *order)
                .put("preference", *preference)
                .put("flags", text(flags))
                .put("service", text(service))
                .put("regexp", text(regexp))
                .put("replacement", replacement.to_string());
        }
        RecordData::NSEC { next, types } => {
            out.put("next", next.to_string())
                .put("windows", windows(types));
        }
        RecordData::NSEC3 {
            algorithm,
            flags,
            iterations,
            salt,
            next,
            types,
        } => {
            out.put("algorithm", *algorithm)
                .put("flags", *flags)
                .put("iterations", *iterations)
                .put("salt", hex(salt))
                .put("next", BASE32HEX_NOPAD.encode(next).to_lowercase())
                .put("windows", windows(types));
        }
        RecordData::NSEC3PARAM {
            algorithm,
            flags,
            iterations,
            salt,
        } => {
            out.put("algorithm", *algorithm)
                .put("flags", *flags)
                .put("iterations", *iterations)
                .put("salt", hex(salt));
        }
        RecordData::RP { mbox, txt } => {
            out.put("mbox", mbox.to_string())
                .put("txt", txt.to_string());
        }
        RecordData::RRSIG {
            type_covered,
            algorithm,
            labels,
            original_ttl,
            expiration,
            inception,
            key_tag,
            signer,
            signature,
        } => {
            out.put("type_covered", type_mnemonic(*type_covered).into_owned())
                .put("algorithm", *algorithm)
                .put("labels", *labels)
                .put("original_ttl", *original_ttl)
                .put("expiration", *expiration)
                .put("inception", *inception)
                .put("key_tag", *key_tag)
                .put("signer", signer.to_string())
                .put("signature", b64(signature));
        }
        RecordData::SOA {
            mname,
            rname,
            serial,
            refresh,
            retry,
            expire,
            minimum,
        } => {
            out.put("mname", mname.to_string())
                .put("rname", rname.to_string())
                .put("serial", *serial)
                .put("refresh", *refresh)
                .put("retry", *retry)
                .put("expire", *expire)
                .put("minimum", *minimum);
        }
        RecordData::SPF { strings: parts } | RecordData::TXT { strings: parts } => {
            let (list, joined) = strings(parts);
            out.put("strings", list).put("value", joined);
        }
        RecordData::SRV {
            priority,
            weight,
            port,
            target,
        } => {
            out.put("priority", *priority)
                .put("weight", *weight)
                .put("port", *port)
                .put("target", target.to_string());
        }
        RecordData::SSHFP {
            algorithm,
            fp_type,
            fingerprint,
        } => {
            out.put("algorithm", *algorithm)
                .put("fp_type", *fp_type)
                .put("fingerprint", hex(fingerprint));
        }
        RecordData::TLSA {
            usage,
            selector,
            mtype,
            cert,
        } => {
            out.put("usage", *usage)
                .put("selector", *selector)
                .put("mtype", *mtype)
                .put("cert", hex(cert));
        }
    }
    out
}
