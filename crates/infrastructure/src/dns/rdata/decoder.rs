use ferrous_lookup_domain::{DnsName, DomainError, LocData, RecordData, RecordType};
use hickory_proto::dnssec::rdata::DNSSECRData;
use hickory_proto::dnssec::PublicKey;
use hickory_proto::rr::{Name, RData};
use hickory_proto::serialize::binary::{BinDecodable, BinDecoder};

/// DNSKEY protocol field; hickory refuses keys carrying any other value.
const DNSKEY_PROTOCOL: u8 = 3;

/// Converts hickory's typed RDATA into [`RecordData`].
///
/// Types hickory has no parser for (LOC, RP, SPF, DNAME) arrive as
/// `RData::Unknown` and are decoded here from their raw bytes.
pub struct RdataDecoder;

impl RdataDecoder {
    pub fn decode(rdata: &RData) -> Result<RecordData, DomainError> {
        let data = match rdata {
            RData::A(a) => RecordData::A { address: a.0 },
            RData::AAAA(aaaa) => RecordData::AAAA { address: aaaa.0 },
            RData::CAA(caa) => RecordData::CAA {
                flags: caa.flags(),
                tag: caa.tag().as_bytes().to_vec(),
                value: caa.raw_value().to_vec(),
            },
            RData::CNAME(cname) => RecordData::CNAME {
                target: dns_name(&cname.0),
            },
            RData::HINFO(hinfo) => RecordData::HINFO {
                cpu: hinfo.cpu().to_vec(),
                os: hinfo.os().to_vec(),
            },
            RData::MX(mx) => RecordData::MX {
                preference: mx.preference(),
                exchange: dns_name(mx.exchange()),
            },
            RData::NAPTR(naptr) => RecordData::NAPTR {
                order: naptr.order(),
                preference: naptr.preference(),
                flags: naptr.flags().to_vec(),
                service: naptr.services().to_vec(),
                regexp: naptr.regexp().to_vec(),
                replacement: dns_name(naptr.replacement()),
            },
            RData::NS(ns) => RecordData::NS {
                target: dns_name(&ns.0),
            },
            RData::PTR(ptr) => RecordData::PTR {
                target: dns_name(&ptr.0),
            },
            // hickory keeps the signed-looking timers as i32; the wire value is unsigned
            RData::SOA(soa) => RecordData::SOA {
                mname: dns_name(soa.mname()),
                rname: dns_name(soa.rname()),
                serial: soa.serial(),
                refresh: soa.refresh() as u32,
                retry: soa.retry() as u32,
                expire: soa.expire() as u32,
                minimum: soa.minimum(),
            },
            RData::SRV(srv) => RecordData::SRV {
                priority: srv.priority(),
                weight: srv.weight(),
                port: srv.port(),
                target: dns_name(srv.target()),
            },
            RData::SSHFP(sshfp) => RecordData::SSHFP {
                algorithm: u8::from(sshfp.algorithm()),
                fp_type: u8::from(sshfp.fingerprint_type()),
                fingerprint: sshfp.fingerprint().to_vec(),
            },
            RData::TLSA(tlsa) => RecordData::TLSA {
                usage: u8::from(tlsa.cert_usage()),
                selector: u8::from(tlsa.selector()),
                mtype: u8::from(tlsa.matching()),
                cert: tlsa.cert_data().to_vec(),
            },
            RData::TXT(txt) => RecordData::TXT {
                strings: txt.txt_data().iter().map(|s| s.to_vec()).collect(),
            },
            RData::DNSSEC(dnssec) => decode_dnssec(dnssec)?,
            RData::Unknown { code, rdata } => decode_raw(u16::from(*code), rdata.anything())?,
            // zero-length RDATA
            RData::Update0(record_type) => decode_raw(u16::from(*record_type), &[])?,
            other => return Err(unsupported(u16::from(other.record_type()))),
        };
        Ok(data)
    }
}

fn decode_dnssec(rdata: &DNSSECRData) -> Result<RecordData, DomainError> {
    let data = match rdata {
        DNSSECRData::DNSKEY(dnskey) => RecordData::DNSKEY {
            flags: dnskey.flags(),
            protocol: DNSKEY_PROTOCOL,
            algorithm: u8::from(dnskey.public_key().algorithm()),
            key: dnskey.public_key().public_bytes().to_vec(),
        },
        DNSSECRData::DS(ds) => RecordData::DS {
            key_tag: ds.key_tag(),
            algorithm: u8::from(ds.algorithm()),
            digest_type: u8::from(ds.digest_type()),
            digest: ds.digest().to_vec(),
        },
        DNSSECRData::NSEC(nsec) => RecordData::NSEC {
            next: dns_name(nsec.next_domain_name()),
            types: nsec.type_bit_maps().map(u16::from).collect(),
        },
        DNSSECRData::NSEC3(nsec3) => RecordData::NSEC3 {
            algorithm: u8::from(nsec3.hash_algorithm()),
            flags: nsec3.flags(),
            iterations: nsec3.iterations(),
            salt: nsec3.salt().to_vec(),
            next: nsec3.next_hashed_owner_name().to_vec(),
            types: nsec3.type_bit_maps().map(u16::from).collect(),
        },
        DNSSECRData::NSEC3PARAM(param) => RecordData::NSEC3PARAM {
            algorithm: u8::from(param.hash_algorithm()),
            flags: param.flags(),
            iterations: param.iterations(),
            salt: param.salt().to_vec(),
        },
        DNSSECRData::RRSIG(rrsig) => {
            let input = rrsig.input();
            RecordData::RRSIG {
                type_covered: u16::from(input.type_covered),
                algorithm: u8::from(input.algorithm),
                labels: input.num_labels,
                original_ttl: input.original_ttl,
                expiration: input.sig_expiration.get(),
                inception: input.sig_inception.get(),
                key_tag: input.key_tag,
                signer: dns_name(&input.signer_name),
                signature: rrsig.sig().to_vec(),
            }
        }
        _ => {
            return Err(DomainError::UnsupportedRecordType(
                "Unsupported DNSSEC record".to_string(),
            ))
        }
    };
    Ok(data)
}

/// Decodes RDATA of the types hickory leaves as raw bytes.
fn decode_raw(type_code: u16, rdata: &[u8]) -> Result<RecordData, DomainError> {
    let record_type = RecordType::from_u16(type_code).ok_or_else(|| unsupported(type_code))?;
    let mut decoder = BinDecoder::new(rdata);

    let data = match record_type {
        RecordType::DNAME => RecordData::DNAME {
            target: read_name(&mut decoder)?,
        },
        RecordType::LOC => RecordData::LOC(read_loc(&mut decoder)?),
        RecordType::RP => RecordData::RP {
            mbox: read_name(&mut decoder)?,
            txt: read_name(&mut decoder)?,
        },
        RecordType::SPF | RecordType::TXT => {
            let mut strings = Vec::new();
            while !decoder.is_empty() {
                let string = decoder.read_character_data().map_err(malformed)?;
                strings.push(string.unverified().to_vec());
            }
            if record_type == RecordType::SPF {
                RecordData::SPF { strings }
            } else {
                RecordData::TXT { strings }
            }
        }
        _ => {
            return Err(DomainError::InvalidDnsResponse(format!(
                "{} record with empty RDATA",
                record_type
            )))
        }
    };

    if !decoder.is_empty() {
        return Err(DomainError::InvalidDnsResponse(format!(
            "{} RDATA has {} trailing bytes",
            record_type,
            decoder.len()
        )));
    }
    Ok(data)
}

fn read_loc(decoder: &mut BinDecoder<'_>) -> Result<LocData, DomainError> {
    let version = read_u8(decoder)?;
    if version != 0 {
        return Err(DomainError::InvalidDnsResponse(format!(
            "Unsupported LOC version {}",
            version
        )));
    }
    Ok(LocData {
        version,
        size: read_u8(decoder)?,
        horizontal_precision: read_u8(decoder)?,
        vertical_precision: read_u8(decoder)?,
        latitude: read_u32(decoder)?,
        longitude: read_u32(decoder)?,
        altitude: read_u32(decoder)?,
    })
}

fn read_u8(decoder: &mut BinDecoder<'_>) -> Result<u8, DomainError> {
    decoder
        .read_u8()
        .map(|v| v.unverified())
        .map_err(malformed)
}

fn read_u32(decoder: &mut BinDecoder<'_>) -> Result<u32, DomainError> {
    decoder
        .read_u32()
        .map(|v| v.unverified())
        .map_err(malformed)
}

fn read_name(decoder: &mut BinDecoder<'_>) -> Result<DnsName, DomainError> {
    Name::read(decoder).map(|name| dns_name(&name)).map_err(malformed)
}

fn dns_name(name: &Name) -> DnsName {
    DnsName::from_labels(name.iter().map(<[u8]>::to_vec).collect())
}

fn malformed(e: impl std::fmt::Display) -> DomainError {
    DomainError::InvalidDnsResponse(format!("Malformed RDATA: {}", e))
}

fn unsupported(type_code: u16) -> DomainError {
    DomainError::UnsupportedRecordType(format!("TYPE{}", type_code))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hickory_proto::rr::rdata::{A, NULL};
    use hickory_proto::rr::RecordType as WireType;
    use std::net::Ipv4Addr;

    fn raw(code: u16, bytes: &[u8]) -> RData {
        RData::Unknown {
            code: WireType::from(code),
            rdata: NULL::with(bytes.to_vec()),
        }
    }

    #[test]
    fn test_decode_a() {
        let data = RdataDecoder::decode(&RData::A(A(Ipv4Addr::new(192, 0, 2, 1)))).unwrap();
        assert_eq!(
            data,
            RecordData::A {
                address: Ipv4Addr::new(192, 0, 2, 1)
            }
        );
    }

    #[test]
    fn test_unknown_type_is_unsupported() {
        let err = RdataDecoder::decode(&raw(64, &[0, 1])).unwrap_err();
        assert_eq!(err, DomainError::UnsupportedRecordType("TYPE64".to_string()));
    }

    #[test]
    fn test_rp_names() {
        let data = RdataDecoder::decode(&raw(17, b"\x05admin\x07example\x00\x00")).unwrap();
        match data {
            RecordData::RP { mbox, txt } => {
                assert_eq!(mbox.to_string(), "admin.example.");
                assert_eq!(txt.to_string(), ".");
            }
            other => panic!("unexpected record {:?}", other),
        }
    }

    #[test]
    fn test_dname_with_trailing_bytes_rejected() {
        let err = RdataDecoder::decode(&raw(39, b"\x03net\x00\xff")).unwrap_err();
        assert!(matches!(err, DomainError::InvalidDnsResponse(_)));
    }

    #[test]
    fn test_empty_spf_has_no_strings() {
        let data = RdataDecoder::decode(&RData::Update0(WireType::from(99))).unwrap();
        assert_eq!(data, RecordData::SPF { strings: vec![] });
    }

    #[test]
    fn test_empty_rp_rejected() {
        assert!(RdataDecoder::decode(&RData::Update0(WireType::from(17))).is_err());
    }
}
