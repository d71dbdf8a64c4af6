use super::{DnsName, RecordType};
use std::net::{Ipv4Addr, Ipv6Addr};

/// Raw LOC fields as carried on the wire (RFC 1876).
///
/// `size` and both precisions are packed as `mantissa << 4 | exponent`
/// in centimetres. Latitude and longitude are thousandths of an arc second
/// offset by 2^31; altitude is centimetres offset by 100 000 m.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocData {
    pub version: u8,
    pub size: u8,
    pub horizontal_precision: u8,
    pub vertical_precision: u8,
    pub latitude: u32,
    pub longitude: u32,
    pub altitude: u32,
}

pub const LOC_EQUATOR: u32 = 1 << 31;
pub const LOC_ALTITUDE_BASE: u32 = 10_000_000;

impl LocData {
    fn packed_to_cm(packed: u8) -> f64 {
        let mantissa = f64::from(packed >> 4);
        let exponent = i32::from(packed & 0x0f);
        mantissa * 10f64.powi(exponent)
    }

    pub fn size_cm(&self) -> f64 {
        Self::packed_to_cm(self.size)
    }

    pub fn horizontal_precision_cm(&self) -> f64 {
        Self::packed_to_cm(self.horizontal_precision)
    }

    pub fn vertical_precision_cm(&self) -> f64 {
        Self::packed_to_cm(self.vertical_precision)
    }

    pub fn altitude_cm(&self) -> f64 {
        f64::from(self.altitude) - f64::from(LOC_ALTITUDE_BASE)
    }

    /// Splits a raw coordinate into `[degrees, minutes, seconds, milliseconds, sign]`.
    pub fn coordinate_tuple(raw: u32) -> [i64; 5] {
        let mut value = i64::from(raw) - i64::from(LOC_EQUATOR);
        let sign = if value < 0 {
            value = -value;
            -1
        } else {
            1
        };
        let degrees = value / 3_600_000;
        value -= degrees * 3_600_000;
        let minutes = value / 60_000;
        value -= minutes * 60_000;
        let seconds = value / 1000;
        let milliseconds = value - seconds * 1000;
        [degrees, minutes, seconds, milliseconds, sign]
    }
}

/// One decoded resource record payload. Each variant carries exactly the
/// fields of its record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A {
        address: Ipv4Addr,
    },
    AAAA {
        address: Ipv6Addr,
    },
    CAA {
        flags: u8,
        tag: Vec<u8>,
        value: Vec<u8>,
    },
    CNAME {
        target: DnsName,
    },
    DNAME {
        target: DnsName,
    },
    DNSKEY {
        flags: u16,
        protocol: u8,
        algorithm: u8,
        key: Vec<u8>,
    },
    DS {
        key_tag: u16,
        algorithm: u8,
        digest_type: u8,
        digest: Vec<u8>,
    },
    HINFO {
        cpu: Vec<u8>,
        os: Vec<u8>,
    },
    LOC(LocData),
    MX {
        preference: u16,
        exchange: DnsName,
    },
    NAPTR {
        order: u16,
        preference: u16,
        flags: Vec<u8>,
        service: Vec<u8>,
        regexp: Vec<u8>,
        replacement: DnsName,
    },
    NS {
        target: DnsName,
    },
    NSEC {
        next: DnsName,
        types: Vec<u16>,
    },
    NSEC3 {
        algorithm: u8,
        flags: u8,
        iterations: u16,
        salt: Vec<u8>,
        next: Vec<u8>,
        types: Vec<u16>,
    },
    NSEC3PARAM {
        algorithm: u8,
        flags: u8,
        iterations: u16,
        salt: Vec<u8>,
    },
    PTR {
        target: DnsName,
    },
    RP {
        mbox: DnsName,
        txt: DnsName,
    },
    RRSIG {
        type_covered: u16,
        algorithm: u8,
        labels: u8,
        original_ttl: u32,
        expiration: u32,
        inception: u32,
        key_tag: u16,
        signer: DnsName,
        signature: Vec<u8>,
    },
    SOA {
        mname: DnsName,
        rname: DnsName,
        serial: u32,
        refresh: u32,
        retry: u32,
        expire: u32,
        minimum: u32,
    },
    SPF {
        strings: Vec<Vec<u8>>,
    },
    SRV {
        priority: u16,
        weight: u16,
        port: u16,
        target: DnsName,
    },
    SSHFP {
        algorithm: u8,
        fp_type: u8,
        fingerprint: Vec<u8>,
    },
    TLSA {
        usage: u8,
        selector: u8,
        mtype: u8,
        cert: Vec<u8>,
    },
    TXT {
        strings: Vec<Vec<u8>>,
    },
}

impl RecordData {
    pub fn record_type(&self) -> RecordType {
        match self {
            RecordData::A { .. } => RecordType::A,
            RecordData::AAAA { .. } => RecordType::AAAA,
            RecordData::CAA { .. } => RecordType::CAA,
            RecordData::CNAME { .. } => RecordType::CNAME,
            RecordData::DNAME { .. } => RecordType::DNAME,
            RecordData::DNSKEY { .. } => RecordType::DNSKEY,
            RecordData::DS { .. } => RecordType::DS,
            RecordData::HINFO { .. } => RecordType::HINFO,
            RecordData::LOC(_) => RecordType::LOC,
            RecordData::MX { .. } => RecordType::MX,
            RecordData::NAPTR { .. } => RecordType::NAPTR,
            RecordData::NS { .. } => RecordType::NS,
            RecordData::NSEC { .. } => RecordType::NSEC,
            RecordData::NSEC3 { .. } => RecordType::NSEC3,
            RecordData::NSEC3PARAM { .. } => RecordType::NSEC3PARAM,
            RecordData::PTR { .. } => RecordType::PTR,
            RecordData::RP { .. } => RecordType::RP,
            RecordData::RRSIG { .. } => RecordType::RRSIG,
            RecordData::SOA { .. } => RecordType::SOA,
            RecordData::SPF { .. } => RecordType::SPF,
            RecordData::SRV { .. } => RecordType::SRV,
            RecordData::SSHFP { .. } => RecordType::SSHFP,
            RecordData::TLSA { .. } => RecordType::TLSA,
            RecordData::TXT { .. } => RecordType::TXT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_north() {
        // 42°21'54.000" N
        let raw = LOC_EQUATOR + (42 * 3_600_000 + 21 * 60_000 + 54_000);
        assert_eq!(LocData::coordinate_tuple(raw), [42, 21, 54, 0, 1]);
    }

    #[test]
    fn test_coordinate_west() {
        // 71°06'18.123" W
        let raw = LOC_EQUATOR - (71 * 3_600_000 + 6 * 60_000 + 18_123);
        assert_eq!(LocData::coordinate_tuple(raw), [71, 6, 18, 123, -1]);
    }

    #[test]
    fn test_packed_sizes() {
        let loc = LocData {
            version: 0,
            size: 0x12,
            horizontal_precision: 0x16,
            vertical_precision: 0x13,
            latitude: LOC_EQUATOR,
            longitude: LOC_EQUATOR,
            altitude: LOC_ALTITUDE_BASE - 2400,
        };
        assert_eq!(loc.size_cm(), 100.0);
        assert_eq!(loc.horizontal_precision_cm(), 1_000_000.0);
        assert_eq!(loc.vertical_precision_cm(), 1000.0);
        assert_eq!(loc.altitude_cm(), -2400.0);
    }
}
