use ferrous_lookup_domain::{DnsName, LocData, RecordData, RecordType};
use ferrous_lookup_domain::dns_record::{LOC_ALTITUDE_BASE, LOC_EQUATOR};
use std::net::{Ipv4Addr, Ipv6Addr};

pub fn name(text: &str) -> DnsName {
    DnsName::from_ascii(text)
}

/// One representative payload per supported record type.
pub fn sample_record(record_type: RecordType) -> RecordData {
    match record_type {
        RecordType::A => RecordData::A {
            address: Ipv4Addr::new(192, 0, 2, 1),
        },
        RecordType::AAAA => RecordData::AAAA {
            address: "2001:db8::1".parse::<Ipv6Addr>().unwrap(),
        },
        RecordType::CAA => RecordData::CAA {
            flags: 0,
            tag: b"issue".to_vec(),
            value: b"letsencrypt.org".to_vec(),
        },
        RecordType::CNAME => RecordData::CNAME {
            target: name("www.example.com"),
        },
        RecordType::DNAME => RecordData::DNAME {
            target: name("example.net"),
        },
        RecordType::DNSKEY => RecordData::DNSKEY {
            flags: 257,
            protocol: 3,
            algorithm: 13,
            key: vec![0x01, 0x02, 0x03, 0x04],
        },
        RecordType::DS => RecordData::DS {
            key_tag: 12345,
            algorithm: 13,
            digest_type: 2,
            digest: vec![0xde, 0xad, 0xbe, 0xef],
        },
        RecordType::HINFO => RecordData::HINFO {
            cpu: b"x86_64".to_vec(),
            os: b"Linux".to_vec(),
        },
        RecordType::LOC => RecordData::LOC(LocData {
            version: 0,
            size: 0x12,
            horizontal_precision: 0x16,
            vertical_precision: 0x13,
            latitude: LOC_EQUATOR + 152_514_000,
            longitude: LOC_EQUATOR - 255_978_123,
            altitude: LOC_ALTITUDE_BASE + 2_400,
        }),
        RecordType::MX => RecordData::MX {
            preference: 10,
            exchange: name("mail.example.com"),
        },
        RecordType::NAPTR => RecordData::NAPTR {
            order: 100,
            preference: 10,
            flags: b"S".to_vec(),
            service: b"SIP+D2U".to_vec(),
            regexp: Vec::new(),
            replacement: name("_sip._udp.example.com"),
        },
        RecordType::NS => RecordData::NS {
            target: name("ns1.example.com"),
        },
        RecordType::NSEC => RecordData::NSEC {
            next: name("host.example.com"),
            types: vec![1, 15, 46, 47],
        },
        RecordType::NSEC3 => RecordData::NSEC3 {
            algorithm: 1,
            flags: 1,
            iterations: 10,
            salt: vec![0xaa, 0xbb],
            next: vec![0x00; 5],
            types: vec![1, 28],
        },
        RecordType::NSEC3PARAM => RecordData::NSEC3PARAM {
            algorithm: 1,
            flags: 0,
            iterations: 0,
            salt: vec![0xab, 0xcd],
        },
        RecordType::PTR => RecordData::PTR {
            target: name("host.example.com"),
        },
        RecordType::RP => RecordData::RP {
            mbox: name("admin.example.com"),
            txt: DnsName::root(),
        },
        RecordType::RRSIG => RecordData::RRSIG {
            type_covered: 1,
            algorithm: 13,
            labels: 2,
            original_ttl: 3600,
            expiration: 1_700_086_400,
            inception: 1_700_000_000,
            key_tag: 4242,
            signer: name("example.com"),
            signature: vec![0xff, 0xee],
        },
        RecordType::SOA => RecordData::SOA {
            mname: name("ns1.example.com"),
            rname: name("hostmaster.example.com"),
            serial: 2024010101,
            refresh: 7200,
            retry: 3600,
            expire: 1_209_600,
            minimum: 300,
        },
        RecordType::SPF => RecordData::SPF {
            strings: vec![b"v=spf1 -all".to_vec()],
        },
        RecordType::SRV => RecordData::SRV {
            priority: 10,
            weight: 60,
            port: 5060,
            target: name("sip.example.com"),
        },
        RecordType::SSHFP => RecordData::SSHFP {
            algorithm: 4,
            fp_type: 2,
            fingerprint: vec![0x12, 0x34],
        },
        RecordType::TLSA => RecordData::TLSA {
            usage: 3,
            selector: 1,
            mtype: 1,
            cert: vec![0x0a, 0x0b],
        },
        RecordType::TXT => RecordData::TXT {
            strings: vec![b"hello".to_vec(), b" world".to_vec()],
        },
    }
}
