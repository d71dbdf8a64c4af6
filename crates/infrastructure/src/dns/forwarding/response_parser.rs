use crate::dns::rdata::RdataDecoder;
use ferrous_lookup_domain::{DomainError, RecordData, RecordType};
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::Record;
use tracing::debug;

const HEADER_LEN: usize = 12;
const TC_BIT: u8 = 0x02;
const RCODE_MASK: u8 = 0x0F;

#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub id: u16,

    pub rcode: ResponseCode,

    pub truncated: bool,

    pub answers: Vec<Record>,
}

impl DnsResponse {
    pub fn is_nxdomain(&self) -> bool {
        self.rcode == ResponseCode::NXDomain
    }

    pub fn is_servfail(&self) -> bool {
        self.rcode == ResponseCode::ServFail
    }

    /// Codes after which the next server is asked.
    pub fn is_server_error(&self) -> bool {
        !matches!(self.rcode, ResponseCode::NoError | ResponseCode::NXDomain)
    }

    pub fn rcode_name(&self) -> String {
        ResponseParser::rcode_to_status(self.rcode)
    }

    /// Decodes the answers of `record_type`, in wire order.
    pub fn decode_answers(&self, record_type: RecordType) -> Result<Vec<RecordData>, DomainError> {
        let wanted = record_type.to_u16();
        self.answers
            .iter()
            .filter(|record| u16::from(record.record_type()) == wanted)
            .map(|record| RdataDecoder::decode(record.data()))
            .collect()
    }
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: Vec<u8>) -> Result<DnsResponse, DomainError> {
        if response_bytes.len() < HEADER_LEN {
            return Err(DomainError::InvalidDnsResponse(format!(
                "Response of {} bytes is shorter than a DNS header",
                response_bytes.len()
            )));
        }

        // A truncated message may end mid-record; only its header is usable.
        if response_bytes[2] & TC_BIT != 0 {
            return Ok(DnsResponse {
                id: u16::from_be_bytes([response_bytes[0], response_bytes[1]]),
                rcode: ResponseCode::from_low(response_bytes[3] & RCODE_MASK),
                truncated: true,
                answers: Vec::new(),
            });
        }

        let mut message = Message::from_vec(&response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        debug!(
            rcode = ?message.response_code(),
            answers = message.answers().len(),
            truncated = message.truncated(),
            "DNS response parsed"
        );

        Ok(DnsResponse {
            id: message.id(),
            rcode: message.response_code(),
            truncated: message.truncated(),
            answers: message.take_answers(),
        })
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> String {
        let name = match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::FormErr => "FORMERR",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::YXDomain => "YXDOMAIN",
            ResponseCode::YXRRSet => "YXRRSET",
            ResponseCode::NXRRSet => "NXRRSET",
            ResponseCode::NotAuth => "NOTAUTH",
            ResponseCode::NotZone => "NOTZONE",
            other => return format!("RCODE{}", u16::from(other)),
        };
        name.to_string()
    }
}
