//! Mapping between `ferrous_lookup_domain::RecordType` and `hickory_proto::rr::RecordType`.
//!
//! Goes through the IANA type code so that types hickory only knows as
//! `Unknown` (LOC, RP, SPF, DNAME) keep their identity.

use ferrous_lookup_domain::RecordType;
use hickory_proto::rr::RecordType as HickoryRecordType;

/// Maps domain record types onto hickory's for building queries
pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Convert domain RecordType → hickory RecordType (for building queries)
    pub fn to_hickory(record_type: RecordType) -> HickoryRecordType {
        HickoryRecordType::from(record_type.to_u16())
    }
}
