mod name;
mod normalize;
mod record_data;
mod record_type;

pub use name::DnsName;
pub use normalize::{normalize, NormalizedRecord};
pub use record_data::{LocData, RecordData, LOC_ALTITUDE_BASE, LOC_EQUATOR};
pub use record_type::{type_mnemonic, RecordType};
