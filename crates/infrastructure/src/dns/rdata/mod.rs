//! Conversion of hickory RDATA into the supported record types.
mod decoder;

pub use decoder::RdataDecoder;
