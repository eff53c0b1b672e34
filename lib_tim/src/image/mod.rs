pub mod decoder;
pub mod format;
pub mod sniff;

pub use decoder::{can_decode, decode, DecodeOptions, TimDecoder};
