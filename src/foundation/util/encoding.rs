use crate::foundation::QuorumError;
use alloy::primitives::Address;

/// Decode a hex string, tolerating an optional `0x` prefix.
pub fn decode_hex(s: &str) -> Result<Vec<u8>, QuorumError> {
    hex::decode(s.trim_start_matches("0x")).map_err(|e| e.into())
}

pub fn parse_address(s: &str) -> Result<Address, QuorumError> {
    s.parse().map_err(|_| QuorumError::InvalidAddress(s.to_string()))
}
