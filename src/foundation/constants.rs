//! System-wide constants for multisig orchestration.

/// One ABI word (32 bytes); encoded signature blobs are built from these.
pub const WORD_SIZE: usize = 32;

/// Size of one static signature slot: r (32) + s (32) + v (1).
pub const SIGNATURE_SLOT_SIZE: usize = 2 * WORD_SIZE + 1;

/// `v` value marking a contract (on-chain validated) signature slot.
pub const CONTRACT_SIGNATURE_V: u8 = 0x00;

/// Prefix bytes of a typed-data digest (`0x19 0x01`, EIP-712).
pub const EIP712_PREFIX: [u8; 2] = [0x19, 0x01];

/// Account contract version the digest preimages are pinned to.
pub const ACCOUNT_CONTRACT_VERSION: &str = "1.3.0";
