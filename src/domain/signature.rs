//! Signature records and the encoded-blob serialization routine.
//!
//! The account contract consumes one concatenated byte string: a static
//! 65-byte slot per signer, ordered by ascending numeric signer address,
//! followed by the dynamic parts of any contract signatures. The encoding is
//! kept standalone from the draft so it can be exercised and reasoned about
//! in isolation.

use crate::foundation::constants::{CONTRACT_SIGNATURE_V, SIGNATURE_SLOT_SIZE, WORD_SIZE};
use alloy::primitives::{Address, U256};
use serde::{Deserialize, Serialize};

/// One owner's signature over a transaction draft.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct SignatureRecord {
    pub signer: Address,
    /// Opaque signature bytes as produced by the wallet. 65 bytes (r, s, v)
    /// for key signatures; free-form verifier payload for contract
    /// signatures.
    pub data: Vec<u8>,
    /// True when `data` must be validated by the signer contract on-chain
    /// rather than recovered as a key signature.
    #[serde(default)]
    pub contract_signature: bool,
}

impl SignatureRecord {
    pub fn new(signer: Address, data: Vec<u8>) -> Self {
        Self { signer, data, contract_signature: false }
    }

    pub fn contract(signer: Address, data: Vec<u8>) -> Self {
        Self { signer, data, contract_signature: true }
    }

    /// Fixed-position slot contributed to the head of the blob.
    ///
    /// Key signatures pass their raw bytes through. Contract signatures fill
    /// the slot with the verifier address word, the byte offset of their
    /// dynamic part (relative to the start of the blob) and `v = 0`.
    pub fn static_part(&self, dynamic_offset: usize) -> Vec<u8> {
        if !self.contract_signature {
            return self.data.clone();
        }
        let mut slot = Vec::with_capacity(SIGNATURE_SLOT_SIZE);
        slot.extend_from_slice(&self.signer.into_word().0);
        slot.extend_from_slice(&U256::from(dynamic_offset).to_be_bytes::<WORD_SIZE>());
        slot.push(CONTRACT_SIGNATURE_V);
        slot
    }

    /// Tail bytes appended after all static slots: a length word followed by
    /// the payload. Empty for key signatures.
    pub fn dynamic_part(&self) -> Vec<u8> {
        if !self.contract_signature {
            return Vec::new();
        }
        let mut part = Vec::with_capacity(WORD_SIZE + self.data.len());
        part.extend_from_slice(&U256::from(self.data.len()).to_be_bytes::<WORD_SIZE>());
        part.extend_from_slice(&self.data);
        part
    }
}

/// Concatenate signature records into the blob consumed by execution.
///
/// Records are ordered by ascending numeric signer address regardless of the
/// iteration order handed in; the account contract verifies signatures in
/// that order.
pub fn encode_signatures<'a>(records: impl IntoIterator<Item = &'a SignatureRecord>) -> Vec<u8> {
    let mut records: Vec<&SignatureRecord> = records.into_iter().collect();
    records.sort_by(|a, b| a.signer.cmp(&b.signer));

    let static_len: usize = records
        .iter()
        .map(|r| if r.contract_signature { SIGNATURE_SLOT_SIZE } else { r.data.len() })
        .sum();

    let mut static_parts = Vec::with_capacity(static_len);
    let mut dynamic_parts = Vec::new();
    for record in records {
        static_parts.extend_from_slice(&record.static_part(static_len + dynamic_parts.len()));
        dynamic_parts.extend_from_slice(&record.dynamic_part());
    }
    static_parts.extend_from_slice(&dynamic_parts);
    static_parts
}
