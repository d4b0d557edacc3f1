//! Deterministic transaction digests.
//!
//! The proposal backend and the account contract identify a draft by the
//! same typed-data digest, so every byte here must match what the deployed
//! contracts hash. The preimage strings are wire constants fixed by the
//! v1.3.0 account contracts; they are not free to change.

use crate::domain::model::{AccountState, TransactionDraft};
use crate::foundation::constants::{EIP712_PREFIX, WORD_SIZE};
use alloy::primitives::{keccak256, Address, B256, U256};

const DOMAIN_TYPE: &[u8] = b"EIP712Domain(uint256 chainId,address verifyingContract)";
const TX_TYPE: &[u8] = b"SafeTx(address to,uint256 value,bytes data,uint8 operation,uint256 safeTxGas,uint256 baseGas,uint256 gasPrice,address gasToken,address refundReceiver,uint256 nonce)";

fn word(value: U256) -> [u8; WORD_SIZE] {
    value.to_be_bytes::<WORD_SIZE>()
}

fn address_word(address: Address) -> [u8; WORD_SIZE] {
    address.into_word().0
}

/// Separator binding a digest to one account on one chain.
pub fn domain_separator(chain_id: u64, account: Address) -> B256 {
    let mut preimage = Vec::with_capacity(3 * WORD_SIZE);
    preimage.extend_from_slice(keccak256(DOMAIN_TYPE).as_slice());
    preimage.extend_from_slice(&word(U256::from(chain_id)));
    preimage.extend_from_slice(&address_word(account));
    keccak256(&preimage)
}

/// Struct hash over the draft's transaction fields. `call_data` enters as
/// its keccak hash, everything else as one ABI word.
pub fn tx_struct_hash(draft: &TransactionDraft) -> B256 {
    let mut preimage = Vec::with_capacity(11 * WORD_SIZE);
    preimage.extend_from_slice(keccak256(TX_TYPE).as_slice());
    preimage.extend_from_slice(&address_word(draft.destination));
    preimage.extend_from_slice(&word(draft.value));
    preimage.extend_from_slice(keccak256(&draft.call_data).as_slice());
    preimage.extend_from_slice(&word(U256::from(draft.operation.as_u8())));
    preimage.extend_from_slice(&word(draft.tx_gas));
    preimage.extend_from_slice(&word(draft.base_gas));
    preimage.extend_from_slice(&word(draft.gas_price));
    preimage.extend_from_slice(&address_word(draft.gas_token));
    preimage.extend_from_slice(&address_word(draft.refund_receiver));
    preimage.extend_from_slice(&word(U256::from(draft.nonce)));
    keccak256(&preimage)
}

/// Full typed-data digest of a draft against an account snapshot.
///
/// This is the value owners sign off-chain and the handle the proposal
/// backend indexes drafts by.
pub fn tx_digest(draft: &TransactionDraft, account: &AccountState) -> B256 {
    let mut preimage = Vec::with_capacity(EIP712_PREFIX.len() + 2 * WORD_SIZE);
    preimage.extend_from_slice(&EIP712_PREFIX);
    preimage.extend_from_slice(domain_separator(account.chain_id, account.address).as_slice());
    preimage.extend_from_slice(tx_struct_hash(draft).as_slice());
    keccak256(&preimage)
}
