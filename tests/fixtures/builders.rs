#![allow(dead_code)]

use crate::fixtures::{addr, key_signature, TEST_ACCOUNT_ADDRESS, TEST_CHAIN_ID, TEST_NONCE, TEST_OWNER_ONE, TEST_OWNER_TWO};
use alloy::primitives::{Address, U256};
use covault::domain::{AccountState, OperationKind, TransactionDraft};
use covault::foundation::ACCOUNT_CONTRACT_VERSION;

pub struct DraftBuilder {
    destination: Address,
    value: U256,
    call_data: Vec<u8>,
    operation: OperationKind,
    nonce: u64,
    signers: Vec<Address>,
}

impl Default for DraftBuilder {
    fn default() -> Self {
        Self {
            destination: Address::ZERO,
            value: U256::ZERO,
            call_data: Vec::new(),
            operation: OperationKind::Call,
            nonce: TEST_NONCE,
            signers: Vec::new(),
        }
    }
}

impl DraftBuilder {
    pub fn destination(mut self, destination: Address) -> Self {
        self.destination = destination;
        self
    }

    pub fn call_data(mut self, call_data: Vec<u8>) -> Self {
        self.call_data = call_data;
        self
    }

    pub fn operation(mut self, operation: OperationKind) -> Self {
        self.operation = operation;
        self
    }

    pub fn nonce(mut self, nonce: u64) -> Self {
        self.nonce = nonce;
        self
    }

    /// Add a key signature from `signer` (seed derived from the address).
    pub fn signed_by(mut self, signer: Address) -> Self {
        self.signers.push(signer);
        self
    }

    pub fn build(self) -> TransactionDraft {
        let mut draft = TransactionDraft::new(self.destination, self.value, self.call_data, self.operation, self.nonce);
        for signer in self.signers {
            draft.add_signature(key_signature(signer, signer.as_slice()[19]));
        }
        draft
    }
}

pub struct AccountStateBuilder {
    address: Address,
    owners: Vec<Address>,
    threshold: u16,
    nonce: u64,
    chain_id: u64,
}

impl Default for AccountStateBuilder {
    fn default() -> Self {
        Self {
            address: addr(TEST_ACCOUNT_ADDRESS),
            owners: vec![addr(TEST_OWNER_ONE), addr(TEST_OWNER_TWO)],
            threshold: 2,
            nonce: TEST_NONCE,
            chain_id: TEST_CHAIN_ID,
        }
    }
}

impl AccountStateBuilder {
    pub fn address(mut self, address: Address) -> Self {
        self.address = address;
        self
    }

    pub fn owners(mut self, owners: Vec<Address>) -> Self {
        self.owners = owners;
        self
    }

    pub fn threshold(mut self, threshold: u16) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn nonce(mut self, nonce: u64) -> Self {
        self.nonce = nonce;
        self
    }

    pub fn chain_id(mut self, chain_id: u64) -> Self {
        self.chain_id = chain_id;
        self
    }

    pub fn build(self) -> AccountState {
        AccountState {
            address: self.address,
            owners: self.owners,
            threshold: self.threshold,
            nonce: self.nonce,
            chain_id: self.chain_id,
            version: ACCOUNT_CONTRACT_VERSION.to_string(),
        }
    }
}
