use crate::domain::signature::{encode_signatures, SignatureRecord};
use alloy::primitives::{Address, U256};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Call semantics of the wrapped inner transaction.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    #[default]
    Call,
    DelegateCall,
}

impl OperationKind {
    /// Wire value as committed to by the account contract.
    pub const fn as_u8(self) -> u8 {
        match self {
            OperationKind::Call => 0,
            OperationKind::DelegateCall => 1,
        }
    }
}

/// Read-only snapshot of the multisig account.
///
/// Supplied by an external collaborator; the orchestrator never mutates it.
/// After a chain or signer switch the caller must obtain a fresh snapshot
/// before re-invoking any operation.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct AccountState {
    pub address: Address,
    pub owners: Vec<Address>,
    /// Minimum number of distinct owner signatures required for execution.
    pub threshold: u16,
    /// Next executable nonce as currently recorded on-chain.
    pub nonce: u64,
    pub chain_id: u64,
    /// Deployed account contract version, e.g. `"1.3.0"`.
    pub version: String,
}

impl AccountState {
    pub fn is_owner(&self, address: &Address) -> bool {
        self.owners.contains(address)
    }
}

/// The currently active signer. Read-only context, injected per call.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ConnectedIdentity {
    pub address: Address,
    pub chain_id: u64,
}

/// Signer capability, resolved once per orchestrator invocation through the
/// async wallet capability check and then dispatched through explicit
/// conditionals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignerKind {
    /// Plain key pair; signs off-chain.
    Key,
    /// Smart-contract account; authorization is validated on-chain, so the
    /// signature takes the form of an approval transaction.
    Contract,
}

/// An unsubmitted or partially signed multisig action.
///
/// The transaction fields are fixed at construction. Only the signature set
/// grows, and only through [`TransactionDraft::add_signature`]; re-signing by
/// the same owner overwrites, never duplicates. The `nonce` is compared
/// against the account snapshot at validation time and never rewritten here.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct TransactionDraft {
    pub destination: Address,
    pub value: U256,
    pub call_data: Vec<u8>,
    pub operation: OperationKind,
    /// Gas reserved for the inner call.
    #[serde(default)]
    pub tx_gas: U256,
    /// Base gas refunded to the submitter, independent of the inner call.
    #[serde(default)]
    pub base_gas: U256,
    /// Refund price per gas unit; zero disables refunds.
    #[serde(default)]
    pub gas_price: U256,
    /// Token the refund is paid in; zero address means native currency.
    #[serde(default)]
    pub gas_token: Address,
    /// Refund recipient; zero address means the submitting sender.
    #[serde(default)]
    pub refund_receiver: Address,
    pub nonce: u64,
    #[serde(default)]
    pub signatures: BTreeMap<Address, SignatureRecord>,
}

impl TransactionDraft {
    /// A fresh draft with zeroed refund parameters and no signatures.
    pub fn new(destination: Address, value: U256, call_data: Vec<u8>, operation: OperationKind, nonce: u64) -> Self {
        Self {
            destination,
            value,
            call_data,
            operation,
            tx_gas: U256::ZERO,
            base_gas: U256::ZERO,
            gas_price: U256::ZERO,
            gas_token: Address::ZERO,
            refund_receiver: Address::ZERO,
            nonce,
            signatures: BTreeMap::new(),
        }
    }

    /// Merge a signature record, replacing any previous record by the same signer.
    pub fn add_signature(&mut self, record: SignatureRecord) {
        self.signatures.insert(record.signer, record);
    }

    pub fn signature_count(&self) -> usize {
        self.signatures.len()
    }

    pub fn has_signature_from(&self, signer: &Address) -> bool {
        self.signatures.contains_key(signer)
    }

    /// Whether the accumulated signatures satisfy the account threshold.
    pub fn is_fully_signed(&self, threshold: u16) -> bool {
        self.signatures.len() >= threshold as usize
    }

    /// The signature blob consumed by the on-chain execution step.
    pub fn encoded_signatures(&self) -> Vec<u8> {
        encode_signatures(self.signatures.values())
    }
}

/// Fee parameters forwarded verbatim to the chain dispatch step.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ExecutionOptions {
    #[serde(default)]
    pub gas_limit: Option<u64>,
    #[serde(default)]
    pub gas_price: Option<U256>,
    #[serde(default)]
    pub max_fee_per_gas: Option<U256>,
    #[serde(default)]
    pub max_priority_fee_per_gas: Option<U256>,
    /// Override for the submitting signer's own account nonce.
    #[serde(default)]
    pub nonce: Option<u64>,
}

/// Connectivity handle for the chain the account lives on.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ProviderHandle {
    pub chain_id: u64,
    pub rpc_url: String,
}
