//! Abstract contracts for the external collaborators the orchestrator
//! drives. Implementations own their transport (HTTP backend, wallet RPC,
//! chain RPC, relay API); the orchestrator only sequences the calls and
//! propagates their failures unchanged.

pub mod mock;

use crate::domain::model::{AccountState, ConnectedIdentity, ExecutionOptions, ProviderHandle, SignerKind, TransactionDraft};
use crate::foundation::{Result, TxId};
use alloy::primitives::{Address, B256};
use async_trait::async_trait;

/// Durable draft registration with the coordination backend.
#[async_trait]
pub trait ProposalGateway: Send + Sync {
    /// Record a draft (or update the record behind `existing`) and return
    /// the backend identifier. `origin` is provenance metadata stored
    /// alongside the record. Fails with `QuorumError::Backend`.
    async fn propose(
        &self,
        draft: &TransactionDraft,
        digest: B256,
        existing: Option<&TxId>,
        origin: Option<&str>,
    ) -> Result<TxId>;
}

/// Capabilities supplied by the connected wallet.
#[async_trait]
pub trait WalletBridge: Send + Sync {
    /// Resolve whether the identity is a plain key pair or a contract
    /// account. Queried once per orchestrator invocation.
    async fn signer_kind(&self, identity: &ConnectedIdentity) -> Result<SignerKind>;

    /// Produce an off-chain signature and return the draft with the new
    /// record merged in. Fails with `QuorumError::SigningRejected`.
    async fn sign_offchain(&self, draft: TransactionDraft, account: &AccountState) -> Result<TransactionDraft>;

    /// Submit an on-chain approval transaction for the draft. The resulting
    /// signature is observed later through account-state refresh, never
    /// merged locally. Fails with `QuorumError::Chain`.
    async fn sign_onchain(&self, draft: &TransactionDraft, tx_id: &TxId) -> Result<()>;
}

/// Direct on-chain execution dispatch.
#[async_trait]
pub trait ChainDispatcher: Send + Sync {
    /// Submit the draft for execution; returns the submitted transaction
    /// hash. Fails with `QuorumError::Chain`.
    async fn execute(&self, options: &ExecutionOptions, provider: &ProviderHandle, draft: &TransactionDraft) -> Result<B256>;
}

/// Fee-paying relay submission.
#[async_trait]
pub trait RelayGateway: Send + Sync {
    /// Hand a signed draft plus its encoded signature blob to the relay.
    /// Fails with `QuorumError::Relay`.
    async fn submit(&self, draft: &TransactionDraft, encoded_signatures: Vec<u8>, origin: Option<&str>) -> Result<()>;
}

/// View over the account's queue of proposed-but-not-executed transactions.
#[async_trait]
pub trait PendingView: Send + Sync {
    async fn has_pending(&self, account: &Address) -> Result<bool>;
}
