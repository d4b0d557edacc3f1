//! Scriptable in-memory collaborators for orchestration tests.
//!
//! Every mock journals its invocations so tests can assert which
//! collaborators ran, how often, and in what order across collaborators
//! (via a shared [`CallSequence`]).

use super::{ChainDispatcher, PendingView, ProposalGateway, RelayGateway, WalletBridge};
use crate::domain::model::{AccountState, ConnectedIdentity, ExecutionOptions, ProviderHandle, SignerKind, TransactionDraft};
use crate::domain::signature::SignatureRecord;
use crate::foundation::{QuorumError, Result, TxId};
use alloy::primitives::{Address, B256};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared journal of collaborator labels, in invocation order.
#[derive(Default)]
pub struct CallSequence {
    entries: Mutex<Vec<String>>,
}

impl CallSequence {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    async fn record(&self, label: &str) {
        self.entries.lock().await.push(label.to_string());
    }

    pub async fn entries(&self) -> Vec<String> {
        self.entries.lock().await.clone()
    }
}

async fn record(sequence: &Option<Arc<CallSequence>>, label: &str) {
    if let Some(sequence) = sequence {
        sequence.record(label).await;
    }
}

#[derive(Clone, Debug)]
pub struct ProposeCall {
    pub signature_count: usize,
    pub digest: B256,
    pub existing: Option<TxId>,
    pub origin: Option<String>,
}

pub struct MockProposalGateway {
    next_id: TxId,
    fail_with: Option<String>,
    count: AtomicUsize,
    calls: Mutex<Vec<ProposeCall>>,
    sequence: Option<Arc<CallSequence>>,
}

impl MockProposalGateway {
    /// A gateway assigning `id` to every proposal.
    pub fn returning(id: &str) -> Self {
        Self { next_id: TxId::from(id), fail_with: None, count: AtomicUsize::new(0), calls: Mutex::new(Vec::new()), sequence: None }
    }

    pub fn failing(message: &str) -> Self {
        let mut gateway = Self::returning("");
        gateway.fail_with = Some(message.to_string());
        gateway
    }

    pub fn with_sequence(mut self, sequence: Arc<CallSequence>) -> Self {
        self.sequence = Some(sequence);
        self
    }

    pub fn call_count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    pub async fn calls(&self) -> Vec<ProposeCall> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl ProposalGateway for MockProposalGateway {
    async fn propose(
        &self,
        draft: &TransactionDraft,
        digest: B256,
        existing: Option<&TxId>,
        origin: Option<&str>,
    ) -> Result<TxId> {
        record(&self.sequence, "propose").await;
        self.count.fetch_add(1, Ordering::SeqCst);
        self.calls.lock().await.push(ProposeCall {
            signature_count: draft.signature_count(),
            digest,
            existing: existing.cloned(),
            origin: origin.map(str::to_string),
        });
        if let Some(message) = &self.fail_with {
            return Err(QuorumError::Backend(message.clone()));
        }
        Ok(self.next_id.clone())
    }
}

pub struct MockWalletBridge {
    kind: SignerKind,
    signer: Address,
    signature_bytes: Vec<u8>,
    reject_with: Option<String>,
    offchain_count: AtomicUsize,
    onchain_count: AtomicUsize,
    sequence: Option<Arc<CallSequence>>,
}

impl MockWalletBridge {
    /// A plain key-pair wallet signing as `signer`.
    pub fn key_signer(signer: Address) -> Self {
        Self {
            kind: SignerKind::Key,
            signer,
            signature_bytes: vec![0x01; 65],
            reject_with: None,
            offchain_count: AtomicUsize::new(0),
            onchain_count: AtomicUsize::new(0),
            sequence: None,
        }
    }

    /// A contract-account wallet; off-chain signing is never expected here.
    pub fn contract_signer(signer: Address) -> Self {
        let mut wallet = Self::key_signer(signer);
        wallet.kind = SignerKind::Contract;
        wallet
    }

    /// A key wallet whose user declines every signature request.
    pub fn rejecting(signer: Address, message: &str) -> Self {
        let mut wallet = Self::key_signer(signer);
        wallet.reject_with = Some(message.to_string());
        wallet
    }

    pub fn with_signature_bytes(mut self, bytes: Vec<u8>) -> Self {
        self.signature_bytes = bytes;
        self
    }

    pub fn with_sequence(mut self, sequence: Arc<CallSequence>) -> Self {
        self.sequence = Some(sequence);
        self
    }

    pub fn offchain_call_count(&self) -> usize {
        self.offchain_count.load(Ordering::SeqCst)
    }

    pub fn onchain_call_count(&self) -> usize {
        self.onchain_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WalletBridge for MockWalletBridge {
    async fn signer_kind(&self, _identity: &ConnectedIdentity) -> Result<SignerKind> {
        Ok(self.kind)
    }

    async fn sign_offchain(&self, mut draft: TransactionDraft, _account: &AccountState) -> Result<TransactionDraft> {
        record(&self.sequence, "sign_offchain").await;
        self.offchain_count.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.reject_with {
            return Err(QuorumError::SigningRejected(message.clone()));
        }
        draft.add_signature(SignatureRecord::new(self.signer, self.signature_bytes.clone()));
        Ok(draft)
    }

    async fn sign_onchain(&self, _draft: &TransactionDraft, _tx_id: &TxId) -> Result<()> {
        record(&self.sequence, "sign_onchain").await;
        self.onchain_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct ExecuteCall {
    pub chain_id: u64,
    pub signature_count: usize,
    pub gas_limit: Option<u64>,
}

pub struct MockChainDispatcher {
    tx_hash: B256,
    fail_with: Option<String>,
    count: AtomicUsize,
    calls: Mutex<Vec<ExecuteCall>>,
    sequence: Option<Arc<CallSequence>>,
}

impl MockChainDispatcher {
    pub fn new() -> Self {
        Self {
            tx_hash: B256::repeat_byte(0xaa),
            fail_with: None,
            count: AtomicUsize::new(0),
            calls: Mutex::new(Vec::new()),
            sequence: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        let mut dispatcher = Self::new();
        dispatcher.fail_with = Some(message.to_string());
        dispatcher
    }

    pub fn with_sequence(mut self, sequence: Arc<CallSequence>) -> Self {
        self.sequence = Some(sequence);
        self
    }

    pub fn call_count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    pub async fn calls(&self) -> Vec<ExecuteCall> {
        self.calls.lock().await.clone()
    }
}

impl Default for MockChainDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChainDispatcher for MockChainDispatcher {
    async fn execute(&self, options: &ExecutionOptions, provider: &ProviderHandle, draft: &TransactionDraft) -> Result<B256> {
        record(&self.sequence, "execute").await;
        self.count.fetch_add(1, Ordering::SeqCst);
        self.calls.lock().await.push(ExecuteCall {
            chain_id: provider.chain_id,
            signature_count: draft.signature_count(),
            gas_limit: options.gas_limit,
        });
        if let Some(message) = &self.fail_with {
            return Err(QuorumError::Chain(message.clone()));
        }
        Ok(self.tx_hash)
    }
}

#[derive(Clone, Debug)]
pub struct RelayCall {
    pub signature_count: usize,
    pub encoded_signatures: Vec<u8>,
    pub origin: Option<String>,
}

pub struct MockRelayGateway {
    fail_with: Option<String>,
    count: AtomicUsize,
    calls: Mutex<Vec<RelayCall>>,
    sequence: Option<Arc<CallSequence>>,
}

impl MockRelayGateway {
    pub fn new() -> Self {
        Self { fail_with: None, count: AtomicUsize::new(0), calls: Mutex::new(Vec::new()), sequence: None }
    }

    pub fn failing(message: &str) -> Self {
        let mut relay = Self::new();
        relay.fail_with = Some(message.to_string());
        relay
    }

    pub fn with_sequence(mut self, sequence: Arc<CallSequence>) -> Self {
        self.sequence = Some(sequence);
        self
    }

    pub fn call_count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    pub async fn calls(&self) -> Vec<RelayCall> {
        self.calls.lock().await.clone()
    }
}

impl Default for MockRelayGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RelayGateway for MockRelayGateway {
    async fn submit(&self, draft: &TransactionDraft, encoded_signatures: Vec<u8>, origin: Option<&str>) -> Result<()> {
        record(&self.sequence, "relay").await;
        self.count.fetch_add(1, Ordering::SeqCst);
        self.calls.lock().await.push(RelayCall {
            signature_count: draft.signature_count(),
            encoded_signatures,
            origin: origin.map(str::to_string),
        });
        if let Some(message) = &self.fail_with {
            return Err(QuorumError::Relay(message.clone()));
        }
        Ok(())
    }
}

/// Pending-queue view with a fixed answer.
pub struct StaticPendingView {
    pending: bool,
}

impl StaticPendingView {
    pub fn new(pending: bool) -> Self {
        Self { pending }
    }
}

#[async_trait]
impl PendingView for StaticPendingView {
    async fn has_pending(&self, _account: &Address) -> Result<bool> {
        Ok(self.pending)
    }
}
