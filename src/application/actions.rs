use crate::application::lifecycle::{FlowObserver, NoopObserver};
use crate::domain::hashes::tx_digest;
use crate::domain::model::{
    AccountState, ConnectedIdentity, ExecutionOptions, ProviderHandle, SignerKind, TransactionDraft,
};
use crate::foundation::{QuorumError, Result, TxId};
use crate::infrastructure::gateway::{ChainDispatcher, ProposalGateway, RelayGateway, WalletBridge};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Result of a signing invocation.
///
/// Steps never mutate a shared draft in place; the updated value is returned
/// here and replaces whatever the caller held. On the on-chain signing path
/// the draft comes back unchanged (the approval lands in account state).
#[derive(Clone, Debug)]
pub struct SignOutcome {
    pub tx_id: TxId,
    pub draft: TransactionDraft,
}

/// Signing and execution orchestrator for one account/signer snapshot.
///
/// Captures read-only `AccountState` and `ConnectedIdentity` snapshots at
/// construction; rebuild after a chain or signer switch. Within one
/// invocation the steps run strictly in the documented order (propose, sign,
/// submit or relay) because each one consumes state the previous produced.
/// Concurrent invocations over the same draft value are the caller's race to
/// serialize.
pub struct TxActions {
    account: AccountState,
    identity: ConnectedIdentity,
    proposal: Arc<dyn ProposalGateway>,
    wallet: Arc<dyn WalletBridge>,
    chain: Arc<dyn ChainDispatcher>,
    relay: Arc<dyn RelayGateway>,
    lifecycle: Arc<dyn FlowObserver>,
}

impl TxActions {
    pub fn new(
        account: AccountState,
        identity: ConnectedIdentity,
        proposal: Arc<dyn ProposalGateway>,
        wallet: Arc<dyn WalletBridge>,
        chain: Arc<dyn ChainDispatcher>,
        relay: Arc<dyn RelayGateway>,
    ) -> Self {
        Self { account, identity, proposal, wallet, chain, relay, lifecycle: Arc::new(NoopObserver) }
    }

    pub fn set_flow_observer(&mut self, observer: Arc<dyn FlowObserver>) {
        self.lifecycle = observer;
    }

    /// Add the connected signer's authorization to a draft.
    ///
    /// Contract signers approve on-chain: the draft is proposed first when no
    /// identifier exists (the approval is indexed against it), the supplied
    /// identifier is returned unchanged otherwise, and the local signature
    /// set stays untouched. Key signers sign off-chain: the signed draft is
    /// always proposed — a supplied identifier is forwarded so the backend
    /// updates its record instead of duplicating it — and the backend's
    /// identifier is authoritative.
    pub async fn sign_tx(
        &self,
        draft: Option<TransactionDraft>,
        tx_id: Option<TxId>,
        origin: Option<&str>,
    ) -> Result<SignOutcome> {
        let draft = draft.ok_or(QuorumError::MissingTransaction)?;
        let digest = tx_digest(&draft, &self.account);
        debug!(digest = %digest, nonce = draft.nonce, has_existing_id = tx_id.is_some(), "signing transaction");

        match self.wallet.signer_kind(&self.identity).await? {
            SignerKind::Contract => {
                let tx_id = match tx_id {
                    Some(tx_id) => tx_id,
                    None => self.propose(&draft, None, origin).await?,
                };
                self.wallet.sign_onchain(&draft, &tx_id).await?;
                info!(tx_id = %tx_id, signer = %self.identity.address, "on-chain approval submitted");
                self.lifecycle.on_signed_onchain(&tx_id, &self.identity.address);
                Ok(SignOutcome { tx_id, draft })
            }
            SignerKind::Key => {
                let signed = self.wallet.sign_offchain(draft, &self.account).await?;
                self.lifecycle.on_signed_offchain(&self.identity.address, &signed);
                let tx_id = self.propose(&signed, tx_id.as_ref(), origin).await?;
                info!(
                    tx_id = %tx_id,
                    signer = %self.identity.address,
                    signature_count = signed.signature_count(),
                    "off-chain signature recorded"
                );
                Ok(SignOutcome { tx_id, draft: signed })
            }
        }
    }

    /// Execute a draft, either directly on-chain or through the fee relay.
    ///
    /// A relayed draft must carry a full signature set; when it does not, the
    /// connected signer's own signature is collected first (impossible for a
    /// contract signer, which cannot sign off-chain synchronously — that
    /// request fails before any collaborator runs). A draft without an
    /// identifier is proposed exactly once before submission. Collaborator
    /// failures propagate unchanged; nothing here retries.
    pub async fn execute_tx(
        &self,
        options: ExecutionOptions,
        provider: &ProviderHandle,
        draft: Option<TransactionDraft>,
        tx_id: Option<TxId>,
        origin: Option<&str>,
        relay: bool,
    ) -> Result<TxId> {
        let mut draft = draft.ok_or(QuorumError::MissingTransaction)?;
        let mut tx_id = tx_id;
        debug!(
            nonce = draft.nonce,
            relay,
            signature_count = draft.signature_count(),
            threshold = self.account.threshold,
            "executing transaction"
        );

        if relay && !draft.is_fully_signed(self.account.threshold) {
            if self.wallet.signer_kind(&self.identity).await? == SignerKind::Contract {
                warn!(signer = %self.identity.address, "rejecting relay request: contract signer cannot complete the signature set");
                return Err(QuorumError::UnsignedContractRelay);
            }
            if tx_id.is_none() {
                tx_id = Some(self.propose(&draft, None, origin).await?);
            }
            let signed = self.wallet.sign_offchain(draft, &self.account).await?;
            self.lifecycle.on_signed_offchain(&self.identity.address, &signed);
            tx_id = Some(self.propose(&signed, tx_id.as_ref(), origin).await?);
            draft = signed;
        }

        let tx_id = match tx_id {
            Some(tx_id) => tx_id,
            None => self.propose(&draft, None, origin).await?,
        };

        if relay {
            self.relay.submit(&draft, draft.encoded_signatures(), origin).await?;
            info!(tx_id = %tx_id, "transaction handed to relay");
            self.lifecycle.on_relayed(&tx_id);
        } else {
            let tx_hash = self.chain.execute(&options, provider, &draft).await?;
            info!(tx_id = %tx_id, tx_hash = %tx_hash, "transaction submitted on-chain");
            self.lifecycle.on_executed(&tx_id, &tx_hash);
        }
        Ok(tx_id)
    }

    async fn propose(&self, draft: &TransactionDraft, existing: Option<&TxId>, origin: Option<&str>) -> Result<TxId> {
        let digest = tx_digest(draft, &self.account);
        let tx_id = self.proposal.propose(draft, digest, existing, origin).await?;
        debug!(tx_id = %tx_id, digest = %digest, updated = existing.is_some(), "draft proposed");
        self.lifecycle.on_proposed(&tx_id, draft);
        Ok(tx_id)
    }
}
