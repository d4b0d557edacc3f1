use crate::domain::model::TransactionDraft;
use crate::foundation::TxId;
use alloy::primitives::{Address, B256};
use log::{debug, info, trace};
use std::sync::Arc;

/// Hooks fired at the orchestration milestones. All default to no-ops so
/// observers implement only what they care about.
pub trait FlowObserver: Send + Sync {
    fn on_proposed(&self, _tx_id: &TxId, _draft: &TransactionDraft) {}
    fn on_signed_offchain(&self, _signer: &Address, _draft: &TransactionDraft) {}
    fn on_signed_onchain(&self, _tx_id: &TxId, _signer: &Address) {}
    fn on_executed(&self, _tx_id: &TxId, _tx_hash: &B256) {}
    fn on_relayed(&self, _tx_id: &TxId) {}
}

pub struct NoopObserver;

impl FlowObserver for NoopObserver {}

pub struct CompositeObserver {
    observers: Vec<Arc<dyn FlowObserver>>,
}

impl CompositeObserver {
    pub fn new() -> Self {
        Self { observers: Vec::new() }
    }

    pub fn add_observer(&mut self, observer: Arc<dyn FlowObserver>) {
        self.observers.push(observer);
    }
}

impl Default for CompositeObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl FlowObserver for CompositeObserver {
    fn on_proposed(&self, tx_id: &TxId, draft: &TransactionDraft) {
        trace!("on_proposed dispatch observer_count={} tx_id={}", self.observers.len(), tx_id);
        for observer in &self.observers {
            observer.on_proposed(tx_id, draft);
        }
    }

    fn on_signed_offchain(&self, signer: &Address, draft: &TransactionDraft) {
        trace!("on_signed_offchain dispatch observer_count={} signer={}", self.observers.len(), signer);
        for observer in &self.observers {
            observer.on_signed_offchain(signer, draft);
        }
    }

    fn on_signed_onchain(&self, tx_id: &TxId, signer: &Address) {
        trace!("on_signed_onchain dispatch observer_count={} tx_id={}", self.observers.len(), tx_id);
        for observer in &self.observers {
            observer.on_signed_onchain(tx_id, signer);
        }
    }

    fn on_executed(&self, tx_id: &TxId, tx_hash: &B256) {
        trace!("on_executed dispatch observer_count={} tx_id={}", self.observers.len(), tx_id);
        for observer in &self.observers {
            observer.on_executed(tx_id, tx_hash);
        }
    }

    fn on_relayed(&self, tx_id: &TxId) {
        trace!("on_relayed dispatch observer_count={} tx_id={}", self.observers.len(), tx_id);
        for observer in &self.observers {
            observer.on_relayed(tx_id);
        }
    }
}

/// Observer mirroring every milestone into the application log.
pub struct LoggingObserver;

impl FlowObserver for LoggingObserver {
    fn on_proposed(&self, tx_id: &TxId, draft: &TransactionDraft) {
        info!("draft proposed tx_id={} nonce={} signature_count={}", tx_id, draft.nonce, draft.signature_count());
    }

    fn on_signed_offchain(&self, signer: &Address, draft: &TransactionDraft) {
        info!("signature added signer={} signature_count={}", signer, draft.signature_count());
    }

    fn on_signed_onchain(&self, tx_id: &TxId, signer: &Address) {
        info!("on-chain approval submitted tx_id={} signer={}", tx_id, signer);
    }

    fn on_executed(&self, tx_id: &TxId, tx_hash: &B256) {
        info!("execution submitted tx_id={} tx_hash={}", tx_id, tx_hash);
    }

    fn on_relayed(&self, tx_id: &TxId) {
        debug!("relay submission accepted tx_id={}", tx_id);
    }
}
