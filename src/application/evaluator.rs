use crate::domain::model::{AccountState, ConnectedIdentity, TransactionDraft};
use crate::domain::readiness;
use crate::foundation::Result;
use crate::infrastructure::gateway::PendingView;

/// Readiness predicates wired to live snapshots and the pending-queue view.
///
/// The predicates themselves live in [`crate::domain::readiness`] and stay
/// pure; this wrapper only fixes the snapshots and performs the one async
/// lookup the immediate-executability check needs.
pub struct ReadinessEvaluator<'a> {
    account: &'a AccountState,
    identity: &'a ConnectedIdentity,
    pending: &'a dyn PendingView,
}

impl<'a> ReadinessEvaluator<'a> {
    pub fn new(account: &'a AccountState, identity: &'a ConnectedIdentity, pending: &'a dyn PendingView) -> Self {
        Self { account, identity, pending }
    }

    pub fn validate_nonce(&self, draft: &TransactionDraft) -> bool {
        readiness::validate_nonce(draft, self.account)
    }

    pub fn is_execution_loop(&self) -> bool {
        readiness::is_execution_loop(self.account, self.identity)
    }

    pub async fn is_immediately_executable(&self) -> Result<bool> {
        let has_pending = self.pending.has_pending(&self.account.address).await?;
        Ok(readiness::is_immediately_executable(self.account, has_pending))
    }

    pub fn has_already_signed(&self, draft: &TransactionDraft) -> bool {
        readiness::has_already_signed(draft, self.identity)
    }
}
