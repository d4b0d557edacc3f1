//! Pure readiness predicates gating sign/execute decisions.
//!
//! These are synchronous and side-effect free; the caller supplies the
//! account and identity snapshots (and the pending-queue answer) and owns
//! how the verdicts translate into allowed actions.

use crate::domain::model::{AccountState, ConnectedIdentity, TransactionDraft};

/// A draft is only the next executable action when its nonce matches the
/// account's on-chain nonce exactly. Anything else is stale or speculative:
/// multisig accounts execute strictly in nonce order.
pub fn validate_nonce(draft: &TransactionDraft, account: &AccountState) -> bool {
    draft.nonce == account.nonce
}

/// True when the connected signer is the account itself. An account can be
/// configured as a signer of another (or the same) account; letting it
/// trigger its own execution synchronously risks unbounded recursion, so
/// callers block execution on this verdict.
pub fn is_execution_loop(account: &AccountState, identity: &ConnectedIdentity) -> bool {
    identity.address == account.address
}

/// Single-owner accounts can execute right after proposing: the proposer's
/// own signature already satisfies quorum. Only while nothing else is queued
/// though, or the new transaction would collide with one already waiting at
/// the same nonce.
pub fn is_immediately_executable(account: &AccountState, has_pending: bool) -> bool {
    account.threshold == 1 && !has_pending
}

/// Whether the connected signer already holds a signature on the draft.
/// Advisory, used to suppress duplicate signing prompts; re-signing stays
/// allowed and simply overwrites.
pub fn has_already_signed(draft: &TransactionDraft, identity: &ConnectedIdentity) -> bool {
    draft.signatures.contains_key(&identity.address)
}
