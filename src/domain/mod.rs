//! Domain layer: pure data model and logic, no I/O.

pub mod hashes;
pub mod model;
pub mod readiness;
pub mod signature;

pub use model::{
    AccountState, ConnectedIdentity, ExecutionOptions, OperationKind, ProviderHandle, SignerKind, TransactionDraft,
};
pub use signature::{encode_signatures, SignatureRecord};
