//! Application layer: orchestration across domain logic and collaborator I/O.

pub mod actions;
pub mod evaluator;
pub mod lifecycle;

pub use actions::{SignOutcome, TxActions};
pub use evaluator::ReadinessEvaluator;
pub use lifecycle::{CompositeObserver, FlowObserver, LoggingObserver, NoopObserver};
