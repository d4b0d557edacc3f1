use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    MissingTransaction,
    UnsignedContractRelay,
    Backend,
    SigningRejected,
    Chain,
    Relay,
    InvalidAddress,
    ConfigError,
    Message,
}

#[derive(Debug, Clone)]
pub struct ErrorContext {
    pub code: ErrorCode,
    pub message: String,
}

/// Error taxonomy for the orchestration flows.
///
/// `Backend`, `SigningRejected`, `Chain` and `Relay` originate from external
/// collaborators and are propagated unchanged; retry policy belongs to the
/// caller. Only `MissingTransaction` and `UnsignedContractRelay` are raised
/// by the orchestrator itself.
#[derive(Debug, Error)]
pub enum QuorumError {
    #[error("transaction not provided")]
    MissingTransaction,

    #[error("cannot relay an unsigned transaction from a contract-based signer")]
    UnsignedContractRelay,

    #[error("proposal backend error: {0}")]
    Backend(String),

    #[error("signature request rejected: {0}")]
    SigningRejected(String),

    #[error("chain dispatch error: {0}")]
    Chain(String),

    #[error("relay submission error: {0}")]
    Relay(String),

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("{0}")]
    Message(String),
}

impl QuorumError {
    pub fn code(&self) -> ErrorCode {
        match self {
            QuorumError::MissingTransaction => ErrorCode::MissingTransaction,
            QuorumError::UnsignedContractRelay => ErrorCode::UnsignedContractRelay,
            QuorumError::Backend(_) => ErrorCode::Backend,
            QuorumError::SigningRejected(_) => ErrorCode::SigningRejected,
            QuorumError::Chain(_) => ErrorCode::Chain,
            QuorumError::Relay(_) => ErrorCode::Relay,
            QuorumError::InvalidAddress(_) => ErrorCode::InvalidAddress,
            QuorumError::ConfigError(_) => ErrorCode::ConfigError,
            QuorumError::Message(_) => ErrorCode::Message,
        }
    }

    pub fn context(&self) -> ErrorContext {
        ErrorContext {
            code: self.code(),
            message: self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, QuorumError>;

impl From<hex::FromHexError> for QuorumError {
    fn from(err: hex::FromHexError) -> Self {
        QuorumError::Message(err.to_string())
    }
}
