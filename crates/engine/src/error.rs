use thiserror::Error;

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors surfaced by the gateway collaborators.
///
/// Only `Write` failures are operator-visible; lookup and network failures
/// are absorbed into verdicts by the callers.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The requested entity does not exist
    #[error("not found: {0}")]
    NotFound(String),

    /// Transport-level failure on a remote fetch
    #[error("network error: {0}")]
    Network(String),

    /// The annotation write was rejected
    #[error("write failed: {0}")]
    Write(String),
}

impl GatewayError {
    /// Create a not-found error
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create a write error
    pub fn write(msg: impl Into<String>) -> Self {
        Self::Write(msg.into())
    }
}

/// Errors that can occur while driving validation runs
#[derive(Error, Debug)]
pub enum EngineError {
    /// Gateway failure outside the absorbed field-level paths
    #[error("gateway error: {0}")]
    Gateway(#[from] GatewayError),

    /// Invalid configuration
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The scheduler task is gone and can no longer accept triggers
    #[error("scheduler channel closed")]
    SchedulerClosed,

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl EngineError {
    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
