//! Error types for Truth Sifter.

use uuid::Uuid;

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Errors raised while producing an analysis.
///
/// The mock analyzer never returns these for text input; they exist for
/// analyzers backed by something that can actually fail.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Analysis {request_id} failed: {reason}")]
    Failed { request_id: Uuid, reason: String },
}

/// Errors raised by the analysis session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("An analysis is already in progress")]
    Busy,

    #[error("Request rejected: {0}")]
    Rejected(String),
}
