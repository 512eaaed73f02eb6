//! Error types for the ChainStream payment client.

use chainstream_core::ChainError;
use thiserror::Error;

/// Errors raised by the wallet session, the backend client and the payment
/// recorder.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Backend returned an error response
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Backend is offline or unreachable
    #[error("Server unreachable: {0}")]
    ServerUnreachable(String),

    /// Invalid backend URL
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse a backend or wallet response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// No wallet provider is installed
    #[error("No wallet provider available")]
    WalletUnavailable,

    /// The user declined the connection or the provider failed it
    #[error("Wallet connection rejected: {0}")]
    ConnectionRejected(String),

    /// The provider answered a request with an error
    #[error("Wallet request {method} failed: {message}")]
    Wallet {
        method: String,
        /// Provider error code, when the wallet reported one
        code: Option<i64>,
        message: String,
    },

    /// The wallet does not know the requested chain yet
    #[error("Network {0} needs to be added to the wallet")]
    ChainNotAdded(String),

    /// Payment amount is zero, negative or not a number
    #[error("Invalid amount: {0}")]
    InvalidAmount(f64),

    /// Wallet address is not `0x` followed by 40 hex characters
    #[error("Invalid wallet address: {0}")]
    InvalidAddress(String),

    /// The operation was cancelled before it completed
    #[error("Operation cancelled")]
    Cancelled,

    /// IO error in the settings file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl From<ChainError> for ClientError {
    fn from(err: ChainError) -> Self {
        match err {
            ChainError::InvalidAmount(amount) => Self::InvalidAmount(amount),
            ChainError::InvalidAddress(address) => Self::InvalidAddress(address),
            ChainError::Serialization(e) => Self::Json(e),
            other => Self::ParseError(other.to_string()),
        }
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
