//! Domain Layer - Errors
//!
//! The error type shared by every layer above the domain.

use serde::{Deserialize, Serialize};

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
///
/// The first four variants mirror the failure classes of the remote table
/// and the local preference file; callers surface the message as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DomainError {
    /// Transport failure talking to the remote table
    Network(String),
    /// The server rejected a payload (4xx on insert)
    Validation(String),
    /// Any other non-success response
    Server { status: u16, message: String },
    /// Local preference storage failure
    Storage(String),
    InvalidInput(String),
    /// No remote backend has been configured yet
    NotConfigured,
    Internal(String),
}

impl DomainError {
    /// The raw message, without the category prefix
    pub fn message(&self) -> &str {
        match self {
            DomainError::Network(msg)
            | DomainError::Validation(msg)
            | DomainError::Storage(msg)
            | DomainError::InvalidInput(msg)
            | DomainError::Internal(msg) => msg,
            DomainError::Server { message, .. } => message,
            DomainError::NotConfigured => "Remote backend is not configured",
        }
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::Network(msg) => write!(f, "Network error: {}", msg),
            DomainError::Validation(msg) => write!(f, "Validation error: {}", msg),
            DomainError::Server { status, message } => {
                write!(f, "Server error ({}): {}", status, message)
            }
            DomainError::Storage(msg) => write!(f, "Storage error: {}", msg),
            DomainError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            DomainError::NotConfigured => write!(f, "Remote backend is not configured"),
            DomainError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}
