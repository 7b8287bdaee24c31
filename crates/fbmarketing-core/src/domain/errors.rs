//! Domain error types
//!
//! Errors raised before any request is made: missing application
//! credentials and malformed identifiers or versions.

use thiserror::Error;

/// Errors that can occur in domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required application credential is not configured
    #[error("Missing credential: {0}")]
    MissingCredential(String),

    /// Graph API version does not have the form `v<major>.<minor>`
    #[error("Invalid API version: {0}")]
    InvalidApiVersion(String),

    /// Invalid Graph node ID format
    #[error("Invalid Graph ID: {0}")]
    InvalidGraphId(String),
}
