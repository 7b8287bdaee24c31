//! fbmarketing Graph - Facebook Marketing Graph API client
//!
//! Provides an async client for:
//! - OAuth URL construction and token exchange (`/oauth/access_token`, `/debug_token`)
//! - `appsecret_proof` authentication of server-side calls
//! - Account, page and page-subscription endpoints
//! - Lead generation forms and leads
//!
//! Every call funnels through one send step and one parse step that turns
//! Graph API error payloads into [`GraphError`] variants.
//!
//! ## Modules
//!
//! - [`auth`] - App secret proof, OAuth dialog URL and token endpoints
//! - [`client`] - HTTP client and the request/parse pipeline
//! - [`error_code`] - Numeric Graph API error codes and their classification
//! - [`pages`] - Account, pages and subscribed apps
//! - [`leads`] - Lead generation forms and leads
//! - [`unsupported`] - Marketing endpoints reserved but not yet implemented

pub mod auth;
pub mod client;
pub mod error_code;
pub mod leads;
pub mod pages;
pub mod unsupported;

pub use client::FacebookClient;
pub use error_code::ErrorCode;
pub use unsupported::UnsupportedEndpoint;

use thiserror::Error;

/// Errors that can occur when communicating with the Facebook Graph API
#[derive(Debug, Error)]
pub enum GraphError {
    /// The operation needs a default access token and none has been set
    #[error("Access token required: call set_access_token first")]
    AccessTokenRequired,

    /// The endpoint is catalogued but has no implementation
    #[error("Not implemented: {0}")]
    NotImplemented(UnsupportedEndpoint),

    /// Facebook reported a generic failure (code 1)
    #[error("Unknown error: {0}")]
    UnknownError(String),

    /// Application-level rate limit exceeded (code 4)
    #[error("Application request limit reached: {0}")]
    AppRateLimit(String),

    /// Per-user rate limit exceeded (code 17)
    #[error("User request limit reached: {0}")]
    UserRateLimit(String),

    /// The application lacks a required permission (code 10)
    #[error("Application does not have permission: {0}")]
    AppPermissionRequired(String),

    /// The caller lacks an extended permission (code 200)
    #[error("Extended permission required: {0}")]
    ExtendedPermissionRequired(String),

    /// A request parameter was malformed or invalid (code 100)
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The session or token is invalid (code 102)
    #[error("Session key invalid: {0}")]
    SessionKeyInvalid(String),

    /// Permission scope mismatch (code 104)
    #[error("Incorrect permission: {0}")]
    IncorrectPermission(String),

    /// Expired or malformed OAuth 2.0 access token (code 190)
    #[error("Invalid OAuth 2.0 access token: {0}")]
    InvalidOauth20AccessToken(String),

    /// A recognized Graph API code without a dedicated kind
    #[error("Error: {code}. Message {message}")]
    Uncategorized {
        /// Graph API error code
        code: i64,
        /// Graph API error message
        message: String,
    },

    /// A code that is not in the known error table
    #[error("Unexpected error: {code}. Message {message}")]
    Unexpected {
        /// Graph API error code
        code: i64,
        /// Graph API error message
        message: String,
    },

    /// A node ID that would change the request path (e.g. contains `/` or `?`)
    #[error("Invalid node ID: {0}")]
    InvalidNodeId(#[from] fbmarketing_core::domain::DomainError),

    /// The API response could not be parsed or was malformed
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// A network-level error occurred
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),
}

impl GraphError {
    /// Returns the Graph API error code carried by this error, if any.
    pub fn code(&self) -> Option<i64> {
        let kind = match self {
            GraphError::UnknownError(_) => ErrorCode::UnknownError,
            GraphError::AppRateLimit(_) => ErrorCode::AppRateLimit,
            GraphError::UserRateLimit(_) => ErrorCode::UserRateLimit,
            GraphError::AppPermissionRequired(_) => ErrorCode::AppPermissionRequired,
            GraphError::ExtendedPermissionRequired(_) => ErrorCode::ExtendedPermissionRequired,
            GraphError::InvalidParameter(_) => ErrorCode::InvalidParameter,
            GraphError::SessionKeyInvalid(_) => ErrorCode::SessionKeyInvalid,
            GraphError::IncorrectPermission(_) => ErrorCode::IncorrectPermission,
            GraphError::InvalidOauth20AccessToken(_) => ErrorCode::InvalidOauth20AccessToken,
            GraphError::Uncategorized { code, .. } | GraphError::Unexpected { code, .. } => {
                return Some(*code)
            }
            _ => return None,
        };
        Some(kind.code())
    }

    /// Returns the Facebook message text carried by this error, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            GraphError::UnknownError(m)
            | GraphError::AppRateLimit(m)
            | GraphError::UserRateLimit(m)
            | GraphError::AppPermissionRequired(m)
            | GraphError::ExtendedPermissionRequired(m)
            | GraphError::InvalidParameter(m)
            | GraphError::SessionKeyInvalid(m)
            | GraphError::IncorrectPermission(m)
            | GraphError::InvalidOauth20AccessToken(m) => Some(m),
            GraphError::Uncategorized { message, .. } | GraphError::Unexpected { message, .. } => {
                Some(message)
            }
            _ => None,
        }
    }

    /// True for application and user rate-limit errors.
    pub fn is_rate_limit(&self) -> bool {
        matches!(
            self,
            GraphError::AppRateLimit(_) | GraphError::UserRateLimit(_)
        )
    }
}
