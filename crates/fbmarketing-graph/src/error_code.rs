//! Graph API error codes
//!
//! The closed set of numeric codes this client recognizes, and the table
//! that turns a `(code, message)` pair from an error payload into a
//! [`GraphError`].
//!
//! Codes follow Facebook's published Graph API error reference.

use std::fmt;

use crate::GraphError;

/// A numeric error code recognized by this client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    UnknownError,
    ServiceUnavailable,
    ApiMethod,
    AppRateLimit,
    AppPermissionRequired,
    UserRateLimit,
    PageRateLimit,
    InvalidParameter,
    SessionKeyInvalid,
    IncorrectPermission,
    InvalidOauth20AccessToken,
    ExtendedPermissionRequired,
    ApplicationLimitReached,
    TemporarilyBlocked,
    DuplicatePost,
    CustomRateLimit,
    AdAccountRateLimit,
}

/// Codes with a dedicated error kind. Everything else in [`ErrorCode`]
/// becomes [`GraphError::Uncategorized`].
const CLASSIFICATION: &[(ErrorCode, fn(String) -> GraphError)] = &[
    (ErrorCode::UnknownError, GraphError::UnknownError),
    (ErrorCode::AppRateLimit, GraphError::AppRateLimit),
    (ErrorCode::UserRateLimit, GraphError::UserRateLimit),
    (ErrorCode::AppPermissionRequired, GraphError::AppPermissionRequired),
    (
        ErrorCode::ExtendedPermissionRequired,
        GraphError::ExtendedPermissionRequired,
    ),
    (ErrorCode::InvalidParameter, GraphError::InvalidParameter),
    (ErrorCode::SessionKeyInvalid, GraphError::SessionKeyInvalid),
    (ErrorCode::IncorrectPermission, GraphError::IncorrectPermission),
    (
        ErrorCode::InvalidOauth20AccessToken,
        GraphError::InvalidOauth20AccessToken,
    ),
];

impl ErrorCode {
    /// Every recognized code
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::UnknownError,
        ErrorCode::ServiceUnavailable,
        ErrorCode::ApiMethod,
        ErrorCode::AppRateLimit,
        ErrorCode::AppPermissionRequired,
        ErrorCode::UserRateLimit,
        ErrorCode::PageRateLimit,
        ErrorCode::InvalidParameter,
        ErrorCode::SessionKeyInvalid,
        ErrorCode::IncorrectPermission,
        ErrorCode::InvalidOauth20AccessToken,
        ErrorCode::ExtendedPermissionRequired,
        ErrorCode::ApplicationLimitReached,
        ErrorCode::TemporarilyBlocked,
        ErrorCode::DuplicatePost,
        ErrorCode::CustomRateLimit,
        ErrorCode::AdAccountRateLimit,
    ];

    /// The numeric value Facebook sends for this code
    pub const fn code(self) -> i64 {
        match self {
            ErrorCode::UnknownError => 1,
            ErrorCode::ServiceUnavailable => 2,
            ErrorCode::ApiMethod => 3,
            ErrorCode::AppRateLimit => 4,
            ErrorCode::AppPermissionRequired => 10,
            ErrorCode::UserRateLimit => 17,
            ErrorCode::PageRateLimit => 32,
            ErrorCode::InvalidParameter => 100,
            ErrorCode::SessionKeyInvalid => 102,
            ErrorCode::IncorrectPermission => 104,
            ErrorCode::InvalidOauth20AccessToken => 190,
            ErrorCode::ExtendedPermissionRequired => 200,
            ErrorCode::ApplicationLimitReached => 341,
            ErrorCode::TemporarilyBlocked => 368,
            ErrorCode::DuplicatePost => 506,
            ErrorCode::CustomRateLimit => 613,
            ErrorCode::AdAccountRateLimit => 80004,
        }
    }

    /// Looks up a numeric code; `None` when the code is not recognized.
    pub fn from_code(code: i64) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.code() == code)
    }

    /// Builds the error for this code.
    pub fn into_error(self, message: String) -> GraphError {
        match CLASSIFICATION.iter().find(|(kind, _)| *kind == self) {
            Some((_, build)) => build(message),
            None => GraphError::Uncategorized {
                code: self.code(),
                message,
            },
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} ({})", self, self.code())
    }
}

/// Classifies a Graph API error payload.
///
/// Unknown codes become [`GraphError::Unexpected`] with code and message
/// preserved verbatim.
pub fn classify(code: i64, message: String) -> GraphError {
    match ErrorCode::from_code(code) {
        Some(kind) => kind.into_error(message),
        None => GraphError::Unexpected { code, message },
    }
}
