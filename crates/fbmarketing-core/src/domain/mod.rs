//! Domain types
//!
//! - Newtypes for validated Graph API values
//! - Domain-specific error types

pub mod errors;
pub mod newtypes;

pub use errors::DomainError;
pub use newtypes::{ApiVersion, GraphId};
