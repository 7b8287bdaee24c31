//! fbmarketing Core - Configuration and shared domain types
//!
//! This crate holds everything that is independent of the HTTP transport:
//! - **Configuration** - `Config` loaded from YAML, with defaults, validation
//!   and a builder
//! - **Domain errors** - `DomainError` for missing credentials and malformed
//!   settings
//!
//! The Graph API client itself lives in `fbmarketing-graph`.

pub mod config;
pub mod domain;
