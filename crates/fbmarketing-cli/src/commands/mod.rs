pub mod account;
pub mod auth;
pub mod completions;
pub mod config;
pub mod leads;
pub mod subscriptions;
