//! Integration tests for fbmarketing-graph
//!
//! Uses wiremock to simulate the Facebook Graph API and verifies
//! end-to-end behavior of the FacebookClient: token endpoints, account and
//! page endpoints, leads, error classification and unsupported endpoints.

mod common;

mod test_auth;
mod test_errors;
mod test_leads;
mod test_pages;
mod test_unsupported;
