//! Client crate for the legacy Plaid REST API.
//!
//! This crate owns everything about the upstream provider:
//! - [`Operation`] - the closed set of supported operations, each with the
//!   positional parameter order of its legacy call signature and the REST
//!   endpoint it maps to
//! - [`PlaidApi`] / [`PlaidClient`] - the invocation seam and its
//!   reqwest-backed implementation
//! - [`Environment`] - sandbox / development / production endpoint selection
//! - [`PlaidError`] / [`ApiErrorBody`] - the provider error model
//!
//! The HTTP gateway in `apps/server` depends only on the [`PlaidApi`] trait,
//! so dispatch logic stays testable without network access.

mod client;
mod environment;
mod error;
mod operations;

pub use client::{Credentials, PlaidApi, PlaidClient};
pub use environment::Environment;
pub use error::{ApiErrorBody, PlaidError};
pub use operations::Operation;
