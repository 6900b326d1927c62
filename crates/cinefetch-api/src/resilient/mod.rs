//! Credential-rotating JSON fetch core.
//!
//! Every provider client sends its requests through [`ResilientClient`],
//! which rotates through a [`CredentialPool`] when a credential is rejected,
//! bounds each attempt with a timeout, and reports [`FetchError::Exhausted`]
//! once the attempt budget is spent.

mod client;
mod credentials;
mod error;
mod provider;
mod rate_limiter;

#[allow(clippy::module_name_repetitions)]
pub use client::{DEFAULT_TIMEOUT, ResilientClient, ResilientClientBuilder};
pub use credentials::CredentialPool;
pub use error::FetchError;
pub use provider::{Provider, Reply, Verdict};
