//! Provider seam: credential placement and response classification.

use reqwest::StatusCode;
use serde_json::Value;

/// How a single response should be treated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Usable payload (subject to a 2xx status and successful decoding).
    Accept,
    /// Well-formed "nothing here" answer. Terminal, no rotation.
    Negative(String),
    /// Credential rejected or over quota. Rotate to the next key.
    Rotate(String),
}

/// Outcome of a logical request that reached a terminal answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply<T> {
    /// Decoded payload.
    Hit(T),
    /// Business-negative answer with the upstream reason.
    Miss(String),
}

impl<T> Reply<T> {
    /// Converts into an `Option`, discarding the miss reason.
    pub fn hit(self) -> Option<T> {
        match self {
            Self::Hit(value) => Some(value),
            Self::Miss(_) => None,
        }
    }

    /// Maps the hit payload.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Reply<U> {
        match self {
            Self::Hit(value) => Reply::Hit(f(value)),
            Self::Miss(reason) => Reply::Miss(reason),
        }
    }
}

/// Upstream API specifics plugged into `ResilientClient`.
pub trait Provider: Send + Sync {
    /// Short provider name used in logs.
    const NAME: &'static str;

    /// Query parameter carrying the credential.
    const CREDENTIAL_PARAM: &'static str;

    /// Base URL used when the builder is not given one.
    const DEFAULT_BASE_URL: &'static str;

    /// Classifies a parsed response body.
    ///
    /// Non-2xx statuses classified as `Accept` are still treated as
    /// transport failures by the client.
    fn classify(&self, status: StatusCode, body: &Value) -> Verdict;
}
