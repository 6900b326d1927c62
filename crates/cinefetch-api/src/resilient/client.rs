//! `ResilientClient` - rotating, timeout-bounded JSON GET.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Client, Request};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::instrument;
use url::Url;

use super::credentials::CredentialPool;
use super::error::FetchError;
use super::provider::{Provider, Reply, Verdict};
use super::rate_limiter::{DEFAULT_MIN_INTERVAL, RateLimiter};

/// Per-attempt ceiling covering connect, response and body read.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Result of one network attempt.
enum Attempt<T> {
    /// Terminal answer for the logical request.
    Done(Reply<T>),
    /// Rotation-triggering failure with a description.
    Failed(String),
}

/// JSON GET client that rotates credentials on failure.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct ResilientClient<P> {
    /// HTTP client.
    http_client: Client,
    /// Base URL for API requests.
    base_url: Url,
    /// Keys and the shared rotation cursor.
    credentials: CredentialPool,
    /// Upstream specifics.
    provider: P,
    /// Per-attempt timeout.
    timeout: Duration,
    /// Attempt budget override; defaults to the pool size.
    max_attempts: Option<usize>,
    /// Attempt pacing.
    rate_limiter: Mutex<RateLimiter>,
}

/// Builder for `ResilientClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct ResilientClientBuilder<P> {
    provider: P,
    base_url: Option<Url>,
    credentials: Option<Vec<String>>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    min_interval: Option<Duration>,
    max_attempts: Option<usize>,
}

impl<P: Provider> ResilientClientBuilder<P> {
    /// Creates a new builder.
    const fn new(provider: P) -> Self {
        Self {
            provider,
            base_url: None,
            credentials: None,
            user_agent: None,
            timeout: None,
            min_interval: None,
            max_attempts: None,
        }
    }

    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the API keys to rotate through (required, non-empty).
    #[must_use]
    pub fn credentials<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.credentials = Some(keys.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the User-Agent (required).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Sets the per-attempt timeout (default: 10s).
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the minimum interval between attempts (default: 25ms).
    #[must_use]
    pub const fn min_interval(mut self, interval: Duration) -> Self {
        self.min_interval = Some(interval);
        self
    }

    /// Sets the default attempt budget (default: number of keys).
    #[must_use]
    pub const fn max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = Some(attempts);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - `credentials` is not set or contains no usable key.
    /// - `user_agent` is not set.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<ResilientClient<P>> {
        let keys = self
            .credentials
            .with_context(|| format!("{} API keys are required", P::NAME))?;
        let credentials = CredentialPool::new(keys)
            .with_context(|| format!("invalid {} API key configuration", P::NAME))?;
        let user_agent = self.user_agent.context("user_agent is required")?;

        let base_url = if let Some(url) = self.base_url {
            url
        } else {
            let result = Url::parse(P::DEFAULT_BASE_URL);
            result.context("invalid default base URL")?
        };

        let http_client = Client::builder()
            .user_agent(&user_agent)
            .gzip(true)
            .build()
            .context("failed to build HTTP client")?;

        Ok(ResilientClient {
            http_client,
            base_url,
            credentials,
            provider: self.provider,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            max_attempts: self.max_attempts,
            rate_limiter: Mutex::new(RateLimiter::new(
                self.min_interval.unwrap_or(DEFAULT_MIN_INTERVAL),
            )),
        })
    }
}

impl<P: Provider> ResilientClient<P> {
    /// Creates a new builder around `provider`.
    #[must_use]
    pub const fn builder(provider: P) -> ResilientClientBuilder<P> {
        ResilientClientBuilder::new(provider)
    }

    /// The credential pool (and its rotation cursor).
    #[must_use]
    pub const fn credentials(&self) -> &CredentialPool {
        &self.credentials
    }

    /// The base URL requests are resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Sends `GET {base_url}{path}?{query}&{credential}`, rotating keys on failure.
    ///
    /// Timeouts, transport errors, non-2xx statuses, malformed bodies and
    /// provider-rejected keys each consume one attempt and advance the
    /// shared cursor. A business-negative answer returns `Reply::Miss`
    /// after a single attempt. `max_attempts` defaults to the client's
    /// budget, which defaults to the number of keys.
    ///
    /// # Errors
    ///
    /// - `FetchError::Exhausted` once `max_attempts` attempts have failed.
    /// - `FetchError::Request` if the URL or request cannot be built.
    #[instrument(skip_all, fields(provider = P::NAME, path = path))]
    pub async fn fetch_with_rotation<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        max_attempts: Option<usize>,
    ) -> std::result::Result<Reply<T>, FetchError> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| FetchError::Request(format!("failed to join URL path {path}: {e}")))?;

        let max_attempts = max_attempts
            .or(self.max_attempts)
            .unwrap_or_else(|| self.credentials.len());

        let mut attempts: usize = 0;
        let mut last_failure = String::from("no attempt was made");
        let mut credential = self.credentials.position();

        while attempts < max_attempts {
            attempts = attempts.saturating_add(1);
            let key = self.credentials.key(credential);

            let request = self
                .http_client
                .get(url.clone())
                .query(query)
                .query(&[(P::CREDENTIAL_PARAM, key)])
                .build()
                .map_err(|e| FetchError::Request(e.without_url().to_string()))?;

            self.rate_limiter.lock().await.wait().await;

            tracing::debug!(
                url = %url,
                attempt = attempts,
                max_attempts,
                credential,
                "{} API request",
                P::NAME
            );

            match self.attempt(request).await {
                Attempt::Done(reply) => return Ok(reply),
                Attempt::Failed(reason) => {
                    let next = self.credentials.advance_from(credential);
                    tracing::warn!(
                        attempt = attempts,
                        max_attempts,
                        credential,
                        next_credential = next,
                        reason = %reason,
                        "{} API attempt failed, rotating API key",
                        P::NAME
                    );
                    last_failure = reason;
                    credential = next;
                }
            }
        }

        Err(FetchError::Exhausted {
            attempts,
            last_failure,
        })
    }

    /// Runs one attempt under the timeout and classifies the outcome.
    async fn attempt<T: DeserializeOwned>(&self, request: Request) -> Attempt<T> {
        let exchange = async {
            let response = self.http_client.execute(request).await?;
            let status = response.status();
            let body = response.text().await?;
            Ok::<_, reqwest::Error>((status, body))
        };

        let (status, body) = match tokio::time::timeout(self.timeout, exchange).await {
            Err(_) => {
                return Attempt::Failed(format!(
                    "timed out after {}ms",
                    self.timeout.as_millis()
                ));
            }
            Ok(Err(e)) => {
                return Attempt::Failed(format!("request failed: {}", e.without_url()));
            }
            Ok(Ok(exchange)) => exchange,
        };

        let value: Value = match serde_json::from_str(&body) {
            Ok(value) => value,
            Err(e) => {
                return Attempt::Failed(format!("HTTP {status}: malformed JSON body: {e}"));
            }
        };

        match self.provider.classify(status, &value) {
            Verdict::Rotate(reason) => Attempt::Failed(reason),
            Verdict::Negative(reason) => Attempt::Done(Reply::Miss(reason)),
            Verdict::Accept if !status.is_success() => {
                Attempt::Failed(format!("{} API error (HTTP {status})", P::NAME))
            }
            Verdict::Accept => match serde_json::from_value::<T>(value) {
                Ok(parsed) => Attempt::Done(Reply::Hit(parsed)),
                Err(e) => Attempt::Failed(format!("failed to decode JSON response: {e}")),
            },
        }
    }
}
