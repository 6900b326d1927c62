//! `FetchError` - terminal failures of a rotated fetch.

/// Failure of a logical request made through `ResilientClient`.
///
/// Per-attempt problems (timeouts, transport errors, rejected keys,
/// malformed bodies) never appear here directly; they consume an attempt
/// and are summarized in `Exhausted` once the budget runs out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Every allowed attempt failed with a rotation-triggering error.
    Exhausted {
        /// Number of network attempts made.
        attempts: usize,
        /// Description of the last attempt's failure.
        last_failure: String,
    },
    /// The request could not be constructed; no attempt was made.
    Request(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exhausted {
                attempts,
                last_failure,
            } => write!(
                f,
                "all API keys failed after {attempts} attempt(s): {last_failure}"
            ),
            Self::Request(message) => write!(f, "invalid request: {message}"),
        }
    }
}

impl std::error::Error for FetchError {}

impl FetchError {
    /// Returns `true` for the retry-budget-exhausted case.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_exhausted() {
        // Arrange
        let err = FetchError::Exhausted {
            attempts: 3,
            last_failure: String::from("Invalid API key!"),
        };

        // Act
        let msg = err.to_string();

        // Assert
        assert_eq!(msg, "all API keys failed after 3 attempt(s): Invalid API key!");
        assert!(err.is_exhausted());
    }

    #[test]
    fn test_display_request() {
        // Arrange
        let err = FetchError::Request(String::from("bad path"));

        // Act & Assert
        assert_eq!(err.to_string(), "invalid request: bad path");
        assert!(!err.is_exhausted());
    }
}
