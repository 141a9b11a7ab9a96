//! Error types for sheet export fetching.
//!
//! Defines the failure conditions of one candidate export attempt and the
//! aggregate error surfaced when every candidate is exhausted. Per-candidate
//! failures are logged and swallowed by the fetcher; only exhaustion (or a
//! client construction problem) reaches the request handler.

use std::fmt;

use thiserror::Error;

/// Result type alias for fetch operations.
pub type Result<T> = std::result::Result<T, FetchError>;

/// Failure conditions for sheet export fetching.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// Network-level connectivity failure for one candidate URL.
    #[error("network connection failed: {message}")]
    Network {
        /// Error message describing the network failure
        message: String,
    },

    /// Request exceeded the fixed client timeout.
    #[error("request timeout after {timeout_seconds}s")]
    Timeout {
        /// Number of seconds before the request timed out
        timeout_seconds: u64,
    },

    /// Final response status for a candidate was not 200.
    #[error("upstream returned HTTP {status_code}")]
    UpstreamStatus {
        /// HTTP status code of the final response
        status_code: u16,
    },

    /// Upstream answered with an HTML document instead of tabular data.
    ///
    /// Google serves a login or error page when a sheet is not actually
    /// shared publicly, always with a 200 status.
    #[error("received HTML instead of tabular data; the sheet is not publicly accessible")]
    NotPubliclyAccessible,

    /// Every candidate export URL failed.
    #[error(
        "all {attempts} export URL formats failed; ensure the sheet is set to \
         \"Anyone with the link can view\" and try publishing it to web \
         (File > Share > Publish to web)"
    )]
    CandidatesExhausted {
        /// Number of candidate URLs that were attempted
        attempts: usize,
    },

    /// HTTP client could not be constructed from the given settings.
    #[error("invalid fetch configuration: {message}")]
    Configuration {
        /// Configuration error message
        message: String,
    },
}

impl FetchError {
    /// Creates a network error from a message.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network { message: message.into() }
    }

    /// Creates a timeout error.
    pub fn timeout(timeout_seconds: u64) -> Self {
        Self::Timeout { timeout_seconds }
    }

    /// Creates an upstream status error from an HTTP response code.
    pub fn upstream_status(status_code: u16) -> Self {
        Self::UpstreamStatus { status_code }
    }

    /// Creates an exhaustion error covering `attempts` candidate URLs.
    pub fn candidates_exhausted(attempts: usize) -> Self {
        Self::CandidatesExhausted { attempts }
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration { message: message.into() }
    }

    /// Whether this failure is scoped to a single candidate URL.
    ///
    /// Candidate-scoped failures make the fetcher move on to the next URL
    /// in the list; the others abort the whole fetch.
    pub fn is_candidate_failure(&self) -> bool {
        !matches!(self, Self::CandidatesExhausted { .. } | Self::Configuration { .. })
    }
}

/// Category of fetch error for log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Network connectivity issues, including timeouts.
    Network,
    /// Non-200 upstream responses.
    Upstream,
    /// HTML sniffed where tabular data was expected.
    NotPublic,
    /// Candidate list exhausted.
    Exhausted,
    /// Client configuration problems.
    Configuration,
}

impl From<&FetchError> for ErrorCategory {
    fn from(error: &FetchError) -> Self {
        match error {
            FetchError::Network { .. } | FetchError::Timeout { .. } => Self::Network,
            FetchError::UpstreamStatus { .. } => Self::Upstream,
            FetchError::NotPubliclyAccessible => Self::NotPublic,
            FetchError::CandidatesExhausted { .. } => Self::Exhausted,
            FetchError::Configuration { .. } => Self::Configuration,
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network => write!(f, "network"),
            Self::Upstream => write!(f, "upstream"),
            Self::NotPublic => write!(f, "not_public"),
            Self::Exhausted => write!(f, "exhausted"),
            Self::Configuration => write!(f, "configuration"),
        }
    }
}
