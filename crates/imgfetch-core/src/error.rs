//! Per-URL error types and their classification.
//!
//! Every failure in the pipeline is returned as a [`FetchError`] for the URL
//! being processed; the run loop inspects it and moves on to the next URL.

use thiserror::Error;

/// High-level classification of a per-URL failure, used for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// URL rejected before any network call (bad scheme, unparseable).
    Validation,
    /// Resource reachable but refused by policy (type, size, duplicate).
    Policy,
    /// Network failure or non-2xx status on either request (including timeouts).
    Transport,
    /// Anything else, e.g. a filesystem write failure.
    Unexpected,
}

/// Failure of a single HTTP request (HEAD or GET).
#[derive(Debug, Error)]
pub enum TransportError {
    /// Curl reported an error (timeout, connection refused, DNS, etc.).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// Final HTTP response had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
}

/// Response headers that could not be interpreted.
#[derive(Debug, Error)]
pub enum HeaderError {
    #[error("invalid Content-Length header: {0:?}")]
    ContentLength(String),
}

/// Why a URL was not saved.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("unsupported URL scheme {0:?}; only http and https are allowed")]
    UnsupportedScheme(String),
    #[error("not an absolute URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Content-Type is not an image: {0}")]
    NotAnImage(String),
    #[error("declared size {length} bytes exceeds limit of {limit} bytes")]
    TooLarge { length: u64, limit: u64 },
    #[error("duplicate of a previously downloaded image ({0})")]
    Duplicate(String),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    Header(#[from] HeaderError),
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

impl FetchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FetchError::UnsupportedScheme(_) | FetchError::InvalidUrl(_) => ErrorKind::Validation,
            FetchError::NotAnImage(_) | FetchError::TooLarge { .. } | FetchError::Duplicate(_) => {
                ErrorKind::Policy
            }
            FetchError::Transport(_) => ErrorKind::Transport,
            FetchError::Header(_) | FetchError::Io(_) => ErrorKind::Unexpected,
        }
    }
}
