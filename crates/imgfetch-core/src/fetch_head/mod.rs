//! HTTP HEAD / metadata probing.
//!
//! Uses the curl crate (libcurl) to fetch response headers only, so unsuitable
//! resources (wrong type, too large) are rejected before the body is
//! transferred.

mod parse;

pub use parse::parse_headers;

use crate::error::{FetchError, TransportError};
use std::str;
use std::time::Duration;

/// Headers of the HEAD response that the pre-check inspects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadResult {
    /// `Content-Type` value if present.
    pub content_type: Option<String>,
    /// Declared size in bytes, if `Content-Length` is present.
    pub content_length: Option<u64>,
}

impl HeadResult {
    /// Declared content type, empty when the header is missing.
    pub fn content_type(&self) -> &str {
        self.content_type.as_deref().unwrap_or("")
    }

    /// True if the declared type starts with `image/`.
    pub fn is_image(&self) -> bool {
        self.content_type().starts_with("image/")
    }

    /// Declared length, with a missing header counted as 0.
    pub fn declared_len(&self) -> u64 {
        self.content_length.unwrap_or(0)
    }
}

/// Performs a HEAD request and returns the raw header lines and status.
///
/// Redirects are not followed, so a 3xx answer fails the 2xx check. The whole
/// request (connect included) is bounded by `timeout`. Runs in the current thread.
fn probe_raw(url: &str, timeout: Duration) -> Result<(u32, Vec<String>), TransportError> {
    let mut headers: Vec<String> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.nobody(true)?; // HEAD request
    easy.connect_timeout(timeout)?;
    easy.timeout(timeout)?;

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(s) = str::from_utf8(data) {
                headers.push(s.trim_end().to_string());
            }
            true
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(TransportError::Http(code));
    }
    Ok((code, headers))
}

/// HEAD `url` and parse the headers the pre-check needs.
///
/// Fails with [`FetchError::Transport`] for network errors and non-2xx status,
/// or [`FetchError::Header`] when `Content-Length` is not a number.
pub fn probe(url: &str, timeout: Duration) -> Result<HeadResult, FetchError> {
    let (code, lines) = probe_raw(url, timeout)?;
    let head = parse_headers(&lines)?;
    tracing::debug!(
        url,
        code,
        content_type = head.content_type(),
        content_length = ?head.content_length,
        "HEAD probe"
    );
    Ok(head)
}
