//! Single-stream HTTP GET of an image body.
//!
//! The body is buffered in memory: it has to be fingerprinted in full before
//! the pipeline decides whether to write it at all.

use crate::error::TransportError;
use std::time::Duration;

/// Body of a completed GET and the URL it was finally served from.
#[derive(Debug, Clone)]
pub struct Fetched {
    pub body: Vec<u8>,
    /// URL after redirects; callers must re-check its scheme.
    pub final_url: String,
}

/// Downloads `url` with a single GET and returns the full response body.
///
/// Follows redirects. A non-2xx final status is an error and the partial body
/// is discarded.
pub fn fetch_body(url: &str, timeout: Duration) -> Result<Fetched, TransportError> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(timeout)?;
    easy.timeout(timeout)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(TransportError::Http(code));
    }
    let final_url = easy.effective_url()?.unwrap_or(url).to_string();

    tracing::debug!(url, final_url, code, bytes = body.len(), "GET complete");
    Ok(Fetched { body, final_url })
}
