//! Parse HTTP response header lines into HeadResult.

use super::HeadResult;
use crate::error::HeaderError;

/// Parse collected header lines into HeadResult.
///
/// With redirects followed, libcurl reports the headers of every response in
/// the chain; each status line starts a new block and only the last one counts.
pub fn parse_headers(lines: &[String]) -> Result<HeadResult, HeaderError> {
    let mut content_type = None;
    let mut content_length = None;

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("HTTP/") {
            content_type = None;
            content_length = None;
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            let name = name.trim();
            let value = value.trim();
            if name.eq_ignore_ascii_case("content-type") {
                content_type = Some(value.to_string());
            }
            if name.eq_ignore_ascii_case("content-length") {
                let n = value
                    .parse::<u64>()
                    .map_err(|_| HeaderError::ContentLength(value.to_string()))?;
                content_length = Some(n);
            }
        }
    }

    Ok(HeadResult {
        content_type,
        content_length,
    })
}
