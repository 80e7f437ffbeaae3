//! URL validation and filename derivation.
//!
//! Only absolute `http`/`https` URLs are accepted, which keeps `file://` and
//! other local or non-network schemes out of the pipeline. Filenames come from
//! the URL path or, failing that, from the declared content type.

mod path;

pub use path::filename_from_url_path;

use crate::error::FetchError;
use url::Url;

/// Stem used when the URL does not name a file.
const FALLBACK_STEM: &str = "downloaded_image";

/// Parses `raw` and accepts it only if the scheme is exactly `http` or `https`.
pub fn validate_url(raw: &str) -> Result<Url, FetchError> {
    let url = Url::parse(raw)?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(FetchError::UnsupportedScheme(other.to_string())),
    }
}

/// Subtype of a media type, without parameters: `image/svg+xml; charset=utf-8` → `svg+xml`.
pub fn extension_from_content_type(content_type: &str) -> String {
    let essence = content_type.split(';').next().unwrap_or("");
    essence
        .rsplit('/')
        .next()
        .unwrap_or("")
        .trim()
        .to_string()
}

/// Derives the filename an image is saved under.
///
/// Uses the last path segment of `url` when it contains a `.`; otherwise
/// synthesizes `downloaded_image.<subtype>` from `content_type`.
///
/// # Examples
///
/// - `derive_filename(&url("http://example.com/cat.jpg"), "image/jpeg")` → `"cat.jpg"`
/// - `derive_filename(&url("http://example.com/"), "image/png")` → `"downloaded_image.png"`
pub fn derive_filename(url: &Url, content_type: &str) -> String {
    match filename_from_url_path(url) {
        Some(name) if name.contains('.') => name,
        _ => format!(
            "{}.{}",
            FALLBACK_STEM,
            extension_from_content_type(content_type)
        ),
    }
}
