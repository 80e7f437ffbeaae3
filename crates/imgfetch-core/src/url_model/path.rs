//! Filename extraction from URL path.

use url::Url;

/// Returns the text after the final `/` of the URL path (query excluded).
///
/// Returns `None` for a root path or a path ending in `/`.
pub fn filename_from_url_path(url: &Url) -> Option<String> {
    let segment = url.path().rsplit('/').next()?;
    if segment.is_empty() {
        return None;
    }
    Some(segment.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> Option<String> {
        filename_from_url_path(&Url::parse(s).unwrap())
    }

    #[test]
    fn normal() {
        assert_eq!(name("https://example.com/a/b/cat.jpg").as_deref(), Some("cat.jpg"));
        assert_eq!(name("https://example.com/single").as_deref(), Some("single"));
    }

    #[test]
    fn root_or_trailing_slash() {
        assert_eq!(name("https://example.com/"), None);
        assert_eq!(name("https://example.com"), None);
        assert_eq!(name("https://example.com/img.png/"), None);
    }

    #[test]
    fn with_query_and_fragment() {
        assert_eq!(
            name("https://example.com/file.png?token=abc#top").as_deref(),
            Some("file.png")
        );
    }

    #[test]
    fn dot_segments_are_normalized_away() {
        assert_eq!(name("https://example.com/a/../b.gif").as_deref(), Some("b.gif"));
        assert_eq!(name("https://example.com/.."), None);
    }
}
