//! Console progress lines. Logs go to the log file; this is what the user sees.

use imgfetch_core::error::FetchError;
use imgfetch_core::pipeline::{Event, SavedImage};

pub fn banner() {
    println!("Welcome to the Ubuntu Image Fetcher");
    println!("A tool for mindfully collecting images from the web\n");
}

pub fn print_event(event: Event<'_>) {
    for line in event_lines(&event) {
        println!("{}", line);
    }
}

pub(super) fn event_lines(event: &Event<'_>) -> Vec<String> {
    match event {
        Event::Attempt { url } => vec![format!("\nAttempting to fetch: {}", url)],
        Event::Finished {
            outcome: Ok(saved), ..
        } => saved_lines(saved),
        Event::Finished {
            url,
            outcome: Err(e),
        } => vec![error_line(url, e)],
    }
}

fn saved_lines(saved: &SavedImage) -> Vec<String> {
    vec![
        format!("✓ Successfully fetched: {}", saved.filename),
        format!("✓ Image saved to {}", saved.path.display()),
        "\nConnection strengthened. Community enriched.".to_string(),
    ]
}

fn error_line(url: &str, e: &FetchError) -> String {
    match e {
        FetchError::UnsupportedScheme(_) | FetchError::InvalidUrl(_) => format!(
            "✗ Skipping {}. Only HTTP/HTTPS URLs are supported for safety.",
            url
        ),
        FetchError::NotAnImage(ct) => {
            format!("✗ Skipping {}. Content-Type is not an image: {}", url, ct)
        }
        FetchError::TooLarge { length, .. } => {
            format!("✗ Skipping {}. File is too large ({} bytes).", url, length)
        }
        FetchError::Duplicate(_) => format!(
            "✓ Skipping {}. This is a duplicate of a previously downloaded image.",
            url
        ),
        FetchError::Transport(t) => format!("✗ Connection error for {}: {}", url, t),
        FetchError::Header(_) | FetchError::Io(_) => {
            format!("✗ An error occurred for {}: {}", url, e)
        }
    }
}
