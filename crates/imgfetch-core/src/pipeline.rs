//! The fetch-validate-dedup-persist pipeline.
//!
//! URLs are handled one at a time, in input order. Each goes through scheme
//! validation, a HEAD pre-check, a full GET, fingerprinting, the duplicate
//! check and finally the write to disk. Any failure ends only that URL.

use crate::config::FetchConfig;
use crate::dedup::SeenSet;
use crate::downloader;
use crate::error::FetchError;
use crate::fetch_head;
use crate::fingerprint::Fingerprint;
use crate::storage;
use crate::url_model;
use std::path::PathBuf;

/// An image written to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedImage {
    pub filename: String,
    pub path: PathBuf,
    pub bytes: usize,
    pub fingerprint: Fingerprint,
}

/// Progress notifications emitted by [`Pipeline::run`].
#[derive(Debug)]
pub enum Event<'a> {
    /// About to process this URL.
    Attempt { url: &'a str },
    /// Finished processing this URL.
    Finished {
        url: &'a str,
        outcome: &'a Result<SavedImage, FetchError>,
    },
}

/// Counts for a whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub saved: usize,
    pub duplicates: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn attempted(&self) -> usize {
        self.saved + self.duplicates + self.failed
    }
}

/// Splits comma-separated user input into trimmed, non-blank URLs.
pub fn parse_url_list(input: &str) -> Vec<&str> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Owns the configuration and the seen-set for one run.
#[derive(Debug)]
pub struct Pipeline {
    config: FetchConfig,
    seen: SeenSet,
}

impl Pipeline {
    pub fn new(config: FetchConfig) -> Self {
        Self {
            config,
            seen: SeenSet::new(),
        }
    }

    pub fn seen(&self) -> &SeenSet {
        &self.seen
    }

    /// Processes every URL in `input`, reporting progress through `observer`.
    pub fn run<F>(&mut self, input: &str, mut observer: F) -> RunSummary
    where
        F: FnMut(Event<'_>),
    {
        let mut summary = RunSummary::default();
        for url in parse_url_list(input) {
            observer(Event::Attempt { url });
            let outcome = self.fetch_one(url);
            match &outcome {
                Ok(_) => summary.saved += 1,
                Err(FetchError::Duplicate(_)) => summary.duplicates += 1,
                Err(_) => summary.failed += 1,
            }
            observer(Event::Finished {
                url,
                outcome: &outcome,
            });
        }
        tracing::info!(
            saved = summary.saved,
            duplicates = summary.duplicates,
            failed = summary.failed,
            "run finished"
        );
        summary
    }

    /// Fetches a single URL and saves it unless a check rejects it.
    pub fn fetch_one(&mut self, raw_url: &str) -> Result<SavedImage, FetchError> {
        let result = self.try_fetch(raw_url);
        match &result {
            Ok(saved) => tracing::info!(
                url = raw_url,
                path = %saved.path.display(),
                bytes = saved.bytes,
                fingerprint = %saved.fingerprint,
                "image saved"
            ),
            Err(e) => tracing::warn!(url = raw_url, kind = ?e.kind(), "skipped: {}", e),
        }
        result
    }

    fn try_fetch(&mut self, raw_url: &str) -> Result<SavedImage, FetchError> {
        let url = url_model::validate_url(raw_url)?;

        let head = fetch_head::probe(url.as_str(), self.config.head_timeout())?;
        if !head.is_image() {
            return Err(FetchError::NotAnImage(head.content_type().to_string()));
        }
        let declared = head.declared_len();
        if declared > self.config.max_content_length {
            return Err(FetchError::TooLarge {
                length: declared,
                limit: self.config.max_content_length,
            });
        }

        let fetched = downloader::fetch_body(url.as_str(), self.config.get_timeout())?;
        if fetched.final_url != url.as_str() {
            url_model::validate_url(&fetched.final_url)?;
        }
        let body = fetched.body;

        let fingerprint = Fingerprint::of(&body);
        if self.seen.contains(&fingerprint) {
            return Err(FetchError::Duplicate(fingerprint.to_string()));
        }

        let filename = url_model::derive_filename(&url, head.content_type());
        let path = storage::persist(&self.config.output_dir, &filename, &body)?;
        self.seen.insert(fingerprint);

        Ok(SavedImage {
            filename,
            path,
            bytes: body.len(),
            fingerprint,
        })
    }
}
