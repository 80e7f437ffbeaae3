//! In-memory set of fingerprints already saved during this run.

use crate::fingerprint::Fingerprint;
use std::collections::HashSet;

/// Fingerprints of images persisted by the current pipeline.
///
/// Starts empty and is never written to disk; files left by earlier runs are
/// not considered.
#[derive(Debug, Default)]
pub struct SeenSet {
    seen: HashSet<Fingerprint>,
}

impl SeenSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, fp: &Fingerprint) -> bool {
        self.seen.contains(fp)
    }

    /// Records `fp`. Returns false if it was already present.
    pub fn insert(&mut self, fp: Fingerprint) -> bool {
        self.seen.insert(fp)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
