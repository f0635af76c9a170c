//! Reusable scratch buffers for repeated extraction calls.

use ahash::AHashMap;

/// Scratch state shared across per-document extraction calls within one
/// batch. Buffers are cleared between documents, not reallocated, so map
/// tables and vector capacity survive across the batch.
#[derive(Debug, Default)]
pub struct ExtractWorkspace {
    /// Accumulated score per lemma for the document currently being ranked.
    pub(crate) scores: AHashMap<String, f64>,

    /// Sort buffer for ranked (lemma, score) pairs.
    pub(crate) ranked: Vec<(String, f64)>,
}

impl ExtractWorkspace {
    /// Create an empty workspace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset per-document state while retaining allocated capacity.
    pub(crate) fn clear(&mut self) {
        self.scores.clear();
        self.ranked.clear();
    }
}
