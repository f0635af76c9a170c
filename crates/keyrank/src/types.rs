//! Wire types for the JSON extraction API.
//!
//! These types are the public contract consumed by callers in any language;
//! field names and their serialized forms are stable.

use serde::{Deserialize, Serialize};

/// One pre-tokenized token with character offsets into the source text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Surface form as it appeared in the source text.
    pub text: String,

    /// Lemmatized form; ranking operates on lemmas.
    pub lemma: String,

    /// Universal POS tag (e.g. "NOUN", "VERB", "ADJ").
    pub pos: String,

    /// Inclusive character start offset.
    pub start: usize,

    /// Exclusive character end offset.
    pub end: usize,

    /// Zero-based index of the containing sentence.
    pub sentence_idx: usize,

    /// Zero-based dense token index within the document.
    pub token_idx: usize,

    /// Whether the token is a stopword; stopwords are never candidates.
    pub is_stopword: bool,
}

/// Tie-breaking behavior for equal-scored lemmas.
///
/// `Deterministic` orders equal scores lexicographically by lemma so output
/// is stable across runs; `Relaxed` skips the tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Determinism {
    Deterministic,
    Relaxed,
}

impl Default for Determinism {
    fn default() -> Self {
        Self::Deterministic
    }
}

/// Per-document extraction options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExtractionOptions {
    /// Maximum number of keywords to return.
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Ordering mode for equal-scored lemmas.
    #[serde(default)]
    pub determinism: Determinism,
}

fn default_top_n() -> usize {
    10
}

impl Default for ExtractionOptions {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            determinism: Determinism::default(),
        }
    }
}

/// A pre-tokenized document as accepted by every entry point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentInput {
    /// Token stream, ordered by `token_idx`.
    pub tokens: Vec<Token>,

    /// Extraction options.
    #[serde(default)]
    pub config: ExtractionOptions,

    /// Optional pipeline selector ("textrank"). When absent, the legacy
    /// frequency path is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipeline: Option<String>,
}

/// One ranked keyword.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredKeyword {
    /// Lemma the score was accumulated under.
    pub lemma: String,

    /// Relevance score; higher is better.
    pub score: f64,
}

/// Extraction result for one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractOutput {
    /// Keywords sorted by descending score.
    pub keywords: Vec<ScoredKeyword>,
}
