//! Synthetic corpus generation and encoding
//!
//! Documents are generated deterministically from a fixed pool of sentence
//! templates so that every run, every round, and every strategy sees a
//! byte-identical workload. Sentence counts cycle per document to keep the
//! workload heterogeneous without introducing randomness.

use crate::{Error, Result};
use serde::Serialize;

/// (text, lemma, pos) triples for one templated sentence.
type TemplateToken = (&'static str, &'static str, &'static str);

/// Fixed sentence template pool; documents draw from it cyclically.
const SENTENCE_TEMPLATES: [&[TemplateToken]; 8] = [
    &[
        ("Machine", "machine", "NOUN"),
        ("learning", "learning", "NOUN"),
        ("algorithms", "algorithm", "NOUN"),
        ("process", "process", "VERB"),
        ("large", "large", "ADJ"),
        ("datasets", "dataset", "NOUN"),
    ],
    &[
        ("Natural", "natural", "ADJ"),
        ("language", "language", "NOUN"),
        ("processing", "processing", "NOUN"),
        ("enables", "enable", "VERB"),
        ("text", "text", "NOUN"),
        ("understanding", "understanding", "NOUN"),
    ],
    &[
        ("Neural", "neural", "ADJ"),
        ("networks", "network", "NOUN"),
        ("form", "form", "VERB"),
        ("the", "the", "DET"),
        ("backbone", "backbone", "NOUN"),
        ("of", "of", "ADP"),
        ("deep", "deep", "ADJ"),
        ("learning", "learning", "NOUN"),
    ],
    &[
        ("Gradient", "gradient", "NOUN"),
        ("descent", "descent", "NOUN"),
        ("optimizes", "optimize", "VERB"),
        ("model", "model", "NOUN"),
        ("parameters", "parameter", "NOUN"),
        ("during", "during", "ADP"),
        ("training", "training", "NOUN"),
    ],
    &[
        ("Feature", "feature", "NOUN"),
        ("engineering", "engineering", "NOUN"),
        ("transforms", "transform", "VERB"),
        ("raw", "raw", "ADJ"),
        ("data", "data", "NOUN"),
        ("into", "into", "ADP"),
        ("useful", "useful", "ADJ"),
        ("representations", "representation", "NOUN"),
    ],
    &[
        ("Convolutional", "convolutional", "ADJ"),
        ("neural", "neural", "ADJ"),
        ("networks", "network", "NOUN"),
        ("excel", "excel", "VERB"),
        ("at", "at", "ADP"),
        ("image", "image", "NOUN"),
        ("classification", "classification", "NOUN"),
    ],
    &[
        ("Distributed", "distributed", "ADJ"),
        ("systems", "system", "NOUN"),
        ("coordinate", "coordinate", "VERB"),
        ("multiple", "multiple", "ADJ"),
        ("computing", "computing", "NOUN"),
        ("nodes", "node", "NOUN"),
    ],
    &[
        ("Database", "database", "NOUN"),
        ("optimization", "optimization", "NOUN"),
        ("improves", "improve", "VERB"),
        ("query", "query", "NOUN"),
        ("performance", "performance", "NOUN"),
        ("through", "through", "ADP"),
        ("indexing", "indexing", "NOUN"),
    ],
];

/// Lemmas flagged as stopwords in generated tokens.
const STOPWORDS: [&str; 6] = ["the", "of", "at", "into", "during", "through"];

const DEFAULT_TOP_N: usize = 10;

/// One generated token in the extraction API's wire shape.
#[derive(Debug, Clone, Serialize)]
pub struct Token {
    pub text: String,
    pub lemma: String,
    pub pos: String,
    pub start: usize,
    pub end: usize,
    pub sentence_idx: usize,
    pub token_idx: usize,
    pub is_stopword: bool,
}

/// Per-document extraction options in the wire shape.
#[derive(Debug, Clone, Serialize)]
pub struct DocConfig {
    pub top_n: usize,
    pub determinism: String,
}

/// One generated document. Immutable once generated.
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    pub tokens: Vec<Token>,
    pub config: DocConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipeline: Option<String>,
}

/// Build the token stream for `num_sentences` sentences, cycling templates.
///
/// Character offsets accumulate token lengths plus one separator character;
/// `token_idx` is a dense zero-based sequence.
fn build_tokens(num_sentences: usize) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut char_offset = 0;
    let mut token_idx = 0;

    for sentence_idx in 0..num_sentences {
        let template = SENTENCE_TEMPLATES[sentence_idx % SENTENCE_TEMPLATES.len()];
        for &(text, lemma, pos) in template {
            let end = char_offset + text.len();
            tokens.push(Token {
                text: text.to_string(),
                lemma: lemma.to_string(),
                pos: pos.to_string(),
                start: char_offset,
                end,
                sentence_idx,
                token_idx,
                is_stopword: STOPWORDS.contains(&lemma.to_lowercase().as_str()),
            });
            char_offset = end + 1;
            token_idx += 1;
        }
    }

    tokens
}

/// Generate `n` documents. Sentence counts cycle `base, base+2, base+4,
/// base+6` so the workload stays heterogeneous while remaining deterministic.
pub fn generate_docs(n: usize, sentences_per_doc: usize, use_pipeline: bool) -> Vec<Document> {
    (0..n)
        .map(|i| {
            let sentences = sentences_per_doc + (i % 4) * 2;
            Document {
                tokens: build_tokens(sentences),
                config: DocConfig {
                    top_n: DEFAULT_TOP_N,
                    determinism: "deterministic".to_string(),
                },
                pipeline: use_pipeline.then(|| "textrank".to_string()),
            }
        })
        .collect()
}

/// Mean token count across documents; 0.0 for an empty corpus.
pub fn average_token_count(docs: &[Document]) -> f64 {
    if docs.is_empty() {
        return 0.0;
    }
    let total: usize = docs.iter().map(|d| d.tokens.len()).sum();
    total as f64 / docs.len() as f64
}

/// Pre-encoded corpus payloads, built once and shared read-only across all
/// strategies and rounds so the encoder never contributes to measured cost.
#[derive(Debug, Clone)]
pub struct EncodedCorpus {
    /// One JSON payload per document, in corpus order.
    pub documents: Vec<String>,

    /// The whole corpus as one aggregated JSON array payload.
    pub batch: String,
}

impl EncodedCorpus {
    /// Encode every document individually and the corpus as one array.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encode`] if serialization fails; with generator-built
    /// documents this indicates an internal-consistency fault.
    pub fn encode(docs: &[Document]) -> Result<Self> {
        let documents = docs
            .iter()
            .map(|doc| serde_json::to_string(doc))
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| Error::Encode { reason: e.to_string() })?;

        let batch = serde_json::to_string(docs).map_err(|e| Error::Encode { reason: e.to_string() })?;

        Ok(Self { documents, batch })
    }

    /// Number of documents in the encoded corpus.
    pub fn doc_count(&self) -> usize {
        self.documents.len()
    }

    /// Aggregated batch payload size in KB.
    pub fn batch_payload_kb(&self) -> f64 {
        self.batch.len() as f64 / 1024.0
    }
}
