//! JSON entry points for the extraction API.
//!
//! Three calling conventions over the same wire format:
//!
//! - [`extract_from_json`] — one document in, one result payload out.
//! - [`extract_batch_from_json`] — a JSON array of documents in, one
//!   aggregated JSON array of results out.
//! - [`extract_batch_iter`] — a JSON array of documents in, a lazy
//!   [`BatchIter`] of per-document result payloads out. The iterator keeps
//!   one [`ExtractWorkspace`] alive for the whole batch.

use crate::error::Result;
use crate::rank::rank_document;
use crate::types::{DocumentInput, ExtractOutput};
use crate::workspace::ExtractWorkspace;

/// Extract keywords from a single document payload.
pub fn extract_from_json(document_json: &str) -> Result<String> {
    let doc: DocumentInput = serde_json::from_str(document_json)?;
    tracing::debug!(tokens = doc.tokens.len(), top_n = doc.config.top_n, "single-document extraction");

    let mut ws = ExtractWorkspace::new();
    let out = rank_document(&doc, &mut ws)?;
    Ok(serde_json::to_string(&out)?)
}

/// Extract keywords from every document in a JSON array, returning one
/// aggregated result array.
pub fn extract_batch_from_json(corpus_json: &str) -> Result<String> {
    let docs: Vec<DocumentInput> = serde_json::from_str(corpus_json)?;
    tracing::debug!(documents = docs.len(), "batch-array extraction");

    let mut ws = ExtractWorkspace::new();
    let mut outputs: Vec<ExtractOutput> = Vec::with_capacity(docs.len());
    for doc in &docs {
        outputs.push(rank_document(doc, &mut ws)?);
    }
    Ok(serde_json::to_string(&outputs)?)
}

/// Extract keywords lazily, one document at a time.
///
/// The whole corpus array is parsed up front; ranking and result
/// serialization happen per pull. The returned iterator is finite,
/// single-consumer, and not restartable.
pub fn extract_batch_iter(corpus_json: &str) -> Result<BatchIter> {
    let docs: Vec<DocumentInput> = serde_json::from_str(corpus_json)?;
    tracing::debug!(documents = docs.len(), "batch-iterator extraction");

    Ok(BatchIter {
        docs: docs.into_iter(),
        workspace: ExtractWorkspace::new(),
    })
}

/// Lazy producer of per-document result payloads.
///
/// One workspace is retained for the lifetime of the iterator and cleared
/// between documents, so repeated pulls do not reallocate scratch state.
pub struct BatchIter {
    docs: std::vec::IntoIter<DocumentInput>,
    workspace: ExtractWorkspace,
}

impl Iterator for BatchIter {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let doc = self.docs.next()?;
        let result = rank_document(&doc, &mut self.workspace)
            .and_then(|out| serde_json::to_string(&out).map_err(Into::into));
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.docs.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ExtractionOptions, Token};

    fn sample_doc(lemmas: &[&str]) -> DocumentInput {
        let tokens = lemmas
            .iter()
            .enumerate()
            .map(|(i, lemma)| Token {
                text: lemma.to_string(),
                lemma: lemma.to_string(),
                pos: "NOUN".to_string(),
                start: i * 10,
                end: i * 10 + lemma.len(),
                sentence_idx: 0,
                token_idx: i,
                is_stopword: false,
            })
            .collect();
        DocumentInput {
            tokens,
            config: ExtractionOptions::default(),
            pipeline: Some("textrank".to_string()),
        }
    }

    #[test]
    fn test_extract_single_returns_keywords() {
        let doc = sample_doc(&["graph", "model", "graph"]);
        let json = serde_json::to_string(&doc).unwrap();

        let result = extract_from_json(&json).unwrap();
        let out: ExtractOutput = serde_json::from_str(&result).unwrap();

        assert!(!out.keywords.is_empty());
        for pair in out.keywords.windows(2) {
            assert!(pair[0].score >= pair[1].score, "keywords must be sorted by score");
        }
    }

    #[test]
    fn test_extract_single_rejects_malformed_payload() {
        assert!(extract_from_json("{not json").is_err());
        assert!(extract_from_json(r#"{"tokens": "wrong type"}"#).is_err());
    }

    #[test]
    fn test_batch_array_matches_single_calls() {
        let docs = vec![sample_doc(&["alpha", "beta"]), sample_doc(&["gamma", "delta"])];
        let batch_json = serde_json::to_string(&docs).unwrap();

        let aggregated = extract_batch_from_json(&batch_json).unwrap();
        let batch_out: Vec<ExtractOutput> = serde_json::from_str(&aggregated).unwrap();

        assert_eq!(batch_out.len(), 2);
        for (doc, expected) in docs.iter().zip(&batch_out) {
            let single = extract_from_json(&serde_json::to_string(doc).unwrap()).unwrap();
            let single_out: ExtractOutput = serde_json::from_str(&single).unwrap();
            assert_eq!(&single_out, expected);
        }
    }

    #[test]
    fn test_batch_iter_yields_one_result_per_document() {
        let docs = vec![
            sample_doc(&["one"]),
            sample_doc(&["two", "three"]),
            sample_doc(&["four"]),
        ];
        let batch_json = serde_json::to_string(&docs).unwrap();

        let results: Vec<String> = extract_batch_iter(&batch_json)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(results.len(), 3);
    }

    #[test]
    fn test_batch_iter_matches_batch_array_elements() {
        let docs = vec![sample_doc(&["alpha", "beta", "alpha"]), sample_doc(&["gamma"])];
        let batch_json = serde_json::to_string(&docs).unwrap();

        let aggregated = extract_batch_from_json(&batch_json).unwrap();
        let array_out: Vec<ExtractOutput> = serde_json::from_str(&aggregated).unwrap();

        let iter_out: Vec<ExtractOutput> = extract_batch_iter(&batch_json)
            .unwrap()
            .map(|r| serde_json::from_str(&r.unwrap()).unwrap())
            .collect();

        assert_eq!(array_out, iter_out);
    }

    #[test]
    fn test_batch_iter_is_finite() {
        let batch_json = serde_json::to_string(&vec![sample_doc(&["only"])]).unwrap();
        let mut iter = extract_batch_iter(&batch_json).unwrap();

        assert!(iter.next().is_some());
        assert!(iter.next().is_none());
        assert!(iter.next().is_none(), "exhausted iterator stays exhausted");
    }

    #[test]
    fn test_batch_iter_rejects_malformed_corpus() {
        assert!(extract_batch_iter(r#"{"not": "an array"}"#).is_err());
    }
}
