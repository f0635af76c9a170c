//! Execution strategies
//!
//! Each strategy wraps one calling convention of the extraction API. All
//! three consume the same encoded corpus and retain their outputs for the
//! whole pass, so per-pass timing and peak allocation reflect real caller
//! cost and nothing else.

use crate::api::ExtractionApi;
use crate::corpus::EncodedCorpus;
use crate::Result;

/// One of the three calling conventions under comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// One `extract_single` call per document.
    Sequential,
    /// One `extract_batch_array` call plus decode of the aggregated payload.
    BatchArray,
    /// One `extract_batch_iter` call drained to exhaustion.
    BatchIter,
}

impl Strategy {
    /// All strategies, in reporting order. Sequential is the baseline.
    pub const ALL: [Strategy; 3] = [Strategy::Sequential, Strategy::BatchArray, Strategy::BatchIter];

    /// Short name used in diagnostics and error context.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Sequential => "sequential",
            Strategy::BatchArray => "batch-array",
            Strategy::BatchIter => "batch-iter",
        }
    }

    /// Per-strategy heading in the report body.
    pub fn label(&self) -> &'static str {
        match self {
            Strategy::Sequential => "1. Sequential (extract_single loop)",
            Strategy::BatchArray => "2. Batch array (extract_batch_array)",
            Strategy::BatchIter => "3. Batch iter  (extract_batch_iter + workspace reuse)",
        }
    }

    /// Row label in the summary table.
    pub fn summary_label(&self) -> &'static str {
        match self {
            Strategy::Sequential => "Sequential (baseline)",
            Strategy::BatchArray => "Batch array",
            Strategy::BatchIter => "Batch iter (workspace reuse)",
        }
    }

    /// Execute one full pass over the encoded corpus.
    ///
    /// Returns the number of per-document results consumed. Decoding the
    /// batch-array payload and draining the iterator happen inside the pass
    /// because both are part of the real caller cost.
    pub fn run_pass(&self, api: &dyn ExtractionApi, corpus: &EncodedCorpus) -> Result<usize> {
        match self {
            Strategy::Sequential => {
                let mut results = Vec::with_capacity(corpus.documents.len());
                for document_json in &corpus.documents {
                    results.push(api.extract_single(document_json)?);
                }
                Ok(results.len())
            }
            Strategy::BatchArray => {
                let payload = api.extract_batch_array(&corpus.batch)?;
                let decoded: Vec<serde_json::Value> = serde_json::from_str(&payload)?;
                Ok(decoded.len())
            }
            Strategy::BatchIter => {
                let mut producer = api.extract_batch_iter(&corpus.batch)?;
                let results = producer.drain()?;
                Ok(results.len())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::KeyrankAdapter;
    use crate::corpus::{EncodedCorpus, generate_docs};

    fn encoded(n: usize) -> EncodedCorpus {
        EncodedCorpus::encode(&generate_docs(n, 2, true)).unwrap()
    }

    #[test]
    fn test_every_strategy_consumes_whole_corpus() {
        let corpus = encoded(7);
        let adapter = KeyrankAdapter::new();

        for strategy in Strategy::ALL {
            let consumed = strategy.run_pass(&adapter, &corpus).unwrap();
            assert_eq!(consumed, 7, "{} must consume every document", strategy.name());
        }
    }

    #[test]
    fn test_empty_corpus_is_a_valid_pass() {
        let corpus = encoded(0);
        let adapter = KeyrankAdapter::new();

        for strategy in Strategy::ALL {
            assert_eq!(strategy.run_pass(&adapter, &corpus).unwrap(), 0);
        }
    }

    #[test]
    fn test_names_are_stable() {
        assert_eq!(Strategy::Sequential.name(), "sequential");
        assert_eq!(Strategy::BatchArray.name(), "batch-array");
        assert_eq!(Strategy::BatchIter.name(), "batch-iter");
    }
}
