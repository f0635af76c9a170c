//! Extraction API seam
//!
//! The measured library is reached only through [`ExtractionApi`], so the
//! serialization conventions of any one backend stay inside its adapter and
//! never leak into measurement logic.

use crate::Result;

/// The three calling conventions of the measured extraction API.
///
/// JSON payloads in, JSON payloads out; the conventions differ only in how
/// the corpus is handed over and how results come back.
pub trait ExtractionApi {
    /// Extract one document; one call per document.
    fn extract_single(&self, document_json: &str) -> Result<String>;

    /// Extract the whole corpus in one call, returning one aggregated
    /// result payload.
    fn extract_batch_array(&self, corpus_json: &str) -> Result<String>;

    /// Extract the whole corpus through a lazy per-document producer.
    fn extract_batch_iter<'a>(&'a self, corpus_json: &'a str) -> Result<Box<dyn ResultProducer + 'a>>;
}

/// Finite, non-restartable, pull-based producer of per-document results.
///
/// Single consumer; a measurement is only valid once the producer has been
/// drained to exhaustion.
pub trait ResultProducer {
    /// Pull the next per-document result payload; `None` once exhausted.
    fn next_result(&mut self) -> Option<Result<String>>;

    /// Drain to exhaustion, materializing every result.
    ///
    /// All produced payloads are returned so they stay live for the rest of
    /// the pass, matching what the other strategies retain.
    fn drain(&mut self) -> Result<Vec<String>> {
        let mut results = Vec::new();
        while let Some(result) = self.next_result() {
            results.push(result?);
        }
        Ok(results)
    }
}
