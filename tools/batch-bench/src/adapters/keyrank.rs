//! Native keyrank adapter
//!
//! Bridges the extraction seam to the keyrank crate's JSON entry points.
//! This is the only module that knows which backend is being measured.

use crate::api::{ExtractionApi, ResultProducer};
use crate::{Error, Result};

impl From<keyrank::ExtractError> for Error {
    fn from(err: keyrank::ExtractError) -> Self {
        Error::Extraction(err.to_string())
    }
}

/// Adapter over the in-process keyrank library
#[derive(Debug, Default)]
pub struct KeyrankAdapter;

impl KeyrankAdapter {
    /// Create a new adapter.
    pub fn new() -> Self {
        Self
    }
}

impl ExtractionApi for KeyrankAdapter {
    fn extract_single(&self, document_json: &str) -> Result<String> {
        Ok(keyrank::extract_from_json(document_json)?)
    }

    fn extract_batch_array(&self, corpus_json: &str) -> Result<String> {
        Ok(keyrank::extract_batch_from_json(corpus_json)?)
    }

    fn extract_batch_iter<'a>(&'a self, corpus_json: &'a str) -> Result<Box<dyn ResultProducer + 'a>> {
        let iter = keyrank::extract_batch_iter(corpus_json)?;
        Ok(Box::new(KeyrankProducer { inner: iter }))
    }
}

/// Pull-based wrapper over keyrank's batch iterator.
struct KeyrankProducer {
    inner: keyrank::BatchIter,
}

impl ResultProducer for KeyrankProducer {
    fn next_result(&mut self) -> Option<Result<String>> {
        self.inner.next().map(|r| r.map_err(Error::from))
    }
}
