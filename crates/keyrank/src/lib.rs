//! Keyword ranking over pre-tokenized documents
//!
//! This crate exposes a JSON API in three calling conventions: per-document
//! extraction, whole-batch array extraction, and a batch iterator that reuses
//! one scratch workspace across documents to avoid repeated allocation.

pub mod api;
pub mod error;
pub mod rank;
pub mod types;
pub mod workspace;

pub use api::{BatchIter, extract_batch_from_json, extract_batch_iter, extract_from_json};
pub use error::{ExtractError, Result};
pub use types::{Determinism, DocumentInput, ExtractOutput, ExtractionOptions, ScoredKeyword, Token};
pub use workspace::ExtractWorkspace;
