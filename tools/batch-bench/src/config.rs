//! Benchmark configuration

use crate::{Error, Result};

/// Configuration for one benchmark run
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Number of synthetic documents in the corpus
    pub docs: usize,

    /// Number of warmup rounds per strategy (discarded from statistics)
    pub warmup: usize,

    /// Number of measurement rounds per strategy
    pub rounds: usize,

    /// Base sentences per document; per-document counts cycle upward from it
    pub sentences: usize,

    /// Use the legacy variant input shape (omits the pipeline selector)
    pub variant: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            docs: 200,
            warmup: 2,
            rounds: 5,
            sentences: 8,
            variant: false,
        }
    }
}

impl BenchConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if any configuration value is invalid
    pub fn validate(&self) -> Result<()> {
        if self.rounds == 0 {
            return Err(Error::Config("rounds must be > 0".to_string()));
        }

        if self.sentences == 0 {
            return Err(Error::Config("sentences must be > 0".to_string()));
        }

        Ok(())
    }

    /// Whether generated documents carry the pipeline selector field
    pub fn use_pipeline(&self) -> bool {
        !self.variant
    }

    /// Input-shaping label shown in the report header
    pub fn path_label(&self) -> &'static str {
        if self.variant { "variant (legacy)" } else { "pipeline" }
    }
}
