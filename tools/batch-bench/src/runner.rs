//! Measurement engine
//!
//! Runs each strategy through warmup rounds (discarded), timed measurement
//! rounds, and a single allocation-traced pass, strictly in program order.
//! The encoded corpus is shared read-only across every round and strategy,
//! so only strategy execution cost is ever measured.

use crate::api::ExtractionApi;
use crate::config::BenchConfig;
use crate::corpus::EncodedCorpus;
use crate::memory::AllocProbe;
use crate::strategy::Strategy;
use crate::{Error, Result};
use std::fmt;
use std::time::{Duration, Instant};

/// Phase of one strategy's measurement lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Warmup,
    Measure,
    MemoryProbe,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Warmup => "warmup",
            Phase::Measure => "measure",
            Phase::MemoryProbe => "memory probe",
        };
        f.write_str(name)
    }
}

/// Samples collected for one strategy.
#[derive(Debug, Clone)]
pub struct StrategyMeasurement {
    /// The measured strategy.
    pub strategy: Strategy,

    /// One wall-clock sample per measurement round.
    pub timings: Vec<Duration>,

    /// Peak live allocation from the single traced pass.
    pub peak_bytes: usize,
}

/// Orchestrates warmup, measurement, and memory probing per strategy.
pub struct BenchmarkRunner<'a> {
    api: &'a dyn ExtractionApi,
    corpus: &'a EncodedCorpus,
    config: &'a BenchConfig,
}

impl<'a> BenchmarkRunner<'a> {
    /// Create a runner over a pre-encoded corpus.
    pub fn new(api: &'a dyn ExtractionApi, corpus: &'a EncodedCorpus, config: &'a BenchConfig) -> Self {
        Self { api, corpus, config }
    }

    /// Measure every strategy, in reporting order.
    ///
    /// Any failure aborts the whole run; a benchmark with a latent fault is
    /// not a valid sample and no partial statistics are produced.
    pub fn run_all(&self) -> Result<Vec<StrategyMeasurement>> {
        Strategy::ALL
            .iter()
            .map(|&strategy| self.run_strategy(strategy))
            .collect()
    }

    /// Run one strategy through its full lifecycle:
    /// warmup(k) → measuring(m) → memory probe(1).
    fn run_strategy(&self, strategy: Strategy) -> Result<StrategyMeasurement> {
        for round in 0..self.config.warmup {
            self.one_pass(strategy, Phase::Warmup, round)?;
        }

        let mut timings = Vec::with_capacity(self.config.rounds);
        for round in 0..self.config.rounds {
            let start = Instant::now();
            self.one_pass(strategy, Phase::Measure, round)?;
            timings.push(start.elapsed());
        }

        // One traced, untimed pass. Tracing overhead perturbs timing, so
        // the peak is never averaged across repeated instrumented runs.
        let probe = AllocProbe::start();
        self.one_pass(strategy, Phase::MemoryProbe, 0)?;
        let peak_bytes = probe.finish();

        Ok(StrategyMeasurement {
            strategy,
            timings,
            peak_bytes,
        })
    }

    fn one_pass(&self, strategy: Strategy, phase: Phase, round: usize) -> Result<()> {
        let consumed = strategy
            .run_pass(self.api, self.corpus)
            .map_err(|e| Error::Round {
                strategy: strategy.name().to_string(),
                phase: phase.to_string(),
                round,
                message: e.to_string(),
            })?;

        if consumed != self.corpus.doc_count() {
            return Err(Error::Round {
                strategy: strategy.name().to_string(),
                phase: phase.to_string(),
                round,
                message: format!("consumed {consumed} of {} documents", self.corpus.doc_count()),
            });
        }

        Ok(())
    }
}
