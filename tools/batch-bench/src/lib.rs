//! Benchmark harness for comparing extraction API calling conventions
//!
//! This crate measures the keyrank JSON extraction API in its three calling
//! conventions — per-document sequential calls, one whole-batch array call,
//! and a workspace-reusing batch iterator — over an identical deterministic
//! corpus, and reports timing statistics, peak allocation, and derived
//! cross-strategy ratios.

pub mod adapters;
pub mod api;
pub mod config;
pub mod corpus;
pub mod error;
pub mod memory;
pub mod report;
pub mod runner;
pub mod stats;
pub mod strategy;

pub use adapters::KeyrankAdapter;
pub use api::{ExtractionApi, ResultProducer};
pub use config::BenchConfig;
pub use corpus::{Document, EncodedCorpus, Token, generate_docs};
pub use error::{Error, Result};
pub use memory::{AllocProbe, TracingAllocator};
pub use report::{WorkloadInfo, render};
pub use runner::{BenchmarkRunner, StrategyMeasurement};
pub use stats::{HeadToHead, StrategySummary};
pub use strategy::Strategy;
