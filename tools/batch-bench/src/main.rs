//! Batch comparison benchmark CLI
//!
//! Measures the keyrank extraction API in its three calling conventions —
//! sequential, batch array, batch iterator — over an identical deterministic
//! corpus and prints a comparative report.

use batch_bench::{
    BenchConfig, BenchmarkRunner, EncodedCorpus, KeyrankAdapter, Result, TracingAllocator, WorkloadInfo,
    generate_docs, render, stats,
};
use clap::Parser;

// Required for peak-allocation probes; pass-through outside probe scopes.
#[global_allocator]
static ALLOC: TracingAllocator = TracingAllocator;

#[derive(Parser)]
#[command(name = "batch-bench")]
#[command(about = "Benchmark sequential vs batch vs iterator extraction calls", long_about = None)]
struct Cli {
    /// Number of documents
    #[arg(long, default_value_t = 200)]
    docs: usize,

    /// Warmup rounds (discarded from statistics)
    #[arg(long, default_value_t = 2)]
    warmup: usize,

    /// Measurement rounds
    #[arg(long, default_value_t = 5)]
    rounds: usize,

    /// Base sentences per document
    #[arg(long, default_value_t = 8)]
    sentences: usize,

    /// Use the legacy variant path instead of the pipeline path
    #[arg(long)]
    variant: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = BenchConfig {
        docs: cli.docs,
        warmup: cli.warmup,
        rounds: cli.rounds,
        sentences: cli.sentences,
        variant: cli.variant,
    };
    config.validate()?;

    let docs = generate_docs(config.docs, config.sentences, config.use_pipeline());
    let encoded = EncodedCorpus::encode(&docs)?;
    let workload = WorkloadInfo::new(&config, &docs, &encoded);

    eprintln!(
        "[corpus] {} document(s) encoded ({:.1} KB batch payload)",
        encoded.doc_count(),
        encoded.batch_payload_kb()
    );

    let adapter = KeyrankAdapter::new();
    let runner = BenchmarkRunner::new(&adapter, &encoded, &config);
    let measurements = runner.run_all()?;

    let summaries: Vec<_> = measurements
        .iter()
        .map(|m| stats::summarize(m, config.docs))
        .collect();

    print!("{}", render(&workload, &summaries));

    Ok(())
}
