//! Human-readable report rendering
//!
//! Renders the workload header, one block per strategy, the cross-strategy
//! summary table, and the workspace-reuse verdict lines to a single string
//! destined for stdout.

use crate::config::BenchConfig;
use crate::corpus::{self, Document, EncodedCorpus};
use crate::stats::{self, HeadToHead, StrategySummary};
use crate::strategy::Strategy;
use std::fmt::{self, Write};
use std::time::Duration;

/// Workload facts shown in the report header.
#[derive(Debug, Clone)]
pub struct WorkloadInfo {
    pub doc_count: usize,
    pub path_label: &'static str,
    pub avg_tokens: f64,
    pub rounds: usize,
    pub warmup: usize,
    pub batch_payload_kb: f64,
}

impl WorkloadInfo {
    /// Collect header facts from the run inputs.
    pub fn new(config: &BenchConfig, docs: &[Document], encoded: &EncodedCorpus) -> Self {
        Self {
            doc_count: docs.len(),
            path_label: config.path_label(),
            avg_tokens: corpus::average_token_count(docs),
            rounds: config.rounds,
            warmup: config.warmup,
            batch_payload_kb: encoded.batch_payload_kb(),
        }
    }
}

/// Format a duration as milliseconds with two decimals.
pub fn fmt_ms(duration: Duration) -> String {
    format!("{:.2} ms", duration.as_secs_f64() * 1000.0)
}

/// Format a byte count with an auto-selected unit.
pub fn fmt_mem(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = 1024.0 * 1024.0;

    let b = bytes as f64;
    if b >= MB {
        format!("{:.2} MB", b / MB)
    } else if b >= KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{b:.0} B")
    }
}

/// Format a non-negative count with thousands separators.
fn fmt_count(value: f64) -> String {
    let digits = (value.round().max(0.0) as u64).to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Render the full report.
pub fn render(workload: &WorkloadInfo, summaries: &[StrategySummary]) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = write_report(&mut out, workload, summaries);
    out
}

fn write_report(out: &mut String, workload: &WorkloadInfo, summaries: &[StrategySummary]) -> fmt::Result {
    writeln!(out, "Batch Comparison Benchmark")?;
    writeln!(out, "  Documents    : {}", workload.doc_count)?;
    writeln!(out, "  Path         : {}", workload.path_label)?;
    writeln!(out, "  Avg tokens   : {:.0} per doc", workload.avg_tokens)?;
    writeln!(out, "  Rounds       : {} (+ {} warmup)", workload.rounds, workload.warmup)?;
    writeln!(out, "  Batch JSON   : {:.1} KB", workload.batch_payload_kb)?;

    for summary in summaries {
        writeln!(out, "\n{}", "─".repeat(60))?;
        writeln!(out, "  {}", summary.strategy.label())?;
        writeln!(out, "{}", "─".repeat(60))?;
        writeln!(
            out,
            "  Wall clock    : {} ± {}",
            fmt_ms(summary.mean),
            fmt_ms(summary.std_dev)
        )?;
        writeln!(out, "  Throughput    : {} docs/sec", fmt_count(summary.throughput))?;
        writeln!(out, "  Peak memory   : {}", fmt_mem(summary.peak_bytes))?;
    }

    let baseline = summaries.iter().find(|s| s.strategy == Strategy::Sequential);
    let (base_mean, base_peak) = baseline.map_or((Duration::ZERO, 0), |s| (s.mean, s.peak_bytes));

    writeln!(out, "\n{}", "━".repeat(60))?;
    writeln!(out, "  {:<40} {:>8}  {:>10}", "Mode", "Speedup", "Memory")?;
    writeln!(out, "  {} {}  {}", "─".repeat(40), "─".repeat(8), "─".repeat(10))?;
    for summary in summaries {
        writeln!(
            out,
            "  {:<40} {:>7.2}x  {:>9.1}x",
            summary.strategy.summary_label(),
            stats::speedup(base_mean, summary.mean),
            stats::memory_ratio(summary.peak_bytes, base_peak),
        )?;
    }
    writeln!(out, "{}", "━".repeat(60))?;

    let batch = summaries.iter().find(|s| s.strategy == Strategy::BatchArray);
    let iter = summaries.iter().find(|s| s.strategy == Strategy::BatchIter);

    if let (Some(batch), Some(iter)) = (batch, iter) {
        match stats::head_to_head(iter.mean.as_secs_f64(), batch.mean.as_secs_f64()) {
            HeadToHead::Advantage(pct) => {
                writeln!(out, "\n  Workspace reuse advantage: {pct:.1}% faster than batch array")?;
            }
            HeadToHead::Overhead(pct) => {
                writeln!(out, "\n  Workspace reuse overhead: {pct:.1}% slower than batch array")?;
            }
        }

        match stats::head_to_head(iter.peak_bytes as f64, batch.peak_bytes as f64) {
            HeadToHead::Advantage(pct) => {
                writeln!(out, "  Memory savings: {pct:.1}% less peak memory than batch array")?;
            }
            HeadToHead::Overhead(pct) => {
                writeln!(out, "  Memory overhead: {pct:.1}% more peak memory than batch array")?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn summary(strategy: Strategy, mean: Duration, peak_bytes: usize) -> StrategySummary {
        StrategySummary {
            strategy,
            mean,
            std_dev: Duration::ZERO,
            throughput: stats::throughput(200, mean),
            peak_bytes,
        }
    }

    fn workload() -> WorkloadInfo {
        WorkloadInfo {
            doc_count: 200,
            path_label: "pipeline",
            avg_tokens: 53.0,
            rounds: 3,
            warmup: 2,
            batch_payload_kb: 120.5,
        }
    }

    #[test]
    fn test_fmt_ms() {
        assert_eq!(fmt_ms(Duration::from_micros(10_500)), "10.50 ms");
        assert_eq!(fmt_ms(Duration::ZERO), "0.00 ms");
    }

    #[test]
    fn test_fmt_mem_selects_unit() {
        assert_eq!(fmt_mem(512), "512 B");
        assert_eq!(fmt_mem(2_048), "2.0 KB");
        assert_eq!(fmt_mem(3 * 1024 * 1024 / 2), "1.50 MB");
    }

    #[test]
    fn test_fmt_count_groups_thousands() {
        assert_eq!(fmt_count(0.0), "0");
        assert_eq!(fmt_count(999.0), "999");
        assert_eq!(fmt_count(20_000.4), "20,000");
        assert_eq!(fmt_count(1_234_567.0), "1,234,567");
    }

    #[test]
    fn test_render_reports_speedup_and_advantage() {
        // sequential 10ms, iterator 5ms: 2.00x speedup, 50.0% faster than
        // the 8ms batch array
        let summaries = vec![
            summary(Strategy::Sequential, ms(10), 2048),
            summary(Strategy::BatchArray, ms(8), 4096),
            summary(Strategy::BatchIter, ms(5), 1024),
        ];

        let report = render(&workload(), &summaries);

        assert!(report.contains("Batch Comparison Benchmark"));
        assert!(report.contains("Path         : pipeline"));
        assert!(report.contains("2.00x"));
        assert!(report.contains("Workspace reuse advantage: 37.5% faster than batch array"));
        assert!(report.contains("Memory savings: 75.0% less peak memory than batch array"));
        assert!(!report.contains("slower than batch array"));
    }

    #[test]
    fn test_render_exact_two_x_speedup_and_fifty_percent_advantage() {
        // sequential and batch array at 10ms, iterator at 5ms: the iterator
        // row reads 2.00x and the verdict reads 50.0% faster, computed
        // against the batch-array mean
        let summaries = vec![
            summary(Strategy::Sequential, ms(10), 2048),
            summary(Strategy::BatchArray, ms(10), 2048),
            summary(Strategy::BatchIter, ms(5), 2048),
        ];

        let report = render(&workload(), &summaries);

        assert!(report.contains("2.00x"));
        assert!(report.contains("Workspace reuse advantage: 50.0% faster than batch array"));
    }

    #[test]
    fn test_render_reports_overhead_when_iterator_is_slower() {
        // iterator 6ms vs batch array 5ms: 20.0% slower, never a negative
        // advantage percentage
        let summaries = vec![
            summary(Strategy::Sequential, ms(10), 2048),
            summary(Strategy::BatchArray, ms(5), 1024),
            summary(Strategy::BatchIter, ms(6), 2048),
        ];

        let report = render(&workload(), &summaries);

        assert!(report.contains("Workspace reuse overhead: 20.0% slower than batch array"));
        assert!(report.contains("Memory overhead: 100.0% more peak memory than batch array"));
        assert!(!report.contains("faster than batch array"));
        assert!(!report.contains('-'), "no negative percentages in the verdict");
    }

    #[test]
    fn test_render_baseline_speedup_is_one() {
        let summaries = vec![
            summary(Strategy::Sequential, ms(10), 2048),
            summary(Strategy::BatchArray, ms(10), 2048),
            summary(Strategy::BatchIter, ms(10), 2048),
        ];

        let report = render(&workload(), &summaries);
        assert!(report.contains("1.00x"));
        assert!(report.contains("1.0x"));
    }
}
