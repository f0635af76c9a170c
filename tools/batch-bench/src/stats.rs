//! Timing aggregation and cross-strategy comparison
//!
//! Means and sample standard deviations over per-round wall-clock samples,
//! throughput, baseline-relative ratios, and the two-branch head-to-head
//! comparison used for the workspace-reuse verdict.

use crate::runner::StrategyMeasurement;
use crate::strategy::Strategy;
use std::time::Duration;

/// Arithmetic mean; zero for an empty sample set.
pub fn mean(samples: &[Duration]) -> Duration {
    if samples.is_empty() {
        return Duration::ZERO;
    }
    let total: f64 = samples.iter().map(Duration::as_secs_f64).sum();
    Duration::from_secs_f64(total / samples.len() as f64)
}

/// Sample standard deviation (n − 1 denominator); zero when fewer than two
/// samples exist.
pub fn std_dev(samples: &[Duration]) -> Duration {
    if samples.len() < 2 {
        return Duration::ZERO;
    }
    let mean_secs = mean(samples).as_secs_f64();
    let variance: f64 = samples
        .iter()
        .map(|d| {
            let diff = d.as_secs_f64() - mean_secs;
            diff * diff
        })
        .sum::<f64>()
        / (samples.len() - 1) as f64;
    Duration::from_secs_f64(variance.sqrt())
}

/// Documents per second at the given mean duration; zero if the mean is
/// zero.
pub fn throughput(doc_count: usize, mean: Duration) -> f64 {
    let secs = mean.as_secs_f64();
    if secs > 0.0 { doc_count as f64 / secs } else { 0.0 }
}

/// Baseline-relative speedup; zero if the strategy mean is zero.
pub fn speedup(baseline_mean: Duration, strategy_mean: Duration) -> f64 {
    let strategy_secs = strategy_mean.as_secs_f64();
    if strategy_secs > 0.0 {
        baseline_mean.as_secs_f64() / strategy_secs
    } else {
        0.0
    }
}

/// Baseline-relative peak-memory ratio; zero if the baseline peak is zero.
pub fn memory_ratio(strategy_peak: usize, baseline_peak: usize) -> f64 {
    if baseline_peak > 0 {
        strategy_peak as f64 / baseline_peak as f64
    } else {
        0.0
    }
}

/// Outcome of a two-branch head-to-head comparison.
///
/// The branch decides which of two distinct report sentences is emitted;
/// a candidate that is not strictly better is always reported as overhead,
/// never as a negative advantage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeadToHead {
    /// Candidate is strictly better; percent improvement over the reference.
    Advantage(f64),
    /// Candidate is equal or worse; percent overhead over the reference.
    Overhead(f64),
}

/// Compare a candidate quantity against a reference (lower is better).
pub fn head_to_head(candidate: f64, reference: f64) -> HeadToHead {
    if reference <= 0.0 {
        return HeadToHead::Overhead(0.0);
    }
    if candidate < reference {
        HeadToHead::Advantage((1.0 - candidate / reference) * 100.0)
    } else {
        HeadToHead::Overhead((candidate / reference - 1.0) * 100.0)
    }
}

/// Derived per-strategy statistics, ready for rendering.
#[derive(Debug, Clone)]
pub struct StrategySummary {
    pub strategy: Strategy,
    pub mean: Duration,
    pub std_dev: Duration,
    pub throughput: f64,
    pub peak_bytes: usize,
}

/// Aggregate one strategy's samples.
pub fn summarize(measurement: &StrategyMeasurement, doc_count: usize) -> StrategySummary {
    let mean = mean(&measurement.timings);
    StrategySummary {
        strategy: measurement.strategy,
        mean,
        std_dev: std_dev(&measurement.timings),
        throughput: throughput(doc_count, mean),
        peak_bytes: measurement.peak_bytes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_mean_of_single_sample_is_the_sample() {
        assert_eq!(mean(&[ms(10)]), ms(10));
    }

    #[test]
    fn test_mean_of_empty_set_is_zero() {
        assert_eq!(mean(&[]), Duration::ZERO);
    }

    #[test]
    fn test_std_dev_below_two_samples_is_zero() {
        assert_eq!(std_dev(&[]), Duration::ZERO);
        assert_eq!(std_dev(&[ms(10)]), Duration::ZERO);
    }

    #[test]
    fn test_std_dev_uses_sample_denominator() {
        // samples 2ms and 4ms: mean 3ms, sample variance (1+1)/1 = 2 ms²
        let sd = std_dev(&[ms(2), ms(4)]);
        let expected = 2.0_f64.sqrt() / 1000.0;
        assert!((sd.as_secs_f64() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_throughput() {
        assert!((throughput(200, ms(100)) - 2000.0).abs() < 1e-6);
        assert_eq!(throughput(200, Duration::ZERO), 0.0);
    }

    #[test]
    fn test_speedup_is_one_at_equal_means() {
        assert_eq!(speedup(ms(10), ms(10)), 1.0);
    }

    #[test]
    fn test_speedup_against_faster_strategy() {
        // sequential 10ms rounds vs iterator 5ms rounds
        let seq = mean(&[ms(10), ms(10), ms(10)]);
        let iter = mean(&[ms(5), ms(5), ms(5)]);
        assert!((speedup(seq, iter) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_memory_ratio_is_one_at_equal_peaks() {
        assert_eq!(memory_ratio(1024, 1024), 1.0);
        assert_eq!(memory_ratio(1024, 0), 0.0);
    }

    #[test]
    fn test_head_to_head_advantage_branch() {
        // iterator 5ms vs batch array 10ms: 50.0% faster
        match head_to_head(5.0, 10.0) {
            HeadToHead::Advantage(pct) => assert!((pct - 50.0).abs() < 1e-12),
            other => panic!("expected advantage, got {other:?}"),
        }
    }

    #[test]
    fn test_head_to_head_overhead_branch() {
        // iterator 6ms vs batch array 5ms: 20.0% slower, never -20% "faster"
        match head_to_head(6.0, 5.0) {
            HeadToHead::Overhead(pct) => assert!((pct - 20.0).abs() < 1e-9),
            other => panic!("expected overhead, got {other:?}"),
        }
    }

    #[test]
    fn test_head_to_head_equal_is_overhead_zero() {
        assert_eq!(head_to_head(5.0, 5.0), HeadToHead::Overhead(0.0));
    }

    #[test]
    fn test_summarize() {
        let measurement = StrategyMeasurement {
            strategy: Strategy::BatchIter,
            timings: vec![ms(5), ms(5), ms(5)],
            peak_bytes: 4096,
        };
        let summary = summarize(&measurement, 200);

        assert_eq!(summary.mean, ms(5));
        assert_eq!(summary.std_dev, Duration::ZERO);
        assert!((summary.throughput - 40_000.0).abs() < 1e-6);
        assert_eq!(summary.peak_bytes, 4096);
    }
}
