//! Information gain calculation over feedback partitions
//!
//! Guessing a probe splits the candidates into groups by the feedback each
//! candidate would return. The expected entropy left afterwards is
//! `Σ (|g| / n) · log₂|g|`, and the information gain is `log₂ n` minus that.

use crate::core::{Code, Feedback};
use rustc_hash::FxHashMap;

/// Comprehensive metrics for evaluating a probe
#[derive(Debug, Clone, Copy)]
pub struct GuessMetrics {
    /// Expected information gain in bits
    pub information_gain: f64,
    /// Expected number of candidates left after this probe
    pub expected_remaining: f64,
    /// Largest feedback group (worst-case remaining candidates)
    pub max_partition: usize,
    /// Number of distinct feedback outcomes
    pub partitions: usize,
}

/// Count candidates by the feedback they would give to `probe`
#[must_use]
pub fn partition_by_feedback(probe: &Code, candidates: &[Code]) -> FxHashMap<Feedback, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        let feedback = Feedback::calculate(probe, candidate);
        *counts.entry(feedback).or_insert(0) += 1;
    }

    counts
}

/// Expected entropy remaining after observing the feedback
///
/// `Σ p(g) · log₂|g|` over non-empty groups `g`. Empty groups never reach `log₂`.
#[must_use]
pub fn expected_remaining_entropy<S>(
    feedback_counts: &std::collections::HashMap<Feedback, usize, S>,
) -> f64
where
    S: std::hash::BuildHasher,
{
    let total = feedback_counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    feedback_counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| (count as f64 / total) * (count as f64).log2())
        .sum()
}

/// Information gain of guessing `probe` when `candidates` are still possible
///
/// Returns 0.0 for zero or one candidate.
///
/// # Examples
/// ```
/// use codebreaker::core::Code;
/// use codebreaker::solver::entropy::information_gain;
///
/// let candidates: Vec<Code> = ["red red blue", "blue blue red"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
///
/// // Guessing either candidate tells the two apart: one full bit
/// let gain = information_gain(&candidates[0], &candidates);
/// assert!((gain - 1.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn information_gain(probe: &Code, candidates: &[Code]) -> f64 {
    if candidates.len() <= 1 {
        return 0.0;
    }

    let counts = partition_by_feedback(probe, candidates);
    let before = (candidates.len() as f64).log2();

    before - expected_remaining_entropy(&counts)
}

/// Calculate comprehensive metrics for a probe
///
/// Returns information gain, expected remaining candidates, and the largest
/// partition, which the terminal output uses to describe a guess.
#[must_use]
pub fn calculate_metrics(probe: &Code, candidates: &[Code]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            information_gain: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
            partitions: 0,
        };
    }

    let counts = partition_by_feedback(probe, candidates);
    let total = candidates.len() as f64;

    let information_gain = total.log2() - expected_remaining_entropy(&counts);

    // Σ p(g) · |g|
    let expected_remaining = counts
        .values()
        .map(|&count| count as f64 * count as f64 / total)
        .sum();

    let max_partition = counts.values().copied().max().unwrap_or(0);

    GuessMetrics {
        information_gain,
        expected_remaining,
        max_partition,
        partitions: counts.len(),
    }
}
