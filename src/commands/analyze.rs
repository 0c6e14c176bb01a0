//! Probe analysis command
//!
//! Measures how well a single guess would split a fresh universe sample.

use crate::core::{Code, Feedback, GameConfig, GameError};
use crate::solver::entropy::{GuessMetrics, calculate_metrics, partition_by_feedback};
use crate::solver::{CodeSpace, SolverConfig};
use rand::Rng;

/// Result of analyzing a probe
pub struct AnalysisResult {
    pub probe: Code,
    pub metrics: GuessMetrics,
    pub total_candidates: usize,
    pub universe_size: u64,
    /// Candidates per feedback, most exact matches first
    pub partitions: Vec<(Feedback, usize)>,
}

/// Analyze `probe` as an opening guess
///
/// # Errors
///
/// Returns `GameError::InvalidInput` if the probe does not fit the
/// configuration.
pub fn analyze_probe<R: Rng + ?Sized>(
    config: &GameConfig,
    solver: SolverConfig,
    probe: &Code,
    rng: &mut R,
) -> Result<AnalysisResult, GameError> {
    config.validate_code(probe)?;

    let space = CodeSpace::new(config);
    let candidates = space.sample_universe(rng, solver.sample_cap());
    let metrics = calculate_metrics(probe, &candidates);

    let mut partitions: Vec<(Feedback, usize)> =
        partition_by_feedback(probe, &candidates).into_iter().collect();
    partitions.sort_unstable_by(|a, b| b.0.cmp(&a.0));

    Ok(AnalysisResult {
        probe: *probe,
        metrics,
        total_candidates: candidates.len(),
        universe_size: space.size(),
        partitions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn analyze_covers_small_universe() {
        let config = GameConfig::new(4, 4, 10).unwrap();
        let probe: Code = "red red blue green".parse().unwrap();

        let result = analyze_probe(
            &config,
            SolverConfig::default(),
            &probe,
            &mut StdRng::seed_from_u64(1),
        )
        .unwrap();

        assert_eq!(result.total_candidates, 256);
        assert_eq!(result.universe_size, 256);
        assert!(result.metrics.information_gain > 0.0);
        assert_eq!(result.partitions.len(), result.metrics.partitions);
        assert_eq!(
            result.partitions.iter().map(|(_, n)| n).sum::<usize>(),
            256
        );
        assert_eq!(result.partitions[0], (Feedback::solved(4), 1));
    }

    #[test]
    fn partitions_are_ordered() {
        let config = GameConfig::default();
        let probe: Code = "red blue green yellow purple".parse().unwrap();

        let result = analyze_probe(
            &config,
            SolverConfig::new(500).unwrap(),
            &probe,
            &mut StdRng::seed_from_u64(2),
        )
        .unwrap();

        assert_eq!(result.total_candidates, 500);
        assert!(result.partitions.windows(2).all(|w| w[0].0 > w[1].0));
    }

    #[test]
    fn probe_must_fit_configuration() {
        let config = GameConfig::new(4, 4, 10).unwrap();
        let probe: Code = "red red blue".parse().unwrap();

        let result = analyze_probe(
            &config,
            SolverConfig::default(),
            &probe,
            &mut StdRng::seed_from_u64(3),
        );
        assert!(matches!(result, Err(GameError::InvalidInput(_))));
    }
}
