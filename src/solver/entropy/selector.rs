//! Information-gain maximizing probe selection
//!
//! Probes are drawn from the consistent candidate set itself rather than the
//! whole code space. That is cheaper and only slightly less informative.

use super::calculator::information_gain;
use crate::core::Code;
use rayon::prelude::*;

/// Select the candidate whose guess maximizes expected information gain
///
/// Returns the chosen probe and its gain, or `None` if `candidates` is empty.
/// A single candidate is returned immediately with a gain of 0. Ties go to the
/// earliest candidate, so the result does not depend on thread scheduling.
///
/// # Examples
/// ```
/// use codebreaker::core::Code;
/// use codebreaker::solver::entropy::select_best_guess;
///
/// let candidates: Vec<Code> = (0..4u8)
///     .map(|c| Code::from_indices(&[c, c, c]).unwrap())
///     .collect();
///
/// let (best, gain) = select_best_guess(&candidates).unwrap();
/// assert_eq!(best, &candidates[0]);
/// assert!(gain > 0.0);
/// ```
#[must_use]
pub fn select_best_guess(candidates: &[Code]) -> Option<(&Code, f64)> {
    match candidates {
        [] => None,
        [only] => Some((only, 0.0)),
        _ => candidates
            .par_iter()
            .enumerate()
            .map(|(index, probe)| (index, information_gain(probe, candidates)))
            .reduce_with(|best, next| {
                // Higher gain wins; equal gain keeps the lower index
                match next.1.total_cmp(&best.1) {
                    std::cmp::Ordering::Greater => next,
                    std::cmp::Ordering::Less => best,
                    std::cmp::Ordering::Equal if next.0 < best.0 => next,
                    std::cmp::Ordering::Equal => best,
                }
            })
            .map(|(index, gain)| (&candidates[index], gain)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;

    #[test]
    fn empty_candidates_select_nothing() {
        assert!(select_best_guess(&[]).is_none());
    }

    #[test]
    fn singleton_returns_that_candidate() {
        let only: Code = "pink cyan lime".parse().unwrap();
        let only_set = [only];
        let (best, gain) = select_best_guess(&only_set).unwrap();

        assert_eq!(best, &only);
        assert!(gain.abs() < f64::EPSILON);
    }

    #[test]
    fn selects_highest_gain() {
        // "red red red" cannot split these; "red blue green" splits all four
        let candidates: Vec<Code> = [
            "red red red",
            "red blue green",
            "green blue red",
            "blue green red",
        ]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();

        let (best, gain) = select_best_guess(&candidates).unwrap();
        let best_feedbacks: std::collections::HashSet<Feedback> = candidates
            .iter()
            .map(|c| Feedback::calculate(best, c))
            .collect();

        assert_eq!(best_feedbacks.len(), 4);
        assert!((gain - 2.0).abs() < 1e-9);
    }

    #[test]
    fn ties_resolve_to_first_candidate() {
        // Every monochrome code splits the others identically
        let candidates: Vec<Code> = (0..6u8)
            .map(|c| Code::from_indices(&[c, c, c, c]).unwrap())
            .collect();

        for _ in 0..10 {
            let (best, _) = select_best_guess(&candidates).unwrap();
            assert_eq!(best, &candidates[0]);
        }
    }

    #[test]
    fn matches_sequential_first_maximum() {
        let candidates: Vec<Code> = (0..256).map(|i| Code::from_rank(i, 4, 4)).collect();

        let mut expected = (0, f64::NEG_INFINITY);
        for (i, probe) in candidates.iter().enumerate() {
            let gain = information_gain(probe, &candidates);
            if gain > expected.1 {
                expected = (i, gain);
            }
        }

        let (best, gain) = select_best_guess(&candidates).unwrap();
        assert_eq!(best, &candidates[expected.0]);
        assert!((gain - expected.1).abs() < 1e-12);
    }
}
