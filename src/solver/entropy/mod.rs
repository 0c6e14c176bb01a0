//! Entropy-based probe selection
//!
//! Implements information gain over feedback partitions and the selector that
//! maximizes it. This is the foundation of the automated solver.

mod calculator;
mod selector;

pub use calculator::{
    GuessMetrics, calculate_metrics, expected_remaining_entropy, information_gain,
    partition_by_feedback,
};
pub use selector::select_best_guess;
