//! Terminal output
//!
//! Paints codes and key pegs in their display colors and prints command
//! results.

pub mod display;
pub mod formatters;

pub use display::{print_analysis_result, print_benchmark_result, print_solve_result};
