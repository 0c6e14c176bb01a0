//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod play;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_probe};
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use play::{PlayCommand, parse_command, run_play};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_code};
