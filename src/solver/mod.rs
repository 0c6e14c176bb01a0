//! Code-breaking solver
//!
//! Samples the code space, filters it against observed feedback, and picks the
//! probe with the highest expected information gain.

mod candidates;
mod engine;
pub mod entropy;

pub use candidates::{CodeSpace, filter_consistent, is_consistent};
pub use engine::{DEFAULT_SAMPLE_CAP, Solver, SolverConfig};
