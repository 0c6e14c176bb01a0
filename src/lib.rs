//! Codebreaker
//!
//! A Mastermind-style code breaking game with a solver that picks each guess by
//! maximizing expected information gain.
//!
//! # Quick Start
//!
//! ```rust
//! use codebreaker::core::{Code, GameConfig};
//!
//! let config = GameConfig::new(6, 4, 10).unwrap();
//! let secret: Code = "red red blue green".parse().unwrap();
//! let guess: Code = "red yellow red blue".parse().unwrap();
//!
//! let feedback = config.evaluate(&secret, &guess).unwrap();
//! assert_eq!((feedback.exact(), feedback.partial()), (1, 2));
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod game;

// Candidate sampling and information-gain selection
pub mod solver;

// Human and automated players
pub mod agent;

// Engine + agent orchestration
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
