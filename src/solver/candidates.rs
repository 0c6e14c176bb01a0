//! Candidate space sampling and filtering
//!
//! The full code space has `num_colors ^ num_slots` members (up to 10^8), so the
//! solver works from a bounded sample. When the cap covers the whole space it is
//! enumerated instead; otherwise distinct codes are drawn by rejection against a
//! seen-set. A sample can miss the secret, in which case filtering may leave
//! nothing and the solver falls back to a random guess.

use crate::core::{Code, Feedback, GameConfig};
use crate::game::GuessRecord;
use rand::Rng;
use rustc_hash::FxHashSet;

/// The set of all codes for one game configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeSpace {
    num_colors: u8,
    num_slots: usize,
}

impl CodeSpace {
    #[must_use]
    pub const fn new(config: &GameConfig) -> Self {
        Self {
            num_colors: config.num_colors(),
            num_slots: config.num_slots(),
        }
    }

    /// Number of codes in the space
    #[must_use]
    pub fn size(&self) -> u64 {
        u64::from(self.num_colors).pow(self.num_slots as u32)
    }

    #[must_use]
    pub const fn num_slots(&self) -> usize {
        self.num_slots
    }

    #[must_use]
    pub const fn num_colors(&self) -> u8 {
        self.num_colors
    }

    /// A uniformly random code of this shape
    pub fn random_code<R: Rng + ?Sized>(&self, rng: &mut R) -> Code {
        Code::random(rng, self.num_colors, self.num_slots)
    }

    /// Every code in lexicographic order
    pub fn iter(&self) -> impl Iterator<Item = Code> + '_ {
        (0..self.size()).map(|rank| Code::from_rank(rank, self.num_colors, self.num_slots))
    }

    /// Draw up to `target_size` distinct codes uniformly without replacement
    ///
    /// The result is capped at the size of the space. When the cap covers the
    /// whole space, every code is returned in lexicographic order.
    ///
    /// # Examples
    /// ```
    /// use codebreaker::core::GameConfig;
    /// use codebreaker::solver::CodeSpace;
    /// use rand::{SeedableRng, rngs::StdRng};
    ///
    /// let config = GameConfig::new(4, 3, 8).unwrap();
    /// let space = CodeSpace::new(&config);
    /// let mut rng = StdRng::seed_from_u64(0);
    ///
    /// assert_eq!(space.sample_universe(&mut rng, 10).len(), 10);
    /// assert_eq!(space.sample_universe(&mut rng, 5000).len(), 64);
    /// ```
    pub fn sample_universe<R: Rng + ?Sized>(&self, rng: &mut R, target_size: usize) -> Vec<Code> {
        let size = self.size();

        if target_size as u64 >= size {
            return self.iter().collect();
        }

        let mut seen = FxHashSet::default();
        seen.reserve(target_size);
        let mut sample = Vec::with_capacity(target_size);

        while sample.len() < target_size {
            let code = self.random_code(rng);
            if seen.insert(code) {
                sample.push(code);
            }
        }

        sample
    }
}

/// Keep the codes that would have produced every recorded feedback
///
/// A code `c` survives iff `evaluate(g, c) == f` for every record `(g, f)`.
#[must_use]
pub fn filter_consistent(sample: &[Code], history: &[GuessRecord]) -> Vec<Code> {
    sample
        .iter()
        .filter(|&candidate| is_consistent(candidate, history))
        .copied()
        .collect()
}

/// Check a single code against every record
#[must_use]
pub fn is_consistent(candidate: &Code, history: &[GuessRecord]) -> bool {
    history
        .iter()
        .all(|record| Feedback::calculate(record.guess(), candidate) == record.feedback())
}
