//! Guess feedback calculation and representation
//!
//! Feedback is the pair `(exact, partial)`:
//! - `exact`: slots where the probe and reference share the same color
//! - `partial`: remaining colors matched one-to-one, ignoring position

use super::{Code, MAX_SLOTS};
use std::fmt;

/// Feedback for one probe against one reference code
///
/// Invariant: `exact + partial <= slots`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Feedback {
    exact: u8,
    partial: u8,
}

impl Feedback {
    /// Create feedback from raw counts
    #[inline]
    #[must_use]
    pub const fn new(exact: u8, partial: u8) -> Self {
        Self { exact, partial }
    }

    /// Feedback for a fully solved code of `num_slots` slots
    #[inline]
    #[must_use]
    pub const fn solved(num_slots: usize) -> Self {
        Self::new(num_slots as u8, 0)
    }

    /// Number of exact matches
    #[inline]
    #[must_use]
    pub const fn exact(self) -> u8 {
        self.exact
    }

    /// Number of partial matches
    #[inline]
    #[must_use]
    pub const fn partial(self) -> u8 {
        self.partial
    }

    /// Check if every one of `num_slots` slots matched exactly
    #[inline]
    #[must_use]
    pub const fn is_solved(self, num_slots: usize) -> bool {
        self.exact as usize == num_slots
    }

    /// Score `probe` against `reference` without validation
    ///
    /// Both codes must have the same length. Callers outside the crate go
    /// through [`GameConfig::evaluate`](super::GameConfig::evaluate), which
    /// checks length and palette first.
    ///
    /// # Algorithm
    /// 1. First pass: count slots with equal colors and consume them on both sides
    /// 2. Second pass: for each unconsumed probe slot, consume the first
    ///    unconsumed reference slot of the same color and count a partial match
    ///
    /// Consuming at most one reference slot per probe slot keeps duplicates from
    /// being counted twice. The result is symmetric in its arguments.
    #[must_use]
    #[allow(clippy::needless_range_loop)] // Index needed on both sides and on the used-flags
    pub(crate) fn calculate(reference: &Code, probe: &Code) -> Self {
        debug_assert_eq!(reference.len(), probe.len(), "codes must have equal length");

        let reference = reference.colors();
        let probe = probe.colors();
        let len = reference.len().min(probe.len());

        let mut reference_used = [false; MAX_SLOTS];
        let mut probe_used = [false; MAX_SLOTS];
        let mut exact = 0u8;
        let mut partial = 0u8;

        // First pass: exact matches
        for i in 0..len {
            if reference[i] == probe[i] {
                exact += 1;
                reference_used[i] = true;
                probe_used[i] = true;
            }
        }

        // Second pass: partial matches from what is left
        for i in 0..len {
            if probe_used[i] {
                continue;
            }

            let matched = (0..len).find(|&j| !reference_used[j] && reference[j] == probe[i]);
            if let Some(j) = matched {
                partial += 1;
                reference_used[j] = true;
            }
        }

        Self { exact, partial }
    }

    /// Render as key pegs: `●` per exact, `○` per partial, `·` for the rest
    #[must_use]
    pub fn to_pegs(self, num_slots: usize) -> String {
        let exact = self.exact as usize;
        let partial = self.partial as usize;
        let misses = num_slots.saturating_sub(exact + partial);

        let mut pegs = String::with_capacity(num_slots * 3);
        pegs.push_str(&"●".repeat(exact));
        pegs.push_str(&"○".repeat(partial));
        pegs.push_str(&"·".repeat(misses));
        pegs
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} exact, {} partial", self.exact, self.partial)
    }
}
