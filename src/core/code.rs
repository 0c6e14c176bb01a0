//! Code representation
//!
//! A `Code` is an ordered sequence of colors, either the secret or a guess.
//! It is stored inline with a fixed capacity so it is `Copy` and cheap to hash,
//! which keeps candidate sets and seen-sets allocation-free per element.

use super::{Color, InputError};
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Largest number of slots a code can have
pub const MAX_SLOTS: usize = 8;

/// An ordered sequence of 1-8 colors; duplicates allowed
///
/// Unused trailing storage is always `Color::default()`, so derived equality
/// and hashing only depend on the visible colors and the length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code {
    colors: [Color; MAX_SLOTS],
    len: u8,
}

impl Code {
    /// Create a code from a slice of colors
    ///
    /// # Errors
    /// Returns `InputError` if the slice is empty or longer than `MAX_SLOTS`.
    ///
    /// # Examples
    /// ```
    /// use codebreaker::core::{Code, Color};
    ///
    /// let red = Color::from_name("red").unwrap();
    /// let blue = Color::from_name("blue").unwrap();
    /// let code = Code::new(&[red, blue, red]).unwrap();
    /// assert_eq!(code.len(), 3);
    /// assert_eq!(code.to_string(), "red blue red");
    /// ```
    pub fn new(colors: &[Color]) -> Result<Self, InputError> {
        if colors.is_empty() {
            return Err(InputError::EmptyCode);
        }
        if colors.len() > MAX_SLOTS {
            return Err(InputError::TooManySlots(colors.len()));
        }

        let mut storage = [Color::default(); MAX_SLOTS];
        storage[..colors.len()].copy_from_slice(colors);

        Ok(Self {
            colors: storage,
            len: colors.len() as u8,
        })
    }

    /// Build a code from raw palette indices
    ///
    /// # Errors
    /// Returns `InputError` if an index is outside the ten-color palette or the
    /// length is invalid.
    pub fn from_indices(indices: &[u8]) -> Result<Self, InputError> {
        let colors = indices
            .iter()
            .map(|&i| Color::new(i).ok_or_else(|| InputError::UnknownColor(i.to_string())))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&colors)
    }

    /// Draw a code with each slot chosen independently and uniformly
    ///
    /// Colors may repeat across slots.
    ///
    /// # Panics
    /// Panics in debug mode if `num_slots` is 0 or exceeds `MAX_SLOTS`, or if
    /// `num_colors` is 0.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, num_colors: u8, num_slots: usize) -> Self {
        debug_assert!((1..=MAX_SLOTS).contains(&num_slots));
        debug_assert!(num_colors > 0);

        let mut colors = [Color::default(); MAX_SLOTS];
        for slot in colors.iter_mut().take(num_slots) {
            *slot = Color(rng.random_range(0..num_colors));
        }

        Self {
            colors,
            len: num_slots as u8,
        }
    }

    /// Decode the `index`-th code of the space in lexicographic order
    ///
    /// Slot 0 is the most significant digit in base `num_colors`.
    pub(crate) fn from_rank(mut index: u64, num_colors: u8, num_slots: usize) -> Self {
        let base = u64::from(num_colors);
        let mut colors = [Color::default(); MAX_SLOTS];

        for slot in colors[..num_slots].iter_mut().rev() {
            *slot = Color((index % base) as u8);
            index /= base;
        }

        Self {
            colors,
            len: num_slots as u8,
        }
    }

    /// The colors of this code, in slot order
    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors[..self.len as usize]
    }

    /// Number of slots
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Always false for a constructed code
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Color at a slot
    ///
    /// # Panics
    /// Panics if `slot >= self.len()`
    #[inline]
    #[must_use]
    pub fn color_at(&self, slot: usize) -> Color {
        self.colors()[slot]
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, color) in self.colors().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{color}")?;
        }
        Ok(())
    }
}

impl FromStr for Code {
    type Err = InputError;

    /// Parse color tokens separated by commas and/or whitespace
    ///
    /// Each token is a color name or a palette index, e.g. `"red, blue 2"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let colors = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(str::parse)
            .collect::<Result<Vec<Color>, _>>()?;

        Self::new(&colors)
    }
}
