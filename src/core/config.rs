//! Game configuration
//!
//! A `GameConfig` can only be built through its validating constructor, so the
//! rest of the crate assumes the palette size, slot count and attempt budget are
//! in range.

use super::{Code, Color, Feedback, GameError, InputError};
use rand::Rng;
use std::ops::RangeInclusive;

/// Allowed palette sizes
pub const COLOR_RANGE: RangeInclusive<u8> = 4..=10;

/// Allowed code lengths
pub const SLOT_RANGE: RangeInclusive<u8> = 3..=8;

/// Allowed attempt budgets
pub const ATTEMPT_RANGE: RangeInclusive<u8> = 5..=15;

/// Shape of a game: palette size, code length and attempt budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameConfig {
    num_colors: u8,
    num_slots: u8,
    max_attempts: u8,
}

impl GameConfig {
    /// Create a validated configuration
    ///
    /// # Errors
    /// Returns `GameError::InvalidConfig` if any value is outside its range:
    /// colors 4-10, slots 3-8, attempts 5-15.
    ///
    /// # Examples
    /// ```
    /// use codebreaker::core::GameConfig;
    ///
    /// assert!(GameConfig::new(6, 4, 10).is_ok());
    /// assert!(GameConfig::new(11, 4, 10).is_err());
    /// ```
    pub fn new(num_colors: u8, num_slots: u8, max_attempts: u8) -> Result<Self, GameError> {
        check_range("colors", num_colors, &COLOR_RANGE)?;
        check_range("slots", num_slots, &SLOT_RANGE)?;
        check_range("attempts", max_attempts, &ATTEMPT_RANGE)?;

        Ok(Self {
            num_colors,
            num_slots,
            max_attempts,
        })
    }

    /// Palette size
    #[inline]
    #[must_use]
    pub const fn num_colors(&self) -> u8 {
        self.num_colors
    }

    /// Code length
    #[inline]
    #[must_use]
    pub const fn num_slots(&self) -> usize {
        self.num_slots as usize
    }

    /// Attempt budget
    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts as usize
    }

    /// Colors available in this game
    pub fn palette(&self) -> impl Iterator<Item = Color> {
        Color::palette(self.num_colors)
    }

    /// Check that a code has the right length and only uses palette colors
    ///
    /// # Errors
    /// Returns `InputError::WrongLength` or `InputError::ColorOutOfPalette`.
    pub fn validate_code(&self, code: &Code) -> Result<(), InputError> {
        if code.len() != self.num_slots() {
            return Err(InputError::WrongLength {
                expected: self.num_slots(),
                actual: code.len(),
            });
        }

        match code
            .colors()
            .iter()
            .find(|color| color.index() >= self.num_colors)
        {
            Some(&color) => Err(InputError::ColorOutOfPalette {
                color,
                num_colors: self.num_colors,
            }),
            None => Ok(()),
        }
    }

    /// Score `probe` against `reference` after validating both
    ///
    /// # Errors
    /// Returns `GameError::InvalidInput` if either code is not valid for this
    /// configuration, including codes of different lengths.
    ///
    /// # Examples
    /// ```
    /// use codebreaker::core::{Code, Feedback, GameConfig};
    ///
    /// let config = GameConfig::new(4, 4, 10).unwrap();
    /// let secret: Code = "red red blue green".parse().unwrap();
    /// let guess: Code = "red yellow red blue".parse().unwrap();
    ///
    /// assert_eq!(config.evaluate(&secret, &guess).unwrap(), Feedback::new(1, 2));
    /// assert!(config.evaluate(&secret, &"red blue green".parse().unwrap()).is_err());
    /// ```
    pub fn evaluate(&self, reference: &Code, probe: &Code) -> Result<Feedback, GameError> {
        self.validate_code(reference)?;
        self.validate_code(probe)?;
        Ok(Feedback::calculate(reference, probe))
    }

    /// Draw a uniformly random code of this shape
    pub fn random_code<R: Rng + ?Sized>(&self, rng: &mut R) -> Code {
        Code::random(rng, self.num_colors, self.num_slots())
    }

    /// Number of distinct codes, `num_colors ^ num_slots`
    #[must_use]
    pub fn universe_size(&self) -> u64 {
        u64::from(self.num_colors).pow(u32::from(self.num_slots))
    }
}

impl Default for GameConfig {
    /// 5 colors, 5 slots, 8 attempts
    fn default() -> Self {
        Self {
            num_colors: 5,
            num_slots: 5,
            max_attempts: 8,
        }
    }
}

fn check_range(name: &str, value: u8, range: &RangeInclusive<u8>) -> Result<(), GameError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(GameError::InvalidConfig(format!(
            "{name} must be between {} and {}, got {value}",
            range.start(),
            range.end()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_range_bounds() {
        assert!(GameConfig::new(4, 3, 5).is_ok());
        assert!(GameConfig::new(10, 8, 15).is_ok());
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(matches!(
            GameConfig::new(3, 4, 8),
            Err(GameError::InvalidConfig(_))
        ));
        assert!(GameConfig::new(5, 9, 8).is_err());
        assert!(GameConfig::new(5, 2, 8).is_err());
        assert!(GameConfig::new(5, 5, 4).is_err());
        assert!(GameConfig::new(5, 5, 16).is_err());
    }

    #[test]
    fn default_matches_classic_setup() {
        let config = GameConfig::default();
        assert_eq!(config.num_colors(), 5);
        assert_eq!(config.num_slots(), 5);
        assert_eq!(config.max_attempts(), 8);
        assert_eq!(config.universe_size(), 3125);
    }

    #[test]
    fn validate_code_checks_length_and_palette() {
        let config = GameConfig::new(4, 4, 8).unwrap();

        assert!(config.validate_code(&"red blue green yellow".parse().unwrap()).is_ok());
        assert_eq!(
            config.validate_code(&"red blue green".parse().unwrap()),
            Err(InputError::WrongLength {
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(
            config.validate_code(&"red blue green purple".parse().unwrap()),
            Err(InputError::ColorOutOfPalette {
                color: Color::from_name("purple").unwrap(),
                num_colors: 4
            })
        );
    }

    #[test]
    fn evaluate_validates_both_codes() {
        let config = GameConfig::new(4, 4, 8).unwrap();
        let secret: Code = "red blue green yellow".parse().unwrap();

        assert_eq!(
            config.evaluate(&secret, &"red green blue yellow".parse().unwrap()),
            Ok(Feedback::new(2, 2))
        );
        assert!(matches!(
            config.evaluate(&secret, &"red blue".parse().unwrap()),
            Err(GameError::InvalidInput(InputError::WrongLength { .. }))
        ));
        assert!(config
            .evaluate(&"red blue green lime".parse().unwrap(), &secret)
            .is_err());
    }

    #[test]
    fn shorter_code_with_matching_prefix_is_rejected() {
        let config = GameConfig::new(4, 4, 8).unwrap();
        let long: Code = "red blue green yellow".parse().unwrap();
        let short: Code = "red blue green".parse().unwrap();

        assert_eq!(
            config.evaluate(&long, &short),
            Err(GameError::InvalidInput(InputError::WrongLength {
                expected: 4,
                actual: 3
            }))
        );
        assert!(config.evaluate(&short, &long).is_err());
    }

    #[test]
    fn universe_size_of_largest_config() {
        let config = GameConfig::new(10, 8, 15).unwrap();
        assert_eq!(config.universe_size(), 100_000_000);
    }
}
