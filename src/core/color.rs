//! Palette colors
//!
//! A color is stored as its palette index so feedback arithmetic stays integral.
//! Names and display hex codes are looked up from the fixed ten-color palette.

use super::InputError;
use std::fmt;
use std::str::FromStr;

/// Largest palette a game can use
pub const MAX_COLORS: usize = 10;

/// Palette color names, in palette order
pub const COLOR_NAMES: [&str; MAX_COLORS] = [
    "red", "blue", "green", "yellow", "purple", "orange", "pink", "cyan", "brown", "lime",
];

/// Display colors as RGB, in palette order
const COLOR_RGB: [(u8, u8, u8); MAX_COLORS] = [
    (0xdc, 0x26, 0x26), // red
    (0x25, 0x63, 0xeb), // blue
    (0x16, 0xa3, 0x4a), // green
    (0xca, 0x8a, 0x04), // yellow
    (0xa8, 0x55, 0xf7), // purple
    (0xf9, 0x73, 0x16), // orange
    (0xec, 0x48, 0x99), // pink
    (0x06, 0xb6, 0xd4), // cyan
    (0x92, 0x40, 0x0e), // brown
    (0x84, 0xcc, 0x16), // lime
];

/// A single palette color, identified by its index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Color(pub(crate) u8);

impl Color {
    /// Create a color from a palette index
    ///
    /// Returns `None` if the index is outside the ten-color palette.
    #[inline]
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < MAX_COLORS {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Palette index (0-9)
    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Symbolic name, e.g. "red"
    #[must_use]
    pub const fn name(self) -> &'static str {
        COLOR_NAMES[self.0 as usize]
    }

    /// Display color as an `(r, g, b)` triple
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        COLOR_RGB[self.0 as usize]
    }

    /// Display color as a `#rrggbb` string
    #[must_use]
    pub fn hex(self) -> String {
        let (r, g, b) = self.rgb();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Look up a color by name (case-insensitive)
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        COLOR_NAMES
            .iter()
            .position(|candidate| candidate.eq_ignore_ascii_case(name))
            .map(|i| Self(i as u8))
    }

    /// The first `num_colors` palette colors
    pub fn palette(num_colors: u8) -> impl Iterator<Item = Self> {
        (0..num_colors.min(MAX_COLORS as u8)).map(Self)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = InputError;

    /// Parse a color from its name or its palette index
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();

        if let Some(color) = Self::from_name(token) {
            return Ok(color);
        }

        token
            .parse::<u8>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| InputError::UnknownColor(token.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_lookup() {
        for (i, name) in COLOR_NAMES.iter().enumerate() {
            let color = Color::from_name(name).unwrap();
            assert_eq!(color.index() as usize, i);
            assert_eq!(color.name(), *name);
        }
    }

    #[test]
    fn parse_accepts_names_and_indices() {
        assert_eq!("Purple".parse::<Color>().unwrap(), Color::new(4).unwrap());
        assert_eq!(" 9 ".parse::<Color>().unwrap().name(), "lime");
        assert_eq!("0".parse::<Color>().unwrap().name(), "red");
    }

    #[test]
    fn parse_rejects_unknown_tokens() {
        assert_eq!(
            "magenta".parse::<Color>(),
            Err(InputError::UnknownColor("magenta".to_string()))
        );
        assert!("10".parse::<Color>().is_err());
        assert!("".parse::<Color>().is_err());
    }

    #[test]
    fn new_bounds() {
        assert!(Color::new(9).is_some());
        assert!(Color::new(10).is_none());
    }

    #[test]
    fn hex_matches_palette() {
        assert_eq!(Color::from_name("red").unwrap().hex(), "#dc2626");
        assert_eq!(Color::from_name("lime").unwrap().hex(), "#84cc16");
    }

    #[test]
    fn palette_takes_prefix() {
        let names: Vec<&str> = Color::palette(4).map(Color::name).collect();
        assert_eq!(names, ["red", "blue", "green", "yellow"]);
    }
}
