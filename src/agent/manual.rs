//! Human passthrough agent
//!
//! Holds a guess being composed slot by slot. Nothing is proposed until every
//! slot has a color.

use super::Agent;
use crate::core::{Code, Color, Feedback, GameConfig, InputError};
use crate::game::GameState;

/// A guess composed by hand
#[derive(Debug, Clone)]
pub struct ManualAgent {
    slots: Vec<Option<Color>>,
    selected: Option<Color>,
}

impl ManualAgent {
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            slots: vec![None; config.num_slots()],
            selected: None,
        }
    }

    /// Pick the color that `place_color(slot, None)` will use
    pub const fn select_color(&mut self, color: Color) {
        self.selected = Some(color);
    }

    #[must_use]
    pub const fn selected(&self) -> Option<Color> {
        self.selected
    }

    /// Put a color into a slot
    ///
    /// With `None` the currently selected color is used. Returns `false` if the
    /// slot does not exist or there is no color to place.
    pub fn place_color(&mut self, slot: usize, color: Option<Color>) -> bool {
        let Some(color) = color.or(self.selected) else {
            return false;
        };
        match self.slots.get_mut(slot) {
            Some(entry) => {
                *entry = Some(color);
                true
            }
            None => false,
        }
    }

    pub fn clear_slot(&mut self, slot: usize) {
        if let Some(entry) = self.slots.get_mut(slot) {
            *entry = None;
        }
    }

    /// Fill every slot at once
    ///
    /// # Errors
    /// Returns `InputError::WrongLength` if the code does not have one color
    /// per slot.
    pub fn set_guess(&mut self, code: &Code) -> Result<(), InputError> {
        if code.len() != self.slots.len() {
            return Err(InputError::WrongLength {
                expected: self.slots.len(),
                actual: code.len(),
            });
        }
        for (entry, &color) in self.slots.iter_mut().zip(code.colors()) {
            *entry = Some(color);
        }
        Ok(())
    }

    /// The guess as composed so far
    #[must_use]
    pub fn pending(&self) -> &[Option<Color>] {
        &self.slots
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    fn clear(&mut self) {
        self.slots.iter_mut().for_each(|entry| *entry = None);
    }
}

impl Agent for ManualAgent {
    fn name(&self) -> &str {
        "manual"
    }

    fn propose_next_guess(&mut self, state: &GameState) -> Option<Code> {
        if state.is_over() {
            return None;
        }
        let colors: Option<Vec<Color>> = self.slots.iter().copied().collect();
        colors.and_then(|colors| Code::new(&colors).ok())
    }

    fn on_feedback(&mut self, _guess: &Code, _feedback: Feedback) {
        self.clear();
    }

    fn reset(&mut self, config: &GameConfig) {
        self.slots = vec![None; config.num_slots()];
        self.selected = None;
    }
}
