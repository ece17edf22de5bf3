//! ScreenPosition - the wizard's single piece of navigational state.

use serde::{Deserialize, Serialize};

use crate::domain::script::{Screen, StepSequence, STEP_COUNT};

/// Linear screen index of the session wizard.
///
/// # Invariants
///
/// - `next` never moves past the completion screen
/// - `prev` never moves before the overview screen
/// - `jump_to_step` always lands on a step screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScreenPosition(i32);

impl ScreenPosition {
    /// The intake screen, where every session starts.
    pub const fn intake() -> Self {
        Self(StepSequence::INTAKE_SCREEN)
    }

    pub const fn overview() -> Self {
        Self(StepSequence::OVERVIEW_SCREEN)
    }

    /// Restores a position from a raw index, clamped into the valid range.
    pub fn from_index(index: i32) -> Self {
        Self(index.clamp(StepSequence::INTAKE_SCREEN, StepSequence::COMPLETION_SCREEN))
    }

    pub fn index(&self) -> i32 {
        self.0
    }

    pub fn screen(&self) -> Screen {
        StepSequence::screen(self.0)
    }

    /// Step number shown at this position, if it is a step screen.
    pub fn step_number(&self) -> Option<u8> {
        StepSequence::step_number_for(self.0)
    }

    pub fn next(self) -> Self {
        Self((self.0 + 1).min(StepSequence::COMPLETION_SCREEN))
    }

    /// Moves back one screen. The intake screen is never reached this way;
    /// going back from intake lands on the overview.
    pub fn prev(self) -> Self {
        Self((self.0 - 1).max(StepSequence::OVERVIEW_SCREEN))
    }

    /// Jumps to step `number`, clamped into `1..=15`.
    pub fn jump_to_step(number: i32) -> Self {
        let number = number.clamp(1, STEP_COUNT as i32);
        Self(StepSequence::screen_for_step(number as u8))
    }

    pub fn restart() -> Self {
        Self::intake()
    }
}

impl Default for ScreenPosition {
    fn default() -> Self {
        Self::intake()
    }
}
