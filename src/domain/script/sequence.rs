//! StepSequence - mapping between screen indices and scripted steps.
//!
//! The session walks a single linear screen index:
//!
//! | index  | screen                 |
//! |--------|------------------------|
//! | 0      | intake (upload)        |
//! | 1      | overview               |
//! | 2..=16 | steps 1..=15           |
//! | 17     | completion             |
//!
//! ```ignore
//! let step = StepSequence::step_for(5);      // step 4 (A.E.M.)
//! let first = StepSequence::step_for(-3);    // clamps to step 1
//! let screen = StepSequence::screen_for_step(15); // 16
//! ```

use serde::{Deserialize, Serialize};

use super::table::{steps, STEP_COUNT};
use super::{Phase, StepData};

/// Classification of a screen index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "step", rename_all = "snake_case")]
pub enum Screen {
    Intake,
    Overview,
    Step(u8),
    Completion,
}

/// Static queries over the fixed step sequence.
pub struct StepSequence;

impl StepSequence {
    pub const INTAKE_SCREEN: i32 = 0;
    pub const OVERVIEW_SCREEN: i32 = 1;
    pub const FIRST_STEP_SCREEN: i32 = 2;
    pub const LAST_STEP_SCREEN: i32 = Self::FIRST_STEP_SCREEN + STEP_COUNT as i32 - 1;
    pub const COMPLETION_SCREEN: i32 = Self::LAST_STEP_SCREEN + 1;

    /// All steps in order.
    pub fn all() -> &'static [StepData] {
        steps()
    }

    /// Resolves any screen index to a step, clamping out-of-range indices
    /// to the first or last step. Never fails.
    pub fn step_for(screen_index: i32) -> &'static StepData {
        let all = steps();
        let offset = i64::from(screen_index) - i64::from(Self::FIRST_STEP_SCREEN);
        let position = offset.clamp(0, all.len() as i64 - 1) as usize;
        &all[position]
    }

    /// Looks up a step by its 1-based number.
    pub fn step(number: u8) -> Option<&'static StepData> {
        usize::from(number)
            .checked_sub(1)
            .and_then(|index| steps().get(index))
    }

    /// Classifies a screen index. Indices below intake count as intake and
    /// indices past completion count as completion.
    pub fn screen(screen_index: i32) -> Screen {
        match screen_index {
            i if i <= Self::INTAKE_SCREEN => Screen::Intake,
            Self::OVERVIEW_SCREEN => Screen::Overview,
            i if i <= Self::LAST_STEP_SCREEN => Screen::Step((i - 1) as u8),
            _ => Screen::Completion,
        }
    }

    /// The step number shown on a screen, if it is a step screen.
    pub fn step_number_for(screen_index: i32) -> Option<u8> {
        match Self::screen(screen_index) {
            Screen::Step(number) => Some(number),
            _ => None,
        }
    }

    /// Screen index of a step, with the step number clamped into `1..=15`.
    pub fn screen_for_step(number: u8) -> i32 {
        let clamped = number.clamp(1, STEP_COUNT as u8);
        i32::from(clamped) + 1
    }

    /// Steps belonging to one phase, in order.
    pub fn phase_steps(phase: Phase) -> impl Iterator<Item = &'static StepData> {
        steps().iter().filter(move |step| step.phase == phase)
    }

    /// Returns true if this is the last scripted step screen.
    pub fn is_last_step_screen(screen_index: i32) -> bool {
        screen_index == Self::LAST_STEP_SCREEN
    }
}
