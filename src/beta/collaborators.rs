use std::collections::BTreeSet;

use crate::model::{pictograph::BeatData, types::GridMode};

/// Letters whose pictographs end with both props at one point.
pub const BETA_ENDING_LETTERS: [&str; 13] = [
    "G", "H", "I", "J", "K", "L", "Y", "Z", "Y-", "Z-", "Ψ", "Ψ-", "β",
];

/// Decides which letters belong to the beta-ending class.
pub trait LetterClassifier: Send + Sync {
    fn is_beta_ending_letter(&self, letter: &str) -> bool;
}

/// Closed letter set used when no other classifier is supplied.
#[derive(Clone, Debug)]
pub struct StandardLetterClasses {
    beta_ending: BTreeSet<String>,
}

impl Default for StandardLetterClasses {
    fn default() -> Self {
        Self::with_letters(BETA_ENDING_LETTERS)
    }
}

impl StandardLetterClasses {
    pub fn with_letters<I, S>(letters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            beta_ending: letters.into_iter().map(Into::into).collect(),
        }
    }
}

impl LetterClassifier for StandardLetterClasses {
    fn is_beta_ending_letter(&self, letter: &str) -> bool {
        self.beta_ending.contains(letter)
    }
}

/// Optional override that exchanges the blue and red separation directions.
pub trait BetaSwapPolicy: Send + Sync {
    fn should_swap_beta_props(&self, beat: &BeatData, grid_mode: GridMode) -> bool;
}

/// Swap policy that keeps the table assignment.
#[derive(Clone, Copy, Debug, Default)]
pub struct NeverSwap;

impl BetaSwapPolicy for NeverSwap {
    fn should_swap_beta_props(&self, _beat: &BeatData, _grid_mode: GridMode) -> bool {
        false
    }
}

impl<F> BetaSwapPolicy for F
where
    F: Fn(&BeatData, GridMode) -> bool + Send + Sync,
{
    fn should_swap_beta_props(&self, beat: &BeatData, grid_mode: GridMode) -> bool {
        self(beat, grid_mode)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/beta/collaborators.rs"]
mod tests;
