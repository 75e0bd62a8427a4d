use std::collections::{BTreeSet, HashMap};

use rand::{Rng, seq::SliceRandom};

use crate::{
    foundation::config::DatasetConfig,
    model::types::MotionType,
    validation::dataset::{ComboKey, DatasetOrigin, PictographRecord, ValidationDataset},
};

/// Single source of truth for which letter/position/motion-type tuples are legal.
#[derive(Clone, Debug)]
pub struct MotionValidator {
    dataset: ValidationDataset,
    by_letter: HashMap<String, Vec<usize>>,
}

impl MotionValidator {
    pub fn new(dataset: ValidationDataset) -> Self {
        let mut by_letter = HashMap::<String, Vec<usize>>::new();
        for (idx, record) in dataset.records().iter().enumerate() {
            by_letter.entry(record.letter.clone()).or_default().push(idx);
        }
        Self { dataset, by_letter }
    }

    /// Load the configured tables; never fails, see [`ValidationDataset::load`].
    pub fn load(config: &DatasetConfig) -> Self {
        Self::new(ValidationDataset::load(config))
    }

    pub fn dataset(&self) -> &ValidationDataset {
        &self.dataset
    }

    pub fn len(&self) -> usize {
        self.dataset.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dataset.is_empty()
    }

    pub fn is_from_seed(&self) -> bool {
        self.dataset.origin() == DatasetOrigin::Seed
    }

    /// Exact, case-sensitive membership test on all five fields.
    pub fn validate_motion_position_combination(
        &self,
        letter: &str,
        start_pos: &str,
        end_pos: &str,
        blue_motion_type: &str,
        red_motion_type: &str,
    ) -> bool {
        self.dataset.contains_key(&ComboKey {
            letter: letter.to_string(),
            start_pos: start_pos.to_string(),
            end_pos: end_pos.to_string(),
            blue_motion_type: blue_motion_type.to_string(),
            red_motion_type: red_motion_type.to_string(),
        })
    }

    pub fn get_rows_for_letter(&self, letter: &str) -> Vec<&PictographRecord> {
        let records = self.dataset.records();
        self.by_letter
            .get(letter)
            .map(|idxs| idxs.iter().map(|&i| &records[i]).collect())
            .unwrap_or_default()
    }

    /// Uniformly sample one legal pictograph using the thread-local RNG.
    pub fn get_random_valid_pictograph_data(&self, letter: Option<&str>) -> Option<PictographRecord> {
        self.get_random_valid_pictograph_data_with_rng(letter, &mut rand::thread_rng())
    }

    /// Sample one record, restricted to `letter` when it has rows.
    ///
    /// A letter with no rows falls back to the whole dataset. `None` only when
    /// the dataset itself is empty.
    pub fn get_random_valid_pictograph_data_with_rng<R: Rng + ?Sized>(
        &self,
        letter: Option<&str>,
        rng: &mut R,
    ) -> Option<PictographRecord> {
        let filtered = letter.map(|l| self.get_rows_for_letter(l)).unwrap_or_default();
        if !filtered.is_empty() {
            return filtered.choose(rng).map(|r| (*r).clone());
        }
        if let Some(l) = letter {
            tracing::debug!(letter = l, "letter has no rows, sampling the full dataset");
        }
        self.dataset.records().choose(rng).cloned()
    }

    pub fn get_valid_letters(&self) -> BTreeSet<String> {
        self.by_letter.keys().cloned().collect()
    }

    /// Union of blue and red motion types seen for `letter`.
    pub fn get_valid_motions_for_letter(&self, letter: &str) -> BTreeSet<MotionType> {
        self.get_rows_for_letter(letter)
            .into_iter()
            .flat_map(|r| [r.blue_motion.motion_type, r.red_motion.motion_type])
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/validation/validator.rs"]
mod tests;
