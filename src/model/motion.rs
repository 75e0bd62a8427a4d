use crate::{
    foundation::error::{PictographError, PictographResult},
    model::types::{Location, MotionType, Orientation, RotationDirection},
    placement::orientation::calculate_end_orientation,
};

/// Turn counts the notation allows, in half-turn steps.
pub const VALID_TURNS: [f64; 7] = [0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0];

/// The path one prop follows during a beat.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MotionData {
    pub motion_type: MotionType,
    pub prop_rot_dir: RotationDirection,
    pub start_loc: Location,
    pub end_loc: Location,
    pub turns: f64,
    pub start_ori: Orientation,
    pub end_ori: Orientation,
}

impl MotionData {
    /// One full turn starting IN; the end orientation follows from the motion.
    pub fn new(
        motion_type: MotionType,
        prop_rot_dir: RotationDirection,
        start_loc: Location,
        end_loc: Location,
    ) -> Self {
        Self {
            motion_type,
            prop_rot_dir,
            start_loc,
            end_loc,
            turns: 1.0,
            start_ori: Orientation::In,
            end_ori: Orientation::In,
        }
        .with_derived_end_ori()
    }

    /// Sets `turns` and re-derives `end_ori`.
    pub fn with_turns(self, turns: f64) -> Self {
        Self { turns, ..self }.with_derived_end_ori()
    }

    /// Sets `start_ori` and re-derives `end_ori`.
    pub fn with_start_ori(self, start_ori: Orientation) -> Self {
        Self { start_ori, ..self }.with_derived_end_ori()
    }

    /// Pin the end orientation, e.g. from a dataset column. A later `with_turns` or
    /// `with_start_ori` derives it again.
    pub fn with_end_ori(self, end_ori: Orientation) -> Self {
        Self { end_ori, ..self }
    }

    fn with_derived_end_ori(self) -> Self {
        let end_ori = calculate_end_orientation(&self, self.start_ori);
        Self { end_ori, ..self }
    }

    pub fn with_locations(self, start_loc: Location, end_loc: Location) -> Self {
        Self {
            start_loc,
            end_loc,
            ..self
        }
    }

    pub fn with_prop_rot_dir(self, prop_rot_dir: RotationDirection) -> Self {
        Self {
            prop_rot_dir,
            ..self
        }
    }

    /// True when `turns` sits on a half step (0.5, 1.5, ...).
    pub fn is_half_turn(&self) -> bool {
        self.turns.fract() != 0.0
    }

    /// Check the turn count against the notation's allowed values.
    ///
    /// Start/end location agreement for non-shift motions is a grammar concern
    /// left to the motion validator.
    pub fn validate(&self) -> PictographResult<()> {
        if !VALID_TURNS.contains(&self.turns) {
            return Err(PictographError::validation(format!(
                "turns must be one of {VALID_TURNS:?}, got {}",
                self.turns
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/motion.rs"]
mod tests;
