use crate::model::{
    motion::MotionData,
    types::{MotionType, Orientation},
};

/// Orientation a prop ends in after `motion`, starting from `start`.
///
/// Half turns always flip. Whole turns flip on odd counts for PRO/STATIC and on
/// even counts for ANTI/DASH. Any other motion type keeps `start`.
pub fn calculate_end_orientation(motion: &MotionData, start: Orientation) -> Orientation {
    if motion.is_half_turn() {
        return start.flipped();
    }

    let even = (motion.turns as i64) % 2 == 0;
    match motion.motion_type {
        MotionType::Pro | MotionType::Static => {
            if even {
                start
            } else {
                start.flipped()
            }
        }
        MotionType::Anti | MotionType::Dash => {
            if even {
                start.flipped()
            } else {
                start
            }
        }
        MotionType::Float => start,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/placement/orientation.rs"]
mod tests;
