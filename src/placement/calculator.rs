use crate::{
    foundation::core::{Point, SCENE_CENTER, Vec2, normalize_degrees},
    model::{
        motion::MotionData,
        pictograph::{ArrowData, PictographData},
        types::{Location, MotionType, PropArrangement},
    },
    placement::{
        adjustment::{AdjustmentTable, PlacementKey},
        points::{hand_point, layer2_point},
    },
};

/// Final arrow position and glyph rotation in scene units.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ArrowPlacement {
    pub position: Point,
    pub rotation_deg: f64,
}

impl ArrowPlacement {
    pub const CENTER: Self = Self {
        position: SCENE_CENTER,
        rotation_deg: 0.0,
    };
}

/// Shift motions are drawn at their destination, static and dash at the
/// stationary point.
pub fn calculate_arrow_location(motion: &MotionData) -> Location {
    if motion.motion_type.is_shift() {
        motion.end_loc
    } else {
        motion.start_loc
    }
}

/// Un-adjusted anchor: layer-2 point for shifts, hand point otherwise.
pub fn calculate_initial_position(motion: &MotionData) -> Point {
    let loc = calculate_arrow_location(motion);
    if motion.motion_type.is_shift() {
        layer2_point(loc)
    } else {
        hand_point(loc)
    }
}

/// Compass bearing of `location`, turned around for ANTI motions.
pub fn calculate_rotation(motion: &MotionData, location: Location) -> f64 {
    let base = location.compass_degrees();
    match motion.motion_type {
        MotionType::Anti => normalize_degrees(base + 180.0),
        _ => base,
    }
}

/// Key for `motion` under `arrangement`; the layer comes from the motion's end orientation.
pub fn placement_key(motion: &MotionData, arrangement: PropArrangement) -> PlacementKey {
    PlacementKey::new(motion.motion_type, motion.end_ori, arrangement)
}

/// Per-arrow geometric pipeline: location, base point, rotation, adjustment.
#[derive(Clone, Copy, Debug)]
pub struct ArrowPlacementCalculator<'a> {
    adjustments: &'a AdjustmentTable,
}

impl<'a> ArrowPlacementCalculator<'a> {
    pub fn new(adjustments: &'a AdjustmentTable) -> Self {
        Self { adjustments }
    }

    pub fn calculate_adjustment(&self, motion: &MotionData, arrangement: PropArrangement) -> Vec2 {
        self.adjustments.get(placement_key(motion, arrangement))
    }

    /// Place one arrow. An arrow without motion lands at the scene center, unrotated.
    pub fn calculate_arrow_position(
        &self,
        arrow: &ArrowData,
        pictograph: &PictographData,
    ) -> ArrowPlacement {
        let Some(motion) = arrow.motion.as_ref() else {
            return ArrowPlacement::CENTER;
        };

        let location = calculate_arrow_location(motion);
        let initial = calculate_initial_position(motion);
        let rotation_deg = calculate_rotation(motion, location);
        let adjustment = self.calculate_adjustment(motion, pictograph.arrangement);

        ArrowPlacement {
            position: initial + adjustment,
            rotation_deg,
        }
    }

    /// Place every visible arrow that has motion; everything else is copied as-is.
    pub fn calculate_all_arrow_positions(&self, pictograph: &PictographData) -> PictographData {
        let arrows = pictograph.arrows.clone().map(|_, arrow| {
            if !arrow.is_visible || arrow.motion.is_none() {
                return arrow;
            }
            let placed = self.calculate_arrow_position(&arrow, pictograph);
            arrow.with_placement(placed.position, placed.rotation_deg)
        });
        PictographData {
            arrows,
            ..pictograph.clone()
        }
    }
}

/// Put each prop on the hand point of its motion's end location.
///
/// Props whose arrow carries no motion keep their current position.
pub fn place_props(pictograph: &PictographData) -> PictographData {
    let props = pictograph.props.clone().map(|color, prop| {
        match pictograph.arrows.get(color).motion {
            Some(motion) => prop.with_position(hand_point(motion.end_loc)),
            None => prop,
        }
    });
    PictographData {
        props,
        ..pictograph.clone()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/placement/calculator.rs"]
mod tests;
