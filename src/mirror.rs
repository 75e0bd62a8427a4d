use crate::{
    foundation::core::{Affine, Rect},
    model::{
        pictograph::{ArrowData, PictographData},
        types::{MotionType, RotationDirection},
    },
};

/// Whether a motion's arrow glyph is drawn flipped horizontally.
///
/// ANTI arrows flip when rotating clockwise; every other type flips when
/// rotating counter-clockwise. `NoRotation` never flips.
pub fn should_mirror_motion(motion_type: MotionType, prop_rot_dir: RotationDirection) -> bool {
    match (motion_type, prop_rot_dir) {
        (MotionType::Anti, RotationDirection::Clockwise) => true,
        (MotionType::Anti, _) => false,
        (_, RotationDirection::CounterClockwise) => true,
        _ => false,
    }
}

pub fn should_mirror_arrow(arrow: &ArrowData) -> bool {
    arrow
        .motion
        .as_ref()
        .is_some_and(|m| should_mirror_motion(m.motion_type, m.prop_rot_dir))
}

/// Horizontal flip about the center of the glyph's bounding box.
pub fn apply_mirror_transform(bounds: Rect) -> Affine {
    let c = bounds.center().to_vec2();
    Affine::translate(c) * Affine::scale_non_uniform(-1.0, 1.0) * Affine::translate(-c)
}

/// Set `is_mirrored` on both arrows.
pub fn resolve_mirroring(pictograph: &PictographData) -> PictographData {
    let arrows = pictograph.arrows.clone().map(|_, arrow| {
        let mirrored = should_mirror_arrow(&arrow);
        arrow.with_mirrored(mirrored)
    });
    PictographData {
        arrows,
        ..pictograph.clone()
    }
}

#[cfg(test)]
#[path = "../tests/unit/mirror.rs"]
mod tests;
