use crate::{
    beta::{
        category::{base_offset_for_tag, category_of_tag},
        collaborators::{BetaSwapPolicy, LetterClassifier},
        direction::{SeparationDirection, get_separation_direction},
    },
    foundation::core::Vec2,
    model::{
        pictograph::{BeatData, ColorPair, PictographData},
        types::Color,
    },
};

/// Pushes two props that end on the same point apart, one each way.
///
/// Runs after both arrows are placed; it only needs the two end locations and
/// orientations, not the arrow positions themselves.
#[derive(Clone, Copy)]
pub struct BetaOverlapResolver<'a> {
    classifier: &'a dyn LetterClassifier,
    swap_policy: &'a dyn BetaSwapPolicy,
}

impl<'a> BetaOverlapResolver<'a> {
    pub fn new(classifier: &'a dyn LetterClassifier, swap_policy: &'a dyn BetaSwapPolicy) -> Self {
        Self {
            classifier,
            swap_policy,
        }
    }

    /// Beta-ending letter, both motions present, same prop category, same end point.
    pub fn should_apply_beta_positioning(&self, pictograph: &PictographData) -> bool {
        if !self.classifier.is_beta_ending_letter(&pictograph.letter) {
            return false;
        }
        let (Some(blue), Some(red)) = (pictograph.arrows.blue.motion, pictograph.arrows.red.motion)
        else {
            return false;
        };
        let blue_category = category_of_tag(&pictograph.props.blue.prop_type);
        let red_category = category_of_tag(&pictograph.props.red.prop_type);
        if blue_category.is_none() || blue_category != red_category {
            return false;
        }
        blue.end_loc == red.end_loc
    }

    /// Table directions for both colors, exchanged when the swap policy asks for it.
    pub fn separation_directions(&self, beat: &BeatData) -> ColorPair<SeparationDirection> {
        let blue = get_separation_direction(&beat.blue_motion, Color::Blue);
        let red = get_separation_direction(&beat.red_motion, Color::Red);
        let grid_mode = beat.blue_motion.end_loc.grid_mode();
        if self.swap_policy.should_swap_beta_props(beat, grid_mode) {
            ColorPair::new(red, blue)
        } else {
            ColorPair::new(blue, red)
        }
    }

    /// `(blue_offset, red_offset)` to add to the shared collision point.
    pub fn calculate_separation_offsets(&self, beat: &BeatData, prop_type: &str) -> (Vec2, Vec2) {
        let base = base_offset_for_tag(prop_type);
        let dirs = self.separation_directions(beat);
        (dirs.blue.offset(base), dirs.red.offset(base))
    }

    /// Apply the separation to both props when the beta conditions hold.
    pub fn resolve(&self, pictograph: &PictographData) -> PictographData {
        if !self.should_apply_beta_positioning(pictograph) {
            return pictograph.clone();
        }
        let Some(beat) = pictograph.to_beat() else {
            return pictograph.clone();
        };

        let (blue_offset, red_offset) =
            self.calculate_separation_offsets(&beat, &pictograph.props.blue.prop_type);
        tracing::trace!(
            letter = %pictograph.letter,
            ?blue_offset,
            ?red_offset,
            "separating beta props"
        );

        let props = pictograph.props.clone().map(|color, prop| {
            let offset = match color {
                Color::Blue => blue_offset,
                Color::Red => red_offset,
            };
            let position = prop.position + offset;
            prop.with_position(position)
        });
        PictographData {
            props,
            ..pictograph.clone()
        }
    }
}

impl std::fmt::Debug for BetaOverlapResolver<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BetaOverlapResolver").finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/beta/resolver.rs"]
mod tests;
