//! Pictograph positioning engine for the kinetic-alphabet notation.
//!
//! A pictograph shows two props (blue and red) on a compass grid together with the
//! arrows that describe how each prop moves. This crate computes where everything
//! goes:
//!
//! - Place each arrow from its motion ([`ArrowPlacementCalculator`])
//! - Decide which arrow glyphs are drawn flipped ([`should_mirror_arrow`])
//! - Push apart props that end on the same point ([`BetaOverlapResolver`])
//! - Check beats against the reference dataset ([`MotionValidator`])
//!
//! [`PictographEngine`] ties these together behind an [`EngineConfig`].
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod beta;
pub(crate) mod engine;
pub(crate) mod mirror;
pub(crate) mod model;
pub(crate) mod placement;
pub(crate) mod validation;

pub use crate::foundation::config::{DatasetConfig, EngineConfig};
pub use crate::foundation::core::{
    Affine, Point, Rect, SCENE_CENTER, SCENE_SIZE, Vec2, normalize_degrees,
};
pub use crate::foundation::error::{PictographError, PictographResult};

pub use crate::model::motion::{MotionData, VALID_TURNS};
pub use crate::model::pictograph::{
    ArrowData, BeatData, ColorPair, DEFAULT_PROP_TYPE, PictographData, PropData,
};
pub use crate::model::types::{
    Color, GridMode, Location, MotionType, Orientation, PropArrangement, RotationDirection,
};

pub use crate::placement::adjustment::{AdjustmentTable, PlacementKey, PlacementLayer};
pub use crate::placement::calculator::{
    ArrowPlacement, ArrowPlacementCalculator, calculate_arrow_location,
    calculate_initial_position, calculate_rotation, place_props, placement_key,
};
pub use crate::placement::orientation::calculate_end_orientation;
pub use crate::placement::points::{hand_point, layer2_point};

pub use crate::mirror::{
    apply_mirror_transform, resolve_mirroring, should_mirror_arrow, should_mirror_motion,
};

pub use crate::beta::category::{
    DEFAULT_BETA_OFFSET_DIVISOR, PropCategory, PropType, base_offset_for_tag, category_of_tag,
};
pub use crate::beta::collaborators::{
    BETA_ENDING_LETTERS, BetaSwapPolicy, LetterClassifier, NeverSwap, StandardLetterClasses,
};
pub use crate::beta::direction::{
    SeparationDirection, direction_table, get_separation_direction,
};
pub use crate::beta::resolver::BetaOverlapResolver;

pub use crate::validation::dataset::{
    DatasetOrigin, PictographRecord, REQUIRED_COLUMNS, ValidationDataset,
};
pub use crate::validation::validator::MotionValidator;

pub use crate::engine::context::EngineContext;
pub use crate::engine::pipeline::PictographEngine;
