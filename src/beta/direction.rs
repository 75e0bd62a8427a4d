use crate::{
    foundation::core::Vec2,
    model::{
        motion::MotionData,
        types::{Color, GridMode, Location},
    },
};

/// Screen direction a prop is nudged in; UP is toward smaller y.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SeparationDirection {
    Left,
    Right,
    Up,
    Down,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl SeparationDirection {
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::UpLeft => Self::DownRight,
            Self::DownRight => Self::UpLeft,
            Self::UpRight => Self::DownLeft,
            Self::DownLeft => Self::UpRight,
        }
    }

    pub fn is_diagonal(self) -> bool {
        matches!(
            self,
            Self::UpLeft | Self::UpRight | Self::DownLeft | Self::DownRight
        )
    }

    /// Offset vector: `base` along an axis, `base / sqrt(2)` per axis on diagonals.
    pub fn offset(self, base: f64) -> Vec2 {
        let d = base / std::f64::consts::SQRT_2;
        match self {
            Self::Left => Vec2::new(-base, 0.0),
            Self::Right => Vec2::new(base, 0.0),
            Self::Up => Vec2::new(0.0, -base),
            Self::Down => Vec2::new(0.0, base),
            Self::UpLeft => Vec2::new(-d, -d),
            Self::UpRight => Vec2::new(d, -d),
            Self::DownLeft => Vec2::new(-d, d),
            Self::DownRight => Vec2::new(d, d),
        }
    }
}

/// Raw direction table keyed by grid, orientation class, end location and color.
///
/// Returns `None` when `location` does not belong to `grid_mode`.
pub fn direction_table(
    grid_mode: GridMode,
    is_radial: bool,
    location: Location,
    color: Color,
) -> Option<SeparationDirection> {
    use Color::{Blue, Red};
    use Location::*;
    use SeparationDirection as D;

    let dir = match (grid_mode, is_radial, location, color) {
        (GridMode::Diamond, true, North, Red) => D::Right,
        (GridMode::Diamond, true, North, Blue) => D::Left,
        (GridMode::Diamond, true, East, Red) => D::Down,
        (GridMode::Diamond, true, East, Blue) => D::Up,
        (GridMode::Diamond, true, South, Red) => D::Left,
        (GridMode::Diamond, true, South, Blue) => D::Right,
        (GridMode::Diamond, true, West, Red) => D::Up,
        (GridMode::Diamond, true, West, Blue) => D::Down,

        (GridMode::Diamond, false, North, Red) => D::Up,
        (GridMode::Diamond, false, North, Blue) => D::Down,
        (GridMode::Diamond, false, East, Red) => D::Right,
        (GridMode::Diamond, false, East, Blue) => D::Left,
        (GridMode::Diamond, false, South, Red) => D::Up,
        (GridMode::Diamond, false, South, Blue) => D::Down,
        (GridMode::Diamond, false, West, Red) => D::Right,
        (GridMode::Diamond, false, West, Blue) => D::Left,

        (GridMode::Box, true, NorthEast, Red) => D::DownRight,
        (GridMode::Box, true, NorthEast, Blue) => D::UpLeft,
        (GridMode::Box, true, SouthEast, Red) => D::UpRight,
        (GridMode::Box, true, SouthEast, Blue) => D::DownLeft,
        (GridMode::Box, true, SouthWest, Red) => D::DownRight,
        (GridMode::Box, true, SouthWest, Blue) => D::UpLeft,
        (GridMode::Box, true, NorthWest, Red) => D::UpRight,
        (GridMode::Box, true, NorthWest, Blue) => D::DownLeft,

        (GridMode::Box, false, NorthEast, Red) => D::UpLeft,
        (GridMode::Box, false, NorthEast, Blue) => D::DownRight,
        (GridMode::Box, false, SouthEast, Red) => D::UpRight,
        (GridMode::Box, false, SouthEast, Blue) => D::DownLeft,
        (GridMode::Box, false, SouthWest, Red) => D::UpRight,
        (GridMode::Box, false, SouthWest, Blue) => D::DownLeft,
        (GridMode::Box, false, NorthWest, Red) => D::DownRight,
        (GridMode::Box, false, NorthWest, Blue) => D::UpLeft,

        _ => return None,
    };
    Some(dir)
}

/// Direction the `color` prop of `motion` is pushed in; unmapped cases go RIGHT.
pub fn get_separation_direction(motion: &MotionData, color: Color) -> SeparationDirection {
    let location = motion.end_loc;
    direction_table(
        location.grid_mode(),
        motion.end_ori.is_radial(),
        location,
        color,
    )
    .unwrap_or(SeparationDirection::Right)
}

#[cfg(test)]
#[path = "../../tests/unit/beta/direction.rs"]
mod tests;
