use crate::foundation::error::{PictographError, PictographResult};

/// One of the eight compass points a hand can occupy.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Location {
    #[serde(rename = "n")]
    #[strum(serialize = "n")]
    North,
    #[serde(rename = "ne")]
    #[strum(serialize = "ne")]
    NorthEast,
    #[serde(rename = "e")]
    #[strum(serialize = "e")]
    East,
    #[serde(rename = "se")]
    #[strum(serialize = "se")]
    SouthEast,
    #[serde(rename = "s")]
    #[strum(serialize = "s")]
    South,
    #[serde(rename = "sw")]
    #[strum(serialize = "sw")]
    SouthWest,
    #[serde(rename = "w")]
    #[strum(serialize = "w")]
    West,
    #[serde(rename = "nw")]
    #[strum(serialize = "nw")]
    NorthWest,
}

impl Location {
    /// Compass bearing in degrees, north = 0 increasing clockwise.
    pub fn compass_degrees(self) -> f64 {
        match self {
            Self::North => 0.0,
            Self::NorthEast => 45.0,
            Self::East => 90.0,
            Self::SouthEast => 135.0,
            Self::South => 180.0,
            Self::SouthWest => 225.0,
            Self::West => 270.0,
            Self::NorthWest => 315.0,
        }
    }

    pub fn is_cardinal(self) -> bool {
        matches!(self, Self::North | Self::East | Self::South | Self::West)
    }

    /// Grid topology this location belongs to: cardinal points sit on the
    /// diamond grid, diagonal points on the box grid.
    pub fn grid_mode(self) -> GridMode {
        if self.is_cardinal() {
            GridMode::Diamond
        } else {
            GridMode::Box
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::NorthEast => Self::SouthWest,
            Self::East => Self::West,
            Self::SouthEast => Self::NorthWest,
            Self::South => Self::North,
            Self::SouthWest => Self::NorthEast,
            Self::West => Self::East,
            Self::NorthWest => Self::SouthEast,
        }
    }
}

/// How a prop travels during a beat.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MotionType {
    Pro,
    Anti,
    Static,
    Dash,
    Float,
}

impl MotionType {
    /// Shift motions move the prop between two locations.
    pub fn is_shift(self) -> bool {
        matches!(self, Self::Pro | Self::Anti | Self::Float)
    }
}

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum RotationDirection {
    #[serde(rename = "cw")]
    #[strum(serialize = "cw")]
    Clockwise,
    #[serde(rename = "ccw")]
    #[strum(serialize = "ccw")]
    CounterClockwise,
    #[serde(rename = "no_rot")]
    #[strum(to_string = "no_rot", serialize = "norotation")]
    NoRotation,
}

/// Which way the distinguishing face of a prop points.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Orientation {
    In,
    Out,
    Clock,
    Counter,
}

impl Orientation {
    /// IN and OUT point along the radius; CLOCK and COUNTER point around it.
    pub fn is_radial(self) -> bool {
        matches!(self, Self::In | Self::Out)
    }

    pub fn flipped(self) -> Self {
        match self {
            Self::In => Self::Out,
            Self::Out => Self::In,
            Self::Clock => Self::Counter,
            Self::Counter => Self::Clock,
        }
    }
}

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum GridMode {
    #[default]
    Diamond,
    Box,
}

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Color {
    Blue,
    Red,
}

impl Color {
    pub fn other(self) -> Self {
        match self {
            Self::Blue => Self::Red,
            Self::Red => Self::Blue,
        }
    }
}

/// Relative arrangement of the two props at the end of a beat.
///
/// Alpha: props at opposite points. Beta: props at the same point.
/// Gamma: props a quarter turn apart.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PropArrangement {
    #[default]
    Alpha,
    Beta,
    Gamma,
}

impl PropArrangement {
    pub fn from_end_locations(blue: Location, red: Location) -> Self {
        if blue == red {
            Self::Beta
        } else if blue.opposite() == red {
            Self::Alpha
        } else {
            Self::Gamma
        }
    }

    /// Parse a position tag such as `alpha3` or `gamma11` by its family prefix.
    pub fn from_position_tag(tag: &str) -> PictographResult<Self> {
        let family = tag.trim_end_matches(|c: char| c.is_ascii_digit());
        family
            .parse()
            .map_err(|_| PictographError::parse(format!("unknown position tag '{tag}'")))
    }
}

/// Parse a text tag into one of the engine enums with a uniform error.
pub(crate) fn parse_tag<T: std::str::FromStr>(kind: &str, raw: &str) -> PictographResult<T> {
    raw.trim()
        .parse()
        .map_err(|_| PictographError::parse(format!("unknown {kind} '{raw}'")))
}

#[cfg(test)]
#[path = "../../tests/unit/model/types.rs"]
mod tests;
