use crate::foundation::core::SCENE_SIZE;

/// Named prop kinds the notation draws.
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
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PropType {
    Hand,
    Staff,
    Simplestaff,
    Bigstaff,
    Club,
    Buugeng,
    Bigbuugeng,
    Fractalgeng,
    Eightrings,
    Bigeightrings,
    Doublestar,
    Bigdoublestar,
    Quiad,
    Fan,
    Bigfan,
    Triad,
    Bigtriad,
    Minihoop,
    Bighoop,
    Sword,
    Guitar,
    Ukulele,
    Chicken,
    Triquetra,
    Triquetra2,
}

/// Collision class: two props are only separated when they share one.
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
pub enum PropCategory {
    BigUnilateral,
    SmallUnilateral,
    SmallBilateral,
    BigBilateral,
    Hands,
}

impl PropType {
    pub fn from_tag(tag: &str) -> Option<Self> {
        tag.trim().parse().ok()
    }

    pub fn category(self) -> PropCategory {
        use PropCategory as C;
        match self {
            Self::Bighoop
            | Self::Guitar
            | Self::Sword
            | Self::Chicken
            | Self::Bigfan
            | Self::Bigtriad => C::BigUnilateral,
            Self::Fan
            | Self::Club
            | Self::Minihoop
            | Self::Triad
            | Self::Ukulele
            | Self::Triquetra
            | Self::Triquetra2 => C::SmallUnilateral,
            Self::Staff
            | Self::Simplestaff
            | Self::Buugeng
            | Self::Fractalgeng
            | Self::Eightrings
            | Self::Doublestar
            | Self::Quiad => C::SmallBilateral,
            Self::Bigstaff | Self::Bigbuugeng | Self::Bigeightrings | Self::Bigdoublestar => {
                C::BigBilateral
            }
            Self::Hand => C::Hands,
        }
    }

    /// Scene-size divisor for the beta separation distance.
    pub fn beta_offset_divisor(self) -> f64 {
        match self {
            Self::Club | Self::Eightrings | Self::Bigeightrings | Self::Bigdoublestar => 60.0,
            Self::Doublestar | Self::Quiad | Self::Fractalgeng | Self::Bigbuugeng => 50.0,
            _ => DEFAULT_BETA_OFFSET_DIVISOR,
        }
    }
}

pub const DEFAULT_BETA_OFFSET_DIVISOR: f64 = 45.0;

/// Category of a free-form prop tag; unknown tags have none.
pub fn category_of_tag(tag: &str) -> Option<PropCategory> {
    PropType::from_tag(tag).map(PropType::category)
}

/// Straight-line separation for `prop_tag`; unknown tags use the default divisor.
pub fn base_offset_for_tag(tag: &str) -> f64 {
    let divisor = PropType::from_tag(tag)
        .map(PropType::beta_offset_divisor)
        .unwrap_or(DEFAULT_BETA_OFFSET_DIVISOR);
    SCENE_SIZE / divisor
}

#[cfg(test)]
#[path = "../../tests/unit/beta/category.rs"]
mod tests;
