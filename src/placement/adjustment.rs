use std::{collections::HashMap, path::Path};

use anyhow::Context;

use crate::{
    foundation::core::Vec2,
    foundation::error::{PictographError, PictographResult},
    model::types::{MotionType, Orientation, PropArrangement, parse_tag},
};

/// Ring an arrow's prop ends on: layer 1 for radial orientations, layer 2 otherwise.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
)]
pub enum PlacementLayer {
    #[serde(rename = "layer1")]
    #[strum(serialize = "layer1")]
    Layer1,
    #[serde(rename = "layer2")]
    #[strum(serialize = "layer2")]
    Layer2,
}

impl PlacementLayer {
    pub fn for_orientation(ori: Orientation) -> Self {
        if ori.is_radial() {
            Self::Layer1
        } else {
            Self::Layer2
        }
    }
}

/// Key into the adjustment table, rendered as `{motion}_to_{layer}_{arrangement}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlacementKey {
    pub motion_type: MotionType,
    pub layer: PlacementLayer,
    pub arrangement: PropArrangement,
}

impl PlacementKey {
    pub fn new(
        motion_type: MotionType,
        end_ori: Orientation,
        arrangement: PropArrangement,
    ) -> Self {
        Self {
            motion_type,
            layer: PlacementLayer::for_orientation(end_ori),
            arrangement,
        }
    }
}

impl std::fmt::Display for PlacementKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}_to_{}_{}", self.motion_type, self.layer, self.arrangement)
    }
}

impl std::str::FromStr for PlacementKey {
    type Err = PictographError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (motion, rest) = s
            .split_once("_to_")
            .ok_or_else(|| PictographError::parse(format!("malformed placement key '{s}'")))?;
        let (layer, arrangement) = rest
            .rsplit_once('_')
            .ok_or_else(|| PictographError::parse(format!("malformed placement key '{s}'")))?;
        Ok(Self {
            motion_type: parse_tag("motion type", motion)?,
            layer: parse_tag("placement layer", layer)?,
            arrangement: parse_tag("prop arrangement", arrangement)?,
        })
    }
}

/// Fine offsets per placement key, loaded from adjustment data.
///
/// Keys without an entry resolve to a zero offset.
#[derive(Clone, Debug, Default)]
pub struct AdjustmentTable {
    overrides: HashMap<String, Vec2>,
}

impl AdjustmentTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_override(mut self, key: impl Into<String>, offset: Vec2) -> Self {
        self.overrides.insert(key.into(), offset);
        self
    }

    /// Parse a JSON object of `key -> [dx, dy]` overrides.
    pub fn from_json_str(json: &str) -> PictographResult<Self> {
        let raw: HashMap<String, [f64; 2]> = serde_json::from_str(json)
            .map_err(|e| PictographError::serde(format!("adjustment table: {e}")))?;
        let overrides = raw
            .into_iter()
            .map(|(k, [dx, dy])| (k, Vec2::new(dx, dy)))
            .collect();
        Ok(Self { overrides })
    }

    pub fn from_json_file(path: &Path) -> PictographResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read adjustment table from '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }

    pub fn get(&self, key: PlacementKey) -> Vec2 {
        self.lookup(&key.to_string())
    }

    /// Look up a textual key; anything unknown resolves to a zero offset.
    pub fn lookup(&self, key: &str) -> Vec2 {
        self.overrides.get(key).copied().unwrap_or(Vec2::ZERO)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/placement/adjustment.rs"]
mod tests;
