use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::{
    foundation::error::{PictographError, PictographResult},
    model::pictograph::DEFAULT_PROP_TYPE,
};

/// Where the two topology-specific reference tables live.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    pub diamond_path: Option<PathBuf>,
    pub box_path: Option<PathBuf>,
}

impl DatasetConfig {
    pub fn from_paths(diamond: impl Into<PathBuf>, box_: impl Into<PathBuf>) -> Self {
        Self {
            diamond_path: Some(diamond.into()),
            box_path: Some(box_.into()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.diamond_path.is_some() || self.box_path.is_some()
    }
}

/// Engine-wide settings, read once and handed to [`EngineContext`](crate::EngineContext).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Prop tag given to both props of pictographs built from beats.
    pub prop_type: String,
    /// Replaces the built-in beta-ending letter set when present.
    pub beta_ending_letters: Option<Vec<String>>,
    pub dataset: DatasetConfig,
    /// JSON object of placement-key overrides, `key -> [dx, dy]`.
    pub adjustments_path: Option<PathBuf>,
    /// Worker count for batch computation; rayon's default when unset.
    pub threads: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            prop_type: DEFAULT_PROP_TYPE.to_string(),
            beta_ending_letters: None,
            dataset: DatasetConfig::default(),
            adjustments_path: None,
            threads: None,
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(json: &str) -> PictographResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| PictographError::serde(format!("engine config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: &Path) -> PictographResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read engine config from '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> PictographResult<()> {
        if self.prop_type.trim().is_empty() {
            return Err(PictographError::validation("prop_type must be non-empty"));
        }
        if let Some(n) = self.threads
            && n == 0
        {
            return Err(PictographError::validation(
                "threads must be >= 1 when set",
            ));
        }
        if let Some(letters) = &self.beta_ending_letters
            && letters.iter().any(|l| l.trim().is_empty())
        {
            return Err(PictographError::validation(
                "beta_ending_letters must not contain empty letters",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
