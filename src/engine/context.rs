use crate::{
    beta::collaborators::{BetaSwapPolicy, LetterClassifier, NeverSwap, StandardLetterClasses},
    foundation::config::EngineConfig,
    foundation::error::PictographResult,
    placement::adjustment::AdjustmentTable,
    validation::validator::MotionValidator,
};

/// Everything the engine reads, built once from an [`EngineConfig`] and then shared
/// by reference.
///
/// Holds the loaded reference dataset, the adjustment table and the two external
/// collaborators (letter classes and beta swap policy). Nothing in here changes
/// after construction.
pub struct EngineContext {
    config: EngineConfig,
    validator: MotionValidator,
    adjustments: AdjustmentTable,
    classifier: Box<dyn LetterClassifier>,
    swap_policy: Box<dyn BetaSwapPolicy>,
}

impl EngineContext {
    /// Validate `config`, read the adjustment overrides and load the dataset.
    ///
    /// Only an invalid config or an unreadable adjustments file is an error; the
    /// dataset degrades to embedded seed rows instead.
    #[tracing::instrument(skip(config))]
    pub fn from_config(config: EngineConfig) -> PictographResult<Self> {
        config.validate()?;

        let adjustments = match &config.adjustments_path {
            Some(path) => AdjustmentTable::from_json_file(path)?,
            None => AdjustmentTable::new(),
        };
        let classifier: Box<dyn LetterClassifier> = match &config.beta_ending_letters {
            Some(letters) => Box::new(StandardLetterClasses::with_letters(letters.iter().cloned())),
            None => Box::new(StandardLetterClasses::default()),
        };
        let validator = MotionValidator::load(&config.dataset);

        tracing::debug!(
            rows = validator.len(),
            seed = validator.is_from_seed(),
            overrides = adjustments.override_count(),
            "engine context ready"
        );

        Ok(Self {
            config,
            validator,
            adjustments,
            classifier,
            swap_policy: Box::new(NeverSwap),
        })
    }

    pub fn with_validator(self, validator: MotionValidator) -> Self {
        Self { validator, ..self }
    }

    pub fn with_adjustments(self, adjustments: AdjustmentTable) -> Self {
        Self {
            adjustments,
            ..self
        }
    }

    pub fn with_letter_classifier(self, classifier: impl LetterClassifier + 'static) -> Self {
        Self {
            classifier: Box::new(classifier),
            ..self
        }
    }

    pub fn with_swap_policy(self, swap_policy: impl BetaSwapPolicy + 'static) -> Self {
        Self {
            swap_policy: Box::new(swap_policy),
            ..self
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn validator(&self) -> &MotionValidator {
        &self.validator
    }

    pub fn adjustments(&self) -> &AdjustmentTable {
        &self.adjustments
    }

    pub fn letter_classifier(&self) -> &dyn LetterClassifier {
        self.classifier.as_ref()
    }

    pub fn swap_policy(&self) -> &dyn BetaSwapPolicy {
        self.swap_policy.as_ref()
    }
}

impl std::fmt::Debug for EngineContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineContext")
            .field("config", &self.config)
            .field("dataset_rows", &self.validator.len())
            .field("adjustment_overrides", &self.adjustments.override_count())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/context.rs"]
mod tests;
