use super::*;
use crate::{
    foundation::error::PictographError,
    model::{
        motion::MotionData,
        pictograph::BeatData,
        types::{GridMode, Location, MotionType, RotationDirection},
    },
};

fn beat() -> BeatData {
    let m = MotionData::new(
        MotionType::Static,
        RotationDirection::NoRotation,
        Location::North,
        Location::North,
    );
    BeatData::new("β", m, m)
}

#[test]
fn default_config_builds_on_seed_rows() {
    let ctx = EngineContext::from_config(EngineConfig::default()).unwrap();
    assert!(ctx.validator().is_from_seed());
    assert!(!ctx.validator().is_empty());
    assert_eq!(ctx.adjustments().override_count(), 0);
    assert!(ctx.letter_classifier().is_beta_ending_letter("β"));
    assert!(!ctx.letter_classifier().is_beta_ending_letter("A"));
    assert!(!ctx.swap_policy().should_swap_beta_props(&beat(), GridMode::Diamond));
}

#[test]
fn configured_letters_replace_the_builtin_set() {
    let config = EngineConfig {
        beta_ending_letters: Some(vec!["A".to_string()]),
        ..EngineConfig::default()
    };
    let ctx = EngineContext::from_config(config).unwrap();
    assert!(ctx.letter_classifier().is_beta_ending_letter("A"));
    assert!(!ctx.letter_classifier().is_beta_ending_letter("β"));
}

#[test]
fn invalid_config_is_rejected_before_loading() {
    let config = EngineConfig {
        threads: Some(0),
        ..EngineConfig::default()
    };
    let err = EngineContext::from_config(config).unwrap_err();
    assert!(matches!(err, PictographError::Validation(_)));
}

#[test]
fn unreadable_adjustments_file_is_an_error() {
    let config = EngineConfig {
        adjustments_path: Some(std::env::temp_dir().join("no_such_adjustments_file.json")),
        ..EngineConfig::default()
    };
    let err = EngineContext::from_config(config).unwrap_err();
    assert!(err.to_string().contains("read adjustment table"));
}

#[test]
fn collaborators_can_be_replaced() {
    let ctx = EngineContext::from_config(EngineConfig::default())
        .unwrap()
        .with_letter_classifier(StandardLetterClasses::with_letters(["Q"]))
        .with_swap_policy(|_: &BeatData, grid: GridMode| grid == GridMode::Diamond);
    assert!(ctx.letter_classifier().is_beta_ending_letter("Q"));
    assert!(ctx.swap_policy().should_swap_beta_props(&beat(), GridMode::Diamond));
    assert!(!ctx.swap_policy().should_swap_beta_props(&beat(), GridMode::Box));
}

#[test]
fn debug_summarizes_loaded_state() {
    let ctx = EngineContext::from_config(EngineConfig::default()).unwrap();
    let text = format!("{ctx:?}");
    assert!(text.contains("dataset_rows"));
}
