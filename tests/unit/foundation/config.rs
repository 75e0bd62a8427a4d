use super::*;

#[test]
fn empty_object_yields_defaults() {
    let config = EngineConfig::from_json_str("{}").unwrap();
    assert_eq!(config, EngineConfig::default());
    assert_eq!(config.prop_type, "staff");
    assert!(!config.dataset.is_configured());
}

#[test]
fn parses_nested_dataset_paths() {
    let config = EngineConfig::from_json_str(
        r#"{
            "prop_type": "club",
            "threads": 2,
            "dataset": { "diamond_path": "data/diamond.csv" }
        }"#,
    )
    .unwrap();
    assert_eq!(config.prop_type, "club");
    assert_eq!(config.threads, Some(2));
    assert_eq!(
        config.dataset.diamond_path.as_deref(),
        Some(Path::new("data/diamond.csv"))
    );
    assert!(config.dataset.box_path.is_none());
    assert!(config.dataset.is_configured());
}

#[test]
fn rejects_zero_threads() {
    let err = EngineConfig::from_json_str(r#"{ "threads": 0 }"#).unwrap_err();
    assert!(err.to_string().contains("threads"));
}

#[test]
fn rejects_unknown_fields() {
    let err = EngineConfig::from_json_str(r#"{ "scene": 1 }"#).unwrap_err();
    assert!(err.to_string().contains("serialization error:"));
}

#[test]
fn rejects_blank_prop_type_and_letters() {
    assert!(EngineConfig::from_json_str(r#"{ "prop_type": " " }"#).is_err());
    assert!(EngineConfig::from_json_str(r#"{ "beta_ending_letters": ["G", ""] }"#).is_err());
}
