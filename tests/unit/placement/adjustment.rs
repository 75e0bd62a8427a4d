use super::*;
use strum::IntoEnumIterator;

#[test]
fn key_renders_in_notation_form() {
    let key = PlacementKey::new(MotionType::Pro, Orientation::In, PropArrangement::Alpha);
    assert_eq!(key.to_string(), "pro_to_layer1_alpha");
    let key = PlacementKey::new(MotionType::Anti, Orientation::Clock, PropArrangement::Gamma);
    assert_eq!(key.to_string(), "anti_to_layer2_gamma");
}

#[test]
fn key_parses_back() {
    for mt in MotionType::iter() {
        for layer in PlacementLayer::iter() {
            for arrangement in PropArrangement::iter() {
                let key = PlacementKey {
                    motion_type: mt,
                    layer,
                    arrangement,
                };
                assert_eq!(key.to_string().parse::<PlacementKey>().unwrap(), key);
            }
        }
    }
    assert!("pro_layer1_alpha".parse::<PlacementKey>().is_err());
    assert!("spin_to_layer1_alpha".parse::<PlacementKey>().is_err());
}

#[test]
fn unknown_keys_resolve_to_zero() {
    let table = AdjustmentTable::new();
    assert_eq!(table.lookup("not_a_key"), Vec2::ZERO);
    assert_eq!(table.lookup("pro_to_layer9_alpha"), Vec2::ZERO);
}

#[test]
fn empty_table_adds_no_offset_to_any_key() {
    let table = AdjustmentTable::new();
    assert_eq!(table.lookup("pro_to_layer1_alpha"), Vec2::ZERO);
    assert_eq!(table.lookup("static_to_layer1_beta"), Vec2::ZERO);
    for mt in MotionType::iter() {
        for ori in Orientation::iter() {
            for arrangement in PropArrangement::iter() {
                let key = PlacementKey::new(mt, ori, arrangement);
                assert_eq!(table.get(key), Vec2::ZERO, "{key}");
            }
        }
    }
}

#[test]
fn loaded_entries_are_returned_and_others_stay_zero() {
    let key = PlacementKey::new(MotionType::Pro, Orientation::Out, PropArrangement::Alpha);
    let table = AdjustmentTable::new().with_override("pro_to_layer1_alpha", Vec2::new(3.0, 4.0));
    assert_eq!(table.get(key), Vec2::new(3.0, 4.0));
    assert_eq!(table.lookup("pro_to_layer1_alpha"), Vec2::new(3.0, 4.0));
    assert_eq!(table.lookup("anti_to_layer1_alpha"), Vec2::ZERO);
}

#[test]
fn json_overlay_parses_pairs() {
    let table = AdjustmentTable::from_json_str(
        r#"{ "static_to_layer1_beta": [1.5, -2.0], "custom_key": [7, 8] }"#,
    )
    .unwrap();
    assert_eq!(table.override_count(), 2);
    assert_eq!(table.lookup("static_to_layer1_beta"), Vec2::new(1.5, -2.0));
    assert_eq!(table.lookup("custom_key"), Vec2::new(7.0, 8.0));
}

#[test]
fn json_overlay_rejects_bad_shape() {
    let err = AdjustmentTable::from_json_str(r#"{ "k": [1] }"#).unwrap_err();
    assert!(err.to_string().contains("serialization error:"));
}
