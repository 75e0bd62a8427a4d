use super::*;
use strum::IntoEnumIterator;

#[test]
fn location_text_form_roundtrips_through_strum() {
    for loc in Location::iter() {
        let text = loc.to_string();
        assert_eq!(text.parse::<Location>().unwrap(), loc);
    }
    assert_eq!("NE".parse::<Location>().unwrap(), Location::NorthEast);
}

#[test]
fn grid_mode_follows_cardinality() {
    assert_eq!(Location::North.grid_mode(), GridMode::Diamond);
    assert_eq!(Location::West.grid_mode(), GridMode::Diamond);
    assert_eq!(Location::SouthEast.grid_mode(), GridMode::Box);
    assert_eq!(Location::NorthWest.grid_mode(), GridMode::Box);
}

#[test]
fn opposite_is_an_involution() {
    for loc in Location::iter() {
        assert_ne!(loc.opposite(), loc);
        assert_eq!(loc.opposite().opposite(), loc);
    }
}

#[test]
fn shift_motions_are_pro_anti_float() {
    let shifts: Vec<_> = MotionType::iter().filter(|m| m.is_shift()).collect();
    assert_eq!(
        shifts,
        vec![MotionType::Pro, MotionType::Anti, MotionType::Float]
    );
}

#[test]
fn rotation_direction_accepts_dataset_tags() {
    assert_eq!(
        "cw".parse::<RotationDirection>().unwrap(),
        RotationDirection::Clockwise
    );
    assert_eq!(
        "CCW".parse::<RotationDirection>().unwrap(),
        RotationDirection::CounterClockwise
    );
    assert_eq!(
        "no_rot".parse::<RotationDirection>().unwrap(),
        RotationDirection::NoRotation
    );
    assert_eq!(RotationDirection::NoRotation.to_string(), "no_rot");
}

#[test]
fn orientation_flip_and_radial_class() {
    assert_eq!(Orientation::In.flipped(), Orientation::Out);
    assert_eq!(Orientation::Clock.flipped(), Orientation::Counter);
    assert!(Orientation::Out.is_radial());
    assert!(!Orientation::Counter.is_radial());
}

#[test]
fn arrangement_from_end_locations() {
    use Location::*;
    assert_eq!(
        PropArrangement::from_end_locations(North, North),
        PropArrangement::Beta
    );
    assert_eq!(
        PropArrangement::from_end_locations(North, South),
        PropArrangement::Alpha
    );
    assert_eq!(
        PropArrangement::from_end_locations(North, East),
        PropArrangement::Gamma
    );
    assert_eq!(
        PropArrangement::from_end_locations(NorthEast, SouthWest),
        PropArrangement::Alpha
    );
}

#[test]
fn arrangement_from_position_tag() {
    assert_eq!(
        PropArrangement::from_position_tag("alpha3").unwrap(),
        PropArrangement::Alpha
    );
    assert_eq!(
        PropArrangement::from_position_tag("gamma11").unwrap(),
        PropArrangement::Gamma
    );
    assert!(PropArrangement::from_position_tag("delta1").is_err());
}

#[test]
fn serde_uses_lowercase_tags() {
    let json = serde_json::to_string(&(Location::SouthWest, MotionType::Anti)).unwrap();
    assert_eq!(json, r#"["sw","anti"]"#);
}
