use super::*;

fn pro_n_to_s() -> MotionData {
    MotionData::new(
        MotionType::Pro,
        RotationDirection::Clockwise,
        Location::North,
        Location::South,
    )
}

#[test]
fn new_defaults_to_one_turn_in_to_out() {
    let m = pro_n_to_s();
    assert_eq!(m.turns, 1.0);
    assert_eq!(m.start_ori, Orientation::In);
    assert_eq!(m.end_ori, Orientation::Out);
}

#[test]
fn builders_return_fresh_values() {
    let base = pro_n_to_s();
    let half = base.with_turns(1.5).with_start_ori(Orientation::Clock);
    assert_eq!(base.turns, 1.0);
    assert_eq!(half.turns, 1.5);
    assert_eq!(half.start_ori, Orientation::Clock);
    assert!(half.is_half_turn());
    assert!(!base.is_half_turn());
}

#[test]
fn validate_rejects_off_grid_turns() {
    assert!(pro_n_to_s().validate().is_ok());
    assert!(pro_n_to_s().with_turns(3.0).validate().is_ok());
    assert!(pro_n_to_s().with_turns(0.25).validate().is_err());
    assert!(pro_n_to_s().with_turns(3.5).validate().is_err());
}

#[test]
fn serde_roundtrip_keeps_tags() {
    let m = pro_n_to_s();
    let json = serde_json::to_value(m).unwrap();
    assert_eq!(json["motion_type"], "pro");
    assert_eq!(json["prop_rot_dir"], "cw");
    assert_eq!(json["end_loc"], "s");
    let back: MotionData = serde_json::from_value(json).unwrap();
    assert_eq!(back, m);
}

#[test]
fn end_orientation_tracks_turns_and_start() {
    let m = pro_n_to_s().with_turns(2.0);
    assert_eq!(m.end_ori, Orientation::In);
    let m = m.with_start_ori(Orientation::Clock);
    assert_eq!(m.end_ori, Orientation::Clock);
    let m = m.with_turns(0.5);
    assert_eq!(m.end_ori, Orientation::Counter);

    let anti = MotionData::new(
        MotionType::Anti,
        RotationDirection::Clockwise,
        Location::North,
        Location::South,
    );
    assert_eq!(anti.end_ori, Orientation::In);
    assert_eq!(anti.with_end_ori(Orientation::Out).end_ori, Orientation::Out);
}
