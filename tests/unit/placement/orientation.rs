use super::*;
use crate::model::types::{Location, RotationDirection};
use strum::IntoEnumIterator;

fn motion(motion_type: MotionType, turns: f64) -> MotionData {
    MotionData::new(
        motion_type,
        RotationDirection::Clockwise,
        Location::North,
        Location::South,
    )
    .with_turns(turns)
}

#[test]
fn pro_parity() {
    assert_eq!(
        calculate_end_orientation(&motion(MotionType::Pro, 2.0), Orientation::In),
        Orientation::In
    );
    assert_eq!(
        calculate_end_orientation(&motion(MotionType::Pro, 1.0), Orientation::In),
        Orientation::Out
    );
    assert_eq!(
        calculate_end_orientation(&motion(MotionType::Static, 0.0), Orientation::Out),
        Orientation::Out
    );
}

#[test]
fn anti_parity_is_inverted() {
    assert_eq!(
        calculate_end_orientation(&motion(MotionType::Anti, 2.0), Orientation::In),
        Orientation::Out
    );
    assert_eq!(
        calculate_end_orientation(&motion(MotionType::Anti, 3.0), Orientation::In),
        Orientation::In
    );
    assert_eq!(
        calculate_end_orientation(&motion(MotionType::Dash, 0.0), Orientation::Clock),
        Orientation::Counter
    );
}

#[test]
fn half_turns_always_flip() {
    for mt in MotionType::iter() {
        for turns in [0.5, 1.5, 2.5] {
            assert_eq!(
                calculate_end_orientation(&motion(mt, turns), Orientation::In),
                Orientation::Out,
                "{mt} {turns}"
            );
        }
    }
}

#[test]
fn float_keeps_orientation_on_whole_turns() {
    assert_eq!(
        calculate_end_orientation(&motion(MotionType::Float, 1.0), Orientation::Counter),
        Orientation::Counter
    );
}
