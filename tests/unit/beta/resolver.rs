use super::*;
use crate::{
    beta::collaborators::{NeverSwap, StandardLetterClasses},
    model::{
        motion::MotionData,
        types::{GridMode, Location, MotionType, Orientation, RotationDirection},
    },
    placement::calculator::place_props,
};

fn static_at(loc: Location) -> MotionData {
    MotionData::new(
        MotionType::Static,
        RotationDirection::NoRotation,
        loc,
        loc,
    )
}

fn beta_pictograph(letter: &str, loc: Location, prop: &str) -> PictographData {
    let beat = BeatData::new(letter, static_at(loc), static_at(loc));
    place_props(&PictographData::from_beat(&beat, prop))
}

#[test]
fn trigger_requires_all_four_conditions() {
    let classes = StandardLetterClasses::default();
    let resolver = BetaOverlapResolver::new(&classes, &NeverSwap);

    assert!(resolver.should_apply_beta_positioning(&beta_pictograph(
        "β",
        Location::North,
        "staff"
    )));
    // letter outside the beta-ending class
    assert!(!resolver.should_apply_beta_positioning(&beta_pictograph(
        "A",
        Location::North,
        "staff"
    )));
    // different end points
    let beat = BeatData::new("β", static_at(Location::North), static_at(Location::South));
    assert!(!resolver.should_apply_beta_positioning(&PictographData::from_beat(&beat, "staff")));
    // categories differ
    let p = beta_pictograph("β", Location::North, "staff");
    let mixed = p
        .clone()
        .with_prop(p.props.red.clone().with_prop_type("bigstaff"));
    assert!(!resolver.should_apply_beta_positioning(&mixed));
    // missing motion
    let bare = PictographData::new("β", GridMode::Diamond);
    assert!(!resolver.should_apply_beta_positioning(&bare));
}

#[test]
fn unknown_prop_tags_never_collide() {
    let classes = StandardLetterClasses::default();
    let resolver = BetaOverlapResolver::new(&classes, &NeverSwap);
    let p = beta_pictograph("G", Location::East, "lightsaber");
    assert!(!resolver.should_apply_beta_positioning(&p));
    assert_eq!(resolver.resolve(&p), p);
}

#[test]
fn diamond_radial_north_offsets_are_opposite() {
    let classes = StandardLetterClasses::default();
    let resolver = BetaOverlapResolver::new(&classes, &NeverSwap);
    let beat = BeatData::new("β", static_at(Location::North), static_at(Location::North));
    let base = 950.0 / 45.0;

    let (blue, red) = resolver.calculate_separation_offsets(&beat, "staff");
    assert_eq!(blue, Vec2::new(-base, 0.0));
    assert_eq!(red, Vec2::new(base, 0.0));
}

#[test]
fn swap_policy_exchanges_directions() {
    let classes = StandardLetterClasses::default();
    let swap_on_diamond = |_: &BeatData, grid: GridMode| grid == GridMode::Diamond;
    let resolver = BetaOverlapResolver::new(&classes, &swap_on_diamond);
    let beat = BeatData::new("β", static_at(Location::North), static_at(Location::North));
    let base = 950.0 / 45.0;

    let (blue, red) = resolver.calculate_separation_offsets(&beat, "staff");
    assert_eq!(blue, Vec2::new(base, 0.0));
    assert_eq!(red, Vec2::new(-base, 0.0));

    let box_beat = BeatData::new(
        "β",
        static_at(Location::NorthEast),
        static_at(Location::NorthEast),
    );
    let dirs = resolver.separation_directions(&box_beat);
    assert_eq!(dirs.blue, SeparationDirection::UpLeft);
    assert_eq!(dirs.red, SeparationDirection::DownRight);
}

#[test]
fn box_offsets_use_the_diagonal_length() {
    let classes = StandardLetterClasses::default();
    let resolver = BetaOverlapResolver::new(&classes, &NeverSwap);
    let m = static_at(Location::SouthWest).with_end_ori(Orientation::Clock);
    let beat = BeatData::new("β", m, m);
    let d = (950.0 / 60.0) / std::f64::consts::SQRT_2;

    let (blue, red) = resolver.calculate_separation_offsets(&beat, "club");
    assert_eq!(blue, Vec2::new(-d, d));
    assert_eq!(red, Vec2::new(d, -d));
}

#[test]
fn resolve_moves_props_symmetrically() {
    let classes = StandardLetterClasses::default();
    let resolver = BetaOverlapResolver::new(&classes, &NeverSwap);
    let p = beta_pictograph("β", Location::East, "staff");
    let shared = p.props.blue.position;
    assert_eq!(shared, p.props.red.position);

    let out = resolver.resolve(&p);
    let blue = out.props.blue.position - shared;
    let red = out.props.red.position - shared;
    assert_ne!(blue, Vec2::ZERO);
    assert_eq!(blue, -red);
    assert_eq!(out.arrows, p.arrows);
}
