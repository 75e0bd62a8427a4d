//! Fixed reference points of the 950-unit scene.
//!
//! Layer-2 points sit 100 units from the center and anchor shift arrows; hand
//! points sit 50 units from the center and anchor non-shift arrows and props.
//! Values are literal so they match the notation's drawings exactly.

use crate::{foundation::core::Point, model::types::Location};

pub fn layer2_point(loc: Location) -> Point {
    match loc {
        Location::North => Point::new(475.0, 375.0),
        Location::NorthEast => Point::new(545.710678, 404.289322),
        Location::East => Point::new(575.0, 475.0),
        Location::SouthEast => Point::new(545.710678, 545.710678),
        Location::South => Point::new(475.0, 575.0),
        Location::SouthWest => Point::new(404.289322, 545.710678),
        Location::West => Point::new(375.0, 475.0),
        Location::NorthWest => Point::new(404.289322, 404.289322),
    }
}

pub fn hand_point(loc: Location) -> Point {
    match loc {
        Location::North => Point::new(475.0, 425.0),
        Location::NorthEast => Point::new(510.355339, 439.644661),
        Location::East => Point::new(525.0, 475.0),
        Location::SouthEast => Point::new(510.355339, 510.355339),
        Location::South => Point::new(475.0, 525.0),
        Location::SouthWest => Point::new(439.644661, 510.355339),
        Location::West => Point::new(425.0, 475.0),
        Location::NorthWest => Point::new(439.644661, 439.644661),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/placement/points.rs"]
mod tests;
