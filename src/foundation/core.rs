pub use kurbo::{Affine, Point, Rect, Vec2};

/// Edge length of the square reference scene every table is expressed in.
pub const SCENE_SIZE: f64 = 950.0;

/// Center of the reference scene.
pub const SCENE_CENTER: Point = Point::new(SCENE_SIZE * 0.5, SCENE_SIZE * 0.5);

/// Wrap an angle in degrees into `[0, 360)`.
pub fn normalize_degrees(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
