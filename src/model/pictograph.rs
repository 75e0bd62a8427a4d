use crate::{
    foundation::core::{Point, SCENE_CENTER},
    model::motion::MotionData,
    model::types::{Color, GridMode, PropArrangement},
};

/// Prop tag used for placeholder props.
pub const DEFAULT_PROP_TYPE: &str = "staff";

/// Exactly one value per color.
///
/// Pictographs always carry both slots; this type makes a half-populated
/// pair unrepresentable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ColorPair<T> {
    pub blue: T,
    pub red: T,
}

impl<T> ColorPair<T> {
    pub fn new(blue: T, red: T) -> Self {
        Self { blue, red }
    }

    pub fn from_fn(mut f: impl FnMut(Color) -> T) -> Self {
        Self {
            blue: f(Color::Blue),
            red: f(Color::Red),
        }
    }

    pub fn get(&self, color: Color) -> &T {
        match color {
            Color::Blue => &self.blue,
            Color::Red => &self.red,
        }
    }

    pub fn get_mut(&mut self, color: Color) -> &mut T {
        match color {
            Color::Blue => &mut self.blue,
            Color::Red => &mut self.red,
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(Color, T) -> U) -> ColorPair<U> {
        ColorPair {
            blue: f(Color::Blue, self.blue),
            red: f(Color::Red, self.red),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Color, &T)> {
        [(Color::Blue, &self.blue), (Color::Red, &self.red)].into_iter()
    }
}

impl<T> std::ops::Index<Color> for ColorPair<T> {
    type Output = T;

    fn index(&self, color: Color) -> &T {
        self.get(color)
    }
}

/// Rendered glyph showing how one prop moved.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ArrowData {
    pub color: Color,
    pub motion: Option<MotionData>,
    pub position: Point,
    pub rotation_deg: f64,
    pub is_mirrored: bool,
    pub is_visible: bool,
}

impl ArrowData {
    /// Visible arrow without motion, parked at the scene center.
    pub fn blank(color: Color) -> Self {
        Self {
            color,
            motion: None,
            position: SCENE_CENTER,
            rotation_deg: 0.0,
            is_mirrored: false,
            is_visible: true,
        }
    }

    pub fn with_motion(self, motion: MotionData) -> Self {
        Self {
            motion: Some(motion),
            ..self
        }
    }

    pub fn with_placement(self, position: Point, rotation_deg: f64) -> Self {
        Self {
            position,
            rotation_deg,
            ..self
        }
    }

    pub fn with_mirrored(self, is_mirrored: bool) -> Self {
        Self {
            is_mirrored,
            ..self
        }
    }

    pub fn with_visible(self, is_visible: bool) -> Self {
        Self { is_visible, ..self }
    }
}

/// Rendered prop; `prop_type` is a free-form tag resolved to a category on demand.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PropData {
    pub color: Color,
    pub prop_type: String,
    pub position: Point,
}

impl PropData {
    pub fn blank(color: Color) -> Self {
        Self {
            color,
            prop_type: DEFAULT_PROP_TYPE.to_string(),
            position: SCENE_CENTER,
        }
    }

    pub fn with_prop_type(self, prop_type: impl Into<String>) -> Self {
        Self {
            prop_type: prop_type.into(),
            ..self
        }
    }

    pub fn with_position(self, position: Point) -> Self {
        Self { position, ..self }
    }
}

/// One still frame: letter, grid, and both colors' arrows and props.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PictographData {
    pub letter: String,
    pub grid_mode: GridMode,
    pub arrangement: PropArrangement,
    pub arrows: ColorPair<ArrowData>,
    pub props: ColorPair<PropData>,
}

impl PictographData {
    /// Empty pictograph with placeholder arrows and props in both color slots.
    pub fn new(letter: impl Into<String>, grid_mode: GridMode) -> Self {
        Self {
            letter: letter.into(),
            grid_mode,
            arrangement: PropArrangement::default(),
            arrows: ColorPair::from_fn(ArrowData::blank),
            props: ColorPair::from_fn(PropData::blank),
        }
    }

    /// Build the unplaced pictograph for a beat.
    ///
    /// The grid mode follows the blue start location and the arrangement
    /// follows the two end locations.
    pub fn from_beat(beat: &BeatData, prop_type: &str) -> Self {
        let grid_mode = beat.blue_motion.start_loc.grid_mode();
        let arrangement =
            PropArrangement::from_end_locations(beat.blue_motion.end_loc, beat.red_motion.end_loc);
        Self {
            letter: beat.letter.clone(),
            grid_mode,
            arrangement,
            arrows: ColorPair::from_fn(|c| ArrowData::blank(c).with_motion(*beat.motion(c))),
            props: ColorPair::from_fn(|c| PropData::blank(c).with_prop_type(prop_type)),
        }
    }

    pub fn with_arrow(mut self, arrow: ArrowData) -> Self {
        let color = arrow.color;
        *self.arrows.get_mut(color) = arrow;
        self
    }

    pub fn with_prop(mut self, prop: PropData) -> Self {
        let color = prop.color;
        *self.props.get_mut(color) = prop;
        self
    }

    pub fn with_arrangement(self, arrangement: PropArrangement) -> Self {
        Self {
            arrangement,
            ..self
        }
    }

    /// Recover the beat behind this pictograph; `None` when either arrow has no motion.
    pub fn to_beat(&self) -> Option<BeatData> {
        Some(BeatData {
            letter: self.letter.clone(),
            blue_motion: self.arrows.blue.motion?,
            red_motion: self.arrows.red.motion?,
        })
    }
}

/// Source input: a letter and the two motions that realize it.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BeatData {
    pub letter: String,
    pub blue_motion: MotionData,
    pub red_motion: MotionData,
}

impl BeatData {
    pub fn new(letter: impl Into<String>, blue_motion: MotionData, red_motion: MotionData) -> Self {
        Self {
            letter: letter.into(),
            blue_motion,
            red_motion,
        }
    }

    pub fn motion(&self, color: Color) -> &MotionData {
        match color {
            Color::Blue => &self.blue_motion,
            Color::Red => &self.red_motion,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/pictograph.rs"]
mod tests;
