use std::{collections::HashSet, path::Path};

use anyhow::Context;

use crate::{
    foundation::config::DatasetConfig,
    foundation::error::{PictographError, PictographResult},
    model::{
        motion::MotionData,
        pictograph::BeatData,
        types::{GridMode, Location, MotionType, Orientation, RotationDirection, parse_tag},
    },
    validation::seed::{SEED_BOX_CSV, SEED_DIAMOND_CSV},
};

/// Columns every reference table must carry; order comes from the header.
pub const REQUIRED_COLUMNS: [&str; 13] = [
    "letter",
    "start_pos",
    "end_pos",
    "timing",
    "direction",
    "blue_motion_type",
    "blue_prop_rot_dir",
    "blue_start_loc",
    "blue_end_loc",
    "red_motion_type",
    "red_prop_rot_dir",
    "red_start_loc",
    "red_end_loc",
];

/// One legal pictograph from the reference tables, reshaped into motion data.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PictographRecord {
    pub letter: String,
    pub start_pos: String,
    pub end_pos: String,
    pub timing: String,
    pub direction: String,
    pub grid_mode: GridMode,
    pub blue_motion: MotionData,
    pub red_motion: MotionData,
}

impl PictographRecord {
    pub fn to_beat(&self) -> BeatData {
        BeatData::new(self.letter.clone(), self.blue_motion, self.red_motion)
    }

    fn combo_key(&self) -> ComboKey {
        ComboKey {
            letter: self.letter.clone(),
            start_pos: self.start_pos.clone(),
            end_pos: self.end_pos.clone(),
            blue_motion_type: self.blue_motion.motion_type.to_string(),
            red_motion_type: self.red_motion.motion_type.to_string(),
        }
    }
}

/// Exact-match membership key: the five fields that define legality.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct ComboKey {
    pub(crate) letter: String,
    pub(crate) start_pos: String,
    pub(crate) end_pos: String,
    pub(crate) blue_motion_type: String,
    pub(crate) red_motion_type: String,
}

/// Where a loaded dataset came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetOrigin {
    Files,
    Text,
    Rows,
    Seed,
}

/// Rows parsed from one table, plus how many were dropped.
///
/// Keys keep the raw field text so membership stays case-sensitive.
#[derive(Clone, Debug, Default)]
pub(crate) struct ParsedTable {
    pub(crate) records: Vec<PictographRecord>,
    pub(crate) keys: Vec<ComboKey>,
    pub(crate) skipped: usize,
}

/// Parsed-once reference dataset with O(1) membership tests.
#[derive(Clone, Debug)]
pub struct ValidationDataset {
    records: Vec<PictographRecord>,
    keys: HashSet<ComboKey>,
    origin: DatasetOrigin,
}

impl ValidationDataset {
    /// Build from already-shaped records.
    pub fn from_records(records: Vec<PictographRecord>) -> Self {
        let keys = records.iter().map(PictographRecord::combo_key).collect();
        Self {
            records,
            keys,
            origin: DatasetOrigin::Rows,
        }
    }

    /// Parse the diamond and box tables from CSV text and concatenate them.
    pub fn from_csv_tables(diamond: &str, box_: &str) -> PictographResult<Self> {
        let mut out = Self::empty(DatasetOrigin::Text);
        out.absorb(parse_table(diamond, GridMode::Diamond)?);
        out.absorb(parse_table(box_, GridMode::Box)?);
        Ok(out)
    }

    /// Embedded fallback rows.
    pub fn seed() -> Self {
        match Self::from_csv_tables(SEED_DIAMOND_CSV, SEED_BOX_CSV) {
            Ok(mut ds) => {
                ds.origin = DatasetOrigin::Seed;
                ds
            }
            Err(e) => {
                tracing::error!(error = %e, "embedded seed dataset failed to parse");
                Self::empty(DatasetOrigin::Seed)
            }
        }
    }

    /// Load the configured tables, falling back to the seed rows when nothing usable loads.
    ///
    /// A table that cannot be read is logged and skipped; the other still loads.
    #[tracing::instrument(skip(config))]
    pub fn load(config: &DatasetConfig) -> Self {
        if !config.is_configured() {
            tracing::warn!("no reference tables configured, falling back to embedded seed rows");
            return Self::seed();
        }

        let mut out = Self::empty(DatasetOrigin::Files);
        let tables = [
            (config.diamond_path.as_deref(), GridMode::Diamond),
            (config.box_path.as_deref(), GridMode::Box),
        ];
        for (path, grid_mode) in tables {
            let Some(path) = path else {
                continue;
            };
            match load_table(path, grid_mode) {
                Ok(table) => {
                    tracing::debug!(
                        path = %path.display(),
                        %grid_mode,
                        rows = table.records.len(),
                        skipped = table.skipped,
                        "loaded reference table"
                    );
                    out.absorb(table);
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), %grid_mode, error = %e, "reference table unavailable");
                }
            }
        }

        if out.is_empty() {
            tracing::warn!("no usable reference rows loaded, falling back to embedded seed rows");
            return Self::seed();
        }
        tracing::info!(rows = out.len(), "reference dataset loaded");
        out
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn origin(&self) -> DatasetOrigin {
        self.origin
    }

    pub fn records(&self) -> &[PictographRecord] {
        &self.records
    }

    pub(crate) fn contains_key(&self, key: &ComboKey) -> bool {
        self.keys.contains(key)
    }

    fn empty(origin: DatasetOrigin) -> Self {
        Self {
            records: Vec::new(),
            keys: HashSet::new(),
            origin,
        }
    }

    fn absorb(&mut self, table: ParsedTable) {
        self.keys.extend(table.keys);
        self.records.extend(table.records);
    }
}

fn load_table(path: &Path, grid_mode: GridMode) -> PictographResult<ParsedTable> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read dataset table from '{}'", path.display()))?;
    parse_table(&text, grid_mode)
}

/// Parse one CSV table. A broken header fails the table; a broken row is skipped.
pub(crate) fn parse_table(text: &str, grid_mode: GridMode) -> PictographResult<ParsedTable> {
    let mut lines = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty());

    let Some((_, header)) = lines.next() else {
        return Err(PictographError::dataset("table is empty"));
    };
    let columns = Columns::from_header(header)?;

    let mut out = ParsedTable::default();
    for (idx, line) in lines {
        let line_no = idx + 1;
        match parse_row(&columns, line, grid_mode) {
            Ok((record, key)) => {
                out.keys.push(key);
                out.records.push(record);
            }
            Err(e) => {
                tracing::debug!(line = line_no, error = %e, "skipping malformed dataset row");
                out.skipped += 1;
            }
        }
    }
    Ok(out)
}

/// Header-derived column indices.
struct Columns {
    required: [usize; 13],
    width: usize,
    optional: OptionalColumns,
}

#[derive(Default)]
struct OptionalColumns {
    blue_turns: Option<usize>,
    blue_start_ori: Option<usize>,
    blue_end_ori: Option<usize>,
    red_turns: Option<usize>,
    red_start_ori: Option<usize>,
    red_end_ori: Option<usize>,
}

impl Columns {
    fn from_header(header: &str) -> PictographResult<Self> {
        let names = split_fields(header);
        let find = |name: &str| names.iter().position(|n| n == name);

        let mut required = [0usize; 13];
        for (slot, name) in required.iter_mut().zip(REQUIRED_COLUMNS) {
            *slot = find(name).ok_or_else(|| {
                PictographError::dataset(format!("table header is missing column '{name}'"))
            })?;
        }

        Ok(Self {
            required,
            width: names.len(),
            optional: OptionalColumns {
                blue_turns: find("blue_turns"),
                blue_start_ori: find("blue_start_ori"),
                blue_end_ori: find("blue_end_ori"),
                red_turns: find("red_turns"),
                red_start_ori: find("red_start_ori"),
                red_end_ori: find("red_end_ori"),
            },
        })
    }
}

fn parse_row(
    columns: &Columns,
    line: &str,
    grid_mode: GridMode,
) -> PictographResult<(PictographRecord, ComboKey)> {
    let fields = split_fields(line);
    if fields.len() != columns.width {
        return Err(PictographError::dataset(format!(
            "expected {} fields, found {}",
            columns.width,
            fields.len()
        )));
    }
    let req = |i: usize| fields[columns.required[i]].as_str();
    let opt = |i: Option<usize>| i.map(|i| fields[i].as_str()).filter(|s| !s.is_empty());

    let letter = req(0);
    if letter.is_empty() {
        return Err(PictographError::dataset("empty letter"));
    }

    let blue_motion = parse_motion(
        [req(5), req(6), req(7), req(8)],
        [
            opt(columns.optional.blue_turns),
            opt(columns.optional.blue_start_ori),
            opt(columns.optional.blue_end_ori),
        ],
    )?;
    let red_motion = parse_motion(
        [req(9), req(10), req(11), req(12)],
        [
            opt(columns.optional.red_turns),
            opt(columns.optional.red_start_ori),
            opt(columns.optional.red_end_ori),
        ],
    )?;

    let record = PictographRecord {
        letter: letter.to_string(),
        start_pos: req(1).to_string(),
        end_pos: req(2).to_string(),
        timing: req(3).to_string(),
        direction: req(4).to_string(),
        grid_mode,
        blue_motion,
        red_motion,
    };
    let key = ComboKey {
        letter: record.letter.clone(),
        start_pos: record.start_pos.clone(),
        end_pos: record.end_pos.clone(),
        blue_motion_type: req(5).to_string(),
        red_motion_type: req(9).to_string(),
    };
    Ok((record, key))
}

fn parse_motion(
    [motion_type, rot_dir, start_loc, end_loc]: [&str; 4],
    [turns, start_ori, end_ori]: [Option<&str>; 3],
) -> PictographResult<MotionData> {
    let motion_type: MotionType = parse_tag("motion type", motion_type)?;
    let prop_rot_dir: RotationDirection = parse_tag("rotation direction", rot_dir)?;
    let start_loc: Location = parse_tag("location", start_loc)?;
    let end_loc: Location = parse_tag("location", end_loc)?;

    let mut motion = MotionData::new(motion_type, prop_rot_dir, start_loc, end_loc);
    if let Some(raw) = turns {
        let turns: f64 = raw
            .parse()
            .map_err(|_| PictographError::parse(format!("unknown turns '{raw}'")))?;
        motion = motion.with_turns(turns);
        motion.validate()?;
    }
    if let Some(raw) = start_ori {
        motion = motion.with_start_ori(parse_tag::<Orientation>("orientation", raw)?);
    }
    if let Some(raw) = end_ori {
        motion = motion.with_end_ori(parse_tag::<Orientation>("orientation", raw)?);
    }
    Ok(motion)
}

/// Split one CSV line, trimming fields and stripping surrounding double quotes.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' if quoted && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => quoted = !quoted,
            ',' if !quoted => fields.push(std::mem::take(&mut current).trim().to_string()),
            _ => current.push(c),
        }
    }
    fields.push(current.trim().to_string());
    fields
}

#[cfg(test)]
#[path = "../../tests/unit/validation/dataset.rs"]
mod tests;
