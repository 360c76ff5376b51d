//! Seeds with hand-made artwork: a fixed configuration and a fixed starting
//! pattern instead of sampled traits and random cells.

use crate::config::{PALETTES, Palette, SIZES, SPEEDS, ShapeKind, SizeTrait, SpeedTrait};
use crate::grid::Loc;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum NamedPreset {
    #[serde(rename = "Pulsing Eye")]
    PulsingEye,
    Octagon,
    Flower,
    Mahjong,
}

impl NamedPreset {
    pub const ALL: [NamedPreset; 4] = [
        NamedPreset::PulsingEye,
        NamedPreset::Octagon,
        NamedPreset::Flower,
        NamedPreset::Mahjong,
    ];

    /// Exact, case-sensitive match against a seed whose dashes have already
    /// been replaced by spaces.
    pub fn lookup(seed: &str) -> Option<Self> {
        PRESETS
            .iter()
            .find(|definition| definition.seed == seed)
            .map(|definition| definition.preset)
    }

    pub fn definition(&self) -> &'static PresetDefinition {
        PRESETS
            .iter()
            .find(|definition| definition.preset == *self)
            .unwrap_or_else(|| panic!("no definition for {self:?}"))
    }

    pub fn seed(&self) -> &'static str {
        self.definition().seed
    }

    pub fn pattern(&self) -> Pattern {
        self.definition().pattern
    }
}

#[derive(Debug)]
pub struct PresetDefinition {
    pub preset: NamedPreset,
    pub seed: &'static str,
    pub size: &'static SizeTrait,
    pub palette: &'static Palette,
    pub speed: &'static SpeedTrait,
    pub shadow_enabled: bool,
    pub shape_kind: ShapeKind,
    pub pattern: Pattern,
}

pub static PRESETS: [PresetDefinition; 4] = [
    PresetDefinition {
        preset: NamedPreset::PulsingEye,
        seed: "Pulsing Eye",
        size: &SIZES[1],
        palette: &PALETTES[0],
        speed: &SPEEDS[1],
        shadow_enabled: false,
        shape_kind: ShapeKind::Square,
        pattern: Pattern::new(PULSING_EYE),
    },
    PresetDefinition {
        preset: NamedPreset::Octagon,
        seed: "Octagon",
        size: &SIZES[3],
        palette: &PALETTES[1],
        speed: &SPEEDS[0],
        shadow_enabled: true,
        shape_kind: ShapeKind::Circle,
        pattern: Pattern::new(OCTAGON),
    },
    PresetDefinition {
        preset: NamedPreset::Flower,
        seed: "Flower",
        size: &SIZES[2],
        palette: &PALETTES[0],
        speed: &SPEEDS[0],
        shadow_enabled: true,
        shape_kind: ShapeKind::OverlappingCircles,
        pattern: Pattern::new(FLOWER),
    },
    PresetDefinition {
        preset: NamedPreset::Mahjong,
        seed: "Mahjong",
        size: &SIZES[1],
        palette: &PALETTES[2],
        speed: &SPEEDS[2],
        shadow_enabled: false,
        shape_kind: ShapeKind::Square,
        pattern: Pattern::new(MAHJONG),
    },
];

/// A rectangular table of 0/1 cell states, indexed `[row][col]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pattern {
    rows: &'static [&'static [u8]],
}

impl Pattern {
    const fn new(rows: &'static [&'static [u8]]) -> Self {
        Self { rows }
    }

    pub fn num_rows(&self) -> u32 {
        self.rows.len() as u32
    }

    pub fn num_columns(&self) -> u32 {
        self.rows.first().map_or(0, |row| row.len() as u32)
    }

    pub fn is_alive(&self, loc: Loc) -> bool {
        self.rows
            .get(loc.row as usize)
            .and_then(|row| row.get(loc.col as usize))
            .is_some_and(|value| *value > 0)
    }

    pub fn alive_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|value| **value > 0).count())
            .sum()
    }

    pub fn is_rectangular(&self) -> bool {
        let width = self.num_columns() as usize;
        self.rows.iter().all(|row| row.len() == width)
    }
}

const PULSING_EYE: &[&[u8]] = &[
    &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0],
    &[0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0],
    &[0, 1, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 1, 0],
    &[0, 1, 1, 0, 1, 0, 1, 0, 0, 1, 1, 0, 0, 1, 0, 1, 0, 1, 1, 0],
    &[0, 0, 0, 0, 1, 0, 1, 0, 1, 0, 0, 1, 0, 1, 0, 1, 0, 0, 0, 0],
    &[0, 0, 0, 0, 1, 0, 1, 0, 1, 0, 0, 1, 0, 1, 0, 1, 0, 0, 0, 0],
    &[0, 1, 1, 0, 1, 0, 1, 0, 0, 1, 1, 0, 0, 1, 0, 1, 0, 1, 1, 0],
    &[0, 1, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 1, 0],
    &[0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0],
    &[0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0],
    &[0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
];

const OCTAGON: &[&[u8]] = &[
    &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 1, 1, 0, 0, 0, 0],
    &[0, 0, 0, 1, 0, 0, 1, 0, 0, 0],
    &[0, 0, 1, 0, 0, 0, 0, 1, 0, 0],
    &[0, 1, 0, 0, 0, 0, 0, 0, 1, 0],
    &[0, 1, 0, 0, 0, 0, 0, 0, 1, 0],
    &[0, 0, 1, 0, 0, 0, 0, 1, 0, 0],
    &[0, 0, 0, 1, 0, 0, 1, 0, 0, 0],
    &[0, 0, 0, 0, 1, 1, 0, 0, 0, 0],
    &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
];

const FLOWER: &[&[u8]] = &[
    &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0],
    &[0, 0, 0, 1, 1, 0, 1, 0, 0, 1, 0, 1, 1, 0, 0, 0],
    &[0, 0, 1, 0, 0, 1, 0, 1, 1, 0, 1, 0, 0, 1, 0, 0],
    &[0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 1, 0, 0],
    &[0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0],
    &[0, 1, 1, 0, 1, 0, 0, 1, 1, 0, 0, 1, 0, 1, 1, 0],
    &[1, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 0, 1],
    &[0, 1, 1, 0, 1, 0, 0, 1, 1, 0, 0, 1, 0, 1, 1, 0],
    &[0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0],
    &[0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 1, 0, 0],
    &[0, 0, 1, 0, 0, 1, 0, 1, 1, 0, 1, 0, 0, 1, 0, 0],
    &[0, 0, 0, 1, 1, 0, 1, 0, 0, 1, 0, 1, 1, 0, 0, 0],
    &[0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0],
];

const MAHJONG: &[&[u8]] = &[
    &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    &[0, 1, 1, 1, 1, 0, 1, 1, 1, 1, 0, 1, 1, 1, 1, 0, 1, 1, 1, 0],
    &[0, 1, 0, 0, 1, 0, 1, 0, 0, 1, 0, 1, 0, 0, 1, 0, 1, 0, 1, 0],
    &[0, 1, 0, 1, 1, 0, 1, 0, 0, 1, 0, 1, 1, 0, 1, 0, 1, 0, 1, 0],
    &[0, 1, 0, 0, 1, 0, 1, 0, 0, 1, 0, 1, 0, 0, 1, 0, 1, 0, 1, 0],
    &[0, 1, 1, 1, 1, 0, 1, 1, 1, 1, 0, 1, 1, 1, 1, 0, 1, 1, 1, 0],
    &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    &[0, 1, 1, 1, 1, 0, 1, 1, 1, 1, 0, 1, 1, 1, 1, 0, 1, 1, 1, 0],
    &[0, 1, 0, 0, 1, 0, 1, 0, 1, 1, 0, 1, 0, 0, 1, 0, 1, 0, 1, 0],
    &[0, 1, 0, 1, 1, 0, 1, 0, 0, 1, 0, 1, 1, 0, 1, 0, 1, 0, 1, 0],
    &[0, 1, 0, 0, 1, 0, 1, 0, 0, 1, 0, 1, 0, 0, 1, 0, 1, 0, 1, 0],
    &[0, 1, 1, 1, 1, 0, 1, 1, 1, 1, 0, 1, 1, 1, 1, 0, 1, 1, 1, 0],
    &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    &[0, 1, 1, 1, 1, 0, 1, 1, 1, 1, 0, 1, 1, 1, 1, 0, 1, 1, 1, 0],
    &[0, 1, 0, 0, 1, 0, 1, 0, 0, 1, 0, 1, 0, 0, 1, 0, 1, 0, 1, 0],
    &[0, 1, 1, 0, 1, 0, 1, 1, 0, 1, 0, 1, 0, 1, 1, 0, 1, 0, 1, 0],
    &[0, 1, 0, 0, 1, 0, 1, 0, 0, 1, 0, 1, 0, 0, 1, 0, 1, 0, 1, 0],
    &[0, 1, 1, 1, 1, 0, 1, 1, 1, 1, 0, 1, 1, 1, 1, 0, 1, 1, 1, 0],
    &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
];
