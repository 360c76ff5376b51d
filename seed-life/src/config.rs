use crate::color::Color;
use crate::distribution::WeightedDistribution;
use crate::presets::{NamedPreset, PresetDefinition};
use crate::prng::Mulberry32;
use crate::seed::Seed;
use log::debug;
use serde::Serialize;
use std::time::Duration;

/// Width and height of the drawing surface, in pixels.
pub const CANVAS_SIZE: u32 = 400;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SizeTrait {
    pub name: &'static str,
    pub cell_size: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub name: &'static str,
    pub alive_colors: &'static [Color],
    pub dead_color: Color,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SpeedTrait {
    pub name: &'static str,
    pub step_delay_ms: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ShapeKind {
    Circle,
    OverlappingCircles,
    Square,
}

pub static SIZES: [SizeTrait; 4] = [
    SizeTrait { name: "sm", cell_size: 10 },
    SizeTrait { name: "md", cell_size: 20 },
    SizeTrait { name: "lg", cell_size: 25 },
    SizeTrait { name: "xl", cell_size: 40 },
];
const SIZE_WEIGHTS: [f64; 4] = [0.5, 0.25, 0.125, 0.125];
const SIZE_RESOLUTION: u32 = 10;

pub static PALETTES: [Palette; 4] = [
    Palette {
        name: "Flashy",
        alive_colors: &[
            Color::hex("#01f5d4"),
            Color::hex("#f15bb5"),
            Color::hex("#00bbf9"),
            Color::hex("#fee440"),
        ],
        dead_color: Color::hex("#9b5de5"),
    },
    Palette {
        name: "Bubble Gum",
        alive_colors: &[
            Color::hex("#ffb400"),
            Color::hex("#f6511d"),
            Color::hex("#00a6ed"),
            Color::hex("#0d2c53"),
        ],
        dead_color: Color::hex("#dc77d2"),
    },
    Palette {
        name: "Black & White",
        alive_colors: &[Color::hex("#111")],
        dead_color: Color::hex("#FEFEFE"),
    },
    Palette {
        name: "Greytones",
        alive_colors: &[
            Color::hex("#111"),
            Color::hex("#222"),
            Color::hex("#444"),
            Color::hex("#666"),
            Color::hex("#888"),
            Color::hex("#aaa"),
            Color::hex("#ccc"),
            Color::hex("#eee"),
        ],
        dead_color: Color::hex("#FEFEFE"),
    },
];
const PALETTE_WEIGHTS: [f64; 4] = [0.25, 0.25, 0.25, 0.25];
const PALETTE_RESOLUTION: u32 = 10;

pub static SPEEDS: [SpeedTrait; 3] = [
    SpeedTrait { name: "slow", step_delay_ms: 100 },
    SpeedTrait { name: "medium", step_delay_ms: 75 },
    SpeedTrait { name: "fast", step_delay_ms: 50 },
];
const SPEED_WEIGHTS: [f64; 3] = [0.333, 0.333, 0.333];
const SPEED_RESOLUTION: u32 = 10;

const SHADOWS: [bool; 2] = [false, true];
const SHADOW_WEIGHTS: [f64; 2] = [0.75, 0.25];
const SHADOW_RESOLUTION: u32 = 10;

const SHAPES: [ShapeKind; 3] = [ShapeKind::Square, ShapeKind::Circle, ShapeKind::OverlappingCircles];
const SHAPE_WEIGHTS: [f64; 3] = [0.5, 0.35, 0.15];
const SHAPE_RESOLUTION: u32 = 14;

/// Everything one session needs to know about its artifact, resolved once from
/// the seed and never changed afterwards.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    seed: String,
    random_float: f64,
    canvas_size: u32,
    size_name: &'static str,
    cell_size: u32,
    num_columns: u32,
    num_rows: u32,
    palette_name: &'static str,
    alive_colors: &'static [Color],
    dead_color: Color,
    speed_name: &'static str,
    step_delay_ms: u64,
    shadow_enabled: bool,
    shape_kind: ShapeKind,
    preset: Option<NamedPreset>,
}

impl Configuration {
    #[allow(clippy::too_many_arguments)]
    fn new(
        seed: &Seed,
        random_float: f64,
        size: &'static SizeTrait,
        palette: &'static Palette,
        speed: &'static SpeedTrait,
        shadow_enabled: bool,
        shape_kind: ShapeKind,
        preset: Option<NamedPreset>,
    ) -> Self {
        assert!(
            CANVAS_SIZE % size.cell_size == 0,
            "cell size {} does not divide canvas size {CANVAS_SIZE}",
            size.cell_size
        );
        assert!(!palette.alive_colors.is_empty());

        let cells_per_side = CANVAS_SIZE / size.cell_size;
        Self {
            seed: seed.as_str().to_string(),
            random_float,
            canvas_size: CANVAS_SIZE,
            size_name: size.name,
            cell_size: size.cell_size,
            num_columns: cells_per_side,
            num_rows: cells_per_side,
            palette_name: palette.name,
            alive_colors: palette.alive_colors,
            dead_color: palette.dead_color,
            speed_name: speed.name,
            step_delay_ms: speed.step_delay_ms,
            shadow_enabled,
            shape_kind,
            preset,
        }
    }

    fn from_preset(seed: &Seed, random_float: f64, definition: &'static PresetDefinition) -> Self {
        Self::new(
            seed,
            random_float,
            definition.size,
            definition.palette,
            definition.speed,
            definition.shadow_enabled,
            definition.shape_kind,
            Some(definition.preset),
        )
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// The root draw every trait and every cell is derived from.
    pub fn random_float(&self) -> f64 {
        self.random_float
    }

    pub fn canvas_size(&self) -> (u32, u32) {
        (self.canvas_size, self.canvas_size)
    }

    pub fn size_name(&self) -> &'static str {
        self.size_name
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn num_columns(&self) -> u32 {
        self.num_columns
    }

    pub fn num_rows(&self) -> u32 {
        self.num_rows
    }

    pub fn palette_name(&self) -> &'static str {
        self.palette_name
    }

    pub fn alive_colors(&self) -> &'static [Color] {
        self.alive_colors
    }

    pub fn dead_color(&self) -> Color {
        self.dead_color
    }

    pub fn speed_name(&self) -> &'static str {
        self.speed_name
    }

    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }

    pub fn shadow_enabled(&self) -> bool {
        self.shadow_enabled
    }

    pub fn shape_kind(&self) -> ShapeKind {
        self.shape_kind
    }

    pub fn preset(&self) -> Option<NamedPreset> {
        self.preset
    }
}

/// Turns a seed into a [`Configuration`].
///
/// All five categories are selected with the same root float, one draw from
/// the seed's stream. The traits are therefore correlated (a low draw picks the
/// first option of every table) and changing that would change every
/// historical artifact.
#[derive(Clone, Debug)]
pub struct TraitResolver {
    sizes: WeightedDistribution<&'static SizeTrait>,
    palettes: WeightedDistribution<&'static Palette>,
    speeds: WeightedDistribution<&'static SpeedTrait>,
    shadows: WeightedDistribution<bool>,
    shapes: WeightedDistribution<ShapeKind>,
}

impl TraitResolver {
    pub fn new() -> Self {
        Self {
            sizes: WeightedDistribution::new(SIZES.iter().zip(SIZE_WEIGHTS), SIZE_RESOLUTION),
            palettes: WeightedDistribution::new(PALETTES.iter().zip(PALETTE_WEIGHTS), PALETTE_RESOLUTION),
            speeds: WeightedDistribution::new(SPEEDS.iter().zip(SPEED_WEIGHTS), SPEED_RESOLUTION),
            shadows: WeightedDistribution::new(SHADOWS.into_iter().zip(SHADOW_WEIGHTS), SHADOW_RESOLUTION),
            shapes: WeightedDistribution::new(SHAPES.into_iter().zip(SHAPE_WEIGHTS), SHAPE_RESOLUTION),
        }
    }

    pub fn resolve(&self, seed: &Seed) -> Configuration {
        let random_float = Mulberry32::from_seed_str(seed.as_str()).next_f64();

        let config = match NamedPreset::lookup(seed.as_str()) {
            Some(preset) => Configuration::from_preset(seed, random_float, preset.definition()),
            None => self.sample(seed, random_float),
        };
        debug!(
            "seed {:?} -> {random_float}: size {}, palette {}, speed {}, shadow {}, shape {:?}, preset {:?}",
            config.seed,
            config.size_name,
            config.palette_name,
            config.speed_name,
            config.shadow_enabled,
            config.shape_kind,
            config.preset
        );
        config
    }

    fn sample(&self, seed: &Seed, random_float: f64) -> Configuration {
        Configuration::new(
            seed,
            random_float,
            self.sizes.select(random_float),
            self.palettes.select(random_float),
            self.speeds.select(random_float),
            *self.shadows.select(random_float),
            *self.shapes.select(random_float),
            None,
        )
    }
}

impl Default for TraitResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(seed: &str) -> Configuration {
        TraitResolver::new().resolve(&Seed::new(seed))
    }

    #[test]
    fn every_size_divides_canvas() {
        for size in &SIZES {
            assert_eq!(CANVAS_SIZE % size.cell_size, 0, "{}", size.name);
        }
    }

    #[test]
    fn low_draw_picks_first_of_every_table() {
        let config = resolve("1");
        assert_eq!(config.random_float(), 0.11042225826531649);
        assert_eq!(config.size_name(), "sm");
        assert_eq!(config.cell_size(), 10);
        assert_eq!(config.num_columns(), 40);
        assert_eq!(config.num_rows(), 40);
        assert_eq!(config.palette_name(), "Flashy");
        assert_eq!(config.alive_colors().len(), 4);
        assert_eq!(config.dead_color(), Color::hex("#9b5de5"));
        assert_eq!(config.speed_name(), "slow");
        assert_eq!(config.step_delay(), Duration::from_millis(100));
        assert!(!config.shadow_enabled());
        assert_eq!(config.shape_kind(), ShapeKind::Square);
        assert_eq!(config.preset(), None);
    }

    #[test]
    fn high_draw_picks_last_of_every_table() {
        let config = resolve("hello world");
        assert_eq!(config.random_float(), 0.8877911637537181);
        assert_eq!(config.size_name(), "xl");
        assert_eq!(config.num_columns(), 10);
        assert_eq!(config.palette_name(), "Greytones");
        assert_eq!(config.alive_colors().len(), 8);
        assert_eq!(config.speed_name(), "fast");
        assert_eq!(config.step_delay(), Duration::from_millis(50));
        assert!(config.shadow_enabled());
        assert_eq!(config.shape_kind(), ShapeKind::OverlappingCircles);
    }

    #[test]
    fn dashes_become_spaces_before_resolution() {
        assert_eq!(resolve("hello-world"), resolve("hello world"));
    }

    #[test]
    fn resolution_is_deterministic() {
        for seed in ["1", "2", "abc", "", "long seed with many words"] {
            assert_eq!(resolve(seed), resolve(seed));
        }
    }

    #[test]
    fn octagon_preset_overrides_sampling() {
        let config = resolve("Octagon");
        assert_eq!(config.preset(), Some(NamedPreset::Octagon));
        assert_eq!(config.shape_kind(), ShapeKind::Circle);
        assert_eq!(config.cell_size(), CANVAS_SIZE / 10);
        assert_eq!(config.num_columns(), 10);
        assert_eq!(config.random_float(), 0.6493716291151941);
    }

    #[test]
    fn preset_names_are_case_sensitive() {
        assert_eq!(resolve("octagon").preset(), None);
        assert_eq!(resolve("Octagon ").preset(), None);
        assert_eq!(resolve("Pulsing-Eye").preset(), Some(NamedPreset::PulsingEye));
    }

    #[test]
    fn serializes_resolved_setup() {
        let json = serde_json::to_value(resolve("1")).unwrap();
        assert_eq!(json["seed"], "1");
        assert_eq!(json["cellSize"], 10);
        assert_eq!(json["numColumns"], 40);
        assert_eq!(json["paletteName"], "Flashy");
        assert_eq!(json["deadColor"], "#9b5de5");
        assert_eq!(json["aliveColors"][0], "#01f5d4");
        assert_eq!(json["shapeKind"], "square");
        assert_eq!(json["preset"], serde_json::Value::Null);
    }

    #[test]
    fn serialized_seed_is_the_substituted_text() {
        let json = serde_json::to_value(resolve("Pulsing-Eye")).unwrap();
        assert_eq!(json["seed"], "Pulsing Eye");
        assert_eq!(json["preset"], "Pulsing Eye");
    }
}
