#![deny(clippy::all)]
#![forbid(unsafe_code)]

//! Seed-driven Game of Life artwork. A text seed is hashed into a random
//! stream; one draw from it picks the look of the piece (cell size, palette,
//! speed, shadow, shape) and keys the random state of every cell. Named
//! presets replace both with hand-made patterns.

pub mod color;
pub mod config;
pub mod distribution;
pub mod grid;
pub mod presets;
pub mod prng;
pub mod render;
pub mod seed;
pub mod session;

pub use color::Color;
pub use config::{CANVAS_SIZE, Configuration, ShapeKind, TraitResolver};
pub use distribution::WeightedDistribution;
pub use grid::{Cell, Grid, Loc};
pub use presets::{NamedPreset, Pattern};
pub use prng::{Mulberry32, Xmur3, hash_seed};
pub use render::{CellDraw, Shadow, Surface, render_frame};
pub use seed::Seed;
pub use session::{Session, World};
