use crate::config::{Configuration, TraitResolver};
use crate::grid::Grid;
use crate::render::{Surface, render_frame};
use crate::seed::Seed;
use log::info;
use std::time::Duration;

/// What a frame loop drives: a fixed-size picture that steps on a timer.
pub trait World {
    fn canvas_size(&self) -> (u32, u32);
    fn step_delay(&self) -> Duration;
    fn update(&mut self);
    fn render(&self, surface: &mut impl Surface);
}

/// One generated artifact: its resolved configuration and the grid that
/// configuration seeded.
#[derive(Clone, Debug)]
pub struct Session {
    config: Configuration,
    grid: Grid,
}

impl Session {
    pub fn new(seed: &Seed) -> Self {
        Self::with_resolver(seed, &TraitResolver::new())
    }

    pub fn with_resolver(seed: &Seed, resolver: &TraitResolver) -> Self {
        let config = resolver.resolve(seed);
        let grid = Grid::seeded(&config);
        info!(
            "seed {:?}: {}x{} cells of {} px, {} alive, palette {}, {} ms per step",
            config.seed(),
            config.num_columns(),
            config.num_rows(),
            config.cell_size(),
            grid.alive_count(),
            config.palette_name(),
            config.step_delay().as_millis()
        );
        Self { config, grid }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// One scheduled frame: advance, then report every cell.
    pub fn frame(&mut self, surface: &mut impl Surface) {
        self.update();
        self.render(surface);
    }
}

impl World for Session {
    fn canvas_size(&self) -> (u32, u32) {
        self.config.canvas_size()
    }

    fn step_delay(&self) -> Duration {
        self.config.step_delay()
    }

    fn update(&mut self) {
        self.grid.advance();
    }

    fn render(&self, surface: &mut impl Surface) {
        render_frame(&self.grid, &self.config, surface);
    }
}
