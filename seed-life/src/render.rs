use crate::color::Color;
use crate::config::{Configuration, ShapeKind};
use crate::grid::{Cell, Grid, Loc};

/// What the host has to provide to show a frame. The core only reports cells;
/// how they become pixels is up to the surface.
pub trait Surface {
    /// Width and height in pixels.
    fn size(&self) -> (u32, u32);

    fn clear(&mut self, color: Color);

    fn draw_cell(&mut self, cell: &CellDraw);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellDraw {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub alive: bool,
    pub shape: ShapeKind,
    pub fill: Color,
    pub stroke: Color,
    pub shadow: Option<Shadow>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shadow {
    pub color: Color,
    pub blur_radius: u32,
}

/// Reports one full frame: a clear to the dead color, every dead cell, then
/// every alive cell. Live shapes go last so overlapping circles are never
/// painted over by a dead neighbor.
pub fn render_frame(grid: &Grid, config: &Configuration, surface: &mut impl Surface) {
    debug_assert_eq!(surface.size(), config.canvas_size());
    surface.clear(config.dead_color());

    let (alive, dead): (Vec<_>, Vec<_>) = grid.cells_iter().partition(|(_, cell)| cell.alive);
    for (loc, cell) in dead.into_iter().chain(alive) {
        surface.draw_cell(&cell_draw(loc, cell, config));
    }
}

fn cell_draw(loc: Loc, cell: &Cell, config: &Configuration) -> CellDraw {
    let size = config.cell_size();
    let shape = config.shape_kind();
    let fill = cell.color(config.dead_color());
    let stroke = match shape {
        ShapeKind::Square => fill,
        ShapeKind::Circle | ShapeKind::OverlappingCircles => config.dead_color(),
    };
    let shadow = (cell.alive && config.shadow_enabled()).then(|| Shadow {
        color: cell.alive_color,
        blur_radius: (size / 4).max(1),
    });

    CellDraw {
        x: loc.col * size,
        y: loc.row * size,
        width: size,
        height: size,
        alive: cell.alive,
        shape,
        fill,
        stroke,
        shadow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TraitResolver;
    use crate::seed::Seed;

    #[derive(Default)]
    struct RecordingSurface {
        clears: Vec<Color>,
        draws: Vec<CellDraw>,
    }

    impl Surface for RecordingSurface {
        fn size(&self) -> (u32, u32) {
            (400, 400)
        }

        fn clear(&mut self, color: Color) {
            self.clears.push(color);
        }

        fn draw_cell(&mut self, cell: &CellDraw) {
            self.draws.push(*cell);
        }
    }

    fn record(seed: &str) -> (Configuration, Grid, RecordingSurface) {
        let config = TraitResolver::new().resolve(&Seed::new(seed));
        let grid = Grid::seeded(&config);
        let mut surface = RecordingSurface::default();
        render_frame(&grid, &config, &mut surface);
        (config, grid, surface)
    }

    #[test]
    fn reports_every_cell_once() {
        let (config, grid, surface) = record("1");
        assert_eq!(surface.clears, vec![config.dead_color()]);
        assert_eq!(surface.draws.len(), grid.num_cells());

        let mut positions: Vec<(u32, u32)> = surface.draws.iter().map(|draw| (draw.x, draw.y)).collect();
        positions.sort();
        positions.dedup();
        assert_eq!(positions.len(), grid.num_cells());
    }

    #[test]
    fn dead_cells_come_first() {
        let (_, grid, surface) = record("1");
        let num_dead = grid.num_cells() - grid.alive_count();
        assert!(surface.draws[..num_dead].iter().all(|draw| !draw.alive));
        assert!(surface.draws[num_dead..].iter().all(|draw| draw.alive));
    }

    #[test]
    fn square_cells_use_their_colors() {
        let (config, grid, surface) = record("1");
        let origin = grid.cell(Loc::new(0, 0)).unwrap();
        let draw = surface
            .draws
            .iter()
            .find(|draw| draw.x == 0 && draw.y == 0)
            .unwrap();
        assert_eq!(draw.width, 10);
        assert_eq!(draw.shape, ShapeKind::Square);
        assert_eq!(draw.fill, origin.alive_color);
        assert_eq!(draw.stroke, draw.fill);
        assert_eq!(draw.shadow, None);

        let dead = surface.draws.iter().find(|draw| !draw.alive).unwrap();
        assert_eq!(dead.fill, config.dead_color());
    }

    #[test]
    fn shadows_only_for_live_cells() {
        let (config, _, surface) = record("hello world");
        assert!(config.shadow_enabled());
        for draw in &surface.draws {
            assert_eq!(draw.shape, ShapeKind::OverlappingCircles);
            assert_eq!(draw.stroke, config.dead_color());
            match draw.shadow {
                Some(shadow) => {
                    assert!(draw.alive);
                    assert_eq!(shadow.color, draw.fill);
                    assert_eq!(shadow.blur_radius, 10);
                }
                None => assert!(!draw.alive),
            }
        }
    }

    #[test]
    fn positions_follow_cell_size() {
        let (_, _, surface) = record("Octagon");
        assert!(surface.draws.iter().all(|draw| draw.x % 40 == 0 && draw.y % 40 == 0));
        assert!(surface.draws.iter().all(|draw| draw.x + draw.width <= 400));
    }
}
