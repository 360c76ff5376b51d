use crate::color::Color;
use crate::config::Configuration;
use crate::presets::Pattern;
use crate::prng::{Mulberry32, js_number_string};
use log::trace;
use std::mem;
use std::ops::{Index, IndexMut};

/// Conway's Game of Life on a bounded grid. Positions off the edge count as
/// dead; nothing wraps around.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: GridCells,
    next_cells: GridCells,
    generation: u64,
}

impl Grid {
    /// An all-dead grid whose cells carry the default color.
    pub fn new(num_columns: u32, num_rows: u32) -> Self {
        Self::from_cells(GridCells::new(num_columns, num_rows))
    }

    /// Builds the grid for a session: preset patterns come from their table,
    /// every other seed gets per-cell random life.
    pub fn seeded(config: &Configuration) -> Self {
        let pattern = config.preset().map(|preset| preset.pattern());
        let random_float = js_number_string(config.random_float());
        let alive_colors = config.alive_colors();

        let mut cells = GridCells::new(config.num_columns(), config.num_rows());
        for row in 0..config.num_rows() {
            for col in 0..config.num_columns() {
                let loc = Loc::new(row, col);
                cells[loc] = Cell::seeded(&random_float, loc, alive_colors, pattern.as_ref());
            }
        }
        Self::from_cells(cells)
    }

    /// Builds a grid from row-major alive states, mostly for tests.
    pub fn from_states(num_columns: u32, num_rows: u32, states: &[bool]) -> Self {
        let mut cells = GridCells::new(num_columns, num_rows);
        assert_eq!(states.len(), cells.num_cells());
        cells
            .cells
            .iter_mut()
            .zip(states)
            .for_each(|(cell, alive)| cell.alive = *alive);
        Self::from_cells(cells)
    }

    fn from_cells(cells: GridCells) -> Self {
        Self {
            next_cells: cells.clone(),
            cells,
            generation: 0,
        }
    }

    pub fn num_columns(&self) -> u32 {
        self.cells.num_columns
    }

    pub fn num_rows(&self) -> u32 {
        self.cells.num_rows
    }

    pub fn num_cells(&self) -> usize {
        self.cells.num_cells()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn cell(&self, loc: Loc) -> Option<&Cell> {
        self.cells.cell(loc)
    }

    /// Cells in row-major order with their positions.
    pub fn cells_iter(&self) -> impl DoubleEndedIterator<Item = (Loc, &Cell)> + Clone {
        let num_columns = self.num_columns();
        self.cells
            .cells
            .iter()
            .enumerate()
            .map(move |(index, cell)| (Loc::from_index(index, num_columns), cell))
    }

    pub fn alive_states(&self) -> Vec<bool> {
        self.cells.cells.iter().map(|cell| cell.alive).collect()
    }

    pub fn alive_count(&self) -> usize {
        self.cells.cells.iter().filter(|cell| cell.alive).count()
    }

    /// One synchronous generation. Every next state is computed from the
    /// current buffer before any cell changes, then the buffers swap.
    pub fn advance(&mut self) {
        let current = &self.cells;
        let num_columns = current.num_columns;
        for (index, next_cell) in self.next_cells.cells.iter_mut().enumerate() {
            let loc = Loc::from_index(index, num_columns);
            let cell = &current[loc];
            *next_cell = *cell;
            next_cell.alive = cell.next_alive(&Neighborhood::new(current, loc));
        }
        mem::swap(&mut self.next_cells, &mut self.cells);
        self.generation += 1;
        trace!("generation {}: {} alive", self.generation, self.alive_count());
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub alive: bool,
    pub alive_color: Color,
}

impl Cell {
    /// The cell's random stream is keyed by the root float followed by the row
    /// and column, all as decimal text. Its second draw sets both the alive
    /// state and the color.
    fn seeded(random_float: &str, loc: Loc, alive_colors: &[Color], pattern: Option<&Pattern>) -> Self {
        let mut stream = Mulberry32::from_seed_str(&format!("{random_float}{}{}", loc.row, loc.col));
        stream.next_f64();
        let draw = stream.next_f64();

        let color_index = (draw * alive_colors.len() as f64) as usize;
        Self {
            alive: pattern.map_or(draw > 0.5, |pattern| pattern.is_alive(loc)),
            alive_color: alive_colors[color_index.min(alive_colors.len() - 1)],
        }
    }

    pub fn color(&self, dead_color: Color) -> Color {
        if self.alive { self.alive_color } else { dead_color }
    }

    fn next_alive(&self, neighborhood: &Neighborhood) -> bool {
        match neighborhood.num_alive() {
            2 => self.alive,
            3 => true,
            _ => false,
        }
    }
}

#[derive(Clone, Debug)]
struct GridCells {
    cells: Vec<Cell>,
    num_columns: u32,
    num_rows: u32,
}

impl GridCells {
    fn new(num_columns: u32, num_rows: u32) -> Self {
        assert!(num_columns != 0 && num_rows != 0);
        Self {
            cells: vec![Cell::default(); num_columns as usize * num_rows as usize],
            num_columns,
            num_rows,
        }
    }

    fn num_cells(&self) -> usize {
        self.cells.len()
    }

    fn cell(&self, loc: Loc) -> Option<&Cell> {
        loc.grid_index(self.num_columns, self.num_rows)
            .map(|index| &self.cells[index])
    }

    fn cell_mut(&mut self, loc: Loc) -> Option<&mut Cell> {
        loc.grid_index(self.num_columns, self.num_rows)
            .map(|index| &mut self.cells[index])
    }

    fn is_alive(&self, loc: Loc) -> bool {
        self.cell(loc).is_some_and(|cell| cell.alive)
    }
}

impl Index<Loc> for GridCells {
    type Output = Cell;

    fn index(&self, loc: Loc) -> &Self::Output {
        self.cell(loc)
            .unwrap_or_else(|| panic!("Index indices {}, {} out of bounds", loc.row, loc.col))
    }
}

impl IndexMut<Loc> for GridCells {
    fn index_mut(&mut self, loc: Loc) -> &mut Self::Output {
        self.cell_mut(loc)
            .unwrap_or_else(|| panic!("Index_mut indices {}, {} out of bounds", loc.row, loc.col))
    }
}

/// The Moore neighborhood of one cell.
struct Neighborhood<'a> {
    cells: &'a GridCells,
    center: Loc,
}

impl<'a> Neighborhood<'a> {
    const OFFSETS: [(i64, i64); 8] = [
        (-1, -1),
        (-1, 0),
        (-1, 1),
        (0, -1),
        (0, 1),
        (1, -1),
        (1, 0),
        (1, 1),
    ];

    fn new(cells: &'a GridCells, center: Loc) -> Self {
        Self { cells, center }
    }

    fn num_alive(&self) -> usize {
        Self::OFFSETS
            .iter()
            .filter_map(|(row_offset, col_offset)| self.center.offset(*row_offset, *col_offset))
            .filter(|loc| self.cells.is_alive(*loc))
            .count()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Loc {
    pub row: u32,
    pub col: u32,
}

impl Loc {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    fn from_index(index: usize, num_columns: u32) -> Self {
        let num_columns = num_columns as usize;
        Self::new((index / num_columns) as u32, (index % num_columns) as u32)
    }

    pub fn grid_index(&self, num_columns: u32, num_rows: u32) -> Option<usize> {
        if self.row < num_rows && self.col < num_columns {
            Some(self.row as usize * num_columns as usize + self.col as usize)
        } else {
            None
        }
    }

    /// `None` above or left of the grid; positions past the far edges are
    /// rejected by [`Loc::grid_index`].
    fn offset(&self, row_offset: i64, col_offset: i64) -> Option<Loc> {
        let row = u32::try_from(i64::from(self.row) + row_offset).ok()?;
        let col = u32::try_from(i64::from(self.col) + col_offset).ok()?;
        Some(Loc::new(row, col))
    }
}
