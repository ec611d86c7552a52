use super::Cell;
use rand::Rng;
use rayon::prelude::*;
use tracing::trace;

/// Grids with at least this many cells stage in parallel.
pub const PARALLEL_THRESHOLD: usize = 10_000;

/// Moore neighbourhood offsets as (row, column) deltas
#[rustfmt::skip]
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Grid is the automaton engine: a fixed-size board with hard edges.
/// Cells outside the board count as dead; nothing wraps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![Cell::dead(); rows * columns],
        }
    }

    /// Get grid dimensions as (rows, columns)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, row: usize, col: usize) -> usize {
        row * self.columns + col
    }

    const fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.columns
    }

    /// Current state of a cell. Callers keep coordinates in range.
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.cells[self.get_index(row, col)].is_alive()
    }

    /// Set cell at position; out-of-range writes are ignored
    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        if self.in_bounds(row, col) {
            let idx = self.get_index(row, col);
            self.cells[idx].set_alive(alive);
        }
    }

    /// Flip one cell. Bounds are the caller's responsibility.
    pub fn toggle_cell(&mut self, row: usize, col: usize) {
        let idx = self.get_index(row, col);
        self.cells[idx].toggle();
    }

    /// Count live cells among the 8 neighbours. Positions off the board are dead.
    pub fn neighbor_count(&self, row: usize, col: usize) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| {
                let r = row.checked_add_signed(dr)?;
                let c = col.checked_add_signed(dc)?;
                self.in_bounds(r, c).then(|| self.is_alive(r, c))
            })
            .filter(|&alive| alive)
            .count() as u8
    }

    /// Stage every cell's next state from the current generation.
    /// Only `state` is read, so visiting order does not matter.
    pub fn stage_next_generation(&mut self) {
        for row in 0..self.rows {
            for col in 0..self.columns {
                let neighbors = self.neighbor_count(row, col);
                let idx = self.get_index(row, col);
                self.cells[idx].stage(neighbors);
            }
        }
    }

    /// Same result as `stage_next_generation`, computed with rayon
    pub fn stage_next_generation_parallel(&mut self) {
        let columns = self.columns;
        let staged: Vec<bool> = (0..self.cells.len())
            .into_par_iter()
            .map(|idx| {
                let (row, col) = (idx / columns, idx % columns);
                super::evolve(self.cells[idx].is_alive(), self.neighbor_count(row, col))
            })
            .collect();

        self.cells
            .iter_mut()
            .zip(staged)
            .for_each(|(cell, alive)| cell.stage_value(alive));
    }

    /// Copy staged state into current state for every cell
    pub fn commit_generation(&mut self) {
        self.cells.iter_mut().for_each(Cell::commit);
    }

    /// Advance one generation: a full staging pass followed by a commit.
    /// Holding `&mut self` for both keeps readers from seeing a mixed board.
    pub fn advance(&mut self) {
        if self.cells.len() >= PARALLEL_THRESHOLD {
            self.stage_next_generation_parallel();
        } else {
            self.stage_next_generation();
        }
        self.commit_generation();
        trace!(population = self.population(), "generation committed");
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| cell.set_alive(false));
    }

    /// Fill the board at random; `density` is the chance a cell starts alive.
    /// Non-finite densities leave every cell dead.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) {
        let density = if density.is_finite() { density.clamp(0.0, 1.0) } else { 0.0 };
        self.cells
            .iter_mut()
            .for_each(|cell| cell.set_alive(rng.random_bool(density)));
    }

    /// Iterate over all cells as (row, column, alive)
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        self.cells.iter().enumerate().map(move |(idx, cell)| {
            (idx / self.columns, idx % self.columns, cell.is_alive())
        })
    }

    /// Owned copy of the visible generation
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            rows: self.rows,
            columns: self.columns,
            alive: self.cells.iter().map(|cell| cell.is_alive()).collect(),
        }
    }
}

/// A frozen view of one generation, detached from the grid
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    rows: usize,
    columns: usize,
    alive: Vec<bool>,
}

impl Snapshot {
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.columns && self.alive[row * self.columns + col]
    }

    /// Live positions in row-major order
    pub fn alive_cells(&self) -> Vec<(usize, usize)> {
        self.alive
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(|(idx, _)| (idx / self.columns, idx % self.columns))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn grid_with(rows: usize, columns: usize, alive: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(rows, columns);
        for &(r, c) in alive {
            grid.set(r, c, true);
        }
        grid
    }

    #[test]
    fn test_corner_has_three_real_neighbors() {
        let full = {
            let mut g = Grid::new(5, 5);
            g.randomize(&mut StdRng::seed_from_u64(1), 1.0);
            g
        };
        assert_eq!(full.neighbor_count(0, 0), 3);
        assert_eq!(full.neighbor_count(4, 4), 3);
        assert_eq!(full.neighbor_count(0, 4), 3);
        assert_eq!(full.neighbor_count(0, 2), 5);
        assert_eq!(full.neighbor_count(2, 2), 8);
    }

    #[test]
    fn test_edges_do_not_wrap() {
        let grid = grid_with(5, 5, &[(4, 4), (0, 4), (4, 0)]);
        assert_eq!(grid.neighbor_count(0, 0), 0);
    }

    #[test]
    fn test_empty_grid_stays_empty() {
        let mut grid = Grid::new(10, 10);
        for _ in 0..20 {
            grid.advance();
        }
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_block_is_still_life() {
        let block = [(4, 4), (4, 5), (5, 4), (5, 5)];
        let mut grid = grid_with(10, 10, &block);
        for &(r, c) in &block {
            assert_eq!(grid.neighbor_count(r, c), 3);
        }
        // Dead cells touching the block never reach 3
        assert_eq!(grid.neighbor_count(3, 4), 2);
        assert_eq!(grid.neighbor_count(3, 3), 1);

        let before = grid.snapshot();
        grid.advance();
        assert_eq!(grid.snapshot(), before);
    }

    #[test]
    fn test_blinker_oscillates() {
        let mut grid = grid_with(10, 10, &[(5, 4), (5, 5), (5, 6)]);
        let horizontal = grid.snapshot();

        grid.advance();
        assert_eq!(grid.snapshot().alive_cells(), vec![(4, 5), (5, 5), (6, 5)]);

        grid.advance();
        assert_eq!(grid.snapshot(), horizontal);
    }

    #[test]
    fn test_staged_state_invisible_until_commit() {
        let mut grid = grid_with(10, 10, &[(5, 4), (5, 5), (5, 6)]);
        let before = grid.snapshot();
        grid.stage_next_generation();
        assert_eq!(grid.snapshot(), before);
        grid.commit_generation();
        assert_ne!(grid.snapshot(), before);
    }

    #[test]
    fn test_parallel_matches_serial() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut serial = Grid::new(40, 37);
        serial.randomize(&mut rng, 0.35);
        let mut parallel = serial.clone();

        for _ in 0..10 {
            serial.stage_next_generation();
            serial.commit_generation();
            parallel.stage_next_generation_parallel();
            parallel.commit_generation();
            assert_eq!(serial.snapshot(), parallel.snapshot());
        }
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut grid = grid_with(3, 3, &[(1, 1)]);
        let before = grid.snapshot();
        grid.toggle_cell(0, 2);
        assert!(grid.is_alive(0, 2));
        grid.toggle_cell(0, 2);
        assert_eq!(grid.snapshot(), before);
    }

    #[test]
    fn test_set_out_of_range_is_ignored() {
        let mut grid = Grid::new(3, 3);
        grid.set(3, 0, true);
        grid.set(0, 7, true);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_iter_cells_is_row_major() {
        let grid = grid_with(2, 3, &[(1, 2)]);
        let cells: Vec<_> = grid.iter_cells().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[1], (0, 1, false));
        assert_eq!(cells[5], (1, 2, true));
    }

    #[test]
    fn test_clear_and_randomize() {
        let mut grid = Grid::new(8, 8);
        grid.randomize(&mut StdRng::seed_from_u64(7), 1.0);
        assert_eq!(grid.population(), 64);
        grid.clear();
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_randomize_tolerates_bad_density() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut grid = Grid::new(6, 6);
        grid.randomize(&mut rng, 1.0);
        grid.randomize(&mut rng, f64::NAN);
        assert_eq!(grid.population(), 0);
        grid.randomize(&mut rng, f64::INFINITY);
        assert_eq!(grid.population(), 0);
        grid.randomize(&mut rng, 7.5);
        assert_eq!(grid.population(), 36);
    }
}
