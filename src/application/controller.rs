use tracing::{debug, trace};

use super::{ConfigError, Direction, InputEvent, LifeConfig, Mode, Seed, TickGate};
use crate::domain::{Grid, presets};

/// Editing cursor position, always inside the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

impl Cursor {
    /// Step one cell, clamping each axis to the board independently
    fn step(self, direction: Direction, rows: usize, columns: usize) -> Self {
        let (dr, dc) = direction.delta();
        Self {
            row: self.row.saturating_add_signed(dr).min(rows.saturating_sub(1)),
            col: self.col.saturating_add_signed(dc).min(columns.saturating_sub(1)),
        }
    }
}

/// Controller owns the board, the interaction mode, the editing cursor
/// and the tick gate. One call to `poll` is one cycle of the loop; the
/// renderer reads through the accessors afterwards.
pub struct Controller {
    grid: Grid,
    mode: Mode,
    cursor: Cursor,
    gate: TickGate,
    generation: u64,
}

impl Controller {
    /// Build the board from config and start running at `now`.
    /// The config is validated first so the board is never empty.
    pub fn new(config: &LifeConfig, now: f64) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut grid = Grid::new(config.rows, config.columns);
        seed_grid(&mut grid, config);
        Ok(Self::with_grid(grid, config.tick_interval_secs, now))
    }

    /// Start running an existing board at `now`
    pub fn with_grid(grid: Grid, tick_interval_secs: f64, now: f64) -> Self {
        Self {
            grid,
            mode: Mode::default(),
            cursor: Cursor::default(),
            gate: TickGate::started(tick_interval_secs, now),
            generation: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Generations advanced so far
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Apply one event according to the mode table
    pub fn handle_event(&mut self, event: InputEvent) {
        match (self.mode, event) {
            (Mode::Running, InputEvent::ToggleRunPause) => self.set_mode(Mode::Paused),
            (Mode::Paused, InputEvent::ToggleRunPause) => self.set_mode(Mode::Running),
            (Mode::Editing, InputEvent::ToggleRunPause) => {
                let Cursor { row, col } = self.cursor;
                self.grid.toggle_cell(row, col);
                debug!(row, col, alive = self.grid.is_alive(row, col), "cell toggled");
            }
            (Mode::Editing, InputEvent::ToggleEdit) => self.set_mode(Mode::Paused),
            (_, InputEvent::ToggleEdit) => self.set_mode(Mode::Editing),
            (Mode::Editing, InputEvent::Move(direction)) => {
                let (rows, columns) = self.grid.dimensions();
                self.cursor = self.cursor.step(direction, rows, columns);
            }
            (_, InputEvent::Move(_)) => {}
        }
    }

    /// One poll cycle: apply every event in order, then advance at most one
    /// generation if running and the gate has elapsed.
    /// Returns true when a generation was advanced.
    ///
    /// The gate is not consulted outside `Running`, so time spent paused
    /// still counts against it and resuming may advance right away.
    pub fn poll<I>(&mut self, now: f64, events: I) -> bool
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            self.handle_event(event);
        }

        if self.mode == Mode::Running && self.gate.is_done(now) {
            self.grid.advance();
            self.generation += 1;
            self.gate.restart(now);
            trace!(generation = self.generation, "advanced");
            true
        } else {
            false
        }
    }

    fn set_mode(&mut self, mode: Mode) {
        debug!(from = %self.mode, to = %mode, "mode changed");
        self.mode = mode;
    }
}

/// Fill a fresh board according to the configured seed.
/// The glider sits at the origin; other shapes are centred.
fn seed_grid(grid: &mut Grid, config: &LifeConfig) {
    let name = match config.seed {
        Seed::Empty => return,
        Seed::Random => {
            grid.randomize(&mut rand::rng(), config.random_density);
            return;
        }
        Seed::Glider => "glider",
        Seed::Blinker => "blinker",
        Seed::Block => "block",
        Seed::Toad => "toad",
        Seed::Beacon => "beacon",
    };
    let Some(pattern) = presets::by_name(name) else {
        return;
    };
    debug!(pattern = pattern.name, description = pattern.description, "seeding board");

    if config.seed == Seed::Glider {
        pattern.place_on(grid, 0, 0);
        return;
    }
    let (rows, columns) = grid.dimensions();
    let row = rows.saturating_sub(pattern.rows) / 2;
    let col = columns.saturating_sub(pattern.columns) / 2;
    pattern.place_on(grid, row, col);
}
