mod cell;
mod grid;
mod patterns;

pub use cell::{Cell, evolve};
pub use grid::{Grid, Snapshot, PARALLEL_THRESHOLD};
pub use patterns::{Pattern, presets};
