/// Cell is the fundamental unit of the board.
/// `state` is what observers see; `next_state` holds the staged value
/// between a staging pass and the commit that follows it.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Cell {
    state: bool,
    next_state: bool,
}

impl Cell {
    /// Dead cell with nothing staged
    pub const fn dead() -> Self {
        Self { state: false, next_state: false }
    }

    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        self.state
    }

    /// Overwrite the visible state (pattern placement, clearing)
    pub fn set_alive(&mut self, alive: bool) {
        self.state = alive;
    }

    /// Flip the visible state
    pub fn toggle(&mut self) {
        self.state = !self.state;
    }

    /// Stage the next state from the live neighbour count.
    /// Reads only this cell's current state.
    pub fn stage(&mut self, neighbors: u8) {
        self.next_state = evolve(self.state, neighbors);
    }

    /// Stage a value computed elsewhere (parallel pass)
    pub(crate) fn stage_value(&mut self, alive: bool) {
        self.next_state = alive;
    }

    /// Make the staged state visible
    pub fn commit(&mut self) {
        self.state = self.next_state;
    }
}

/// Pure function computing the next state based on Conway's rules:
/// 1. Exactly 3 neighbours: alive, whatever the current state
/// 2. Exactly 2 neighbours: current state is kept
/// 3. All other counts: dead
pub const fn evolve(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (_, 3) => true,
        (true, 2) => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underpopulation() {
        assert!(!evolve(true, 0));
        assert!(!evolve(true, 1));
    }

    #[test]
    fn test_survival() {
        assert!(evolve(true, 2));
        assert!(evolve(true, 3));
    }

    #[test]
    fn test_overpopulation() {
        for n in 4..=8 {
            assert!(!evolve(true, n));
        }
    }

    #[test]
    fn test_reproduction() {
        assert!(evolve(false, 3));
        assert!(!evolve(false, 2));
        assert!(!evolve(false, 6));
    }

    #[test]
    fn test_stage_is_invisible_until_commit() {
        let mut cell = Cell::dead();
        cell.stage(3);
        assert!(!cell.is_alive());
        cell.commit();
        assert!(cell.is_alive());
    }

    #[test]
    fn test_double_toggle_restores_state() {
        let mut cell = Cell::dead();
        cell.toggle();
        assert!(cell.is_alive());
        cell.toggle();
        assert!(!cell.is_alive());
    }
}
