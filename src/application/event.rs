//! Logical input events, decoupled from key codes.
//!
//! The input layer turns each physical key press into exactly one event and
//! pushes it onto an [`EventQueue`]; the controller drains the queue once per
//! poll cycle.

use std::collections::VecDeque;

/// Cursor movement direction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// (row, column) delta
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// A press-edge input signal
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// Run/pause outside the editor, toggle the cursor cell inside it
    ToggleRunPause,
    /// Enter or leave the editor
    ToggleEdit,
    /// Move the editing cursor one cell
    Move(Direction),
}

/// Pending events for one poll cycle, in arrival order
#[derive(Clone, Debug, Default)]
pub struct EventQueue {
    events: VecDeque<InputEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Take every pending event, leaving the queue empty
    pub fn drain(&mut self) -> impl Iterator<Item = InputEvent> + '_ {
        self.events.drain(..)
    }
}

impl FromIterator<InputEvent> for EventQueue {
    fn from_iter<I: IntoIterator<Item = InputEvent>>(iter: I) -> Self {
        Self { events: iter.into_iter().collect() }
    }
}
