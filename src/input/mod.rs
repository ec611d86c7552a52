use macroquad::prelude::*;
use crate::application::{Direction, EventQueue, InputEvent};

/// Key bindings, in the order events are queued within one frame
const BINDINGS: [(KeyCode, InputEvent); 6] = [
    (KeyCode::Space, InputEvent::ToggleRunPause),
    (KeyCode::E, InputEvent::ToggleEdit),
    (KeyCode::Down, InputEvent::Move(Direction::Down)),
    (KeyCode::Up, InputEvent::Move(Direction::Up)),
    (KeyCode::Left, InputEvent::Move(Direction::Left)),
    (KeyCode::Right, InputEvent::Move(Direction::Right)),
];

/// Queue one event per key pressed this frame.
/// `is_key_pressed` is edge-triggered, so holding a key does not repeat.
pub fn collect_events(queue: &mut EventQueue) {
    BINDINGS
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .for_each(|(_, event)| queue.push(*event));
}
