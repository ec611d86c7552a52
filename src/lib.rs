// Domain layer - the automaton engine
pub mod domain;

// Application layer - modes, pacing and configuration
pub mod application;

// Infrastructure layer - rendering, input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, Pattern, presets};
pub use application::{Controller, InputEvent, LifeConfig, Mode};
