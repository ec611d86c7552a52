mod config;
mod controller;
mod event;
mod mode;
mod timer;

pub use config::{ConfigError, LifeConfig, Seed, CONFIG_ENV_VAR, DEFAULT_CONFIG_FILE};
pub use controller::{Controller, Cursor};
pub use event::{Direction, EventQueue, InputEvent};
pub use mode::Mode;
pub use timer::{FramePacer, TickGate};
