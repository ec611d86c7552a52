use std::fmt;

/// Interaction mode. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    /// Generations advance on every tick of the gate
    #[default]
    Running,
    /// Frozen board, no editing
    Paused,
    /// Frozen board with a movable cursor that toggles cells
    Editing,
}

impl Mode {
    /// Label for the status line
    pub const fn label(self) -> &'static str {
        match self {
            Mode::Running => "Running",
            Mode::Paused => "Paused",
            Mode::Editing => "Editing",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
