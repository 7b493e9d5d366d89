use tracing::debug;

/// Control state gating whether generations advance
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Play,
    Pause,
}

/// Logical input actions, polled once per frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Quit,
    Pause,
    Resume,
    Restart,
}

/// Side effect the frame driver has to carry out after an action
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    None,
    /// Clear the grid and seed it again
    Reseed,
    Quit,
}

/// Play/Pause state machine. Restart is a one-shot action, never a mode.
#[derive(Clone, Copy, Debug, Default)]
pub struct ModeController {
    mode: Mode,
}

impl ModeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// The engine runs only while playing
    pub const fn should_advance(&self) -> bool {
        matches!(self.mode, Mode::Play)
    }

    pub fn handle(&mut self, action: Action) -> Command {
        match (self.mode, action) {
            (_, Action::Quit) => Command::Quit,
            (_, Action::Restart) => {
                self.mode = Mode::Play;
                Command::Reseed
            }
            (Mode::Play, Action::Pause) => {
                debug!("paused");
                self.mode = Mode::Pause;
                Command::None
            }
            (Mode::Pause, Action::Resume) => {
                debug!("resumed");
                self.mode = Mode::Play;
                Command::None
            }
            (Mode::Pause, Action::Pause) | (Mode::Play, Action::Resume) => Command::None,
        }
    }
}
