mod game_state;
pub mod mode;

pub use game_state::{Flow, GameState};
pub use mode::{Action, Command, Mode, ModeController};
