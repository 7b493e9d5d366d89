use rand::{SeedableRng, rngs::StdRng};
use tracing::{info, trace};

use super::mode::{Action, Command, Mode, ModeController};
use crate::config::LifeConfig;
use crate::domain::{Engine, Grid};

/// Whether the frame loop should keep running
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// GameState orchestrates the simulation.
/// This is the application layer that coordinates domain logic.
pub struct GameState {
    pub grid: Grid,
    pub generation: u64,
    engine: Engine,
    controller: ModeController,
    rng: StdRng,
    seed_denominator: u32,
}

impl GameState {
    /// Create a freshly seeded, playing simulation sized from the config
    pub fn new(config: &LifeConfig) -> Self {
        let (width, height) = config.grid_dimensions();
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut state = Self {
            grid: Grid::new(width, height),
            generation: 0,
            engine: Engine::new(),
            controller: ModeController::new(),
            rng,
            seed_denominator: config.seed_denominator,
        };
        state.grid.reset_random(&mut state.rng, state.seed_denominator);
        info!(
            width,
            height,
            live = state.grid.live_count(),
            "grid seeded"
        );
        state
    }

    pub const fn mode(&self) -> Mode {
        self.controller.mode()
    }

    /// Clear the grid, seed it again and start playing from generation zero
    pub fn restart(&mut self) {
        self.grid.clear_all();
        self.grid.reset_random(&mut self.rng, self.seed_denominator);
        self.generation = 0;
        info!(live = self.grid.live_count(), "restarted");
    }

    /// Apply one input action without stepping
    pub fn handle_action(&mut self, action: Action) -> Flow {
        match self.controller.handle(action) {
            Command::None => Flow::Continue,
            Command::Reseed => {
                self.restart();
                Flow::Continue
            }
            Command::Quit => Flow::Quit,
        }
    }

    /// Update simulation by one frame
    /// Input is handled first, then the engine steps if the mode allows it
    pub fn tick(&mut self, action: Option<Action>) -> Flow {
        if let Some(action) = action {
            if self.handle_action(action) == Flow::Quit {
                return Flow::Quit;
            }
        }

        if self.controller.should_advance() {
            self.engine.step(&mut self.grid);
            self.generation += 1;
            trace!(generation = self.generation, "stepped");
        }

        Flow::Continue
    }
}
