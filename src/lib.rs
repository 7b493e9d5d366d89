// Domain layer - cells, grid and generation stepping
pub mod domain;

// Application layer - mode control and frame coordination
pub mod application;

// Configuration
pub mod config;

// Infrastructure layer - rendering, input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Engine, Grid};
pub use application::{Action, Flow, GameState, Mode};
pub use config::{ConfigError, LifeConfig};
