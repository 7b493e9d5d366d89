mod cell;
mod grid;
pub mod engine;

pub use cell::Cell;
pub use grid::Grid;
pub use engine::{Engine, NEIGHBOR_OFFSETS, live_neighbors, neighbor_alive};
