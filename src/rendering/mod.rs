use macroquad::prelude::*;
use crate::application::{GameState, Mode};
use crate::domain::Grid;

/// One painted block in screen pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockRect {
    pub x: usize,
    pub y: usize,
    pub size: usize,
    pub alive: bool,
}

/// Map every cell of the grid to the pixel block it covers
pub fn block_rects(grid: &Grid, block_size: usize) -> impl Iterator<Item = BlockRect> + '_ {
    grid.cells().map(move |cell| {
        let (x, y) = cell.pixel_origin(block_size);
        BlockRect {
            x,
            y,
            size: block_size,
            alive: cell.alive,
        }
    })
}

/// Paint the whole grid: white blocks for live cells, black for dead ones
pub fn draw_grid(grid: &Grid, block_size: usize) {
    for rect in block_rects(grid, block_size) {
        let color = if rect.alive { WHITE } else { BLACK };
        draw_rectangle(
            rect.x as f32,
            rect.y as f32,
            rect.size as f32,
            rect.size as f32,
            color,
        );
    }
}

/// Status line shown in the top-left corner
pub fn status_text(state: &GameState) -> String {
    let mode = match state.mode() {
        Mode::Play => "Running",
        Mode::Pause => "Paused",
    };
    format!(
        "Gen {} | Live {} | {}",
        state.generation,
        state.grid.live_count(),
        mode
    )
}

pub fn draw_status(state: &GameState) {
    let color = match state.mode() {
        Mode::Play => Color::from_rgba(0, 255, 150, 255),
        Mode::Pause => Color::from_rgba(255, 165, 0, 255),
    };
    draw_text(&status_text(state), 8.0, 20.0, 20.0, color);
}
