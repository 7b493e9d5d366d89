/// Cell is one block of the Game of Life grid.
/// It knows its own grid position; the pixel position is derived on demand.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Cell {
    pub alive: bool,
    pub col: usize,
    pub row: usize,
}

impl Cell {
    /// Create a dead cell at the given grid position
    pub const fn dead(col: usize, row: usize) -> Self {
        Self { alive: false, col, row }
    }

    /// Top-left pixel of this cell when drawn with `block_size` pixel blocks
    pub const fn pixel_origin(&self, block_size: usize) -> (usize, usize) {
        (self.col * block_size, self.row * block_size)
    }

    /// Pure function to compute the next state based on Conway's rules:
    /// 1. Live cell with 2-3 neighbors survives
    /// 2. Dead cell with exactly 3 neighbors becomes alive
    /// 3. All other cases result in death
    pub const fn next_alive(&self, live_neighbors: u8) -> bool {
        matches!((self.alive, live_neighbors), (true, 2 | 3) | (false, 3))
    }
}
