use super::Cell;
use rand::Rng;

/// Grid owns every cell of the simulation.
/// Dimensions are fixed at construction; reseeding rewrites cells in place.
#[derive(Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(width: usize, height: usize) -> Self {
        let cells = (0..height)
            .flat_map(|row| (0..width).map(move |col| Cell::dead(col, row)))
            .collect();

        Self { width, height, cells }
    }

    /// Get grid dimensions as (width, height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, col: usize, row: usize) -> usize {
        row * self.width + col
    }

    /// Get cell at position (with bounds checking)
    pub fn cell(&self, col: usize, row: usize) -> Option<&Cell> {
        (col < self.width && row < self.height).then(|| &self.cells[self.get_index(col, row)])
    }

    /// Out-of-range positions read as dead
    pub fn is_alive(&self, col: usize, row: usize) -> bool {
        self.cell(col, row).is_some_and(|cell| cell.alive)
    }

    /// Set liveness at position; out-of-range writes are ignored
    pub fn set_alive(&mut self, col: usize, row: usize, alive: bool) {
        if col < self.width && row < self.height {
            let idx = self.get_index(col, row);
            self.cells[idx].alive = alive;
        }
    }

    /// True for cells that are not on the outermost ring
    pub const fn is_interior(&self, col: usize, row: usize) -> bool {
        col > 0 && row > 0 && col + 1 < self.width && row + 1 < self.height
    }

    /// Iterate over all cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.alive).count()
    }

    /// Kill every cell
    pub fn clear_all(&mut self) {
        self.cells.iter_mut().for_each(|cell| cell.alive = false);
    }

    /// Seed every cell independently: alive with probability `1 / denominator`.
    ///
    /// # Panics
    /// Panics if `denominator` is zero.
    pub fn reset_random<R: Rng>(&mut self, rng: &mut R, denominator: u32) {
        assert!(denominator > 0, "seed denominator must be positive");

        self.cells.iter_mut().for_each(|cell| {
            cell.alive = rng.random_range(0..denominator) == 0;
        });
    }
}

impl Clone for Grid {
    fn clone(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            cells: self.cells.clone(),
        }
    }

    /// Reuses the existing cell buffer
    fn clone_from(&mut self, source: &Self) {
        self.width = source.width;
        self.height = source.height;
        self.cells.clone_from(&source.cells);
    }
}
