//! Generation stepping for the bounded grid.
//!
//! Only interior cells are simulated: the outermost ring is never read for
//! an update and never written. Every neighbor read goes to a snapshot of
//! the previous generation, so the result does not depend on scan order.

use super::Grid;

/// `(dy, dx)` offsets of the eight neighbors, clockwise from north
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

/// Whether the neighbor of an interior cell at `offset` is alive.
///
/// # Panics
/// Panics if `(col, row)` is on the outer ring, where an offset could leave the grid.
pub fn neighbor_alive(grid: &Grid, col: usize, row: usize, (dy, dx): (isize, isize)) -> bool {
    assert!(
        grid.is_interior(col, row),
        "neighbor lookup on edge cell ({col}, {row})"
    );
    grid.is_alive(col.wrapping_add_signed(dx), row.wrapping_add_signed(dy))
}

/// Count live neighbors of an interior cell
pub fn live_neighbors(grid: &Grid, col: usize, row: usize) -> u8 {
    NEIGHBOR_OFFSETS
        .iter()
        .filter(|&&offset| neighbor_alive(grid, col, row, offset))
        .count() as u8
}

/// Engine advances a grid one generation at a time.
/// It keeps the previous generation around so its allocation is reused.
#[derive(Clone, Debug)]
pub struct Engine {
    previous: Grid,
}

impl Engine {
    pub fn new() -> Self {
        Self {
            previous: Grid::new(0, 0),
        }
    }

    /// Compute the next generation of every interior cell in place
    pub fn step(&mut self, grid: &mut Grid) {
        self.previous.clone_from(grid);
        let previous = &self.previous;

        let interior = previous
            .cells()
            .filter(|cell| previous.is_interior(cell.col, cell.row));

        for cell in interior {
            let alive = cell.next_alive(live_neighbors(previous, cell.col, cell.row));
            if alive != cell.alive {
                grid.set_alive(cell.col, cell.row, alive);
            }
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(width: usize, height: usize, live: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(width, height);
        for &(col, row) in live {
            grid.set_alive(col, row, true);
        }
        grid
    }

    fn live_cells(grid: &Grid) -> Vec<(usize, usize)> {
        grid.cells()
            .filter(|c| c.alive)
            .map(|c| (c.col, c.row))
            .collect()
    }

    /// Place `n` live neighbors around (2, 2) on a 5×5 grid, optionally with the center alive
    fn center_with_neighbors(center_alive: bool, n: usize) -> Grid {
        let mut grid = Grid::new(5, 5);
        grid.set_alive(2, 2, center_alive);
        for &(dy, dx) in NEIGHBOR_OFFSETS.iter().take(n) {
            grid.set_alive((2 + dx) as usize, (2 + dy) as usize, true);
        }
        grid
    }

    #[test]
    fn test_offsets_cover_moore_neighborhood() {
        let mut offsets = NEIGHBOR_OFFSETS.to_vec();
        offsets.sort();
        offsets.dedup();

        assert_eq!(offsets.len(), 8);
        assert!(!offsets.contains(&(0, 0)));
        assert!(offsets.iter().all(|&(dy, dx)| dy.abs() <= 1 && dx.abs() <= 1));
    }

    #[test]
    fn test_live_neighbors_counts_all_directions() {
        for n in 0..=8 {
            let grid = center_with_neighbors(true, n);
            assert_eq!(live_neighbors(&grid, 2, 2) as usize, n);
        }
    }

    #[test]
    #[should_panic(expected = "neighbor lookup on edge cell")]
    fn test_neighbor_lookup_on_edge_panics() {
        let grid = Grid::new(5, 5);
        neighbor_alive(&grid, 0, 2, (0, -1));
    }

    #[test]
    fn test_birth_only_with_three_neighbors() {
        let mut engine = Engine::new();
        for n in 0..=8 {
            let mut grid = center_with_neighbors(false, n);
            engine.step(&mut grid);
            assert_eq!(grid.is_alive(2, 2), n == 3, "dead center with {n} neighbors");
        }
    }

    #[test]
    fn test_survival_with_two_or_three_neighbors() {
        let mut engine = Engine::new();
        for n in 0..=8 {
            let mut grid = center_with_neighbors(true, n);
            engine.step(&mut grid);
            assert_eq!(grid.is_alive(2, 2), n == 2 || n == 3, "live center with {n} neighbors");
        }
    }

    #[test]
    fn test_edge_ring_never_changes() {
        // Fully alive grid: every interior cell is overcrowded, edges would die too if simulated
        let mut grid = Grid::new(6, 5);
        for row in 0..5 {
            for col in 0..6 {
                grid.set_alive(col, row, true);
            }
        }

        Engine::new().step(&mut grid);

        for cell in grid.cells() {
            let on_edge = !grid.is_interior(cell.col, cell.row);
            assert_eq!(cell.alive, on_edge, "cell ({}, {})", cell.col, cell.row);
        }
    }

    #[test]
    fn test_edge_cell_not_born_from_interior_neighbors() {
        // (0, 2) on the edge has three live neighbors but is never simulated
        let mut grid = grid_with(5, 5, &[(1, 1), (1, 2), (1, 3)]);

        Engine::new().step(&mut grid);

        assert!(!grid.is_alive(0, 2));
        assert_eq!(live_cells(&grid), vec![(1, 2), (2, 2)]);
    }

    #[test]
    fn test_cleared_grid_stays_dead() {
        let mut grid = grid_with(8, 8, &[(3, 3), (3, 4), (4, 3)]);
        grid.clear_all();

        Engine::new().step(&mut grid);

        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    fn test_isolated_cell_dies() {
        for size in [3, 4, 10] {
            let mut grid = grid_with(size, size, &[(1, 1)]);
            Engine::new().step(&mut grid);
            assert_eq!(grid.live_count(), 0, "grid {size}x{size}");
        }
    }

    #[test]
    fn test_blinker_oscillates() {
        // Horizontal on row 4, columns 3..=5
        let horizontal = vec![(3, 4), (4, 4), (5, 4)];
        let vertical = vec![(4, 3), (4, 4), (4, 5)];
        let mut grid = grid_with(10, 10, &horizontal);
        let mut engine = Engine::new();

        engine.step(&mut grid);
        assert_eq!(live_cells(&grid), vertical);

        engine.step(&mut grid);
        assert_eq!(live_cells(&grid), horizontal);
    }

    #[test]
    fn test_block_is_still_life() {
        let block = vec![(4, 4), (5, 4), (4, 5), (5, 5)];
        let mut grid = grid_with(10, 10, &block);

        Engine::new().step(&mut grid);

        assert_eq!(live_cells(&grid), block);
    }

    #[test]
    fn test_update_is_simultaneous() {
        // Glider; an in-place scan-order update gives a different result
        let mut grid = grid_with(8, 8, &[(2, 1), (3, 2), (1, 3), (2, 3), (3, 3)]);

        Engine::new().step(&mut grid);

        assert_eq!(live_cells(&grid), vec![(1, 2), (3, 2), (2, 3), (3, 3), (2, 4)]);
    }

    #[test]
    fn test_engine_reused_across_grids() {
        let mut engine = Engine::new();
        let mut small = grid_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);
        let mut large = grid_with(12, 9, &[(6, 4)]);

        engine.step(&mut small);
        engine.step(&mut large);

        assert_eq!(live_cells(&small), vec![(2, 1), (2, 2), (2, 3)]);
        assert_eq!(large.live_count(), 0);
        assert_eq!(large.dimensions(), (12, 9));
    }

    #[test]
    fn test_grid_without_interior_is_untouched() {
        let mut grid = grid_with(2, 5, &[(0, 1), (1, 1), (0, 2)]);
        let before = grid.clone();

        Engine::new().step(&mut grid);

        assert_eq!(grid, before);
    }
}
