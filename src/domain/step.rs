//! Generation stepping.
//!
//! [`StepEngine`] only re-evaluates the candidate set: live cells and their
//! clipped Moore neighbourhoods. Every other cell is dead and has no live
//! neighbour, so it stays dead. [`step_dense`] scans the whole grid with the
//! textbook neighbour rule and is kept as a baseline.

use super::{CandidateSet, Cell, Grid};

/// Sparse stepper holding a reusable candidate buffer
#[derive(Clone, Debug, Default)]
pub struct StepEngine {
    candidates: CandidateSet,
}

impl StepEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute the next generation. The input grid is only read.
    pub fn step(&mut self, grid: &Grid) -> Grid {
        let (height, width) = grid.dimensions();
        self.candidates.fill_from(grid);

        let mut next = Grid::new(height, width);
        for (row, col) in self.candidates.iter() {
            let current = grid.get(row, col).unwrap_or_default();
            let cell = current.next_from_window_sum(grid.window_sum(row, col));
            if cell.is_alive() {
                next.set(row, col, Cell::Alive);
            }
        }
        next
    }

    /// Number of cells evaluated by the most recent step
    pub fn last_candidate_count(&self) -> usize {
        self.candidates.len()
    }
}

/// Pure functional step with a fresh engine
pub fn step(grid: &Grid) -> Grid {
    StepEngine::new().step(grid)
}

/// Full-grid evolution using the neighbour-only rule (serial)
pub fn step_dense(grid: &Grid) -> Grid {
    let (height, width) = grid.dimensions();
    let cells = grid
        .iter_cells()
        .map(|(row, col, current)| current.evolve(grid.count_live_neighbors(row, col)))
        .collect();
    Grid::from_cells(height, width, cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_grid(rng: &mut StdRng, height: usize, width: usize, density: f64) -> Grid {
        let mut grid = Grid::new(height, width);
        for row in 0..height {
            for col in 0..width {
                if rng.random_bool(density) {
                    grid.set(row, col, Cell::Alive);
                }
            }
        }
        grid
    }

    #[test]
    fn empty_grid_stays_empty() {
        for (h, w) in [(0, 0), (0, 5), (1, 1), (3, 7), (20, 20)] {
            let grid = Grid::new(h, w);
            let next = step(&grid);
            assert_eq!(next.dimensions(), (h, w));
            assert!(next.is_empty());
        }
    }

    #[test]
    fn block_is_still_life() {
        let block = Grid::with_alive(6, 6, [(2, 2), (2, 3), (3, 2), (3, 3)]);
        assert_eq!(step(&block), block);
    }

    #[test]
    fn block_in_corner_is_still_life() {
        let block = Grid::with_alive(4, 4, [(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert_eq!(step(&block), block);
    }

    #[test]
    fn blinker_oscillates() {
        let horizontal = Grid::with_alive(5, 5, [(2, 1), (2, 2), (2, 3)]);
        let vertical = Grid::with_alive(5, 5, [(1, 2), (2, 2), (3, 2)]);
        assert_eq!(step(&horizontal), vertical);
        assert_eq!(step(&vertical), horizontal);
    }

    #[test]
    fn lone_corner_cell_dies() {
        let grid = Grid::with_alive(3, 3, [(0, 0)]);
        assert!(step(&grid).is_empty());
    }

    #[test]
    fn corner_tromino_becomes_block() {
        let grid = Grid::with_alive(5, 5, [(0, 0), (0, 1), (1, 0)]);
        let expected = Grid::with_alive(5, 5, [(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert_eq!(step(&grid), expected);
    }

    #[test]
    fn edges_do_not_wrap() {
        // A blinker against the left edge would wrap onto column 4 on a torus
        let grid = Grid::with_alive(5, 5, [(1, 0), (2, 0), (3, 0)]);
        let expected = Grid::with_alive(5, 5, [(2, 0), (2, 1)]);
        assert_eq!(step(&grid), expected);
        assert_eq!(step_dense(&grid), expected);
    }

    #[test]
    fn input_grid_is_not_mutated() {
        let grid = Grid::with_alive(4, 4, [(1, 1), (1, 2), (2, 1)]);
        let before = grid.clone();
        let _ = step(&grid);
        assert_eq!(grid, before);
    }

    #[test]
    fn engine_only_visits_candidates() {
        let mut engine = StepEngine::new();
        let grid = Grid::with_alive(100, 100, [(50, 50)]);
        let _ = engine.step(&grid);
        assert_eq!(engine.last_candidate_count(), 9);
    }

    #[test]
    fn engine_reuse_across_shapes() {
        let mut engine = StepEngine::new();
        let small = Grid::with_alive(3, 3, [(1, 0), (1, 1), (1, 2)]);
        let large = Grid::with_alive(9, 70, [(4, 65), (4, 66), (4, 67)]);
        assert_eq!(engine.step(&small), step_dense(&small));
        assert_eq!(engine.step(&large), step_dense(&large));
        assert_eq!(engine.step(&small), step_dense(&small));
    }

    #[test]
    fn sparse_matches_dense_on_random_grids() {
        let mut rng = StdRng::seed_from_u64(0x11fe);
        let mut engine = StepEngine::new();
        for (h, w, density) in [(1, 1, 0.5), (7, 3, 0.4), (20, 20, 0.3), (33, 71, 0.15), (64, 65, 0.6)] {
            let mut sparse = random_grid(&mut rng, h, w, density);
            let mut dense = sparse.clone();
            for generation in 0..12 {
                sparse = engine.step(&sparse);
                dense = step_dense(&dense);
                assert_eq!(sparse, dense, "{h}x{w} diverged at generation {generation}");
            }
        }
    }
}
