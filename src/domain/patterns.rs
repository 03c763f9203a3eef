use super::{Grid, Seed};

/// A named arrangement of live cells plus the board it is meant to run on
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    /// Suggested board `(height, width)`
    pub board: (usize, usize),
    /// Suggested number of steps
    pub steps: usize,
    /// Live cells as `(row, col)` on the suggested board
    pub cells: Vec<(usize, usize)>,
}

impl Pattern {
    pub fn new(
        name: &'static str,
        description: &'static str,
        board: (usize, usize),
        steps: usize,
        cells: Vec<(usize, usize)>,
    ) -> Self {
        Self { name, description, board, steps, cells }
    }

    /// Seed at the pattern's own position
    pub fn seed(&self) -> Seed {
        Seed::new(self.cells.iter().copied())
    }

    /// Seed shifted so the pattern's bounding box starts at `(row, col)`
    pub fn seed_at(&self, row: usize, col: usize) -> Seed {
        let top = self.cells.iter().map(|(r, _)| *r).min().unwrap_or(0);
        let left = self.cells.iter().map(|(_, c)| *c).min().unwrap_or(0);
        Seed::new(self.cells.iter().map(|(r, c)| (r - top + row, c - left + col)))
    }

    /// Place pattern on grid at its own position; cells off the grid are skipped
    pub fn place_on(&self, grid: &mut Grid) {
        for &(row, col) in &self.cells {
            grid.set(row, col, super::Cell::Alive);
        }
    }
}

/// Seed catalogue
pub mod presets {
    use super::*;

    /// Board used by the reference runs
    pub const REFERENCE_BOARD: (usize, usize) = (20, 20);
    /// Steps used by the reference runs
    pub const REFERENCE_STEPS: usize = 30;

    /// Glider heading towards the bottom-right corner (period 4)
    pub fn spaceship() -> Pattern {
        Pattern::new(
            "Spaceship",
            "Glider, moves one cell diagonally every 4 steps",
            REFERENCE_BOARD,
            REFERENCE_STEPS,
            vec![
                (1, 1),
                (2, 2), (2, 3),
                (3, 1), (3, 2),
            ],
        )
    }

    /// 3x8 ring that grows into a pentadecathlon (period 15)
    pub fn oscillator() -> Pattern {
        Pattern::new(
            "Oscillator",
            "22-cell pentadecathlon phase (period 15)",
            REFERENCE_BOARD,
            REFERENCE_STEPS,
            vec![
                (5, 4), (5, 5), (5, 6),
                (6, 4), (6, 6),
                (7, 4), (7, 5), (7, 6),
                (8, 4), (8, 5), (8, 6),
                (9, 4), (9, 5), (9, 6),
                (10, 4), (10, 5), (10, 6),
                (11, 4), (11, 6),
                (12, 4), (12, 5), (12, 6),
            ],
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            REFERENCE_BOARD,
            REFERENCE_STEPS,
            vec![
                (9, 9), (9, 10),
                (10, 9), (10, 10),
            ],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            REFERENCE_BOARD,
            REFERENCE_STEPS,
            vec![(10, 9), (10, 10), (10, 11)],
        )
    }

    /// Get all available patterns, the two reference runs first
    pub fn all_patterns() -> Vec<Pattern> {
        vec![spaceship(), oscillator(), block(), blinker()]
    }

    /// Case-insensitive lookup by name
    pub fn find(name: &str) -> Option<Pattern> {
        all_patterns()
            .into_iter()
            .find(|pattern| pattern.name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::presets::*;
    use super::*;

    #[test]
    fn reference_seed_sizes() {
        assert_eq!(spaceship().seed().len(), 5);
        assert_eq!(oscillator().seed().len(), 22);
    }

    #[test]
    fn presets_fit_their_boards() {
        for pattern in all_patterns() {
            let (height, width) = pattern.board;
            assert_eq!(
                pattern.seed().first_out_of_bounds(height, width),
                None,
                "{}",
                pattern.name
            );
        }
    }

    #[test]
    fn seed_at_moves_bounding_box() {
        let seed = block().seed_at(0, 0);
        assert_eq!(seed.cells(), &[(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn find_ignores_case() {
        assert_eq!(find("oscillator").map(|p| p.name), Some("Oscillator"));
        assert!(find("gosper").is_none());
    }

    #[test]
    fn place_on_marks_cells() {
        let mut grid = Grid::new(20, 20);
        blinker().place_on(&mut grid);
        assert_eq!(grid.population(), 3);
        assert!(grid.is_alive(10, 11));
    }
}
