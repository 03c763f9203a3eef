use rand::Rng;

use crate::domain::{Cell, Grid, Pattern, Seed};

/// Editable board used to draw a seed by hand.
/// Holds no window or widget state; drawing code borrows it.
#[derive(Clone, Debug)]
pub struct SeedEditor {
    grid: Grid,
}

impl SeedEditor {
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            grid: Grid::new(height, width),
        }
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    /// Flip one cell; returns the new state, `None` when off the board
    pub fn toggle(&mut self, row: usize, col: usize) -> Option<Cell> {
        self.grid.toggle(row, col)
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.grid.set(row, col, cell);
    }

    pub fn clear(&mut self) {
        self.grid.clear();
    }

    /// Replace the board contents with a pattern
    pub fn load(&mut self, pattern: &Pattern) {
        self.grid.clear();
        pattern.place_on(&mut self.grid);
    }

    pub fn randomize<R: Rng>(&mut self, density: f64, rng: &mut R) {
        let (height, width) = self.grid.dimensions();
        self.grid = Grid::with_alive(height, width, Seed::random(height, width, density, rng).iter());
    }

    /// Read-only view for drawing
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Owned copy of the current board
    pub fn snapshot(&self) -> Grid {
        self.grid.clone()
    }

    /// Live cells as a seed, row-major
    pub fn seed(&self) -> Seed {
        Seed::from(&self.grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn toggle_then_snapshot() {
        let mut editor = SeedEditor::new(4, 6);
        assert_eq!(editor.toggle(1, 5), Some(Cell::Alive));
        assert_eq!(editor.toggle(3, 0), Some(Cell::Alive));
        assert_eq!(editor.toggle(1, 5), Some(Cell::Dead));
        assert_eq!(editor.toggle(4, 0), None);

        let snapshot = editor.snapshot();
        assert_eq!(snapshot.dimensions(), (4, 6));
        assert_eq!(snapshot.live_cells().collect::<Vec<_>>(), vec![(3, 0)]);
    }

    #[test]
    fn snapshot_is_detached() {
        let mut editor = SeedEditor::new(3, 3);
        editor.toggle(1, 1);
        let snapshot = editor.snapshot();
        editor.clear();
        assert_eq!(snapshot.population(), 1);
        assert!(editor.grid().is_empty());
    }

    #[test]
    fn load_replaces_contents() {
        let mut editor = SeedEditor::new(20, 20);
        editor.toggle(0, 0);
        editor.load(&presets::oscillator());
        assert_eq!(editor.seed(), presets::oscillator().seed());
    }

    #[test]
    fn randomize_keeps_dimensions() {
        let mut editor = SeedEditor::new(5, 8);
        editor.randomize(1.0, &mut StdRng::seed_from_u64(1));
        assert_eq!(editor.grid().population(), 40);
        assert_eq!(editor.dimensions(), (5, 8));
    }
}
