use std::fmt;

use super::Cell;

/// Grid is a fixed-size `height x width` board of cells stored row-major.
/// Coordinates are always `(row, col)`. Dimensions never change after creation;
/// stepping produces a new grid instead of mutating this one.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            cells: vec![Cell::Dead; height * width],
        }
    }

    /// Create a grid with the given coordinates alive.
    /// Out-of-range coordinates are ignored; validate beforehand if that matters.
    pub fn with_alive<I>(height: usize, width: usize, alive: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut grid = Self::new(height, width);
        for (row, col) in alive {
            grid.set(row, col, Cell::Alive);
        }
        grid
    }

    /// Grid dimensions as `(height, width)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.contains(row, col)
            .then(|| self.cells[self.index(row, col)])
    }

    /// Out-of-range positions read as dead
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(Cell::is_alive)
    }

    /// Set cell at position; positions outside the grid are ignored
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if self.contains(row, col) {
            let idx = self.index(row, col);
            self.cells[idx] = cell;
        }
    }

    /// Flip a cell; returns the new state, or `None` when out of range
    pub fn toggle(&mut self, row: usize, col: usize) -> Option<Cell> {
        if !self.contains(row, col) {
            return None;
        }
        let idx = self.index(row, col);
        self.cells[idx] = self.cells[idx].toggle();
        Some(self.cells[idx])
    }

    /// Set every cell dead
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.cells.iter().any(|cell| cell.is_alive())
    }

    /// One row as a slice
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.width;
        &self.cells[start..start + self.width]
    }

    /// Live cell coordinates in row-major order
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width.max(1);
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .map(move |(idx, _)| (idx / width, idx % width))
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..self.height)
            .flat_map(move |row| (0..self.width).map(move |col| (row, col)))
            .map(|(row, col)| (row, col, self.cells[self.index(row, col)]))
    }

    /// Row and column ranges of the 3x3 window around a cell, clipped to the grid.
    /// Corner cells get a 2x2 window and edge cells a 2x3 or 3x2 one.
    pub fn window(&self, row: usize, col: usize) -> (std::ops::Range<usize>, std::ops::Range<usize>) {
        let rows = row.saturating_sub(1)..(row + 2).min(self.height);
        let cols = col.saturating_sub(1)..(col + 2).min(self.width);
        (rows, cols)
    }

    /// Sum of cell values in the clipped window, the cell itself included
    pub fn window_sum(&self, row: usize, col: usize) -> u8 {
        let (rows, cols) = self.window(row, col);
        rows.map(|r| {
            self.row(r)[cols.clone()]
                .iter()
                .map(|cell| cell.value())
                .sum::<u8>()
        })
        .sum()
    }

    /// Live neighbours excluding the cell itself
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        self.window_sum(row, col) - self.get(row, col).map_or(0, Cell::value)
    }

    pub(crate) fn from_cells(height: usize, width: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), height * width);
        Self { height, width, cells }
    }
}

/// `#` for live cells, `.` for dead, one line per row
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            let line: String = self
                .row(row)
                .iter()
                .map(|cell| if cell.is_alive() { '#' } else { '.' })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_dead() {
        let grid = Grid::new(3, 5);
        assert_eq!(grid.dimensions(), (3, 5));
        assert_eq!(grid.population(), 0);
        assert!(grid.is_empty());
    }

    #[test]
    fn set_ignores_out_of_range() {
        let mut grid = Grid::new(2, 2);
        grid.set(2, 0, Cell::Alive);
        grid.set(0, 2, Cell::Alive);
        assert!(grid.is_empty());
        assert_eq!(grid.get(2, 0), None);
        assert!(!grid.is_alive(5, 5));
    }

    #[test]
    fn rows_and_cols_are_not_swapped() {
        let mut grid = Grid::new(2, 4);
        grid.set(1, 3, Cell::Alive);
        assert!(grid.is_alive(1, 3));
        assert_eq!(grid.live_cells().collect::<Vec<_>>(), vec![(1, 3)]);
        assert_eq!(grid.to_string(), "....\n...#\n");
    }

    #[test]
    fn corner_window_is_two_by_two() {
        let grid = Grid::new(4, 4);
        let (rows, cols) = grid.window(0, 0);
        assert_eq!((rows, cols), (0..2, 0..2));
        let (rows, cols) = grid.window(3, 3);
        assert_eq!((rows, cols), (2..4, 2..4));
        let (rows, cols) = grid.window(0, 2);
        assert_eq!((rows, cols), (0..2, 1..4));
    }

    #[test]
    fn window_sum_includes_self() {
        let grid = Grid::with_alive(3, 3, [(0, 0), (1, 1), (2, 2)]);
        assert_eq!(grid.window_sum(1, 1), 3);
        assert_eq!(grid.count_live_neighbors(1, 1), 2);
        assert_eq!(grid.window_sum(0, 0), 2);
        assert_eq!(grid.window_sum(0, 2), 1);
    }

    #[test]
    fn toggle_flips_and_reports() {
        let mut grid = Grid::new(2, 2);
        assert_eq!(grid.toggle(1, 0), Some(Cell::Alive));
        assert_eq!(grid.toggle(1, 0), Some(Cell::Dead));
        assert_eq!(grid.toggle(2, 0), None);
    }

    #[test]
    fn zero_sized_grid_is_empty() {
        let grid = Grid::new(0, 7);
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.live_cells().count(), 0);
        assert_eq!(grid.to_string(), "");
    }
}
