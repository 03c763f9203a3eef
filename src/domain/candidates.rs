//! Bit-packed set of cells to re-evaluate during a step.
//!
//! One bit per grid cell, 64 cells per word, rows padded to whole words.
//! The buffer is sized once for a grid shape and cleared between steps,
//! so a long run does not allocate per generation.

use super::Grid;

/// Set of `(row, col)` candidates for one step
#[derive(Clone, Debug, Default)]
pub struct CandidateSet {
    height: usize,
    width: usize,
    /// Width in words (ceil(width / 64))
    words_per_row: usize,
    /// Flat array of words, row-major order
    words: Vec<u64>,
}

impl CandidateSet {
    /// Create an empty set for a grid of the given shape
    pub fn new(height: usize, width: usize) -> Self {
        let words_per_row = width.div_ceil(64);
        Self {
            height,
            width,
            words_per_row,
            words: vec![0; words_per_row * height],
        }
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Clear all bits, resizing only when the grid shape changed
    pub fn reset(&mut self, height: usize, width: usize) {
        if (height, width) == (self.height, self.width) {
            self.words.fill(0);
        } else {
            *self = Self::new(height, width);
        }
    }

    #[inline]
    fn locate(&self, row: usize, col: usize) -> (usize, u32) {
        (row * self.words_per_row + col / 64, (col % 64) as u32)
    }

    #[inline]
    pub fn insert(&mut self, row: usize, col: usize) {
        if row < self.height && col < self.width {
            let (word, bit) = self.locate(row, col);
            self.words[word] |= 1u64 << bit;
        }
    }

    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        if row >= self.height || col >= self.width {
            return false;
        }
        let (word, bit) = self.locate(row, col);
        (self.words[word] >> bit) & 1 == 1
    }

    /// Mark a cell and its Moore neighbourhood, clipped to the grid
    pub fn insert_neighborhood(&mut self, row: usize, col: usize) {
        let rows = row.saturating_sub(1)..(row + 2).min(self.height);
        let cols = col.saturating_sub(1)..(col + 2).min(self.width);
        for r in rows {
            for c in cols.clone() {
                let (word, bit) = self.locate(r, c);
                self.words[word] |= 1u64 << bit;
            }
        }
    }

    /// Rebuild the set from a grid: a cell is a candidate iff it or a neighbour is alive
    pub fn fill_from(&mut self, grid: &Grid) {
        let (height, width) = grid.dimensions();
        self.reset(height, width);
        for (row, col) in grid.live_cells() {
            self.insert_neighborhood(row, col);
        }
    }

    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Candidates in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let words_per_row = self.words_per_row;
        self.words
            .iter()
            .enumerate()
            .filter(|(_, word)| **word != 0)
            .flat_map(move |(idx, &word)| {
                let row = idx / words_per_row;
                let base = (idx % words_per_row) * 64;
                SetBits(word).map(move |bit| (row, base + bit as usize))
            })
    }
}

/// Iterator over the set bit positions of a word, lowest first
struct SetBits(u64);

impl Iterator for SetBits {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.0 == 0 {
            return None;
        }
        let bit = self.0.trailing_zeros();
        self.0 &= self.0 - 1;
        Some(bit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_neighborhood_is_clipped() {
        let mut set = CandidateSet::new(5, 5);
        set.insert_neighborhood(0, 0);
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![(0, 0), (0, 1), (1, 0), (1, 1)]
        );
    }

    #[test]
    fn interior_neighborhood_has_nine_cells() {
        let mut set = CandidateSet::new(5, 5);
        set.insert_neighborhood(2, 2);
        assert_eq!(set.len(), 9);
        assert!(set.contains(1, 3));
        assert!(!set.contains(0, 2));
    }

    #[test]
    fn overlapping_neighborhoods_are_counted_once() {
        let mut set = CandidateSet::new(4, 4);
        set.insert_neighborhood(1, 1);
        set.insert_neighborhood(1, 2);
        assert_eq!(set.len(), 12);
    }

    #[test]
    fn iteration_crosses_word_boundaries() {
        let mut set = CandidateSet::new(3, 130);
        set.insert_neighborhood(1, 64);
        let cells: Vec<_> = set.iter().collect();
        assert_eq!(cells.len(), 9);
        assert_eq!(cells.first(), Some(&(0, 63)));
        assert_eq!(cells.last(), Some(&(2, 65)));
        set.insert(2, 129);
        assert!(set.contains(2, 129));
        assert!(!set.contains(2, 130));
    }

    #[test]
    fn fill_from_matches_live_cells_and_neighbors() {
        let grid = Grid::with_alive(6, 6, [(0, 5), (3, 2)]);
        let mut set = CandidateSet::default();
        set.fill_from(&grid);
        assert_eq!(set.dimensions(), (6, 6));
        for (row, col, _) in grid.iter_cells() {
            let (rows, cols) = grid.window(row, col);
            let near_live = rows
                .flat_map(|r| cols.clone().map(move |c| (r, c)))
                .any(|(r, c)| grid.is_alive(r, c));
            assert_eq!(set.contains(row, col), near_live, "({row}, {col})");
        }
    }

    #[test]
    fn reset_clears_without_reallocating_same_shape() {
        let mut set = CandidateSet::new(3, 3);
        set.insert(1, 1);
        set.reset(3, 3);
        assert!(set.is_empty());
        set.reset(2, 70);
        assert_eq!(set.dimensions(), (2, 70));
        assert!(set.is_empty());
    }
}
