//! Algorithm enum for selecting the stepping implementation.
//!
//! Both variants produce identical generations; they differ only in how
//! many cells they look at.

use super::{Grid, StepEngine, step_dense};

/// Available stepping strategies
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Hash, clap::ValueEnum)]
pub enum Algorithm {
    /// Evaluate only live cells and their neighbours
    #[default]
    Sparse,
    /// Evaluate every cell of the grid
    Dense,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Sparse, Algorithm::Dense]
    }

    /// Display name for UI and CLI output
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Sparse => "sparse",
            Algorithm::Dense => "dense",
        }
    }

    /// Short description for tooltips/info
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Sparse => "Candidate bitset, skips cells far from life",
            Algorithm::Dense => "Full scan, neighbour-only rule",
        }
    }

    /// Advance one generation with this strategy
    pub fn step(&self, engine: &mut StepEngine, grid: &Grid) -> Grid {
        match self {
            Algorithm::Sparse => engine.step(grid),
            Algorithm::Dense => step_dense(grid),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_sparse() {
        assert_eq!(Algorithm::default(), Algorithm::Sparse);
    }

    #[test]
    fn test_names_are_unique() {
        let names: Vec<_> = Algorithm::all().iter().map(|a| a.name()).collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(names.len(), unique.len());
    }

    #[test]
    fn test_variants_agree_on_glider() {
        let grid = Grid::with_alive(8, 8, [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]);
        let mut engine = StepEngine::new();
        let mut sparse = grid.clone();
        let mut dense = grid;
        for _ in 0..10 {
            sparse = Algorithm::Sparse.step(&mut engine, &sparse);
            dense = Algorithm::Dense.step(&mut engine, &dense);
        }
        assert_eq!(sparse, dense);
    }
}
