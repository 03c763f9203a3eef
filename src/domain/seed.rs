use std::collections::HashSet;
use std::str::FromStr;

use rand::Rng;
use thiserror::Error;

use super::Grid;

/// Initially-live cells of a run, as distinct `(row, col)` pairs.
/// Insertion order is kept; repeated coordinates are dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Seed {
    cells: Vec<(usize, usize)>,
}

impl Seed {
    pub fn new<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut seen = HashSet::new();
        let cells = cells.into_iter().filter(|cell| seen.insert(*cell)).collect();
        Self { cells }
    }

    /// Every cell alive with probability `density`
    pub fn random<R: Rng>(height: usize, width: usize, density: f64, rng: &mut R) -> Self {
        let density = density.clamp(0.0, 1.0);
        let cells = (0..height)
            .flat_map(|row| (0..width).map(move |col| (row, col)))
            .filter(|_| rng.random_bool(density))
            .collect();
        Self { cells }
    }

    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().copied()
    }

    /// First coordinate that does not satisfy `row < height && col < width`
    pub fn first_out_of_bounds(&self, height: usize, width: usize) -> Option<(usize, usize)> {
        self.iter().find(|&(row, col)| row >= height || col >= width)
    }

    /// Shift every cell by a row and column offset
    pub fn offset(&self, rows: usize, cols: usize) -> Self {
        Self {
            cells: self.iter().map(|(row, col)| (row + rows, col + cols)).collect(),
        }
    }

    /// Smallest `(height, width)` that contains every cell
    pub fn extent(&self) -> (usize, usize) {
        let height = self.iter().map(|(row, _)| row + 1).max().unwrap_or(0);
        let width = self.iter().map(|(_, col)| col + 1).max().unwrap_or(0);
        (height, width)
    }
}

impl From<&Grid> for Seed {
    fn from(grid: &Grid) -> Self {
        Self {
            cells: grid.live_cells().collect(),
        }
    }
}

impl FromIterator<(usize, usize)> for Seed {
    fn from_iter<I: IntoIterator<Item = (usize, usize)>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseSeedError {
    #[error("expected ROW,COL but found {0:?}")]
    MissingComma(String),
    #[error("invalid coordinate {value:?}: {reason}")]
    InvalidNumber { value: String, reason: String },
}

/// Parses `"r,c;r,c;..."`; whitespace around numbers is ignored
impl FromStr for Seed {
    type Err = ParseSeedError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let parse = |part: &str| {
            part.trim().parse::<usize>().map_err(|error| ParseSeedError::InvalidNumber {
                value: part.trim().to_string(),
                reason: error.to_string(),
            })
        };

        value
            .split(';')
            .map(str::trim)
            .filter(|pair| !pair.is_empty())
            .map(|pair| -> Result<(usize, usize), ParseSeedError> {
                let (row, col) = pair
                    .split_once(',')
                    .ok_or_else(|| ParseSeedError::MissingComma(pair.to_string()))?;
                Ok((parse(row)?, parse(col)?))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Seed::new)
    }
}
