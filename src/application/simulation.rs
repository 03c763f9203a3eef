use thiserror::Error;

use crate::domain::{Algorithm, Grid, Seed, StepEngine};

/// Failure of a run. Only seed validation can fail; stepping is total.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimulationError {
    #[error("seed cell ({row}, {col}) lies outside the {height}x{width} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },
}

/// Every generation of one run, frame 0 being the seed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameSequence {
    frames: Vec<Grid>,
}

impl FrameSequence {
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Grid> {
        self.frames.iter()
    }

    pub fn get(&self, generation: usize) -> Option<&Grid> {
        self.frames.get(generation)
    }

    pub fn first(&self) -> Option<&Grid> {
        self.frames.first()
    }

    pub fn last(&self) -> Option<&Grid> {
        self.frames.last()
    }

    pub fn as_slice(&self) -> &[Grid] {
        &self.frames
    }

    pub fn into_frames(self) -> Vec<Grid> {
        self.frames
    }

    /// `(height, width)` shared by every frame
    pub fn dimensions(&self) -> Option<(usize, usize)> {
        self.first().map(Grid::dimensions)
    }

    /// Live cell count per frame
    pub fn populations(&self) -> Vec<usize> {
        self.iter().map(Grid::population).collect()
    }

    /// Smallest generation `p > 0` equal to the seed frame, if the run reached one
    pub fn period(&self) -> Option<usize> {
        let first = self.first()?;
        self.iter()
            .enumerate()
            .skip(1)
            .find(|(_, frame)| *frame == first)
            .map(|(generation, _)| generation)
    }
}

impl<'a> IntoIterator for &'a FrameSequence {
    type Item = &'a Grid;
    type IntoIter = std::slice::Iter<'a, Grid>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Run parameters: board size, step count and stepping strategy
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Simulation {
    pub height: usize,
    pub width: usize,
    pub steps: usize,
    pub algorithm: Algorithm,
}

impl Simulation {
    pub fn new(height: usize, width: usize, steps: usize) -> Self {
        Self {
            height,
            width,
            steps,
            algorithm: Algorithm::default(),
        }
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Reject any seed cell outside the board
    pub fn validate(&self, seed: &Seed) -> Result<(), SimulationError> {
        match seed.first_out_of_bounds(self.height, self.width) {
            Some((row, col)) => Err(SimulationError::OutOfBounds {
                row,
                col,
                height: self.height,
                width: self.width,
            }),
            None => Ok(()),
        }
    }

    /// Validate, then record the seed and `steps` further generations
    pub fn run(&self, seed: &Seed) -> Result<FrameSequence, SimulationError> {
        self.validate(seed)?;

        let mut engine = StepEngine::new();
        let mut frames = Vec::with_capacity(self.steps + 1);
        let mut grid = Grid::with_alive(self.height, self.width, seed.iter());

        for _ in 0..self.steps {
            let next = self.algorithm.step(&mut engine, &grid);
            frames.push(grid);
            grid = next;
        }
        frames.push(grid);

        Ok(FrameSequence { frames })
    }
}

/// Run with the sparse stepper; the result holds `steps + 1` frames
pub fn run(height: usize, width: usize, seed: &Seed, steps: usize) -> Result<FrameSequence, SimulationError> {
    Simulation::new(height, width, steps).run(seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn reference_run(pattern: crate::domain::Pattern) -> FrameSequence {
        let (height, width) = pattern.board;
        run(height, width, &pattern.seed(), pattern.steps).unwrap()
    }

    #[test]
    fn frame_count_is_steps_plus_one() {
        for steps in [0, 1, 5, 30] {
            let frames = run(7, 11, &Seed::new([(3, 3), (3, 4), (3, 5)]), steps).unwrap();
            assert_eq!(frames.len(), steps + 1);
            assert!(frames.iter().all(|frame| frame.dimensions() == (7, 11)));
        }
    }

    #[test]
    fn frame_zero_is_the_seed() {
        let seed = Seed::new([(0, 0), (2, 1)]);
        let frames = run(3, 3, &seed, 2).unwrap();
        assert_eq!(Seed::from(frames.first().unwrap()), seed);
    }

    #[test]
    fn out_of_bounds_seed_is_rejected() {
        let width = 20;
        let err = run(20, width, &Seed::new([(1, 1), (width, 0)]), 30).unwrap_err();
        assert_eq!(
            err,
            SimulationError::OutOfBounds { row: 20, col: 0, height: 20, width: 20 }
        );
    }

    #[test]
    fn column_is_checked_against_width() {
        let err = run(10, 4, &Seed::new([(2, 4)]), 3).unwrap_err();
        assert!(matches!(err, SimulationError::OutOfBounds { row: 2, col: 4, .. }));
        assert!(run(10, 4, &Seed::new([(9, 3)]), 3).is_ok());
    }

    #[test]
    fn empty_seed_runs_to_empty_frames() {
        let frames = run(4, 4, &Seed::default(), 3).unwrap();
        assert_eq!(frames.populations(), vec![0, 0, 0, 0]);
    }

    #[test]
    fn zero_sized_board_runs() {
        let frames = run(0, 0, &Seed::default(), 2).unwrap();
        assert_eq!(frames.len(), 3);
        assert_eq!(frames.dimensions(), Some((0, 0)));
    }

    #[test]
    fn oscillator_has_period_fifteen() {
        let frames = reference_run(presets::oscillator());
        assert_eq!(frames.period(), Some(15));
        assert_eq!(frames.get(30), frames.first());
        assert_eq!(
            &frames.populations()[..16],
            &[22, 18, 40, 18, 18, 20, 28, 20, 20, 22, 18, 22, 20, 16, 12, 22]
        );
    }

    #[test]
    fn spaceship_moves_diagonally() {
        let frames = reference_run(presets::spaceship());
        let seed = presets::spaceship().seed();
        assert_eq!(Seed::from(&frames.as_slice()[4]), seed.offset(1, 1));
        assert_eq!(Seed::from(&frames.as_slice()[8]), seed.offset(2, 2));
        assert_eq!(
            Seed::from(frames.last().unwrap()).cells(),
            &[(9, 8), (9, 10), (10, 9), (10, 10), (11, 9)]
        );
        assert!(frames.populations().iter().all(|&p| p == 5));
    }

    #[test]
    fn runs_are_deterministic() {
        let seed = Seed::random(30, 25, 0.35, &mut StdRng::seed_from_u64(99));
        let a = run(30, 25, &seed, 20).unwrap();
        let b = run(30, 25, &seed, 20).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn algorithms_produce_same_frames() {
        let seed = Seed::random(24, 31, 0.3, &mut StdRng::seed_from_u64(5));
        let sim = Simulation::new(24, 31, 25);
        let sparse = sim.run(&seed).unwrap();
        let dense = sim.with_algorithm(Algorithm::Dense).run(&seed).unwrap();
        assert_eq!(sparse, dense);
    }
}
