mod algorithm;
mod candidates;
mod cell;
mod grid;
mod patterns;
mod seed;
mod step;

pub use algorithm::Algorithm;
pub use candidates::CandidateSet;
pub use cell::Cell;
pub use grid::Grid;
pub use patterns::{Pattern, presets};
pub use seed::{ParseSeedError, Seed};
pub use step::{StepEngine, step, step_dense};
