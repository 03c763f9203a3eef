//! Command-line configuration.
//!
//! [`Cli`] is parsed with clap and resolved into a [`RunConfig`] holding
//! everything one run needs: board, seed, stepping strategy and output.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;

use crate::application::Simulation;
use crate::domain::{Algorithm, Pattern, Seed, presets};
use crate::rendering::{DEFAULT_EXPANSION, FrameTiming, RenderConfig};

/// Menu shown when no seed was given on the command line
pub const MENU_PROMPT: &str = "Welcome to the Game of Life!\n\
Please select a number for a pre-configured seed\n\
1) Spaceship\n\
2) Oscillator\n\
->";

/// Seeds selectable by name
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PatternChoice {
    Spaceship,
    Oscillator,
    Block,
    Blinker,
    /// Random cells at `--density`
    Random,
}

impl PatternChoice {
    /// Catalogue entry, `None` for random seeds
    pub fn pattern(self) -> Option<Pattern> {
        match self {
            PatternChoice::Spaceship => Some(presets::spaceship()),
            PatternChoice::Oscillator => Some(presets::oscillator()),
            PatternChoice::Block => Some(presets::block()),
            PatternChoice::Blinker => Some(presets::blinker()),
            PatternChoice::Random => None,
        }
    }
}

/// Map a menu answer to a seed; only the two reference seeds are listed
pub fn parse_menu_choice(answer: &str) -> Option<PatternChoice> {
    match answer.trim().parse::<u8>().ok()? {
        1 => Some(PatternChoice::Spaceship),
        2 => Some(PatternChoice::Oscillator),
        _ => None,
    }
}

/// Accepts y/yes/true/1 and n/no/false/0, any case
pub fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" | "true" | "t" | "1" => Some(true),
        "n" | "no" | "false" | "f" | "0" => Some(false),
        _ => None,
    }
}

/// Board dimensions parsed from a HEIGHTxWIDTH argument
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardSize {
    pub height: usize,
    pub width: usize,
}

impl FromStr for BoardSize {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (height, width) = value
            .split_once(['x', 'X'])
            .ok_or_else(|| "expected format HEIGHTxWIDTH".to_string())?;

        let height = height
            .trim()
            .parse::<usize>()
            .map_err(|error| format!("invalid height: {error}"))?;
        let width = width
            .trim()
            .parse::<usize>()
            .map_err(|error| format!("invalid width: {error}"))?;

        if height == 0 || width == 0 {
            return Err("board dimensions must be positive".to_string());
        }

        Ok(Self { height, width })
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("no seed selected; pass --pattern or --cells")]
    MissingSeed,
    #[error("density {0} must be between 0 and 1")]
    InvalidDensity(f64),
}

/// Render Conway's Game of Life runs as looping animated GIFs.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Catalogue seed to run. Without this or --cells an interactive menu is shown.
    #[arg(short, long, value_enum, conflicts_with = "cells")]
    pub pattern: Option<PatternChoice>,
    /// Custom seed as ROW,COL pairs separated by semicolons, e.g. "1,2;2,3;3,1"
    #[arg(long, value_name = "ROW,COL;...")]
    pub cells: Option<Seed>,
    /// Board dimensions expressed as HEIGHTxWIDTH (default 20x20)
    #[arg(short, long, value_name = "HEIGHTxWIDTH")]
    pub size: Option<BoardSize>,
    /// Number of generations after the seed
    #[arg(long, default_value_t = presets::REFERENCE_STEPS)]
    pub steps: usize,
    /// Fraction of live cells for --pattern random
    #[arg(long, default_value_t = 0.3)]
    pub density: f64,
    /// RNG seed for --pattern random; random from the OS when absent
    #[arg(long, value_name = "N")]
    pub rng_seed: Option<u64>,
    /// Stepping strategy
    #[arg(long, value_enum, default_value_t = Algorithm::Sparse)]
    pub algorithm: Algorithm,
    /// Pixels per cell edge
    #[arg(
        long,
        value_name = "PIXELS",
        default_value_t = DEFAULT_EXPANSION,
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub expansion: u16,
    /// Delay of every frame; defaults to 3 ms per step
    #[arg(long, value_name = "MILLISECONDS", conflicts_with = "total_ms")]
    pub frame_ms: Option<u64>,
    /// Length of the whole animation, split evenly across frames
    #[arg(long, value_name = "MILLISECONDS")]
    pub total_ms: Option<u64>,
    /// Where to write the GIF
    #[arg(short, long, default_value = "output.gif")]
    pub output: PathBuf,
    /// Print frames as text to stdout instead of writing a GIF
    #[arg(long)]
    pub ascii: bool,
    /// Open the GIF in a browser afterwards
    #[arg(long, conflicts_with = "ascii")]
    pub open: bool,
}

/// Everything one invocation needs, resolved from [`Cli`]
#[derive(Clone, Debug, PartialEq)]
pub struct RunConfig {
    pub simulation: Simulation,
    pub seed: Seed,
    pub render: RenderConfig,
    pub output: PathBuf,
    pub ascii: bool,
    pub open: bool,
}

impl Cli {
    /// True when neither --pattern nor --cells was given
    pub fn needs_menu(&self) -> bool {
        self.pattern.is_none() && self.cells.is_none()
    }

    /// Resolve flags; `menu_choice` stands in for --pattern when it is absent
    pub fn into_run_config(self, menu_choice: Option<PatternChoice>) -> Result<RunConfig, ConfigError> {
        if !(0.0..=1.0).contains(&self.density) {
            return Err(ConfigError::InvalidDensity(self.density));
        }

        let choice = self.pattern.or(menu_choice);
        let pattern = choice.and_then(PatternChoice::pattern);
        let (height, width) = match (self.size, &pattern) {
            (Some(size), _) => (size.height, size.width),
            (None, Some(pattern)) => pattern.board,
            (None, None) => presets::REFERENCE_BOARD,
        };

        let seed = match (self.cells, choice, pattern) {
            (Some(cells), _, _) => cells,
            (None, Some(_), Some(pattern)) => pattern.seed(),
            (None, Some(_), None) => {
                let mut rng = match self.rng_seed {
                    Some(n) => StdRng::seed_from_u64(n),
                    None => StdRng::from_os_rng(),
                };
                Seed::random(height, width, self.density, &mut rng)
            }
            (None, None, _) => return Err(ConfigError::MissingSeed),
        };

        let timing = match (self.frame_ms, self.total_ms) {
            (Some(ms), _) => FrameTiming::PerFrame(Duration::from_millis(ms)),
            (None, Some(ms)) => FrameTiming::Total(Duration::from_millis(ms)),
            (None, None) => FrameTiming::reference(self.steps),
        };

        Ok(RunConfig {
            simulation: Simulation::new(height, width, self.steps).with_algorithm(self.algorithm),
            seed,
            render: RenderConfig {
                expansion: self.expansion,
                timing,
            },
            output: self.output,
            ascii: self.ascii,
            open: self.open,
        })
    }
}
