// Domain layer - Life rules, grids and stepping
pub mod domain;

// Application layer - simulation runs and seed editing
pub mod application;

// Infrastructure layer - output, window UI, input, CLI config
pub mod config;
pub mod input;
pub mod rendering;
pub mod ui;
pub mod viewer;

// Re-exports for convenience
pub use application::{EditorState, FrameSequence, SeedEditor, Simulation, SimulationError, run};
pub use domain::{Algorithm, Cell, Grid, Pattern, Seed, StepEngine, presets, step};
pub use rendering::{AsciiRenderer, GifRenderer, RenderConfig, RenderError, Renderer};
