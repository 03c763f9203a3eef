mod editor_state;
mod seed_editor;
mod simulation;
mod viewport;

pub use editor_state::EditorState;
pub use seed_editor::SeedEditor;
pub use simulation::{FrameSequence, Simulation, SimulationError, run};
pub use viewport::Viewport;
