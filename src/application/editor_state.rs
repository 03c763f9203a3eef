use std::time::Instant;

use rand::Rng;

use super::{FrameSequence, SeedEditor, Simulation, SimulationError};
use crate::domain::{Cell, Grid, Pattern, StepEngine};

/// EditorState coordinates the seed editor and its live preview.
/// Window code feeds it clicks and frame times; it never touches the window.
pub struct EditorState {
    pub editor: SeedEditor,
    /// Generations stepped from the edited seed; `None` while editing
    pub preview: Option<Grid>,
    pub engine: StepEngine,
    pub is_running: bool,
    pub generation: u64,
    pub update_timer: f32,
    pub updates_per_second: f32,
    pub last_step_time_ms: f32,
    /// Steps recorded when exporting
    pub export_steps: usize,
}

impl EditorState {
    pub fn new(height: usize, width: usize, export_steps: usize) -> Self {
        Self {
            editor: SeedEditor::new(height, width),
            preview: None,
            engine: StepEngine::new(),
            is_running: false,
            generation: 0,
            update_timer: 0.0,
            updates_per_second: 10.0,
            last_step_time_ms: 0.0,
            export_steps,
        }
    }

    /// Grid to draw: the preview generation if any, else the edited seed
    pub fn displayed(&self) -> &Grid {
        self.preview.as_ref().unwrap_or_else(|| self.editor.grid())
    }

    pub fn is_previewing(&self) -> bool {
        self.preview.is_some()
    }

    /// Flip a cell of the seed. Any preview is dropped first.
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Option<Cell> {
        self.stop_preview_in_place();
        self.editor.toggle(row, col)
    }

    fn stop_preview_in_place(&mut self) {
        self.preview = None;
        self.is_running = false;
        self.generation = 0;
        self.update_timer = 0.0;
    }

    /// Back to the edited seed
    pub fn stop_preview(mut self) -> Self {
        self.stop_preview_in_place();
        self
    }

    /// Toggle play/pause; starting from edit mode snapshots the seed
    pub fn toggle_running(mut self) -> Self {
        if self.preview.is_none() {
            self.preview = Some(self.editor.snapshot());
        }
        self.is_running = !self.is_running;
        self
    }

    /// Clear seed and preview
    pub fn clear(mut self) -> Self {
        self.stop_preview_in_place();
        self.editor.clear();
        self
    }

    pub fn randomize<R: Rng>(mut self, rng: &mut R) -> Self {
        self.stop_preview_in_place();
        self.editor.randomize(0.3, rng);
        self
    }

    pub fn load(mut self, pattern: &Pattern) -> Self {
        self.stop_preview_in_place();
        self.editor.load(pattern);
        self
    }

    /// Adjust preview speed
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.updates_per_second = (self.updates_per_second + delta).clamp(1.0, 60.0);
        self
    }

    /// Advance the preview by one frame of wall time
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.updates_per_second;

        if self.update_timer >= update_interval {
            if let Some(current) = self.preview.take() {
                let start = Instant::now();
                self.preview = Some(self.engine.step(&current));
                self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;
                self.generation += 1;
            }
            self.update_timer = 0.0;
        }

        self
    }

    /// Run a full simulation from the edited seed
    pub fn export(&self) -> Result<FrameSequence, SimulationError> {
        let (height, width) = self.editor.dimensions();
        Simulation::new(height, width, self.export_steps).run(&self.editor.seed())
    }
}
