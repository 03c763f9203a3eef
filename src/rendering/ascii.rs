use std::io::Write;

use super::{RenderError, Renderer};
use crate::application::FrameSequence;

/// Plain-text frames: a header line per generation followed by the grid
#[derive(Clone, Copy, Debug, Default)]
pub struct AsciiRenderer;

impl Renderer for AsciiRenderer {
    fn render(&self, frames: &FrameSequence, out: &mut dyn Write) -> Result<(), RenderError> {
        if frames.is_empty() {
            return Err(RenderError::NoFrames);
        }
        for (generation, grid) in frames.iter().enumerate() {
            writeln!(out, "generation {generation} (population {})", grid.population())?;
            write!(out, "{grid}")?;
            writeln!(out)?;
        }
        Ok(())
    }
}
