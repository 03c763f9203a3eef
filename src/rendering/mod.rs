//! Turning frame sequences into something to look at.
//!
//! [`Renderer`] is the seam between a finished run and its output format.
//! [`GifRenderer`] writes an animated GIF and [`AsciiRenderer`] writes text.
//! [`screen`] draws the seed editor window with macroquad.

mod animation;
mod ascii;
pub mod screen;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::application::FrameSequence;

pub use animation::{DEFAULT_EXPANSION, FrameTiming, GifRenderer, RenderConfig, expand};
pub use ascii::AsciiRenderer;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("no frames to render")]
    NoFrames,
    #[error("expansion factor must be at least 1")]
    ZeroExpansion,
    #[error("a {height}x{width} grid at {expansion}x does not fit a GIF canvas")]
    InvalidSize {
        height: usize,
        width: usize,
        expansion: u16,
    },
    #[error("failed to write frames: {0}")]
    Io(#[from] std::io::Error),
    #[error("GIF encoding failed: {0}")]
    Encoding(#[from] gif::EncodingError),
}

/// Consumer of a finished run
pub trait Renderer {
    /// Write every frame, in order, to `out`
    fn render(&self, frames: &FrameSequence, out: &mut dyn Write) -> Result<(), RenderError>;

    /// Render into a newly created file, replacing any existing one
    fn render_to_path(&self, frames: &FrameSequence, path: &Path) -> Result<(), RenderError> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.render(frames, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
