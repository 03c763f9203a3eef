use std::borrow::Cow;
use std::io::Write;
use std::time::Duration;

use gif::{Encoder, Frame, Repeat};
use rayon::prelude::*;

use super::{RenderError, Renderer};
use crate::application::FrameSequence;
use crate::domain::Grid;

/// Pixels per cell edge unless configured otherwise
pub const DEFAULT_EXPANSION: u16 = 50;

/// Global palette: index 0 dead (black), index 1 alive (white)
const PALETTE: [u8; 6] = [0, 0, 0, 255, 255, 255];

/// How long frames stay on screen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameTiming {
    /// Every frame shows for this long
    PerFrame(Duration),
    /// The whole animation lasts this long, split evenly across frames
    Total(Duration),
}

impl FrameTiming {
    /// Per-frame delay of `3 ms` per simulated step
    pub fn reference(steps: usize) -> Self {
        FrameTiming::PerFrame(Duration::from_millis(steps as u64 * 3))
    }

    /// GIF delay in centiseconds, rounded to nearest, at least 1
    pub fn delay_centis(&self, frame_count: usize) -> u16 {
        let per_frame_ms = match self {
            FrameTiming::PerFrame(duration) => duration.as_millis(),
            FrameTiming::Total(duration) => duration.as_millis() / frame_count.max(1) as u128,
        };
        ((per_frame_ms + 5) / 10).clamp(1, u16::MAX as u128) as u16
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderConfig {
    /// Pixels per cell edge
    pub expansion: u16,
    pub timing: FrameTiming,
}

impl RenderConfig {
    pub fn for_steps(steps: usize) -> Self {
        Self {
            expansion: DEFAULT_EXPANSION,
            timing: FrameTiming::reference(steps),
        }
    }
}

/// Scale a grid into palette indices, one `factor x factor` square per cell
pub fn expand(grid: &Grid, factor: usize) -> Vec<u8> {
    let (height, width) = grid.dimensions();
    let mut pixels = Vec::with_capacity(height * width * factor * factor);
    for row in 0..height {
        let line: Vec<u8> = grid
            .row(row)
            .iter()
            .flat_map(|cell| std::iter::repeat_n(cell.value(), factor))
            .collect();
        for _ in 0..factor {
            pixels.extend_from_slice(&line);
        }
    }
    pixels
}

/// Animated GIF output, looping forever
#[derive(Clone, Copy, Debug)]
pub struct GifRenderer {
    pub config: RenderConfig,
}

impl GifRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    fn canvas(&self, height: usize, width: usize) -> Result<(u16, u16), RenderError> {
        let expansion = self.config.expansion;
        let invalid = || RenderError::InvalidSize { height, width, expansion };
        let scale = |cells: usize| {
            cells
                .checked_mul(expansion as usize)
                .filter(|&pixels| pixels > 0)
                .and_then(|pixels| u16::try_from(pixels).ok())
        };
        Ok((scale(height).ok_or_else(invalid)?, scale(width).ok_or_else(invalid)?))
    }
}

impl Renderer for GifRenderer {
    fn render(&self, frames: &FrameSequence, out: &mut dyn Write) -> Result<(), RenderError> {
        if self.config.expansion == 0 {
            return Err(RenderError::ZeroExpansion);
        }
        let (height, width) = frames.dimensions().ok_or(RenderError::NoFrames)?;
        let (pixel_height, pixel_width) = self.canvas(height, width)?;
        let delay = self.config.timing.delay_centis(frames.len());

        let factor = self.config.expansion as usize;
        let buffers: Vec<Vec<u8>> = frames
            .as_slice()
            .par_iter()
            .map(|grid| expand(grid, factor))
            .collect();

        let mut encoder = Encoder::new(out, pixel_width, pixel_height, &PALETTE)?;
        encoder.set_repeat(Repeat::Infinite)?;
        for buffer in buffers {
            let frame = Frame {
                width: pixel_width,
                height: pixel_height,
                delay,
                buffer: Cow::Owned(buffer),
                ..Frame::default()
            };
            encoder.write_frame(&frame)?;
        }
        encoder.into_inner()?;
        Ok(())
    }
}
