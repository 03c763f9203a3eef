mod button;

pub use button::{Button, ButtonAction};

use macroquad::prelude::{Rect, screen_height, screen_width};

use crate::application::Viewport;
use crate::domain::Pattern;

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 32.0;
const BUTTON_GAP: f32 = 8.0;
const MARGIN: f32 = 10.0;

/// X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Width of the board area
pub fn board_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

pub fn board_area_height() -> f32 {
    screen_height()
}

/// Viewport fitting a board into the current window
pub fn board_viewport(height: usize, width: usize) -> Viewport {
    Viewport::fit(height, width, board_area_width(), board_area_height())
}

/// Panel buttons stacked from the top, one per preset after the fixed ones
pub fn create_buttons(patterns: &[Pattern]) -> Vec<Button> {
    let x = panel_x() + MARGIN;
    let w = PANEL_WIDTH - 2.0 * MARGIN;

    let fixed = [
        ("Play/Pause", ButtonAction::PlayPause),
        ("Back to seed", ButtonAction::Reset),
        ("Clear", ButtonAction::Clear),
        ("Random", ButtonAction::Random),
    ];
    let presets = patterns
        .iter()
        .enumerate()
        .map(|(idx, pattern)| (pattern.name, ButtonAction::Preset(idx)));
    let export = std::iter::once(("Export GIF", ButtonAction::Export));

    fixed
        .into_iter()
        .chain(presets)
        .chain(export)
        .enumerate()
        .map(|(slot, (label, action))| {
            let y = MARGIN + slot as f32 * (BUTTON_HEIGHT + BUTTON_GAP);
            Button::new(Rect::new(x, y, w, BUTTON_HEIGHT), label, action)
        })
        .collect()
}
