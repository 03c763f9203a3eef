use macroquad::prelude::*;

use crate::application::{EditorState, Viewport};
use crate::domain::Grid;
use crate::ui::{Button, PANEL_WIDTH, panel_x};

const ALIVE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
const DEAD: Color = Color::new(0.06, 0.06, 0.06, 1.0);
const GRID_LINE: Color = Color::new(0.16, 0.16, 0.16, 1.0);

/// Draw the board: white live cells on black, grid lines when cells are large
pub fn draw_board(grid: &Grid, viewport: &Viewport) {
    let (height, width) = grid.dimensions();
    let size = viewport.cell_size;
    let (x0, y0) = viewport.cell_to_screen(0, 0);
    draw_rectangle(x0, y0, size * width as f32, size * height as f32, DEAD);

    for (row, col) in grid.live_cells() {
        let (x, y) = viewport.cell_to_screen(row, col);
        draw_rectangle(x, y, size, size, ALIVE);
    }

    if size >= 6.0 {
        for row in 0..=height {
            let y = y0 + row as f32 * size;
            draw_line(x0, y, x0 + size * width as f32, y, 1.0, GRID_LINE);
        }
        for col in 0..=width {
            let x = x0 + col as f32 * size;
            draw_line(x, y0, x, y0 + size * height as f32, 1.0, GRID_LINE);
        }
    }
}

/// Draw the side panel: buttons, key help and preview status
pub fn draw_panel(state: &EditorState, buttons: &[Button], mouse_pos: (f32, f32), status: Option<&str>) {
    let px = panel_x();
    draw_rectangle(px, 0.0, PANEL_WIDTH, screen_height(), Color::from_rgba(30, 30, 30, 255));
    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let top = buttons
        .last()
        .map_or(20.0, |btn| btn.rect.y + btn.rect.h + 30.0);
    let text_x = px + 10.0;

    let (height, width) = state.editor.dimensions();
    let mode = match (state.is_previewing(), state.is_running) {
        (false, _) => "Editing",
        (true, true) => "Playing",
        (true, false) => "Paused",
    };
    let lines = [
        (format!("Board: {height}x{width}"), GRAY),
        (format!("Seed cells: {}", state.editor.grid().population()), GRAY),
        (format!("Mode: {mode}"), WHITE),
        (format!("Generation: {}", state.generation), Color::from_rgba(0, 255, 150, 255)),
        (format!("Speed: {:.0} gen/s", state.updates_per_second), GRAY),
        (format!("Step: {:.2} ms", state.last_step_time_ms), GRAY),
        (format!("Export: {} steps", state.export_steps), GRAY),
        ("Click: toggle cell".to_string(), DARKGRAY),
        ("Space: play  Esc: seed".to_string(), DARKGRAY),
        ("C clear  R random  E export".to_string(), DARKGRAY),
    ];
    for (idx, (text, color)) in lines.iter().enumerate() {
        draw_text(text, text_x, top + idx as f32 * 18.0, 16.0, *color);
    }

    if let Some(message) = status {
        draw_text(message, text_x, screen_height() - 20.0, 14.0, YELLOW);
    }
}
