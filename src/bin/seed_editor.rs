//! Window for drawing a seed by hand, previewing it and exporting the run as a GIF

use std::path::Path;

use life_gif::application::EditorState;
use life_gif::domain::presets;
use life_gif::rendering::{GifRenderer, RenderConfig, Renderer, screen};
use life_gif::{input, ui};
use macroquad::prelude::*;

const OUTPUT: &str = "output.gif";

fn window_conf() -> Conf {
    Conf {
        window_title: "Create Your Seed!".to_owned(),
        window_width: 780,
        window_height: 600,
        window_resizable: true,
        ..Default::default()
    }
}

/// Run the edited seed and write the animation; the message goes to the panel
fn export(state: &EditorState) -> String {
    let frames = match state.export() {
        Ok(frames) => frames,
        Err(error) => return format!("Export failed: {error}"),
    };
    let renderer = GifRenderer::new(RenderConfig::for_steps(state.export_steps));
    match renderer.render_to_path(&frames, Path::new(OUTPUT)) {
        Ok(()) => {
            println!("Wrote {} frames to {OUTPUT}", frames.len());
            format!("Saved {OUTPUT}")
        }
        Err(error) => {
            eprintln!("Export failed: {error}");
            format!("Export failed: {error}")
        }
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let (height, width) = presets::REFERENCE_BOARD;
    let mut state = EditorState::new(height, width, presets::REFERENCE_STEPS);
    let patterns = presets::all_patterns();
    let mut status: Option<String> = None;

    loop {
        let mouse_pos = mouse_position();
        let buttons = ui::create_buttons(&patterns);
        let viewport = ui::board_viewport(height, width);

        let (next, clicked_export) = input::process_button_clicks(state, &buttons, &patterns, mouse_pos);
        let (next, key_export) = input::process_keyboard_input(next, &patterns);
        state = next;
        input::handle_board_click(&mut state, &viewport, mouse_pos);

        if clicked_export || key_export {
            status = Some(export(&state));
        }

        state = state.tick(get_frame_time());

        clear_background(BLACK);
        screen::draw_board(state.displayed(), &viewport);
        screen::draw_panel(&state, &buttons, mouse_pos, status.as_deref());

        next_frame().await;
    }
}
