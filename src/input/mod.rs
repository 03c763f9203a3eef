use macroquad::prelude::*;

use crate::application::{EditorState, Viewport};
use crate::domain::Pattern;
use crate::ui::{Button, ButtonAction, board_area_width};

/// Keys 1-9 load the matching catalogue entry
const PRESET_KEYS: [KeyCode; 9] = [
    KeyCode::Key1,
    KeyCode::Key2,
    KeyCode::Key3,
    KeyCode::Key4,
    KeyCode::Key5,
    KeyCode::Key6,
    KeyCode::Key7,
    KeyCode::Key8,
    KeyCode::Key9,
];

/// Left click on the board toggles one cell
pub fn handle_board_click(state: &mut EditorState, viewport: &Viewport, mouse_pos: (f32, f32)) {
    if mouse_pos.0 >= board_area_width() || !is_mouse_button_pressed(MouseButton::Left) {
        return;
    }
    let (height, width) = state.editor.dimensions();
    if let Some((row, col)) = viewport.screen_to_cell(mouse_pos.0, mouse_pos.1, height, width) {
        state.toggle_cell(row, col);
    }
}

/// Apply a panel or keyboard action. Export is handed back to the caller,
/// which owns file output.
pub fn apply_action(state: EditorState, action: ButtonAction, patterns: &[Pattern]) -> (EditorState, bool) {
    let state = match action {
        ButtonAction::PlayPause => state.toggle_running(),
        ButtonAction::Reset => state.stop_preview(),
        ButtonAction::Clear => state.clear(),
        ButtonAction::Random => state.randomize(&mut ::rand::rng()),
        ButtonAction::Preset(idx) => match patterns.get(idx) {
            Some(pattern) => state.load(pattern),
            None => state,
        },
        ButtonAction::Export => return (state, true),
    };
    (state, false)
}

/// Process button clicks; returns whether an export was requested
pub fn process_button_clicks(
    state: EditorState,
    buttons: &[Button],
    patterns: &[Pattern],
    mouse_pos: (f32, f32),
) -> (EditorState, bool) {
    buttons
        .iter()
        .filter(|btn| btn.is_clicked(mouse_pos))
        .fold((state, false), |(s, export), btn| {
            let (s, requested) = apply_action(s, btn.action, patterns);
            (s, export || requested)
        })
}

/// Process keyboard input; returns whether an export was requested
pub fn process_keyboard_input(state: EditorState, patterns: &[Pattern]) -> (EditorState, bool) {
    let bindings = [
        (KeyCode::Space, ButtonAction::PlayPause),
        (KeyCode::Escape, ButtonAction::Reset),
        (KeyCode::C, ButtonAction::Clear),
        (KeyCode::R, ButtonAction::Random),
        (KeyCode::E, ButtonAction::Export),
    ];
    let presets = PRESET_KEYS
        .iter()
        .take(patterns.len())
        .enumerate()
        .map(|(idx, key)| (*key, ButtonAction::Preset(idx)));

    let (mut state, export) = bindings
        .into_iter()
        .chain(presets)
        .filter(|(key, _)| is_key_pressed(*key))
        .fold((state, false), |(s, export), (_, action)| {
            let (s, requested) = apply_action(s, action, patterns);
            (s, export || requested)
        });

    if is_key_pressed(KeyCode::Up) {
        state = state.adjust_speed(1.0);
    }
    if is_key_pressed(KeyCode::Down) {
        state = state.adjust_speed(-1.0);
    }
    (state, export)
}
