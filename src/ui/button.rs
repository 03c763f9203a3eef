use macroquad::prelude::*;

/// What a panel button asks the editor to do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonAction {
    PlayPause,
    Reset,
    Clear,
    Random,
    /// Load the catalogue pattern at this index
    Preset(usize),
    Export,
}

/// Panel button with hover and click detection
#[derive(Clone)]
pub struct Button {
    pub rect: Rect,
    pub label: String,
    pub action: ButtonAction,
}

impl Button {
    pub fn new(rect: Rect, label: impl Into<String>, action: ButtonAction) -> Self {
        Self { rect, label: label.into(), action }
    }

    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        self.rect.contains(vec2(mouse_pos.0, mouse_pos.1))
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let fill = if self.is_hovered(mouse_pos) {
            Color::from_rgba(110, 110, 110, 255)
        } else {
            Color::from_rgba(60, 60, 60, 255)
        };
        let Rect { x, y, w, h } = self.rect;
        draw_rectangle(x, y, w, h, fill);
        draw_rectangle_lines(x, y, w, h, 1.0, LIGHTGRAY);

        let size = measure_text(&self.label, None, 18, 1.0);
        draw_text(
            &self.label,
            x + (w - size.width) / 2.0,
            y + (h + size.height) / 2.0,
            18.0,
            WHITE,
        );
    }

    /// Left button pressed over this button during the current frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}
