/// Viewport maps board cells to screen pixels.
/// The board is scaled to fit the drawing area and centred in it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub offset_x: f32,
    pub offset_y: f32,
    pub cell_size: f32,
}

impl Viewport {
    /// Largest square cell size that fits `height x width` cells in the area
    pub fn fit(height: usize, width: usize, area_width: f32, area_height: f32) -> Self {
        if height == 0 || width == 0 {
            return Self { offset_x: 0.0, offset_y: 0.0, cell_size: 0.0 };
        }
        let cell_size = (area_width / width as f32).min(area_height / height as f32).max(1.0);
        Self {
            offset_x: (area_width - cell_size * width as f32).max(0.0) / 2.0,
            offset_y: (area_height - cell_size * height as f32).max(0.0) / 2.0,
            cell_size,
        }
    }

    /// Convert screen coordinates to `(row, col)`; `None` outside the board
    pub fn screen_to_cell(&self, screen_x: f32, screen_y: f32, height: usize, width: usize) -> Option<(usize, usize)> {
        if self.cell_size <= 0.0 {
            return None;
        }
        let col = ((screen_x - self.offset_x) / self.cell_size).floor();
        let row = ((screen_y - self.offset_y) / self.cell_size).floor();
        if row < 0.0 || col < 0.0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        (row < height && col < width).then_some((row, col))
    }

    /// Top-left screen corner of a cell
    pub fn cell_to_screen(&self, row: usize, col: usize) -> (f32, f32) {
        (
            col as f32 * self.cell_size + self.offset_x,
            row as f32 * self.cell_size + self.offset_y,
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self { offset_x: 0.0, offset_y: 0.0, cell_size: 10.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_centres_narrow_board() {
        let viewport = Viewport::fit(10, 5, 200.0, 100.0);
        assert_eq!(viewport.cell_size, 10.0);
        assert_eq!(viewport.offset_x, 75.0);
        assert_eq!(viewport.offset_y, 0.0);
    }

    #[test]
    fn screen_and_cell_agree() {
        let viewport = Viewport::fit(20, 20, 400.0, 400.0);
        let (x, y) = viewport.cell_to_screen(3, 7);
        assert_eq!(viewport.screen_to_cell(x + 1.0, y + 1.0, 20, 20), Some((3, 7)));
    }

    #[test]
    fn outside_board_is_none() {
        let viewport = Viewport::fit(4, 4, 40.0, 40.0);
        assert_eq!(viewport.screen_to_cell(-1.0, 5.0, 4, 4), None);
        assert_eq!(viewport.screen_to_cell(45.0, 5.0, 4, 4), None);
        assert_eq!(Viewport::fit(0, 4, 40.0, 40.0).screen_to_cell(1.0, 1.0, 0, 4), None);
    }
}
