//! Character-grid render target for terminals and headless runs

use super::{CellRect, ColorRole, RenderTarget};

/// One character per grid cell
#[derive(Debug, Clone)]
pub struct TextTarget {
    width: usize,
    height: usize,
    cell_size: f32,
    glyphs: Vec<char>,
}

impl TextTarget {
    pub fn new(width: i32, height: i32, cell_size: u32) -> Self {
        let width = width.max(0) as usize;
        let height = height.max(0) as usize;
        Self {
            width,
            height,
            cell_size: cell_size.max(1) as f32,
            glyphs: vec![Self::glyph(ColorRole::Background); width * height],
        }
    }

    pub fn glyph(role: ColorRole) -> char {
        match role {
            ColorRole::Head => '@',
            ColorRole::Body => 'o',
            ColorRole::GoodApple => '*',
            ColorRole::BadApple => 'x',
            ColorRole::Obstacle => '#',
            ColorRole::Background => '.',
        }
    }

    /// Character at a cell, if on the board
    pub fn at(&self, col: usize, row: usize) -> Option<char> {
        (col < self.width && row < self.height).then(|| self.glyphs[row * self.width + col])
    }

    /// The board as newline-separated rows
    pub fn render(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in self.glyphs.chunks(self.width.max(1)) {
            out.extend(row.iter());
            out.push('\n');
        }
        out
    }
}

impl RenderTarget for TextTarget {
    fn clear(&mut self, _color: [f32; 4]) {
        self.glyphs.fill(Self::glyph(ColorRole::Background));
    }

    fn fill_cell(&mut self, rect: CellRect, role: ColorRole, _color: [f32; 4]) {
        let cell = (rect.min / self.cell_size).round();
        if cell.x < 0.0 || cell.y < 0.0 {
            return;
        }
        let (col, row) = (cell.x as usize, cell.y as usize);
        if col < self.width && row < self.height {
            self.glyphs[row * self.width + col] = Self::glyph(role);
        }
    }
}
