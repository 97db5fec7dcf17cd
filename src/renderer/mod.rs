//! Grid rendering
//!
//! The simulation hands over a `Frame` of logical cells; the renderer maps
//! roles to colors and cells to pixel squares, then draws onto whatever
//! `RenderTarget` the caller passes in. There is no global surface.

pub mod shapes;
pub mod text;
pub mod vertex;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{Cell, EntityKind, GameSession};
pub use text::TextTarget;
pub use vertex::{Vertex, colors};

/// Logical color tag; the palette is a renderer concern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorRole {
    Head,
    Body,
    GoodApple,
    BadApple,
    Obstacle,
    /// Cell to repaint with the board color (vacated tail)
    Background,
}

impl From<EntityKind> for ColorRole {
    fn from(kind: EntityKind) -> Self {
        match kind {
            EntityKind::GoodApple => ColorRole::GoodApple,
            EntityKind::BadApple => ColorRole::BadApple,
            EntityKind::Obstacle => ColorRole::Obstacle,
        }
    }
}

/// One cell to paint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawCell {
    pub cell: Cell,
    pub role: ColorRole,
}

/// Everything visible after a tick, in paint order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub width: i32,
    pub height: i32,
    pub cells: Vec<DrawCell>,
}

impl Frame {
    /// Snapshot the session: vacated cells first, then entities, body, head
    pub fn capture(session: &GameSession) -> Self {
        let snake = &session.snake;
        let mut cells = Vec::with_capacity(
            snake.vacated().len() + session.entities.len() + snake.body().len(),
        );

        cells.extend(snake.vacated().iter().map(|&cell| DrawCell {
            cell,
            role: ColorRole::Background,
        }));
        cells.extend(session.entities.iter().map(|e| DrawCell {
            cell: e.position,
            role: e.kind.into(),
        }));
        cells.extend(snake.body().iter().skip(1).map(|&cell| DrawCell {
            cell,
            role: ColorRole::Body,
        }));
        cells.push(DrawCell {
            cell: snake.head(),
            role: ColorRole::Head,
        });

        Self {
            width: session.grid.width,
            height: session.grid.height,
            cells,
        }
    }
}

/// Pixel-space square for one cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellRect {
    pub min: Vec2,
    pub size: f32,
}

/// Drawing surface handle passed into every draw call
pub trait RenderTarget {
    fn clear(&mut self, color: [f32; 4]);
    fn fill_cell(&mut self, rect: CellRect, role: ColorRole, color: [f32; 4]);
}

/// Maps frames onto a render target
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    cell_size: f32,
}

impl Renderer {
    pub fn new(cell_size: u32) -> Self {
        Self {
            cell_size: cell_size as f32,
        }
    }

    /// Pixel dimensions of a frame
    pub fn screen_size(&self, frame: &Frame) -> Vec2 {
        Vec2::new(frame.width as f32, frame.height as f32) * self.cell_size
    }

    pub fn rect_for(&self, cell: Cell) -> CellRect {
        CellRect {
            min: cell.as_vec2() * self.cell_size,
            size: self.cell_size,
        }
    }

    pub fn color_for(role: ColorRole) -> [f32; 4] {
        match role {
            ColorRole::Head => colors::SNAKE_HEAD,
            ColorRole::Body => colors::SNAKE_BODY,
            ColorRole::GoodApple => colors::GOOD_APPLE,
            ColorRole::BadApple => colors::BAD_APPLE,
            ColorRole::Obstacle => colors::OBSTACLE,
            ColorRole::Background => colors::BACKGROUND,
        }
    }

    /// Full repaint: clear to the board color, then every cell in order
    pub fn draw<T: RenderTarget + ?Sized>(&self, frame: &Frame, target: &mut T) {
        target.clear(colors::BACKGROUND);
        for draw in &frame.cells {
            target.fill_cell(self.rect_for(draw.cell), draw.role, Self::color_for(draw.role));
        }
    }
}

/// Collects GPU-ready triangles in normalized device coordinates
#[derive(Debug, Clone)]
pub struct VertexTarget {
    screen_size: Vec2,
    clear_color: [f32; 4],
    vertices: Vec<Vertex>,
}

impl VertexTarget {
    pub fn new(screen_size: Vec2) -> Self {
        Self {
            screen_size,
            clear_color: colors::BACKGROUND,
            vertices: Vec::new(),
        }
    }

    pub fn clear_color(&self) -> [f32; 4] {
        self.clear_color
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Raw bytes for a vertex buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Pixel (origin top-left, y down) to NDC (origin center, y up)
    fn to_ndc(&self, vertex: Vertex) -> Vertex {
        let p = Vec2::from(vertex.position) / self.screen_size * 2.0 - Vec2::ONE;
        Vertex::new(p.x, -p.y, vertex.color)
    }
}

impl RenderTarget for VertexTarget {
    fn clear(&mut self, color: [f32; 4]) {
        self.clear_color = color;
        self.vertices.clear();
    }

    fn fill_cell(&mut self, rect: CellRect, role: ColorRole, color: [f32; 4]) {
        let cell = if role == ColorRole::Background {
            shapes::quad(rect.min, Vec2::splat(rect.size), color).to_vec()
        } else {
            shapes::bordered_cell(rect.min, rect.size, color, colors::CELL_BORDER)
        };
        let converted: Vec<Vertex> = cell.into_iter().map(|v| self.to_ndc(v)).collect();
        self.vertices.extend(converted);
    }
}
