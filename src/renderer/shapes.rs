//! Shape generation for grid cells

use glam::Vec2;

use super::vertex::Vertex;

/// Two triangles covering an axis-aligned rectangle
pub fn quad(min: Vec2, size: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    let max = min + size;
    [
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Filled cell with a one-pixel outline (4 thin quads on top of the fill)
pub fn bordered_cell(min: Vec2, size: f32, fill: [f32; 4], border: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(30);
    vertices.extend(quad(min, Vec2::splat(size), fill));

    let line = 1.0_f32.min(size / 2.0);
    // Top, bottom, left, right
    vertices.extend(quad(min, Vec2::new(size, line), border));
    vertices.extend(quad(
        min + Vec2::new(0.0, size - line),
        Vec2::new(size, line),
        border,
    ));
    vertices.extend(quad(min, Vec2::new(line, size), border));
    vertices.extend(quad(
        min + Vec2::new(size - line, 0.0),
        Vec2::new(line, size),
        border,
    ));

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quad_corners() {
        let vertices = quad(Vec2::new(20.0, 40.0), Vec2::splat(20.0), [1.0; 4]);
        let xs: Vec<f32> = vertices.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = vertices.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 20.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 40.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 40.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 60.0);
    }

    #[test]
    fn test_bordered_cell() {
        let vertices = bordered_cell(Vec2::ZERO, 20.0, [0.0; 4], [1.0; 4]);
        assert_eq!(vertices.len(), 30);
        assert_eq!(vertices[0].color, [0.0; 4]);
        assert_eq!(vertices[29].color, [1.0; 4]);
    }
}
