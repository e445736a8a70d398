//! Shape generation for 2D primitives

use glam::Vec2;

use super::Color;
use super::vertex::Vertex;

/// Generate vertices for an axis-aligned filled rectangle
///
/// `origin` is the top-left corner in field coordinates (y down).
pub fn rect(origin: Vec2, size: Vec2, color: Color) -> [Vertex; 6] {
    let min = origin;
    let max = origin + size;

    // Two triangles
    [
        Vertex::new(min.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}
