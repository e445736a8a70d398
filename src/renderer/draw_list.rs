//! Recorded frame description

use glam::Vec2;

use super::shapes;
use super::vertex::Vertex;
use super::{Color, RenderSurface};

/// One recorded draw operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    FillRect { origin: Vec2, size: Vec2, color: Color },
    Text(TextItem),
}

/// A line of text anchored at its top-left corner
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub text: String,
    pub pos: Vec2,
}

/// Records a frame in draw order.
///
/// Field size is needed so `clear` can be expanded to a full-field quad.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    field_size: Vec2,
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new(field_width: f32, field_height: f32) -> Self {
        Self {
            field_size: Vec2::new(field_width, field_height),
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drop recorded commands, keeping the allocation
    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    /// Filled rectangles (including clears) in draw order
    pub fn rects(&self) -> impl Iterator<Item = (Vec2, Vec2, Color)> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Clear(color) => Some((Vec2::ZERO, self.field_size, *color)),
            DrawCommand::FillRect {
                origin,
                size,
                color,
            } => Some((*origin, *size, *color)),
            DrawCommand::Text(_) => None,
        })
    }

    /// Text items in draw order
    pub fn texts(&self) -> impl Iterator<Item = &TextItem> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text(item) => Some(item),
            _ => None,
        })
    }

    /// Triangle list for every rectangle, in field coordinates
    pub fn vertices(&self) -> Vec<Vertex> {
        let mut vertices = Vec::with_capacity(self.commands.len() * 6);
        for (origin, size, color) in self.rects() {
            // Degenerate rects (e.g. a zero-height block) add nothing visible
            if size.x <= 0.0 || size.y <= 0.0 {
                continue;
            }
            vertices.extend_from_slice(&shapes::rect(origin, size, color));
        }
        vertices
    }
}

impl RenderSurface for DrawList {
    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) {
        self.commands.push(DrawCommand::FillRect {
            origin,
            size,
            color,
        });
    }

    fn text(&mut self, text: &str, pos: Vec2) {
        self.commands.push(DrawCommand::Text(TextItem {
            text: text.to_string(),
            pos,
        }));
    }
}
