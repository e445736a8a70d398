//! Rendering module
//!
//! The simulation never draws directly. [`draw_scene`] describes a frame
//! through the [`RenderSurface`] trait; [`DrawList`] records it and
//! [`RenderState`] uploads the recorded rectangles to WebGPU.

pub mod draw_list;
pub mod layout;
pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use draw_list::{DrawCommand, DrawList, TextItem};
pub use layout::Letterbox;
pub use pipeline::RenderState;
pub use scene::{draw_scene, messages};

use glam::Vec2;

/// RGBA color, components in 0-1
pub type Color = [f32; 4];

/// Primitive draw operations the scene is expressed in.
///
/// Coordinates are logical field units, origin top-left, y down.
pub trait RenderSurface {
    /// Fill the whole field with one color
    fn clear(&mut self, color: Color);

    /// Fill an axis-aligned rectangle
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color);

    /// Draw a line of text with its top-left corner at `pos`
    fn text(&mut self, text: &str, pos: Vec2);
}
