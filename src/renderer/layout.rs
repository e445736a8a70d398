//! Fixed logical resolution mapped onto the physical surface

/// Aspect-preserving fit of the logical field inside a physical surface.
///
/// The field is scaled uniformly and centered; leftover space becomes
/// letterbox bars.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Letterbox {
    /// Left edge of the field in physical pixels
    pub x: f32,
    /// Top edge of the field in physical pixels
    pub y: f32,
    /// Physical pixels per logical unit
    pub scale: f32,
    pub width: f32,
    pub height: f32,
}

impl Letterbox {
    pub fn fit(surface_width: f32, surface_height: f32, field_width: f32, field_height: f32) -> Self {
        if surface_width <= 0.0 || surface_height <= 0.0 || field_width <= 0.0 || field_height <= 0.0 {
            return Self {
                x: 0.0,
                y: 0.0,
                scale: 0.0,
                width: 0.0,
                height: 0.0,
            };
        }

        let scale = (surface_width / field_width).min(surface_height / field_height);
        let width = field_width * scale;
        let height = field_height * scale;
        Self {
            x: (surface_width - width) / 2.0,
            y: (surface_height - height) / 2.0,
            scale,
            width,
            height,
        }
    }

    /// Map a logical point to physical pixels
    pub fn to_physical(&self, x: f32, y: f32) -> (f32, f32) {
        (self.x + x * self.scale, self.y + y * self.scale)
    }

    pub fn is_empty(&self) -> bool {
        self.width < 1.0 || self.height < 1.0
    }
}
