pub use kurbo::{Point, Rect, Vec2};

/// Premultiplied RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul(pub [u8; 4]);

impl Rgba8Premul {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self([0, 0, 0, 0]);

    /// Convert a straight-alpha RGBA8 color to premultiplied form.
    pub fn from_straight(rgba: [u8; 4]) -> Self {
        let a = rgba[3] as u16;
        if a == 0 {
            return Self::TRANSPARENT;
        }
        let mul = |c: u8| ((c as u16 * a + 127) / 255) as u8;
        Self([mul(rgba[0]), mul(rgba[1]), mul(rgba[2]), rgba[3]])
    }

    /// Alpha channel.
    pub fn alpha(self) -> u8 {
        self.0[3]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
