/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const GRAY: Self = Self::new(0x80, 0x80, 0x80);
    pub const LIGHT_GRAY: Self = Self::new(0xD3, 0xD3, 0xD3);
    pub const RED: Self = Self::new(255, 0, 0);
    pub const GREEN: Self = Self::new(0, 255, 0);
    pub const BLUE: Self = Self::new(0, 0, 255);
    pub const YELLOW: Self = Self::new(255, 255, 0);
    pub const CYAN: Self = Self::new(0, 255, 255);
    pub const MAGENTA: Self = Self::new(255, 0, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear blend toward `incoming`: `self * (1 - a) + incoming * a`, per channel.
    ///
    /// Alpha is not clamped. Values outside [0, 1] truncate to an integer and
    /// wrap into the 8-bit channel instead of saturating.
    #[inline]
    pub fn blend(self, incoming: Color, alpha: f32) -> Self {
        Self {
            r: blend_channel(self.r, incoming.r, alpha),
            g: blend_channel(self.g, incoming.g, alpha),
            b: blend_channel(self.b, incoming.b, alpha),
        }
    }

    /// Scale all channels by `factor` (clamped to [0, 1])
    #[inline]
    pub fn scaled(self, factor: f32) -> Self {
        let f = factor.clamp(0.0, 1.0);
        Self {
            r: (self.r as f32 * f) as u8,
            g: (self.g as f32 * f) as u8,
            b: (self.b as f32 * f) as u8,
        }
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

#[inline]
fn blend_channel(existing: u8, incoming: u8, alpha: f32) -> u8 {
    let value = existing as f32 * (1.0 - alpha) + incoming as f32 * alpha;
    // f32 -> u8 saturates in Rust; go through i32 to keep the 8-bit wrap
    value as i32 as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_alpha_zero_keeps_existing() {
        let existing = Color::new(12, 200, 77);
        for incoming in [Color::WHITE, Color::BLACK, Color::new(1, 2, 3)] {
            assert_eq!(existing.blend(incoming, 0.0), existing);
        }
    }

    #[test]
    fn test_blend_alpha_one_is_incoming() {
        let existing = Color::new(12, 200, 77);
        for incoming in [Color::WHITE, Color::BLACK, Color::new(1, 2, 3)] {
            assert_eq!(existing.blend(incoming, 1.0), incoming);
        }
    }

    #[test]
    fn test_blend_truncates() {
        // 100 * 0.5 + 201 * 0.5 = 150.5 -> 150
        let c = Color::new(100, 100, 100).blend(Color::new(201, 201, 201), 0.5);
        assert_eq!(c, Color::new(150, 150, 150));
    }

    #[test]
    fn test_blend_out_of_range_alpha_wraps() {
        // 0 * -1 + 255 * 2 = 510 -> wraps to 254
        let c = Color::BLACK.blend(Color::WHITE, 2.0);
        assert_eq!(c.r, (510_i32) as u8);
    }

    #[test]
    fn test_scaled() {
        assert_eq!(Color::WHITE.scaled(0.0), Color::BLACK);
        assert_eq!(Color::new(200, 100, 50).scaled(0.5), Color::new(100, 50, 25));
    }
}
