use super::{Color, SCREEN_HEIGHT, SCREEN_WIDTH};

// ============================================================================
// Utility Functions
// ============================================================================

/// Write ABGR pixel to slice (RGBA8888 little-endian byte order)
#[inline]
fn write_pixel(dest: &mut [u8], c: Color) {
    dest[0] = 255; // A
    dest[1] = c.b;
    dest[2] = c.g;
    dest[3] = c.r;
}

#[inline]
fn read_pixel(src: &[u8]) -> Color {
    Color::new(src[3], src[2], src[1])
}

// ============================================================================
// PixelBuffer
// ============================================================================

/// RGBA8888 system buffer holding the next frame.
///
/// Every visual element of the game is painted into this buffer on the CPU;
/// the presenter uploads it to a streaming texture once per frame.
pub struct PixelBuffer {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl PixelBuffer {
    /// Create a buffer at the reference resolution (1600x900)
    pub fn new() -> Self {
        Self::with_size(SCREEN_WIDTH, SCREEN_HEIGHT)
    }

    /// Create a buffer with custom resolution, cleared to black
    pub fn with_size(width: u32, height: u32) -> Self {
        let mut buffer = Self {
            pixels: vec![0; (width * height * 4) as usize],
            width,
            height,
        };
        buffer.clear(Color::BLACK);
        buffer
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Check if coordinates are within bounds
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }

    /// Calculate byte offset for pixel at (x, y)
    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        ((y * self.width + x) * 4) as usize
    }

    /// Clear to a solid color
    pub fn clear(&mut self, c: Color) {
        for chunk in self.pixels.chunks_exact_mut(4) {
            write_pixel(chunk, c);
        }
    }

    /// Set a single pixel. Out-of-range writes are dropped.
    #[inline]
    pub fn put_pixel(&mut self, x: i32, y: i32, c: Color) {
        if self.in_bounds(x, y) {
            let idx = self.pixel_index(x as u32, y as u32);
            write_pixel(&mut self.pixels[idx..idx + 4], c);
        }
    }

    /// Blend `c` over the existing pixel with opacity `alpha`.
    ///
    /// Alpha is taken as-is; see [`Color::blend`] for what happens outside [0, 1].
    #[inline]
    pub fn put_pixel_with_alpha_blend(&mut self, x: i32, y: i32, c: Color, alpha: f32) {
        if self.in_bounds(x, y) {
            let idx = self.pixel_index(x as u32, y as u32);
            let px = &mut self.pixels[idx..idx + 4];
            let blended = read_pixel(px).blend(c, alpha);
            write_pixel(px, blended);
        }
    }

    /// Read a pixel from the buffer (bounds checked)
    /// Returns None if coordinates are out of bounds
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        if self.in_bounds(x, y) {
            let idx = self.pixel_index(x as u32, y as u32);
            Some(read_pixel(&self.pixels[idx..idx + 4]))
        } else {
            None
        }
    }

    /// Blend a color over the whole buffer (fades, menu backdrops)
    pub fn fill(&mut self, c: Color, alpha: f32) {
        if alpha <= 0.0 {
            return;
        }
        for chunk in self.pixels.chunks_exact_mut(4) {
            let blended = read_pixel(chunk).blend(c, alpha);
            write_pixel(chunk, blended);
        }
    }

    /// Get raw pixel data for texture upload
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Bytes per row, as the texture upload wants it
    #[inline]
    pub fn pitch(&self) -> usize {
        (self.width * 4) as usize
    }
}

impl Default for PixelBuffer {
    fn default() -> Self {
        Self::new()
    }
}
