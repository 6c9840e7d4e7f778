/// Color buffer for software rendering
/// Pixels are packed ARGB (0xAARRGGBB), row-major from the top-left corner,
/// which is the layout softbuffer presents directly.
use crate::count_call;

pub struct Framebuffer {
    pub width: usize,
    pub height: usize,
    pub color_buffer: Vec<u32>,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            color_buffer: vec![0; width * height],
        }
    }

    /// Fill every pixel with `clear_color`
    pub fn clear(&mut self, clear_color: u32) {
        count_call!(crate::perf::FUNCTION_COUNTERS.frame_clears);
        self.color_buffer.fill(clear_color);
    }

    /// Write a pixel; coordinates outside the buffer are ignored
    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, color: u32) {
        if x < self.width && y < self.height {
            self.color_buffer[y * self.width + x] = color;
        }
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.color_buffer[y * self.width + x])
        } else {
            None
        }
    }

    /// Get color buffer as slice
    #[inline]
    pub fn color_buffer_slice(&self) -> &[u32] {
        &self.color_buffer
    }

    /// Resize framebuffer; contents are undefined until the next clear
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.color_buffer.resize(width * height, 0);
    }
}

/// Convert RGB to ARGB u32
#[inline]
pub const fn rgb_to_u32(r: u8, g: u8, b: u8) -> u32 {
    0xFF000000 | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Split ARGB u32 into [r, g, b]
#[inline]
pub const fn u32_to_rgb(color: u32) -> [u8; 3] {
    [(color >> 16) as u8, (color >> 8) as u8, color as u8]
}
