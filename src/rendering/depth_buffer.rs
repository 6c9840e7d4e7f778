/// Per-pixel nearest depth, reset every frame
use crate::count_call;

/// Depth of an empty pixel; any finite depth is nearer
pub const DEPTH_CLEAR: f32 = f32::INFINITY;

pub struct DepthBuffer {
    width: usize,
    height: usize,
    depth: Vec<f32>,
}

impl DepthBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            depth: vec![DEPTH_CLEAR; width * height],
        }
    }

    pub fn clear(&mut self) {
        self.depth.fill(DEPTH_CLEAR);
    }

    /// If `z` is nearer than the stored depth at (x, y), store it and return
    /// true. Coordinates outside the buffer always return false.
    #[inline]
    pub fn test_and_set(&mut self, x: i32, y: i32, z: f32) -> bool {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return false;
        }
        count_call!(crate::perf::FUNCTION_COUNTERS.depth_tests);

        let index = y as usize * self.width + x as usize;
        if z < self.depth[index] {
            self.depth[index] = z;
            count_call!(crate::perf::FUNCTION_COUNTERS.depth_tests_passed);
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn depth_at(&self, x: usize, y: usize) -> Option<f32> {
        if x < self.width && y < self.height {
            Some(self.depth[y * self.width + x])
        } else {
            None
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.depth.resize(width * height, DEPTH_CLEAR);
    }
}
