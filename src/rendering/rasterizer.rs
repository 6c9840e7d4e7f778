/// Triangle rasterizer: bounding-box scan with barycentric edge functions
/// and a per-pixel depth test.
///
/// Screen space has its origin at the top-left and y pointing down. A
/// triangle is front-facing when its signed area
/// `(v1 - v0) x (v2 - v0)` is positive, i.e. clockwise on screen.
use super::depth_buffer::DepthBuffer;
use super::framebuffer::Framebuffer;
use crate::count_call;
use glam::{Vec2, Vec3};

/// Vertex after projection: pixel coordinates plus NDC depth
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScreenVertex {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl ScreenVertex {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Map an NDC point to pixel coordinates (y flipped for a top-left origin)
    #[inline]
    pub fn from_ndc(ndc: Vec3, width: f32, height: f32) -> Self {
        Self {
            x: (ndc.x + 1.0) * 0.5 * width,
            y: (1.0 - ndc.y) * 0.5 * height,
            z: ndc.z,
        }
    }

    #[inline]
    fn xy(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// What happened to one submitted triangle
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TriangleOutcome {
    /// Wound the wrong way for the front-face convention
    BackFacing,
    /// Zero signed area
    Degenerate,
    /// Scanned; `pixels_written` passed the depth test
    Rasterized { pixels_written: usize },
}

impl TriangleOutcome {
    #[inline]
    pub fn pixels_written(self) -> usize {
        match self {
            TriangleOutcome::Rasterized { pixels_written } => pixels_written,
            _ => 0,
        }
    }
}

pub struct Rasterizer {
    /// If false, back-facing triangles are rasterized with flipped winding
    pub backface_culling: bool,
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Rasterizer {
    pub fn new() -> Self {
        Self {
            backface_culling: true,
        }
    }

    /// Fill one triangle with a flat color, depth-testing every covered pixel.
    /// Pixel centers sit at (x + 0.5, y + 0.5); a pixel is covered when all
    /// three barycentric weights are >= 0.
    pub fn draw_triangle(
        &self,
        v0: ScreenVertex,
        v1: ScreenVertex,
        v2: ScreenVertex,
        color: u32,
        framebuffer: &mut Framebuffer,
        depth: &mut DepthBuffer,
    ) -> TriangleOutcome {
        let (v0, v1, v2) = {
            let area = signed_area(v0.xy(), v1.xy(), v2.xy());
            if area == 0.0 {
                return TriangleOutcome::Degenerate;
            }
            if area < 0.0 {
                if self.backface_culling {
                    count_call!(crate::perf::FUNCTION_COUNTERS.triangles_culled);
                    return TriangleOutcome::BackFacing;
                }
                (v0, v2, v1)
            } else {
                (v0, v1, v2)
            }
        };
        count_call!(crate::perf::FUNCTION_COUNTERS.triangles_rasterized);

        let (p0, p1, p2) = (v0.xy(), v1.xy(), v2.xy());
        let area = signed_area(p0, p1, p2);
        let inv_area = 1.0 / area;

        let fb_w = framebuffer.width.min(depth.width()) as i32;
        let fb_h = framebuffer.height.min(depth.height()) as i32;
        if fb_w == 0 || fb_h == 0 {
            return TriangleOutcome::Rasterized { pixels_written: 0 };
        }

        // Bounding box, clipped to the screen
        let min_x = (p0.x.min(p1.x).min(p2.x).floor() as i32).max(0);
        let max_x = (p0.x.max(p1.x).max(p2.x).ceil() as i32).min(fb_w - 1);
        let min_y = (p0.y.min(p1.y).min(p2.y).floor() as i32).max(0);
        let max_y = (p0.y.max(p1.y).max(p2.y).ceil() as i32).min(fb_h - 1);
        if min_x > max_x || min_y > max_y {
            return TriangleOutcome::Rasterized { pixels_written: 0 };
        }

        // Edge function steps: w_i(p) = edge(a, b, p) changes by
        // -(b.y - a.y) per +1 in x and (b.x - a.x) per +1 in y
        let step_x = [-(p2.y - p1.y), -(p0.y - p2.y), -(p1.y - p0.y)];
        let step_y = [p2.x - p1.x, p0.x - p2.x, p1.x - p0.x];

        let start = Vec2::new(min_x as f32 + 0.5, min_y as f32 + 0.5);
        let mut row = [
            edge(p1, p2, start),
            edge(p2, p0, start),
            edge(p0, p1, start),
        ];

        let mut pixels_written = 0;
        for y in min_y..=max_y {
            let mut w = row;
            for x in min_x..=max_x {
                if w[0] >= 0.0 && w[1] >= 0.0 && w[2] >= 0.0 {
                    let b0 = w[0] * inv_area;
                    let b1 = w[1] * inv_area;
                    let b2 = w[2] * inv_area;
                    let z = b0 * v0.z + b1 * v1.z + b2 * v2.z;

                    if depth.test_and_set(x, y, z) {
                        framebuffer.set_pixel(x as usize, y as usize, color);
                        pixels_written += 1;
                    }
                }
                w[0] += step_x[0];
                w[1] += step_x[1];
                w[2] += step_x[2];
            }
            row[0] += step_y[0];
            row[1] += step_y[1];
            row[2] += step_y[2];
        }

        TriangleOutcome::Rasterized { pixels_written }
    }
}

/// Twice the signed area of (a, b, c); positive when clockwise on a y-down screen
#[inline]
pub fn signed_area(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Edge function of the directed edge a -> b at p.
/// For a front-facing triangle it is >= 0 on the interior side.
#[inline]
fn edge(a: Vec2, b: Vec2, p: Vec2) -> f32 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn targets(w: usize, h: usize) -> (Framebuffer, DepthBuffer) {
        let mut fb = Framebuffer::new(w, h);
        fb.clear(0);
        (fb, DepthBuffer::new(w, h))
    }

    #[test]
    fn edge_weights_sum_to_area() {
        let (a, b, c) = (Vec2::new(1.0, 1.0), Vec2::new(9.0, 2.0), Vec2::new(3.0, 8.0));
        let p = Vec2::new(4.0, 4.0);
        let sum = edge(b, c, p) + edge(c, a, p) + edge(a, b, p);
        assert!((sum - signed_area(a, b, c)).abs() < 1e-4);
        assert!(signed_area(a, b, c) > 0.0);
    }

    #[test]
    fn covers_pixels_inside_only() {
        let (mut fb, mut depth) = targets(8, 8);
        let r = Rasterizer::new();
        let out = r.draw_triangle(
            ScreenVertex::new(0.0, 0.0, 0.5),
            ScreenVertex::new(8.0, 0.0, 0.5),
            ScreenVertex::new(0.0, 8.0, 0.5),
            0xFFFF0000,
            &mut fb,
            &mut depth,
        );
        // Pixel centers with x + y + 1 <= 8 are inside
        assert_eq!(out.pixels_written(), 36);
        assert_eq!(fb.pixel(0, 0), Some(0xFFFF0000));
        assert_eq!(fb.pixel(7, 7), Some(0));
    }

    #[test]
    fn depth_is_interpolated() {
        let (mut fb, mut depth) = targets(16, 16);
        let r = Rasterizer::new();
        r.draw_triangle(
            ScreenVertex::new(0.0, 0.0, 0.0),
            ScreenVertex::new(16.0, 0.0, 1.0),
            ScreenVertex::new(0.0, 16.0, 0.0),
            0xFFFFFFFF,
            &mut fb,
            &mut depth,
        );
        // z follows x / 16 across the triangle
        let d = depth.depth_at(4, 1).unwrap();
        assert!((d - 4.5 / 16.0).abs() < 1e-5, "depth {d}");
    }
}
