/// Per-frame rendering pipeline:
/// clear -> (chunk -> face -> project -> cull -> rasterize) -> present
use super::depth_buffer::DepthBuffer;
use super::framebuffer::Framebuffer;
use super::rasterizer::{Rasterizer, ScreenVertex, TriangleOutcome};
use super::shading::ShadingConfig;
use crate::camera::Camera;
use crate::math::{perspective, transform_point};
use crate::meshing::RenderFace;
use crate::world::World;
use crate::{count_add, count_call, perf_scope};
use glam::Mat4;

pub const DEFAULT_FOV_DEGREES: f32 = 70.0;
pub const DEFAULT_NEAR: f32 = 0.1;
pub const DEFAULT_FAR: f32 = 1000.0;
pub const DEFAULT_SKY_COLOR: u32 = 0xFF87CEEB;

/// Projection parameters fixed at construction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionParams {
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for ProjectionParams {
    fn default() -> Self {
        Self {
            fov_y_degrees: DEFAULT_FOV_DEGREES,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
        }
    }
}

impl ProjectionParams {
    pub fn matrix(&self, width: usize, height: usize) -> Mat4 {
        let aspect = width.max(1) as f32 / height.max(1) as f32;
        perspective(self.fov_y_degrees.to_radians(), aspect, self.near, self.far)
    }
}

/// What one frame did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub faces_submitted: usize,
    /// Faces dropped because a vertex fell outside the near/far range
    pub faces_clip_rejected: usize,
    pub triangles_culled: usize,
    pub triangles_rasterized: usize,
    pub pixels_written: usize,
}

impl FrameStats {
    fn record(&mut self, outcome: TriangleOutcome) {
        match outcome {
            TriangleOutcome::BackFacing => self.triangles_culled += 1,
            TriangleOutcome::Degenerate => {}
            TriangleOutcome::Rasterized { pixels_written } => {
                self.triangles_rasterized += 1;
                self.pixels_written += pixels_written;
            }
        }
    }
}

pub struct Renderer {
    width: usize,
    height: usize,
    projection_params: ProjectionParams,
    projection: Mat4,
    framebuffer: Framebuffer,
    depth_buffer: DepthBuffer,
    pub rasterizer: Rasterizer,
    pub shading: ShadingConfig,
    pub sky_color: u32,
}

impl Renderer {
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_settings(
            width,
            height,
            ProjectionParams::default(),
            ShadingConfig::default(),
            DEFAULT_SKY_COLOR,
        )
    }

    pub fn with_settings(
        width: usize,
        height: usize,
        projection_params: ProjectionParams,
        shading: ShadingConfig,
        sky_color: u32,
    ) -> Self {
        log::info!(
            "Renderer {}x{} (fov {}°, near {}, far {})",
            width,
            height,
            projection_params.fov_y_degrees,
            projection_params.near,
            projection_params.far
        );
        Self {
            width,
            height,
            projection: projection_params.matrix(width, height),
            projection_params,
            framebuffer: Framebuffer::new(width, height),
            depth_buffer: DepthBuffer::new(width, height),
            rasterizer: Rasterizer::new(),
            shading,
            sky_color,
        }
    }

    /// Render every chunk mesh of `world` as seen from `camera`.
    /// The color and depth buffers are rewritten in full.
    pub fn render(&mut self, world: &World, camera: &Camera) -> FrameStats {
        perf_scope!("render");
        self.clear();

        let mvp = self.projection * camera.view_matrix();
        let mut stats = FrameStats::default();
        for chunk in world.chunks() {
            self.draw_faces(chunk.mesh(), &mvp, &mut stats);
        }

        log::trace!(
            "frame: {} faces, {} clip-rejected, {} tris culled, {} tris drawn, {} px",
            stats.faces_submitted,
            stats.faces_clip_rejected,
            stats.triangles_culled,
            stats.triangles_rasterized,
            stats.pixels_written
        );
        stats
    }

    /// Render a bare face list with an explicit view matrix
    pub fn render_faces(&mut self, faces: &[RenderFace], view: &Mat4) -> FrameStats {
        self.clear();
        let mvp = self.projection * *view;
        let mut stats = FrameStats::default();
        self.draw_faces(faces, &mvp, &mut stats);
        stats
    }

    fn clear(&mut self) {
        self.framebuffer.clear(self.sky_color);
        self.depth_buffer.clear();
    }

    fn draw_faces(&mut self, faces: &[RenderFace], mvp: &Mat4, stats: &mut FrameStats) {
        count_add!(crate::perf::FUNCTION_COUNTERS.faces_submitted, faces.len() as u64);
        stats.faces_submitted += faces.len();

        for face in faces {
            let Some(v) = self.project_face(face, mvp) else {
                count_call!(crate::perf::FUNCTION_COUNTERS.faces_clip_rejected);
                stats.faces_clip_rejected += 1;
                continue;
            };

            let color = self.shading.shade_face(face.color(), face.normal());
            let first = self.rasterizer.draw_triangle(
                v[0],
                v[1],
                v[2],
                color,
                &mut self.framebuffer,
                &mut self.depth_buffer,
            );
            let second = self.rasterizer.draw_triangle(
                v[2],
                v[3],
                v[0],
                color,
                &mut self.framebuffer,
                &mut self.depth_buffer,
            );
            stats.record(first);
            stats.record(second);
        }
    }

    /// Project a face's four corners to screen space.
    /// Returns None if any corner's NDC depth lies outside [-1, 1]; the whole
    /// face is dropped rather than clipped.
    pub fn project_face(&self, face: &RenderFace, mvp: &Mat4) -> Option<[ScreenVertex; 4]> {
        let w = self.width as f32;
        let h = self.height as f32;
        let mut out = [ScreenVertex::new(0.0, 0.0, 0.0); 4];
        for (slot, &corner) in out.iter_mut().zip(face.vertices()) {
            let ndc = transform_point(mvp, corner);
            if !(-1.0..=1.0).contains(&ndc.z) {
                return None;
            }
            *slot = ScreenVertex::from_ndc(ndc, w, h);
        }
        Some(out)
    }

    /// Finished frame, row-major ARGB
    #[inline]
    pub fn pixels(&self) -> &[u32] {
        self.framebuffer.color_buffer_slice()
    }

    #[inline]
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    #[inline]
    pub fn depth_buffer(&self) -> &DepthBuffer {
        &self.depth_buffer
    }

    #[inline]
    pub fn projection(&self) -> &Mat4 {
        &self.projection
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Resize both buffers and rebuild the projection for the new aspect
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.framebuffer.resize(width, height);
        self.depth_buffer.resize(width, height);
        self.projection = self.projection_params.matrix(width, height);
    }
}
