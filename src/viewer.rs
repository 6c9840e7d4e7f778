/// Facade driven once per frame by an external loop: `update` then `render`.
use crate::camera::Camera;
use crate::config::ViewerConfig;
use crate::rendering::{FrameStats, Renderer};
use crate::world::World;
use glam::Vec3;

/// Per-frame input, already resolved to world-space deltas
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// World-space movement for this update
    pub movement: Vec3,
    /// (pitch, yaw, roll) delta in radians
    pub rotation: Vec3,
}

pub struct Viewer {
    world: World,
    camera: Camera,
    renderer: Renderer,
    last_frame: FrameStats,
}

impl Viewer {
    /// Build the world (both construction phases), place the camera at the
    /// configured spawn and set up the renderer
    pub fn new(config: &ViewerConfig) -> Self {
        let world = World::new(config.world_config());
        let renderer = Renderer::with_settings(
            config.screen_width,
            config.screen_height,
            config.projection_params(),
            config.shading_config(),
            config.sky_color,
        );
        Self::from_parts(world, Camera::new(config.spawn()), renderer)
    }

    pub fn from_parts(world: World, camera: Camera, renderer: Renderer) -> Self {
        Self {
            world,
            camera,
            renderer,
            last_frame: FrameStats::default(),
        }
    }

    /// Apply rotation, then collision-constrained movement, then the world tick
    pub fn update(&mut self, input: FrameInput) {
        let r = input.rotation;
        if r != Vec3::ZERO {
            self.camera.rotate(r.x, r.y, r.z);
        }
        let m = input.movement;
        if m != Vec3::ZERO {
            self.camera.move_with_collision(m.x, m.y, m.z, &self.world);
        }
        self.world.update();
    }

    /// Draw the current frame and return its pixels (row-major ARGB)
    pub fn render(&mut self) -> &[u32] {
        self.last_frame = self.renderer.render(&self.world, &self.camera);
        self.renderer.pixels()
    }

    #[inline]
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for edits; call `World::rebuild_meshes` afterwards
    #[inline]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[inline]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    #[inline]
    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    #[inline]
    pub fn renderer_mut(&mut self) -> &mut Renderer {
        &mut self.renderer
    }

    /// Stats from the most recent `render`
    #[inline]
    pub fn last_frame_stats(&self) -> FrameStats {
        self.last_frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> ViewerConfig {
        ViewerConfig {
            screen_width: 32,
            screen_height: 24,
            world_size_in_chunks: 2,
            ..ViewerConfig::default()
        }
    }

    #[test]
    fn render_returns_full_frame() {
        let mut viewer = Viewer::new(&small_config());
        let len = viewer.render().len();
        assert_eq!(len, 32 * 24);
    }

    #[test]
    fn update_rotates_then_moves_in_the_air() {
        let mut viewer = Viewer::new(&small_config());
        let start = viewer.camera().position();
        viewer.update(FrameInput {
            movement: Vec3::new(0.0, 0.5, 0.0),
            rotation: Vec3::new(0.1, 0.2, 0.0),
        });
        assert_eq!(viewer.camera().position(), start + Vec3::new(0.0, 0.5, 0.0));
        assert_eq!(viewer.camera().pitch(), 0.1);
        assert_eq!(viewer.camera().yaw(), 0.2);
    }
}
