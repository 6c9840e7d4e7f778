/// First-person camera with voxel collision
/// Position is the eye; the body hangs 1.6 units below it
use crate::voxel::SolidityQuery;
use glam::{Mat4, Vec3};

/// Half-width of the square player footprint
pub const PLAYER_RADIUS: f32 = 0.4;
pub const PLAYER_HEIGHT: f32 = 1.8;
/// Eye to foot sample height
pub const EYE_TO_FEET: f32 = 1.6;
/// Eye to head sample height
pub const EYE_TO_HEAD: f32 = 0.1;
/// Pitch limit, just short of straight up/down
pub const MAX_PITCH: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

pub const DEFAULT_SPAWN: Vec3 = Vec3::new(16.0, 40.0, 16.0);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    position: Vec3,
    /// x = pitch, y = yaw, z = roll (radians)
    rotation: Vec3,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(DEFAULT_SPAWN)
    }
}

impl Camera {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            rotation: Vec3::ZERO,
        }
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[inline]
    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    #[inline]
    pub fn pitch(&self) -> f32 {
        self.rotation.x
    }

    #[inline]
    pub fn yaw(&self) -> f32 {
        self.rotation.y
    }

    #[inline]
    pub fn roll(&self) -> f32 {
        self.rotation.z
    }

    /// Accumulate a rotation delta. Pitch is clamped to +-MAX_PITCH,
    /// yaw and roll are left unbounded.
    pub fn rotate(&mut self, d_pitch: f32, d_yaw: f32, d_roll: f32) {
        self.rotation += Vec3::new(d_pitch, d_yaw, d_roll);
        self.rotation.x = self.rotation.x.clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Move one axis at a time in X, Z, Y order, committing each axis only
    /// if the body does not collide at the candidate position. Blocked axes
    /// are dropped while the others proceed, which gives wall sliding.
    pub fn move_with_collision<W: SolidityQuery + ?Sized>(
        &mut self,
        dx: f32,
        dy: f32,
        dz: f32,
        world: &W,
    ) {
        if dx != 0.0 {
            let next = Vec3::new(self.position.x + dx, self.position.y, self.position.z);
            if !Self::collides_at(world, next) {
                self.position = next;
            }
        }

        if dz != 0.0 {
            let next = Vec3::new(self.position.x, self.position.y, self.position.z + dz);
            if !Self::collides_at(world, next) {
                self.position = next;
            }
        }

        if dy != 0.0 {
            let next = Vec3::new(self.position.x, self.position.y + dy, self.position.z);
            if !Self::collides_at(world, next) {
                self.position = next;
            }
        }
    }

    /// Body collision for an eye at `eye`.
    ///
    /// Samples the four footprint corners at foot height and again at head
    /// height. This is a point-sampled stand-in for a box sweep: fast moves can
    /// tunnel through one-block walls and geometry between samples is missed.
    pub fn collides_at<W: SolidityQuery + ?Sized>(world: &W, eye: Vec3) -> bool {
        Self::body_sample_points(eye)
            .iter()
            .any(|p| world.is_solid(p.x, p.y, p.z))
    }

    /// The eight collision sample points, foot layer first
    pub fn body_sample_points(eye: Vec3) -> [Vec3; 8] {
        let r = PLAYER_RADIUS;
        let foot = eye.y - EYE_TO_FEET;
        let head = eye.y - EYE_TO_HEAD;
        [
            Vec3::new(eye.x - r, foot, eye.z - r),
            Vec3::new(eye.x + r, foot, eye.z - r),
            Vec3::new(eye.x - r, foot, eye.z + r),
            Vec3::new(eye.x + r, foot, eye.z + r),
            Vec3::new(eye.x - r, head, eye.z - r),
            Vec3::new(eye.x + r, head, eye.z - r),
            Vec3::new(eye.x - r, head, eye.z + r),
            Vec3::new(eye.x + r, head, eye.z + r),
        ]
    }

    /// World-to-view transform: rotX(-pitch) * rotY(-yaw) * translate(-position).
    /// Roll is not applied.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_x(-self.rotation.x)
            * Mat4::from_rotation_y(-self.rotation.y)
            * Mat4::from_translation(-self.position)
    }

    /// Horizontal forward direction (yaw only); yaw 0 looks down -Z
    #[inline]
    pub fn forward_flat(&self) -> Vec3 {
        let (sin, cos) = self.rotation.y.sin_cos();
        Vec3::new(-sin, 0.0, -cos)
    }

    /// Horizontal right direction (yaw only)
    #[inline]
    pub fn right_flat(&self) -> Vec3 {
        let (sin, cos) = self.rotation.y.sin_cos();
        Vec3::new(cos, 0.0, -sin)
    }
}

/// Camera controller - turns held keys and pointer motion into per-update
/// movement and rotation deltas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraController {
    pub forward_pressed: bool,
    pub backward_pressed: bool,
    pub left_pressed: bool,
    pub right_pressed: bool,
    pub up_pressed: bool,
    pub down_pressed: bool,

    /// World units per update
    pub move_speed: f32,
    /// Radians of yaw per pointer unit
    pub sensitivity_x: f32,
    /// Radians of pitch per pointer unit
    pub sensitivity_y: f32,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(0.15, 0.0010, 0.0005)
    }
}

impl CameraController {
    pub fn new(move_speed: f32, sensitivity_x: f32, sensitivity_y: f32) -> Self {
        Self {
            forward_pressed: false,
            backward_pressed: false,
            left_pressed: false,
            right_pressed: false,
            up_pressed: false,
            down_pressed: false,
            move_speed,
            sensitivity_x,
            sensitivity_y,
        }
    }

    /// World-space movement delta for this update, relative to the camera's yaw
    pub fn movement_delta(&self, camera: &Camera) -> Vec3 {
        let forward = camera.forward_flat();
        let right = camera.right_flat();
        let mut delta = Vec3::ZERO;

        if self.forward_pressed {
            delta += forward * self.move_speed;
        }
        if self.backward_pressed {
            delta -= forward * self.move_speed;
        }
        if self.right_pressed {
            delta += right * self.move_speed;
        }
        if self.left_pressed {
            delta -= right * self.move_speed;
        }
        if self.up_pressed {
            delta.y += self.move_speed;
        }
        if self.down_pressed {
            delta.y -= self.move_speed;
        }

        delta
    }

    /// (pitch, yaw, roll) delta for a raw pointer movement. Moving right turns
    /// right (negative yaw); moving down looks down (negative pitch).
    pub fn rotation_delta(&self, pointer_dx: f32, pointer_dy: f32) -> Vec3 {
        Vec3::new(
            -pointer_dy * self.sensitivity_y,
            -pointer_dx * self.sensitivity_x,
            0.0,
        )
    }
}
