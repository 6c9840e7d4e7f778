/// Startup configuration, optionally loaded from a TOML file.
/// Every field has a default, so a partial file (or none) is valid.
use crate::camera::{CameraController, DEFAULT_SPAWN};
use crate::rendering::renderer::{
    ProjectionParams, DEFAULT_FAR, DEFAULT_FOV_DEGREES, DEFAULT_NEAR, DEFAULT_SKY_COLOR,
};
use crate::rendering::shading::{DEFAULT_LIGHT_DIR, DEFAULT_MIN_BRIGHTNESS};
use crate::rendering::ShadingConfig;
use crate::voxel::TerrainConfig;
use crate::world::WorldConfig;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub screen_width: usize,
    pub screen_height: usize,
    pub target_fps: u32,

    pub fov_degrees: f32,
    pub near_plane: f32,
    pub far_plane: f32,

    /// World units per update
    pub move_speed: f32,
    pub mouse_sensitivity_x: f32,
    pub mouse_sensitivity_y: f32,

    pub world_size_in_chunks: usize,
    pub parallel_meshing: bool,

    pub min_brightness: f32,
    pub light_direction: [f32; 3],
    pub sky_color: u32,

    pub spawn_position: [f32; 3],

    pub terrain: TerrainConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        let controller = CameraController::default();
        Self {
            screen_width: 1280,
            screen_height: 720,
            target_fps: 60,
            fov_degrees: DEFAULT_FOV_DEGREES,
            near_plane: DEFAULT_NEAR,
            far_plane: DEFAULT_FAR,
            move_speed: controller.move_speed,
            mouse_sensitivity_x: controller.sensitivity_x,
            mouse_sensitivity_y: controller.sensitivity_y,
            world_size_in_chunks: 8,
            parallel_meshing: false,
            min_brightness: DEFAULT_MIN_BRIGHTNESS,
            light_direction: DEFAULT_LIGHT_DIR.to_array(),
            sky_color: DEFAULT_SKY_COLOR,
            spawn_position: DEFAULT_SPAWN.to_array(),
            terrain: TerrainConfig::default(),
        }
    }
}

impl ViewerConfig {
    /// Read and validate a TOML config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| -> Result<(), ConfigError> { Err(ConfigError::Invalid(msg)) };

        if self.screen_width == 0 || self.screen_height == 0 {
            return invalid(format!(
                "screen size {}x{} must be non-zero",
                self.screen_width, self.screen_height
            ));
        }
        if self.target_fps == 0 {
            return invalid("target_fps must be non-zero".into());
        }
        if self.world_size_in_chunks == 0 {
            return invalid("world_size_in_chunks must be non-zero".into());
        }
        if !(self.near_plane > 0.0) {
            return invalid(format!("near_plane {} must be positive", self.near_plane));
        }
        if !(self.far_plane > self.near_plane) {
            return invalid(format!(
                "far_plane {} must exceed near_plane {}",
                self.far_plane, self.near_plane
            ));
        }
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return invalid(format!("fov_degrees {} must be in (0, 180)", self.fov_degrees));
        }
        if Vec3::from_array(self.light_direction).length_squared() == 0.0 {
            return invalid("light_direction must be non-zero".into());
        }
        Ok(())
    }

    #[inline]
    pub fn spawn(&self) -> Vec3 {
        Vec3::from_array(self.spawn_position)
    }

    pub fn world_config(&self) -> WorldConfig {
        WorldConfig {
            size_in_chunks: self.world_size_in_chunks,
            terrain: self.terrain.clone(),
            parallel_meshing: self.parallel_meshing,
        }
    }

    pub fn projection_params(&self) -> ProjectionParams {
        ProjectionParams {
            fov_y_degrees: self.fov_degrees,
            near: self.near_plane,
            far: self.far_plane,
        }
    }

    pub fn shading_config(&self) -> ShadingConfig {
        ShadingConfig::new(Vec3::from_array(self.light_direction), self.min_brightness)
    }

    pub fn camera_controller(&self) -> CameraController {
        CameraController::new(
            self.move_speed,
            self.mouse_sensitivity_x,
            self.mouse_sensitivity_y,
        )
    }

    /// Time budget for one frame at the target rate
    pub fn frame_duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f64(1.0 / self.target_fps.max(1) as f64)
    }
}
