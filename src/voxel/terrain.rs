/// Height-map terrain: one noise sample per column, layered grass/dirt/stone.
use super::noise::NoiseGenerator;
use super::{BlockType, CHUNK_HEIGHT_I32};
use noise::NoiseFn;
use serde::{Deserialize, Serialize};

/// Layers of dirt directly under the grass block
pub const DIRT_DEPTH: i32 = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    pub seed: u64,
    /// Noise sampling frequency in 1/blocks
    pub frequency: f64,
    /// Height swing in blocks around `base_height`
    pub amplitude: f64,
    pub base_height: i32,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            seed: 12345,
            frequency: 0.05,
            amplitude: 8.0,
            base_height: 10,
        }
    }
}

pub struct TerrainGenerator {
    config: TerrainConfig,
    noise: NoiseGenerator,
}

impl TerrainGenerator {
    pub fn new(config: TerrainConfig) -> Self {
        let noise = NoiseGenerator::new(config.seed);
        Self { config, noise }
    }

    #[inline]
    pub fn config(&self) -> &TerrainConfig {
        &self.config
    }

    /// Surface (grass) height of a world column, clamped to [1, CHUNK_HEIGHT - 1].
    pub fn surface_height(&self, world_x: i32, world_z: i32) -> i32 {
        let freq = self.config.frequency;
        let n = self
            .noise
            .get([world_x as f64 * freq, world_z as f64 * freq]);
        let height = (self.config.base_height as f64 + n * self.config.amplitude) as i32;
        height.clamp(1, CHUNK_HEIGHT_I32 - 1)
    }

    /// Block for height `y` in a column whose surface is `surface`.
    #[inline]
    pub fn block_at_height(surface: i32, y: i32) -> BlockType {
        if y == surface {
            BlockType::Grass
        } else if y < surface && y >= surface - DIRT_DEPTH {
            BlockType::Dirt
        } else if y < surface {
            BlockType::Stone
        } else {
            BlockType::Air
        }
    }
}

impl Default for TerrainGenerator {
    fn default() -> Self {
        Self::new(TerrainConfig::default())
    }
}
