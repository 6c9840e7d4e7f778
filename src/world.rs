/// Fixed-extent voxel world: a square grid of chunks built once at startup.
///
/// Construction runs in two phases: every chunk's block data is generated
/// first, then every chunk is meshed against the finished world so border
/// faces see their neighbours. No partially meshed world is ever returned.
use crate::count_call;
use crate::meshing::{self, RenderFace};
use crate::perf_scope;
use crate::voxel::{
    BlockType, Chunk, SolidityQuery, TerrainConfig, TerrainGenerator, CHUNK_HEIGHT_I32,
    CHUNK_SIZE_I32,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use thiserror::Error;

/// World configuration parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Extent of the world in chunks along X and Z
    pub size_in_chunks: usize,
    pub terrain: TerrainConfig,
    /// Run each construction phase across the rayon pool.
    /// The phases themselves stay strictly ordered.
    pub parallel_meshing: bool,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            size_in_chunks: 8,
            terrain: TerrainConfig::default(),
            parallel_meshing: false,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorldError {
    #[error("world must be at least one chunk wide")]
    ZeroSize,
    #[error("chunk ({x}, {z}) lies outside a {size}x{size} world")]
    ChunkOutOfRange { x: i32, z: i32, size: usize },
    #[error("chunk ({x}, {z}) supplied more than once")]
    DuplicateChunk { x: i32, z: i32 },
    #[error("no chunk supplied for ({x}, {z})")]
    MissingChunk { x: i32, z: i32 },
}

pub struct World {
    size: usize,
    /// Row-major by chunk x: index = chunk_x * size + chunk_z.
    /// Doubles as the render iteration order.
    chunks: Vec<Chunk>,
    parallel_meshing: bool,
}

impl World {
    /// Generate terrain for every chunk, then mesh every chunk.
    pub fn new(config: WorldConfig) -> Self {
        let size = config.size_in_chunks.max(1);
        let terrain = TerrainGenerator::new(config.terrain.clone());

        let gen_start = Instant::now();
        let coords: Vec<(i32, i32)> = (0..size as i32)
            .flat_map(|x| (0..size as i32).map(move |z| (x, z)))
            .collect();

        let chunks: Vec<Chunk> = if config.parallel_meshing {
            coords
                .par_iter()
                .map(|&(x, z)| Chunk::generate(x, z, &terrain))
                .collect()
        } else {
            coords
                .iter()
                .map(|&(x, z)| Chunk::generate(x, z, &terrain))
                .collect()
        };
        log::info!(
            "Generated {} chunks in {:.2}ms (seed {})",
            chunks.len(),
            gen_start.elapsed().as_secs_f64() * 1000.0,
            terrain.config().seed
        );

        let mut world = Self {
            size,
            chunks,
            parallel_meshing: config.parallel_meshing,
        };
        world.rebuild_meshes();
        world
    }

    /// Assemble a world from hand-built chunks, then mesh it.
    /// Every cell of the `size` x `size` grid must be supplied exactly once.
    pub fn from_chunks(size: usize, chunks: Vec<Chunk>) -> Result<Self, WorldError> {
        if size == 0 {
            return Err(WorldError::ZeroSize);
        }

        let mut slots: Vec<Option<Chunk>> = (0..size * size).map(|_| None).collect();
        for chunk in chunks {
            let (x, z) = (chunk.chunk_x(), chunk.chunk_z());
            if x < 0 || z < 0 || x as usize >= size || z as usize >= size {
                return Err(WorldError::ChunkOutOfRange { x, z, size });
            }
            let slot = &mut slots[x as usize * size + z as usize];
            if slot.is_some() {
                return Err(WorldError::DuplicateChunk { x, z });
            }
            *slot = Some(chunk);
        }

        let mut ordered = Vec::with_capacity(size * size);
        for (i, slot) in slots.into_iter().enumerate() {
            match slot {
                Some(chunk) => ordered.push(chunk),
                None => {
                    return Err(WorldError::MissingChunk {
                        x: (i / size) as i32,
                        z: (i % size) as i32,
                    })
                }
            }
        }

        let mut world = Self {
            size,
            chunks: ordered,
            parallel_meshing: false,
        };
        world.rebuild_meshes();
        Ok(world)
    }

    /// Re-extract every chunk mesh against the current block data.
    pub fn rebuild_meshes(&mut self) {
        perf_scope!("world_rebuild_meshes");
        let start = Instant::now();

        let meshes: Vec<Vec<RenderFace>> = {
            let world: &World = self;
            if self.parallel_meshing {
                world
                    .chunks
                    .par_iter()
                    .map(|chunk| meshing::build_mesh(chunk, world))
                    .collect()
            } else {
                world
                    .chunks
                    .iter()
                    .map(|chunk| meshing::build_mesh(chunk, world))
                    .collect()
            }
        };

        for (chunk, mesh) in self.chunks.iter_mut().zip(meshes) {
            chunk.replace_mesh(mesh);
        }

        log::info!(
            "Meshed {} chunks ({} faces) in {:.2}ms",
            self.chunks.len(),
            self.face_count(),
            start.elapsed().as_secs_f64() * 1000.0
        );
    }

    /// Per-frame hook. The world is static, so nothing happens yet.
    pub fn update(&mut self) {}

    /// Chunks in render order
    #[inline]
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    #[inline]
    pub fn chunk(&self, chunk_x: i32, chunk_z: i32) -> Option<&Chunk> {
        if chunk_x < 0 || chunk_z < 0 {
            return None;
        }
        let (cx, cz) = (chunk_x as usize, chunk_z as usize);
        if cx >= self.size || cz >= self.size {
            return None;
        }
        self.chunks.get(cx * self.size + cz)
    }

    #[inline]
    fn chunk_mut(&mut self, chunk_x: i32, chunk_z: i32) -> Option<&mut Chunk> {
        if chunk_x < 0 || chunk_z < 0 {
            return None;
        }
        let (cx, cz) = (chunk_x as usize, chunk_z as usize);
        if cx >= self.size || cz >= self.size {
            return None;
        }
        self.chunks.get_mut(cx * self.size + cz)
    }

    /// Extent in chunks along X and Z
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    pub fn face_count(&self) -> usize {
        self.chunks.iter().map(|c| c.mesh().len()).sum()
    }

    /// Is the block containing world point (x, y, z) solid?
    #[inline]
    pub fn is_solid(&self, x: f32, y: f32, z: f32) -> bool {
        SolidityQuery::is_solid(self, x, y, z)
    }

    /// Block at an integer world cell, None outside the world
    pub fn block_at(&self, x: i32, y: i32, z: i32) -> Option<BlockType> {
        let (cx, cz, lx, lz) = world_to_chunk_local(x, z)?;
        if !(0..CHUNK_HEIGHT_I32).contains(&y) {
            return None;
        }
        self.chunk(cx, cz)?.get_block(lx, y, lz)
    }

    /// Change a block's data. Existing meshes keep showing the old state
    /// until `rebuild_meshes` runs. Returns false outside the world.
    pub fn set_block(&mut self, x: i32, y: i32, z: i32, block: BlockType) -> bool {
        let Some((cx, cz, lx, lz)) = world_to_chunk_local(x, z) else {
            return false;
        };
        if !(0..CHUNK_HEIGHT_I32).contains(&y) {
            return false;
        }
        match self.chunk_mut(cx, cz) {
            Some(chunk) => {
                chunk.set_block(lx as usize, y as usize, lz as usize, block);
                true
            }
            None => false,
        }
    }
}

impl SolidityQuery for World {
    /// Outside the world (below 0, at or above the chunk height, negative
    /// x/z, past the last chunk) nothing is solid.
    #[inline]
    fn is_solid_block(&self, x: i32, y: i32, z: i32) -> bool {
        count_call!(crate::perf::FUNCTION_COUNTERS.is_solid_queries);
        self.block_at(x, y, z).is_some_and(BlockType::is_active)
    }
}

/// Split a world column into (chunk_x, chunk_z, local_x, local_z).
/// Negative coordinates have no chunk.
#[inline]
pub fn world_to_chunk_local(x: i32, z: i32) -> Option<(i32, i32, i32, i32)> {
    if x < 0 || z < 0 {
        return None;
    }
    Some((
        x / CHUNK_SIZE_I32,
        z / CHUNK_SIZE_I32,
        x % CHUNK_SIZE_I32,
        z % CHUNK_SIZE_I32,
    ))
}
