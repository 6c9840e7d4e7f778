/// Core voxel data: block types, chunks, terrain synthesis
pub mod block_type;
pub mod chunk;
pub mod noise;
pub mod terrain;

pub use block_type::{block_color, BlockType};
pub use chunk::{Chunk, CHUNK_HEIGHT, CHUNK_HEIGHT_I32, CHUNK_SIZE, CHUNK_SIZE_I32, CHUNK_VOLUME};
pub use noise::NoiseGenerator;
pub use terrain::{TerrainConfig, TerrainGenerator};

/// Read-only occupancy lookup in world space.
///
/// Shared by mesh face culling and camera collision. Implementations must be
/// side-effect free so they can be queried from several threads at once.
pub trait SolidityQuery {
    /// Is the block containing integer cell (x, y, z) occupied?
    fn is_solid_block(&self, x: i32, y: i32, z: i32) -> bool;

    /// Floors each coordinate to its block cell.
    #[inline]
    fn is_solid(&self, x: f32, y: f32, z: f32) -> bool {
        self.is_solid_block(x.floor() as i32, y.floor() as i32, z.floor() as i32)
    }
}

impl<F> SolidityQuery for F
where
    F: Fn(i32, i32, i32) -> bool,
{
    #[inline]
    fn is_solid_block(&self, x: i32, y: i32, z: i32) -> bool {
        self(x, y, z)
    }
}
