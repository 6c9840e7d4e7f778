/// Voxel Viewer - procedurally generated voxel terrain drawn by a software rasterizer
/// Built from small, separately benchmarkable components
pub mod camera;
pub mod config;
pub mod math;
pub mod meshing;
pub mod perf;
pub mod rendering;
pub mod viewer;
pub mod voxel;
pub mod world;

pub use camera::{Camera, CameraController};
pub use config::{ConfigError, ViewerConfig};
pub use math::Transform;
pub use meshing::{FaceDir, RenderFace};
pub use perf::{CounterSnapshot, FunctionCounters, FUNCTION_COUNTERS};
pub use rendering::{DepthBuffer, FrameStats, Framebuffer, Rasterizer, Renderer, ShadingConfig};
pub use viewer::{FrameInput, Viewer};
pub use voxel::{BlockType, Chunk, SolidityQuery, CHUNK_HEIGHT, CHUNK_SIZE, CHUNK_VOLUME};
pub use world::{World, WorldConfig, WorldError};
