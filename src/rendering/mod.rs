/// Software rasterization pipeline
pub mod depth_buffer;
pub mod framebuffer;
pub mod rasterizer;
pub mod renderer;
pub mod shading;

pub use depth_buffer::{DepthBuffer, DEPTH_CLEAR};
pub use framebuffer::{rgb_to_u32, u32_to_rgb, Framebuffer};
pub use rasterizer::{signed_area, Rasterizer, ScreenVertex, TriangleOutcome};
pub use renderer::{FrameStats, ProjectionParams, Renderer, DEFAULT_SKY_COLOR};
pub use shading::ShadingConfig;
