/// Meshing: converting voxel occupancy into renderable block faces
pub mod culled;
pub mod face;

pub use culled::build_mesh;
pub use face::{face_vertices, FaceDir, RenderFace};
