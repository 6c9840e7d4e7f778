/// Face directions and the renderable quad emitted per visible block face
use glam::{IVec3, Vec3};

/// Six axis-aligned face directions. The discriminant is the face index
/// used by the palette and the vertex tables.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FaceDir {
    PosZ = 0,
    NegZ = 1,
    NegX = 2,
    PosX = 3,
    PosY = 4,
    NegY = 5,
}

impl FaceDir {
    pub const ALL: [FaceDir; 6] = [
        FaceDir::PosZ,
        FaceDir::NegZ,
        FaceDir::NegX,
        FaceDir::PosX,
        FaceDir::PosY,
        FaceDir::NegY,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(FaceDir::PosZ),
            1 => Some(FaceDir::NegZ),
            2 => Some(FaceDir::NegX),
            3 => Some(FaceDir::PosX),
            4 => Some(FaceDir::PosY),
            5 => Some(FaceDir::NegY),
            _ => None,
        }
    }

    /// Outward unit normal
    #[inline]
    pub const fn normal(self) -> Vec3 {
        match self {
            FaceDir::PosZ => Vec3::Z,
            FaceDir::NegZ => Vec3::NEG_Z,
            FaceDir::NegX => Vec3::NEG_X,
            FaceDir::PosX => Vec3::X,
            FaceDir::PosY => Vec3::Y,
            FaceDir::NegY => Vec3::NEG_Y,
        }
    }

    /// Offset to the neighbouring cell this face looks into
    #[inline]
    pub const fn offset(self) -> IVec3 {
        match self {
            FaceDir::PosZ => IVec3::Z,
            FaceDir::NegZ => IVec3::NEG_Z,
            FaceDir::NegX => IVec3::NEG_X,
            FaceDir::PosX => IVec3::X,
            FaceDir::PosY => IVec3::Y,
            FaceDir::NegY => IVec3::NEG_Y,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            FaceDir::PosZ => FaceDir::NegZ,
            FaceDir::NegZ => FaceDir::PosZ,
            FaceDir::NegX => FaceDir::PosX,
            FaceDir::PosX => FaceDir::NegX,
            FaceDir::PosY => FaceDir::NegY,
            FaceDir::NegY => FaceDir::PosY,
        }
    }
}

const H: f32 = 0.5;

/// Corner offsets from the block center, per face.
/// Viewed from outside the cube each quad runs clockwise on a y-down screen,
/// which is the front-facing orientation the rasterizer keeps.
const FACE_CORNERS: [[[f32; 3]; 4]; 6] = [
    // +Z
    [[-H, H, H], [H, H, H], [H, -H, H], [-H, -H, H]],
    // -Z
    [[H, H, -H], [-H, H, -H], [-H, -H, -H], [H, -H, -H]],
    // -X
    [[-H, H, -H], [-H, H, H], [-H, -H, H], [-H, -H, -H]],
    // +X
    [[H, H, H], [H, H, -H], [H, -H, -H], [H, -H, H]],
    // +Y
    [[-H, H, H], [-H, H, -H], [H, H, -H], [H, H, H]],
    // -Y
    [[-H, -H, -H], [-H, -H, H], [H, -H, H], [H, -H, -H]],
];

/// Quad corners for the face of the unit cube centered on `center`
#[inline]
pub fn face_vertices(dir: FaceDir, center: Vec3) -> [Vec3; 4] {
    FACE_CORNERS[dir.index()].map(|c| center + Vec3::from_array(c))
}

/// One visible block face, resolved to world space and final base color.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderFace {
    vertices: [Vec3; 4],
    dir: FaceDir,
    color: u32,
}

impl RenderFace {
    pub fn new(dir: FaceDir, center: Vec3, color: u32) -> Self {
        Self {
            vertices: face_vertices(dir, center),
            dir,
            color,
        }
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec3; 4] {
        &self.vertices
    }

    #[inline]
    pub fn dir(&self) -> FaceDir {
        self.dir
    }

    #[inline]
    pub fn normal(&self) -> Vec3 {
        self.dir.normal()
    }

    /// Opaque ARGB base color (unlit)
    #[inline]
    pub fn color(&self) -> u32 {
        self.color
    }

    /// Center of the block this face belongs to
    #[inline]
    pub fn block_center(&self) -> Vec3 {
        (self.vertices[0] + self.vertices[2]) * 0.5 - self.normal() * H
    }
}
