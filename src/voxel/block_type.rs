/// Block type enumeration and the per-face color palette
/// Using u8 representation for compact chunk storage
use crate::meshing::FaceDir;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum BlockType {
    #[default]
    Air = 0,
    Grass = 1,
    Dirt = 2,
    Stone = 3,
}

pub const BLOCK_TYPE_COUNT: usize = 4;

pub const COLOR_GRASS_TOP: u32 = 0xFF5D9438;
pub const COLOR_DIRT: u32 = 0xFF866043;
pub const COLOR_STONE: u32 = 0xFF7D7D7D;
/// Opaque white, shown for ids outside the palette.
pub const COLOR_ERROR: u32 = 0xFFFFFFFF;

impl BlockType {
    pub const ALL: [BlockType; BLOCK_TYPE_COUNT] = [
        BlockType::Air,
        BlockType::Grass,
        BlockType::Dirt,
        BlockType::Stone,
    ];

    /// Every block except air occupies its cell
    #[inline]
    pub const fn is_active(self) -> bool {
        !matches!(self, BlockType::Air)
    }

    #[inline]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Convert a raw id, None for values outside the enum
    #[inline]
    pub const fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(BlockType::Air),
            1 => Some(BlockType::Grass),
            2 => Some(BlockType::Dirt),
            3 => Some(BlockType::Stone),
            _ => None,
        }
    }

    #[inline]
    pub const fn face_color(self, face: FaceDir) -> u32 {
        block_color(self as u8, face)
    }
}

/// ARGB color of a block face. Grass is only green on top.
pub const fn block_color(id: u8, face: FaceDir) -> u32 {
    match BlockType::from_id(id) {
        Some(BlockType::Grass) => match face {
            FaceDir::PosY => COLOR_GRASS_TOP,
            _ => COLOR_DIRT,
        },
        Some(BlockType::Dirt) => COLOR_DIRT,
        Some(BlockType::Stone) => COLOR_STONE,
        Some(BlockType::Air) | None => COLOR_ERROR,
    }
}
