//! Fixed-width record layouts of the chunk files.
//!
//! Every record is little-endian with no padding. `Layout A` is the
//! `Chunks32.dat` format (height 128, no directory); `Layout B` is
//! `Chunks32h.dat` (height 256, 65536-slot directory plus a guard entry).
//!
//! | Record          | Size | Fields                                   |
//! |-----------------|------|------------------------------------------|
//! | DirectoryEntry  | 12   | x: i32, z: i32, index: i32               |
//! | ChunkHeader     | 16   | magic1: u32, magic2: u32, x: i32, z: i32 |
//! | Block           | 4    | packed u32                               |
//! | SurfacePoint    | 4    | maxheight, temp_humidity, unused1, unused2 |

use editsc_core::constants::*;
use editsc_core::types::{Block, RegionCoord, SurfacePoint};
use glam::IVec2;

/// A fixed-size little-endian record.
///
/// `unpack` requires at least `SIZE` bytes; a shorter slice is a caller bug
/// and panics. Use [`crate::frames::frames`] to cut buffers into records.
pub trait Record: Sized {
    const SIZE: usize;

    fn unpack(bytes: &[u8]) -> Self;

    fn pack(&self, out: &mut Vec<u8>);
}

#[inline]
fn read_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

#[inline]
fn read_i32(bytes: &[u8], at: usize) -> i32 {
    i32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

/// One Layout B directory slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub x: i32,
    pub z: i32,
    /// Position of the chunk in the chunk-data area, or -1 when unused.
    pub index: i32,
}

impl DirectoryEntry {
    /// The sentinel that follows the regular slots.
    pub const GUARD: DirectoryEntry = DirectoryEntry {
        x: 0,
        z: 0,
        index: UNUSED_SLOT,
    };

    pub fn is_used(&self) -> bool {
        self.index >= 0
    }

    pub fn coord(&self) -> RegionCoord {
        IVec2::new(self.x, self.z)
    }
}

impl Record for DirectoryEntry {
    const SIZE: usize = 12;

    fn unpack(bytes: &[u8]) -> Self {
        Self {
            x: read_i32(bytes, 0),
            z: read_i32(bytes, 4),
            index: read_i32(bytes, 8),
        }
    }

    fn pack(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.x.to_le_bytes());
        out.extend_from_slice(&self.z.to_le_bytes());
        out.extend_from_slice(&self.index.to_le_bytes());
    }
}

/// Header at the start of every chunk record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkHeader {
    pub magic1: u32,
    pub magic2: u32,
    pub x: i32,
    pub z: i32,
}

impl ChunkHeader {
    pub fn new(layout: &LayoutSpec, coord: RegionCoord) -> Self {
        Self {
            magic1: CHUNK_MAGIC,
            magic2: layout.magic2,
            x: coord.x,
            z: coord.y,
        }
    }

    pub fn coord(&self) -> RegionCoord {
        IVec2::new(self.x, self.z)
    }

    /// Whether both magic words match `layout`.
    pub fn matches(&self, layout: &LayoutSpec) -> bool {
        self.magic1 == CHUNK_MAGIC && self.magic2 == layout.magic2
    }
}

impl Record for ChunkHeader {
    const SIZE: usize = 16;

    fn unpack(bytes: &[u8]) -> Self {
        Self {
            magic1: read_u32(bytes, 0),
            magic2: read_u32(bytes, 4),
            x: read_i32(bytes, 8),
            z: read_i32(bytes, 12),
        }
    }

    fn pack(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.magic1.to_le_bytes());
        out.extend_from_slice(&self.magic2.to_le_bytes());
        out.extend_from_slice(&self.x.to_le_bytes());
        out.extend_from_slice(&self.z.to_le_bytes());
    }
}

impl Record for Block {
    const SIZE: usize = 4;

    fn unpack(bytes: &[u8]) -> Self {
        Block(read_u32(bytes, 0))
    }

    fn pack(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.0.to_le_bytes());
    }
}

impl Record for SurfacePoint {
    const SIZE: usize = 4;

    fn unpack(bytes: &[u8]) -> Self {
        Self {
            maxheight: bytes[0],
            temp_humidity: bytes[1],
            unused1: bytes[2],
            unused2: bytes[3],
        }
    }

    fn pack(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(bytemuck::bytes_of(self));
    }
}

/// Append a whole block grid.
pub fn pack_blocks(blocks: &[Block], out: &mut Vec<u8>) {
    if cfg!(target_endian = "little") {
        out.extend_from_slice(bytemuck::cast_slice(blocks));
    } else {
        for block in blocks {
            block.pack(out);
        }
    }
}

/// Append a whole surface grid. Surface points are byte-wise, so the cast is
/// endian-neutral.
pub fn pack_surface(points: &[SurfacePoint], out: &mut Vec<u8>) {
    out.extend_from_slice(bytemuck::cast_slice(points));
}

/// Static description of one on-disk layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutSpec {
    pub name: &'static str,
    /// Block grid height of each chunk.
    pub height: usize,
    /// Expected second header word.
    pub magic2: u32,
    /// Whether the file starts with a directory and guard entry.
    pub has_directory: bool,
}

impl LayoutSpec {
    pub const fn blocks_per_chunk(&self) -> usize {
        CHUNK_WIDTH * CHUNK_WIDTH * self.height
    }

    /// Size of one chunk record: header + blocks + surface points.
    pub const fn chunk_record_size(&self) -> usize {
        HEADER_SIZE + self.blocks_per_chunk() * BLOCK_SIZE + SURFACE_SIZE * SURFACE_POINTS_PER_CHUNK
    }

    /// Byte offset of the first chunk record.
    pub const fn chunk_area_offset(&self) -> usize {
        if self.has_directory {
            DIRECTORY_WITH_GUARD_SIZE
        } else {
            0
        }
    }
}

const HEADER_SIZE: usize = <ChunkHeader as Record>::SIZE;
const BLOCK_SIZE: usize = <Block as Record>::SIZE;
const SURFACE_SIZE: usize = <SurfacePoint as Record>::SIZE;

/// Bytes occupied by the 65536 regular directory slots.
pub const DIRECTORY_SIZE: usize = DIRECTORY_SLOTS * <DirectoryEntry as Record>::SIZE;

/// Byte offset of the guard entry.
pub const GUARD_OFFSET: usize = DIRECTORY_SIZE;

/// Directory plus guard entry.
pub const DIRECTORY_WITH_GUARD_SIZE: usize = DIRECTORY_SIZE + <DirectoryEntry as Record>::SIZE;

/// `Chunks32.dat`: Survivalcraft 1.29 to 2.1.
pub const LAYOUT_A: LayoutSpec = LayoutSpec {
    name: "A (Chunks32)",
    height: HEIGHT_A,
    magic2: LAYOUT_A_MAGIC,
    has_directory: false,
};

/// `Chunks32h.dat`: Survivalcraft 2.2 and later.
pub const LAYOUT_B: LayoutSpec = LayoutSpec {
    name: "B (Chunks32h)",
    height: HEIGHT_B,
    magic2: LAYOUT_B_MAGIC,
    has_directory: true,
};
