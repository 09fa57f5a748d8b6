//! Single source of truth for the chunk file geometry.
//! Both on-disk layouts share the 16x16 column footprint and differ only in
//! height, header magic and the presence of a directory.

/// Side length of a chunk column in blocks (x and z).
pub const CHUNK_WIDTH: usize = 16;

/// Number of surface points per chunk (16x16).
pub const SURFACE_POINTS_PER_CHUNK: usize = CHUNK_WIDTH * CHUNK_WIDTH;

/// Block grid height of a Layout A (`Chunks32.dat`) chunk.
pub const HEIGHT_A: usize = 128;

/// Block grid height of a Layout B (`Chunks32h.dat`) chunk.
pub const HEIGHT_B: usize = 256;

/// First header word of every chunk record.
pub const CHUNK_MAGIC: u32 = 0xDEAD_BEEF;

/// Second header word of a Layout A chunk record.
pub const LAYOUT_A_MAGIC: u32 = 0xFFFF_FFFF;

/// Second header word of a Layout B chunk record.
pub const LAYOUT_B_MAGIC: u32 = 0xFFFF_FFFE;

/// Number of regular directory slots in a Layout B file (guard excluded).
pub const DIRECTORY_SLOTS: usize = 65536;

/// Directory index marking an unused slot or the guard entry.
pub const UNUSED_SLOT: i32 = -1;

/// Bit range of the block-type id inside a block word.
pub const BLOCK_TYPE_BITS: (u32, u32) = (0, 9);

/// Bit range of the light level inside a block word.
pub const BLOCK_LIGHT_BITS: (u32, u32) = (10, 13);

/// Bit range of the block-specific state inside a block word.
pub const BLOCK_DATA_BITS: (u32, u32) = (14, 31);
