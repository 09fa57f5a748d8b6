use editsc_core::constants::HEIGHT_A;
use editsc_core::types::{Block, WorldCoord};
use glam::IVec2;

use crate::chunk::ChunkA;
use crate::chunk_map::ChunkMap;
use crate::decode::decode_chunk_area;
use crate::error::FormatError;
use crate::format::LAYOUT_A;
use crate::options::CodecOptions;

/// A parsed `Chunks32.dat` file: back-to-back chunk records, no directory.
///
/// Read-only as far as the file is concerned: blocks may be edited in
/// memory, but there is no encoder for this layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunksFileA {
    chunks: ChunkMap<HEIGHT_A>,
}

/// Parse a Layout A buffer with default options.
pub fn parse_layout_a(bytes: &[u8]) -> Result<ChunksFileA, FormatError> {
    parse_layout_a_with(bytes, &CodecOptions::default())
}

/// Parse a Layout A buffer.
///
/// Fails on the first record whose header magic is not
/// `0xDEADBEEF 0xFFFFFFFF`; header magic is the only corruption signal this
/// layout has.
pub fn parse_layout_a_with(
    bytes: &[u8],
    options: &CodecOptions,
) -> Result<ChunksFileA, FormatError> {
    let chunks = decode_chunk_area::<HEIGHT_A>(bytes, &LAYOUT_A, options)?;
    log::info!("Parsed Layout A file: {} chunks", chunks.len());
    Ok(ChunksFileA { chunks })
}

impl ChunksFileA {
    pub fn chunk_at(&self, x: i32, z: i32) -> Option<&ChunkA> {
        self.chunks.get(&IVec2::new(x, z))
    }

    pub fn chunk_at_mut(&mut self, x: i32, z: i32) -> Option<&mut ChunkA> {
        self.chunks.get_mut(&IVec2::new(x, z))
    }

    /// All chunks, in file order.
    pub fn chunks(&self) -> &ChunkMap<HEIGHT_A> {
        &self.chunks
    }

    pub fn chunks_mut(&mut self) -> &mut ChunkMap<HEIGHT_A> {
        &mut self.chunks
    }

    pub fn block_at_world(&self, world: WorldCoord) -> Option<Block> {
        self.chunks.block_at_world(world)
    }

    pub fn set_block_at_world(&mut self, world: WorldCoord, block: Block) -> bool {
        self.chunks.set_block_at_world(world, block)
    }
}
