use editsc_core::constants::{CHUNK_WIDTH, HEIGHT_A, HEIGHT_B, SURFACE_POINTS_PER_CHUNK};
use editsc_core::math::{block_coord, block_index, surface_index};
use editsc_core::types::{Block, RegionCoord, SurfacePoint};

use crate::format::{ChunkHeader, LayoutSpec, Record};
use crate::frames::frames;

/// One 16x16 column of height `HEIGHT` plus its 16x16 surface map.
///
/// Both grids are dense and stored in on-disk order, so a chunk can be
/// re-emitted without reshuffling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk<const HEIGHT: usize> {
    coord: RegionCoord,
    blocks: Vec<Block>,
    surface: Vec<SurfacePoint>,
}

/// Chunk of a Layout A (`Chunks32.dat`) file.
pub type ChunkA = Chunk<HEIGHT_A>;

/// Chunk of a Layout B (`Chunks32h.dat`) file.
pub type ChunkB = Chunk<HEIGHT_B>;

impl<const HEIGHT: usize> Chunk<HEIGHT> {
    /// Number of blocks in the grid.
    pub const VOLUME: usize = CHUNK_WIDTH * CHUNK_WIDTH * HEIGHT;

    /// An all-air chunk with zeroed surface points.
    pub fn new(coord: RegionCoord) -> Self {
        Self {
            coord,
            blocks: vec![Block::AIR; Self::VOLUME],
            surface: vec![SurfacePoint::default(); SURFACE_POINTS_PER_CHUNK],
        }
    }

    /// Decode the block and surface sections of one chunk record. `body` is
    /// the record with its header already stripped.
    pub(crate) fn decode(coord: RegionCoord, body: &[u8]) -> Self {
        let blocks_len = Self::VOLUME * Block::SIZE;
        let (block_bytes, surface_bytes) = body.split_at(blocks_len);

        let mut blocks = Vec::with_capacity(Self::VOLUME);
        blocks.extend(frames(block_bytes, Block::SIZE, 0).map(|f| Block::unpack(&f)));

        let mut surface = Vec::with_capacity(SURFACE_POINTS_PER_CHUNK);
        surface.extend(
            frames(surface_bytes, SurfacePoint::SIZE, 0).map(|f| SurfacePoint::unpack(&f)),
        );

        Self {
            coord,
            blocks,
            surface,
        }
    }

    /// Append this chunk as a full record: header, blocks, surface points.
    pub(crate) fn encode(&self, layout: &LayoutSpec, out: &mut Vec<u8>) {
        debug_assert_eq!(layout.height, HEIGHT);
        ChunkHeader::new(layout, self.coord).pack(out);
        crate::format::pack_blocks(&self.blocks, out);
        crate::format::pack_surface(&self.surface, out);
    }

    pub fn coord(&self) -> RegionCoord {
        self.coord
    }

    /// # Panics
    ///
    /// Panics if the coordinate lies outside the 16xHEIGHTx16 grid.
    pub fn block_at(&self, x: usize, y: usize, z: usize) -> Block {
        self.blocks[block_index::<HEIGHT>(x, y, z)]
    }

    /// # Panics
    ///
    /// Panics if the coordinate lies outside the 16xHEIGHTx16 grid.
    pub fn set_block_at(&mut self, x: usize, y: usize, z: usize, block: Block) {
        self.blocks[block_index::<HEIGHT>(x, y, z)] = block;
    }

    pub fn surface_at(&self, x: usize, z: usize) -> SurfacePoint {
        self.surface[surface_index(x, z)]
    }

    pub fn set_surface_at(&mut self, x: usize, z: usize, point: SurfacePoint) {
        self.surface[surface_index(x, z)] = point;
    }

    /// Block grid in storage order (`y + x*H + z*H*16`).
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Surface grid in storage order (`x + z*16`).
    pub fn surface(&self) -> &[SurfacePoint] {
        &self.surface
    }

    /// Iterate every block with its `(x, y, z)` position, in storage order.
    pub fn iter_blocks(&self) -> impl Iterator<Item = ((usize, usize, usize), Block)> + '_ {
        self.blocks
            .iter()
            .enumerate()
            .map(|(i, block)| (block_coord::<HEIGHT>(i), *block))
    }

    /// Number of blocks satisfying `pred`.
    pub fn count_blocks(&self, mut pred: impl FnMut(Block) -> bool) -> usize {
        self.blocks.iter().filter(|b| pred(**b)).count()
    }

    /// Whether any block satisfies `pred`.
    pub fn any_block(&self, mut pred: impl FnMut(Block) -> bool) -> bool {
        self.blocks.iter().any(|b| pred(*b))
    }
}
