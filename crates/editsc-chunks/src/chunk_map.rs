use std::collections::HashMap;

use editsc_core::math::{world_to_local, world_to_region};
use editsc_core::types::{Block, RegionCoord, WorldCoord};

use crate::chunk::Chunk;

/// Chunks keyed by region coordinate, iterated in insertion order.
///
/// Insertion order is file order; Layout B re-encodes chunks in exactly this
/// order, so it must never be disturbed by lookups or in-place replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkMap<const HEIGHT: usize> {
    chunks: Vec<Chunk<HEIGHT>>,
    index: HashMap<RegionCoord, usize>,
}

impl<const HEIGHT: usize> Default for ChunkMap<HEIGHT> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const HEIGHT: usize> ChunkMap<HEIGHT> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            chunks: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Insert a chunk under its own coordinate.
    ///
    /// If the coordinate is already present the stored chunk is replaced in
    /// place (keeping its original position) and the old chunk is returned.
    pub fn insert(&mut self, chunk: Chunk<HEIGHT>) -> Option<Chunk<HEIGHT>> {
        let coord = chunk.coord();
        if let Some(&pos) = self.index.get(&coord) {
            return Some(std::mem::replace(&mut self.chunks[pos], chunk));
        }
        self.index.insert(coord, self.chunks.len());
        self.chunks.push(chunk);
        None
    }

    pub fn contains(&self, coord: &RegionCoord) -> bool {
        self.index.contains_key(coord)
    }

    pub fn get(&self, coord: &RegionCoord) -> Option<&Chunk<HEIGHT>> {
        self.index.get(coord).map(|&pos| &self.chunks[pos])
    }

    pub fn get_mut(&mut self, coord: &RegionCoord) -> Option<&mut Chunk<HEIGHT>> {
        self.index.get(coord).map(|&pos| &mut self.chunks[pos])
    }

    /// File-order position of the chunk at `coord`.
    pub fn position(&self, coord: &RegionCoord) -> Option<usize> {
        self.index.get(coord).copied()
    }

    /// Iterator over chunks in insertion (file) order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Chunk<HEIGHT>> {
        self.chunks.iter()
    }

    /// Mutable iterator over chunks in insertion (file) order.
    pub fn iter_mut(&mut self) -> impl ExactSizeIterator<Item = &mut Chunk<HEIGHT>> {
        self.chunks.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Inclusive (min, max) region coordinates, or None when empty.
    pub fn bounds(&self) -> Option<(RegionCoord, RegionCoord)> {
        let mut coords = self.chunks.iter().map(|c| c.coord());
        let first = coords.next()?;
        Some(coords.fold((first, first), |(lo, hi), c| (lo.min(c), hi.max(c))))
    }

    /// Block at a world-space coordinate. None if the containing chunk is not
    /// loaded or `y` is outside the column.
    pub fn block_at_world(&self, world: WorldCoord) -> Option<Block> {
        let local = world_to_local(world);
        if local.y < 0 || local.y as usize >= HEIGHT {
            return None;
        }
        let chunk = self.get(&world_to_region(world))?;
        Some(chunk.block_at(local.x as usize, local.y as usize, local.z as usize))
    }

    /// Write a block at a world-space coordinate. Returns false (and leaves
    /// the map untouched) if the chunk is not loaded or `y` is out of range.
    pub fn set_block_at_world(&mut self, world: WorldCoord, block: Block) -> bool {
        let local = world_to_local(world);
        if local.y < 0 || local.y as usize >= HEIGHT {
            return false;
        }
        match self.get_mut(&world_to_region(world)) {
            Some(chunk) => {
                chunk.set_block_at(local.x as usize, local.y as usize, local.z as usize, block);
                true
            }
            None => false,
        }
    }
}
