use std::collections::HashMap;

use editsc_core::constants::{DIRECTORY_SLOTS, HEIGHT_B};
use editsc_core::types::{Block, RegionCoord, WorldCoord};
use glam::IVec2;

use crate::chunk::ChunkB;
use crate::chunk_map::ChunkMap;
use crate::decode::decode_chunk_area;
use crate::error::{ChunksError, FormatError};
use crate::format::{
    DirectoryEntry, Record, DIRECTORY_SIZE, DIRECTORY_WITH_GUARD_SIZE, GUARD_OFFSET, LAYOUT_B,
};
use crate::frames::frames;
use crate::options::CodecOptions;
use crate::verify::PrefixVerifier;

/// A parsed `Chunks32h.dat` file: 65536-slot directory, guard entry, then
/// chunk records of height 256.
///
/// The source buffer is not retained. Round-trip verification borrows it
/// again for the duration of [`serialize_verified`](Self::serialize_verified).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunksFileB {
    directory: Vec<DirectoryEntry>,
    chunks: ChunkMap<HEIGHT_B>,
}

/// Parse a Layout B buffer with default options.
pub fn parse_layout_b(bytes: &[u8]) -> Result<ChunksFileB, FormatError> {
    parse_layout_b_with(bytes, &CodecOptions::default())
}

/// Parse a Layout B buffer.
pub fn parse_layout_b_with(
    bytes: &[u8],
    options: &CodecOptions,
) -> Result<ChunksFileB, FormatError> {
    if bytes.len() < DIRECTORY_WITH_GUARD_SIZE {
        return Err(FormatError::Truncated {
            expected: DIRECTORY_WITH_GUARD_SIZE,
            actual: bytes.len(),
        });
    }

    // Regular slots only; the guard is validated on its own below.
    let mut directory = Vec::with_capacity(DIRECTORY_SLOTS);
    directory.extend(
        frames(&bytes[..DIRECTORY_SIZE], DirectoryEntry::SIZE, 0)
            .map(|f| DirectoryEntry::unpack(&f)),
    );

    let guard = DirectoryEntry::unpack(&bytes[GUARD_OFFSET..DIRECTORY_WITH_GUARD_SIZE]);
    if guard != DirectoryEntry::GUARD {
        return Err(FormatError::BadGuard {
            x: guard.x,
            z: guard.z,
            index: guard.index,
        });
    }
    log::debug!(
        "Layout B directory: {} of {} slots in use",
        directory.iter().filter(|e| e.is_used()).count(),
        DIRECTORY_SLOTS
    );

    let chunks = decode_chunk_area::<HEIGHT_B>(bytes, &LAYOUT_B, options)?;
    let file = ChunksFileB { directory, chunks };
    if options.validate_directory {
        file.check_slots()?;
    }

    log::info!("Parsed Layout B file: {} chunks", file.chunks.len());
    Ok(file)
}

impl ChunksFileB {
    pub fn chunk_at(&self, x: i32, z: i32) -> Option<&ChunkB> {
        self.chunks.get(&IVec2::new(x, z))
    }

    pub fn chunk_at_mut(&mut self, x: i32, z: i32) -> Option<&mut ChunkB> {
        self.chunks.get_mut(&IVec2::new(x, z))
    }

    /// All chunks, in file order.
    pub fn chunks(&self) -> &ChunkMap<HEIGHT_B> {
        &self.chunks
    }

    pub fn chunks_mut(&mut self) -> &mut ChunkMap<HEIGHT_B> {
        &mut self.chunks
    }

    /// The 65536 regular directory slots in on-disk order (guard excluded).
    pub fn directory(&self) -> &[DirectoryEntry] {
        &self.directory
    }

    pub fn block_at_world(&self, world: WorldCoord) -> Option<Block> {
        self.chunks.block_at_world(world)
    }

    pub fn set_block_at_world(&mut self, world: WorldCoord, block: Block) -> bool {
        self.chunks.set_block_at_world(world, block)
    }

    /// Check the directory against the chunk area.
    ///
    /// Every in-use slot (index other than -1) must carry a non-negative
    /// coordinate and point at an existing chunk position. The chunk at file
    /// position `i` must be named by exactly one in-use slot, and that slot
    /// must point at `i`.
    pub fn check_slots(&self) -> Result<(), FormatError> {
        let slots = self.slot_index()?;
        for (position, chunk) in self.chunks.iter().enumerate() {
            check_chunk_slot(&slots, chunk.coord(), position)?;
        }
        Ok(())
    }

    /// In-use slot indices keyed by coordinate. Fails on in-use entries that
    /// no chunk can match.
    fn slot_index(&self) -> Result<HashMap<RegionCoord, Vec<i32>>, FormatError> {
        let mut slots: HashMap<RegionCoord, Vec<i32>> = HashMap::new();
        for (slot, entry) in self.directory.iter().enumerate() {
            if !entry.is_used() {
                continue;
            }
            if entry.x < 0 || entry.z < 0 {
                return Err(FormatError::NegativeSlotCoord {
                    slot,
                    x: entry.x,
                    z: entry.z,
                });
            }
            if entry.index as usize >= self.chunks.len() {
                return Err(FormatError::DanglingSlot {
                    slot,
                    x: entry.x,
                    z: entry.z,
                    index: entry.index,
                    chunks: self.chunks.len(),
                });
            }
            slots.entry(entry.coord()).or_default().push(entry.index);
        }
        Ok(slots)
    }

    /// Re-encode the file without comparing against any source.
    ///
    /// Emits the directory, the guard entry, then each chunk in map order.
    /// Slot consistency is still enforced, since a chunk the directory does
    /// not point at would be unreachable in the written file.
    pub fn encode(&self) -> Result<Vec<u8>, FormatError> {
        self.encode_inner::<FormatError>(|_| Ok(()))
    }

    /// Same as [`encode`](Self::encode). Verification is opt-in through
    /// [`serialize_verified`](Self::serialize_verified).
    pub fn serialize(&self) -> Result<Vec<u8>, FormatError> {
        self.encode()
    }

    /// Re-encode the file and require the output to equal `source` byte for
    /// byte. The comparison runs after every section, so the error carries
    /// the first diverging offset.
    pub fn serialize_verified(&self, source: &[u8]) -> Result<Vec<u8>, ChunksError> {
        let mut verifier = PrefixVerifier::new(source);
        let out = self.encode_inner::<ChunksError>(|out| Ok(verifier.check(out)?))?;
        verifier.finish(&out)?;
        log::debug!("Round trip verified: {} bytes", out.len());
        Ok(out)
    }

    /// Shared encoder; `after_section` runs after the directory, the guard
    /// and each chunk record.
    fn encode_inner<E: From<FormatError>>(
        &self,
        mut after_section: impl FnMut(&[u8]) -> Result<(), E>,
    ) -> Result<Vec<u8>, E> {
        let total = DIRECTORY_WITH_GUARD_SIZE + self.chunks.len() * LAYOUT_B.chunk_record_size();
        let mut out = Vec::with_capacity(total);

        for entry in &self.directory {
            entry.pack(&mut out);
        }
        after_section(&out)?;

        DirectoryEntry::GUARD.pack(&mut out);
        after_section(&out)?;

        let slots = self.slot_index()?;
        for (position, chunk) in self.chunks.iter().enumerate() {
            check_chunk_slot(&slots, chunk.coord(), position)?;
            chunk.encode(&LAYOUT_B, &mut out);
            after_section(&out)?;
        }

        Ok(out)
    }
}

fn check_chunk_slot(
    slots: &HashMap<RegionCoord, Vec<i32>>,
    coord: RegionCoord,
    position: usize,
) -> Result<(), FormatError> {
    let indices = slots.get(&coord).ok_or(FormatError::MissingSlot {
        x: coord.x,
        z: coord.y,
        position,
    })?;
    if let Some(&index) = indices.iter().find(|&&i| i as usize != position) {
        return Err(FormatError::SlotMismatch {
            x: coord.x,
            z: coord.y,
            position,
            index,
        });
    }
    if indices.len() > 1 {
        return Err(FormatError::DuplicateSlot {
            x: coord.x,
            z: coord.y,
            count: indices.len(),
        });
    }
    Ok(())
}
