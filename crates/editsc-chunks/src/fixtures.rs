//! Synthetic chunk files for tests. Written byte-by-byte, independent of the
//! codec's own encoder, so round-trip tests compare against a real reference.

use editsc_core::constants::*;

use crate::format::{LayoutSpec, DIRECTORY_WITH_GUARD_SIZE, LAYOUT_A, LAYOUT_B};

/// Deterministic, full-width block word for block `i` of a chunk.
pub fn block_word(seed: u32, i: usize) -> u32 {
    (i as u32).wrapping_mul(2_654_435_761) ^ seed
}

/// One raw chunk record for `layout`.
pub fn chunk_record(layout: &LayoutSpec, x: i32, z: i32, seed: u32) -> Vec<u8> {
    let mut out = Vec::with_capacity(layout.chunk_record_size());
    out.extend_from_slice(&CHUNK_MAGIC.to_le_bytes());
    out.extend_from_slice(&layout.magic2.to_le_bytes());
    out.extend_from_slice(&x.to_le_bytes());
    out.extend_from_slice(&z.to_le_bytes());
    for i in 0..layout.blocks_per_chunk() {
        out.extend_from_slice(&block_word(seed, i).to_le_bytes());
    }
    for i in 0..SURFACE_POINTS_PER_CHUNK {
        // Real worlds carry 65 in the first "unused" byte
        out.extend_from_slice(&[(i % 200) as u8, (i as u8).wrapping_mul(7), 65, (seed & 0xFF) as u8]);
    }
    out
}

/// A Layout A file holding one chunk per coordinate, in the given order.
pub fn layout_a_file(coords: &[(i32, i32)]) -> Vec<u8> {
    let mut out = Vec::new();
    for (i, &(x, z)) in coords.iter().enumerate() {
        out.extend_from_slice(&chunk_record(&LAYOUT_A, x, z, i as u32 + 1));
    }
    out
}

/// Directory slot used for `(x, z)` in synthetic Layout B files.
pub fn slot_for(x: i32, z: i32) -> usize {
    ((x as usize) * 256 + z as usize) % DIRECTORY_SLOTS
}

/// A Layout B directory + guard with chunk `i` registered at `slot_for`.
pub fn layout_b_directory(coords: &[(i32, i32)]) -> Vec<u8> {
    let mut entries = vec![(0i32, 0i32, UNUSED_SLOT); DIRECTORY_SLOTS];
    for (i, &(x, z)) in coords.iter().enumerate() {
        entries[slot_for(x, z)] = (x, z, i as i32);
    }
    let mut out = Vec::with_capacity(DIRECTORY_WITH_GUARD_SIZE);
    for (x, z, index) in entries.into_iter().chain(std::iter::once((0, 0, UNUSED_SLOT))) {
        out.extend_from_slice(&x.to_le_bytes());
        out.extend_from_slice(&z.to_le_bytes());
        out.extend_from_slice(&index.to_le_bytes());
    }
    out
}

/// A complete Layout B file holding one chunk per coordinate, in order.
pub fn layout_b_file(coords: &[(i32, i32)]) -> Vec<u8> {
    let mut out = layout_b_directory(coords);
    for (i, &(x, z)) in coords.iter().enumerate() {
        out.extend_from_slice(&chunk_record(&LAYOUT_B, x, z, 0x5EED_0000 + i as u32));
    }
    out
}

/// Byte offset of directory slot `slot`.
pub fn slot_offset(slot: usize) -> usize {
    slot * 12
}
