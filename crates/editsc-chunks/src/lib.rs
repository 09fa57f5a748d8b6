//! Codec for Survivalcraft chunk files.
//!
//! Layout A (`Chunks32.dat`) is read-only. Layout B (`Chunks32h.dat`) can be
//! re-encoded, and [`ChunksFileB::serialize_verified`] checks the output
//! against the source byte for byte.

pub mod chunk;
pub mod chunk_map;
mod decode;
pub mod detect;
pub mod error;
pub mod format;
pub mod frames;
pub mod layout_a;
pub mod layout_b;
pub mod options;
pub mod verify;

#[cfg(test)]
mod fixtures;

pub use chunk::{Chunk, ChunkA, ChunkB};
pub use chunk_map::ChunkMap;
pub use detect::{detect_layout, parse_any, parse_as, ChunksFile, Layout};
pub use error::{ChunksError, FormatError, RoundTripError};
pub use format::{ChunkHeader, DirectoryEntry, LayoutSpec, Record, LAYOUT_A, LAYOUT_B};
pub use layout_a::{parse_layout_a, parse_layout_a_with, ChunksFileA};
pub use layout_b::{parse_layout_b, parse_layout_b_with, ChunksFileB};
pub use options::{CodecOptions, DuplicatePolicy};
pub use verify::{first_mismatch, verify_round_trip, PrefixVerifier};
