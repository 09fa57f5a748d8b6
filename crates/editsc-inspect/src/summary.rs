use std::collections::HashMap;

use editsc_chunks::{ChunkMap, ChunksError, ChunksFile};
use editsc_core::BlockTypeTable;

/// Block-type histogram entry.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BlockTypeCount {
    pub id: u32,
    pub name: String,
    pub count: u64,
}

/// Outcome of the Layout B re-encode check.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RoundTrip {
    /// Re-encoded bytes matched the source exactly.
    Verified,
    /// Re-encoded bytes diverged at this offset.
    Mismatch { offset: usize },
    /// Encoding failed structurally (directory/slot inconsistency).
    EncodeFailed { reason: String },
    /// Disabled with `--no-verify`.
    Skipped,
    /// Layout A has no encoder.
    Unsupported,
}

impl RoundTrip {
    pub fn is_failure(&self) -> bool {
        matches!(self, RoundTrip::Mismatch { .. } | RoundTrip::EncodeFailed { .. })
    }
}

/// Re-encode a Layout B file and compare it with `source`.
pub fn check_round_trip(file: &ChunksFile, source: &[u8], verify: bool) -> RoundTrip {
    let ChunksFile::B(b) = file else {
        return RoundTrip::Unsupported;
    };
    if !verify {
        return RoundTrip::Skipped;
    }
    match b.serialize_verified(source) {
        Ok(_) => RoundTrip::Verified,
        Err(ChunksError::RoundTrip(e)) => RoundTrip::Mismatch { offset: e.offset },
        Err(e) => RoundTrip::EncodeFailed {
            reason: e.to_string(),
        },
    }
}

/// Everything the inspector reports about one file.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct InspectSummary {
    pub file: String,
    pub size_bytes: usize,
    pub layout: String,
    pub chunk_count: usize,
    /// Inclusive region bounds as `[x, z]`, absent for an empty world.
    pub region_min: Option<[i32; 2]>,
    pub region_max: Option<[i32; 2]>,
    /// In-use directory slots; Layout B only.
    pub directory_slots_used: Option<usize>,
    pub top_block_types: Vec<BlockTypeCount>,
    pub round_trip: RoundTrip,
}

fn histogram<const HEIGHT: usize>(chunks: &ChunkMap<HEIGHT>) -> HashMap<u32, u64> {
    let mut counts = HashMap::new();
    for chunk in chunks.iter() {
        for block in chunk.blocks() {
            *counts.entry(block.block_type()).or_insert(0u64) += 1;
        }
    }
    counts
}

fn bounds<const HEIGHT: usize>(chunks: &ChunkMap<HEIGHT>) -> (Option<[i32; 2]>, Option<[i32; 2]>) {
    match chunks.bounds() {
        Some((lo, hi)) => (Some(lo.to_array()), Some(hi.to_array())),
        None => (None, None),
    }
}

/// The `top_n` most common block types, most common first; ties by id.
pub fn top_block_types(
    counts: &HashMap<u32, u64>,
    table: &BlockTypeTable,
    top_n: usize,
) -> Vec<BlockTypeCount> {
    let mut sorted: Vec<(u32, u64)> = counts.iter().map(|(&id, &count)| (id, count)).collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    sorted
        .into_iter()
        .take(top_n)
        .map(|(id, count)| BlockTypeCount {
            id,
            name: table.name_of(id).to_string(),
            count,
        })
        .collect()
}

/// Summarize a parsed file. `round_trip` is filled in by the caller.
pub fn summarize(
    name: &str,
    size_bytes: usize,
    file: &ChunksFile,
    table: &BlockTypeTable,
    top_n: usize,
    round_trip: RoundTrip,
) -> InspectSummary {
    let (counts, (region_min, region_max), directory_slots_used) = match file {
        ChunksFile::A(a) => (histogram(a.chunks()), bounds(a.chunks()), None),
        ChunksFile::B(b) => (
            histogram(b.chunks()),
            bounds(b.chunks()),
            Some(b.directory().iter().filter(|e| e.is_used()).count()),
        ),
    };

    InspectSummary {
        file: name.to_string(),
        size_bytes,
        layout: file.layout().spec().name.to_string(),
        chunk_count: file.chunk_count(),
        region_min,
        region_max,
        directory_slots_used,
        top_block_types: top_block_types(&counts, table, top_n),
        round_trip,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use editsc_chunks::{parse_any, CodecOptions};
    use editsc_core::constants::{CHUNK_MAGIC, DIRECTORY_SLOTS, LAYOUT_A_MAGIC};
    use editsc_core::Block;

    /// One Layout A chunk whose lowest layer is grass and everything else air.
    fn grass_world_a(x: i32, z: i32) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&CHUNK_MAGIC.to_le_bytes());
        out.extend_from_slice(&LAYOUT_A_MAGIC.to_le_bytes());
        out.extend_from_slice(&x.to_le_bytes());
        out.extend_from_slice(&z.to_le_bytes());
        for i in 0..32768usize {
            let word = if i % 128 == 0 { Block::AIR.with_block_type(8).0 } else { 0 };
            out.extend_from_slice(&word.to_le_bytes());
        }
        out.extend_from_slice(&[0u8; 1024]);
        out
    }

    /// A Layout B file with every slot unused and no chunks.
    fn empty_world_b() -> Vec<u8> {
        let mut out = Vec::new();
        for _ in 0..=DIRECTORY_SLOTS {
            out.extend_from_slice(&0i32.to_le_bytes());
            out.extend_from_slice(&0i32.to_le_bytes());
            out.extend_from_slice(&(-1i32).to_le_bytes());
        }
        out
    }

    #[test]
    fn test_top_block_types_order() {
        let counts = HashMap::from([(0u32, 10u64), (8, 30), (2, 30), (15, 1)]);
        let top = top_block_types(&counts, &BlockTypeTable::defaults().expect("block types"), 3);
        let ids: Vec<_> = top.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 8, 0]);
        assert_eq!(top[0].name, "Dirt");
        assert_eq!(top[1].name, "Grass");
    }

    #[test]
    fn test_summarize_layout_a() {
        let mut bytes = grass_world_a(2, 5);
        bytes.extend_from_slice(&grass_world_a(-1, 7));
        let file = parse_any(&bytes, &CodecOptions::default()).expect("parse");

        let summary = summarize(
            "Chunks32.dat",
            bytes.len(),
            &file,
            &BlockTypeTable::defaults().expect("block types"),
            5,
            RoundTrip::Unsupported,
        );
        assert_eq!(summary.chunk_count, 2);
        assert_eq!(summary.region_min, Some([-1, 5]));
        assert_eq!(summary.region_max, Some([2, 7]));
        assert_eq!(summary.directory_slots_used, None);
        assert_eq!(summary.top_block_types.len(), 2);
        assert_eq!(summary.top_block_types[0].name, "Air");
        assert_eq!(summary.top_block_types[1].count, 2 * 256);
        assert!(!summary.round_trip.is_failure());
    }

    #[test]
    fn test_round_trip_status() {
        let options = CodecOptions::default();
        let source = empty_world_b();
        let file = parse_any(&source, &options).expect("parse");
        assert_eq!(check_round_trip(&file, &source, true), RoundTrip::Verified);
        assert_eq!(check_round_trip(&file, &source, false), RoundTrip::Skipped);

        let mut longer = source.clone();
        longer.push(0);
        assert_eq!(
            check_round_trip(&file, &longer, true),
            RoundTrip::Mismatch {
                offset: source.len()
            }
        );

        let summary = summarize(
            "Chunks32h.dat",
            source.len(),
            &file,
            &BlockTypeTable::defaults().expect("block types"),
            5,
            RoundTrip::Verified,
        );
        assert_eq!(summary.chunk_count, 0);
        assert_eq!(summary.directory_slots_used, Some(0));
        assert_eq!(summary.region_min, None);
        assert!(summary.top_block_types.is_empty());

        let a = parse_any(&grass_world_a(0, 0), &options).expect("parse A");
        assert_eq!(check_round_trip(&a, &source, true), RoundTrip::Unsupported);
    }
}
