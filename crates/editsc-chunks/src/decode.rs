use crate::chunk::Chunk;
use crate::chunk_map::ChunkMap;
use crate::error::FormatError;
use crate::format::{ChunkHeader, LayoutSpec, Record};
use crate::frames::frames;
use crate::options::{CodecOptions, DuplicatePolicy};

/// Decode the back-to-back chunk records that start at `layout.chunk_area_offset()`.
///
/// Shared by both layouts; they differ only in height and header magic.
pub(crate) fn decode_chunk_area<const HEIGHT: usize>(
    bytes: &[u8],
    layout: &LayoutSpec,
    options: &CodecOptions,
) -> Result<ChunkMap<HEIGHT>, FormatError> {
    debug_assert_eq!(layout.height, HEIGHT);
    let base = layout.chunk_area_offset();
    let record_size = layout.chunk_record_size();
    let area = bytes.get(base..).ok_or(FormatError::Truncated {
        expected: base,
        actual: bytes.len(),
    })?;

    let records = frames(area, record_size, 0);
    if records.has_short_tail() {
        let expected = base + records.len() * record_size;
        if !options.pad_short_tail {
            return Err(FormatError::Truncated {
                expected,
                actual: bytes.len(),
            });
        }
        log::warn!(
            "Layout {}: final chunk record is {} bytes short, zero-padding",
            layout.name,
            expected - bytes.len()
        );
    }

    log::debug!(
        "Layout {}: framing {} chunk records of {} bytes",
        layout.name,
        records.len(),
        record_size
    );

    let mut map = ChunkMap::with_capacity(records.len());
    for (i, record) in records.enumerate() {
        let offset = base + i * record_size;
        let header = ChunkHeader::unpack(&record);
        if !header.matches(layout) {
            return Err(FormatError::BadMagic {
                offset,
                magic1: header.magic1,
                magic2: header.magic2,
            });
        }

        let coord = header.coord();
        if map.contains(&coord) {
            match options.duplicate_chunks {
                DuplicatePolicy::Reject => {
                    return Err(FormatError::DuplicateChunk {
                        x: coord.x,
                        z: coord.y,
                    });
                }
                DuplicatePolicy::Overwrite => log::warn!(
                    "Layout {}: chunk ({}, {}) at offset {} overwrites an earlier record",
                    layout.name,
                    coord.x,
                    coord.y,
                    offset
                ),
            }
        }

        map.insert(Chunk::decode(coord, &record[ChunkHeader::SIZE..]));
    }

    Ok(map)
}
