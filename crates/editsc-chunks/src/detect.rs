use crate::error::FormatError;
use crate::format::{
    ChunkHeader, DirectoryEntry, LayoutSpec, Record, DIRECTORY_WITH_GUARD_SIZE, GUARD_OFFSET,
    LAYOUT_A, LAYOUT_B,
};
use crate::layout_a::{parse_layout_a_with, ChunksFileA};
use crate::layout_b::{parse_layout_b_with, ChunksFileB};
use crate::options::CodecOptions;

/// On-disk layout of a chunk file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// `Chunks32.dat`, height 128, no directory.
    A,
    /// `Chunks32h.dat`, height 256, directory + guard.
    B,
}

impl Layout {
    pub fn spec(self) -> &'static LayoutSpec {
        match self {
            Layout::A => &LAYOUT_A,
            Layout::B => &LAYOUT_B,
        }
    }
}

/// A parsed file of either layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChunksFile {
    A(ChunksFileA),
    B(ChunksFileB),
}

impl ChunksFile {
    pub fn layout(&self) -> Layout {
        match self {
            ChunksFile::A(_) => Layout::A,
            ChunksFile::B(_) => Layout::B,
        }
    }

    pub fn chunk_count(&self) -> usize {
        match self {
            ChunksFile::A(file) => file.chunks().len(),
            ChunksFile::B(file) => file.chunks().len(),
        }
    }
}

fn header_at(bytes: &[u8], offset: usize) -> Option<ChunkHeader> {
    let end = offset.checked_add(ChunkHeader::SIZE)?;
    bytes.get(offset..end).map(ChunkHeader::unpack)
}

/// Guess the layout from the leading chunk header.
///
/// A Layout A file starts with a chunk header. A Layout B file has its first
/// header right after the directory; a directory-only Layout B file is
/// recognised by its exact length and guard entry. Returns None for empty or
/// unrecognised input.
pub fn detect_layout(bytes: &[u8]) -> Option<Layout> {
    if header_at(bytes, 0).is_some_and(|h| h.matches(&LAYOUT_A)) {
        return Some(Layout::A);
    }
    if header_at(bytes, DIRECTORY_WITH_GUARD_SIZE).is_some_and(|h| h.matches(&LAYOUT_B)) {
        return Some(Layout::B);
    }
    if bytes.len() == DIRECTORY_WITH_GUARD_SIZE
        && DirectoryEntry::unpack(&bytes[GUARD_OFFSET..]) == DirectoryEntry::GUARD
    {
        return Some(Layout::B);
    }
    None
}

/// Detect the layout of `bytes` and parse accordingly.
pub fn parse_any(bytes: &[u8], options: &CodecOptions) -> Result<ChunksFile, FormatError> {
    let layout = detect_layout(bytes).ok_or(FormatError::UnknownLayout)?;
    log::debug!("Detected layout {}", layout.spec().name);
    parse_as(bytes, layout, options)
}

/// Parse `bytes` as the given layout.
pub fn parse_as(
    bytes: &[u8],
    layout: Layout,
    options: &CodecOptions,
) -> Result<ChunksFile, FormatError> {
    match layout {
        Layout::A => parse_layout_a_with(bytes, options).map(ChunksFile::A),
        Layout::B => parse_layout_b_with(bytes, options).map(ChunksFile::B),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_detects_layout_a() {
        let bytes = fixtures::layout_a_file(&[(0, 0)]);
        assert_eq!(detect_layout(&bytes), Some(Layout::A));
    }

    #[test]
    fn test_detects_layout_b() {
        let bytes = fixtures::layout_b_file(&[(0, 0)]);
        assert_eq!(detect_layout(&bytes), Some(Layout::B));

        let empty_world = fixtures::layout_b_file(&[]);
        assert_eq!(detect_layout(&empty_world), Some(Layout::B));
    }

    #[test]
    fn test_unknown_input() {
        assert_eq!(detect_layout(&[]), None);
        assert_eq!(detect_layout(&[0u8; 64]), None);
        let result = parse_any(&[1, 2, 3], &CodecOptions::default());
        assert_eq!(result, Err(FormatError::UnknownLayout));
    }

    #[test]
    fn test_parse_any_dispatches() {
        let options = CodecOptions::default();

        let a = parse_any(&fixtures::layout_a_file(&[(1, 2)]), &options).expect("layout A");
        assert_eq!(a.layout(), Layout::A);
        assert_eq!(a.chunk_count(), 1);

        let b = parse_any(&fixtures::layout_b_file(&[(1, 2), (3, 4)]), &options).expect("layout B");
        assert_eq!(b.layout(), Layout::B);
        assert_eq!(b.chunk_count(), 2);
    }

    #[test]
    fn test_parse_as_forced_layout_mismatch() {
        let bytes = fixtures::layout_a_file(&[(0, 0)]);
        let result = parse_as(&bytes, Layout::B, &CodecOptions::default());
        assert!(matches!(result, Err(FormatError::Truncated { .. })));
    }
}
