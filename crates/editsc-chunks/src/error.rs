/// Structural problems found while decoding or re-encoding a chunk file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("bad chunk magic at offset {offset}: {magic1:#010x} {magic2:#010x}")]
    BadMagic { offset: usize, magic1: u32, magic2: u32 },

    #[error("truncated file: expected {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },

    #[error("guard directory entry is ({x}, {z}, {index}), expected (0, 0, -1)")]
    BadGuard { x: i32, z: i32, index: i32 },

    #[error("chunk ({x}, {z}) at position {position} has no directory entry")]
    MissingSlot { x: i32, z: i32, position: usize },

    #[error("directory maps chunk ({x}, {z}) to slot {index}, but it is stored at position {position}")]
    SlotMismatch { x: i32, z: i32, position: usize, index: i32 },

    #[error("chunk ({x}, {z}) is registered in {count} directory slots")]
    DuplicateSlot { x: i32, z: i32, count: usize },

    #[error("directory slot {slot} is in use with negative coordinate ({x}, {z})")]
    NegativeSlotCoord { slot: usize, x: i32, z: i32 },

    #[error("directory slot {slot} ({x}, {z}) points at position {index}, but the file has {chunks} chunks")]
    DanglingSlot { slot: usize, x: i32, z: i32, index: i32, chunks: usize },

    #[error("duplicate chunk ({x}, {z})")]
    DuplicateChunk { x: i32, z: i32 },

    #[error("unrecognized chunk file layout")]
    UnknownLayout,
}

/// Re-encoded bytes diverge from the source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("round-trip mismatch at byte offset {offset}")]
pub struct RoundTripError {
    /// First byte offset at which the two buffers differ. Equals the shorter
    /// length when one buffer is a strict prefix of the other.
    pub offset: usize,
}

/// Errors that can occur anywhere in the chunk codec.
#[derive(Debug, thiserror::Error)]
pub enum ChunksError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    RoundTrip(#[from] RoundTripError),

    #[error("invalid codec options: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
