use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ChunksError;

/// What to do when two chunk records carry the same region coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DuplicatePolicy {
    /// Later record replaces the earlier one at the earlier one's position.
    #[default]
    Overwrite,
    /// Fail the parse with `FormatError::DuplicateChunk`.
    Reject,
}

/// Parse-time knobs for the chunk codec.
///
/// Loaded from RON, e.g.
/// `(duplicate_chunks: Reject, validate_directory: true, pad_short_tail: false)`.
/// Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecOptions {
    pub duplicate_chunks: DuplicatePolicy,
    /// Check directory/slot consistency of Layout B files while parsing.
    pub validate_directory: bool,
    /// Zero-pad a truncated final chunk record instead of rejecting the file.
    pub pad_short_tail: bool,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            duplicate_chunks: DuplicatePolicy::Overwrite,
            validate_directory: true,
            pad_short_tail: false,
        }
    }
}

impl CodecOptions {
    pub fn from_ron_str(ron_str: &str) -> Result<Self, ChunksError> {
        let options = ron::Options::default();
        options
            .from_str(ron_str)
            .map_err(|e| ChunksError::Config(e.to_string()))
    }

    /// Read options from a RON file.
    pub fn load(path: &Path) -> Result<Self, ChunksError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_ron_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = CodecOptions::default();
        assert_eq!(options.duplicate_chunks, DuplicatePolicy::Overwrite);
        assert!(options.validate_directory);
        assert!(!options.pad_short_tail);
    }

    #[test]
    fn test_partial_ron_uses_defaults() {
        let options = CodecOptions::from_ron_str("(duplicate_chunks: Reject)").expect("valid RON");
        assert_eq!(options.duplicate_chunks, DuplicatePolicy::Reject);
        assert!(options.validate_directory);
    }

    #[test]
    fn test_full_ron() {
        let options = CodecOptions::from_ron_str(
            "(duplicate_chunks: Overwrite, validate_directory: false, pad_short_tail: true)",
        )
        .expect("valid RON");
        assert!(!options.validate_directory);
        assert!(options.pad_short_tail);
    }

    #[test]
    fn test_invalid_ron_rejected() {
        let result = CodecOptions::from_ron_str("(duplicate_chunks: Sometimes)");
        assert!(matches!(result, Err(ChunksError::Config(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = CodecOptions::load(Path::new("/nonexistent/editsc/options.ron"));
        assert!(matches!(result, Err(ChunksError::Io(_))));
    }
}
