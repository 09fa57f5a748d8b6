use thiserror::Error;

/// Errors raised by the shared editsc data definitions.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Failed to parse block type RON: {0}")]
    BlockTypeParse(String),
}
