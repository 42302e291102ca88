use thiserror::Error;

/// Failure while loading or storing a board.
///
/// Gesture-level no-ops are not errors; only persisted data can be bad.
#[derive(Debug, Error)]
pub enum PersistError {
    /// The blob is not valid JSON for the board record.
    #[error("malformed board data: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The blob parsed but violates the record's value constraints.
    #[error("invalid board data: {0}")]
    Invalid(&'static str),
}
