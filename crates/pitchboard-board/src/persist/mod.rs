//! Persistence gateway: local key-value storage and JSON file exchange.
//!
//! Import is atomic: the whole blob is parsed and validated before any
//! board state is produced, so a failed import never touches the live
//! board. Missing or malformed local-store data degrades to "nothing
//! loaded" without surfacing an error.

mod error;
mod record;

pub use error::PersistError;
pub use record::{BoardRecord, PointRec, StrokeRec};

use crate::model::Board;

/// Key under which the board lives in the host's local store.
pub const LOCAL_STORE_KEY: &str = "tactics";

/// Host-provided string storage, the local-storage analogue.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
}

/// Serializes the board for file export.
pub fn export_json(board: &Board) -> Result<String, PersistError> {
    Ok(serde_json::to_string(&BoardRecord::from_board(board))?)
}

/// Parses and validates a file blob into a fresh board.
///
/// On any failure the caller's board is untouched — swap only on `Ok`.
pub fn import_json(json: &str) -> Result<Board, PersistError> {
    let record: BoardRecord = serde_json::from_str(json)?;
    record.into_board()
}

/// Writes the board to the local store.
pub fn save_local(store: &mut dyn KeyValueStore, board: &Board) -> Result<(), PersistError> {
    let json = export_json(board)?;
    store.set(LOCAL_STORE_KEY, json);
    log::info!("board saved to local store");
    Ok(())
}

/// Reads the board back from the local store.
///
/// Absent, malformed, or invalid data all yield `None`; the caller keeps
/// its current board.
pub fn load_local(store: &dyn KeyValueStore) -> Option<Board> {
    let json = store.get(LOCAL_STORE_KEY)?;
    match import_json(&json) {
        Ok(board) => Some(board),
        Err(err) => {
            log::debug!("ignoring stored board: {err}");
            None
        }
    }
}
