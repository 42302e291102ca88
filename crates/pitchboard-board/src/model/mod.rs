//! Board state: markers, ball, strokes, and the selection set.

mod board;
mod formation;
mod marker;
mod stroke;

pub use board::Board;
pub use formation::BOARD_WIDTH;
pub use marker::{EntityId, Marker, MarkerId};
pub use stroke::Stroke;
