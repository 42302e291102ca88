//! Renderer-agnostic draw stream.
//!
//! Responsibilities:
//! - store draw commands recorded by a draw pass
//! - provide deterministic ordering (z-layer + insertion order)
//! - keep shape payloads isolated per file under `scene::shapes`
//!
//! A renderer walks [`DrawList::iter_in_paint_order`] and rasterizes each
//! command; the stream never reads back from the renderer.

mod cmd;
mod list;
mod order;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::{DrawItem, DrawList};
pub use order::{SortKey, ZIndex};
