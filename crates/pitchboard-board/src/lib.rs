//! Tactics-board editor core.
//!
//! Owns the board model (markers, ball, freehand strokes, selection), the
//! pointer gesture state machine, hit testing, the draw pass, and the
//! persistence gateway. Rendering and windowing stay in the host; this
//! crate consumes [`PointerEvent`](pitchboard_engine::input::PointerEvent)s
//! and produces [`DrawList`](pitchboard_engine::scene::DrawList)s.
//!
//! # Quick start
//!
//! ```rust
//! use pitchboard_board::Editor;
//! use pitchboard_engine::coords::Vec2;
//! use pitchboard_engine::input::{MouseButton, PointerEvent};
//!
//! let mut editor = Editor::new();
//!
//! // Click the right-most home player of the default formation.
//! editor.handle(PointerEvent::Down {
//!     button: MouseButton::Left,
//!     pos: Vec2::new(1080.0, 350.0),
//! });
//! editor.handle(PointerEvent::Up {
//!     button: MouseButton::Left,
//!     pos: Vec2::new(1080.0, 350.0),
//! });
//!
//! assert_eq!(editor.board().selection().len(), 1);
//! ```

pub mod editor;
pub mod hit;
pub mod model;
pub mod persist;
pub mod render;

pub use editor::{Editor, EventResult, Tool};
pub use model::{Board, EntityId, Marker, MarkerId, Stroke};
pub use persist::{KeyValueStore, PersistError};
