//! 2D coordinate types.
//!
//! `Vec2` doubles as a point and a displacement; `Rect` is axis-aligned.
//! Both are used for screen space (surface pixels) and world space (board
//! units) — the [`view`](crate::view) module converts between the two.

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
