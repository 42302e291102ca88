//! Shape payloads for the draw stream, one module per shape.

pub mod circle;
pub mod polyline;
pub mod rect;

pub use circle::CircleCmd;
pub use polyline::PolylineCmd;
pub use rect::{DashPattern, StrokeRectCmd};
