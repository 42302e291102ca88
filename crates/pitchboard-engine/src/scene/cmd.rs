use crate::scene::shapes::circle::CircleCmd;
use crate::scene::shapes::polyline::PolylineCmd;
use crate::scene::shapes::rect::StrokeRectCmd;

/// Renderer-agnostic draw command.
///
/// Extending the stream:
/// - add a shape module under `scene::shapes::*`
/// - add a variant here
/// - implement push helpers inside that shape module
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Circle(CircleCmd),
    Polyline(PolylineCmd),
    StrokeRect(StrokeRectCmd),
}
