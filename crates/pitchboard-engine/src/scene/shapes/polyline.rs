use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Connected line strip through `points` in order.
///
/// A single-point polyline is legal (a stroke the user tapped rather than
/// dragged); renderers may draw it as a dot or skip it.
#[derive(Debug, Clone, PartialEq)]
pub struct PolylineCmd {
    pub points: Vec<Vec2>,
    pub color: Color,
    pub width: f32,
}

impl DrawList {
    /// Records a polyline draw command.
    #[inline]
    pub fn push_polyline(&mut self, z: ZIndex, points: Vec<Vec2>, color: Color, width: f32) {
        self.push(
            z,
            DrawCmd::Polyline(PolylineCmd {
                points,
                color,
                width,
            }),
        );
    }
}
