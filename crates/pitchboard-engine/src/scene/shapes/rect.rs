use crate::coords::Rect;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// On/off lengths for a dashed outline, in pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DashPattern {
    pub on: f32,
    pub off: f32,
}

/// Stroked (outline-only) rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeRectCmd {
    pub rect: Rect,
    pub color: Color,
    pub width: f32,
    /// `None` draws a solid outline.
    pub dash: Option<DashPattern>,
}

impl DrawList {
    /// Records a solid rectangle outline.
    #[inline]
    pub fn push_stroke_rect(&mut self, z: ZIndex, rect: Rect, color: Color, width: f32) {
        self.push(
            z,
            DrawCmd::StrokeRect(StrokeRectCmd {
                rect,
                color,
                width,
                dash: None,
            }),
        );
    }

    /// Records a dashed rectangle outline.
    #[inline]
    pub fn push_dashed_rect(
        &mut self,
        z: ZIndex,
        rect: Rect,
        color: Color,
        width: f32,
        dash: DashPattern,
    ) {
        self.push(
            z,
            DrawCmd::StrokeRect(StrokeRectCmd {
                rect,
                color,
                width,
                dash: Some(dash),
            }),
        );
    }
}
