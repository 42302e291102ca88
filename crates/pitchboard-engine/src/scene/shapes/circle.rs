use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Circle draw payload: filled disc with an optional outline.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub fill: Color,
    pub outline: Option<Color>,
}

impl DrawList {
    /// Records a filled + outlined circle.
    #[inline]
    pub fn push_circle(
        &mut self,
        z: ZIndex,
        center: Vec2,
        radius: f32,
        fill: Color,
        outline: Option<Color>,
    ) {
        self.push(
            z,
            DrawCmd::Circle(CircleCmd {
                center,
                radius,
                fill,
                outline,
            }),
        );
    }

    /// Records a solid circle without an outline.
    #[inline]
    pub fn push_solid_circle(&mut self, z: ZIndex, center: Vec2, radius: f32, fill: Color) {
        self.push_circle(z, center, radius, fill, None);
    }
}
