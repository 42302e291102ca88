use crate::coords::Vec2;

/// Zoom scale is clamped to this range. The transform itself works at any
/// positive scale; the clamp keeps wheel spam from rendering the board as a
/// single pixel or a single marker.
pub const MIN_SCALE: f32 = 0.05;
pub const MAX_SCALE: f32 = 50.0;

/// Per-step zoom factors for one wheel notch.
const ZOOM_IN_STEP: f32 = 1.1;
const ZOOM_OUT_STEP: f32 = 0.9;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// Pan/zoom view transform.
///
/// World positions are stored untouched in the model; the camera maps them
/// to surface pixels and back:
///
/// `world = (screen - offset) / scale`
/// `screen = world * scale + offset`
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    /// Screen-space translation in pixels.
    pub offset: Vec2,
    /// Uniform zoom factor, always within `[MIN_SCALE, MAX_SCALE]`.
    scale: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            offset: Vec2::zero(),
            scale: 1.0,
        }
    }
}

impl Camera {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    #[inline]
    pub fn to_world(&self, screen: Vec2) -> Vec2 {
        (screen - self.offset) / self.scale
    }

    #[inline]
    pub fn to_screen(&self, world: Vec2) -> Vec2 {
        world * self.scale + self.offset
    }

    /// Moves the view so that dragging by `offset` pixels keeps the scale.
    #[inline]
    pub fn pan_to(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    /// One zoom step anchored at a screen point.
    ///
    /// The world point under `screen_anchor` is captured before the scale
    /// change and the offset is recomputed afterwards so the same world
    /// point stays under the cursor. Holds even when the step lands on the
    /// scale clamp, since the offset is derived from the clamped scale.
    pub fn zoom_at(&mut self, screen_anchor: Vec2, direction: ZoomDirection) {
        let world_anchor = self.to_world(screen_anchor);

        let step = match direction {
            ZoomDirection::In => ZOOM_IN_STEP,
            ZoomDirection::Out => ZOOM_OUT_STEP,
        };
        self.scale = (self.scale * step).clamp(MIN_SCALE, MAX_SCALE);

        self.offset = screen_anchor - world_anchor * self.scale;
    }
}
