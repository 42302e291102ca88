use crate::coords::Vec2;

/// Mouse button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    /// Platform button not represented above, with a stable platform code.
    Other(u16),
}

/// Wheel / trackpad scroll amount.
///
/// Only the sign matters to the editor: positive `y` scrolls toward the
/// user (zoom out), negative away (zoom in).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WheelDelta {
    pub x: f32,
    pub y: f32,
}

impl WheelDelta {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Pointer events emitted by the host runtime.
///
/// Coordinates are surface pixels relative to the canvas origin.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PointerEvent {
    Down { button: MouseButton, pos: Vec2 },
    Moved { pos: Vec2 },
    Up { button: MouseButton, pos: Vec2 },
    Wheel { delta: WheelDelta, pos: Vec2 },
    /// Pointer capture was lost (pointer left the surface mid-gesture).
    CaptureLost,
}
