//! Platform-agnostic pointer input.
//!
//! The host runtime translates its window-system events into these types
//! and feeds them to the editor one at a time.

mod types;

pub use types::{MouseButton, PointerEvent, WheelDelta};
