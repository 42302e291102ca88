//! View transform between screen and world space.

mod camera;

pub use camera::{Camera, MAX_SCALE, MIN_SCALE, ZoomDirection};
