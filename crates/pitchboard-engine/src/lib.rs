//! Pitchboard engine crate.
//!
//! Platform-agnostic building blocks for the tactics-board editor:
//! 2D coordinates, the pan/zoom camera, pointer input types, and a
//! renderer-agnostic draw stream. No windowing or GPU code lives here;
//! a host embeds these pieces and supplies its own surface.

pub mod coords;
pub mod input;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod view;
