//! Paint types shared by draw commands.

mod color;

pub use color::Color;
