//! Rendering-agnostic primitives shared by oxtheme and its surfaces.
pub mod color;
pub mod geom;
pub mod render;

pub use color::ColorU8;
