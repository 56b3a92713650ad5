//! Core types shared by the backdrop crates.
//!
//! Geometry lives in logical pixels: a [`Viewport`] is the pixel-sized
//! rectangle a field animates inside and a [`Vec2`] is a position or a
//! per-frame velocity within it. Colors are plain RGB triples with an
//! optional alpha for translucent strokes and fades.

mod color;
mod geometry;
mod theme;

pub use color::{Rgb, Rgba};
pub use geometry::{Vec2, Viewport};
pub use theme::Theme;
