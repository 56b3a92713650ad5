//! Animated entity fields for the backdrop.
//!
//! A [`Field`] owns a fixed set of entities that drift inside a viewport and
//! bounce off its edges. Two entity kinds are provided: [`Point`]s, small
//! dots joined by translucent lines when close, and [`Blob`]s, large soft
//! radial glows. Fields draw onto any [`Surface`]; [`CellCanvas`] is the
//! terminal implementation. An [`Animation`] pairs a field with a
//! [`StopHandle`], and a [`FramePacer`] tells the event loop when the next
//! frame is due.

mod animation;
mod blob;
mod canvas;
mod chars;
mod entity;
mod error;
mod field;
mod links;
mod point;
mod rng;
mod surface;

pub use animation::{Animation, FramePacer, StopHandle};
pub use blob::{Blob, BlobOptions};
pub use canvas::{CanvasCell, CellCanvas};
pub use entity::{Entity, Motion};
pub use error::FieldError;
pub use field::Field;
pub use links::{AUTO_GRID_THRESHOLD, LinkStrategy, find_links};
pub use point::{Point, PointOptions};
pub use rng::Xorshift64;
pub use surface::Surface;
