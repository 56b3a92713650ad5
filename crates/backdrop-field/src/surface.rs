//! The drawing surface fields render onto.

use backdrop_core::{Rgba, Vec2, Viewport};

/// A pixel-addressed drawing target.
///
/// Drawing is infallible: anything outside the surface is clipped.
pub trait Surface {
    /// Current size in pixels.
    fn size(&self) -> Viewport;

    /// Erase everything drawn so far.
    fn clear(&mut self);

    /// Fill a solid circle.
    fn fill_circle(&mut self, center: Vec2, radius: f64, color: Rgba);

    /// Stroke a straight segment.
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba);

    /// Fill a circle with a radial gradient running from `color` at the
    /// center to fully transparent at `radius`.
    fn fill_radial_gradient(&mut self, center: Vec2, radius: f64, color: Rgba);
}

#[cfg(test)]
pub(crate) mod recording {
    use super::*;

    /// One recorded drawing call.
    #[derive(Debug, Clone, PartialEq)]
    pub enum Op {
        Clear,
        Circle { center: Vec2, radius: f64, color: Rgba },
        Line { from: Vec2, to: Vec2, color: Rgba },
        Gradient { center: Vec2, radius: f64, color: Rgba },
    }

    /// Surface that remembers every call, for assertions in tests.
    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        pub viewport: Viewport,
        pub ops: Vec<Op>,
    }

    impl RecordingSurface {
        pub fn new(viewport: Viewport) -> Self {
            Self {
                viewport,
                ops: Vec::new(),
            }
        }

        pub fn lines(&self) -> Vec<(Vec2, Vec2)> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Line { from, to, .. } => Some((*from, *to)),
                    _ => None,
                })
                .collect()
        }

        pub fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
            self.ops.iter().filter(|op| pred(op)).count()
        }
    }

    impl Surface for RecordingSurface {
        fn size(&self) -> Viewport {
            self.viewport
        }

        fn clear(&mut self) {
            self.ops.push(Op::Clear);
        }

        fn fill_circle(&mut self, center: Vec2, radius: f64, color: Rgba) {
            self.ops.push(Op::Circle {
                center,
                radius,
                color,
            });
        }

        fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba) {
            self.ops.push(Op::Line { from, to, color });
        }

        fn fill_radial_gradient(&mut self, center: Vec2, radius: f64, color: Rgba) {
            self.ops.push(Op::Gradient {
                center,
                radius,
                color,
            });
        }
    }
}
