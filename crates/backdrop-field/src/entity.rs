//! The entity abstraction shared by point and blob fields.

use backdrop_core::{Vec2, Viewport};

use crate::error::FieldError;
use crate::rng::Xorshift64;
use crate::surface::Surface;

/// Position and per-frame velocity of a moving entity.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Motion {
    pub position: Vec2,
    pub velocity: Vec2,
}

impl Motion {
    pub fn new(position: Vec2, velocity: Vec2) -> Self {
        Self { position, velocity }
    }

    /// Advance one frame, then bounce off the viewport edges.
    ///
    /// `margin` widens the bounds on every side; a coordinate must go past
    /// `-margin` or `dimension + margin` before it reflects.
    pub fn step(&mut self, viewport: Viewport, margin: f64) {
        self.position += self.velocity;
        self.reflect(viewport, margin);
    }

    /// Point each velocity component back inside if its coordinate is out
    /// of bounds. Axes are independent. Repeating the check at the same
    /// position leaves the velocity unchanged.
    pub fn reflect(&mut self, viewport: Viewport, margin: f64) {
        self.velocity.x = reflect_axis(
            self.position.x,
            self.velocity.x,
            -margin,
            viewport.width_f64() + margin,
        );
        self.velocity.y = reflect_axis(
            self.position.y,
            self.velocity.y,
            -margin,
            viewport.height_f64() + margin,
        );
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite()
    }
}

fn reflect_axis(position: f64, velocity: f64, low: f64, high: f64) -> f64 {
    if position < low {
        velocity.abs()
    } else if position > high {
        -velocity.abs()
    } else {
        velocity
    }
}

/// Something that lives in a [`Field`](crate::Field): it moves every frame
/// and knows how to draw itself.
pub trait Entity: Sized {
    /// Tuning shared by every entity of this kind.
    type Options: Clone + std::fmt::Debug;

    /// Check options before any entity is spawned.
    fn validate(options: &Self::Options) -> Result<(), FieldError>;

    /// Create the `index`-th entity at a random spot inside `viewport`.
    fn spawn(
        index: usize,
        viewport: Viewport,
        options: &Self::Options,
        rng: &mut Xorshift64,
    ) -> Self;

    fn motion(&self) -> &Motion;

    fn motion_mut(&mut self) -> &mut Motion;

    /// Extra room past the viewport edge before the entity bounces.
    fn margin(&self) -> f64 {
        0.0
    }

    /// Whether the entity is in a state that can be updated and drawn.
    fn is_valid(&self) -> bool {
        self.motion().is_finite() && self.margin().is_finite()
    }

    /// Advance one frame inside `viewport`.
    fn update(&mut self, viewport: Viewport) {
        let margin = self.margin();
        self.motion_mut().step(viewport, margin);
    }

    /// Draw this entity alone.
    fn render<S: Surface + ?Sized>(&self, options: &Self::Options, surface: &mut S);

    /// Draw a whole field. Invalid entities are skipped. Kinds with
    /// interactions between entities override this.
    fn render_all<S: Surface + ?Sized>(entities: &[Self], options: &Self::Options, surface: &mut S) {
        for entity in entities.iter().filter(|e| e.is_valid()) {
            entity.render(options, surface);
        }
    }
}
