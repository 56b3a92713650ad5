//! Blob entities: large soft glows that drift slowly.

use backdrop_core::{Rgba, Vec2, Viewport};

use crate::entity::{Entity, Motion};
use crate::error::{FieldError, check_non_negative, check_range};
use crate::rng::Xorshift64;
use crate::surface::Surface;

/// Tuning for a blob field.
#[derive(Debug, Clone, PartialEq)]
pub struct BlobOptions {
    pub radius_min: f64,
    pub radius_max: f64,
    pub max_speed: f64,
    /// Colors assigned in turn by entity index.
    pub palette: Vec<Rgba>,
}

impl Default for BlobOptions {
    fn default() -> Self {
        Self {
            radius_min: 120.0,
            radius_max: 200.0,
            max_speed: 0.15,
            palette: vec![Rgba::new(0, 245, 212, 0.18), Rgba::new(168, 85, 247, 0.18)],
        }
    }
}

/// A soft radial glow.
#[derive(Debug, Clone, PartialEq)]
pub struct Blob {
    pub motion: Motion,
    pub radius: f64,
    pub color: Rgba,
}

impl Entity for Blob {
    type Options = BlobOptions;

    fn validate(options: &BlobOptions) -> Result<(), FieldError> {
        check_range("blob radius", options.radius_min, options.radius_max)?;
        check_non_negative("blob speed", options.max_speed)?;
        if options.palette.is_empty() {
            return Err(FieldError::EmptyPalette("blobs"));
        }
        Ok(())
    }

    fn spawn(index: usize, viewport: Viewport, options: &BlobOptions, rng: &mut Xorshift64) -> Self {
        let position = Vec2::new(
            rng.next_range(0.0, viewport.width_f64()),
            rng.next_range(0.0, viewport.height_f64()),
        );
        let radius = rng.next_range(options.radius_min, options.radius_max);
        let velocity = Vec2::new(
            rng.next_signed(options.max_speed),
            rng.next_signed(options.max_speed),
        );
        let color = options
            .palette
            .get(index % options.palette.len().max(1))
            .copied()
            .unwrap_or_default();
        Blob {
            motion: Motion::new(position, velocity),
            radius,
            color,
        }
    }

    fn motion(&self) -> &Motion {
        &self.motion
    }

    fn motion_mut(&mut self) -> &mut Motion {
        &mut self.motion
    }

    /// Blobs fade out past the edge before turning around.
    fn margin(&self) -> f64 {
        self.radius
    }

    fn render<S: Surface + ?Sized>(&self, _options: &BlobOptions, surface: &mut S) {
        surface.fill_radial_gradient(self.motion.position, self.radius, self.color);
    }
}
