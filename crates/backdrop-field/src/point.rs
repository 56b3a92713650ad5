//! Point entities: small dots joined by translucent lines when close.

use backdrop_core::{Rgb, Rgba, Vec2, Viewport};

use crate::entity::{Entity, Motion};
use crate::error::{FieldError, check_non_negative, check_range};
use crate::links::{LinkStrategy, find_links};
use crate::rng::Xorshift64;
use crate::surface::Surface;

/// Tuning for a point field.
#[derive(Debug, Clone, PartialEq)]
pub struct PointOptions {
    /// Smallest dot radius in pixels.
    pub radius_min: f64,
    /// Largest dot radius in pixels (exclusive).
    pub radius_max: f64,
    /// Largest per-frame speed on each axis.
    pub max_speed: f64,
    pub color: Rgba,
    /// Points strictly closer than this are linked.
    pub link_distance: f64,
    pub link_color: Rgba,
    pub link_strategy: LinkStrategy,
}

impl Default for PointOptions {
    fn default() -> Self {
        Self {
            radius_min: 1.0,
            radius_max: 3.0,
            max_speed: 0.3,
            color: Rgba::opaque(Rgb::new(0, 245, 212)),
            link_distance: 120.0,
            link_color: Rgba::new(59, 130, 246, 0.2),
            link_strategy: LinkStrategy::Auto,
        }
    }
}

/// A single dot.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub motion: Motion,
    pub radius: f64,
    pub color: Rgba,
}

impl Entity for Point {
    type Options = PointOptions;

    fn validate(options: &PointOptions) -> Result<(), FieldError> {
        check_range("point radius", options.radius_min, options.radius_max)?;
        check_non_negative("point speed", options.max_speed)?;
        check_non_negative("link distance", options.link_distance)
    }

    fn spawn(_index: usize, viewport: Viewport, options: &PointOptions, rng: &mut Xorshift64) -> Self {
        let position = Vec2::new(
            rng.next_range(0.0, viewport.width_f64()),
            rng.next_range(0.0, viewport.height_f64()),
        );
        let radius = rng.next_range(options.radius_min, options.radius_max);
        let velocity = Vec2::new(
            rng.next_signed(options.max_speed),
            rng.next_signed(options.max_speed),
        );
        Point {
            motion: Motion::new(position, velocity),
            radius,
            color: options.color,
        }
    }

    fn motion(&self) -> &Motion {
        &self.motion
    }

    fn motion_mut(&mut self) -> &mut Motion {
        &mut self.motion
    }

    fn is_valid(&self) -> bool {
        self.motion.is_finite() && self.radius.is_finite()
    }

    fn render<S: Surface + ?Sized>(&self, _options: &PointOptions, surface: &mut S) {
        surface.fill_circle(self.motion.position, self.radius, self.color);
    }

    /// Each dot is drawn, then its links to later dots, so a pair is only
    /// stroked once.
    fn render_all<S: Surface + ?Sized>(points: &[Self], options: &PointOptions, surface: &mut S) {
        let positions: Vec<Vec2> = points
            .iter()
            .map(|p| {
                if p.is_valid() {
                    p.motion.position
                } else {
                    Vec2::new(f64::NAN, f64::NAN)
                }
            })
            .collect();
        let links = find_links(&positions, options.link_distance, options.link_strategy);
        let mut links = links.into_iter().peekable();

        for (i, point) in points.iter().enumerate() {
            if !point.is_valid() {
                continue;
            }
            point.render(options, surface);
            while let Some((_, j)) = links.next_if(|&(a, _)| a == i) {
                surface.stroke_line(positions[i], positions[j], options.link_color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::recording::{Op, RecordingSurface};

    fn point_at(x: f64, y: f64) -> Point {
        Point {
            motion: Motion::new(Vec2::new(x, y), Vec2::ZERO),
            radius: 2.0,
            color: PointOptions::default().color,
        }
    }

    #[test]
    fn test_spawn_within_viewport() {
        let viewport = Viewport::new(800, 600);
        let options = PointOptions::default();
        let mut rng = Xorshift64::new(1);
        for i in 0..500 {
            let p = Point::spawn(i, viewport, &options, &mut rng);
            assert!((0.0..800.0).contains(&p.motion.position.x));
            assert!((0.0..600.0).contains(&p.motion.position.y));
            assert!((1.0..3.0).contains(&p.radius));
            assert!(p.motion.velocity.x.abs() <= 0.3);
            assert!(p.motion.velocity.y.abs() <= 0.3);
        }
    }

    #[test]
    fn test_render_links_close_pairs_once() {
        let points = vec![point_at(0.0, 0.0), point_at(100.0, 0.0), point_at(150.0, 200.0)];
        let mut surface = RecordingSurface::new(Viewport::new(800, 600));

        Point::render_all(&points, &PointOptions::default(), &mut surface);

        assert_eq!(surface.count(|op| matches!(op, Op::Circle { .. })), 3);
        assert_eq!(
            surface.lines(),
            vec![(Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0))]
        );
    }

    #[test]
    fn test_render_order_fill_then_links() {
        let points = vec![point_at(0.0, 0.0), point_at(10.0, 0.0), point_at(20.0, 0.0)];
        let mut surface = RecordingSurface::new(Viewport::new(800, 600));

        Point::render_all(&points, &PointOptions::default(), &mut surface);

        let kinds: Vec<&str> = surface
            .ops
            .iter()
            .map(|op| match op {
                Op::Circle { .. } => "circle",
                Op::Line { .. } => "line",
                _ => "other",
            })
            .collect();
        assert_eq!(
            kinds,
            vec!["circle", "line", "line", "circle", "line", "circle"]
        );
    }

    #[test]
    fn test_render_uses_link_color() {
        let points = vec![point_at(0.0, 0.0), point_at(50.0, 0.0)];
        let options = PointOptions::default();
        let mut surface = RecordingSurface::new(Viewport::new(800, 600));

        Point::render_all(&points, &options, &mut surface);

        assert!(surface.ops.contains(&Op::Line {
            from: Vec2::new(0.0, 0.0),
            to: Vec2::new(50.0, 0.0),
            color: options.link_color,
        }));
    }

    #[test]
    fn test_invalid_point_skipped() {
        let mut bad = point_at(5.0, 0.0);
        bad.motion.position.x = f64::NAN;
        let points = vec![point_at(0.0, 0.0), bad, point_at(10.0, 0.0)];
        let mut surface = RecordingSurface::new(Viewport::new(800, 600));

        Point::render_all(&points, &PointOptions::default(), &mut surface);

        assert_eq!(surface.count(|op| matches!(op, Op::Circle { .. })), 2);
        assert_eq!(
            surface.lines(),
            vec![(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0))]
        );
    }

    #[test]
    fn test_validate() {
        assert!(Point::validate(&PointOptions::default()).is_ok());
        let bad = PointOptions {
            link_distance: -1.0,
            ..PointOptions::default()
        };
        assert!(Point::validate(&bad).is_err());
        let reversed = PointOptions {
            radius_min: 3.0,
            radius_max: 1.0,
            ..PointOptions::default()
        };
        assert!(Point::validate(&reversed).is_err());
    }
}
