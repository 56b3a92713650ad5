//! Positions, velocities and the viewport rectangle.

use std::ops::{Add, AddAssign, Mul, Sub};

/// A 2D vector in logical pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Whether both components are finite numbers.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

/// Pixel dimensions of the area a field animates inside.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Viewport covering a block of terminal cells, each `cell_width` by
    /// `cell_height` pixels.
    pub fn from_cells(columns: u16, rows: u16, cell_width: u16, cell_height: u16) -> Self {
        Self {
            width: u32::from(columns) * u32::from(cell_width),
            height: u32::from(rows) * u32::from(cell_height),
        }
    }

    pub fn width_f64(self) -> f64 {
        f64::from(self.width)
    }

    pub fn height_f64(self) -> f64 {
        f64::from(self.height)
    }

    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether `point` lies inside the viewport grown by `margin` on every side.
    pub fn contains_padded(self, point: Vec2, margin: f64) -> bool {
        point.x >= -margin
            && point.x <= self.width_f64() + margin
            && point.y >= -margin
            && point.y <= self.height_f64() + margin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = Vec2::new(0.0, 0.0);
        assert_eq!(a.distance(Vec2::new(3.0, 4.0)), 5.0);
        assert_eq!(a.distance(a), 0.0);
    }

    #[test]
    fn test_arithmetic() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(0.5, -1.0);
        assert_eq!(a + b, Vec2::new(1.5, 1.0));
        assert_eq!(a - b, Vec2::new(0.5, 3.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
    }

    #[test]
    fn test_viewport_from_cells() {
        let viewport = Viewport::from_cells(100, 30, 8, 16);
        assert_eq!(viewport, Viewport::new(800, 480));
        assert!(Viewport::from_cells(0, 30, 8, 16).is_empty());
    }

    #[test]
    fn test_contains_padded() {
        let viewport = Viewport::new(800, 600);
        assert!(viewport.contains_padded(Vec2::new(800.0, 600.0), 0.0));
        assert!(!viewport.contains_padded(Vec2::new(800.1, 300.0), 0.0));
        assert!(viewport.contains_padded(Vec2::new(-150.0, 300.0), 150.0));
    }

    #[test]
    fn test_non_finite() {
        assert!(Vec2::new(1.0, 2.0).is_finite());
        assert!(!Vec2::new(f64::NAN, 2.0).is_finite());
        assert!(!Vec2::new(1.0, f64::INFINITY).is_finite());
    }
}
