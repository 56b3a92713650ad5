//! Color types and alpha compositing.

use ratatui::style::Color;

/// An opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Composite `top` over this color with the given coverage (0.0 - 1.0).
    pub fn blend(self, top: Rgb, alpha: f32) -> Rgb {
        let alpha = alpha.clamp(0.0, 1.0);
        let mix = |under: u8, over: u8| -> u8 {
            let under = under as f32;
            let over = over as f32;
            (under + (over - under) * alpha).round() as u8
        };
        Rgb::new(mix(self.r, top.r), mix(self.g, top.g), mix(self.b, top.b))
    }

    /// Composite a translucent color over this one.
    pub fn blend_rgba(self, top: Rgba) -> Rgb {
        self.blend(top.rgb(), top.a)
    }

    /// Convert to a Ratatui color.
    pub fn color(self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

/// An RGB color with a floating point alpha channel.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity from 0.0 (transparent) to 1.0 (opaque).
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(rgb: Rgb) -> Self {
        Self::new(rgb.r, rgb.g, rgb.b, 1.0)
    }

    pub const fn rgb(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_extremes() {
        let black = Rgb::new(0, 0, 0);
        let white = Rgb::new(255, 255, 255);
        assert_eq!(black.blend(white, 0.0), black);
        assert_eq!(black.blend(white, 1.0), white);
        assert_eq!(black.blend(white, 2.0), white);
    }

    #[test]
    fn test_blend_half() {
        let under = Rgb::new(0, 100, 200);
        let over = Rgb::new(200, 100, 0);
        assert_eq!(under.blend(over, 0.5), Rgb::new(100, 100, 100));
    }

    #[test]
    fn test_blend_rgba_uses_alpha() {
        let under = Rgb::new(0, 0, 0);
        let over = Rgba::new(100, 200, 50, 0.2);
        assert_eq!(under.blend_rgba(over), Rgb::new(20, 40, 10));
    }
}
