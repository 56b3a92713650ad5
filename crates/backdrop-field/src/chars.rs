//! Glyphs used by the cell canvas.

/// Dot glyphs for small, medium and large points.
pub const POINT_CHARS: &[char] = &['·', '•', '●'];

/// Link glyph for a mostly horizontal segment.
pub const LINK_HORIZONTAL: char = '─';

/// Link glyph for a mostly vertical segment.
pub const LINK_VERTICAL: char = '│';

/// Link glyph for a segment falling to the right (y grows downwards).
pub const LINK_FALLING: char = '╲';

/// Link glyph for a segment rising to the right.
pub const LINK_RISING: char = '╱';
