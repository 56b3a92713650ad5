//! A drawing surface made of terminal cells.
//!
//! Each cell covers `cell_width × cell_height` logical pixels. Points become
//! dot glyphs, links become faint box-drawing strokes and radial gradients
//! tint cell backgrounds. The result is turned into styled Ratatui lines.

use backdrop_core::{Rgb, Rgba, Vec2, Viewport};
use ratatui::{
    style::Style,
    text::{Line, Span},
};

use crate::chars::{LINK_FALLING, LINK_HORIZONTAL, LINK_RISING, LINK_VERTICAL, POINT_CHARS};
use crate::surface::Surface;

/// What was last drawn into a cell. Points are never covered by links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layer {
    Empty,
    Link,
    Point,
}

/// One terminal cell of the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasCell {
    pub glyph: char,
    pub fg: Rgb,
    pub bg: Rgb,
    layer: Layer,
}

impl CanvasCell {
    fn blank(background: Rgb) -> Self {
        Self {
            glyph: ' ',
            fg: background,
            bg: background,
            layer: Layer::Empty,
        }
    }
}

/// Terminal cell grid implementing [`Surface`].
#[derive(Debug, Clone)]
pub struct CellCanvas {
    columns: u16,
    rows: u16,
    cell_width: u16,
    cell_height: u16,
    background: Rgb,
    cells: Vec<CanvasCell>,
}

impl CellCanvas {
    pub fn new(columns: u16, rows: u16, cell_width: u16, cell_height: u16, background: Rgb) -> Self {
        Self {
            columns,
            rows,
            cell_width: cell_width.max(1),
            cell_height: cell_height.max(1),
            background,
            cells: vec![CanvasCell::blank(background); usize::from(columns) * usize::from(rows)],
        }
    }

    /// Reallocate for a new cell count. Everything drawn is lost.
    pub fn resize(&mut self, columns: u16, rows: u16) {
        self.columns = columns;
        self.rows = rows;
        self.cells = vec![CanvasCell::blank(self.background); usize::from(columns) * usize::from(rows)];
    }

    /// Background used by the next [`Surface::clear`].
    pub fn set_background(&mut self, background: Rgb) {
        self.background = background;
    }

    pub fn cell(&self, column: u16, row: u16) -> Option<&CanvasCell> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        self.cells
            .get(usize::from(row) * usize::from(self.columns) + usize::from(column))
    }

    fn cell_mut(&mut self, column: i64, row: i64) -> Option<&mut CanvasCell> {
        if column < 0 || row < 0 || column >= i64::from(self.columns) || row >= i64::from(self.rows)
        {
            return None;
        }
        let index = row as usize * usize::from(self.columns) + column as usize;
        self.cells.get_mut(index)
    }

    /// Cell coordinates containing a pixel position, unclipped.
    fn cell_coords(&self, p: Vec2) -> (i64, i64) {
        (
            (p.x / f64::from(self.cell_width)).floor() as i64,
            (p.y / f64::from(self.cell_height)).floor() as i64,
        )
    }

    /// Pixel position of a cell's center.
    fn cell_center(&self, column: u16, row: u16) -> Vec2 {
        Vec2::new(
            (f64::from(column) + 0.5) * f64::from(self.cell_width),
            (f64::from(row) + 0.5) * f64::from(self.cell_height),
        )
    }

    /// Inclusive range of cell indices covering `[low, high]` pixels on an
    /// axis, clamped to `0..count`.
    fn cell_span(low: f64, high: f64, cell: u16, count: u16) -> Option<(u16, u16)> {
        if count == 0 {
            return None;
        }
        let first = (low / f64::from(cell)).floor();
        let last = (high / f64::from(cell)).floor();
        let max = f64::from(count - 1);
        if last < 0.0 || first > max {
            return None;
        }
        Some((first.max(0.0) as u16, last.min(max) as u16))
    }

    /// Styled lines, one per row, ready to hand to a `Paragraph`.
    pub fn to_lines(&self) -> Vec<Line<'static>> {
        (0..self.rows)
            .map(|row| {
                let spans: Vec<Span> = (0..self.columns)
                    .filter_map(|column| self.cell(column, row))
                    .map(|cell| {
                        Span::styled(
                            cell.glyph.to_string(),
                            Style::new().fg(cell.fg.color()).bg(cell.bg.color()),
                        )
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }
}

impl Surface for CellCanvas {
    fn size(&self) -> Viewport {
        Viewport::from_cells(self.columns, self.rows, self.cell_width, self.cell_height)
    }

    fn clear(&mut self) {
        let blank = CanvasCell::blank(self.background);
        self.cells.fill(blank);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f64, color: Rgba) {
        if !center.is_finite() || !radius.is_finite() {
            return;
        }
        let glyph = if radius < 1.5 {
            POINT_CHARS[0]
        } else if radius < 2.5 {
            POINT_CHARS[1]
        } else {
            POINT_CHARS[2]
        };
        let (column, row) = self.cell_coords(center);
        if let Some(cell) = self.cell_mut(column, row) {
            cell.glyph = glyph;
            cell.fg = cell.bg.blend_rgba(color);
            cell.layer = Layer::Point;
        }
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba) {
        let size = self.size();
        let Some((from, to)) = clip_segment(from, to, size.width_f64(), size.height_f64()) else {
            return;
        };

        let delta = to - from;
        let glyph = link_glyph(delta);
        let (mut x, mut y) = self.cell_coords(from);
        let (x1, y1) = self.cell_coords(to);

        // Bresenham over cells.
        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            if let Some(cell) = self.cell_mut(x, y) {
                match cell.layer {
                    Layer::Point => {}
                    Layer::Link => cell.fg = cell.fg.blend_rgba(color),
                    Layer::Empty => {
                        cell.glyph = glyph;
                        cell.fg = cell.bg.blend_rgba(color);
                        cell.layer = Layer::Link;
                    }
                }
            }
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn fill_radial_gradient(&mut self, center: Vec2, radius: f64, color: Rgba) {
        if !center.is_finite() || !radius.is_finite() || radius <= 0.0 {
            return;
        }
        let Some((first_col, last_col)) =
            Self::cell_span(center.x - radius, center.x + radius, self.cell_width, self.columns)
        else {
            return;
        };
        let Some((first_row, last_row)) =
            Self::cell_span(center.y - radius, center.y + radius, self.cell_height, self.rows)
        else {
            return;
        };

        for row in first_row..=last_row {
            for column in first_col..=last_col {
                let distance = self.cell_center(column, row).distance(center);
                if distance >= radius {
                    continue;
                }
                let alpha = color.a * (1.0 - distance / radius) as f32;
                if let Some(cell) = self.cell_mut(i64::from(column), i64::from(row)) {
                    cell.bg = cell.bg.blend(color.rgb(), alpha);
                    if cell.layer == Layer::Empty {
                        cell.fg = cell.bg;
                    }
                }
            }
        }
    }
}

/// Box-drawing glyph closest to the direction of `delta`.
fn link_glyph(delta: Vec2) -> char {
    let (ax, ay) = (delta.x.abs(), delta.y.abs());
    // tan(22.5°)
    const SHALLOW: f64 = 0.414;
    if ay <= ax * SHALLOW {
        LINK_HORIZONTAL
    } else if ax <= ay * SHALLOW {
        LINK_VERTICAL
    } else if (delta.x > 0.0) == (delta.y > 0.0) {
        LINK_FALLING
    } else {
        LINK_RISING
    }
}

/// Clip a segment to `[0, width] × [0, height]` (Liang-Barsky).
fn clip_segment(from: Vec2, to: Vec2, width: f64, height: f64) -> Option<(Vec2, Vec2)> {
    if !from.is_finite() || !to.is_finite() {
        return None;
    }
    let d = to - from;
    let mut t0: f64 = 0.0;
    let mut t1: f64 = 1.0;
    for (p, q) in [
        (-d.x, from.x),
        (d.x, width - from.x),
        (-d.y, from.y),
        (d.y, height - from.y),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }
    Some((from + d * t0, from + d * t1))
}
