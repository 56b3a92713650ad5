//! Proximity links between nearby points.
//!
//! Two strategies produce the same ordered list of `(i, j)` pairs with
//! `i < j`: a plain pairwise scan, which is O(n²), and a uniform grid whose
//! cells are as wide as the link distance, so only neighbouring cells need
//! to be compared.

use std::collections::HashMap;

use backdrop_core::Vec2;

/// Above this many points `Auto` switches from pairwise to grid.
pub const AUTO_GRID_THRESHOLD: usize = 300;

/// Largest grid cell coordinate, in cells, that converts to `i64` exactly
/// and leaves room for neighbour offsets.
const MAX_GRID_CELL: f64 = (1u64 << 52) as f64;

/// How to find pairs of points closer than the link distance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LinkStrategy {
    /// Pairwise for small fields, grid for large ones.
    #[default]
    Auto,
    /// Compare every pair.
    Pairwise,
    /// Bucket points into a uniform grid first.
    Grid,
}

impl LinkStrategy {
    /// The concrete strategy used for `count` points.
    pub fn resolve(self, count: usize) -> LinkStrategy {
        match self {
            LinkStrategy::Auto if count > AUTO_GRID_THRESHOLD => LinkStrategy::Grid,
            LinkStrategy::Auto => LinkStrategy::Pairwise,
            other => other,
        }
    }
}

/// Index pairs `(i, j)`, `i < j`, whose points are strictly closer than
/// `distance`, sorted by `i` then `j`. Non-finite points never link.
pub fn find_links(positions: &[Vec2], distance: f64, strategy: LinkStrategy) -> Vec<(usize, usize)> {
    if !(distance.is_finite() && distance > 0.0) {
        return Vec::new();
    }
    match strategy.resolve(positions.len()) {
        LinkStrategy::Grid if grid_fits(positions, distance) => grid_links(positions, distance),
        _ => pairwise_links(positions, distance),
    }
}

fn pairwise_links(positions: &[Vec2], distance: f64) -> Vec<(usize, usize)> {
    let mut links = Vec::new();
    for (i, a) in positions.iter().enumerate() {
        if !a.is_finite() {
            continue;
        }
        for (j, b) in positions.iter().enumerate().skip(i + 1) {
            if b.is_finite() && a.distance(*b) < distance {
                links.push((i, j));
            }
        }
    }
    links
}

/// Whether every finite point maps to a grid cell small enough to index.
fn grid_fits(positions: &[Vec2], distance: f64) -> bool {
    positions
        .iter()
        .filter(|p| p.is_finite())
        .all(|p| (p.x / distance).abs() < MAX_GRID_CELL && (p.y / distance).abs() < MAX_GRID_CELL)
}

fn grid_links(positions: &[Vec2], distance: f64) -> Vec<(usize, usize)> {
    let cell_of = |p: Vec2| ((p.x / distance).floor() as i64, (p.y / distance).floor() as i64);

    let mut cells: HashMap<(i64, i64), Vec<usize>> = HashMap::new();
    for (i, p) in positions.iter().enumerate() {
        if p.is_finite() {
            cells.entry(cell_of(*p)).or_default().push(i);
        }
    }

    let mut links = Vec::new();
    for (i, a) in positions.iter().enumerate() {
        if !a.is_finite() {
            continue;
        }
        let (cx, cy) = cell_of(*a);
        for dx in -1..=1 {
            for dy in -1..=1 {
                let (Some(nx), Some(ny)) = (cx.checked_add(dx), cy.checked_add(dy)) else {
                    continue;
                };
                let Some(bucket) = cells.get(&(nx, ny)) else {
                    continue;
                };
                for &j in bucket {
                    if j > i && a.distance(positions[j]) < distance {
                        links.push((i, j));
                    }
                }
            }
        }
    }
    links.sort_unstable();
    links
}
