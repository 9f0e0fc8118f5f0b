//! Regular receptor grids and the concentration fields evaluated on them.

use crate::core_types::units::Ppb;
use crate::core_types::vec2::Vec2;
use serde::{Deserialize, Serialize};

/// Regular 2D grid of receptors.
///
/// Points are stored row-major: index = iy * nx + ix, with
/// `x = origin.x + ix * spacing` and `y = origin.y + iy * spacing`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReceptorGrid {
    /// Position of receptor (0, 0) (m)
    pub origin: Vec2,
    /// Number of columns (x direction)
    pub nx: usize,
    /// Number of rows (y direction)
    pub ny: usize,
    /// Distance between neighbouring receptors (m)
    pub spacing: f64,
}

impl Default for ReceptorGrid {
    fn default() -> Self {
        Self::centered(Vec2::zeros(), 1000.0, 101)
    }
}

impl ReceptorGrid {
    /// Create a grid from its corner, dimensions and spacing.
    #[must_use]
    pub fn new(origin: Vec2, nx: usize, ny: usize, spacing: f64) -> Self {
        Self {
            origin,
            nx,
            ny,
            spacing,
        }
    }

    /// Square grid of `n × n` receptors spanning `extent` metres, centred on `center`.
    #[must_use]
    pub fn centered(center: Vec2, extent: f64, n: usize) -> Self {
        let spacing = if n > 1 { extent / (n - 1) as f64 } else { 0.0 };
        let half = extent / 2.0;
        Self {
            origin: Vec2::new(center.x - half, center.y - half),
            nx: n,
            ny: n,
            spacing,
        }
    }

    /// Total number of receptors.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nx * self.ny
    }

    /// Whether the grid has no receptors.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flattened index of cell `(ix, iy)`.
    #[inline]
    #[must_use]
    pub fn index(&self, ix: usize, iy: usize) -> usize {
        iy * self.nx + ix
    }

    /// Position of receptor `(ix, iy)`.
    #[inline]
    #[must_use]
    pub fn point(&self, ix: usize, iy: usize) -> Vec2 {
        Vec2::new(
            self.origin.x + ix as f64 * self.spacing,
            self.origin.y + iy as f64 * self.spacing,
        )
    }

    /// All receptor positions in row-major order.
    #[must_use]
    pub fn points(&self) -> Vec<Vec2> {
        let mut points = Vec::with_capacity(self.len());
        for iy in 0..self.ny {
            for ix in 0..self.nx {
                points.push(self.point(ix, iy));
            }
        }
        points
    }
}

/// Mixing ratios evaluated over a [`ReceptorGrid`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConcentrationField {
    grid: ReceptorGrid,
    values: Vec<Ppb>,
}

impl ConcentrationField {
    pub(crate) fn new(grid: ReceptorGrid, values: Vec<Ppb>) -> Self {
        debug_assert_eq!(grid.len(), values.len());
        Self { grid, values }
    }

    /// Grid geometry the field was evaluated on.
    #[must_use]
    pub fn grid(&self) -> &ReceptorGrid {
        &self.grid
    }

    /// Row-major values.
    #[must_use]
    pub fn values(&self) -> &[Ppb] {
        &self.values
    }

    /// Value at cell `(ix, iy)`, or `None` outside the grid.
    #[must_use]
    pub fn get(&self, ix: usize, iy: usize) -> Option<Ppb> {
        if ix >= self.grid.nx || iy >= self.grid.ny {
            return None;
        }
        self.values.get(self.grid.index(ix, iy)).copied()
    }

    /// Largest value and its cell, or `None` for an empty grid.
    #[must_use]
    pub fn max(&self) -> Option<(usize, usize, Ppb)> {
        self.values
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.cmp(b.1))
            .map(|(i, &v)| (i % self.grid.nx, i / self.grid.nx, v))
    }

    /// Number of receptors with a strictly positive value.
    #[must_use]
    pub fn covered_cells(&self) -> usize {
        self.values.iter().filter(|v| v.value() > 0.0).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_layout() {
        let grid = ReceptorGrid::new(Vec2::new(-10.0, 5.0), 3, 2, 2.5);
        let points = grid.points();
        assert_eq!(points.len(), 6);
        assert_eq!(points[grid.index(2, 1)], Vec2::new(-5.0, 7.5));
        assert_eq!(points[1], Vec2::new(-7.5, 5.0));
    }

    #[test]
    fn test_centered_grid_spans_extent() {
        let grid = ReceptorGrid::centered(Vec2::new(100.0, 0.0), 200.0, 5);
        assert_eq!(grid.spacing, 50.0);
        assert_eq!(grid.point(0, 0), Vec2::new(0.0, -100.0));
        assert_eq!(grid.point(4, 4), Vec2::new(200.0, 100.0));
        assert_eq!(grid.point(2, 2), Vec2::new(100.0, 0.0));
    }

    #[test]
    fn test_field_max_and_lookup() {
        let grid = ReceptorGrid::new(Vec2::zeros(), 2, 2, 1.0);
        let field = ConcentrationField::new(
            grid,
            vec![Ppb::new(0.0), Ppb::new(3.0), Ppb::new(1.0), Ppb::new(0.0)],
        );
        assert_eq!(field.max(), Some((1, 0, Ppb::new(3.0))));
        assert_eq!(field.get(0, 1), Some(Ppb::new(1.0)));
        assert_eq!(field.get(2, 0), None);
        assert_eq!(field.covered_cells(), 2);
    }
}
