//! Rectangular terrain grid of per-cell traversal cost / height.

use crate::core::{Direction, GridCoord};
use crate::terrain::FlatnessEvaluator;

use super::error::GridError;
use super::scale::BlockScale;

/// Stored value of an impassable cell
pub const OBSTACLE: f64 = f64::INFINITY;

/// Mean magnitude below which a variance window stores its mean instead
const ZERO_MEAN_EPS: f64 = 1e-9;

/// Row-major terrain grid.
///
/// Every passable cell holds a finite nonnegative value that doubles as its
/// traversal cost and its height. Obstacles are stored as [`OBSTACLE`]; both
/// incoming conventions (negative values and `+inf`) are normalized to it on
/// construction.
#[derive(Clone, Debug, PartialEq)]
pub struct TerrainGrid {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl TerrainGrid {
    /// Create a grid with every cell set to `fill`.
    ///
    /// Infallible: a NaN fill yields an all-obstacle grid. Use
    /// [`TerrainGrid::from_rows`] to have NaN input rejected instead.
    pub fn new(rows: usize, cols: usize, fill: f64) -> Self {
        let fill = if fill.is_nan() { OBSTACLE } else { normalize(fill) };
        Self {
            rows,
            cols,
            values: vec![fill; rows * cols],
        }
    }

    /// Build from a row list, normalizing obstacles.
    ///
    /// Fails on ragged rows or NaN cells.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, GridError> {
        let expected = rows.first().map_or(0, Vec::len);
        let mut values = Vec::with_capacity(rows.len() * expected);

        for (r, row) in rows.iter().enumerate() {
            if row.len() != expected {
                return Err(GridError::RaggedRows {
                    row: r,
                    expected,
                    found: row.len(),
                });
            }
            for (c, &v) in row.iter().enumerate() {
                if v.is_nan() {
                    return Err(GridError::NonFiniteValue { row: r, col: c });
                }
                values.push(normalize(v));
            }
        }

        Ok(Self {
            rows: rows.len(),
            cols: expected,
            values,
        })
    }

    /// Overwrite a single cell, normalizing obstacles
    pub fn set_value(&mut self, coord: GridCoord, value: f64) -> Result<(), GridError> {
        if value.is_nan() {
            return Err(GridError::NonFiniteValue {
                row: coord.x.max(0) as usize,
                col: coord.y.max(0) as usize,
            });
        }
        let idx = self.index(coord).ok_or(GridError::OutOfBounds(coord))?;
        self.values[idx] = normalize(value);
        Ok(())
    }

    /// Mark a cell as impassable
    pub fn set_obstacle(&mut self, coord: GridCoord) -> Result<(), GridError> {
        self.set_value(coord, OBSTACLE)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// (rows, cols)
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of cells
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.values.len()
    }

    /// True when the grid has no cells
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Check if a coordinate lies inside the grid
    #[inline]
    pub fn contains(&self, coord: GridCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.rows
            && (coord.y as usize) < self.cols
    }

    #[inline]
    fn index(&self, coord: GridCoord) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.x as usize * self.cols + coord.y as usize)
        } else {
            None
        }
    }

    /// Raw stored value (obstacles read as [`OBSTACLE`])
    #[inline]
    pub fn value(&self, coord: GridCoord) -> Option<f64> {
        self.index(coord).map(|i| self.values[i])
    }

    /// Height of a passable cell; `None` for obstacles and out-of-bounds cells
    #[inline]
    pub fn height(&self, coord: GridCoord) -> Option<f64> {
        self.value(coord).filter(|v| v.is_finite())
    }

    /// True for an in-bounds obstacle cell
    #[inline]
    pub fn is_obstacle(&self, coord: GridCoord) -> bool {
        self.value(coord).is_some_and(|v| v.is_infinite())
    }

    /// In bounds and not an obstacle
    #[inline]
    pub fn edge_allowed(&self, coord: GridCoord) -> bool {
        self.height(coord).is_some()
    }

    /// The 4 neighbors of a cell in [`Direction::ALL`] order, unfiltered
    #[inline]
    pub fn neighbors(&self, coord: GridCoord) -> [(Direction, GridCoord); 4] {
        Direction::ALL.map(|d| (d, coord.step(d)))
    }

    /// Neighbors that pass [`TerrainGrid::edge_allowed`], in direction order
    pub fn valid_neighbors(&self, coord: GridCoord) -> Vec<GridCoord> {
        coord
            .neighbors_4()
            .into_iter()
            .filter(|n| self.edge_allowed(*n))
            .collect()
    }

    /// Cost of stepping from `from` to `to`.
    ///
    /// Manhattan step distance plus the destination's value; infinite when
    /// the destination is an obstacle or outside the grid.
    #[inline]
    pub fn cost(&self, from: GridCoord, to: GridCoord) -> f64 {
        match self.value(to) {
            Some(v) => from.manhattan_distance(&to) as f64 + v,
            None => OBSTACLE,
        }
    }

    /// Iterate all cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (GridCoord, f64)> + '_ {
        let cols = self.cols.max(1);
        self.values.iter().enumerate().map(move |(i, &v)| {
            (GridCoord::new((i / cols) as i32, (i % cols) as i32), v)
        })
    }

    /// Heights of passable cells inside the inclusive rectangle `[min, max]`.
    ///
    /// The rectangle is intersected with the grid.
    pub fn heights_in(&self, min: GridCoord, max: GridCoord) -> Vec<f64> {
        let mut heights = Vec::new();
        for x in min.x.max(0)..=max.x.min(self.rows as i32 - 1) {
            for y in min.y.max(0)..=max.y.min(self.cols as i32 - 1) {
                if let Some(h) = self.height(GridCoord::new(x, y)) {
                    heights.push(h);
                }
            }
        }
        heights
    }

    /// Heights of passable cells within `half` cells of `center` on each axis.
    ///
    /// Half-widths larger than the grid are cut to the grid size.
    pub fn heights_around(&self, center: GridCoord, half: usize) -> Vec<f64> {
        let half = half.min(self.rows.max(self.cols)).min(i32::MAX as usize / 4) as i32;
        let offset = GridCoord::new(half, half);
        self.heights_in(center - offset, center + offset)
    }

    /// Nearest in-bounds coordinate. An empty grid maps everything to the origin.
    pub fn clamp_to_bounds(&self, coord: GridCoord) -> GridCoord {
        if self.is_empty() {
            return GridCoord::default();
        }
        GridCoord::new(
            coord.x.clamp(0, self.rows as i32 - 1),
            coord.y.clamp(0, self.cols as i32 - 1),
        )
    }

    /// Center of the rectangle spanned by two (clamped) corners
    pub fn local_center(&self, a: GridCoord, b: GridCoord) -> GridCoord {
        let a = self.clamp_to_bounds(a);
        let b = self.clamp_to_bounds(b);
        GridCoord::new((a.x + b.x).div_euclid(2), (a.y + b.y).div_euclid(2))
    }

    /// Whether two fine cells fall in the same coarse block
    #[inline]
    pub fn in_same_block(&self, a: GridCoord, b: GridCoord, scale: BlockScale) -> bool {
        scale.block_of(a) == scale.block_of(b)
    }

    /// Map a coarse block back to its clamped fine-corner pair `(min, max)`
    pub fn restore(&self, block: GridCoord, scale: BlockScale) -> (GridCoord, GridCoord) {
        let (lo, hi) = scale.corners(block);
        (self.clamp_to_bounds(lo), self.clamp_to_bounds(hi))
    }

    /// Map a coarse block back to its clamped representative fine cell
    pub fn restore_dot(&self, block: GridCoord, scale: BlockScale) -> GridCoord {
        self.clamp_to_bounds(scale.center_of(block))
    }

    /// Down-sample into a grid of per-block roughness scores.
    ///
    /// Each coarse cell holds the flatness score of a `window_side` square
    /// around its block center. Blocks with no passable cell become obstacles.
    pub fn scale_graph(&self, scale: BlockScale) -> TerrainGrid {
        let (rows, cols) = (scale.coarse_len(self.rows), scale.coarse_len(self.cols));
        let side = scale.window_side();
        let mut values = Vec::with_capacity(rows * cols);

        for i in 0..rows {
            for j in 0..cols {
                let center = self.restore_dot(GridCoord::new(i as i32, j as i32), scale);
                values.push(normalize(FlatnessEvaluator::evaluate_region(
                    self, center, side,
                )));
            }
        }

        TerrainGrid { rows, cols, values }
    }

    /// Down-sample into a grid of per-block height variance.
    ///
    /// The window extends `window_side` cells each way from the block center.
    /// Obstacles are skipped. A window whose mean is (near) zero stores the
    /// mean itself; an all-obstacle window becomes an obstacle.
    pub fn scale_graph_variance(&self, scale: BlockScale) -> TerrainGrid {
        let (rows, cols) = (scale.coarse_len(self.rows), scale.coarse_len(self.cols));
        let half = scale.window_side();
        let mut values = Vec::with_capacity(rows * cols);

        for i in 0..rows {
            for j in 0..cols {
                let center = self.restore_dot(GridCoord::new(i as i32, j as i32), scale);
                let heights = self.heights_around(center, half);
                values.push(window_variance(&heights));
            }
        }

        TerrainGrid { rows, cols, values }
    }
}

/// Fold the negative and `+inf` obstacle conventions into [`OBSTACLE`]
#[inline]
fn normalize(v: f64) -> f64 {
    if v < 0.0 || v.is_infinite() { OBSTACLE } else { v }
}

fn window_variance(heights: &[f64]) -> f64 {
    if heights.is_empty() {
        return OBSTACLE;
    }
    let n = heights.len() as f64;
    let mean = heights.iter().sum::<f64>() / n;
    if mean.abs() < ZERO_MEAN_EPS {
        return mean;
    }
    heights.iter().map(|h| (h - mean).powi(2)).sum::<f64>() / n
}
