//! Fast statistical roughness score.
//!
//! A cheap stand-in for plane fitting where fitting every block would be too
//! costly: grid down-sampling and per-edge gating in the hierarchical search.
//!
//! ```text
//! score = 0.7 · stddev(h) + 0.3 · (max(h) − min(h))
//! ```
//!
//! Lower is flatter. An empty sample is maximally rough (`+inf`), a single
//! sample is perfectly flat (`0`).

use crate::core::GridCoord;
use crate::grid::TerrainGrid;

/// Roughness evaluator over height samples
#[derive(Clone, Copy, Debug, Default)]
pub struct FlatnessEvaluator;

impl FlatnessEvaluator {
    /// Weight of the population standard deviation
    pub const STDDEV_WEIGHT: f64 = 0.7;
    /// Weight of the height range
    pub const RANGE_WEIGHT: f64 = 0.3;

    /// Score a precomputed height list
    pub fn evaluate(heights: &[f64]) -> f64 {
        match heights.len() {
            0 => return f64::INFINITY,
            1 => return 0.0,
            _ => {}
        }

        let n = heights.len() as f64;
        let mean = heights.iter().sum::<f64>() / n;
        let variance = heights.iter().map(|h| (h - mean).powi(2)).sum::<f64>() / n;

        let (min, max) = heights
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &h| {
                (lo.min(h), hi.max(h))
            });

        Self::STDDEV_WEIGHT * variance.sqrt() + Self::RANGE_WEIGHT * (max - min)
    }

    /// Score the passable cells of a `side`-wide square around `center`.
    ///
    /// The square spans `side / 2` cells each way and is clipped to the grid.
    pub fn evaluate_region(grid: &TerrainGrid, center: GridCoord, side: usize) -> f64 {
        Self::evaluate(&grid.heights_around(center, side / 2))
    }
}
