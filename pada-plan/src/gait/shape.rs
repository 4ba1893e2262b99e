//! Rectangular sole model.

use crate::core::GridPoint;
use crate::terrain::Footprint;

/// Sampling step used when rasterizing the sole onto the grid
const COVER_STEP: f64 = 0.5;

/// Rectangular sole, `length` along the heading and `width` across it
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FootShape {
    pub length: f64,
    pub width: f64,
}

impl Default for FootShape {
    fn default() -> Self {
        Self {
            length: 5.0,
            width: 3.0,
        }
    }
}

impl FootShape {
    pub fn new(length: f64, width: f64) -> Self {
        Self { length, width }
    }

    /// Whether a point in the sole frame (along, across) lies on the sole
    pub fn contains(&self, along: f64, across: f64) -> bool {
        along.abs() <= self.length / 2.0 && across.abs() <= self.width / 2.0
    }

    /// Grid cells touched by the sole centered at `center` with the given heading
    pub fn cover(&self, center: GridPoint, heading: f64) -> Footprint {
        let along = samples(self.length);
        let across = samples(self.width);
        Footprint::new(along.iter().flat_map(|&l| {
            across
                .iter()
                .map(move |&w| (center + GridPoint::new(l, w).rotate(heading)).round())
        }))
    }

    /// Corners of the sole rectangle in grid space
    pub fn corners(&self, center: GridPoint, heading: f64) -> [GridPoint; 4] {
        let (hl, hw) = (self.length / 2.0, self.width / 2.0);
        [(hl, hw), (hl, -hw), (-hl, -hw), (-hl, hw)]
            .map(|(l, w)| center + GridPoint::new(l, w).rotate(heading))
    }
}

/// Offsets from `-extent/2` to `extent/2` at [`COVER_STEP`] spacing
fn samples(extent: f64) -> Vec<f64> {
    let half = extent.max(0.0) / 2.0;
    let count = ((2.0 * half) / COVER_STEP + 1e-9).floor() as usize;
    (0..=count).map(|k| -half + k as f64 * COVER_STEP).collect()
}
