//! Guide path blending.
//!
//! Reduces an ordered guide list to one look-ahead point,
//! `Σ wᵢ · guideᵢ`, with decay weights that sum to 1 and grow toward the
//! end of the list (the last guide point gets the largest weight).
//!
//! - [`Decay::Geometric`]: `wᵢ ∝ ratio^(n-1-i)` normalized by the geometric sum
//! - [`Decay::Square`]: `wᵢ ∝ (i+1)²` normalized by `1² + … + n²`

use thiserror::Error;

use crate::core::math::{geometric_sum, square_sum};
use crate::core::{GridCoord, GridPoint};

/// Blending configuration errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BlendError {
    #[error("geometric decay ratio must be in (0, 1), got {0}")]
    InvalidDecayRatio(f64),
}

/// Weight decay series
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Decay {
    /// Each step back from the last element multiplies the weight by `ratio`
    Geometric { ratio: f64 },
    /// Weight grows with the square of the 1-based rank
    Square,
}

/// Blends guide points into a single smoothed step target
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionBlender {
    decay: Decay,
}

impl Default for DirectionBlender {
    fn default() -> Self {
        Self {
            decay: Decay::Geometric { ratio: 1.0 / 3.0 },
        }
    }
}

impl DirectionBlender {
    /// Validate and wrap a decay series
    pub fn new(decay: Decay) -> Result<Self, BlendError> {
        if let Decay::Geometric { ratio } = decay {
            if !(ratio > 0.0 && ratio < 1.0) {
                return Err(BlendError::InvalidDecayRatio(ratio));
            }
        }
        Ok(Self { decay })
    }

    pub fn geometric(ratio: f64) -> Result<Self, BlendError> {
        Self::new(Decay::Geometric { ratio })
    }

    pub fn square() -> Self {
        Self {
            decay: Decay::Square,
        }
    }

    #[inline]
    pub fn decay(&self) -> Decay {
        self.decay
    }

    /// Normalized weights for `n` guide points, first to last
    pub fn weights(&self, n: usize) -> Vec<f64> {
        match self.decay {
            Decay::Geometric { ratio } => {
                let total = geometric_sum(1.0, ratio, n);
                (0..n)
                    .map(|i| ratio.powi((n - 1 - i) as i32) / total)
                    .collect()
            }
            Decay::Square => {
                let total = square_sum(n);
                (1..=n).map(|r| (r * r) as f64 / total).collect()
            }
        }
    }

    /// Weighted sum of the guide points; the origin for an empty list
    pub fn blend(&self, guides: &[GridPoint]) -> GridPoint {
        self.weights(guides.len())
            .into_iter()
            .zip(guides)
            .fold(GridPoint::ZERO, |acc, (w, p)| acc + *p * w)
    }

    /// [`DirectionBlender::blend`] over grid cells
    pub fn blend_coords(&self, guides: &[GridCoord]) -> GridPoint {
        let points: Vec<GridPoint> = guides.iter().map(|c| c.to_point()).collect();
        self.blend(&points)
    }

    /// Heading from `at` toward the blended point.
    ///
    /// `None` when there are no guides or the blend coincides with `at`.
    pub fn heading_from(&self, at: GridPoint, guides: &[GridPoint]) -> Option<f64> {
        if guides.is_empty() {
            return None;
        }
        let target = self.blend(guides);
        if at.distance(&target) <= f64::EPSILON {
            return None;
        }
        Some(at.angle_to(&target))
    }
}
