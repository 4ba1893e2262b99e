//! Foothold stabilizer: slide a footprint toward flatter ground.
//!
//! The slide direction is the horizontal projection of the fitted plane's
//! normal. Shifts of 1..=[`SLIDE_STEPS`] cells are tried along it, then the
//! same shifts against it; the lowest stand angle seen across all trials
//! wins. This is a bounded local search, not a global one.

use log::{debug, trace};

use crate::core::{GridCoord, GridPoint};
use crate::grid::TerrainGrid;

use super::footprint::Footprint;
use super::plane::PlaneFitter;

/// Number of unit shifts tried in each direction
pub const SLIDE_STEPS: i32 = 3;

/// Minimum stand-angle reduction (radians) that counts as an improvement
const IMPROVEMENT_EPS: f64 = 1e-9;

/// Result of a slide attempt
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SlideOutcome {
    /// Footprint was shifted by `offset`; its new stand angle is `stand_angle`
    Modified { offset: GridCoord, stand_angle: f64 },
    /// No trial improved the stand angle; footprint unchanged
    NoModification,
    /// Grid is empty
    NotApplicable,
}

impl SlideOutcome {
    #[inline]
    pub fn is_modified(&self) -> bool {
        matches!(self, SlideOutcome::Modified { .. })
    }
}

/// Shifts footprints along the local slope to reduce their stand angle
pub struct FootholdStabilizer<'a> {
    grid: &'a TerrainGrid,
    fitter: PlaneFitter<'a>,
}

impl<'a> FootholdStabilizer<'a> {
    pub fn new(grid: &'a TerrainGrid) -> Self {
        Self {
            grid,
            fitter: PlaneFitter::new(grid),
        }
    }

    /// Stand angle of a footprint, `None` if it cannot be fitted
    pub fn stand_angle(&self, footprint: &Footprint) -> Option<f64> {
        self.fitter.stand_angle(footprint.cells()).ok()
    }

    /// Try to slide `footprint` onto flatter ground, mutating it in place on success
    pub fn slide(&self, footprint: &mut Footprint) -> SlideOutcome {
        trace!("[Slide] slide: {} cells", footprint.len());

        if self.grid.is_empty() {
            debug!("[Slide] NotApplicable: empty grid");
            return SlideOutcome::NotApplicable;
        }

        let plane = match self.fitter.fit(footprint.cells()) {
            Ok(plane) => plane,
            Err(e) => {
                debug!("[Slide] no modification: {}", e);
                return SlideOutcome::NoModification;
            }
        };

        let base_angle = plane.normal_angle();
        let normal = plane.normal_vector();
        let dir = GridPoint::new(normal.x, normal.y).normalize();
        if dir == GridPoint::ZERO {
            trace!("[Slide] already level");
            return SlideOutcome::NoModification;
        }

        let mut best: Option<(GridCoord, f64)> = None;
        for sign in [1.0, -1.0] {
            for i in 1..=SLIDE_STEPS {
                let offset = (dir * (sign * i as f64)).round();
                if offset == GridCoord::default() {
                    continue;
                }
                let trial = footprint.translated(offset);
                if trial.cells().iter().any(|c| !self.grid.contains(*c)) {
                    continue;
                }
                let Some(angle) = self.stand_angle(&trial) else {
                    continue;
                };
                if best.is_none_or(|(_, a)| angle < a) {
                    best = Some((offset, angle));
                }
            }
        }

        match best {
            Some((offset, stand_angle)) if stand_angle < base_angle - IMPROVEMENT_EPS => {
                trace!(
                    "[Slide] shifted by ({},{}), angle {:.4} -> {:.4}",
                    offset.x, offset.y, base_angle, stand_angle
                );
                footprint.translate(offset);
                SlideOutcome::Modified {
                    offset,
                    stand_angle,
                }
            }
            _ => {
                debug!("[Slide] no improving shift from angle {:.4}", base_angle);
                SlideOutcome::NoModification
            }
        }
    }
}
