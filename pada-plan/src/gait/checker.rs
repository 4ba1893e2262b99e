//! Gait constraint checks for a candidate foothold.

use log::trace;

use crate::core::{GridPoint, normalize_angle};

use super::biped::FootPose;
use super::limits::GaitLimits;
use super::shape::FootShape;

/// Slack on the separation window
pub const SEPARATION_TOLERANCE: f64 = 1e-3;

/// Per-constraint verdict for one candidate
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GaitVerdict {
    pub stride_ok: bool,
    pub separation_ok: bool,
    pub turn_ok: bool,
}

impl GaitVerdict {
    /// All constraints satisfied
    #[inline]
    pub fn is_admissible(&self) -> bool {
        self.stride_ok && self.separation_ok && self.turn_ok
    }
}

/// Validates swing-foot targets against the support foot
#[derive(Clone, Debug, PartialEq)]
pub struct GaitConstraintChecker {
    limits: GaitLimits,
    shape: FootShape,
}

impl GaitConstraintChecker {
    pub fn new(limits: GaitLimits, shape: FootShape) -> Self {
        Self { limits, shape }
    }

    #[inline]
    pub fn limits(&self) -> &GaitLimits {
        &self.limits
    }

    #[inline]
    pub fn shape(&self) -> &FootShape {
        &self.shape
    }

    /// Euclidean support-to-candidate distance is at most `max_stride`
    pub fn stride_ok(&self, support: &FootPose, candidate: GridPoint) -> bool {
        support.position.distance(&candidate) <= self.limits.max_stride
    }

    /// Edge clearance between the support centerline and the candidate sole.
    ///
    /// Smallest perpendicular distance from the candidate's corners to the
    /// line through the support foot along its heading, minus half the
    /// support sole width, floored at zero.
    pub fn separation(&self, support: &FootPose, candidate: &FootPose) -> f64 {
        let axis = GridPoint::new(support.heading.cos(), support.heading.sin());
        let nearest = self
            .shape
            .corners(candidate.position, candidate.heading)
            .iter()
            .map(|c| {
                let rel = *c - support.position;
                (axis.x * rel.y - axis.y * rel.x).abs()
            })
            .fold(f64::INFINITY, f64::min);
        (nearest - self.shape.width / 2.0).max(0.0)
    }

    pub fn separation_ok(&self, support: &FootPose, candidate: &FootPose) -> bool {
        let s = self.separation(support, candidate);
        s >= self.limits.min_separation - SEPARATION_TOLERANCE
            && s <= self.limits.max_separation + SEPARATION_TOLERANCE
    }

    /// Absolute angle between the support heading and the step direction.
    ///
    /// A candidate on top of the support foot has no step direction and
    /// reports zero.
    pub fn turn_angle(&self, support: &FootPose, candidate: GridPoint) -> f64 {
        if support.position.distance(&candidate) <= f64::EPSILON {
            return 0.0;
        }
        normalize_angle(support.position.angle_to(&candidate) - support.heading).abs()
    }

    pub fn turn_ok(&self, support: &FootPose, candidate: GridPoint) -> bool {
        self.turn_angle(support, candidate) <= self.limits.max_turn
    }

    /// Run all three checks
    pub fn check(&self, support: &FootPose, candidate: &FootPose) -> GaitVerdict {
        let verdict = GaitVerdict {
            stride_ok: self.stride_ok(support, candidate.position),
            separation_ok: self.separation_ok(support, candidate),
            turn_ok: self.turn_ok(support, candidate.position),
        };
        trace!(
            "[Gait] candidate ({:.1},{:.1}): {:?}",
            candidate.position.x, candidate.position.y, verdict
        );
        verdict
    }
}
