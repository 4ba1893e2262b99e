//! Kinematic gait limits.

/// Reach and posture limits of one step, in grid cells and radians
#[derive(Clone, Debug, PartialEq)]
pub struct GaitLimits {
    /// Longest allowed support-to-swing distance
    pub max_stride: f64,
    /// Largest allowed deviation of the step direction from the support heading
    pub max_turn: f64,
    /// Minimum edge clearance between the feet
    pub min_separation: f64,
    /// Maximum edge clearance between the feet
    pub max_separation: f64,
    /// Sampling step for candidate enumeration
    pub scan_step: f64,
    /// Steepest stand angle accepted for a foothold
    pub max_stand_angle: f64,
}

impl Default for GaitLimits {
    fn default() -> Self {
        Self {
            max_stride: 40.0,
            max_turn: 75f64.to_radians(),
            min_separation: 2.0,
            max_separation: 10.0,
            scan_step: 0.5,
            max_stand_angle: 30f64.to_radians(),
        }
    }
}
