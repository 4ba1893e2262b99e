//! Terrain stability analysis.
//!
//! - [`FlatnessEvaluator`]: cheap roughness score for down-sampling and gating
//! - [`PlaneFitter`]: greedy supporting-plane fit and stand angle
//! - [`FootholdStabilizer`]: slides a [`Footprint`] toward flatter ground

mod flatness;
mod footprint;
mod plane;
mod stabilizer;

pub use flatness::FlatnessEvaluator;
pub use footprint::Footprint;
pub use plane::{MAX_REFINE_ITERATIONS, Plane, PlaneFitError, PlaneFitter};
pub use stabilizer::{FootholdStabilizer, SLIDE_STEPS, SlideOutcome};
