//! Biped gait model.
//!
//! Foot geometry, kinematic limits and the checks a swing-foot target must
//! pass before it is committed:
//!
//! - [`FootShape`]: rectangular sole rasterized onto the grid
//! - [`GaitConstraintChecker`]: stride, separation and turn limits
//! - [`ideal_walk`]: candidate offsets swept over stride and separation
//! - [`BipedState`]: which foot supports and which one swings

mod biped;
mod checker;
mod enumerate;
mod limits;
mod shape;

pub use biped::{BipedState, FootPose, Side};
pub use checker::{GaitConstraintChecker, GaitVerdict, SEPARATION_TOLERANCE};
pub use enumerate::{direct_target, ideal_walk};
pub use limits::GaitLimits;
pub use shape::FootShape;
