//! Core types for the pada-plan footstep planner.
//!
//! - [`GridCoord`] and [`GridPoint`]: integer cells and real-valued sub-cell points
//! - [`Direction`]: fixed 4-connected step encoding
//! - [`Point3`]: a cell lifted to its terrain height
//! - [`CancelToken`]: cooperative cancellation for searches

mod cancel;
pub mod math;
mod point;

pub use cancel::CancelToken;
pub use math::{angle_diff, normalize_angle};
pub use point::{Direction, GridCoord, GridPoint, Point3};
