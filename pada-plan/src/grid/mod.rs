//! Terrain grid storage and multi-resolution mapping.
//!
//! - [`TerrainGrid`]: read-only cost/height matrix used by every planner stage
//! - [`BlockScale`]: fine cell to coarse block mapping for hierarchical search
//!
//! ## Obstacle convention
//!
//! Terrain sources disagree on how obstacles are encoded (negative heights or
//! `+inf` cost). The grid accepts both and stores every obstacle as
//! [`OBSTACLE`].

mod error;
mod scale;
mod terrain;

pub use error::GridError;
pub use scale::BlockScale;
pub use terrain::{OBSTACLE, TerrainGrid};
