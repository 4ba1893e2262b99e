//! Unified configuration loading for the footstep planner.
//!
//! Loads all configuration from a single YAML file.

mod blending;
mod defaults;
mod error;
mod gait;
mod planner;
mod search;

// Re-export main types
pub use error::ConfigLoadError;
pub use planner::{DEFAULT_CONFIG_PATH, PlannerConfig};

// Re-export section types
pub use blending::{BlendingSection, DecayKind};
pub use gait::GaitSection;
pub use search::SearchSection;
