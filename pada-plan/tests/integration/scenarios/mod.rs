//! YAML-based walking scenarios for integration tests
//!
//! Each scenario is defined in a YAML file with:
//! - Synthetic terrain (size, incline, obstacle rectangles)
//! - Initial stance of both feet
//! - Goal cell and expected outcome
//! - Optional planner configuration overrides

mod yaml_tests;
