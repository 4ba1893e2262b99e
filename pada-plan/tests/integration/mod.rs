//! Integration tests for pada-plan
//!
//! Exercises the public API end to end: grid search, hierarchical guides,
//! terrain fitting and multi-step walks driven by YAML scenarios.
//!
//! # Running Tests
//!
//! ```bash
//! # Run all integration tests
//! cargo test --test integration -- --nocapture
//!
//! # Run one walking scenario
//! cargo test --test integration pillar_detour
//! ```

mod harness;
mod scenarios;
mod search;
mod terrain;
mod yaml_config;
mod yaml_runner;

// Re-export for test convenience
pub use harness::{StepRecord, WalkHarness, WalkOutcome, WalkResult};
