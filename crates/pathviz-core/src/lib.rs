//! **pathviz-core**: shared types for the grid search visualizer.
//!
//! This crate provides the value types used across the *pathviz* crates:
//! grid coordinates, run configuration and the cooperative abort token that
//! searches poll between expansion steps.

pub mod config;
pub mod context;
pub mod geom;

pub use config::{DEFAULT_GRID_SIZE, DEFAULT_STEP_DELAY, GridConfig};
pub use context::Context;
pub use geom::Node;
