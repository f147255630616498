//! Tether Core
//!
//! Shared building blocks for the Tether crates: integer geometry used for
//! clip and placement rectangles, hashed collections, logging setup,
//! profiling hooks and configuration.

pub mod alloc;
pub mod config;
pub mod geometry;
pub mod logging;
pub mod profiling;
