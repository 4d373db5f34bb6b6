//! Shared bootstrap utilities for client front-ends.
//!
//! Provides configuration loading and runtime setup that can be reused by
//! CLI, UI, or other front-end crates.
pub mod builder;
pub mod config;

pub use builder::{ClientSetup, SessionBuilder};
pub use config::ClientConfig;
